use crate::common::{Message, SessionEvent};
use crate::store::{ConversationAction, ConversationState, IdentityAction, Store, UserIdentity};

use super::notifications::Notifications;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Connect prompt when logged out, chat otherwise.
    #[default]
    Home,
    Profile,
}

/// Local UI state. Holds no egui types so it can be driven from tests.
pub struct AppState {
    pub identity: Store<UserIdentity>,
    pub conversations: Store<ConversationState>,
    /// Set while a connect is in flight; gates the connect button.
    pub is_connecting: bool,
    pub route: Route,
    pub notifications: Notifications,
    pub input_text: String,
    pub friend_input: String,
}

impl AppState {
    pub fn new(seen_message_capacity: usize, toast_seconds: u64) -> Self {
        Self {
            identity: Store::default(),
            conversations: Store::new(ConversationState::with_seen_capacity(seen_message_capacity)),
            is_connecting: false,
            route: Route::Home,
            notifications: Notifications::new(toast_seconds),
            input_text: String::new(),
            friend_input: String::new(),
        }
    }

    pub fn is_logged(&self) -> bool {
        self.identity.state().is_logged
    }

    /// Marks a connect attempt as started. False when one is already running.
    pub fn begin_connect(&mut self) -> bool {
        if self.is_connecting {
            return false;
        }
        self.is_connecting = true;
        true
    }

    /// The connect command never reached the session.
    pub fn abort_connect(&mut self, reason: impl Into<String>) {
        self.is_connecting = false;
        self.notifications.error(reason);
    }

    pub fn apply_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Connected { address, balance } => {
                self.is_connecting = false;
                self.notifications.success(format!("Connected as {address}"));
                self.identity.dispatch(IdentityAction::Login(address));
                if let Some(balance) = balance {
                    self.identity.dispatch(IdentityAction::SetBalance(balance));
                }
                self.route = Route::Home;
            }
            SessionEvent::ConnectFailed(reason) => {
                self.is_connecting = false;
                self.notifications.error(reason);
            }
            SessionEvent::Disconnected => {
                log::debug!("Wallet session confirmed disconnect");
            }
            SessionEvent::BalanceUpdated(balance) => {
                self.identity.dispatch(IdentityAction::SetBalance(balance));
            }
            SessionEvent::BalanceFailed(reason) => self.notifications.error(reason),
            SessionEvent::MessageReceived(message) => self
                .conversations
                .dispatch(ConversationAction::Inbound(message)),
        }
    }

    /// Local logout; does not wait for the session.
    pub fn disconnect(&mut self) {
        self.identity.dispatch(IdentityAction::Logout);
        self.route = Route::Home;
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    pub fn select_peer(&mut self, peer_id: impl Into<String>) {
        self.conversations
            .dispatch(ConversationAction::SelectPeer(peer_id.into()));
    }

    pub fn add_friend(&mut self, peer_id: impl Into<String>) {
        self.conversations
            .dispatch(ConversationAction::AddFriend(peer_id.into()));
    }

    pub fn remove_friend(&mut self, peer_id: impl Into<String>) {
        self.conversations
            .dispatch(ConversationAction::RemoveFriend(peer_id.into()));
    }

    /// Optimistically records a message to the selected peer. Nothing is
    /// sent anywhere yet.
    pub fn send_message(&mut self, body: String) -> bool {
        let peer_id = self.conversations.state().selected_peer().to_string();
        if peer_id.is_empty() {
            self.notifications.warning("Select a conversation first");
            return false;
        }

        let sender = self.identity.state().address.clone();
        let message = Message::now(sender, body);
        self.conversations
            .dispatch(ConversationAction::Outbound { message, peer_id });
        true
    }
}

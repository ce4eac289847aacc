use tokio::sync::mpsc;

use crate::common::{SessionEvent, WalletCommand};
use crate::config::AppConfig;
use crate::wallet::ChainConfig;

use super::components::{
    chat_area, connect_prompt, input_bar,
    navbar::{self, NavAction, NavState},
    profile::{self, ProfileAction},
    sidebar::{self, SidebarActions},
    toasts,
};
use super::state::{AppState, Route};

pub struct ChatApp {
    state: AppState,
    chain: ChainConfig,
    command_sender: mpsc::Sender<WalletCommand>,
    event_receiver: mpsc::Receiver<SessionEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        command_sender: mpsc::Sender<WalletCommand>,
        event_receiver: mpsc::Receiver<SessionEvent>,
    ) -> Self {
        let mut app = Self {
            state: AppState::new(config.seen_message_capacity, config.toast_seconds),
            chain: config.chain(),
            command_sender,
            event_receiver,
        };

        if config.auto_connect {
            app.connect_wallet();
        }
        app
    }

    fn handle_session_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn send_command(&mut self, command: WalletCommand) -> bool {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to wallet session: {err}");
            return false;
        }
        true
    }

    fn connect_wallet(&mut self) {
        if !self.state.begin_connect() {
            return;
        }
        if !self.send_command(WalletCommand::Connect) {
            self.state.abort_connect("Wallet session is not running");
        }
    }

    fn disconnect_wallet(&mut self) {
        self.state.disconnect();
        self.send_command(WalletCommand::Disconnect);
    }

    fn handle_nav_action(&mut self, action: NavAction) {
        match action {
            NavAction::Home => self.state.navigate(Route::Home),
            NavAction::Connect => self.connect_wallet(),
            NavAction::Disconnect => self.disconnect_wallet(),
            NavAction::OpenProfile => self.state.navigate(Route::Profile),
        }
    }

    fn handle_sidebar_actions(&mut self, actions: SidebarActions) {
        if let Some(peer_id) = actions.add_friend {
            self.state.add_friend(peer_id);
        }
        if let Some(peer_id) = actions.remove_friend {
            self.state.remove_friend(peer_id);
        }
        if let Some(peer_id) = actions.select_peer {
            self.state.select_peer(peer_id);
        }
    }

    fn render_home(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("friend_sidebar")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                let actions = sidebar::render(ui, &mut self.state);
                self.handle_sidebar_actions(actions);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let conversations = self.state.conversations.state();
            let peer_id = conversations.selected_peer().to_string();
            chat_area::render(ui, &peer_id, conversations.messages_for(&peer_id));

            ui.separator();
            if let Some(body) = input_bar::render(ui, &mut self.state.input_text, !peer_id.is_empty()) {
                self.state.send_message(body);
            }
        });
    }

    fn render_profile(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let currency = &self.chain.native_currency.symbol;
            let tracked = self.state.conversations.state().seen_count();
            let action = profile::render(ui, self.state.identity.state(), currency, tracked);
            match action {
                Some(ProfileAction::RefreshBalance) => {
                    self.send_command(WalletCommand::RefreshBalance);
                }
                Some(ProfileAction::Back) => self.state.navigate(Route::Home),
                None => {}
            }
        });
    }

    fn render_connect_prompt(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            connect_prompt::render(ui, self.state.is_connecting, &self.chain.chain_name);
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_session_events();

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            let nav = NavState::from_state(&self.state);
            if let Some(action) = navbar::render(ui, &nav) {
                self.handle_nav_action(action);
            }
        });

        match (self.state.is_logged(), self.state.route) {
            (false, _) => self.render_connect_prompt(ctx),
            (true, Route::Home) => self.render_home(ctx),
            (true, Route::Profile) => self.render_profile(ctx),
        }

        toasts::render(ctx, &mut self.state.notifications);

        ctx.request_repaint();
    }
}

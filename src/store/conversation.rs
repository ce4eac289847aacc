use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use sha2::{Digest, Sha256};

use super::Reducer;
use crate::common::Message;

/// Messages kept per peer; older ones fall off the end.
pub const MAX_MESSAGES_PER_PEER: usize = 10;

/// Unbounded unless configured; every hash ever seen is kept.
pub const DEFAULT_SEEN_CAPACITY: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationAction {
    SelectPeer(String),
    Inbound(Message),
    Outbound { message: Message, peer_id: String },
    AddFriend(String),
    RemoveFriend(String),
}

/// Per-peer message history, friend list and the active conversation.
#[derive(Debug, Clone)]
pub struct ConversationState {
    messages: HashMap<String, Vec<Message>>,
    seen: HashSet<String>,
    /// Insertion order of `seen`, oldest at the front. Only kept when bounded.
    seen_order: VecDeque<String>,
    /// 0 disables eviction.
    seen_capacity: usize,
    friends: BTreeSet<String>,
    selected_peer: String,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::with_seen_capacity(DEFAULT_SEEN_CAPACITY)
    }
}

/// Content hash used to drop duplicate deliveries: SHA-256 over the sender
/// followed by the decimal timestamp, hex encoded.
pub fn message_hash(message: &Message) -> String {
    let mut hasher = Sha256::new();
    hasher.update(message.sender_name.as_bytes());
    hasher.update(message.created_at.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

impl ConversationState {
    pub fn with_seen_capacity(seen_capacity: usize) -> Self {
        Self {
            messages: HashMap::new(),
            seen: HashSet::new(),
            seen_order: VecDeque::new(),
            seen_capacity,
            friends: BTreeSet::new(),
            selected_peer: String::new(),
        }
    }

    pub fn set_selected_peer(mut self, peer_id: impl Into<String>) -> Self {
        self.selected_peer = peer_id.into();
        self
    }

    /// Adds a received message under its sender. A message whose hash was
    /// already seen leaves the state untouched.
    pub fn add_inbound_message(mut self, message: Message) -> Self {
        let hash = message_hash(&message);
        if self.seen.contains(&hash) {
            log::debug!("Dropping duplicate message from {}", message.sender_name);
            return self;
        }

        let peer_id = message.sender_name.clone();
        self.prepend(peer_id, message);
        self.remember(hash);
        self
    }

    /// Adds a locally sent message to `peer_id`'s history without any
    /// duplicate check.
    pub fn add_outbound_message(mut self, message: Message, peer_id: impl Into<String>) -> Self {
        self.prepend(peer_id.into(), message);
        self
    }

    pub fn add_friend(mut self, peer_id: impl Into<String>) -> Self {
        self.friends.insert(peer_id.into());
        self
    }

    pub fn remove_friend(mut self, peer_id: &str) -> Self {
        self.friends.remove(peer_id);
        self
    }

    pub fn messages_for(&self, peer_id: &str) -> &[Message] {
        self.messages
            .get(peer_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Peers with at least one message, sorted.
    pub fn peers(&self) -> Vec<&str> {
        let mut peers: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        peers.sort_unstable();
        peers
    }

    pub fn friends(&self) -> impl Iterator<Item = &str> {
        self.friends.iter().map(String::as_str)
    }

    pub fn is_friend(&self, peer_id: &str) -> bool {
        self.friends.contains(peer_id)
    }

    pub fn selected_peer(&self) -> &str {
        &self.selected_peer
    }

    #[cfg(test)]
    pub fn has_seen(&self, message: &Message) -> bool {
        self.seen.contains(&message_hash(message))
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    fn prepend(&mut self, peer_id: String, message: Message) {
        let history = self.messages.entry(peer_id).or_default();
        history.insert(0, message);
        history.truncate(MAX_MESSAGES_PER_PEER);
    }

    fn remember(&mut self, hash: String) {
        if self.seen_capacity == 0 {
            self.seen.insert(hash);
            return;
        }

        self.seen.insert(hash.clone());
        self.seen_order.push_back(hash);
        while self.seen_order.len() > self.seen_capacity {
            if let Some(oldest) = self.seen_order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
    }
}

impl Reducer for ConversationState {
    type Action = ConversationAction;

    fn reduce(self, action: ConversationAction) -> Self {
        match action {
            ConversationAction::SelectPeer(peer_id) => self.set_selected_peer(peer_id),
            ConversationAction::Inbound(message) => self.add_inbound_message(message),
            ConversationAction::Outbound { message, peer_id } => {
                self.add_outbound_message(message, peer_id)
            }
            ConversationAction::AddFriend(peer_id) => self.add_friend(peer_id),
            ConversationAction::RemoveFriend(peer_id) => self.remove_friend(&peer_id),
        }
    }
}

pub mod conversation;
pub mod identity;

pub use conversation::{ConversationAction, ConversationState};
pub use identity::{IdentityAction, UserIdentity};

/// State that changes only by folding actions into a new snapshot.
pub trait Reducer: Sized {
    type Action;

    fn reduce(self, action: Self::Action) -> Self;
}

/// Owned container for a reducer-driven state value.
#[derive(Debug, Default)]
pub struct Store<S> {
    state: S,
}

impl<S: Reducer + Default> Store<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn dispatch(&mut self, action: S::Action) {
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(action);
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

//! Observable holder for [`ViewState`].

use super::{reduce, Action, ViewState};

/// Callback run after every dispatch with the new state.
pub type Listener = Box<dyn FnMut(&ViewState)>;

/// Handle returned by [`StateContainer::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the [`ViewState`] and is its only writer.
///
/// # Example
///
/// ```ignore
/// use postboard::state::{Action, StateContainer};
///
/// let mut container = StateContainer::new();
/// let id = container.subscribe(Box::new(|state| println!("{:?}", state.screen())));
/// container.dispatch(Action::ViewToggled);
/// container.unsubscribe(id);
/// ```
pub struct StateContainer {
    state: ViewState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl StateContainer {
    pub fn new() -> Self {
        Self::with_state(ViewState::default())
    }

    pub fn with_state(state: ViewState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Register a listener; it is not called for the current state.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Apply `action` and notify listeners in subscription order.
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl Default for StateContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateContainer")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

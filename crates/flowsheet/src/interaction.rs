//! Hover/highlight state for one rendering instance.

use log::trace;

use flowsheet_core::identifier::Id;

/// The node currently under the pointer, if any.
///
/// Each renderer owns its own state; it is never shared or persisted. A new
/// state starts with nothing highlighted and can be entered and left any
/// number of times.
///
/// ```
/// # use flowsheet::InteractionState;
/// # use flowsheet::identifier::Id;
/// let mut state = InteractionState::new();
/// assert_eq!(state.highlighted(), None);
///
/// state.pointer_enter(Id::new("clarifier"));
/// assert!(state.is_highlighted(Id::new("clarifier")));
///
/// state.pointer_leave();
/// assert_eq!(state.highlighted(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    highlighted: Option<Id>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as the highlighted node, replacing any previous one.
    pub fn pointer_enter(&mut self, id: Id) {
        trace!(node_id = id.as_string(); "Pointer entered node");
        self.highlighted = Some(id);
    }

    /// Clears the highlight.
    pub fn pointer_leave(&mut self) {
        if let Some(id) = self.highlighted.take() {
            trace!(node_id = id.as_string(); "Pointer left node");
        }
    }

    pub fn highlighted(&self) -> Option<Id> {
        self.highlighted
    }

    pub fn is_highlighted(&self, id: Id) -> bool {
        self.highlighted == Some(id)
    }
}

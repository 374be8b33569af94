//! Hover selection shared by the map and the charts.

use super::records::StateKey;

/// `Idle` until a map region is hovered; `Focused` while one is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Focused(StateKey),
}

impl Selection {
    pub fn selected(&self) -> Option<&StateKey> {
        match self {
            Selection::Idle => None,
            Selection::Focused(state) => Some(state),
        }
    }

    pub fn is_selected(&self, state: &StateKey) -> bool {
        self.selected() == Some(state)
    }

    /// Pointer entered region `state`. Moves straight between regions without passing Idle.
    pub fn hover_enter(&mut self, state: StateKey) {
        *self = Selection::Focused(state);
    }

    /// Pointer left region `state`. A leave for a region other than the focused one is
    /// stale (its enter was already superseded) and changes nothing.
    pub fn hover_exit(&mut self, state: &StateKey) {
        if self.is_selected(state) {
            *self = Selection::Idle;
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }
}

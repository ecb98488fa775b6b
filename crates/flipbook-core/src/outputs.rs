//! Output contracts from the engine.
//!
//! A TurnResult describes everything one executed turn changed, so the
//! bindings layer can apply visual state and notify the user callback
//! without re-deriving anything.

use serde::{Deserialize, Serialize};

use crate::inputs::Direction;
use crate::page::Page;

/// Whether the book currently rests at a terminal cover. Only a closable
/// book ever sets these.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CoverState {
    pub at_front: bool,
    pub at_back: bool,
}

/// Description of one executed turn, produced after the state mutation is
/// complete (cover flags included), so callbacks observe final state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnResult {
    pub direction: Direction,
    /// Newly active sequence indices.
    pub active: Vec<usize>,
    /// Indices that were active before the turn (now flagged was-active).
    pub previously_active: Vec<usize>,
    /// Indices flagged is-animating for this turn; empty on hosts without
    /// smooth 3-D transforms.
    pub animating: Vec<usize>,
    pub cover: CoverState,
    /// True on the turn that cancelled the decorative callout.
    pub callout_cancelled: bool,
    /// Full snapshot of the sequence, covers included.
    pub pages: Vec<Page>,
}

/// Transient flags cleared by a transition-finished notification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCleanup {
    /// Indices whose is-animating flag was cleared by this notification.
    pub animating: Vec<usize>,
    /// Indices whose was-active flag was cleared.
    pub was_active: Vec<usize>,
}

impl TransitionCleanup {
    pub fn is_empty(&self) -> bool {
        self.animating.is_empty() && self.was_active.is_empty()
    }
}

//! Navigation intents and input-mapping helpers.
//!
//! The bindings layer owns the actual event sources (clicks, keydown,
//! transitionend) and translates them into typed intents through the
//! helpers here; the engine itself consumes nothing but `Intent`.

use serde::{Deserialize, Serialize};

use crate::capabilities::EnvCaps;
use crate::page::Page;

/// A navigation request.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    Forward,
    Back,
    /// Jump to a sequence index (covers included); parity is resolved to a
    /// left/right pair by the engine.
    JumpTo(usize),
}

/// Resolved direction of an executed turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Back,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Map an arrow key to an intent. Hosts without smooth 3-D transforms render
/// the book mirrored, so the mapping inverts.
pub fn intent_for_key(key: ArrowKey, caps: &EnvCaps) -> Intent {
    let forward_key = if caps.smooth_3d {
        ArrowKey::Right
    } else {
        ArrowKey::Left
    };
    if key == forward_key {
        Intent::Forward
    } else {
        Intent::Back
    }
}

/// Map a click on a page to an intent: right-hand pages (even sequence
/// index) turn forward, left-hand ones turn back. Hidden covers are not
/// clickable. Holds for both closable and cover-padded sequences.
pub fn intent_for_page_click(index: usize, pages: &[Page]) -> Option<Intent> {
    let page = pages.get(index)?;
    if !page.is_content() {
        return None;
    }
    Some(if index % 2 == 0 {
        Intent::Forward
    } else {
        Intent::Back
    })
}

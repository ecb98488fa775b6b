//! Engine: page-sequence ownership and the page-turn state machine.
//!
//! Methods: new, is_first_page/is_last_page, turn (guards → target
//! resolution → state mutation → TurnResult), transition_finished, callout
//! control, resync. Everything is synchronous and runs to completion; the
//! `&mut self` receivers enforce the no-reentrancy contract.

use crate::capabilities::EnvCaps;
use crate::config::BookConfig;
use crate::inputs::{Direction, Intent};
use crate::outputs::{CoverState, TransitionCleanup, TurnResult};
use crate::page::{build_sequence, Page};

/// Callout lifecycle: armed by `initial_call`, cancelled permanently by the
/// first executed turn (or an explicit cancel).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CalloutPhase {
    Disabled,
    Armed,
    Cancelled,
}

/// Bookkeeping for the most recent executed turn, consumed by
/// transition-finished notifications.
#[derive(Clone, Debug, Default)]
struct LastTurn {
    animating: Vec<usize>,
    was_active: Vec<usize>,
}

/// The page-turn engine. Owns the ordered sequence (covers included), the
/// active spread, and the cover flags; mutated only by `turn`,
/// `transition_finished`, the callout setters, and `resync`.
#[derive(Debug)]
pub struct Engine {
    cfg: BookConfig,
    caps: EnvCaps,
    pages: Vec<Page>,
    cover: CoverState,
    callout: CalloutPhase,
    last_turn: LastTurn,
}

impl Engine {
    /// Build a book over `page_count` content pages. Degenerate books (zero
    /// or one page) construct fine; navigation on them is a no-op.
    pub fn new(page_count: usize, cfg: BookConfig, caps: EnvCaps) -> Self {
        let mut pages = build_sequence(page_count, cfg.can_close);
        let mut cover = CoverState::default();

        // Turns always target an even-left/right pair.
        let initial = cfg.initial_active_page & !1;

        if cfg.can_close {
            if cfg.initial_active_page == 0 {
                if let Some(first) = pages.first_mut() {
                    first.is_active = true;
                    cover.at_front = true;
                }
            } else {
                for idx in [initial, initial + 1] {
                    if let Some(p) = pages.get_mut(idx) {
                        p.is_active = true;
                    }
                }
            }
        } else {
            // Content page c sits at sequence index c + 1 behind the
            // prepended hidden cover.
            for c in [initial, initial + 1] {
                if c < page_count {
                    pages[c + 1].is_active = true;
                }
            }
        }

        let callout = if cfg.initial_call {
            CalloutPhase::Armed
        } else {
            CalloutPhase::Disabled
        };

        Self {
            cfg,
            caps,
            pages,
            cover,
            callout,
            last_turn: LastTurn::default(),
        }
    }

    pub fn config(&self) -> &BookConfig {
        &self.cfg
    }

    pub fn capabilities(&self) -> EnvCaps {
        self.caps
    }

    /// Full sequence, covers included.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn cover(&self) -> CoverState {
        self.cover
    }

    /// Sequence indices currently active, in ascending order.
    pub fn active_pages(&self) -> Vec<usize> {
        self.pages
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.index)
            .collect()
    }

    /// Sequence indices currently mid-animation.
    pub fn animating_pages(&self) -> Vec<usize> {
        self.pages
            .iter()
            .filter(|p| p.is_animating)
            .map(|p| p.index)
            .collect()
    }

    /// True iff the lowest active index is the start of the sequence.
    pub fn is_first_page(&self) -> bool {
        self.pages.iter().find(|p| p.is_active).map(|p| p.index) == Some(0)
    }

    /// True iff the highest active index is the end of the sequence.
    pub fn is_last_page(&self) -> bool {
        self.pages
            .iter()
            .rev()
            .find(|p| p.is_active)
            .is_some_and(|p| p.index + 1 == self.pages.len())
    }

    /// Record a host-driven transition on `page`; such pages count against
    /// the animation budget like engine-driven ones.
    pub fn mark_animating(&mut self, page: usize) {
        if let Some(p) = self.pages.get_mut(page) {
            p.is_animating = true;
        }
    }

    /// Execute one navigation intent. Returns `None` for every refused or
    /// out-of-range request: state is untouched and no callback should fire.
    ///
    /// Order within one call is fixed: guards → target resolution → state
    /// mutation (cover flags included) → result. Adapters invoke the user
    /// callback only after this returns, so callbacks observe final state.
    pub fn turn(&mut self, intent: Intent) -> Option<TurnResult> {
        let previously_active = self.active_pages();
        let &active_left = previously_active.first()?;
        let active_right = active_left + 1;
        let len = self.pages.len();

        // Weak renderers refuse turns while several transitions are still
        // in flight.
        if (!self.caps.smooth_3d || !self.caps.preserve_3d) && self.animating_pages().len() > 2 {
            return None;
        }

        let first_navigable = if self.cfg.can_close { 0 } else { 1 };
        let last_navigable = if self.cfg.can_close {
            len - 1
        } else {
            len.saturating_sub(2)
        };
        match intent {
            Intent::Back if active_left <= first_navigable => return None,
            Intent::Forward if active_right >= last_navigable => return None,
            _ => {}
        }

        // Signed arithmetic: jump resolution can step past either end of
        // the sequence before the range check below.
        let (direction, mut target, mut sibling) = match intent {
            Intent::Forward => (
                Direction::Forward,
                active_right as isize + 1,
                active_right as isize + 2,
            ),
            Intent::Back => (
                Direction::Back,
                active_left as isize - 1,
                active_left as isize - 2,
            ),
            Intent::JumpTo(n) => {
                let n = n as isize;
                let is_right = if self.cfg.can_close {
                    n & 1 == 1
                } else {
                    n & 1 == 0
                };
                let target_right = if is_right { n } else { n + 1 };
                let target_left = target_right - 1;
                if target_left == active_left as isize {
                    // Already there, whatever the requested parity.
                    return None;
                }
                if target_left > active_right as isize {
                    (Direction::Forward, target_left, target_left + 1)
                } else {
                    (Direction::Back, target_right, target_right - 1)
                }
            }
        };

        // Opening off the very first spread lands on {1,2} rather than
        // skipping a position.
        if direction == Direction::Forward && target == 2 {
            target = 1;
            sibling = 2;
        }

        if target < 0 || target as usize >= len {
            return None;
        }
        let target = target as usize;
        let sibling_idx = (sibling >= 0 && (sibling as usize) < len).then_some(sibling as usize);

        for &i in &previously_active {
            let p = &mut self.pages[i];
            p.is_active = false;
            p.was_active = true;
        }
        self.pages[target].is_active = true;
        if let Some(s) = sibling_idx {
            self.pages[s].is_active = true;
        }

        // The outgoing page is the old left when turning back, the old
        // right when turning forward; absent at a cover singleton.
        let outgoing = match direction {
            Direction::Back => previously_active.first().copied(),
            Direction::Forward => previously_active.get(1).copied(),
        };
        let mut animating = Vec::new();
        if self.caps.smooth_3d {
            animating.push(target);
            if let Some(o) = outgoing {
                if o != target {
                    animating.push(o);
                }
            }
            for &i in &animating {
                self.pages[i].is_animating = true;
            }
        }
        self.last_turn = LastTurn {
            animating: animating.clone(),
            was_active: previously_active.clone(),
        };

        if self.cfg.can_close {
            // The landed pair decides the cover flags: its last member
            // carrying is_first means the book closed on the front, its
            // first member carrying is_last means it closed on the back.
            let first_is_last = self.pages[target].is_last;
            let last_is_first = match sibling_idx {
                Some(s) => self.pages[s].is_first,
                None if sibling == -1 => self.pages[target].is_first,
                None => false,
            };
            self.cover = match direction {
                Direction::Back if last_is_first => CoverState {
                    at_front: true,
                    at_back: false,
                },
                Direction::Forward if first_is_last => CoverState {
                    at_front: false,
                    at_back: true,
                },
                _ => CoverState::default(),
            };
        }

        let callout_cancelled = self.callout == CalloutPhase::Armed;
        if callout_cancelled {
            self.cancel_callout();
        }

        Some(TurnResult {
            direction,
            active: self.active_pages(),
            previously_active,
            animating,
            cover: self.cover,
            callout_cancelled,
            pages: self.pages.clone(),
        })
    }

    /// Clear transient flags once the host reports a finished visual
    /// transition for `page`. A notification for a page involved in the
    /// most recent turn clears that whole turn's bookkeeping; anything else
    /// clears only the page's own flags. Repeated or stale notifications
    /// are harmless.
    pub fn transition_finished(&mut self, page: usize) -> TransitionCleanup {
        let mut cleanup = TransitionCleanup::default();
        if self.last_turn.animating.contains(&page) {
            let animating = self.last_turn.animating.clone();
            let was_active = self.last_turn.was_active.clone();
            for i in animating {
                if self.pages[i].is_animating {
                    self.pages[i].is_animating = false;
                    cleanup.animating.push(i);
                }
            }
            for i in was_active {
                if self.pages[i].was_active {
                    self.pages[i].was_active = false;
                    cleanup.was_active.push(i);
                }
            }
        } else if let Some(p) = self.pages.get_mut(page) {
            if p.is_animating {
                p.is_animating = false;
                cleanup.animating.push(page);
            }
            if p.was_active {
                p.was_active = false;
                cleanup.was_active.push(page);
            }
        }
        cleanup
    }

    /// First navigable right-hand page: the front cover of a closable book,
    /// otherwise the right page of the first spread behind the prepended
    /// hidden cover.
    pub fn callout_page(&self) -> Option<usize> {
        let idx = if self.cfg.can_close { 0 } else { 2 };
        self.pages.get(idx).map(|p| p.index)
    }

    pub fn callout_active(&self) -> bool {
        self.callout == CalloutPhase::Armed
    }

    /// Toggle the decorative highlight. Driven by the bindings layer's
    /// repeating timer; returns the highlighted page, or None once the
    /// callout is cancelled or was never armed.
    pub fn set_callout(&mut self, on: bool) -> Option<usize> {
        if self.callout != CalloutPhase::Armed {
            return None;
        }
        let idx = self.callout_page()?;
        self.pages[idx].is_calling = on;
        Some(idx)
    }

    /// Cancel the callout for good. Idempotent; a disabled callout stays
    /// disabled.
    pub fn cancel_callout(&mut self) {
        if self.callout != CalloutPhase::Armed {
            return;
        }
        if let Some(idx) = self.callout_page() {
            self.pages[idx].is_calling = false;
        }
        self.callout = CalloutPhase::Cancelled;
    }

    /// Rebuild the sequence after the host mutated its children. The book
    /// reopens at the nearest valid spread to the previous position; a
    /// cancelled callout stays cancelled.
    pub fn resync(&mut self, page_count: usize) {
        let active_left = self.active_pages().into_iter().next().unwrap_or(0);
        let content_left = if self.cfg.can_close {
            active_left
        } else {
            active_left.saturating_sub(1)
        };
        let mut cfg = self.cfg.clone();
        cfg.initial_active_page = content_left.min(page_count.saturating_sub(1)) & !1;
        let callout_was = self.callout;
        *self = Engine::new(page_count, cfg, self.caps);
        if callout_was != CalloutPhase::Armed {
            self.cancel_callout();
        }
    }
}

//! Rendering capability flags reported by the hosting environment.

use serde::{Deserialize, Serialize};

/// What the host renderer can do. Hosts without smooth 3-D transforms get
/// instant page swaps (no animating flags) and an inverted arrow-key
/// mapping; hosts that cannot preserve 3-D context across overlapping
/// transitions are subject to the animation-budget guard in `Engine::turn`.
///
/// Defaults assume a capable renderer, the same fallback the widget uses
/// when no feature-detection object is present.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvCaps {
    #[serde(default = "default_true")]
    pub smooth_3d: bool,
    #[serde(default = "default_true")]
    pub preserve_3d: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EnvCaps {
    fn default() -> Self {
        Self {
            smooth_3d: true,
            preserve_3d: true,
        }
    }
}

impl EnvCaps {
    /// A renderer with no 3-D support at all.
    pub fn flat() -> Self {
        Self {
            smooth_3d: false,
            preserve_3d: false,
        }
    }
}

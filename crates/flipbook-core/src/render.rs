//! Render-port seam between the engine and a concrete host.
//!
//! The engine never touches a document. Adapters implement RenderPort over
//! whatever they render to and drive the helpers here to translate engine
//! state into class toggles; headless tests implement it over plain vectors.

use crate::classes;
use crate::engine::Engine;
use crate::outputs::{TransitionCleanup, TurnResult};

pub trait RenderPort {
    /// Number of content pages currently present in the host. The host may
    /// add or remove pages at any time between engine calls.
    fn query_pages(&mut self) -> usize;
    /// Toggle classes on one page, addressed by sequence index.
    fn apply_classes(&mut self, page: usize, add: &[&str], remove: &[&str]);
    /// Toggle classes on the host element itself.
    fn apply_host_classes(&mut self, add: &[&str], remove: &[&str]);
    fn set_host_attribute(&mut self, name: &str, value: &str);
}

/// Project a freshly constructed engine onto the host: readiness, cover
/// markers, and the initial active spread.
pub fn apply_initial(engine: &Engine, port: &mut dyn RenderPort) {
    let cfg = engine.config();
    port.set_host_attribute(
        "style",
        &format!("width:{};height:{}", cfg.width, cfg.height),
    );
    port.apply_host_classes(&[classes::IS_READY], &[]);
    if engine.cover().at_front {
        port.apply_host_classes(&[classes::AT_FRONT_COVER], &[]);
    }
    for page in engine.pages() {
        let mut add = Vec::new();
        if !page.is_content() {
            add.push(classes::HIDDEN_COVER);
        }
        if page.is_first {
            add.push(classes::FIRST_PAGE);
        }
        if page.is_last {
            add.push(classes::LAST_PAGE);
        }
        if page.is_active {
            add.push(classes::IS_ACTIVE);
        }
        if !add.is_empty() {
            port.apply_classes(page.index, &add, &[]);
        }
    }
}

/// Translate one executed turn into class toggles.
pub fn apply_turn(result: &TurnResult, port: &mut dyn RenderPort) {
    for &i in &result.previously_active {
        port.apply_classes(i, &[classes::WAS_ACTIVE], &[classes::IS_ACTIVE]);
    }
    for &i in &result.active {
        port.apply_classes(i, &[classes::IS_ACTIVE], &[]);
    }
    for &i in &result.animating {
        port.apply_classes(i, &[classes::IS_ANIMATING], &[]);
    }
    if result.cover.at_front {
        port.apply_host_classes(&[classes::AT_FRONT_COVER], &[classes::AT_BACK_COVER]);
    } else if result.cover.at_back {
        port.apply_host_classes(&[classes::AT_BACK_COVER], &[classes::AT_FRONT_COVER]);
    } else {
        port.apply_host_classes(&[], &[classes::AT_FRONT_COVER, classes::AT_BACK_COVER]);
    }
}

/// Remove transient classes after a transition-finished notification.
pub fn apply_cleanup(cleanup: &TransitionCleanup, port: &mut dyn RenderPort) {
    for &i in &cleanup.animating {
        port.apply_classes(i, &[], &[classes::IS_ANIMATING]);
    }
    for &i in &cleanup.was_active {
        port.apply_classes(i, &[], &[classes::WAS_ACTIVE]);
    }
}

/// Re-query the host's content pages and rebuild the sequence if the caller
/// mutated its children since construction. Returns true when a rebuild
/// happened (the initial projection is re-applied).
pub fn sync_pages(engine: &mut Engine, port: &mut dyn RenderPort) -> bool {
    let count = port.query_pages();
    let current = engine.pages().iter().filter(|p| p.is_content()).count();
    if count == current {
        return false;
    }
    engine.resync(count);
    apply_initial(engine, port);
    true
}

//! CSS class vocabulary shared between the engine and the bindings layer.
//!
//! The names must stay byte-identical to the widget's stylesheet; the engine
//! only ever hands them to a RenderPort, it never interprets them.

pub const PAGE: &str = "c-flipbook__page";
pub const HIDDEN_COVER: &str = "hidden-cover";
pub const AT_FRONT_COVER: &str = "at-front-cover";
pub const AT_BACK_COVER: &str = "at-rear-cover";
pub const FIRST_PAGE: &str = "first-page";
pub const LAST_PAGE: &str = "last-page";
pub const IS_READY: &str = "is-ready";
pub const IS_ACTIVE: &str = "is-active";
pub const IS_CALLING: &str = "is-calling";
pub const IS_ANIMATING: &str = "is-animating";
pub const WAS_ACTIVE: &str = "was-active";

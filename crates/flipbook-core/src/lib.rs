//! Flipbook core (host-agnostic)
//!
//! The page-turn state machine behind the flipbook widget: an ordered page
//! sequence, the active spread, cover flags, and the turn operation. This
//! crate never touches a document; adapters (see flipbook-wasm) feed it
//! intents and project its outputs onto a host through a RenderPort.

pub mod capabilities;
pub mod classes;
pub mod config;
pub mod engine;
pub mod inputs;
pub mod outputs;
pub mod page;
pub mod render;

// Re-exports for consumers (adapters)
pub use capabilities::EnvCaps;
pub use config::{parse_config_json, BookConfig, ConfigError};
pub use engine::Engine;
pub use inputs::{intent_for_key, intent_for_page_click, ArrowKey, Direction, Intent};
pub use outputs::{CoverState, TransitionCleanup, TurnResult};
pub use page::{build_sequence, Page, PageKind};
pub use render::{apply_cleanup, apply_initial, apply_turn, sync_pages, RenderPort};

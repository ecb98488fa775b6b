use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use flipbook_core::{
    apply_cleanup, apply_initial, apply_turn, classes, intent_for_key, intent_for_page_click,
    sync_pages, ArrowKey, BookConfig, Engine, EnvCaps, Intent, RenderPort,
};

/// Bump when the JS-visible surface changes shape.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Render op forwarded to the JS sink function. `queryPages` reads the
/// sink's return value; everything else is fire-and-forget.
#[derive(serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RenderOp<'a> {
    PageClasses {
        page: usize,
        add: &'a [&'a str],
        remove: &'a [&'a str],
    },
    HostClasses {
        add: &'a [&'a str],
        remove: &'a [&'a str],
    },
    HostAttribute {
        name: &'a str,
        value: &'a str,
    },
    QueryPages,
}

/// RenderPort over a single JS function: each op arrives as one plain
/// object with a `kind` discriminant.
struct JsRenderPort {
    f: Function,
}

impl JsRenderPort {
    fn send(&self, op: &RenderOp) -> JsValue {
        let arg = swb::to_value(op).unwrap_or(JsValue::UNDEFINED);
        self.f
            .call1(&JsValue::UNDEFINED, &arg)
            .unwrap_or(JsValue::UNDEFINED)
    }
}

impl RenderPort for JsRenderPort {
    fn query_pages(&mut self) -> usize {
        self.send(&RenderOp::QueryPages)
            .as_f64()
            .map(|n| n as usize)
            .unwrap_or(0)
    }

    fn apply_classes(&mut self, page: usize, add: &[&str], remove: &[&str]) {
        self.send(&RenderOp::PageClasses { page, add, remove });
    }

    fn apply_host_classes(&mut self, add: &[&str], remove: &[&str]) {
        self.send(&RenderOp::HostClasses { add, remove });
    }

    fn set_host_attribute(&mut self, name: &str, value: &str) {
        self.send(&RenderOp::HostAttribute { name, value });
    }
}

#[wasm_bindgen]
pub struct FlipBook {
    core: Engine,
    on_page_turn: Option<Function>,
    port: Option<JsRenderPort>,
}

#[wasm_bindgen]
impl FlipBook {
    /// Create a new flipbook over `page_count` content pages. `config` and
    /// `capabilities` are plain objects or undefined/null for defaults.
    /// Example:
    ///   new FlipBook(6, { can_close: true }, { smooth_3d: false })
    #[wasm_bindgen(constructor)]
    pub fn new(
        page_count: u32,
        config: JsValue,
        capabilities: JsValue,
    ) -> Result<FlipBook, JsError> {
        console_error_panic_hook::set_once();

        let cfg: BookConfig = if jsvalue_is_undefined_or_null(&config) {
            BookConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let caps: EnvCaps = if jsvalue_is_undefined_or_null(&capabilities) {
            EnvCaps::default()
        } else {
            swb::from_value(capabilities)
                .map_err(|e| JsError::new(&format!("capabilities error: {e}")))?
        };

        Ok(FlipBook {
            core: Engine::new(page_count as usize, cfg, caps),
            on_page_turn: None,
            port: None,
        })
    }

    /// Register the user callback, invoked exactly once per executed turn
    /// with the TurnResult; refused turns fire nothing.
    pub fn set_on_page_turn(&mut self, callback: Function) {
        self.on_page_turn = Some(callback);
    }

    /// Register the render sink and immediately project the initial state
    /// (is-ready, covers, first actives) through it.
    pub fn set_render_port(&mut self, sink: Function) {
        let mut port = JsRenderPort { f: sink };
        apply_initial(&self.core, &mut port);
        self.port = Some(port);
    }

    fn execute(&mut self, intent: Intent) -> JsValue {
        let Some(result) = self.core.turn(intent) else {
            return JsValue::UNDEFINED;
        };
        let callout_idx = self.core.callout_page();
        if let Some(port) = self.port.as_mut() {
            if result.callout_cancelled {
                if let Some(idx) = callout_idx {
                    port.apply_classes(idx, &[], &[classes::IS_CALLING]);
                }
            }
            apply_turn(&result, port);
        }
        let js = swb::to_value(&result).unwrap_or(JsValue::UNDEFINED);
        if let Some(cb) = &self.on_page_turn {
            let _ = cb.call1(&JsValue::UNDEFINED, &js);
        }
        js
    }

    /// Execute a turn. Returns the TurnResult object, or undefined for a
    /// refused (no-op) request.
    pub fn turn_forward(&mut self) -> JsValue {
        self.execute(Intent::Forward)
    }

    pub fn turn_back(&mut self) -> JsValue {
        self.execute(Intent::Back)
    }

    pub fn turn_to(&mut self, page: u32) -> JsValue {
        self.execute(Intent::JumpTo(page as usize))
    }

    /// Keyboard contract: pass KeyboardEvent.key. Honors the arrow_keys
    /// config; the mapping inverts on hosts without smooth 3-D transforms.
    pub fn key_down(&mut self, key: &str) -> JsValue {
        if !self.core.config().arrow_keys {
            return JsValue::UNDEFINED;
        }
        let arrow = match key {
            "ArrowLeft" => ArrowKey::Left,
            "ArrowRight" => ArrowKey::Right,
            _ => return JsValue::UNDEFINED,
        };
        let intent = intent_for_key(arrow, &self.core.capabilities());
        self.execute(intent)
    }

    /// Click contract: right-hand pages turn forward, left-hand ones back;
    /// hidden covers are inert.
    pub fn page_clicked(&mut self, page: u32) -> JsValue {
        match intent_for_page_click(page as usize, self.core.pages()) {
            Some(intent) => self.execute(intent),
            None => JsValue::UNDEFINED,
        }
    }

    /// Transition-finished notification for one page. Idempotent.
    pub fn transition_finished(&mut self, page: u32) {
        let cleanup = self.core.transition_finished(page as usize);
        if cleanup.is_empty() {
            return;
        }
        if let Some(port) = self.port.as_mut() {
            apply_cleanup(&cleanup, port);
        }
    }

    /// One tick of the decorative callout, driven by the host's timer.
    /// Returns the highlighted page, or undefined once cancelled.
    pub fn callout_tick(&mut self, on: bool) -> Option<u32> {
        let idx = self.core.set_callout(on)?;
        if let Some(port) = self.port.as_mut() {
            if on {
                port.apply_classes(idx, &[classes::IS_CALLING], &[]);
            } else {
                port.apply_classes(idx, &[], &[classes::IS_CALLING]);
            }
        }
        Some(idx as u32)
    }

    pub fn cancel_callout(&mut self) {
        if !self.core.callout_active() {
            return;
        }
        let idx = self.core.callout_page();
        self.core.cancel_callout();
        if let (Some(idx), Some(port)) = (idx, self.port.as_mut()) {
            port.apply_classes(idx, &[], &[classes::IS_CALLING]);
        }
    }

    /// Re-query the host's content pages through the render sink and
    /// rebuild if they changed. Returns true when a rebuild happened.
    pub fn sync_pages(&mut self) -> bool {
        match self.port.as_mut() {
            Some(port) => sync_pages(&mut self.core, port),
            None => false,
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.core.is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.core.is_last_page()
    }

    pub fn active_pages(&self) -> Vec<u32> {
        self.core.active_pages().iter().map(|&i| i as u32).collect()
    }

    /// Full page snapshot (covers included) as an array of plain objects.
    pub fn pages(&self) -> JsValue {
        swb::to_value(self.core.pages()).unwrap_or(JsValue::UNDEFINED)
    }

    pub fn cover_state(&self) -> JsValue {
        swb::to_value(&self.core.cover()).unwrap_or(JsValue::UNDEFINED)
    }

    pub fn width(&self) -> String {
        self.core.config().width.clone()
    }

    pub fn height(&self) -> String {
        self.core.config().height.clone()
    }
}

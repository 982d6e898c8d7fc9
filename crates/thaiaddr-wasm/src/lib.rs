//! thaiaddr-wasm — WebAssembly bindings for thaiaddr-core
//!
//! This crate exposes the address widget's resolution engine to JavaScript.
//! The page owns the DOM; the engine owns the cascade. Every input method
//! returns the events it produced, and `view()` returns everything needed to
//! redraw the three dropdowns and the postal field.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_reference_table, AddressWidget } from 'thaiaddr-wasm';
//!
//! async function main() {
//!   await init();
//!   const json = await (await fetch('geography.json')).text();
//!   load_reference_table(json);
//!
//!   const widget = new AddressWidget({ locale: 'th', suggestionLimit: 10 });
//!   widget.edit_postal_text('10500');   // -> [{ kind: 'suggestions', ... }, ...]
//!   render(widget.view());
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The reference table is loaded once per page and shared by all widgets.
//!   `load_sample_table()` installs the small bundled sample instead.
//! - Errors surface as rejected `JsValue` strings; nothing panics on input.
use std::result::Result;
use std::sync::{Arc, OnceLock};
use wasm_bindgen::prelude::*;

use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::Serializer;
use thaiaddr_core::prelude::*;

// Bundled sample so demos and tests work without a fetch.
static SAMPLE_JSON: &str = include_str!("../../thaiaddr-core/data/geography.json");

static TABLE: OnceLock<Arc<ReferenceTable>> = OnceLock::new();

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing thaiaddr WASM module...".into());
}

// JSON-compatible output: maps become plain objects, `None` becomes `null`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn install(json: &str) -> Result<usize, JsValue> {
    if let Some(table) = TABLE.get() {
        return Ok(table.len());
    }
    let table = ReferenceTable::from_json_str(json).map_err(|e| {
        let msg = format!("failed to load reference table: {e}");
        web_sys::console::error_1(&msg.clone().into());
        JsValue::from_str(&msg)
    })?;
    let table = TABLE.get_or_init(|| Arc::new(table));
    web_sys::console::log_1(&format!("✓ Loaded {} postal records", table.len()).into());
    Ok(table.len())
}

/* --------------------------------------------------------------------------
   Reference Table
-------------------------------------------------------------------------- */

/// Parses and installs the reference table. Returns the record count.
/// Later calls keep the first table.
#[wasm_bindgen]
pub fn load_reference_table(json: &str) -> Result<usize, JsValue> {
    install(json)
}

#[wasm_bindgen]
pub fn load_sample_table() -> Result<usize, JsValue> {
    install(SAMPLE_JSON)
}

#[wasm_bindgen]
pub fn is_loaded() -> bool {
    TABLE.get().is_some()
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let stats = loaded()?.stats();
    let stats = json!({
        "records": stats.records,
        "provinces": stats.provinces,
        "districts": stats.districts,
        "subdistricts": stats.subdistricts,
        "postalCodes": stats.postal_codes
    });
    to_js(&stats)
}

fn loaded() -> Result<Arc<ReferenceTable>, JsValue> {
    TABLE
        .get()
        .cloned()
        .ok_or_else(|| JsValue::from_str("reference table not loaded; call load_reference_table first"))
}

/* --------------------------------------------------------------------------
   Address Widget
-------------------------------------------------------------------------- */

/// One address form: postal field, three cascading dropdowns and the free
/// text lines.
#[wasm_bindgen]
pub struct AddressWidget {
    engine: Engine,
}

#[wasm_bindgen]
impl AddressWidget {
    /// `config` is `{ locale?: "th" | "en", suggestionLimit?: number }`, or
    /// `undefined` for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<AddressWidget, JsValue> {
        let table = loaded()?;
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("invalid widget config: {e}")))?
        };
        Ok(AddressWidget {
            engine: Engine::new(table, config),
        })
    }

    /// Any input as a tagged object, e.g. `{ kind: "select", level: "district", code: 1004 }`.
    pub fn dispatch(&mut self, input: JsValue) -> Result<JsValue, JsValue> {
        let input: EngineInput = serde_wasm_bindgen::from_value(input)
            .map_err(|e| JsValue::from_str(&format!("invalid input: {e}")))?;
        to_js(&self.engine.dispatch(input))
    }

    pub fn edit_postal_text(&mut self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.engine.edit_postal_text(text))
    }

    pub fn choose_suggestion(&mut self, postal_code: &str) -> Result<JsValue, JsValue> {
        to_js(&self.engine.choose_suggestion(postal_code))
    }

    /// `code` is `undefined` for the placeholder entry.
    pub fn select_province(
        &mut self,
        code: Option<u32>,
        user_initiated: bool,
    ) -> Result<JsValue, JsValue> {
        to_js(&self.engine.select_province(code, user_initiated))
    }

    pub fn select_district(
        &mut self,
        code: Option<u32>,
        user_initiated: bool,
    ) -> Result<JsValue, JsValue> {
        to_js(&self.engine.select_district(code, user_initiated))
    }

    pub fn select_subdistrict(
        &mut self,
        code: Option<u32>,
        user_initiated: bool,
    ) -> Result<JsValue, JsValue> {
        to_js(&self.engine.select_subdistrict(code, user_initiated))
    }

    pub fn set_locale(&mut self, locale: &str) -> Result<JsValue, JsValue> {
        let locale: Locale = locale.parse().map_err(|e: String| JsValue::from_str(&e))?;
        to_js(&self.engine.set_locale(locale))
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.reset())
    }

    /// `field` is one of `houseNo`, `soi`, `moo`, `buildingName`, `streetName`.
    pub fn set_address_line(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field: AddressField = field.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.engine.set_address_line(field, value);
        Ok(())
    }

    /// Suggestions for the current postal text, in table order.
    pub fn suggestions(&self) -> Result<js_sys::Array, JsValue> {
        let locale = self.engine.locale();
        let array = js_sys::Array::new();
        for s in self.engine.suggestions() {
            let row = json!({
                "postalCode": s.postal_code.as_str(),
                "districtName": s.district_name.get(locale),
                "provinceName": s.province_name.get(locale),
            });
            array.push(&to_js(&row)?);
        }
        Ok(array)
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.view())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.snapshot())
    }

    /// Single-line preview of the current address.
    pub fn display_line(&self) -> String {
        self.engine.snapshot().format_display()
    }

    /// Missing or invalid fields; an empty array means ready to submit.
    pub fn validate(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.validate())
    }
}

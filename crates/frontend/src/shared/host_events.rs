//! Bridge to the admin page that embeds this bundle.
//!
//! Data comes in through a JSON `<script>` element and `product-type:load`
//! window events; user actions go out as `product-type:<action>` events.

use super::config::read_json_element;
use contracts::domain::a025_product_type::ProductTypeDetails;
use contracts::shared::UserError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub const DATA_ELEMENT_ID: &str = "product-type-data";
pub const LOAD_EVENT: &str = "product-type:load";
pub const SAVE_RESULT_EVENT: &str = "product-type:save-result";

const EVENT_PREFIX: &str = "product-type:";

pub fn event_name(action: &str) -> String {
    format!("{}{}", EVENT_PREFIX, action)
}

pub fn parse_product_type(json: &str) -> Result<Option<ProductTypeDetails>, String> {
    ProductTypeDetails::from_json(json).map_err(|e| format!("{:#}", e))
}

/// Outcome of a save, reported by the host after `product-type:submit`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveResult {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<UserError>,
}

pub fn parse_save_result(json: &str) -> Result<SaveResult, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid save result: {}", e))
}

/// Product type rendered into the page by the host, if any
pub fn read_initial_product_type() -> Option<ProductTypeDetails> {
    let text = read_json_element(DATA_ELEMENT_ID)?;
    parse_product_type(&text).unwrap_or_else(|e| {
        log::error!("#{}: {}", DATA_ELEMENT_ID, e);
        None
    })
}

/// Notify the host about a user action
pub fn emit<T: Serialize>(action: &str, detail: &T) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let detail = serde_wasm_bindgen::to_value(detail).map_err(|e| e.to_string())?;

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    let event = web_sys::CustomEvent::new_with_event_init_dict(&event_name(action), &init)
        .map_err(|e| format!("{e:?}"))?;

    window
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

fn listener_error(event: &str, reason: &str) -> String {
    format!("cannot listen to {}: {}", event, reason)
}

/// Subscribe to a host event whose `detail` is a string.
///
/// The listener lives as long as the page.
pub fn listen(event: &str, handler: impl Fn(Option<String>) + 'static) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| listener_error(event, "no window"))?;
    let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let detail = ev
            .dyn_ref::<web_sys::CustomEvent>()
            .and_then(|e| e.detail().as_string());
        handler(detail);
    }) as Box<dyn FnMut(_)>);

    window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| listener_error(event, &format!("{e:?}")))?;
    closure.forget();
    Ok(())
}

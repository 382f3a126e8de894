//! Browser wiring: element lookup, event listeners, and the reschedule loop.
//!
//! The embedding application supplies the [`RenderBackend`] implementation
//! and calls [`attach`]; everything else (visibility observation, scroll and
//! resize handling, pointer debouncing) is wired here.

pub mod dom;
pub mod events;
pub mod frame;

use crate::effect::NetEffect;
use crate::options::NetOptions;
use crate::render::RenderBackend;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Initialize console logging and the panic hook. Call once per page.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Create the effect on the element with id `element_id` and start its loop.
///
/// `suppress_ids` names foreground elements (overlaid content, navigation)
/// that should mute the pointer highlight while hovered. Returns the shared
/// effect handle so the embedder can call `destroy` later.
pub fn attach<B: RenderBackend + 'static>(
    element_id: &str,
    suppress_ids: &[&str],
    options: NetOptions,
    backend: B,
) -> Result<Rc<RefCell<NetEffect<B>>>, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let el: web::HtmlElement = document
        .get_element_by_id(element_id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| {
            log::error!("[net] cannot find element #{element_id}");
            JsValue::from_str("missing host element")
        })?;

    let effect = NetEffect::new(options, backend, frame::now_ms()).map_err(|e| {
        log::error!("[net] configuration error: {e:?}");
        JsValue::from_str("invalid options")
    })?;
    let effect = Rc::new(RefCell::new(effect));

    // Size before the first frame; the observer delivers the init trigger.
    {
        let bounds = dom::element_bounds(&el);
        effect
            .borrow_mut()
            .resize(bounds, dom::device_pixel_ratio(), dom::is_mobile());
    }

    events::wire_scroll();
    events::wire_resize(effect.clone(), el.clone());
    events::wire_pointermove(effect.clone());
    events::wire_suppression(effect.clone(), &document, suppress_ids);
    events::wire_visibility(effect.clone(), &el)?;
    frame::start_loop(effect.clone());

    Ok(effect)
}

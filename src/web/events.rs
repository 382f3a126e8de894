use crate::constants::{
    INTERSECTION_THRESHOLD, POINTER_DEBOUNCE_MS, POINTER_DEBOUNCE_SUPPRESSED_MS,
    RESIZE_DEBOUNCE_MS,
};
use crate::effect::NetEffect;
use crate::render::RenderBackend;
use crate::scheduler;
use crate::web::{dom, frame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn window() -> Option<web::Window> {
    web::window()
}

fn set_timeout(cb: &Closure<dyn FnMut()>, delay_ms: i32) -> Option<i32> {
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms,
        )
        .ok()
}

fn clear_timeout(id: i32) {
    if let Some(w) = window() {
        w.clear_timeout_with_handle(id);
    }
}

/// Feed the process-wide scroll window from the window scroll event.
pub fn wire_scroll() {
    let closure = Closure::wrap(Box::new(move || {
        scheduler::note_scroll(frame::now_ms());
    }) as Box<dyn FnMut()>);
    if let Some(w) = window() {
        _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Debounced window resize: re-query element bounds and propagate them to
/// the effect (camera aspect, surface size, pixel ratio). Immediate before
/// the effect finishes initializing, debounced afterwards.
pub fn wire_resize<B: RenderBackend + 'static>(
    effect: Rc<RefCell<NetEffect<B>>>,
    el: web::HtmlElement,
) {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let apply = {
        let effect = effect.clone();
        let el = el.clone();
        let pending = pending.clone();
        Closure::wrap(Box::new(move || {
            pending.set(None);
            let bounds = dom::element_bounds(&el);
            effect
                .borrow_mut()
                .resize(bounds, dom::device_pixel_ratio(), dom::is_mobile());
        }) as Box<dyn FnMut()>)
    };

    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(id) = pending.take() {
            clear_timeout(id);
        }
        let delay = if effect.borrow().post_init() {
            RESIZE_DEBOUNCE_MS
        } else {
            0
        };
        pending.set(set_timeout(&apply, delay));
    }) as Box<dyn FnMut()>);

    if let Some(w) = window() {
        _ = w.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

/// Debounced pointer tracking. Raw move events only stash coordinates; the
/// trailing timeout hands them to the effect, which does the normalization
/// and ray work.
pub fn wire_pointermove<B: RenderBackend + 'static>(effect: Rc<RefCell<NetEffect<B>>>) {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let last_page: Rc<Cell<(f32, f32)>> = Rc::new(Cell::new((0.0, 0.0)));

    let fire = {
        let effect = effect.clone();
        let pending = pending.clone();
        let last_page = last_page.clone();
        Closure::wrap(Box::new(move || {
            pending.set(None);
            let (x, y) = last_page.get();
            effect.borrow_mut().pointer_moved(x, y);
        }) as Box<dyn FnMut()>)
    };

    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        last_page.set((ev.page_x() as f32, ev.page_y() as f32));
        if let Some(id) = pending.take() {
            clear_timeout(id);
        }
        let delay = if effect.borrow().pointer().suppressed {
            POINTER_DEBOUNCE_SUPPRESSED_MS
        } else {
            POINTER_DEBOUNCE_MS
        };
        pending.set(set_timeout(&fire, delay));
    }) as Box<dyn FnMut(_)>);

    if let Some(w) = window() {
        _ = w.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    }
    on_move.forget();
}

/// Mute the pointer highlight while hovering designated foreground elements.
pub fn wire_suppression<B: RenderBackend + 'static>(
    effect: Rc<RefCell<NetEffect<B>>>,
    document: &web::Document,
    element_ids: &[&str],
) {
    for id in element_ids {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("[net] suppression element #{id} not found");
            continue;
        };

        let over = {
            let effect = effect.clone();
            Closure::wrap(Box::new(move || {
                effect.borrow_mut().set_pointer_suppressed(true);
            }) as Box<dyn FnMut()>)
        };
        let out = {
            let effect = effect.clone();
            Closure::wrap(Box::new(move || {
                effect.borrow_mut().set_pointer_suppressed(false);
            }) as Box<dyn FnMut()>)
        };
        _ = el.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref());
        _ = el.add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref());
        over.forget();
        out.forget();
    }
}

/// Boolean visibility signal from an IntersectionObserver on the host
/// element; ratios above the threshold count as on-screen. The first
/// visible delivery also triggers effect initialization.
pub fn wire_visibility<B: RenderBackend + 'static>(
    effect: Rc<RefCell<NetEffect<B>>>,
    el: &web::HtmlElement,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Vec<web::IntersectionObserverEntry>| {
        // isIntersecting is unreliable in some engines; use the ratio.
        let Some(entry) = entries.first() else { return };
        let visible = entry.intersection_ratio() > INTERSECTION_THRESHOLD;
        effect.borrow_mut().set_visible(visible, frame::now_ms());
    })
        as Box<dyn FnMut(Vec<web::IntersectionObserverEntry>)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(el);
    callback.forget();
    Ok(())
}

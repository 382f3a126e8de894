use crate::effect::NetEffect;
use crate::render::RenderBackend;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static EPOCH: Instant = Instant::now();
}

/// Monotonic milliseconds since the module was first used.
pub fn now_ms() -> f64 {
    EPOCH.with(|e| e.elapsed().as_secs_f64() * 1000.0)
}

/// Drive the effect with a self-rescheduling timeout at the adaptive delay
/// the scheduler reports (fast during warm-up, steady once initialized,
/// slow off-screen). The chain ends on its own once the effect is
/// destroyed, which also drops the closure.
pub fn start_loop<B: RenderBackend + 'static>(effect: Rc<RefCell<NetEffect<B>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let delay = effect.borrow_mut().tick(now_ms());
        if !effect.borrow().alive() {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay as i32,
            );
        }
    }) as Box<dyn FnMut()>));

    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            0,
        );
    }
}

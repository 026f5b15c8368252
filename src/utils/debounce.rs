use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Creates a window resize listener that fires `callback` only after
/// `delay_ms` of inactivity, so chart re-renders don't run on every frame of
/// a window drag.
///
/// The returned `EventListener` must be kept alive for the component's
/// lifetime; dropping it removes the listener.
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> EventListener
where
    F: Fn() + 'static,
{
    let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(&window().expect("window unavailable"), "resize", move |_| {
        // Cancel pending timeout
        if let Some(handle) = timeout_handle.borrow_mut().take() {
            drop(handle);
        }

        // Schedule new timeout
        let cb = callback.clone();
        let handle = Timeout::new(delay_ms, move || cb());
        *timeout_handle.borrow_mut() = Some(handle);
    })
}

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// One-shot advance timer for the feedback window. Scheduled while `pending`
/// holds; the cleanup clears the handle on teardown or when the deps change,
/// and the reducer side re-checks the runner generation, so even a timer that
/// slips through fires as a no-op.
#[hook]
pub fn use_advance_timer<F>(pending: bool, generation: u32, delay_ms: u32, on_fire: F)
where
    F: Fn() + 'static,
{
    use_effect_with((pending, generation), move |(pending, _)| {
        let mut handle: Option<(i32, Closure<dyn FnMut()>)> = None;
        if *pending {
            let cb = Closure::wrap(Box::new(move || on_fire()) as Box<dyn FnMut()>);
            if let Some(win) = web_sys::window() {
                if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    delay_ms as i32,
                ) {
                    handle = Some((id, cb));
                }
            }
        }
        move || {
            if let Some((id, cb)) = handle {
                if let Some(win) = web_sys::window() {
                    win.clear_timeout_with_handle(id);
                }
                drop(cb);
            }
        }
    });
}

/// Repeating once-per-second tick for the session-wide countdown; cleared on
/// unmount like any other interval.
#[hook]
pub fn use_second_ticker<F>(on_tick: F)
where
    F: Fn() + 'static,
{
    use_effect_with((), move |_| {
        let mut handle: Option<(i32, Closure<dyn FnMut()>)> = None;
        let cb = Closure::wrap(Box::new(move || on_tick()) as Box<dyn FnMut()>);
        if let Some(win) = web_sys::window() {
            if let Ok(id) = win
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    1000,
                )
            {
                handle = Some((id, cb));
            }
        }
        move || {
            if let Some((id, cb)) = handle {
                if let Some(win) = web_sys::window() {
                    win.clear_interval_with_handle(id);
                }
                drop(cb);
            }
        }
    });
}

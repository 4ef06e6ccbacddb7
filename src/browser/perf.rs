//! Page load timing probe

use gloo_timers::callback::Timeout;
use leptos::logging::log;
use wasm_bindgen::JsCast;
use web_sys::{Event, PerformanceNavigationTiming};

use crate::browser::dom::WebHost;
use crate::browser::events::listen;
use crate::core::error::PageError;
use crate::core::perf::{LoadTiming, load_time_message};

/// Log the load time once the page has finished loading.
///
/// `loadEventEnd` is only set after the load handlers return, so the entry is
/// read on the next task. If the page already finished loading before the
/// module started, the probe runs right away.
pub(crate) fn watch_load_time(host: &WebHost) -> Result<(), PageError> {
    if host.document.ready_state() == "complete" {
        schedule_probe();
        return Ok(());
    }
    listen(&host.window, "load", |_: Event| schedule_probe())
}

fn schedule_probe() {
    Timeout::new(0, || {
        if let Some(ms) = read_load_timing().and_then(|timing| timing.load_time_ms()) {
            log!("{}", load_time_message(ms));
        }
    })
    .forget();
}

fn read_load_timing() -> Option<LoadTiming> {
    let performance = web_sys::window()?.performance()?;
    let entry = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>()
        .ok()?;
    Some(LoadTiming {
        fetch_start: entry.fetch_start(),
        load_event_end: entry.load_event_end(),
    })
}

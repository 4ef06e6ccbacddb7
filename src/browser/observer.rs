//! `IntersectionObserver` registration for the scroll reveal

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::browser::dom::{WebElement, WebHost, js_error};
use crate::core::error::PageError;
use crate::core::reveal::IntersectionSample;
use crate::ui::PageController;

/// Observe every section once. A revealed section is unobserved, since its
/// state can no longer change.
pub(crate) fn observe_sections(controller: &Rc<PageController<WebHost>>) -> Result<(), PageError> {
    let reveal = &controller.reveal;
    if reveal.sections().is_empty() {
        return Ok(());
    }

    let callback_controller = Rc::clone(controller);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let section = WebElement(entry.target());
                let sample =
                    IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio());
                if callback_controller.reveal.on_intersection(&section, sample) {
                    observer.unobserve(&section.0);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.options().threshold));
    options.set_root_margin(&reveal.options().root_margin());

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| PageError::Js(js_error(e)))?;
    callback.forget();

    for section in reveal.sections() {
        observer.observe(&section.0);
    }
    Ok(())
}

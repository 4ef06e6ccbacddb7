//! Browser bindings: attaches the page controller to the live document
//!
//! Elements are located once with the configured selectors, the controller
//! is built from them, and listeners hold shared references to it.

pub mod dom;
mod events;
mod observer;
mod perf;

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::logging::{error, log, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Element, Event};

use crate::core::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::core::debounce::{Debouncer, TimerScheduler};
use crate::core::error::PageError;
use crate::ui::host::FormInput;
use crate::ui::{PageController, PageElements};

pub use dom::{WebElement, WebHost, WebInput};

/// Start the controller with `config`, or with the embedded configuration
/// block when `None`. Waits for `DOMContentLoaded` if the document is still
/// loading.
pub fn start(config: Option<PageConfig>) -> Result<(), PageError> {
    let host = WebHost::new()?;
    let config = config.unwrap_or_else(|| embedded_config(&host));

    perf::watch_load_time(&host)?;

    if host.document.ready_state() == "loading" {
        let ready_host = host.clone();
        events::listen(&host.document, "DOMContentLoaded", move |_: Event| {
            if let Err(e) = mount(&ready_host, &config) {
                error!("Page interactions failed to start: {}", e);
            }
        })
    } else {
        mount(&host, &config).map(|_| ())
    }
}

/// Parse a JS object into a configuration
pub fn config_from_js(value: JsValue) -> Result<PageConfig, PageError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| PageError::InvalidConfig(e.to_string()))
}

/// Configuration from the optional JSON block, defaults otherwise
fn embedded_config(host: &WebHost) -> PageConfig {
    let Some(text) = host
        .document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };

    PageConfig::from_json(&text).unwrap_or_else(|e| {
        warn!("{}; using default configuration", e);
        PageConfig::default()
    })
}

/// Locate elements, build the controller and register every listener
fn mount(host: &WebHost, config: &PageConfig) -> Result<Rc<PageController<WebHost>>, PageError> {
    let selectors = &config.selectors;

    let form = host.query(&selectors.contact_form)?;
    let (form_fields, required_fields) = match &form {
        Some(form) => (
            Some(form_inputs(host, form, &selectors.form_fields)?),
            form_inputs(host, form, &selectors.required_fields)?,
        ),
        None => (None, Vec::new()),
    };
    let email_field = form_fields.as_ref().and_then(|fields| {
        fields
            .iter()
            .find(|field| field.id() == config.email_field_id)
            .cloned()
    });

    let elements = PageElements {
        menu_toggle: host.query(&selectors.menu_toggle)?.map(WebElement),
        nav: host.query(&selectors.nav)?.map(WebElement),
        menu_bars: host
            .query_all(&selectors.menu_bar)?
            .into_iter()
            .map(WebElement)
            .collect(),
        form_fields,
        required_fields,
        email_field,
        sections: host
            .query_all(&selectors.sections)?
            .into_iter()
            .map(WebElement)
            .collect(),
    };

    let controller = Rc::new(PageController::new(host.clone(), elements, config));

    events::attach_menu(host, &controller)?;

    let links = host.query_all(&selectors.anchor_links)?;
    events::attach_anchors(&links, &controller)?;
    log!("Smooth scrolling enabled for {} anchor links", links.len());

    if let Some(form) = &form {
        events::attach_form(form, &controller)?;
    }

    observer::observe_sections(&controller)?;

    Ok(controller)
}

/// Form controls under `form` matching `selector`; other elements are skipped
fn form_inputs(host: &WebHost, form: &Element, selector: &str) -> Result<Vec<WebInput>, PageError> {
    Ok(host
        .query_all_in(form, selector)?
        .into_iter()
        .filter_map(WebInput::from_element)
        .collect())
}

/// Browser timers for [`Debouncer`]; dropping a `Timeout` cancels it
pub struct BrowserTimers;

impl TimerScheduler for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, wait: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(wait.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }
}

/// Debounce a page-script function. The returned callable forwards its
/// first argument to `func` once `wait_ms` have passed since the last call.
#[wasm_bindgen]
pub fn debounce(func: js_sys::Function, wait_ms: u32) -> JsValue {
    let debouncer = Debouncer::new(
        BrowserTimers,
        Duration::from_millis(u64::from(wait_ms)),
        move |arg: JsValue| {
            if let Err(e) = func.call1(&JsValue::NULL, &arg) {
                error!("Debounced function threw: {}", dom::js_error(e));
            }
        },
    );
    Closure::wrap(Box::new(move |arg: JsValue| debouncer.call(arg)) as Box<dyn FnMut(JsValue)>)
        .into_js_value()
}

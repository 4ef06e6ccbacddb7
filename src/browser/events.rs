//! Event listener wiring
//!
//! Every listener lives for the whole page, so closures are leaked with
//! `Closure::forget` after registration.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

use crate::browser::dom::{WebElement, WebHost, WebInput, js_error};
use crate::core::error::PageError;
use crate::ui::PageController;
use crate::ui::host::FormInput;

/// Register `handler` for `event` on `target` for the page lifetime
pub(crate) fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), PageError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| PageError::Js(js_error(e)))?;
    closure.forget();
    Ok(())
}

/// Menu: toggle click, outside click, Escape
pub(crate) fn attach_menu(
    host: &WebHost,
    controller: &Rc<PageController<WebHost>>,
) -> Result<(), PageError> {
    let Some(menu) = controller.menu.as_ref() else {
        return Ok(());
    };

    let toggle_menu = Rc::clone(menu);
    listen(&menu.toggle_element().0, "click", move |_: Event| {
        toggle_menu.toggle();
    })?;

    let click_menu = Rc::clone(menu);
    listen(&host.document, "click", move |event: Event| {
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map(WebElement);
        click_menu.handle_document_click(target.as_ref());
    })?;

    let key_menu = Rc::clone(menu);
    listen(&host.document, "keydown", move |event: KeyboardEvent| {
        key_menu.handle_key(&event.key());
    })?;

    Ok(())
}

/// Anchor links: suppress the jump and scroll smoothly instead
pub(crate) fn attach_anchors(
    links: &[Element],
    controller: &Rc<PageController<WebHost>>,
) -> Result<(), PageError> {
    for link in links {
        let controller = Rc::clone(controller);
        let anchor = link.clone();
        listen(link, "click", move |event: Event| {
            event.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            controller.anchors.follow(&href);
        })?;
    }
    Ok(())
}

/// Contact form: submit, plus blur and input on every field
pub(crate) fn attach_form(
    form: &Element,
    controller: &Rc<PageController<WebHost>>,
) -> Result<(), PageError> {
    let Some(validator) = controller.form.as_ref() else {
        return Ok(());
    };

    let submit_controller = Rc::clone(controller);
    listen(form, "submit", move |event: Event| {
        event.prevent_default();
        if let Some(form) = submit_controller.form.as_ref() {
            form.handle_submit();
        }
    })?;

    for field in validator.fields() {
        let element = field.element();

        let blur_controller = Rc::clone(controller);
        let blur_field: WebInput = field.clone();
        listen(&element.0, "blur", move |_: Event| {
            if let Some(form) = blur_controller.form.as_ref() {
                let _ = form.validate_field(&blur_field);
            }
        })?;

        let input_controller = Rc::clone(controller);
        let input_field: WebInput = field.clone();
        listen(&element.0, "input", move |_: Event| {
            if let Some(form) = input_controller.form.as_ref() {
                form.handle_input(&input_field);
            }
        })?;
    }

    Ok(())
}

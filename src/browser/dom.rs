//! `web-sys` implementations of the host traits

use leptos::logging::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Node,
    NodeList,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::core::error::PageError;
use crate::ui::host::{FormInput, PageElement, PageHost};

/// Render a thrown JS value for an error message
pub(crate) fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Collect the element nodes of a `NodeList`
pub(crate) fn elements_of(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(pub Element);

impl PageElement for WebElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(element) = self.0.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = element.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &Node = other.0.as_ref();
        self.0.contains(Some(other))
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.0
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// A contact form control
#[derive(Clone, Debug)]
pub enum WebInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl WebInput {
    /// Wrap an element if it is an `input`, a `textarea` or a `select`
    pub fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(WebInput::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => return Some(WebInput::TextArea(textarea)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlSelectElement>().ok().map(WebInput::Select)
    }

    fn as_element(&self) -> &Element {
        match self {
            WebInput::Input(input) => input.as_ref(),
            WebInput::TextArea(textarea) => textarea.as_ref(),
            WebInput::Select(select) => select.as_ref(),
        }
    }
}

impl FormInput for WebInput {
    type Element = WebElement;

    fn element(&self) -> WebElement {
        WebElement(self.as_element().clone())
    }

    fn id(&self) -> String {
        self.as_element().id()
    }

    fn name(&self) -> String {
        match self {
            WebInput::Input(input) => input.name(),
            WebInput::TextArea(textarea) => textarea.name(),
            WebInput::Select(select) => select.name(),
        }
    }

    fn input_type(&self) -> String {
        match self {
            WebInput::Input(input) => input.type_(),
            WebInput::TextArea(_) => String::new(),
            WebInput::Select(select) => select.type_(),
        }
    }

    fn is_required(&self) -> bool {
        match self {
            WebInput::Input(input) => input.required(),
            WebInput::TextArea(textarea) => textarea.required(),
            WebInput::Select(select) => select.required(),
        }
    }

    fn value(&self) -> String {
        match self {
            WebInput::Input(input) => input.value(),
            WebInput::TextArea(textarea) => textarea.value(),
            WebInput::Select(select) => select.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            WebInput::Input(input) => input.set_value(value),
            WebInput::TextArea(textarea) => textarea.set_value(value),
            WebInput::Select(select) => select.set_value(value),
        }
    }
}

/// The live window and document
#[derive(Clone, Debug)]
pub struct WebHost {
    pub window: Window,
    pub document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::MissingWindow)?;
        let document = window.document().ok_or(PageError::MissingDocument)?;
        Ok(Self { window, document })
    }

    pub fn query(&self, selector: &str) -> Result<Option<Element>, PageError> {
        self.document
            .query_selector(selector)
            .map_err(|e| invalid_selector(selector, e))
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, PageError> {
        self.document
            .query_selector_all(selector)
            .map(elements_of)
            .map_err(|e| invalid_selector(selector, e))
    }

    /// Query within `root` instead of the whole document
    pub fn query_all_in(&self, root: &Element, selector: &str) -> Result<Vec<Element>, PageError> {
        root.query_selector_all(selector)
            .map(elements_of)
            .map_err(|e| invalid_selector(selector, e))
    }

    fn try_install_stylesheet(&self, id: &str, css: &str) -> Result<(), PageError> {
        if self.document.get_element_by_id(id).is_some() {
            return Ok(());
        }

        let head = self.document.head().ok_or(PageError::MissingDocument)?;
        let style = self
            .document
            .create_element("style")
            .map_err(|e| PageError::Js(js_error(e)))?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|e| PageError::Js(js_error(e)))?;
        Ok(())
    }
}

impl PageHost for WebHost {
    type Element = WebElement;
    type Input = WebInput;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn install_stylesheet(&self, id: &str, css: &str) {
        if let Err(e) = self.try_install_stylesheet(id, css) {
            warn!("Failed to install stylesheet '{}': {}", id, e);
        }
    }
}

fn invalid_selector(selector: &str, err: JsValue) -> PageError {
    PageError::InvalidSelector {
        selector: selector.to_string(),
        reason: js_error(err),
    }
}

//! Seam between the controllers and the document they drive
//!
//! The browser implementation wraps `web-sys` handles; tests use an
//! in-memory document. Handles are cheap to clone and refer to the same
//! underlying node.

/// An element the controllers read or decorate
pub trait PageElement: Clone {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn set_attribute(&self, name: &str, value: &str);
    /// Set an inline style property. An empty value removes it.
    fn set_style(&self, property: &str, value: &str);
    fn set_text(&self, text: &str);
    /// Whether `other` is this element or one of its descendants
    fn contains(&self, other: &Self) -> bool;
    /// Smoothly scroll so the element's top aligns with the viewport top
    fn scroll_into_view(&self);
}

/// A form control (`input` or `textarea`)
pub trait FormInput: Clone {
    type Element: PageElement;

    fn element(&self) -> Self::Element;
    fn id(&self) -> String;
    fn name(&self) -> String;
    /// Value of the `type` attribute, empty for a textarea
    fn input_type(&self) -> String;
    fn is_required(&self) -> bool;
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Document-level services
pub trait PageHost: Clone {
    type Element: PageElement;
    type Input: FormInput<Element = Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// Blocking acknowledgment dialog
    fn alert(&self, message: &str);
    /// Append a `<style>` block unless one with `id` already exists
    fn install_stylesheet(&self, id: &str, css: &str);
}

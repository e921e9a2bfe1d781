//! `web-sys` implementations of the core host traits

use std::rc::Rc;

use rusty_forms_dom_core::{
    ErrorPresenter, Form, FormControl, Redraw, RedrawScheduler, ValidityCheck, ValidityFlags,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ValidityState, Window,
};

use crate::warn;

/// A validatable element of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomControl {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl DomControl {
    /// Wraps `value` when it is an `input`, `select` or `textarea`
    pub fn from_js(value: &JsValue) -> Option<Self> {
        if let Some(input) = value.dyn_ref::<HtmlInputElement>() {
            Some(Self::Input(input.clone()))
        } else if let Some(select) = value.dyn_ref::<HtmlSelectElement>() {
            Some(Self::Select(select.clone()))
        } else {
            value
                .dyn_ref::<HtmlTextAreaElement>()
                .map(|textarea| Self::TextArea(textarea.clone()))
        }
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => el.unchecked_ref(),
            Self::Select(el) => el.unchecked_ref(),
            Self::TextArea(el) => el.unchecked_ref(),
        }
    }

    fn native_validity(&self) -> ValidityState {
        match self {
            Self::Input(el) => el.validity(),
            Self::Select(el) => el.validity(),
            Self::TextArea(el) => el.validity(),
        }
    }
}

fn is_flagged(state: &ValidityState, check: ValidityCheck) -> bool {
    match check {
        ValidityCheck::ValueMissing => state.value_missing(),
        ValidityCheck::BadInput => state.bad_input(),
        ValidityCheck::PatternMismatch => state.pattern_mismatch(),
        ValidityCheck::RangeOverflow => state.range_overflow(),
        ValidityCheck::RangeUnderflow => state.range_underflow(),
        ValidityCheck::StepMismatch => state.step_mismatch(),
        ValidityCheck::TooLong => state.too_long(),
        ValidityCheck::TooShort => state.too_short(),
        ValidityCheck::TypeMismatch => state.type_mismatch(),
    }
}

/// Reads `state`, leaving out the `customError` marker we set ourselves
fn validity_flags(state: &ValidityState) -> ValidityFlags {
    let mut flags = ValidityFlags::from_violations(
        ValidityCheck::ALL
            .into_iter()
            .filter(|check| is_flagged(state, *check)),
    );
    flags.valid = !flags.any_violation() && (state.valid() || state.custom_error());
    flags
}

impl FormControl for DomControl {
    fn name(&self) -> String {
        match self {
            Self::Input(el) => el.name(),
            Self::Select(el) => el.name(),
            Self::TextArea(el) => el.name(),
        }
    }

    fn control_type(&self) -> String {
        match self {
            Self::Input(el) => el.type_(),
            Self::Select(el) => el.type_(),
            Self::TextArea(el) => el.type_(),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn is_disabled(&self) -> bool {
        match self {
            Self::Input(el) => el.disabled(),
            Self::Select(el) => el.disabled(),
            Self::TextArea(el) => el.disabled(),
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element().get_attribute(name)
    }

    fn validity(&self) -> ValidityFlags {
        validity_flags(&self.native_validity())
    }

    fn set_custom_validity(&self, message: &str) {
        match self {
            Self::Input(el) => el.set_custom_validity(message),
            Self::Select(el) => el.set_custom_validity(message),
            Self::TextArea(el) => el.set_custom_validity(message),
        }
    }

    fn focus(&self) {
        if let Err(e) = self.element().focus() {
            warn(&format!("Failed to focus field \"{}\": {:?}", self.name(), e));
        }
    }
}

/// The `<form>` being validated
#[derive(Debug, Clone)]
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl Form for DomForm {
    type Control = DomControl;

    /// `input`, `select` and `textarea` elements of `form.elements`, in order
    fn controls(&self) -> Vec<DomControl> {
        let elements = self.form.elements();
        (0..elements.length())
            .filter_map(|i| elements.item(i))
            .filter_map(|element| DomControl::from_js(&element))
            .collect()
    }

    fn disable_native_validation(&self) {
        self.form.set_no_validate(true);
    }
}

/// Renders error lists as `<ul class="{marker}"><li>..</li></ul>` after the control
#[derive(Debug, Clone)]
pub struct DomPresenter {
    document: Document,
}

impl DomPresenter {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn try_insert(&self, control: &DomControl, marker: &str, errors: &[String]) -> Result<(), JsValue> {
        let list = self.document.create_element("ul")?;
        list.class_list().add_1(marker)?;

        for error in errors {
            let item = self.document.create_element("li")?;
            item.set_text_content(Some(error));
            list.append_child(&item)?;
        }

        let element = control.element();
        if let Some(parent) = element.parent_node() {
            parent.insert_before(&list, element.next_sibling().as_ref())?;
        }
        Ok(())
    }
}

impl ErrorPresenter<DomControl> for DomPresenter {
    fn remove_error_list(&self, control: &DomControl, marker: &str) {
        if let Some(next) = control.element().next_element_sibling() {
            if next.class_list().contains(marker) {
                next.remove();
            }
        }
    }

    fn insert_error_list(&self, control: &DomControl, marker: &str, errors: &[String]) {
        if let Err(e) = self.try_insert(control, marker, errors) {
            warn(&format!("Failed to render errors for \"{}\": {:?}", control.name(), e));
        }
    }
}

/// Applies redraws from `requestAnimationFrame`
///
/// After each redraw the form's validity is re-queried so `:invalid`
/// styling follows the custom validity markers.
#[derive(Debug, Clone)]
pub struct AnimationFrameScheduler {
    window: Window,
    form: HtmlFormElement,
    presenter: Rc<DomPresenter>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window, form: HtmlFormElement, presenter: DomPresenter) -> Self {
        Self {
            window,
            form,
            presenter: Rc::new(presenter),
        }
    }
}

impl RedrawScheduler<DomControl> for AnimationFrameScheduler {
    fn schedule(&self, redraw: Redraw<DomControl>) {
        let presenter = Rc::clone(&self.presenter);
        let form = self.form.clone();

        let callback = Closure::once_into_js(move || {
            redraw.apply(presenter.as_ref());
            form.check_validity();
        });

        if let Err(e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            warn(&format!("Failed to schedule error redraw: {:?}", e));
        }
    }
}

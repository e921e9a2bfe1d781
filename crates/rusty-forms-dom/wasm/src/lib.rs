//! rusty-forms DOM validation WASM
//!
//! WebAssembly bindings that attach the rusty-forms validation pipeline to a
//! live `<form>`: native constraint violations and custom validators are
//! reported as error lists rendered after each field.
//!
//! # Example (JavaScript)
//! ```javascript
//! const validator = new Validator(document.querySelector('form'), {
//!     cssClasses: { errorContainer: 'field-errors' },
//! });
//!
//! validator.addValidator('email', (field, form) =>
//!     field.value.includes('@') ? null : 'Invalid ${type}');
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use rusty_forms_dom_core::{FormControl, FormValidator, OptionsOverrides, ValidatorOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

pub mod dom;

pub use dom::{AnimationFrameScheduler, DomControl, DomForm, DomPresenter};

type Inner = FormValidator<DomForm, AnimationFrameScheduler>;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Declarative validation attached to one form
#[wasm_bindgen]
pub struct Validator {
    inner: Rc<RefCell<Inner>>,
    form: HtmlFormElement,
    blur_listener: Option<Closure<dyn FnMut(Event)>>,
    submit_listener: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl Validator {
    /// Attaches validation to `form`
    ///
    /// `options` may be omitted; malformed options are reported on the
    /// console and the defaults are used instead. Fails only when the form
    /// is not attached to a window.
    #[wasm_bindgen(constructor)]
    pub fn new(form: HtmlFormElement, options: JsValue) -> Result<Validator, JsValue> {
        let options = resolve_options(options);

        let document = form
            .owner_document()
            .ok_or_else(|| JsValue::from_str("form has no owner document"))?;
        let window = document
            .default_view()
            .ok_or_else(|| JsValue::from_str("form is not attached to a window"))?;

        let validate_immediately = options.validate_immediately;
        let scheduler = AnimationFrameScheduler::new(window, form.clone(), DomPresenter::new(document));
        let inner = Rc::new(RefCell::new(FormValidator::new(
            DomForm::new(form.clone()),
            scheduler,
            options,
        )));

        let blur_listener = if validate_immediately {
            let handler = Rc::clone(&inner);
            let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let Some(control) = event.target().and_then(|target| DomControl::from_js(&target))
                else {
                    return;
                };
                handler.borrow().on_blur(&control);
            });
            form.add_event_listener_with_callback_and_bool(
                "blur",
                listener.as_ref().unchecked_ref(),
                true,
            )?;
            Some(listener)
        } else {
            None
        };

        let handler = Rc::clone(&inner);
        let submit_listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if handler.borrow().on_submit().is_cancelled() {
                event.prevent_default();
            }
        });
        form.add_event_listener_with_callback("submit", submit_listener.as_ref().unchecked_ref())?;

        Ok(Self {
            inner,
            form,
            blur_listener,
            submit_listener,
        })
    }

    /// Binds `validator(field, form)` to the field called `name`
    ///
    /// The function returns `null`/`undefined` when the value is fine, an
    /// empty string for the default error, or a message that may contain
    /// `${placeholder}` tokens.
    #[wasm_bindgen(js_name = addValidator)]
    pub fn add_validator(&self, name: &str, validator: js_sys::Function) -> Result<(), JsValue> {
        let mut inner = self
            .inner
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("cannot add a validator while validation is running"))?;

        inner
            .add_validator(name, move |control: &DomControl, form: &DomForm| {
                call_validator(&validator, control, form)
            })
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    /// Checks one field and schedules its error list redraw
    #[wasm_bindgen(js_name = checkField)]
    pub fn check_field(&self, field: &Element) -> Result<bool, JsValue> {
        let control = control_for(field)?;
        Ok(self.inner.borrow().check_field(&control))
    }

    /// Current error messages of one field, without touching the page
    #[wasm_bindgen(js_name = getErrors)]
    pub fn errors(&self, field: &Element) -> Result<JsValue, JsValue> {
        let control = control_for(field)?;
        let errors = self.inner.borrow().errors(&control);
        Ok(serde_wasm_bindgen::to_value(&errors)?)
    }

    /// Checks every field as a submission would; `true` when all pass
    pub fn validate(&self) -> bool {
        !self.inner.borrow().on_submit().is_cancelled()
    }
}

impl Drop for Validator {
    fn drop(&mut self) {
        if let Some(listener) = &self.blur_listener {
            let _ = self.form.remove_event_listener_with_callback_and_bool(
                "blur",
                listener.as_ref().unchecked_ref(),
                true,
            );
        }
        let _ = self
            .form
            .remove_event_listener_with_callback("submit", self.submit_listener.as_ref().unchecked_ref());
    }
}

fn resolve_options(options: JsValue) -> ValidatorOptions {
    if options.is_undefined() || options.is_null() {
        return ValidatorOptions::default();
    }

    match serde_wasm_bindgen::from_value::<OptionsOverrides>(options) {
        Ok(overrides) => ValidatorOptions::resolve(overrides),
        Err(e) => {
            warn(&format!("Ignoring malformed validator options: {}", e));
            ValidatorOptions::default()
        }
    }
}

fn control_for(field: &Element) -> Result<DomControl, JsValue> {
    DomControl::from_js(field)
        .ok_or_else(|| JsValue::from_str("element is not an input, select or textarea"))
}

/// Runs a JS validator; a thrown exception becomes a validator failure
fn call_validator(
    validator: &js_sys::Function,
    control: &DomControl,
    form: &DomForm,
) -> anyhow::Result<Option<String>> {
    let field: &JsValue = control.element().as_ref();
    let owner: &JsValue = form.element().as_ref();

    let result = validator.call2(&JsValue::NULL, field, owner).map_err(|e| {
        let reason = describe(&e);
        warn(&format!(
            "Validator for field \"{}\" threw: {}",
            control.name(),
            reason
        ));
        anyhow::anyhow!("validator threw: {}", reason)
    })?;

    if result.is_null() || result.is_undefined() {
        return Ok(None);
    }

    // Non-string results fall back to the default error
    Ok(Some(result.as_string().unwrap_or_default()))
}

fn describe(error: &JsValue) -> String {
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

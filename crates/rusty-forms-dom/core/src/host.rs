//! Host capabilities
//!
//! The pipeline never touches a document directly. Hosts (the browser
//! binding, or fakes in tests) implement these traits.

use crate::controller::Redraw;
use crate::validity::ValidityFlags;

/// A form control: `input`, `select` or `textarea`
pub trait FormControl {
    fn name(&self) -> String;

    /// The control's `type` (`"text"`, `"email"`, `"select-one"`, ...)
    fn control_type(&self) -> String;

    fn value(&self) -> String;

    fn is_disabled(&self) -> bool;

    /// Declared attribute, `None` when absent
    fn attribute(&self, name: &str) -> Option<String>;

    /// Current native constraint state
    fn validity(&self) -> ValidityFlags;

    /// Sets the custom validity marker; an empty message clears it
    fn set_custom_validity(&self, message: &str);

    fn focus(&self);
}

/// The form owning the controls
pub trait Form {
    type Control: FormControl + Clone;

    /// Every control, in document order
    fn controls(&self) -> Vec<Self::Control>;

    /// Looks a control up by name
    fn named_control(&self, name: &str) -> Option<Self::Control> {
        self.controls().into_iter().find(|control| control.name() == name)
    }

    /// Suppresses the browser's own validation bubbles (`novalidate`)
    fn disable_native_validation(&self);
}

/// Inserts and removes the rendered error list next to a control
pub trait ErrorPresenter<C> {
    /// Removes the list tagged with `marker` directly after `control`, if any
    fn remove_error_list(&self, control: &C, marker: &str);

    /// Inserts a list tagged with `marker` directly after `control`, one item per error
    fn insert_error_list(&self, control: &C, marker: &str, errors: &[String]);
}

/// Runs a [`Redraw`] once, at the next rendering opportunity
pub trait RedrawScheduler<C> {
    fn schedule(&self, redraw: Redraw<C>);
}

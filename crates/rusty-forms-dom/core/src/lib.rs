//! rusty-forms DOM validation core
//!
//! Host-agnostic pipeline behind declarative form validation in the browser.
//! Custom validator functions and templated messages are layered on top of
//! the native constraint-validation state of each form control.
//!
//! The DOM itself is reached only through the traits in [`host`], so the
//! whole pipeline runs (and is tested) without a browser. The
//! `rusty-forms-dom-wasm` crate implements those traits over `web-sys`.
//!
//! ## Example
//!
//! ```ignore
//! use rusty_forms_dom_core::{FormValidator, ValidatorOptions};
//!
//! let mut validator = FormValidator::new(form, scheduler, ValidatorOptions::default());
//!
//! validator.add_validator("email", |field, _form| {
//!     Ok((!field.value().contains('@')).then(|| "Invalid ${type}".to_string()))
//! })?;
//!
//! if validator.on_submit().is_cancelled() {
//!     // focus already moved to the first invalid control
//! }
//! ```

pub mod collector;
pub mod controller;
pub mod error;
pub mod host;
pub mod options;
pub mod registry;
pub mod template;
pub mod validity;

pub use collector::collect;
pub use controller::{FormValidator, Redraw, SubmitOutcome};
pub use error::ValidatorError;
pub use host::{ErrorPresenter, Form, FormControl, RedrawScheduler};
pub use options::{CssClasses, OptionsOverrides, ValidatorOptions, DEFAULT_ERROR_KEY};
pub use registry::{ValidatorFn, ValidatorRegistry};
pub use template::{render, Placeholders};
pub use validity::{ValidityCheck, ValidityFlags};

//! Validation controller
//!
//! Orchestrates checks on blur and on submit. Each check runs in two
//! phases: the verdict is computed synchronously and returned, while the
//! presentation update is handed to the host's [`RedrawScheduler`] as a
//! [`Redraw`] value to be applied later.

use crate::collector::collect;
use crate::error::ValidatorError;
use crate::host::{ErrorPresenter, Form, FormControl, RedrawScheduler};
use crate::options::ValidatorOptions;
use crate::registry::ValidatorRegistry;

/// Custom validity message set on controls that failed a check
const INVALID_MARKER: &str = "errors";

/// Presentation update for one control
///
/// Applying it always removes the previous list first, so stale errors
/// never outlive a fix and repeated redraws are idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redraw<C> {
    pub control: C,
    pub marker: String,
    pub errors: Vec<String>,
}

impl<C> Redraw<C> {
    pub fn apply<P>(&self, presenter: &P)
    where
        P: ErrorPresenter<C> + ?Sized,
    {
        presenter.remove_error_list(&self.control, &self.marker);
        if !self.errors.is_empty() {
            presenter.insert_error_list(&self.control, &self.marker, &self.errors);
        }
    }
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<C> {
    /// Every control passed; let the submission go through
    Proceed,
    /// At least one control failed; focus moved to the first of them
    Cancelled { first_invalid: C },
}

impl<C> SubmitOutcome<C> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SubmitOutcome::Cancelled { .. })
    }
}

/// Validation attached to one form
pub struct FormValidator<F, S>
where
    F: Form,
{
    form: F,
    scheduler: S,
    options: ValidatorOptions,
    registry: ValidatorRegistry<F::Control, F>,
}

impl<F, S> FormValidator<F, S>
where
    F: Form,
    S: RedrawScheduler<F::Control>,
{
    /// Takes over validation of `form`
    ///
    /// Native validation UI is switched off on the form right away. Wiring
    /// `blur` (when [`ValidatorOptions::validate_immediately`] is set) and
    /// `submit` to [`on_blur`](Self::on_blur) / [`on_submit`](Self::on_submit)
    /// is left to the host.
    pub fn new(form: F, scheduler: S, options: ValidatorOptions) -> Self {
        form.disable_native_validation();

        Self {
            form,
            scheduler,
            options,
            registry: ValidatorRegistry::new(),
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn registry(&self) -> &ValidatorRegistry<F::Control, F> {
        &self.registry
    }

    /// Binds a custom validator to the control called `name`
    pub fn add_validator<V>(&mut self, name: &str, validator: V) -> Result<(), ValidatorError>
    where
        V: Fn(&F::Control, &F) -> anyhow::Result<Option<String>> + 'static,
    {
        self.registry.register(&self.form, name, validator)
    }

    /// Error list for `control`, without side effects
    pub fn errors(&self, control: &F::Control) -> Vec<String> {
        collect(control, &self.form, &self.registry, &self.options)
    }

    /// Checks one control and schedules its redraw
    ///
    /// Returns whether the control is error-free. The custom validity
    /// marker is updated immediately so native validity queries agree.
    pub fn check_field(&self, control: &F::Control) -> bool {
        let errors = self.errors(control);
        let valid = errors.is_empty();

        control.set_custom_validity(if valid { "" } else { INVALID_MARKER });

        tracing::debug!(
            field = %control.name(),
            valid,
            errors = errors.len(),
            "Checked field"
        );

        self.scheduler.schedule(Redraw {
            control: control.clone(),
            marker: self.options.error_container().to_string(),
            errors,
        });

        valid
    }

    /// Handles a control losing focus
    pub fn on_blur(&self, control: &F::Control) -> bool {
        self.check_field(control)
    }

    /// Handles a submission attempt
    ///
    /// Every control is checked, in document order, even after one fails.
    /// When any fails, the first failing control receives focus.
    pub fn on_submit(&self) -> SubmitOutcome<F::Control> {
        let mut first_invalid = None;

        for control in self.form.controls() {
            if !self.check_field(&control) && first_invalid.is_none() {
                first_invalid = Some(control);
            }
        }

        match first_invalid {
            Some(control) => {
                tracing::debug!(field = %control.name(), "Submission cancelled");
                control.focus();
                SubmitOutcome::Cancelled {
                    first_invalid: control,
                }
            }
            None => SubmitOutcome::Proceed,
        }
    }
}

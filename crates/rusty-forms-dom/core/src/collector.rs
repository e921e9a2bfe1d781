//! Error collection for a single control

use crate::host::{Form, FormControl};
use crate::options::ValidatorOptions;
use crate::registry::ValidatorRegistry;
use crate::template::{render, Placeholders};

/// Computes the ordered error list for `control`
///
/// Disabled controls and ignored types yield nothing. Otherwise custom
/// validators run first, in registration order, followed by the native
/// categories in `options.validation_checks` order. An invalid native state
/// that matches none of the configured categories reports `defaultError`
/// once, so an invalid control never comes back with an empty list.
pub fn collect<F>(
    control: &F::Control,
    form: &F,
    registry: &ValidatorRegistry<F::Control, F>,
    options: &ValidatorOptions,
) -> Vec<String>
where
    F: Form,
{
    let mut errors = Vec::new();

    if control.is_disabled() || options.is_ignored_type(&control.control_type()) {
        return errors;
    }

    let name = control.name();
    let placeholders = Placeholders::from_control(control);

    for validator in registry.validators_for(&name) {
        match validator(control, form) {
            Ok(None) => {}
            Ok(Some(message)) => {
                let template = if message.is_empty() {
                    options.default_error()
                } else {
                    message.as_str()
                };
                errors.push(render(template, Some(&placeholders)));
            }
            Err(e) => {
                tracing::warn!(field = %name, error = %e, "Custom validator failed");
                errors.push(render(options.default_error(), Some(&placeholders)));
            }
        }
    }

    let validity = control.validity();
    if validity.valid {
        return errors;
    }

    let before = errors.len();
    for check in &options.validation_checks {
        if validity.is_violated(*check) {
            errors.push(render(options.translation(check.as_str()), Some(&placeholders)));
        }
    }

    if errors.len() == before {
        errors.push(render(options.default_error(), Some(&placeholders)));
    }

    errors
}

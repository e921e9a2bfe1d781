//! Validator registry
//!
//! Binds custom validator functions to control names. Bindings are
//! append-only; every validator bound to a name runs, in registration
//! order, each time that control is checked.

use std::collections::HashMap;
use std::fmt;

use crate::error::ValidatorError;
use crate::host::Form;

/// A custom validator
///
/// Receives the control and its form. `Ok(None)` means no error,
/// `Ok(Some(""))` asks for the `defaultError` translation and any other
/// message is rendered as a template. `Err` reports that the validator
/// itself failed.
pub type ValidatorFn<C, F> = Box<dyn Fn(&C, &F) -> anyhow::Result<Option<String>>>;

pub struct ValidatorRegistry<C, F> {
    validators: HashMap<String, Vec<ValidatorFn<C, F>>>,
}

impl<C, F> Default for ValidatorRegistry<C, F> {
    fn default() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }
}

impl<C, F> ValidatorRegistry<C, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validators bound to `name`, in registration order
    pub fn validators_for(&self, name: &str) -> &[ValidatorFn<C, F>] {
        self.validators
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Number of registered validators across all names
    pub fn len(&self) -> usize {
        self.validators.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<F> ValidatorRegistry<F::Control, F>
where
    F: Form,
{
    /// Appends `validator` to the list bound to `name`
    ///
    /// Fails with [`ValidatorError::FieldNotFound`] when `form` has no
    /// control called `name`; the registry is left untouched in that case.
    /// Existence is only checked here, not on later validation passes.
    pub fn register<V>(&mut self, form: &F, name: &str, validator: V) -> Result<(), ValidatorError>
    where
        V: Fn(&F::Control, &F) -> anyhow::Result<Option<String>> + 'static,
    {
        if form.named_control(name).is_none() {
            return Err(ValidatorError::FieldNotFound(name.to_string()));
        }

        self.validators
            .entry(name.to_string())
            .or_default()
            .push(Box::new(validator));

        tracing::debug!(field = name, "Registered custom validator");
        Ok(())
    }
}

impl<C, F> fmt::Debug for ValidatorRegistry<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .validators
            .iter()
            .map(|(name, validators)| (name.as_str(), validators.len()))
            .collect();

        f.debug_struct("ValidatorRegistry")
            .field("validators", &counts)
            .finish()
    }
}

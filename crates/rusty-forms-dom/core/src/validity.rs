//! Native constraint-validation model
//!
//! Mirrors the browser's `ValidityState`: nine violation categories plus an
//! overall `valid` flag maintained by the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A native constraint category, named as on `ValidityState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidityCheck {
    ValueMissing,
    BadInput,
    PatternMismatch,
    RangeOverflow,
    RangeUnderflow,
    StepMismatch,
    TooLong,
    TooShort,
    TypeMismatch,
}

impl ValidityCheck {
    /// All categories, in the default reporting order
    pub const ALL: [ValidityCheck; 9] = [
        ValidityCheck::ValueMissing,
        ValidityCheck::BadInput,
        ValidityCheck::PatternMismatch,
        ValidityCheck::RangeOverflow,
        ValidityCheck::RangeUnderflow,
        ValidityCheck::StepMismatch,
        ValidityCheck::TooLong,
        ValidityCheck::TooShort,
        ValidityCheck::TypeMismatch,
    ];

    /// The `ValidityState` property name, also used as the translation key
    pub fn as_str(self) -> &'static str {
        match self {
            ValidityCheck::ValueMissing => "valueMissing",
            ValidityCheck::BadInput => "badInput",
            ValidityCheck::PatternMismatch => "patternMismatch",
            ValidityCheck::RangeOverflow => "rangeOverflow",
            ValidityCheck::RangeUnderflow => "rangeUnderflow",
            ValidityCheck::StepMismatch => "stepMismatch",
            ValidityCheck::TooLong => "tooLong",
            ValidityCheck::TooShort => "tooShort",
            ValidityCheck::TypeMismatch => "typeMismatch",
        }
    }
}

impl fmt::Display for ValidityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a control's constraint state
///
/// `valid` is kept separately from the category flags because a host may
/// report a control invalid for a reason none of the categories describe.
/// Hosts must leave the custom validity marker set by
/// [`FormValidator::check_field`](crate::FormValidator::check_field) out of
/// `valid`, otherwise a control would keep failing on its own verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityFlags {
    pub valid: bool,
    pub value_missing: bool,
    pub bad_input: bool,
    pub pattern_mismatch: bool,
    pub range_overflow: bool,
    pub range_underflow: bool,
    pub step_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub type_mismatch: bool,
}

impl Default for ValidityFlags {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidityFlags {
    /// A fully valid state
    pub fn valid() -> Self {
        Self {
            valid: true,
            value_missing: false,
            bad_input: false,
            pattern_mismatch: false,
            range_overflow: false,
            range_underflow: false,
            step_mismatch: false,
            too_long: false,
            too_short: false,
            type_mismatch: false,
        }
    }

    /// An invalid state with no category flagged
    pub fn invalid() -> Self {
        Self {
            valid: false,
            ..Self::valid()
        }
    }

    /// Builds a state from the violated categories; valid when `checks` is empty
    pub fn from_violations<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = ValidityCheck>,
    {
        checks.into_iter().fold(Self::valid(), Self::with)
    }

    /// Flags `check` as violated (and the state as invalid)
    pub fn with(mut self, check: ValidityCheck) -> Self {
        *self.flag_mut(check) = true;
        self.valid = false;
        self
    }

    pub fn is_violated(&self, check: ValidityCheck) -> bool {
        match check {
            ValidityCheck::ValueMissing => self.value_missing,
            ValidityCheck::BadInput => self.bad_input,
            ValidityCheck::PatternMismatch => self.pattern_mismatch,
            ValidityCheck::RangeOverflow => self.range_overflow,
            ValidityCheck::RangeUnderflow => self.range_underflow,
            ValidityCheck::StepMismatch => self.step_mismatch,
            ValidityCheck::TooLong => self.too_long,
            ValidityCheck::TooShort => self.too_short,
            ValidityCheck::TypeMismatch => self.type_mismatch,
        }
    }

    /// True when any of the nine categories is flagged
    pub fn any_violation(&self) -> bool {
        ValidityCheck::ALL.iter().any(|check| self.is_violated(*check))
    }

    fn flag_mut(&mut self, check: ValidityCheck) -> &mut bool {
        match check {
            ValidityCheck::ValueMissing => &mut self.value_missing,
            ValidityCheck::BadInput => &mut self.bad_input,
            ValidityCheck::PatternMismatch => &mut self.pattern_mismatch,
            ValidityCheck::RangeOverflow => &mut self.range_overflow,
            ValidityCheck::RangeUnderflow => &mut self.range_underflow,
            ValidityCheck::StepMismatch => &mut self.step_mismatch,
            ValidityCheck::TooLong => &mut self.too_long,
            ValidityCheck::TooShort => &mut self.too_short,
            ValidityCheck::TypeMismatch => &mut self.type_mismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let flags = ValidityFlags::default();
        assert!(flags.valid);
        assert!(!flags.any_violation());
    }

    #[test]
    fn test_with_marks_invalid() {
        let flags = ValidityFlags::valid().with(ValidityCheck::RangeUnderflow);
        assert!(!flags.valid);
        assert!(flags.is_violated(ValidityCheck::RangeUnderflow));
        assert!(!flags.is_violated(ValidityCheck::RangeOverflow));
    }

    #[test]
    fn test_invalid_without_category() {
        let flags = ValidityFlags::invalid();
        assert!(!flags.valid);
        assert!(!flags.any_violation());
    }

    #[test]
    fn test_from_violations_empty_is_valid() {
        assert_eq!(ValidityFlags::from_violations(Vec::<ValidityCheck>::new()), ValidityFlags::valid());
    }

    #[test]
    fn test_check_names_match_dom() {
        assert_eq!(ValidityCheck::TooShort.as_str(), "tooShort");
        assert_eq!(
            serde_json::to_string(&ValidityCheck::PatternMismatch).unwrap(),
            "\"patternMismatch\""
        );
    }
}

//! Message templating
//!
//! Translations carry `${name}` tokens which are filled from the control
//! being checked.

use crate::host::FormControl;

/// Placeholder key and the control attribute it is read from
const ATTRIBUTE_PLACEHOLDERS: [(&str, &str); 7] = [
    ("pattern", "pattern"),
    ("max", "max"),
    ("min", "min"),
    ("maxLength", "maxlength"),
    ("minLength", "minlength"),
    ("title", "title"),
    ("step", "step"),
];

/// Ordered placeholder values for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: Vec<(String, String)>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects `value`, `name`, `type` and the constraint attributes of `control`
    ///
    /// Absent attributes become empty strings.
    pub fn from_control<C: FormControl + ?Sized>(control: &C) -> Self {
        let mut placeholders = Self::new()
            .with("value", control.value())
            .with("name", control.name())
            .with("type", control.control_type());

        for (key, attribute) in ATTRIBUTE_PLACEHOLDERS {
            placeholders.insert(key, control.attribute(attribute).unwrap_or_default());
        }

        placeholders
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key`, replacing an earlier value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Fills `${key}` tokens in `template`
///
/// The template is scanned once, left to right: every token whose key is
/// known is replaced, matching case exactly, and inserted values are never
/// scanned again. Tokens without a value are left as they are.
pub fn render(template: &str, placeholders: Option<&Placeholders>) -> String {
    let Some(placeholders) = placeholders else {
        return template.to_string();
    };

    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        rendered.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let value = after_open
            .find('}')
            .and_then(|end| placeholders.get(&after_open[..end]).map(|value| (end, value)));

        match value {
            Some((end, value)) => {
                rendered.push_str(value);
                rest = &after_open[end + 1..];
            }
            None => {
                rendered.push_str("${");
                rest = after_open;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

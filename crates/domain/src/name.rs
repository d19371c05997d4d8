use derive_more::{AsRef, Display};

/// Customer name as entered.
///
/// Only the raw value is checked for emptiness. Surrounding whitespace is
/// kept, so a name consisting of spaces is accepted and stored unchanged.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Name(name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name is a required field.")]
    Empty,
}

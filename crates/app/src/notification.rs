use customer_info_domain::{Customer, StorageError, SubmitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Message shown to the user in a modal dialog after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn submitted() -> Self {
        Self {
            severity: Severity::Success,
            title: "Success".to_string(),
            message: "Customer information submitted successfully!".to_string(),
        }
    }

    #[must_use]
    pub fn input_error(message: impl ToString) -> Self {
        Self {
            severity: Severity::Warning,
            title: "Input Error".to_string(),
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn database_error(error: &StorageError) -> Self {
        Self {
            severity: Severity::Error,
            title: "Database Error".to_string(),
            message: format!("An error occurred: {error}"),
        }
    }
}

impl From<&Result<Customer, SubmitError>> for Notification {
    fn from(value: &Result<Customer, SubmitError>) -> Self {
        match value {
            Ok(_) => Notification::submitted(),
            Err(SubmitError::Validation(error)) => Notification::input_error(error),
            Err(SubmitError::Storage(error)) => Notification::database_error(error),
        }
    }
}

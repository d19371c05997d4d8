use std::slice::Iter;

use derive_more::{Deref, Display};

use crate::{CustomerForm, FormState, Name, StorageError, SubmitError};

pub trait CustomerService {
    fn initialize(&self) -> Result<(), StorageError>;
    fn create_customer(&self, customer: NewCustomer) -> Result<Customer, StorageError>;

    /// Validates the form, stores its contents as a new customer and clears it.
    ///
    /// The form keeps its values if validation or storage fails.
    fn submit(&self, form: &mut CustomerForm) -> Result<Customer, SubmitError> {
        let new_customer = form.validate()?;

        form.state = FormState::Submitting;
        let result = self.create_customer(new_customer);
        form.state = FormState::Editable;

        let customer = result?;
        form.clear();
        Ok(customer)
    }
}

pub trait CustomerRepository {
    fn ensure_schema(&self) -> Result<(), StorageError>;
    fn create_customer(&self, customer: NewCustomer) -> Result<Customer, StorageError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: Name,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: Option<ContactMethod>,
}

impl NewCustomer {
    #[must_use]
    pub fn with_id(self, id: CustomerID) -> Customer {
        Customer {
            id,
            name: self.name,
            birthday: self.birthday,
            email: self.email,
            phone: self.phone,
            address: self.address,
            contact_method: self.contact_method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerID,
    pub name: Name,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: Option<ContactMethod>,
}

#[derive(Deref, Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerID(i64);

impl From<i64> for CustomerID {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum ContactMethod {
    #[display("Email")]
    Email,
    #[display("Phone")]
    Phone,
    #[display("Mail")]
    Mail,
}

impl ContactMethod {
    pub fn iter() -> Iter<'static, ContactMethod> {
        static CONTACT_METHOD: [ContactMethod; 3] = [
            ContactMethod::Email,
            ContactMethod::Phone,
            ContactMethod::Mail,
        ];
        CONTACT_METHOD.iter()
    }

    /// Maps a selector value to a contact method. The empty string means no selection.
    pub fn from_selection(value: &str) -> Result<Option<Self>, ContactMethodError> {
        if value.is_empty() {
            Ok(None)
        } else {
            ContactMethod::try_from(value).map(Some)
        }
    }
}

impl TryFrom<&str> for ContactMethod {
    type Error = ContactMethodError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Email" => Ok(ContactMethod::Email),
            "Phone" => Ok(ContactMethod::Phone),
            "Mail" => Ok(ContactMethod::Mail),
            _ => Err(ContactMethodError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ContactMethodError {
    #[error("Unknown contact method: {0}")]
    Unknown(String),
}

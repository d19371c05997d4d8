use crate::{ContactMethod, Name, NewCustomer, ValidationError};

/// Raw values of the six input fields, exactly as entered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CustomerFields {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_method: Option<ContactMethod>,
}

impl CustomerFields {
    pub fn validate(self) -> Result<NewCustomer, ValidationError> {
        Ok(NewCustomer {
            name: Name::new(&self.name)?,
            birthday: self.birthday,
            email: self.email,
            phone: self.phone,
            address: self.address,
            contact_method: self.contact_method,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editable,
    Submitting,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CustomerForm {
    pub fields: CustomerFields,
    pub(crate) state: FormState,
}

impl CustomerForm {
    #[must_use]
    pub fn new(fields: CustomerFields) -> Self {
        Self {
            fields,
            state: FormState::Editable,
        }
    }

    #[must_use]
    pub fn collect(&self) -> CustomerFields {
        self.fields.clone()
    }

    pub fn validate(&self) -> Result<NewCustomer, ValidationError> {
        self.collect().validate()
    }

    /// Empties all fields. The contact method is reset to no selection.
    pub fn clear(&mut self) {
        self.fields = CustomerFields::default();
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }
}

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod customer;
mod error;
mod form;
mod name;
mod service;

pub use customer::{
    ContactMethod, ContactMethodError, Customer, CustomerID, CustomerRepository,
    CustomerService, NewCustomer,
};
pub use error::{StorageError, SubmitError, ValidationError};
pub use form::{CustomerFields, CustomerForm, FormState};
pub use name::{Name, NameError};
pub use service::Service;

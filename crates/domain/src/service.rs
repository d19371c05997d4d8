use log::{debug, error, info};

use crate::{Customer, CustomerRepository, CustomerService, NewCustomer, StorageError};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: CustomerRepository> CustomerService for Service<R> {
    fn initialize(&self) -> Result<(), StorageError> {
        log_on_error!(self.repository.ensure_schema(), "initialize", "schema")?;
        debug!("customer schema is ready");
        Ok(())
    }

    fn create_customer(&self, customer: NewCustomer) -> Result<Customer, StorageError> {
        let customer = log_on_error!(
            self.repository.create_customer(customer),
            "create",
            "customer"
        )?;
        info!("created customer {}", customer.id);
        Ok(customer)
    }
}

use std::path::{Path, PathBuf};

use customer_info_domain as domain;
use log::debug;
use rusqlite::{Connection, params};

const CREATE_CUSTOMERS: &str = "
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        birthday TEXT,
        email TEXT,
        phone TEXT,
        address TEXT,
        contact_method TEXT
    )
";

const INSERT_CUSTOMER: &str = "
    INSERT INTO customers (name, birthday, email, phone, address, contact_method)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

/// Customer table in a local SQLite file.
///
/// A connection is opened for each operation and closed again before returning.
#[derive(Debug, Clone)]
pub struct SQLite {
    path: PathBuf,
}

impl SQLite {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Connection, rusqlite::Error> {
        debug!("opening database {}", self.path.display());
        Connection::open(&self.path)
    }
}

fn close(connection: Connection) -> Result<(), rusqlite::Error> {
    connection.close().map_err(|(_, err)| err)
}

fn storage_error(err: rusqlite::Error) -> domain::StorageError {
    domain::StorageError::Other(err.into())
}

impl domain::CustomerRepository for SQLite {
    fn ensure_schema(&self) -> Result<(), domain::StorageError> {
        let connection = self.open().map_err(storage_error)?;
        connection
            .execute(CREATE_CUSTOMERS, [])
            .map_err(storage_error)?;
        close(connection).map_err(storage_error)
    }

    fn create_customer(
        &self,
        customer: domain::NewCustomer,
    ) -> Result<domain::Customer, domain::StorageError> {
        let connection = self.open().map_err(storage_error)?;
        connection
            .execute(
                INSERT_CUSTOMER,
                params![
                    customer.name.as_str(),
                    customer.birthday,
                    customer.email,
                    customer.phone,
                    customer.address,
                    customer
                        .contact_method
                        .map(|contact_method| contact_method.to_string())
                        .unwrap_or_default(),
                ],
            )
            .map_err(storage_error)?;
        let id = connection.last_insert_rowid();
        close(connection).map_err(storage_error)?;
        Ok(customer.with_id(id.into()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use customer_info_domain::{CustomerRepository, CustomerService};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use crate::tests::data::{JANE_DOE, Row, jane_doe_fields, read_rows, table_definitions};

    use super::*;

    fn sqlite(dir: &TempDir) -> SQLite {
        SQLite::new(dir.path().join("customer_info.db"))
    }

    #[test]
    fn test_ensure_schema_creates_file_and_table() {
        let dir = TempDir::new().unwrap();
        let sqlite = sqlite(&dir);

        assert!(!sqlite.path().exists());
        sqlite.ensure_schema().unwrap();

        assert!(sqlite.path().exists());
        assert_eq!(table_definitions(sqlite.path()).len(), 1);
        assert!(read_rows(sqlite.path()).is_empty());
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let sqlite = sqlite(&dir);

        sqlite.ensure_schema().unwrap();
        let definitions = table_definitions(sqlite.path());
        sqlite.create_customer(JANE_DOE.clone()).unwrap();

        for _ in 0..3 {
            sqlite.ensure_schema().unwrap();
        }

        assert_eq!(table_definitions(sqlite.path()), definitions);
        assert_eq!(read_rows(sqlite.path()).len(), 1);
    }

    #[test]
    fn test_create_customer() {
        let dir = TempDir::new().unwrap();
        let sqlite = sqlite(&dir);
        sqlite.ensure_schema().unwrap();

        let customer = sqlite.create_customer(JANE_DOE.clone()).unwrap();

        assert_eq!(customer, JANE_DOE.clone().with_id(1.into()));
        assert_eq!(
            read_rows(sqlite.path()),
            vec![Row {
                id: 1,
                name: "Jane Doe".to_string(),
                birthday: Some("1990-05-01".to_string()),
                email: Some("jane@example.com".to_string()),
                phone: Some("555-1234".to_string()),
                address: Some("1 Main St".to_string()),
                contact_method: Some("Email".to_string()),
            }]
        );
    }

    #[rstest]
    #[case(domain::ContactMethod::Email, "Email")]
    #[case(domain::ContactMethod::Phone, "Phone")]
    #[case(domain::ContactMethod::Mail, "Mail")]
    fn test_create_customer_contact_method(
        #[case] contact_method: domain::ContactMethod,
        #[case] stored: &str,
    ) {
        let dir = TempDir::new().unwrap();
        let sqlite = sqlite(&dir);
        sqlite.ensure_schema().unwrap();

        sqlite
            .create_customer(domain::NewCustomer {
                contact_method: Some(contact_method),
                ..JANE_DOE.clone()
            })
            .unwrap();

        assert_eq!(
            read_rows(sqlite.path())[0].contact_method,
            Some(stored.to_string())
        );
    }

    #[test]
    fn test_create_customer_stores_values_verbatim() {
        let dir = TempDir::new().unwrap();
        let sqlite = sqlite(&dir);
        sqlite.ensure_schema().unwrap();

        sqlite
            .create_customer(domain::NewCustomer {
                name: domain::Name::new("  Robert'); DROP TABLE customers;--").unwrap(),
                birthday: "someday".to_string(),
                email: String::new(),
                phone: " 555 ".to_string(),
                address: "1 Main St\nApt 2".to_string(),
                contact_method: None,
            })
            .unwrap();

        assert_eq!(
            read_rows(sqlite.path()),
            vec![Row {
                id: 1,
                name: "  Robert'); DROP TABLE customers;--".to_string(),
                birthday: Some("someday".to_string()),
                email: Some(String::new()),
                phone: Some(" 555 ".to_string()),
                address: Some("1 Main St\nApt 2".to_string()),
                contact_method: Some(String::new()),
            }]
        );
    }

    #[test]
    fn test_create_customer_twice() {
        let dir = TempDir::new().unwrap();
        let sqlite = sqlite(&dir);
        sqlite.ensure_schema().unwrap();

        let first = sqlite.create_customer(JANE_DOE.clone()).unwrap();
        let second = sqlite.create_customer(JANE_DOE.clone()).unwrap();

        assert!(first.id < second.id);
        let rows = read_rows(sqlite.path());
        assert_eq!(rows.len(), 2);
        assert!(rows[0].id < rows[1].id);
        assert_eq!(
            Row {
                id: rows[1].id,
                ..rows[0].clone()
            },
            rows[1]
        );
    }

    #[test]
    fn test_create_customer_without_schema() {
        let dir = TempDir::new().unwrap();
        let sqlite = sqlite(&dir);

        assert!(matches!(
            sqlite.create_customer(JANE_DOE.clone()),
            Err(domain::StorageError::Other(err)) if err.to_string().contains("no such table: customers")
        ));
    }

    #[test]
    fn test_unwritable_location() {
        let dir = TempDir::new().unwrap();
        let sqlite = SQLite::new(dir.path().join("missing").join("customer_info.db"));

        assert!(matches!(
            sqlite.ensure_schema(),
            Err(domain::StorageError::Other(err)) if err.to_string().contains("unable to open database file")
        ));
        assert!(matches!(
            sqlite.create_customer(JANE_DOE.clone()),
            Err(domain::StorageError::Other(err)) if err.to_string().contains("unable to open database file")
        ));
    }

    #[test]
    fn test_corrupt_database_file() {
        let dir = TempDir::new().unwrap();
        let sqlite = sqlite(&dir);
        fs::write(sqlite.path(), "x".repeat(4096)).unwrap();

        assert!(matches!(
            sqlite.ensure_schema(),
            Err(domain::StorageError::Other(err)) if err.to_string().contains("file is not a database")
        ));
    }

    #[test]
    fn test_submit_scenarios() {
        let dir = TempDir::new().unwrap();
        let service = domain::Service::new(sqlite(&dir));
        service.initialize().unwrap();

        let mut form = domain::CustomerForm::new(domain::CustomerFields {
            name: String::new(),
            ..jane_doe_fields()
        });
        assert!(matches!(
            service.submit(&mut form),
            Err(domain::SubmitError::Validation(_))
        ));
        assert!(read_rows(&dir.path().join("customer_info.db")).is_empty());
        assert_eq!(form.fields.email, "jane@example.com");

        form.fields = jane_doe_fields();
        let customer = service.submit(&mut form).unwrap();
        assert_eq!(*customer.id, 1);
        assert!(form.fields.is_empty());
        assert_eq!(form.fields.contact_method, None);

        let rows = read_rows(&dir.path().join("customer_info.db"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Jane Doe");
        assert_eq!(rows[0].contact_method, Some("Email".to_string()));
    }

    #[test]
    fn test_submit_to_unwritable_location_keeps_form() {
        let dir = TempDir::new().unwrap();
        let service =
            domain::Service::new(SQLite::new(dir.path().join("missing").join("customer_info.db")));
        let mut form = domain::CustomerForm::new(jane_doe_fields());

        assert!(matches!(
            service.submit(&mut form),
            Err(domain::SubmitError::Storage(domain::StorageError::Other(err)))
                if err.to_string().contains("unable to open database file")
        ));
        assert_eq!(form.fields, jane_doe_fields());
        assert_eq!(form.state(), domain::FormState::Editable);
    }
}

//! Customer repository for database operations.
//!
//! Registration itself (forms, login) lives with the identity collaborator;
//! this repository only persists the validated result and resolves ids.

use sqlx::SqlitePool;

use cafe_central_core::{CustomerId, Phone};

use super::RepositoryError;
use crate::models::Customer;

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    phone: String,
}

impl CustomerRow {
    fn into_customer(self) -> Result<Customer, RepositoryError> {
        let phone = Phone::parse(&self.phone).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid phone in database: {e}"))
        })?;

        Ok(Customer {
            id: CustomerId::new(self.id),
            name: self.name,
            phone,
        })
    }
}

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the name is blank.
    /// Returns `RepositoryError::Conflict` if the phone number is already
    /// registered.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, name: &str, phone: &Phone) -> Result<Customer, RepositoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RepositoryError::Validation(
                "customer name cannot be empty".to_owned(),
            ));
        }

        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            INSERT INTO customers (name, phone)
            VALUES (?1, ?2)
            RETURNING id, name, phone
            ",
        )
        .bind(name)
        .bind(phone.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("phone number already registered".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.into_customer()
    }

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored phone is
    /// invalid.
    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT id, name, phone
            FROM customers
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(CustomerRow::into_customer).transpose()
    }
}

//! Integration tests for customer registration records.

use cafe_central_core::{CustomerId, Phone};
use cafe_central_ledger::db::{CustomerRepository, RepositoryError};

use cafe_central_integration_tests::{register_customer, test_pool};

#[tokio::test]
async fn duplicate_phone_is_a_conflict() {
    let pool = test_pool().await;
    register_customer(&pool, "Asha", "555-0100").await;

    let phone = Phone::parse("555-0100").expect("phone");
    let result = CustomerRepository::new(&pool).create("Ravi", &phone).await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[tokio::test]
async fn blank_name_rejected() {
    let pool = test_pool().await;

    let phone = Phone::parse("555-0100").expect("phone");
    let result = CustomerRepository::new(&pool).create("  ", &phone).await;

    assert!(matches!(result, Err(RepositoryError::Validation(_))));
}

#[tokio::test]
async fn get_resolves_registered_customer() {
    let pool = test_pool().await;
    let id = register_customer(&pool, "Asha", "555-0100").await;

    let customers = CustomerRepository::new(&pool);
    let customer = customers.get(id).await.expect("get").expect("exists");
    assert_eq!(customer.name, "Asha");
    assert_eq!(customer.phone.as_str(), "555-0100");

    assert!(
        customers
            .get(CustomerId::new(99))
            .await
            .expect("get")
            .is_none()
    );
}

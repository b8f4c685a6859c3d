//! Seed the database with a small sample data set.
//!
//! Intended for local development: a handful of menu items and one customer,
//! enough to click through a full order/review flow.

use cafe_central_core::{Phone, Price};
use cafe_central_ledger::db::{CatalogRepository, CustomerRepository, MIGRATOR, RepositoryError};
use tracing::info;

const SAMPLE_MENU: &[(&str, &str)] = &[
    ("Espresso", "3.00"),
    ("Latte", "4.50"),
    ("Cappuccino", "4.00"),
    ("Masala Chai", "2.50"),
    ("Banana Bread", "3.75"),
];

/// Migrate (if needed) and insert the sample menu and customer.
///
/// # Errors
///
/// Returns an error if the connection, a migration, or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    MIGRATOR.run(&pool).await?;

    let catalog = CatalogRepository::new(&pool);
    for &(name, price) in SAMPLE_MENU {
        let item = catalog.create_item(name, Price::parse(price)?).await?;
        info!(id = %item.id, name = %item.name, "Seeded menu item");
    }

    let customers = CustomerRepository::new(&pool);
    let phone = Phone::parse("555-0100")?;
    match customers.create("Asha", &phone).await {
        Ok(customer) => info!(id = %customer.id, "Seeded sample customer"),
        Err(RepositoryError::Conflict(_)) => info!("Sample customer already present"),
        Err(e) => return Err(e.into()),
    }

    info!("Seeding complete!");
    Ok(())
}

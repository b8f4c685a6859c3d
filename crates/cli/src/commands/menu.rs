//! Menu management commands (admin operations).

use cafe_central_core::Price;
use cafe_central_ledger::db::CatalogRepository;
use tracing::info;

/// Add a menu item.
///
/// # Errors
///
/// Returns an error if the price does not parse, the name is blank, or the
/// insert fails.
pub async fn add(name: &str, price: &str) -> Result<(), Box<dyn std::error::Error>> {
    let price = Price::parse(price)?;

    let pool = super::connect().await?;
    let catalog = CatalogRepository::new(&pool);
    let item = catalog.create_item(name, price).await?;

    info!(id = %item.id, name = %item.name, price = %item.price, "Menu item added");
    Ok(())
}

/// List all menu items.
///
/// # Errors
///
/// Returns an error if the connection or the query fails.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    let catalog = CatalogRepository::new(&pool);

    let items = catalog.list_items().await?;
    if items.is_empty() {
        info!("Menu is empty");
        return Ok(());
    }

    for item in items {
        info!(id = %item.id, name = %item.name, price = %item.price, "Menu item");
    }
    Ok(())
}

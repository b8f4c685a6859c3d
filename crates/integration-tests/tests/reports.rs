//! Integration tests for read-only reporting.

use cafe_central_core::Rating;
use cafe_central_ledger::db::{
    CatalogRepository, OrderRepository, ReportRepository, ReviewRepository,
    reports::REMOVED_ITEM_PLACEHOLDER,
};

use cafe_central_integration_tests::{add_menu_item, register_customer, test_pool};

#[tokio::test]
async fn order_history_joins_item_names_newest_first() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;
    let chai = add_menu_item(&pool, "Masala Chai", "2.50").await;

    let orders = OrderRepository::new(&pool);
    let first = orders
        .checkout(customer, &[(latte, 2)], None)
        .await
        .expect("checkout");
    let second = orders
        .checkout(customer, &[(chai, 1)], None)
        .await
        .expect("checkout");

    let history = ReportRepository::new(&pool)
        .order_history(customer)
        .await
        .expect("order_history");

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].order_id, second);
    assert_eq!(history[0].lines[0].item_name, "Masala Chai");
    assert_eq!(history[1].order_id, first);
    assert_eq!(history[1].lines[0].item_name, "Latte");
    assert_eq!(history[1].lines[0].quantity, 2);
}

#[tokio::test]
async fn deleted_item_degrades_to_placeholder() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;
    let chai = add_menu_item(&pool, "Masala Chai", "2.50").await;

    let orders = OrderRepository::new(&pool);
    orders
        .checkout(customer, &[(latte, 1), (chai, 1)], None)
        .await
        .expect("checkout");

    CatalogRepository::new(&pool)
        .delete_item(latte)
        .await
        .expect("delete");

    let history = ReportRepository::new(&pool)
        .order_history(customer)
        .await
        .expect("order_history");

    // The query does not fail; the dangling line shows the placeholder.
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].lines.len(), 2);
    assert_eq!(history[0].lines[0].item_name, REMOVED_ITEM_PLACEHOLDER);
    assert_eq!(history[0].lines[1].item_name, "Masala Chai");
}

#[tokio::test]
async fn rating_report_with_names_and_placeholder() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;
    let chai = add_menu_item(&pool, "Masala Chai", "2.50").await;

    let reviews = ReviewRepository::new(&pool);
    for value in [3, 5] {
        reviews
            .submit(customer, latte, Rating::new(value).expect("rating"), None)
            .await
            .expect("submit");
    }
    reviews
        .submit(customer, chai, Rating::new(4).expect("rating"), None)
        .await
        .expect("submit");

    CatalogRepository::new(&pool)
        .delete_item(chai)
        .await
        .expect("delete");

    let report = ReportRepository::new(&pool)
        .rating_report()
        .await
        .expect("rating_report");

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].item_id, latte);
    assert_eq!(report[0].item_name, "Latte");
    assert!((report[0].mean - 4.0).abs() < f64::EPSILON);
    assert_eq!(report[0].rating_count, 2);

    // Reviews of the deleted item still aggregate, under the placeholder.
    assert_eq!(report[1].item_id, chai);
    assert_eq!(report[1].item_name, REMOVED_ITEM_PLACEHOLDER);
    assert_eq!(report[1].rating_count, 1);
}

#[tokio::test]
async fn all_orders_listing_is_deterministic() {
    let pool = test_pool().await;
    let asha = register_customer(&pool, "Asha", "555-0100").await;
    let ravi = register_customer(&pool, "Ravi", "555-0101").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;

    let orders = OrderRepository::new(&pool);
    orders
        .checkout(asha, &[(latte, 1)], None)
        .await
        .expect("checkout");
    orders
        .checkout(ravi, &[(latte, 2)], None)
        .await
        .expect("checkout");

    let reports = ReportRepository::new(&pool);
    let first_read = reports.all_orders().await.expect("all_orders");
    let second_read = reports.all_orders().await.expect("all_orders");

    assert_eq!(first_read.len(), 2);
    assert_eq!(first_read, second_read);
}

#[tokio::test]
async fn list_customers_in_id_order() {
    let pool = test_pool().await;
    let asha = register_customer(&pool, "Asha", "555-0100").await;
    let ravi = register_customer(&pool, "Ravi", "555-0101").await;

    let customers = ReportRepository::new(&pool)
        .list_customers()
        .await
        .expect("list_customers");

    assert_eq!(
        customers.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![asha, ravi]
    );
    assert_eq!(customers[0].name, "Asha");
}

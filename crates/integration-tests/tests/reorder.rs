//! Integration tests for reorder semantics.

use std::collections::HashMap;

use cafe_central_core::{ItemId, OrderId};
use cafe_central_ledger::db::{CatalogRepository, OrderRepository, RepositoryError};

use cafe_central_integration_tests::{add_menu_item, register_customer, test_pool};

fn line_multiset(items: &[cafe_central_ledger::OrderItem]) -> HashMap<(ItemId, i64), usize> {
    let mut multiset = HashMap::new();
    for item in items {
        *multiset.entry((item.item_id, item.quantity)).or_insert(0) += 1;
    }
    multiset
}

#[tokio::test]
async fn reorder_replays_exact_line_multiset() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;
    let chai = add_menu_item(&pool, "Masala Chai", "2.50").await;

    let orders = OrderRepository::new(&pool);
    // Duplicate (item, qty) pairs must survive the replay as duplicates.
    let source_id = orders
        .checkout(customer, &[(latte, 2), (chai, 1), (latte, 2)], None)
        .await
        .expect("checkout");

    let new_id = orders.reorder(customer, source_id).await.expect("reorder");
    assert_ne!(new_id, source_id);

    let source = orders
        .get(customer, source_id)
        .await
        .expect("get")
        .expect("source exists");
    let replay = orders
        .get(customer, new_id)
        .await
        .expect("get")
        .expect("replay exists");

    assert_eq!(line_multiset(&source.items), line_multiset(&replay.items));
}

#[tokio::test]
async fn reorder_gets_fresh_timestamp_and_marker() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;

    let orders = OrderRepository::new(&pool);
    let source_id = orders
        .checkout(customer, &[(latte, 1)], Some("pay-123"))
        .await
        .expect("checkout");

    let new_id = orders.reorder(customer, source_id).await.expect("reorder");
    let replay = orders
        .get(customer, new_id)
        .await
        .expect("get")
        .expect("replay exists");
    let source = orders
        .get(customer, source_id)
        .await
        .expect("get")
        .expect("source exists");

    assert_eq!(
        replay.order.payment_ref.as_deref(),
        Some(format!("reorder:{source_id}").as_str())
    );
    assert!(replay.order.placed_at >= source.order.placed_at);
}

#[tokio::test]
async fn reorder_other_customers_order_not_found() {
    let pool = test_pool().await;
    let asha = register_customer(&pool, "Asha", "555-0100").await;
    let ravi = register_customer(&pool, "Ravi", "555-0101").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;

    let orders = OrderRepository::new(&pool);
    let ashas_order = orders
        .checkout(asha, &[(latte, 1)], None)
        .await
        .expect("checkout");

    let result = orders.reorder(ravi, ashas_order).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    // No new order was created by the failed attempt.
    assert_eq!(orders.all_orders().await.expect("all_orders").len(), 1);
}

#[tokio::test]
async fn reorder_missing_order_not_found() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;

    let orders = OrderRepository::new(&pool);
    let result = orders.reorder(customer, OrderId::new(42)).await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn reorder_fails_whole_when_source_item_deleted() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;
    let chai = add_menu_item(&pool, "Masala Chai", "2.50").await;

    let orders = OrderRepository::new(&pool);
    let source_id = orders
        .checkout(customer, &[(latte, 1), (chai, 1)], None)
        .await
        .expect("checkout");

    CatalogRepository::new(&pool)
        .delete_item(chai)
        .await
        .expect("delete");

    // The surviving line is not silently kept; the whole reorder aborts.
    let result = orders.reorder(customer, source_id).await;
    assert!(matches!(result, Err(RepositoryError::Validation(_))));
    assert_eq!(orders.all_orders().await.expect("all_orders").len(), 1);
}

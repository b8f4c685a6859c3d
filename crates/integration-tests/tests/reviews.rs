//! Integration tests for the review aggregator.

use cafe_central_core::{ItemId, Rating};
use cafe_central_ledger::db::{RepositoryError, ReviewRepository};

use cafe_central_integration_tests::{add_menu_item, register_customer, test_pool};

fn rating(value: i64) -> Rating {
    Rating::new(value).expect("test rating must be in range")
}

#[tokio::test]
async fn submit_unknown_item_not_found() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;

    let reviews = ReviewRepository::new(&pool);
    let result = reviews
        .submit(customer, ItemId::new(99), rating(5), None)
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn average_with_no_reviews_is_no_data() {
    let pool = test_pool().await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;

    let reviews = ReviewRepository::new(&pool);
    let summary = reviews.average(latte).await.expect("average");

    // "Never rated" is None, not a 0.0 mean.
    assert!(summary.is_none());
}

#[tokio::test]
async fn average_of_three_and_five_is_four() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;

    let reviews = ReviewRepository::new(&pool);
    reviews
        .submit(customer, latte, rating(3), Some("decent"))
        .await
        .expect("submit");
    reviews
        .submit(customer, latte, rating(5), Some("much better today"))
        .await
        .expect("submit");

    let summary = reviews
        .average(latte)
        .await
        .expect("average")
        .expect("has data");
    assert!((summary.mean - 4.0).abs() < f64::EPSILON);
    assert_eq!(summary.count, 2);
}

#[tokio::test]
async fn same_customer_may_review_repeatedly() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;

    let reviews = ReviewRepository::new(&pool);
    for value in [4, 4, 5] {
        reviews
            .submit(customer, latte, rating(value), None)
            .await
            .expect("submit");
    }

    let summary = reviews
        .average(latte)
        .await
        .expect("average")
        .expect("has data");
    assert_eq!(summary.count, 3);
}

#[tokio::test]
async fn display_mean_rounds_to_one_decimal() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;

    let reviews = ReviewRepository::new(&pool);
    for value in [3, 3, 4] {
        reviews
            .submit(customer, latte, rating(value), None)
            .await
            .expect("submit");
    }

    let summary = reviews
        .average(latte)
        .await
        .expect("average")
        .expect("has data");
    // Full precision is kept on the aggregate; only display rounds.
    assert!((summary.mean - 10.0 / 3.0).abs() < 1e-9);
    assert!((summary.display_mean() - 3.3).abs() < f64::EPSILON);
}

#[tokio::test]
async fn averages_all_groups_by_item() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;
    let chai = add_menu_item(&pool, "Masala Chai", "2.50").await;
    let unrated = add_menu_item(&pool, "Espresso", "3.00").await;

    let reviews = ReviewRepository::new(&pool);
    reviews
        .submit(customer, latte, rating(4), None)
        .await
        .expect("submit");
    reviews
        .submit(customer, chai, rating(2), None)
        .await
        .expect("submit");
    reviews
        .submit(customer, chai, rating(3), None)
        .await
        .expect("submit");

    let all = reviews.averages_all().await.expect("averages_all");
    assert_eq!(all.len(), 2);
    assert_eq!(all.get(&latte).expect("latte rated").count, 1);
    assert!((all.get(&chai).expect("chai rated").mean - 2.5).abs() < f64::EPSILON);
    assert!(!all.contains_key(&unrated));
}

#[tokio::test]
async fn list_for_item_returns_comments_oldest_first() {
    let pool = test_pool().await;
    let customer = register_customer(&pool, "Asha", "555-0100").await;
    let latte = add_menu_item(&pool, "Latte", "4.50").await;

    let reviews = ReviewRepository::new(&pool);
    let first = reviews
        .submit(customer, latte, rating(3), Some("okay"))
        .await
        .expect("submit");
    let second = reviews
        .submit(customer, latte, rating(5), None)
        .await
        .expect("submit");

    let listed = reviews.list_for_item(latte).await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first);
    assert_eq!(listed[0].comment.as_deref(), Some("okay"));
    assert_eq!(listed[1].id, second);
    assert_eq!(listed[1].comment, None);
}

//! Integration tests for entity CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create/read/update/delete across all four entities
//! - Default orderings
//! - Unique constraint and foreign key violations
//! - Reference-clearing deletes (section -> product, discount -> order)

use assert_matches::assert_matches;
use rust_decimal::Decimal;
use sqlx::PgPool;
use storedvd_core::error::CoreError;
use storedvd_db::error::DbError;
use storedvd_db::models::discount::CreateDiscount;
use storedvd_db::models::order::CreateOrder;
use storedvd_db::models::product::{CreateProduct, UpdateProduct};
use storedvd_db::models::section::{CreateSection, UpdateSection};
use storedvd_db::repositories::{DiscountRepo, OrderRepo, ProductRepo, SectionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_section(title: &str) -> CreateSection {
    CreateSection {
        title: title.to_string(),
    }
}

fn new_product(section_id: Option<i64>, title: &str, year: i32) -> CreateProduct {
    CreateProduct {
        section_id,
        title: title.to_string(),
        image_path: format!("images/{}.jpg", title.to_lowercase().replace(' ', "_")),
        price: Decimal::new(1299, 2),
        release_year: year,
        country: "USA".to_string(),
        director: "Jane Doe".to_string(),
        duration_secs: Some(5400),
        cast: "Ensemble".to_string(),
        description: "A film.".to_string(),
    }
}

fn new_discount(code: &str, percent: i32) -> CreateDiscount {
    CreateDiscount {
        code: code.to_string(),
        percent_value: percent,
    }
}

fn new_order(discount_id: Option<i64>) -> CreateOrder {
    CreateOrder {
        needs_delivery: false,
        discount_id,
        customer_name: "Ivan Petrov".to_string(),
        phone: "+7 900 123-45-67".to_string(),
        email: "ivan@example.com".to_string(),
        address: None,
        notice: None,
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_fetch_section(pool: PgPool) {
    let section = SectionRepo::create(&pool, &new_section("Sci-Fi"))
        .await
        .unwrap();
    assert_eq!(section.title, "Sci-Fi");

    let fetched = SectionRepo::find_by_id(&pool, section.id)
        .await
        .unwrap()
        .expect("section should exist");
    assert_eq!(fetched.id, section.id);
    assert_eq!(fetched.title, "Sci-Fi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_section_title_rejected(pool: PgPool) {
    SectionRepo::create(&pool, &new_section("Drama"))
        .await
        .unwrap();
    let result = SectionRepo::create(&pool, &new_section("Drama")).await;
    assert_matches!(result, Err(DbError::Sqlx(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_section_title_rejected(pool: PgPool) {
    let result = SectionRepo::create(&pool, &new_section("   ")).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sections_listed_in_creation_order(pool: PgPool) {
    SectionRepo::create(&pool, &new_section("Westerns"))
        .await
        .unwrap();
    SectionRepo::create(&pool, &new_section("Anime"))
        .await
        .unwrap();
    SectionRepo::create(&pool, &new_section("Musicals"))
        .await
        .unwrap();

    let titles: Vec<String> = SectionRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, ["Westerns", "Anime", "Musicals"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_section(pool: PgPool) {
    let section = SectionRepo::create(&pool, &new_section("Horor"))
        .await
        .unwrap();

    let updated = SectionRepo::update(
        &pool,
        section.id,
        &UpdateSection {
            title: Some("Horror".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");
    assert_eq!(updated.title, "Horror");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_section_returns_none(pool: PgPool) {
    let result = SectionRepo::update(
        &pool,
        999_999,
        &UpdateSection {
            title: Some("Ghost".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_returns_false(pool: PgPool) {
    assert!(!SectionRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!ProductRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!DiscountRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!OrderRepo::delete(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_product_in_section(pool: PgPool) {
    let section = SectionRepo::create(&pool, &new_section("Sci-Fi"))
        .await
        .unwrap();
    let product = ProductRepo::create(&pool, &new_product(Some(section.id), "Alien", 1979))
        .await
        .unwrap();

    assert_eq!(product.section_id, Some(section.id));
    assert_eq!(product.title, "Alien");
    assert_eq!(product.price, Decimal::new(1299, 2));
    assert_eq!(product.duration_secs, Some(5400));

    let in_section = ProductRepo::list_by_section(&pool, section.id).await.unwrap();
    assert_eq!(in_section.len(), 1);
    assert_eq!(in_section[0].id, product.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_products_default_ordering(pool: PgPool) {
    // Title first, then release year ascending.
    ProductRepo::create(&pool, &new_product(None, "Brazil", 1985))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product(None, "Alien", 1986))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product(None, "Alien", 1979))
        .await
        .unwrap();

    let listed: Vec<(String, i32)> = ProductRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| (p.title, p.release_year))
        .collect();
    assert_eq!(
        listed,
        [
            ("Alien".to_string(), 1979),
            ("Alien".to_string(), 1986),
            ("Brazil".to_string(), 1985),
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_year_out_of_range_rejected(pool: PgPool) {
    let result = ProductRepo::create(&pool, &new_product(None, "Old", 1899)).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    let result = ProductRepo::create(&pool, &new_product(None, "Future", 3000)).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_duration_must_be_positive(pool: PgPool) {
    let mut input = new_product(None, "Short", 2001);
    input.duration_secs = Some(0);
    let result = ProductRepo::create(&pool, &input).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    // Unknown duration is fine.
    input.duration_secs = None;
    let product = ProductRepo::create(&pool, &input).await.unwrap();
    assert_eq!(product.duration_secs, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_fk_violation_bad_section(pool: PgPool) {
    let result = ProductRepo::create(&pool, &new_product(Some(999_999), "Ghost", 2001)).await;
    assert_matches!(result, Err(DbError::Sqlx(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_section_delete_detaches_products(pool: PgPool) {
    let section = SectionRepo::create(&pool, &new_section("Sci-Fi"))
        .await
        .unwrap();
    let product = ProductRepo::create(&pool, &new_product(Some(section.id), "Alien", 1979))
        .await
        .unwrap();

    assert!(SectionRepo::delete(&pool, section.id).await.unwrap());

    // The product survives with its section reference cleared.
    let detached = ProductRepo::find_by_id(&pool, product.id)
        .await
        .unwrap()
        .expect("product should survive section deletion");
    assert_eq!(detached.section_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_product_patches_only_given_fields(pool: PgPool) {
    let product = ProductRepo::create(&pool, &new_product(None, "Alien", 1979))
        .await
        .unwrap();

    let updated = ProductRepo::update(
        &pool,
        product.id,
        &UpdateProduct {
            section_id: None,
            title: None,
            image_path: None,
            price: Some(Decimal::new(999, 2)),
            release_year: None,
            country: None,
            director: Some("Ridley Scott".to_string()),
            duration_secs: None,
            cast: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.price, Decimal::new(999, 2));
    assert_eq!(updated.director, "Ridley Scott");
    // Untouched fields keep their values.
    assert_eq!(updated.title, "Alien");
    assert_eq!(updated.release_year, 1979);
}

// ---------------------------------------------------------------------------
// Discounts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_discounts_listed_largest_first(pool: PgPool) {
    DiscountRepo::create(&pool, &new_discount("TEN", 10))
        .await
        .unwrap();
    DiscountRepo::create(&pool, &new_discount("HALF", 50))
        .await
        .unwrap();
    DiscountRepo::create(&pool, &new_discount("QUARTER", 25))
        .await
        .unwrap();

    let values: Vec<i32> = DiscountRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.percent_value)
        .collect();
    assert_eq!(values, [50, 25, 10]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_discount_percent_bounds_rejected(pool: PgPool) {
    let result = DiscountRepo::create(&pool, &new_discount("ZERO", 0)).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    let result = DiscountRepo::create(&pool, &new_discount("BIG", 101)).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    DiscountRepo::create(&pool, &new_discount("ONE", 1))
        .await
        .unwrap();
    DiscountRepo::create(&pool, &new_discount("FREE", 100))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_discount_by_code_prefers_largest(pool: PgPool) {
    DiscountRepo::create(&pool, &new_discount("VIP", 10))
        .await
        .unwrap();
    DiscountRepo::create(&pool, &new_discount("VIP", 30))
        .await
        .unwrap();

    let found = DiscountRepo::find_by_code(&pool, "VIP")
        .await
        .unwrap()
        .expect("coupon should be found");
    assert_eq!(found.percent_value, 30);

    assert!(DiscountRepo::find_by_code(&pool, "NOPE")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_discount_delete_clears_order_reference(pool: PgPool) {
    let discount = DiscountRepo::create(&pool, &new_discount("VIP", 30))
        .await
        .unwrap();
    let order = OrderRepo::create(&pool, &new_order(Some(discount.id)))
        .await
        .unwrap();
    assert_eq!(order.discount_id, Some(discount.id));

    assert!(DiscountRepo::delete(&pool, discount.id).await.unwrap());

    // The order survives with its discount reference cleared.
    let kept = OrderRepo::find_by_id(&pool, order.id)
        .await
        .unwrap()
        .expect("order should survive discount deletion");
    assert_eq!(kept.discount_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_order_fk_violation_bad_discount(pool: PgPool) {
    let result = OrderRepo::create(&pool, &new_order(Some(999_999))).await;
    assert_matches!(result, Err(DbError::Sqlx(_)));
}

use rust_decimal::Decimal;
use tracing::info;

use crate::errors::ServiceError;
use crate::repository::{ProductInput, ProductRepository};
use models::product;

/// List every persisted product, in storage order.
pub async fn list_products(
    repo: &dyn ProductRepository,
) -> Result<Vec<product::Model>, ServiceError> {
    repo.find_all().await
}

/// Look up a single product; `None` when the id is unknown.
pub async fn get_product(
    repo: &dyn ProductRepository,
    id: i32,
) -> Result<Option<product::Model>, ServiceError> {
    repo.find_by_id(id).await
}

/// Validate and persist a new product. The id is assigned by storage.
pub async fn create_product(
    repo: &dyn ProductRepository,
    input: ProductInput,
) -> Result<product::Model, ServiceError> {
    validate_product(&input)?;
    let created = repo.insert(&input).await?;
    info!(id = created.id, name = %created.name, "created product");
    Ok(created)
}

/// Replace every field of an existing product. The id never changes.
pub async fn update_product(
    repo: &dyn ProductRepository,
    id: i32,
    input: ProductInput,
) -> Result<product::Model, ServiceError> {
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("product"))?;
    validate_product(&input)?;
    let merged = product::Model {
        id: existing.id,
        name: input.name,
        price: input.price,
        category: input.category,
        stock: input.stock,
        description: input.description,
    };
    let updated = repo.update(merged).await?;
    info!(id = updated.id, "updated product");
    Ok(updated)
}

/// Remove a product; returns whether a record existed.
pub async fn delete_product(
    repo: &dyn ProductRepository,
    id: i32,
) -> Result<bool, ServiceError> {
    if repo.exists_by_id(id).await? {
        repo.delete_by_id(id).await?;
        info!(id, "deleted product");
        return Ok(true);
    }
    Ok(false)
}

/// Exact-match category filter.
pub async fn products_by_category(
    repo: &dyn ProductRepository,
    category: &str,
) -> Result<Vec<product::Model>, ServiceError> {
    repo.find_by_category(category).await
}

/// Case-insensitive substring match against product names.
pub async fn search_products(
    repo: &dyn ProductRepository,
    keyword: &str,
) -> Result<Vec<product::Model>, ServiceError> {
    repo.find_by_name_containing(keyword).await
}

/// Products whose stock is strictly below the threshold.
pub async fn low_stock_products(
    repo: &dyn ProductRepository,
    threshold: i32,
) -> Result<Vec<product::Model>, ServiceError> {
    repo.find_by_stock_less_than(threshold).await
}

// Checks run in order and stop at the first failure.
fn validate_product(input: &ProductInput) -> Result<(), ServiceError> {
    if input.name.trim().is_empty() {
        return Err(ServiceError::Validation("product name is required".into()));
    }
    if input.price < Decimal::ZERO {
        return Err(ServiceError::Validation(
            "product price must be non-negative".into(),
        ));
    }
    if input.stock < 0 {
        return Err(ServiceError::Validation(
            "product stock must be non-negative".into(),
        ));
    }
    if input.category.trim().is_empty() {
        return Err(ServiceError::Validation(
            "product category is required".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryProductRepository;

    fn widget() -> ProductInput {
        ProductInput {
            name: "Widget".into(),
            price: Decimal::new(999, 2),
            category: "Tools".into(),
            stock: 5,
            description: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips() {
        let repo = MemoryProductRepository::new();
        let created = create_product(&repo, widget()).await.expect("create ok");
        assert!(created.id > 0);

        let found = get_product(&repo, created.id)
            .await
            .expect("get ok")
            .expect("present");
        assert_eq!(found, created);
        assert_eq!(found.name, "Widget");
        assert_eq!(found.price, Decimal::new(999, 2));
        assert_eq!(found.stock, 5);
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields_without_writing() {
        let repo = MemoryProductRepository::new();

        let blank_name = ProductInput { name: "  ".into(), ..widget() };
        assert!(matches!(
            create_product(&repo, blank_name).await,
            Err(ServiceError::Validation(msg)) if msg.contains("name")
        ));

        let negative_price = ProductInput { price: Decimal::new(-1, 2), ..widget() };
        assert!(matches!(
            create_product(&repo, negative_price).await,
            Err(ServiceError::Validation(msg)) if msg.contains("price")
        ));

        let negative_stock = ProductInput { stock: -3, ..widget() };
        assert!(matches!(
            create_product(&repo, negative_stock).await,
            Err(ServiceError::Validation(msg)) if msg.contains("stock")
        ));

        let blank_category = ProductInput { category: "".into(), ..widget() };
        assert!(matches!(
            create_product(&repo, blank_category).await,
            Err(ServiceError::Validation(msg)) if msg.contains("category")
        ));

        assert!(list_products(&repo).await.expect("list ok").is_empty());
    }

    #[tokio::test]
    async fn update_replaces_all_fields_and_keeps_id() {
        let repo = MemoryProductRepository::new();
        let created = create_product(&repo, widget()).await.expect("create ok");

        let replacement = ProductInput {
            name: "Widget Mk2".into(),
            price: Decimal::new(1299, 2),
            category: "Hardware".into(),
            stock: 0,
            description: Some("revised".into()),
        };
        let updated = update_product(&repo, created.id, replacement)
            .await
            .expect("update ok");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Widget Mk2");
        assert_eq!(updated.stock, 0);
        assert_eq!(updated.description.as_deref(), Some("revised"));
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = MemoryProductRepository::new();
        assert!(matches!(
            update_product(&repo, 42, widget()).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_with_invalid_input_writes_nothing() {
        let repo = MemoryProductRepository::new();
        let created = create_product(&repo, widget()).await.expect("create ok");

        let bad = ProductInput { price: Decimal::new(-500, 2), ..widget() };
        assert!(matches!(
            update_product(&repo, created.id, bad).await,
            Err(ServiceError::Validation(_))
        ));

        let untouched = get_product(&repo, created.id)
            .await
            .expect("get ok")
            .expect("present");
        assert_eq!(untouched.price, Decimal::new(999, 2));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = MemoryProductRepository::new();
        let created = create_product(&repo, widget()).await.expect("create ok");

        assert!(delete_product(&repo, created.id).await.expect("first delete"));
        assert!(!delete_product(&repo, created.id).await.expect("second delete"));
        assert!(get_product(&repo, created.id).await.expect("get ok").is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let repo = MemoryProductRepository::new();
        let laptop = ProductInput {
            name: "Dell XPS 13 Laptop".into(),
            price: Decimal::new(129999, 2),
            category: "Electronics".into(),
            stock: 15,
            description: None,
        };
        create_product(&repo, laptop).await.expect("create ok");
        create_product(&repo, widget()).await.expect("create ok");

        let hits = search_products(&repo, "dell").await.expect("search ok");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dell XPS 13 Laptop");
    }

    #[tokio::test]
    async fn low_stock_threshold_is_exclusive() {
        let repo = MemoryProductRepository::new();
        create_product(&repo, ProductInput { name: "At threshold".into(), stock: 10, ..widget() })
            .await
            .expect("create ok");
        create_product(&repo, ProductInput { name: "Below threshold".into(), stock: 9, ..widget() })
            .await
            .expect("create ok");

        let low = low_stock_products(&repo, 10).await.expect("low stock ok");
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Below threshold");
    }

    #[tokio::test]
    async fn category_filter_is_exact() {
        let repo = MemoryProductRepository::new();
        create_product(&repo, widget()).await.expect("create ok");
        create_product(
            &repo,
            ProductInput { name: "Racket".into(), category: "Sports".into(), ..widget() },
        )
        .await
        .expect("create ok");

        let tools = products_by_category(&repo, "Tools").await.expect("filter ok");
        assert_eq!(tools.len(), 1);
        assert!(products_by_category(&repo, "tools")
            .await
            .expect("filter ok")
            .is_empty());
    }
}

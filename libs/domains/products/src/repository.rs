use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, Product, ProductFilter};

/// Repository trait for Product persistence
///
/// Implementations only store and load products; business rules such as name
/// uniqueness are enforced by [`crate::rules::ProductRules`] before any write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID, with its category resolved when known
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Persist a new product
    async fn add(&self, product: Product) -> ProductResult<Product>;

    /// Replace a stored product
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Remove a stored product
    async fn delete(&self, product: Product) -> ProductResult<()>;

    /// List products matching a filter, ordered by name
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Check whether a product with this name exists (case-insensitive)
    async fn exists_by_name(&self, name: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
    categories: Arc<RwLock<HashMap<i32, Category>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that knows the given categories
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories = categories.into_iter().map(|c| (c.id, c)).collect();
        Self {
            products: Arc::default(),
            categories: Arc::new(RwLock::new(categories)),
        }
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    /// Attach the category, with back-references computed from current products
    fn resolve_category(
        mut product: Product,
        products: &HashMap<Uuid, Product>,
        categories: &HashMap<i32, Category>,
    ) -> Product {
        product.category = categories.get(&product.category_id).map(|category| {
            let mut members: Vec<Uuid> = products
                .values()
                .filter(|p| p.category_id == category.id)
                .map(|p| p.id)
                .collect();
            members.sort();
            Category {
                products: members,
                ..category.clone()
            }
        });
        product
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        let categories = self.categories.read().await;

        Ok(products
            .get(&id)
            .cloned()
            .map(|p| Self::resolve_category(p, &products, &categories)))
    }

    async fn add(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.contains_key(&product.id) {
            return Err(ProductError::Database(format!(
                "Product {} is already stored",
                product.id
            )));
        }

        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Added product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let stored = products.get_mut(&product.id).ok_or_else(|| {
            ProductError::Database(format!("Product {} is not stored", product.id))
        })?;
        *stored = product.clone();

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&product.id).is_none() {
            return Err(ProductError::Database(format!(
                "Product {} is not stored",
                product.id
            )));
        }

        tracing::info!(product_id = %product.id, "Deleted product");
        Ok(())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        result.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(result
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit.unwrap_or(usize::MAX))
            .collect())
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        let products = self.products.read().await;
        let name = name.to_lowercase();
        Ok(products.values().any(|p| p.name.to_lowercase() == name))
    }
}

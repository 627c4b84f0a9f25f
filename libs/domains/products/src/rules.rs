use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::messages;
use crate::repository::ProductRepository;

/// Business rules checked before any product mutation
///
/// A violated rule returns [`ProductError::BusinessRule`] carrying the message
/// shown to the caller. Other errors come from the underlying store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRules: Send + Sync {
    /// Fails when another product already uses `name`
    async fn product_name_must_be_unique(&self, name: &str) -> ProductResult<()>;

    /// Fails when no product with `id` exists
    async fn product_is_present(&self, id: Uuid) -> ProductResult<()>;
}

/// Repository-backed rule checks
pub struct ProductBusinessRules<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductBusinessRules<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Share a repository already held elsewhere
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ProductRepository> Clone for ProductBusinessRules<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductRules for ProductBusinessRules<R> {
    async fn product_name_must_be_unique(&self, name: &str) -> ProductResult<()> {
        if self.repository.exists_by_name(name).await? {
            tracing::info!(product_name = %name, "Product name is already taken");
            return Err(ProductError::BusinessRule(
                messages::PRODUCT_NAME_MUST_BE_UNIQUE.to_string(),
            ));
        }
        Ok(())
    }

    async fn product_is_present(&self, id: Uuid) -> ProductResult<()> {
        if self.repository.get_by_id(id).await?.is_none() {
            tracing::info!(product_id = %id, "Product is not present");
            return Err(ProductError::BusinessRule(messages::product_not_found(id)));
        }
        Ok(())
    }
}

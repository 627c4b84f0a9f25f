//! Product Service - validates, checks business rules, then delegates to the repository

use core_config::CatalogConfig;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::messages;
use crate::models::{
    Product, ProductAddRequest, ProductFilter, ProductResponseDto, ProductUpdateRequest,
};
use crate::repository::ProductRepository;
use crate::response::ServiceResponse;
use crate::rules::ProductRules;

/// Product service providing the catalog use cases
///
/// Every operation answers with a [`ServiceResponse`]. Rule violations and
/// invalid input become `400 Bad Request` envelopes carrying the rule's
/// message; store failures are returned as `Err`. No repository write happens
/// unless every check passed.
pub struct ProductService<R: ProductRepository, B: ProductRules> {
    repository: Arc<R>,
    rules: Arc<B>,
    config: CatalogConfig,
}

impl<R: ProductRepository, B: ProductRules> ProductService<R, B> {
    pub fn new(repository: R, rules: B) -> Self {
        Self::with_config(repository, rules, CatalogConfig::default())
    }

    pub fn with_config(repository: R, rules: B, config: CatalogConfig) -> Self {
        Self::from_shared(Arc::new(repository), Arc::new(rules), config)
    }

    /// Build a service around collaborators that are shared with other components
    pub fn from_shared(repository: Arc<R>, rules: Arc<B>, config: CatalogConfig) -> Self {
        Self {
            repository,
            rules,
            config,
        }
    }

    /// Add a new product
    #[instrument(skip(self, request), fields(product_name = %request.name))]
    pub async fn add(
        &self,
        request: ProductAddRequest,
    ) -> ProductResult<ServiceResponse<ProductResponseDto>> {
        if let Err(errors) = request.validate() {
            return client_error(errors.into());
        }

        let product = Product::new(request);

        if let Err(err) = self.rules.product_name_must_be_unique(&product.name).await {
            return client_error(err);
        }

        let created = self.repository.add(product).await?;

        tracing::info!(product_id = %created.id, "Product added");
        Ok(ServiceResponse::created(
            ProductResponseDto::from(created),
            messages::PRODUCT_ADDED,
        ))
    }

    /// Update an existing product
    #[instrument(skip(self, request), fields(product_id = %request.id))]
    pub async fn update(
        &self,
        request: ProductUpdateRequest,
    ) -> ProductResult<ServiceResponse<ProductResponseDto>> {
        if let Err(errors) = request.validate() {
            return client_error(errors.into());
        }

        if let Err(err) = self.rules.product_is_present(request.id).await {
            return client_error(err);
        }

        let Some(mut product) = self.repository.get_by_id(request.id).await? else {
            return Ok(ServiceResponse::bad_request(messages::product_not_found(
                request.id,
            )));
        };

        // Keeping the current name (in any letter case) does not collide with itself
        if product.name.to_lowercase() != request.name.to_lowercase() {
            if let Err(err) = self.rules.product_name_must_be_unique(&request.name).await {
                return client_error(err);
            }
        }

        product.apply_update(request);
        let updated = self.repository.update(product).await?;

        tracing::info!(product_id = %updated.id, "Product updated");
        Ok(ServiceResponse::ok(
            ProductResponseDto::from(updated),
            messages::PRODUCT_UPDATED,
        ))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ProductResult<ServiceResponse<ProductResponseDto>> {
        if let Err(err) = self.rules.product_is_present(id).await {
            return client_error(err);
        }

        let Some(product) = self.repository.get_by_id(id).await? else {
            return Ok(ServiceResponse::bad_request(messages::product_not_found(id)));
        };

        let deleted = ProductResponseDto::from(&product);
        self.repository.delete(product).await?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(ServiceResponse::ok(deleted, messages::PRODUCT_DELETED))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ProductResult<ServiceResponse<ProductResponseDto>> {
        Ok(match self.repository.get_by_id(id).await? {
            Some(product) => ServiceResponse::ok(
                ProductResponseDto::from(product),
                messages::PRODUCT_FETCHED,
            ),
            None => ServiceResponse::not_found(messages::product_not_found(id)),
        })
    }

    /// List products, one page at a time
    #[instrument(skip(self))]
    pub async fn get_all(
        &self,
        mut filter: ProductFilter,
    ) -> ProductResult<ServiceResponse<Vec<ProductResponseDto>>> {
        let requested = filter.limit.unwrap_or(self.config.default_page_size);
        filter.limit = Some(self.config.clamp_page_size(requested));

        let products = self.repository.list(filter).await?;

        tracing::debug!(count = products.len(), "Products listed");
        Ok(ServiceResponse::ok(
            products.into_iter().map(ProductResponseDto::from).collect(),
            messages::PRODUCTS_LISTED,
        ))
    }
}

impl<R: ProductRepository, B: ProductRules> Clone for ProductService<R, B> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            rules: Arc::clone(&self.rules),
            config: self.config.clone(),
        }
    }
}

/// Turn a rejected check into a `400` envelope; anything else is propagated
fn client_error<T>(err: ProductError) -> ProductResult<ServiceResponse<T>> {
    match err {
        ProductError::BusinessRule(message) => {
            tracing::warn!(%message, "Business rule violated");
            Ok(ServiceResponse::bad_request(message))
        }
        err @ ProductError::Validation(_) => {
            tracing::info!(error = %err, "Request rejected");
            Ok(ServiceResponse::bad_request(err.to_string()))
        }
        err => Err(err),
    }
}

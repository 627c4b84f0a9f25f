//! Products Domain
//!
//! Business-rule-gated CRUD for catalog products.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │   Service   │────►│    Rules    │  ← name uniqueness, presence checks
//! └──────┬──────┘     └──────┬──────┘
//!        │                   │
//! ┌──────▼───────────────────▼──────┐
//! │           Repository            │  ← Data access (trait + in-memory implementation)
//! └──────┬──────────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, response envelope
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     InMemoryProductRepository, ProductAddRequest, ProductBusinessRules, ProductService,
//! };
//!
//! # async fn example() -> domain_products::ProductResult<()> {
//! let repository = InMemoryProductRepository::new();
//! let rules = ProductBusinessRules::new(repository.clone());
//! let service = ProductService::new(repository, rules);
//!
//! let response = service
//!     .add(ProductAddRequest {
//!         name: "Test".to_string(),
//!         stock: 25,
//!         price: 2500.0,
//!         category_id: 1,
//!     })
//!     .await?;
//! assert_eq!(response.message, "Ürün Eklendi");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod messages;
pub mod models;
pub mod repository;
pub mod response;
pub mod rules;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use models::{
    Category, Product, ProductAddRequest, ProductFilter, ProductResponseDto, ProductUpdateRequest,
};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use response::ServiceResponse;
pub use rules::{ProductBusinessRules, ProductRules};
pub use service::ProductService;

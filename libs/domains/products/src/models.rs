use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Range checks let NaN and infinities through, so prices are checked here too
fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::new("non_finite_price"));
    }
    Ok(())
}

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Ids of the products filed under this category (informational, non-owning)
    #[serde(default)]
    pub products: Vec<Uuid>,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name (unique across the catalog)
    pub name: String,
    /// Units in stock
    pub stock: i32,
    /// Unit price
    pub price: f64,
    /// Owning category
    pub category_id: i32,
    /// Loaded category, when the repository resolved it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// DTO for adding a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductAddRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(range(min = 0.0), custom(function = "validate_price"))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

/// DTO for updating an existing product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductUpdateRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(range(min = 0.0), custom(function = "validate_price"))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

/// Outbound projection of a [`Product`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub name: String,
    pub stock: i32,
    pub price: f64,
    pub category_id: i32,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductFilter {
    pub category_id: Option<i32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Page size; the service fills in the configured default when unset
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
}

impl Product {
    /// Build a new product from an add request with a fresh id
    pub fn new(input: ProductAddRequest) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            stock: input.stock,
            price: input.price,
            category_id: input.category_id,
            category: None,
        }
    }

    /// Apply the fields of an update request
    pub fn apply_update(&mut self, update: ProductUpdateRequest) {
        if self.category_id != update.category_id {
            self.category = None;
        }
        self.name = update.name;
        self.stock = update.stock;
        self.price = update.price;
        self.category_id = update.category_id;
    }
}

impl ProductFilter {
    /// Whether a product satisfies every filter criterion
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category_id) = self.category_id {
            if product.category_id != category_id {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }
        true
    }
}

impl From<&Product> for ProductResponseDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            stock: product.stock,
            price: product.price,
            category_id: product.category_id,
        }
    }
}

impl From<Product> for ProductResponseDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            stock: product.stock,
            price: product.price,
            category_id: product.category_id,
        }
    }
}

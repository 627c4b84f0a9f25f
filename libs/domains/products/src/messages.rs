//! User-facing message texts.
//!
//! Callers compare these strings exactly, so they are part of the service contract.

use uuid::Uuid;

pub const PRODUCT_ADDED: &str = "Ürün Eklendi";
pub const PRODUCT_UPDATED: &str = "Ürün Güncellendi";
pub const PRODUCT_DELETED: &str = "Ürün Silindi";
pub const PRODUCT_FETCHED: &str = "Ürün Getirildi";
pub const PRODUCTS_LISTED: &str = "Ürünler Listelendi";
pub const PRODUCT_NAME_MUST_BE_UNIQUE: &str = "Ürün ismi benzersiz olmalı";

pub fn product_not_found(id: Uuid) -> String {
    format!("Id si : {} olan ürün bulunamadı.", id)
}

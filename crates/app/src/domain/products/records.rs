//! Product Records

use jiff::Timestamp;

use crate::{
    domain::categories::records::{CategoryUuid, SubcategoryUuid},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product image locations, one per rendition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImages {
    pub small: String,
    pub medium: String,
    pub big: String,
}

/// Product Record
///
/// `price` is held in minor units (hundredths).
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub category_uuid: CategoryUuid,
    pub subcategory_uuid: SubcategoryUuid,
    pub name: String,
    pub slug: String,
    pub price: u64,
    pub images: ProductImages,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

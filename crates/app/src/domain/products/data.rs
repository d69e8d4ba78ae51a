//! Products Data

use crate::domain::{
    categories::records::SubcategoryUuid,
    products::records::{ProductImages, ProductUuid},
};

/// New Product Data
///
/// The product's category is taken from its subcategory.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub subcategory_uuid: SubcategoryUuid,
    pub name: String,
    pub slug: Option<String>,
    pub price: u64,
    pub images: ProductImages,
}

//! Category Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Subcategory UUID
pub type SubcategoryUuid = TypedUuid<SubcategoryRecord>;

/// Subcategory Record
#[derive(Debug, Clone)]
pub struct SubcategoryRecord {
    pub uuid: SubcategoryUuid,
    pub category_uuid: CategoryUuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

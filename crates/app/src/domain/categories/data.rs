//! Category Data

use crate::domain::categories::records::{CategoryUuid, SubcategoryUuid};

/// New Category Data
///
/// `slug` is derived from `name` when omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
    pub slug: Option<String>,
    pub image: String,
}

/// New Subcategory Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubcategory {
    pub uuid: SubcategoryUuid,
    pub category_uuid: CategoryUuid,
    pub name: String,
    pub slug: Option<String>,
    pub image: String,
}

//! Category Repositories

mod categories;
mod subcategories;

pub(crate) use categories::PgCategoriesRepository;
pub(crate) use subcategories::PgSubcategoriesRepository;

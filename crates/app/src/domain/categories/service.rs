//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::{
            data::{NewCategory, NewSubcategory},
            errors::CategoriesServiceError,
            records::{CategoryRecord, CategoryUuid, SubcategoryRecord, SubcategoryUuid},
            repositories::{PgCategoriesRepository, PgSubcategoriesRepository},
        },
        slugs::slug_or_derive,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    categories_repository: PgCategoriesRepository,
    subcategories_repository: PgSubcategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            categories_repository: PgCategoriesRepository::new(),
            subcategories_repository: PgSubcategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let category = self
            .categories_repository
            .get_category(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let slug =
            slug_or_derive(category.slug, &category.name).ok_or(CategoriesServiceError::InvalidSlug)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .categories_repository
            .create_category(
                &mut tx,
                category.uuid,
                &category.name,
                &slug,
                &category.image,
            )
            .await?;

        tx.commit().await?;

        tracing::debug!(category_uuid = %created.uuid, slug = %created.slug, "created category");

        Ok(created)
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .categories_repository
            .delete_category(&mut tx, category)
            .await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn get_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<SubcategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let subcategory = self
            .subcategories_repository
            .get_subcategory(&mut tx, subcategory)
            .await?;

        tx.commit().await?;

        Ok(subcategory)
    }

    async fn create_subcategory(
        &self,
        subcategory: NewSubcategory,
    ) -> Result<SubcategoryRecord, CategoriesServiceError> {
        let slug = slug_or_derive(subcategory.slug, &subcategory.name)
            .ok_or(CategoriesServiceError::InvalidSlug)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .subcategories_repository
            .create_subcategory(
                &mut tx,
                subcategory.uuid,
                subcategory.category_uuid,
                &subcategory.name,
                &slug,
                &subcategory.image,
            )
            .await?;

        tx.commit().await?;

        tracing::debug!(
            subcategory_uuid = %created.uuid,
            category_uuid = %created.category_uuid,
            slug = %created.slug,
            "created subcategory"
        );

        Ok(created)
    }

    async fn delete_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .subcategories_repository
            .delete_subcategory(&mut tx, subcategory)
            .await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Creates a category, deriving its slug from the name when none is given.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Deletes a category along with its subcategories and products.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;

    /// Retrieve a single subcategory.
    async fn get_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<SubcategoryRecord, CategoriesServiceError>;

    /// Creates a subcategory under an existing category.
    async fn create_subcategory(
        &self,
        subcategory: NewSubcategory,
    ) -> Result<SubcategoryRecord, CategoriesServiceError>;

    /// Deletes a subcategory along with its products.
    async fn delete_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<(), CategoriesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            uuid: CategoryUuid::new(),
            name: name.to_string(),
            slug: None,
            image: "categories/image.png".to_string(),
        }
    }

    #[tokio::test]
    async fn create_category_derives_slug_from_name() -> TestResult {
        let ctx = TestContext::new().await;

        let category = ctx
            .categories
            .create_category(new_category("Fresh Fruit"))
            .await?;

        assert_eq!(category.name, "Fresh Fruit");
        assert_eq!(category.slug, "fresh-fruit");

        Ok(())
    }

    #[tokio::test]
    async fn create_category_keeps_explicit_slug() -> TestResult {
        let ctx = TestContext::new().await;

        let category = ctx
            .categories
            .create_category(NewCategory {
                slug: Some("fruit".to_string()),
                ..new_category("Fresh Fruit")
            })
            .await?;

        assert_eq!(category.slug, "fruit");

        Ok(())
    }

    #[tokio::test]
    async fn create_category_unsluggable_name_returns_invalid_slug() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.create_category(new_category("Фрукты")).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::InvalidSlug)),
            "expected InvalidSlug, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_category_duplicate_slug_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.categories
            .create_category(new_category("Dairy"))
            .await?;

        let result = ctx.categories.create_category(new_category("dairy")).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_category_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.get_category(CategoryUuid::new()).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_subcategory_unknown_category_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .categories
            .create_subcategory(NewSubcategory {
                uuid: SubcategoryUuid::new(),
                category_uuid: CategoryUuid::new(),
                name: "Apples".to_string(),
                slug: None,
                image: "subcategories/apples.png".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(CategoriesServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn deleting_category_cascades_to_subcategories() -> TestResult {
        let ctx = TestContext::new().await;

        let category = ctx
            .categories
            .create_category(new_category("Bakery"))
            .await?;

        let subcategory = ctx
            .categories
            .create_subcategory(NewSubcategory {
                uuid: SubcategoryUuid::new(),
                category_uuid: category.uuid,
                name: "Bread".to_string(),
                slug: None,
                image: "subcategories/bread.png".to_string(),
            })
            .await?;

        assert_eq!(subcategory.category_uuid, category.uuid);
        assert_eq!(subcategory.slug, "bread");

        ctx.categories.delete_category(category.uuid).await?;

        let result = ctx.categories.get_subcategory(subcategory.uuid).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected subcategory to be removed with its category, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_category_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.delete_category(CategoryUuid::new()).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}

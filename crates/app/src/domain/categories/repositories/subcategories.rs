//! Subcategories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::categories::records::{CategoryUuid, SubcategoryRecord, SubcategoryUuid};

const GET_SUBCATEGORY_SQL: &str = include_str!("../sql/get_subcategory.sql");
const CREATE_SUBCATEGORY_SQL: &str = include_str!("../sql/create_subcategory.sql");
const DELETE_SUBCATEGORY_SQL: &str = include_str!("../sql/delete_subcategory.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubcategoriesRepository;

impl PgSubcategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
    ) -> Result<SubcategoryRecord, sqlx::Error> {
        query_as::<Postgres, SubcategoryRecord>(GET_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
        category: CategoryUuid,
        name: &str,
        slug: &str,
        image: &str,
    ) -> Result<SubcategoryRecord, sqlx::Error> {
        query_as::<Postgres, SubcategoryRecord>(CREATE_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .bind(category.into_uuid())
            .bind(name)
            .bind(slug)
            .bind(image)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for SubcategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SubcategoryUuid::from_uuid(row.try_get("uuid")?),
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            image: row.try_get("image")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

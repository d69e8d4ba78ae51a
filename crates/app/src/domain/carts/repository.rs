//! Cart Items Repository
//!
//! Every query runs in a transaction opened with
//! [`Db::begin_user_transaction`](crate::database::Db::begin_user_transaction)
//! and also filters on `user_uuid` explicitly.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::{
        quantity::Quantity,
        records::{CartItemProduct, CartItemRecord, CartItemUuid},
    },
    products::{
        records::{ProductImages, ProductUuid},
        try_get_amount,
    },
    users::records::UserUuid,
};

const UPSERT_CART_ITEM_SQL: &str = include_str!("sql/upsert_cart_item.sql");
const UPDATE_CART_ITEM_QUANTITY_SQL: &str = include_str!("sql/update_cart_item_quantity.sql");
const GET_CART_ITEM_SQL: &str = include_str!("sql/get_cart_item.sql");
const GET_CART_ITEMS_SQL: &str = include_str!("sql/get_cart_items.sql");
const CLEAR_CART_ITEMS_SQL: &str = include_str!("sql/clear_cart_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert a line for `(user, product)` or add `quantity` to the existing one.
    pub(crate) async fn upsert_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CartItemUuid,
        user: UserUuid,
        product: ProductUuid,
        quantity: Quantity,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(UPSERT_CART_ITEM_SQL)
            .bind(uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .bind(quantity.to_i32())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_cart_item_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        user: UserUuid,
        quantity: Quantity,
    ) -> Result<Option<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(UPDATE_CART_ITEM_QUANTITY_SQL)
            .bind(item.into_uuid())
            .bind(user.into_uuid())
            .bind(quantity.to_i32())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        user: UserUuid,
    ) -> Result<Option<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(GET_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(GET_CART_ITEMS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn clear_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_ITEMS_SQL)
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        let quantity = Quantity::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            product: CartItemProduct {
                uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
                name: row.try_get("product_name")?,
                slug: row.try_get("product_slug")?,
                category_name: row.try_get("category_name")?,
                subcategory_name: row.try_get("subcategory_name")?,
                price: try_get_amount(row, "product_price")?,
                images: ProductImages {
                    small: row.try_get("product_image_small")?,
                    medium: row.try_get("product_image_medium")?,
                    big: row.try_get("product_image_big")?,
                },
            },
            quantity,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

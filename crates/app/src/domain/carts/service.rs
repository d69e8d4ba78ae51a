//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{CartItemUpdate, NewCartItem},
            errors::CartsServiceError,
            records::{CartItemRecord, CartItemUuid, CartRecord},
            repository::PgCartItemsRepository,
            totals::CartTotals,
        },
        products::PgProductsRepository,
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        self.products_repository
            .find_product(&mut tx, item.product_uuid)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let added = self
            .items_repository
            .upsert_cart_item(
                &mut tx,
                CartItemUuid::new(),
                user,
                item.product_uuid,
                item.quantity,
            )
            .await?;

        tx.commit().await?;

        tracing::debug!(
            user_uuid = %user,
            cart_item_uuid = %added.uuid,
            product_uuid = %item.product_uuid,
            added = item.quantity.get(),
            quantity = added.quantity.get(),
            "added item to cart"
        );

        Ok(added)
    }

    async fn update_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        update: CartItemUpdate,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let updated = match update.quantity {
            Some(quantity) => {
                self.items_repository
                    .update_cart_item_quantity(&mut tx, item, user, quantity)
                    .await?
            }
            None => {
                self.items_repository
                    .find_cart_item(&mut tx, item, user)
                    .await?
            }
        }
        .ok_or(CartsServiceError::ItemNotFound)?;

        tx.commit().await?;

        tracing::debug!(
            user_uuid = %user,
            cart_item_uuid = %item,
            quantity = updated.quantity.get(),
            changed = update.quantity.is_some(),
            "updated cart item"
        );

        Ok(updated)
    }

    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        let totals = CartTotals::from_lines(
            items
                .iter()
                .map(|item| (item.quantity, item.product.price)),
        )
        .ok_or(CartsServiceError::TotalsOverflow)?;

        Ok(CartRecord {
            items,
            total_items: totals.total_items,
            total_price: totals.total_price,
        })
    }

    async fn clear_cart(&self, user: UserUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let deleted = self.items_repository.clear_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        tracing::debug!(user_uuid = %user, deleted, "cleared cart");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add a product to the user's cart, merging into any existing line for it.
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Replace the quantity of one of the user's cart items. A `None` quantity
    /// leaves the item untouched and returns it as stored.
    async fn update_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        update: CartItemUpdate,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Read the user's cart with its totals.
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError>;

    /// Remove every item from the user's cart, returning how many were removed.
    async fn clear_cart(&self, user: UserUuid) -> Result<u64, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::quantity::Quantity,
            products::{ProductsService, records::ProductUuid},
        },
        test::{
            TestContext,
            helpers::{create_product, create_subcategory, create_user},
        },
    };

    use super::*;

    fn qty(value: i64) -> Quantity {
        Quantity::new(value).expect("valid quantity")
    }

    fn new_item(product: ProductUuid, quantity: i64) -> NewCartItem {
        NewCartItem {
            product_uuid: product,
            quantity: qty(quantity),
        }
    }

    #[tokio::test]
    async fn add_item_creates_line_with_product_detail() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1_99).await?;

        let item = ctx.carts.add_item(user.uuid, new_item(product.uuid, 2)).await?;

        assert_eq!(item.user_uuid, user.uuid);
        assert_eq!(item.quantity.get(), 2);
        assert_eq!(item.product.uuid, product.uuid);
        assert_eq!(item.product.name, "Green Apple");
        assert_eq!(item.product.slug, "green-apple");
        assert_eq!(item.product.category_name, "Fruit");
        assert_eq!(item.product.subcategory_name, "Apples");
        assert_eq!(item.product.price, 1_99);
        assert_eq!(item.product.images, product.images);

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_product_twice_merges_quantities() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1_99).await?;

        let first = ctx.carts.add_item(user.uuid, new_item(product.uuid, 2)).await?;
        let second = ctx.carts.add_item(user.uuid, new_item(product.uuid, 3)).await?;

        assert_eq!(first.uuid, second.uuid, "merge should keep the original line");
        assert_eq!(second.quantity.get(), 5);

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_items, 5);

        Ok(())
    }

    #[tokio::test]
    async fn update_item_replaces_quantity() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1_99).await?;

        let item = ctx.carts.add_item(user.uuid, new_item(product.uuid, 3)).await?;

        let updated = ctx
            .carts
            .update_item(
                user.uuid,
                item.uuid,
                CartItemUpdate {
                    quantity: Some(qty(5)),
                },
            )
            .await?;

        assert_eq!(updated.uuid, item.uuid);
        assert_eq!(updated.quantity.get(), 5, "update replaces rather than adds");

        Ok(())
    }

    #[tokio::test]
    async fn update_item_without_quantity_leaves_it_unchanged() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1_99).await?;

        let item = ctx.carts.add_item(user.uuid, new_item(product.uuid, 4)).await?;

        let unchanged = ctx
            .carts
            .update_item(user.uuid, item.uuid, CartItemUpdate::default())
            .await?;

        assert_eq!(unchanged.quantity.get(), 4);
        assert_eq!(unchanged.updated_at, item.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_item_returns_item_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;

        let result = ctx
            .carts
            .update_item(
                user.uuid,
                CartItemUuid::new(),
                CartItemUpdate {
                    quantity: Some(qty(1)),
                },
            )
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::ItemNotFound)),
            "expected ItemNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn view_empty_cart_has_zero_totals() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert!(cart.items.is_empty());
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.total_price, 0);

        Ok(())
    }

    #[tokio::test]
    async fn view_cart_aggregates_items_and_price() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Pantry", "Tea").await?;
        let first = create_product(&ctx, subcategory.uuid, "Earl Grey", 10_00).await?;
        let second = create_product(&ctx, subcategory.uuid, "Green Tea", 5_00).await?;

        ctx.carts.add_item(user.uuid, new_item(first.uuid, 2)).await?;
        ctx.carts.add_item(user.uuid, new_item(second.uuid, 1)).await?;

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert_eq!(cart.total_items, 3);
        assert_eq!(cart.total_price, 25_00);

        let products: Vec<_> = cart.items.iter().map(|item| item.product.uuid).collect();

        assert_eq!(products, vec![first.uuid, second.uuid], "items ordered by creation");

        Ok(())
    }

    #[tokio::test]
    async fn clear_cart_removes_only_own_items_and_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = create_user(&ctx, "Ada").await?;
        let grace = create_user(&ctx, "Grace").await?;
        let subcategory = create_subcategory(&ctx, "Pantry", "Coffee").await?;
        let beans = create_product(&ctx, subcategory.uuid, "Beans", 8_00).await?;
        let ground = create_product(&ctx, subcategory.uuid, "Ground", 7_00).await?;

        ctx.carts.add_item(ada.uuid, new_item(beans.uuid, 1)).await?;
        ctx.carts.add_item(ada.uuid, new_item(ground.uuid, 1)).await?;
        ctx.carts.add_item(grace.uuid, new_item(beans.uuid, 2)).await?;

        assert_eq!(ctx.carts.clear_cart(ada.uuid).await?, 2);
        assert_eq!(ctx.carts.clear_cart(ada.uuid).await?, 0, "second clear is a no-op");

        assert!(ctx.carts.get_cart(ada.uuid).await?.items.is_empty());

        let other = ctx.carts.get_cart(grace.uuid).await?;

        assert_eq!(other.total_items, 2, "other users' carts are untouched");

        Ok(())
    }

    #[tokio::test]
    async fn add_unknown_product_returns_product_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;

        let result = ctx
            .carts
            .add_item(user.uuid, new_item(ProductUuid::new(), 1))
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );

        assert!(ctx.carts.get_cart(user.uuid).await?.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_adds_merge_into_one_line() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1_99).await?;

        let (first, second) = tokio::join!(
            ctx.carts.add_item(user.uuid, new_item(product.uuid, 1)),
            ctx.carts.add_item(user.uuid, new_item(product.uuid, 1)),
        );

        first?;
        second?;

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_items, 2);

        Ok(())
    }

    #[tokio::test]
    async fn merge_beyond_storable_quantity_returns_invalid_quantity() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1).await?;

        ctx.carts
            .add_item(user.uuid, new_item(product.uuid, i64::from(Quantity::MAX)))
            .await?;

        let result = ctx.carts.add_item(user.uuid, new_item(product.uuid, 1)).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidQuantity(_))),
            "expected InvalidQuantity, got {result:?}"
        );

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert_eq!(cart.total_items, u64::from(Quantity::MAX));

        Ok(())
    }

    #[tokio::test]
    async fn items_are_not_visible_to_other_users() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = create_user(&ctx, "Ada").await?;
        let grace = create_user(&ctx, "Grace").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1_99).await?;

        let item = ctx.carts.add_item(ada.uuid, new_item(product.uuid, 1)).await?;

        let result = ctx
            .carts
            .update_item(
                grace.uuid,
                item.uuid,
                CartItemUpdate {
                    quantity: Some(qty(9)),
                },
            )
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::ItemNotFound)),
            "expected ItemNotFound for another user's item, got {result:?}"
        );

        assert!(ctx.carts.get_cart(grace.uuid).await?.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn cart_items_hidden_without_user_context() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1_99).await?;

        ctx.carts.add_item(user.uuid, new_item(product.uuid, 1)).await?;

        let visible: i64 = query_scalar("SELECT count(*) FROM cart_items")
            .fetch_one(ctx.app_db.pool())
            .await?;

        assert_eq!(visible, 0, "row-level security should hide items");

        Ok(())
    }

    #[tokio::test]
    async fn deleting_product_removes_it_from_carts() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "Ada").await?;
        let subcategory = create_subcategory(&ctx, "Fruit", "Apples").await?;
        let product = create_product(&ctx, subcategory.uuid, "Green Apple", 1_99).await?;

        ctx.carts.add_item(user.uuid, new_item(product.uuid, 1)).await?;
        ctx.products.delete_product(product.uuid).await?;

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert!(cart.items.is_empty());
        assert_eq!(cart.total_price, 0);

        Ok(())
    }
}

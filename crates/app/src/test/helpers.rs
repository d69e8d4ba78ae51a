//! Test Helpers

use crate::{
    domain::{
        categories::{
            CategoriesService, CategoriesServiceError,
            data::{NewCategory, NewSubcategory},
            records::{CategoryUuid, SubcategoryRecord, SubcategoryUuid},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductImages, ProductRecord, ProductUuid},
        },
        users::{
            UsersService, UsersServiceError,
            data::NewUser,
            records::{UserRecord, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_user(
    ctx: &TestContext,
    name: &str,
) -> Result<UserRecord, UsersServiceError> {
    ctx.users
        .create_user(NewUser {
            uuid: UserUuid::new(),
            name: name.to_string(),
        })
        .await
}

/// Create a category and a subcategory under it, slugs derived from the names.
pub(crate) async fn create_subcategory(
    ctx: &TestContext,
    category: &str,
    subcategory: &str,
) -> Result<SubcategoryRecord, CategoriesServiceError> {
    let category = ctx
        .categories
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: category.to_string(),
            slug: None,
            image: format!("categories/{category}.png"),
        })
        .await?;

    ctx.categories
        .create_subcategory(NewSubcategory {
            uuid: SubcategoryUuid::new(),
            category_uuid: category.uuid,
            name: subcategory.to_string(),
            slug: None,
            image: format!("subcategories/{subcategory}.png"),
        })
        .await
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    subcategory: SubcategoryUuid,
    name: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            subcategory_uuid: subcategory,
            name: name.to_string(),
            slug: None,
            price,
            images: ProductImages {
                small: format!("products/small/{name}.png"),
                medium: format!("products/medium/{name}.png"),
                big: format!("products/big/{name}.png"),
            },
        })
        .await
}

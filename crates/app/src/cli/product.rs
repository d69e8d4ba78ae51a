use clap::{Args, Subcommand};
use storefront_app::domain::{
    categories::records::SubcategoryUuid,
    products::{
        data::NewProduct,
        price::{format_minor_units, parse_minor_units},
        records::{ProductImages, ProductUuid},
    },
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Create a product; its category is taken from the subcategory
    Create(CreateProductArgs),

    /// Delete a product, removing it from every cart
    Delete(DeleteProductArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[arg(long)]
    subcategory_uuid: Uuid,

    #[arg(long)]
    name: String,

    /// Derived from the name when omitted
    #[arg(long)]
    slug: Option<String>,

    /// Unit price with at most two decimal places, e.g. `10.50`
    #[arg(long, value_parser = parse_minor_units)]
    price: u64,

    #[arg(long)]
    image_small: String,

    #[arg(long)]
    image_medium: String,

    #[arg(long)]
    image_big: String,

    #[command(flatten)]
    db: DatabaseArgs,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    #[arg(long)]
    product_uuid: Uuid,

    #[command(flatten)]
    db: DatabaseArgs,
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create(args).await,
        ProductSubcommand::Delete(args) => delete(args).await,
    }
}

async fn create(args: CreateProductArgs) -> Result<(), String> {
    let ctx = args.db.context().await?;

    let product = ctx
        .products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            subcategory_uuid: SubcategoryUuid::from_uuid(args.subcategory_uuid),
            name: args.name,
            slug: args.slug,
            price: args.price,
            images: ProductImages {
                small: args.image_small,
                medium: args.image_medium,
                big: args.image_big,
            },
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_slug: {}", product.slug);
    println!("product_price: {}", format_minor_units(product.price));

    Ok(())
}

async fn delete(args: DeleteProductArgs) -> Result<(), String> {
    let ctx = args.db.context().await?;

    ctx.products
        .delete_product(ProductUuid::from_uuid(args.product_uuid))
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("deleted product: {}", args.product_uuid);

    Ok(())
}

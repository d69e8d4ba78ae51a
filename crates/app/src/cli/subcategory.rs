use clap::{Args, Subcommand};
use storefront_app::domain::categories::{
    data::NewSubcategory,
    records::{CategoryUuid, SubcategoryUuid},
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SubcategoryCommand {
    #[command(subcommand)]
    command: SubcategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum SubcategorySubcommand {
    Create(CreateSubcategoryArgs),

    /// Delete a subcategory with its products
    Delete(DeleteSubcategoryArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateSubcategoryArgs {
    /// Parent category
    #[arg(long)]
    category_uuid: Uuid,

    #[arg(long)]
    name: String,

    /// Derived from the name when omitted
    #[arg(long)]
    slug: Option<String>,

    /// Image path or URL
    #[arg(long)]
    image: String,

    #[command(flatten)]
    db: DatabaseArgs,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteSubcategoryArgs {
    #[arg(long)]
    subcategory_uuid: Uuid,

    #[command(flatten)]
    db: DatabaseArgs,
}

pub(crate) async fn run(command: SubcategoryCommand) -> Result<(), String> {
    match command.command {
        SubcategorySubcommand::Create(args) => create(args).await,
        SubcategorySubcommand::Delete(args) => delete(args).await,
    }
}

async fn create(args: CreateSubcategoryArgs) -> Result<(), String> {
    let ctx = args.db.context().await?;

    let subcategory = ctx
        .categories
        .create_subcategory(NewSubcategory {
            uuid: SubcategoryUuid::new(),
            category_uuid: CategoryUuid::from_uuid(args.category_uuid),
            name: args.name,
            slug: args.slug,
            image: args.image,
        })
        .await
        .map_err(|error| format!("failed to create subcategory: {error}"))?;

    println!("subcategory_uuid: {}", subcategory.uuid);
    println!("subcategory_slug: {}", subcategory.slug);

    Ok(())
}

async fn delete(args: DeleteSubcategoryArgs) -> Result<(), String> {
    let ctx = args.db.context().await?;

    ctx.categories
        .delete_subcategory(SubcategoryUuid::from_uuid(args.subcategory_uuid))
        .await
        .map_err(|error| format!("failed to delete subcategory: {error}"))?;

    println!("deleted subcategory: {}", args.subcategory_uuid);

    Ok(())
}

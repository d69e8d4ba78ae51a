use clap::{Args, Subcommand};
use storefront_app::domain::categories::{data::NewCategory, records::CategoryUuid};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    Create(CreateCategoryArgs),

    /// Delete a category with its subcategories and products
    Delete(DeleteCategoryArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateCategoryArgs {
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
pub(crate) struct DeleteCategoryArgs {
    #[arg(long)]
    category_uuid: Uuid,

    #[command(flatten)]
    db: DatabaseArgs,
}

pub(crate) async fn run(command: CategoryCommand) -> Result<(), String> {
    match command.command {
        CategorySubcommand::Create(args) => create(args).await,
        CategorySubcommand::Delete(args) => delete(args).await,
    }
}

async fn create(args: CreateCategoryArgs) -> Result<(), String> {
    let ctx = args.db.context().await?;

    let category = ctx
        .categories
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: args.name,
            slug: args.slug,
            image: args.image,
        })
        .await
        .map_err(|error| format!("failed to create category: {error}"))?;

    println!("category_uuid: {}", category.uuid);
    println!("category_slug: {}", category.slug);

    Ok(())
}

async fn delete(args: DeleteCategoryArgs) -> Result<(), String> {
    let ctx = args.db.context().await?;

    ctx.categories
        .delete_category(CategoryUuid::from_uuid(args.category_uuid))
        .await
        .map_err(|error| format!("failed to delete category: {error}"))?;

    println!("deleted category: {}", args.category_uuid);

    Ok(())
}

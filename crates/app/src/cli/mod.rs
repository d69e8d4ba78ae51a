use clap::{Args, Parser, Subcommand};
use storefront_app::{
    context::AppContext,
    database::{self, Db},
};

mod category;
mod db;
mod product;
mod subcategory;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    User(user::UserCommand),
    Token(token::TokenCommand),
    Category(category::CategoryCommand),
    Subcategory(subcategory::SubcategoryCommand),
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::User(command) => user::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Category(command) => category::run(command).await,
            Commands::Subcategory(command) => subcategory::run(command).await,
            Commands::Product(command) => product::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    /// Services over a fresh pool. Operator commands may run as an
    /// administrative role, so the row-level security guard is not applied.
    pub(crate) async fn context(&self) -> Result<AppContext, String> {
        let pool = database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        Ok(AppContext::from_db(&Db::new(pool)))
    }
}

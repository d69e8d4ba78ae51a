use clap::{Args, Subcommand};
use storefront_app::domain::users::records::UserUuid;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Issue another API token for an existing user
    Create(CreateTokenArgs),

    /// Revoke an API token
    Revoke(RevokeTokenArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// User the token acts for
    #[arg(long)]
    user_uuid: Uuid,

    #[command(flatten)]
    db: DatabaseArgs,
}

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    /// Token UUID, as printed when the token was issued
    #[arg(long)]
    token_uuid: Uuid,

    #[command(flatten)]
    db: DatabaseArgs,
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Create(args) => create(args).await,
        TokenSubcommand::Revoke(args) => revoke(args).await,
    }
}

async fn create(args: CreateTokenArgs) -> Result<(), String> {
    let ctx = args.db.context().await?;

    let issued = ctx
        .auth
        .issue_api_token(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to issue api token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}

async fn revoke(args: RevokeTokenArgs) -> Result<(), String> {
    let ctx = args.db.context().await?;

    ctx.auth
        .revoke_api_token(args.token_uuid)
        .await
        .map_err(|error| format!("failed to revoke api token: {error}"))?;

    println!("revoked token: {}", args.token_uuid);

    Ok(())
}

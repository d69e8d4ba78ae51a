//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenVersion, AuthServiceError, IssuedApiToken, format_api_token,
        generate_api_token_secret, models::NewApiToken, parse_api_token,
        repository::PgAuthRepository, token_verifier, verifiers_match,
    },
    database::Db,
    domain::users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
        }
    }

    async fn touch_last_used(&self, token_uuid: Uuid) -> Result<(), AuthServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.repository.touch_api_token(&mut tx, token_uuid).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let parsed_token = parse_api_token(bearer_token).or(Err(AuthServiceError::NotFound))?;

        let mut tx = self.db.begin_transaction().await?;

        let token = self
            .repository
            .find_active_api_token(&mut tx, parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        tx.commit().await?;

        let presented = token_verifier(
            &parsed_token.token_uuid,
            parsed_token.version,
            &token.user_uuid,
            &parsed_token.secret,
        );

        if token.version != parsed_token.version || !verifiers_match(&token.token_hash, &presented)
        {
            return Err(AuthServiceError::NotFound);
        }

        // Authentication does not depend on recording the use.
        if let Err(error) = self.touch_last_used(parsed_token.token_uuid).await {
            tracing::warn!(
                token_uuid = %parsed_token.token_uuid,
                error = %error,
                "failed to record api token use"
            );
        }

        Ok(token.user_uuid)
    }

    async fn issue_api_token(&self, user: UserUuid) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);

        let mut tx = self.db.begin_transaction().await?;

        let metadata = self
            .repository
            .create_api_token(
                &mut tx,
                NewApiToken {
                    uuid: token_uuid,
                    user_uuid: user,
                    version,
                    token_hash: token_verifier(&token_uuid, version, &user, &secret),
                },
            )
            .await?;

        tx.commit().await?;

        tracing::info!(token_uuid = %token_uuid, user_uuid = %user, "issued api token");

        Ok(IssuedApiToken { token, metadata })
    }

    async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<(), AuthServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.revoke_api_token(&mut tx, token_uuid).await?;

        if rows_affected == 0 {
            return Err(AuthServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a presented bearer token to the user it acts for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;

    /// Issue a new API token for the given user. The raw token is only
    /// available in the returned value.
    async fn issue_api_token(&self, user: UserUuid) -> Result<IssuedApiToken, AuthServiceError>;

    /// Revoke an active token.
    async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<(), AuthServiceError>;
}

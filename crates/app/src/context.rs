//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        categories::{CategoriesService, PgCategoriesService},
        products::{PgProductsService, ProductsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("database role bypasses row-level security; connect as the app role")]
    RowLevelSecurityBypassed,
}

/// Every service, sharing one connection pool.
#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub products: Arc<dyn ProductsService>,
    pub users: Arc<dyn UsersService>,
    pub auth: Arc<dyn AuthService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            carts: Arc::new(PgCartsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            users: Arc::new(PgUsersService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(db.clone())),
        }
    }

    /// Build application context from a database URL.
    ///
    /// The connecting role must be subject to row-level security, otherwise
    /// carts would not be isolated per user.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails or the
    /// role bypasses row-level security.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if database::role_bypasses_rls(&pool)
            .await
            .map_err(AppInitError::Database)?
        {
            return Err(AppInitError::RowLevelSecurityBypassed);
        }

        Ok(Self::from_db(&Db::new(pool)))
    }
}

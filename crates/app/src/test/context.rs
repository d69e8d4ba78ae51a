//! Test context for service-level integration tests.

use sqlx::{Connection, PgConnection, PgPool, query};

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        carts::PgCartsService, categories::PgCategoriesService, products::PgProductsService,
        users::PgUsersService,
    },
};

use super::db::{SUPERUSER, SUPERUSER_PASSWORD, TestDb};

/// Non-superuser role the services connect as, so row-level security applies.
const APP_ROLE: &str = "storefront_app_test";
const APP_ROLE_PASSWORD: &str = "storefront_app_test_pass";

/// `duplicate_object` and `unique_violation`, both seen when parallel tests
/// race to create the role.
const ROLE_EXISTS_CODES: [&str; 2] = ["42710", "23505"];

pub struct TestContext {
    /// Superuser database handle. Keeps the database alive for the test.
    pub db: TestDb,

    /// Restricted pool every service below shares.
    pub app_db: Db,

    pub users: PgUsersService,
    pub categories: PgCategoriesService,
    pub products: PgProductsService,
    pub carts: PgCartsService,
    pub auth: PgAuthService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let app_db = Db::new(Self::setup_app_pool(&test_db).await);

        Self {
            users: PgUsersService::new(app_db.clone()),
            categories: PgCategoriesService::new(app_db.clone()),
            products: PgProductsService::new(app_db.clone()),
            carts: PgCartsService::new(app_db.clone()),
            auth: PgAuthService::new(app_db.clone()),
            app_db,
            db: test_db,
        }
    }

    /// Create the restricted role (once per server) and return a pool connected as it.
    ///
    /// Superusers bypass row-level security even when it is forced, so the
    /// cart isolation tests are only meaningful through this role.
    async fn setup_app_pool(test_db: &TestDb) -> PgPool {
        let su_url = &test_db.superuser_url;

        // Roles are server-scoped; create it from the maintenance database.
        let postgres_url = su_url.rsplit_once('/').map_or(su_url.as_str(), |x| x.0);
        let postgres_url = format!("{postgres_url}/postgres");

        let mut server_conn = PgConnection::connect(&postgres_url)
            .await
            .expect("Failed to connect to postgres database for role setup");

        let create_result = query(&format!(
            "CREATE ROLE {APP_ROLE} WITH LOGIN PASSWORD '{APP_ROLE_PASSWORD}' \
               NOSUPERUSER NOCREATEDB NOCREATEROLE NOBYPASSRLS"
        ))
        .execute(&mut server_conn)
        .await;

        match create_result {
            Ok(_) => {}
            Err(sqlx::Error::Database(ref e))
                if e.code()
                    .is_some_and(|code| ROLE_EXISTS_CODES.contains(&code.as_ref())) => {}
            Err(error) => panic!("Failed to create app role: {error}"),
        }

        query(&format!(
            "GRANT CONNECT ON DATABASE \"{}\" TO {APP_ROLE}",
            test_db.name
        ))
        .execute(&mut server_conn)
        .await
        .expect("Failed to grant CONNECT on test database");

        server_conn
            .close()
            .await
            .expect("Failed to close server connection");

        let mut db_conn = PgConnection::connect(su_url)
            .await
            .expect("Failed to connect to test database for privilege setup");

        for stmt in [
            format!("GRANT USAGE ON SCHEMA public TO {APP_ROLE}"),
            format!(
                "GRANT SELECT, INSERT, UPDATE, DELETE ON ALL TABLES IN SCHEMA public TO {APP_ROLE}"
            ),
        ] {
            query(&stmt)
                .execute(&mut db_conn)
                .await
                .expect("Failed to grant table privileges to app role");
        }

        db_conn
            .close()
            .await
            .expect("Failed to close db connection");

        let app_url = su_url.replacen(
            &format!("{SUPERUSER}:{SUPERUSER_PASSWORD}"),
            &format!("{APP_ROLE}:{APP_ROLE_PASSWORD}"),
            1,
        );

        PgPool::connect(&app_url)
            .await
            .expect("Failed to create app pool")
    }
}

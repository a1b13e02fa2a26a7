use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;

use study_group::{
    app_state::{AppState, AssignmentStoreType, MemberStoreType},
    domain::{Assignment, Member},
    get_postgres_pool,
    services::{
        data_stores::{
            HashmapRecordStore, PostgresRecordStore, PostgrestRecordStore,
        },
        session_store::SessionStore,
    },
    utils::{
        constants::{
            env, prod, DATABASE_URL, POSTGREST_API_KEY, POSTGREST_URL,
            STORE_BACKEND,
        },
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let (member_store, assignment_store) = configure_record_stores().await?;
    let app_state =
        AppState::new(member_store, assignment_store, SessionStore::default());

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .wrap_err("failed to build app")?;

    app.run().await.wrap_err("failed to run app")?;

    Ok(())
}

#[tracing::instrument(name = "Configuring record stores", fields(backend = %*STORE_BACKEND))]
async fn configure_record_stores() -> Result<(MemberStoreType, AssignmentStoreType)> {
    match STORE_BACKEND.as_str() {
        "memory" => {
            tracing::warn!("using in-memory record stores, data is lost on restart");
            let member_store: MemberStoreType =
                Arc::new(RwLock::new(HashmapRecordStore::<Member>::default()));
            let assignment_store: AssignmentStoreType =
                Arc::new(RwLock::new(HashmapRecordStore::<Assignment>::default()));
            Ok((member_store, assignment_store))
        }
        "postgres" => {
            let url = DATABASE_URL.as_ref().ok_or_else(|| {
                eyre!("{} must be set", env::DATABASE_URL_ENV_VAR)
            })?;
            let pool = get_postgres_pool(url)
                .await
                .wrap_err("failed to create Postgres connection pool")?;
            sqlx::migrate!()
                .run(&pool)
                .await
                .wrap_err("failed to run migrations")?;

            let member_store: MemberStoreType = Arc::new(RwLock::new(
                PostgresRecordStore::<Member>::new(pool.clone()),
            ));
            let assignment_store: AssignmentStoreType =
                Arc::new(RwLock::new(PostgresRecordStore::<Assignment>::new(pool)));
            Ok((member_store, assignment_store))
        }
        "postgrest" => {
            let url = POSTGREST_URL.clone().ok_or_else(|| {
                eyre!("{} must be set", env::POSTGREST_URL_ENV_VAR)
            })?;
            let api_key = POSTGREST_API_KEY.clone().ok_or_else(|| {
                eyre!("{} must be set", env::POSTGREST_API_KEY_ENV_VAR)
            })?;
            let http_client = Client::builder()
                .timeout(prod::record_store::TIMEOUT)
                .build()
                .wrap_err("failed to build HTTP client")?;

            let member_store: MemberStoreType =
                Arc::new(RwLock::new(PostgrestRecordStore::<Member>::new(
                    url.clone(),
                    api_key.clone(),
                    http_client.clone(),
                )));
            let assignment_store: AssignmentStoreType = Arc::new(RwLock::new(
                PostgrestRecordStore::<Assignment>::new(url, api_key, http_client),
            ));
            Ok((member_store, assignment_store))
        }
        other => bail!(
            "unknown {} '{other}', expected memory, postgres or postgrest",
            env::STORE_BACKEND_ENV_VAR
        ),
    }
}

use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::{env as std_env, time::Duration};

lazy_static! {
    pub static ref STORE_BACKEND: String =
        load_or_default(env::STORE_BACKEND_ENV_VAR, DEFAULT_STORE_BACKEND);
    pub static ref DATABASE_URL: Option<Secret<String>> =
        load_secret(env::DATABASE_URL_ENV_VAR);
    pub static ref POSTGREST_URL: Option<String> =
        load_optional(env::POSTGREST_URL_ENV_VAR);
    pub static ref POSTGREST_API_KEY: Option<Secret<String>> =
        load_secret(env::POSTGREST_API_KEY_ENV_VAR);
    pub static ref STATIC_DIR: String =
        load_or_default(env::STATIC_DIR_ENV_VAR, DEFAULT_STATIC_DIR);
}

fn load_env() {
    dotenv().ok();
}

fn load_optional(variable_name: &str) -> Option<String> {
    load_env();
    std_env::var(variable_name)
        .ok()
        .filter(|value| !value.is_empty())
}

fn load_secret(variable_name: &str) -> Option<Secret<String>> {
    load_optional(variable_name).map(Secret::new)
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_optional(variable_name).unwrap_or_else(|| String::from(default_value))
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const POSTGREST_API_KEY_ENV_VAR: &str = "POSTGREST_API_KEY";
    pub const POSTGREST_URL_ENV_VAR: &str = "POSTGREST_URL";
    pub const STATIC_DIR_ENV_VAR: &str = "STATIC_DIR";
    pub const STORE_BACKEND_ENV_VAR: &str = "STORE_BACKEND";
}

pub const DEFAULT_STORE_BACKEND: &str = "memory";
/// Resolved against the working directory at startup.
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const SESSION_COOKIE_NAME: &str = "study_group_session";
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
pub const MAX_SESSIONS: usize = 10_000;

/// Shared passcode for add, edit and delete. Not a credential.
pub const GATE_PASSCODE: &str = "1101";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod record_store {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_secs(10);
        pub const MAX_CONNECTIONS: u32 = 5;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod record_store {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}

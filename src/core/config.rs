use dotenv::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_PASSWORD: &str = "password";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub postgres_user: String,
    pub postgres_host: String,
    pub postgres_db: String,
    pub postgres_password: String,
    pub postgres_port: u16,
    pub max_connections: u32,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione da una sorgente qualsiasi di variabili.
    /// Ogni variabile assente prende il suo valore di default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let postgres_password = lookup("POSTGRES_PASSWORD").unwrap_or_else(|| {
            warn!("POSTGRES_PASSWORD not set, using default (not secure for production!)");
            DEFAULT_PASSWORD.to_string()
        });

        Ok(Config {
            server_host: var("HOST", "0.0.0.0"),
            server_port: parse(&var("PORT", "3000"), "PORT", "a number between 0-65535")?,
            postgres_user: var("POSTGRES_USER", "postgres"),
            postgres_host: var("POSTGRES_HOST", "localhost"),
            postgres_db: var("POSTGRES_DB", "testdb"),
            postgres_password,
            postgres_port: parse(
                &var("POSTGRES_PORT", "5432"),
                "POSTGRES_PORT",
                "a number between 0-65535",
            )?,
            max_connections: parse(
                &var("MAX_DB_CONNECTIONS", "10"),
                "MAX_DB_CONNECTIONS",
                "a positive number",
            )?,
            app_env: var("APP_ENV", "development"),
        })
    }

    /// Parametri di connessione per il pool PostgreSQL
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.postgres_host)
            .port(self.postgres_port)
            .username(&self.postgres_user)
            .password(&self.postgres_password)
            .database(&self.postgres_db)
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("  Environment: {}", self.app_env);
        info!("  Server Address: {}:{}", self.server_host, self.server_port);
        info!("  Database: {}", self.masked_database_url());
        info!("  Max DB Connections: {}", self.max_connections);
        if self.postgres_password == DEFAULT_PASSWORD {
            warn!("  Database password: USING DEFAULT (INSECURE!)");
        }
    }

    /// URL del database con la password mascherata, per il logging
    pub fn masked_database_url(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}",
            self.postgres_user, self.postgres_host, self.postgres_port, self.postgres_db
        )
    }
}

fn parse<T: FromStr>(value: &str, key: &str, expected: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid {key}: must be {expected}"))
}

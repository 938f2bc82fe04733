// src/config.rs

use std::{env, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{CategoryRepository, CustomerRepository, DashboardRepository, OrderRepository, ProductRepository},
    services::{AnalyticsService, AuthService, StorageService},
};

const DEFAULT_BUCKET: &str = "product-images";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Variáveis de ambiente lidas na inicialização.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub jwt_secret: String,
    pub storage_url: String,
    pub storage_key: String,
    pub storage_bucket: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub run_migrations: bool,
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("{name} deve ser definida"))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let db_max_connections = match optional("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: {v}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            storage_url: required("STORAGE_URL")?,
            storage_key: required("STORAGE_KEY")?,
            storage_bucket: optional("STORAGE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            db_max_connections,
            run_migrations: optional("RUN_MIGRATIONS").is_some_and(|v| parse_flag(&v)),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub orders: OrderRepository,
    pub products: ProductRepository,
    pub customers: CustomerRepository,
    pub categories: CategoryRepository,
    pub analytics: AnalyticsService,
    pub storage: StorageService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&settings.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Self::with_pool(db_pool, settings)
    }

    /// Monta o estado sobre um pool já criado (lazy nos testes de rota).
    pub fn with_pool(db_pool: PgPool, settings: &Settings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Falha ao montar o cliente HTTP do storage")?;

        // --- Monta o gráfico de dependências ---
        let orders = OrderRepository::new(db_pool.clone());
        let products = ProductRepository::new(db_pool.clone());
        let analytics = AnalyticsService::new(
            DashboardRepository::new(db_pool.clone()),
            orders.clone(),
            products.clone(),
        );

        Ok(Self {
            auth_service: AuthService::new(settings.jwt_secret.clone()),
            customers: CustomerRepository::new(db_pool.clone()),
            categories: CategoryRepository::new(db_pool.clone()),
            storage: StorageService::new(
                http,
                &settings.storage_url,
                settings.storage_key.clone(),
                settings.storage_bucket.clone(),
            ),
            orders,
            products,
            analytics,
            db_pool,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn migration_flag_accepts_common_truthy_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("ON"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
    }
}

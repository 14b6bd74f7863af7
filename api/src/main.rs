use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use lv_api::app::create_app;
use lv_api::routes::auth::AppState;
use lv_api::{config, telemetry};
use lv_core::repositories::{
    InMemoryOtpRepository, InMemoryUserRepository, OtpRepository, UserRepository,
};
use lv_core::services::otp::{NotifierTrait, OtpService, OtpServiceConfig};
use lv_infra::database::{DatabasePool, MySqlOtpRepository, MySqlUserRepository};
use lv_infra::mail::{create_mail_service, MailNotifier};
use lv_shared::config::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        storage = ?config.storage,
        mail_provider = ?config.mail.provider,
        "Starting LawVriksh API server"
    );

    let mail = create_mail_service(&config.mail, config.environment.is_development())
        .context("failed to initialise mail service")?;
    let notifier = Arc::new(MailNotifier::new(mail));

    match config.storage {
        StorageBackend::Mysql => {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("failed to connect to the database")?;
            pool.run_migrations()
                .await
                .context("failed to run database migrations")?;
            pool.health_check()
                .await
                .context("database health check failed")?;
            tracing::info!(pool = %pool.get_statistics(), "Database ready");

            let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
            let otps = Arc::new(MySqlOtpRepository::new(pool.get_pool().clone()));
            let result = serve(&config, users, otps, notifier).await;
            pool.close().await;
            result
        }
        StorageBackend::Memory => {
            let seed = config::seed_emails_from_env();
            tracing::warn!(
                seeded_users = seed.len(),
                "Using in-memory stores; data is lost on restart"
            );
            let users = Arc::new(InMemoryUserRepository::with_emails(seed));
            let otps = Arc::new(InMemoryOtpRepository::new());
            serve(&config, users, otps, notifier).await
        }
    }
}

async fn serve<U, O, N>(
    config: &AppConfig,
    users: Arc<U>,
    otps: Arc<O>,
    notifier: Arc<N>,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: NotifierTrait + 'static,
{
    let service = OtpService::new(users, otps, notifier, OtpServiceConfig::from(&config.otp));
    let state = web::Data::new(AppState::new(Arc::new(service)));
    let max_payload_size = config.server.max_payload_size;
    let bind_address = config.server.bind_address();

    tracing::info!(address = %bind_address, "Binding HTTP server");

    let mut server = HttpServer::new(move || create_app(state.clone(), max_payload_size))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")
}

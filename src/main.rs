use corpnews::application::{
    ports::{security::PasswordHasher, time::Clock},
    services::ApplicationServices,
};
use corpnews::config::AppConfig;
use corpnews::domain::{
    article::{CompanyArticleReadRepository, CompanyArticleWriteRepository},
    company::CompanyRepository,
    member::MemberRepository,
};
use corpnews::infrastructure::{
    database,
    repositories::{
        PostgresCompanyArticleReadRepository, PostgresCompanyArticleWriteRepository,
        PostgresCompanyRepository, PostgresMemberRepository,
    },
    security::password::Argon2PasswordHasher,
    time::SystemClock,
};
use corpnews::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let company_repo: Arc<dyn CompanyRepository> =
        Arc::new(PostgresCompanyRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn CompanyArticleWriteRepository> =
        Arc::new(PostgresCompanyArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn CompanyArticleReadRepository> =
        Arc::new(PostgresCompanyArticleReadRepository::new(pool.clone()));
    let member_repo: Arc<dyn MemberRepository> = Arc::new(PostgresMemberRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        company_repo,
        article_write_repo,
        article_read_repo,
        member_repo,
        password_hasher,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

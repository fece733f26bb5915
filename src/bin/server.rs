use clap::Parser;
use showroom::{
    config::{self, CliArgs},
    create_app, db, notify, run_migrations, AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes tracing, writing to stdout and, when a log directory is
/// configured, to a daily-rotated file as well
///
/// Returns the appender guard; dropping it stops the background writer,
/// so it must live for the whole process.
fn init_tracing(log_dir: Option<&std::path::Path>, debug: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = if debug { "showroom=debug,info" } else { "showroom=info,warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "showroom.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads them
    if std::fs::metadata(".env").is_ok() {
        dotenv::dotenv().ok();
    }

    let args = CliArgs::parse();
    let debug = args.debug;
    let config = config::get_config(args);

    let _log_guard = init_tracing(config.log_dir.as_deref(), debug);

    tracing::info!("Starting showroom server");

    // Initialize the database pool
    let pool = Arc::new(db::init_pool(&config.database_url));

    // Bring the schema up to date
    {
        let mut conn = pool.get().expect("Failed to get database connection");
        run_migrations(&mut conn);
    }

    let notifier = notify::Notifier::new(
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
        config.mail_to.clone(),
    );

    // Build our application with routes
    let app = create_app(AppState::new(pool, notifier));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

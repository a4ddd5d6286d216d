use clap::Parser;
use colored::*;
use std::env;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use appointment_service::{create_app, AppointmentService};

/// MediTrack Appointment Scheduling Service
#[derive(Parser, Debug)]
#[command(name = "appointment-service")]
#[command(about = "Appointment scheduling API server")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8001")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load connection parameters from the .env file, if present
    dotenvy::dotenv().ok();

    init_tracing(args.verbose);

    info!(
        "📅 {}",
        "Starting MediTrack Appointment Scheduling Service".bright_cyan()
    );
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION").bright_white());
    info!(
        "🌐 Bind address: {}",
        format!("{}:{}", args.host, args.port).bright_yellow()
    );

    // Configuration problems are fatal: abort before serving any traffic.
    let service = AppointmentService::new().await?;

    let app = create_app(service);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        "🚀 {}",
        format!("Appointment scheduling service running on http://{}", addr).bright_green()
    );
    info!(
        "📋 {}",
        format!("API docs available at: http://{}/docs", addr).bright_blue()
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let is_development =
        env::var("MEDITRACK_ENV").unwrap_or_else(|_| "development".to_string()) == "development";

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "appointment_service={},tower_http=info,sqlx=warn,hyper=info",
            level
        )
        .into()
    });

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339()),
            )
            .init();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}

//! # WhatsApp Gateway RS
//!
//! Minimal WhatsApp webhook gateway with a placeholder GraphQL endpoint.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export VERIFY_TOKEN=your-handshake-secret
//! export PORT=4000
//!
//! # Run the server
//! whatsapp-gateway
//! ```

use gateway_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 WhatsApp gateway starting on http://{}", addr);

    if !is_prod {
        info!("📡 Handshake: GET  http://{}/webhook", addr);
        info!("📨 Intake:    POST http://{}/webhook", addr);
        info!("🔎 GraphQL:   POST http://{}/graphql", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  📨 WhatsApp Gateway RS 📨
  ━━━━━━━━━━━━━━━━━━━━━━━━━
  Webhook handshake + intake
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}

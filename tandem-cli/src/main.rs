use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::net::SocketAddr;
use tandem_core::IceServerConfig;
use tandem_server::{DEFAULT_COMMAND_BUFFER, DEFAULT_STUN_URL, ServerConfig, build_app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(about = "Signaling server pairing two peers into a direct media call")]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "TANDEM_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// STUN server handed to clients. Repeat for several.
    #[arg(long = "stun", env = "TANDEM_STUN", value_delimiter = ',', default_value = DEFAULT_STUN_URL)]
    stun_urls: Vec<String>,

    #[arg(long, env = "TURN_URL")]
    turn_url: Option<String>,

    #[arg(long, env = "TURN_USERNAME", requires = "turn_url")]
    turn_username: Option<String>,

    #[arg(long, env = "TURN_CREDENTIAL", requires = "turn_url")]
    turn_credential: Option<String>,

    /// Pending room commands before senders wait.
    #[arg(long, default_value_t = DEFAULT_COMMAND_BUFFER)]
    command_buffer: usize,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        let mut ice_servers: Vec<IceServerConfig> = self
            .stun_urls
            .into_iter()
            .filter(|url| !url.is_empty())
            .map(IceServerConfig::stun)
            .collect();

        if let Some(turn_url) = self.turn_url {
            ice_servers.push(IceServerConfig {
                urls: vec![turn_url],
                username: self.turn_username,
                credential: self.turn_credential,
            });
        }

        ServerConfig {
            bind: self.bind,
            ice_servers,
            command_buffer: self.command_buffer,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config();

    println!("{}", "🚀 Starting Tandem signaling server...".green().bold());
    info!("ICE servers: {:?}", config.ice_servers);

    let (app, _room) = build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Signaling server listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

//! curtains - runs the curtains storefront backend
//!
//! Settings come from flags, then environment variables, then `.env` in the
//! working directory.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use curtains_server::config::DEFAULT_PORT;
use curtains_server::{DatabaseSettings, EnvPresence, ServiceSettings};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "curtains",
    author,
    version,
    about = "Backend for the curtains storefront: catalog, gallery, site config and contact intake"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// MongoDB connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Database holding the storefront collections
    #[arg(long, env = "DATABASE_NAME")]
    database_name: Option<String>,

    /// Only allow localhost frontend origins (default: any origin)
    #[arg(long)]
    localhost_cors: bool,

    /// Keep data in memory instead of MongoDB (local development)
    #[arg(long)]
    memory_store: bool,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,
}

impl Cli {
    fn into_settings(self) -> ServiceSettings {
        ServiceSettings {
            bind_addr: SocketAddr::new(self.host, self.port),
            database: DatabaseSettings {
                url: self.database_url.filter(|v| !v.is_empty()),
                name: self.database_name.filter(|v| !v.is_empty()),
            },
            env: EnvPresence::from_env(),
            cors_permissive: !self.localhost_cors,
            memory_store: self.memory_store,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let settings = cli.into_settings();
    tracing::info!(
        addr = %settings.bind_addr,
        memory_store = settings.memory_store,
        "Starting curtains backend"
    );

    curtains_server::serve(settings).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_to_settings() {
        let cli = Cli::parse_from([
            "curtains",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--database-url",
            "mongodb://db:27017",
            "--database-name",
            "",
            "--localhost-cors",
        ]);
        let settings = cli.into_settings();

        assert_eq!(settings.bind_addr, "127.0.0.1:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.database.url.as_deref(), Some("mongodb://db:27017"));
        assert_eq!(settings.database.name, None);
        assert!(!settings.cors_permissive);
        assert!(!settings.memory_store);
    }
}

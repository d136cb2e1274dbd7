//! Service configuration - bind address and database settings
//!
//! Values are supplied by the binary, which reads them from flags and the
//! environment:
//! - `PORT`: Listening port (default: 8000)
//! - `DATABASE_URL`: MongoDB connection string
//! - `DATABASE_NAME`: Database holding the storefront collections

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 8000;

/// Document store connection settings. Either value may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub name: Option<String>,
}

/// Which database variables were present in the process environment at
/// startup. Reported by diagnostics independently of how the store was built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

impl EnvPresence {
    /// Read presence of `DATABASE_URL` and `DATABASE_NAME`. Empty counts as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());
        Self {
            database_url: present("DATABASE_URL"),
            database_name: present("DATABASE_NAME"),
        }
    }
}

/// Full service configuration
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    pub database: DatabaseSettings,

    /// Database variables seen in the environment, for diagnostics
    pub env: EnvPresence,

    /// Allow any origin (default: true, the storefront is served from its own domain)
    pub cors_permissive: bool,

    /// Use the in-process store instead of MongoDB (local development)
    pub memory_store: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            database: DatabaseSettings::default(),
            env: EnvPresence::default(),
            cors_permissive: true,
            memory_store: false,
        }
    }
}

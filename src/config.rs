use std::net::{IpAddr, SocketAddr};

use clap::Parser;

/// Stateless referee for grid snake games.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Largest request body accepted by /validate
    #[arg(long, default_value_t = 1024 * 1024)]
    pub max_body_bytes: u64,
}

impl Config {
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host:           IpAddr::from([0, 0, 0, 0]),
            port:           3000,
            max_body_bytes: 1024 * 1024,
        }
    }
}

use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "storefront", about = "Storefront backend: catalog, carts and orders over HTTP", version)]
pub struct Config {
    #[arg(
        long,
        env = "STOREFRONT_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080",
        help = "Address the HTTP server listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "STOREFRONT_CHANNEL_CAPACITY",
        value_name = "N",
        default_value_t = 32,
        value_parser = clap::value_parser!(usize),
        help = "Request buffer size of each store actor"
    )]
    pub channel_capacity: usize,

    #[arg(
        long,
        env = "STOREFRONT_LOG",
        value_name = "FILTER",
        default_value = "info",
        help = "Log filter used when RUST_LOG is not set"
    )]
    pub log_filter: String,

    #[arg(
        long,
        env = "STOREFRONT_SEED_DEMO",
        help = "Seed an admin, a customer and a few products at startup"
    )]
    pub seed_demo_data: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.channel_capacity == 0 {
            anyhow::bail!("channel capacity must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_overrides() {
        let config = Config::try_parse_from(["storefront"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.channel_capacity, 32);
        assert!(!config.seed_demo_data);

        let config = Config::try_parse_from(["storefront", "--channel-capacity", "0", "--seed-demo-data"]).unwrap();
        assert!(config.seed_demo_data);
        assert!(config.validate().is_err());
    }
}

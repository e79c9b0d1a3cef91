//! Server mode CLI logic
//!
//! Contains the core logic for running the HTTP server mode.

use crate::{Settings, config::ConfigLoader, server::app, store::MongoStudentRepository};
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Arguments for server mode
#[derive(Debug)]
pub struct ServeArgs {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub database_uri: Option<String>,
    pub config: Option<String>,
    pub verbose: bool,
}

/// Run the HTTP server with the given arguments
pub async fn run_server_mode(args: ServeArgs) -> Result<()> {
    // Load configuration FIRST, before initializing logging, so the
    // logging.level from the config file can take effect.
    //
    // Configuration precedence:
    // 1. Command line arguments (highest priority)
    // 2. Environment variables
    // 3. Configuration file (from --config, STUDENT_API_CONFIG or default location)
    // 4. Default values (lowest priority)
    let config_loader = ConfigLoader::new();

    let config_path = if let Some(config) = &args.config {
        Some(std::path::PathBuf::from(config))
    } else {
        ConfigLoader::get_config_path()
    };

    let mut settings = config_loader
        .load(config_path.as_deref())
        .unwrap_or_else(|e| {
            // Can't use tracing here since it's not initialized yet
            eprintln!(
                "Warning: Failed to load configuration: {}. Using defaults.",
                e
            );
            Settings::default()
        });

    // Override with CLI arguments if provided (highest priority)
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(uri) = args.database_uri {
        settings.database.uri = uri;
    }
    if args.verbose {
        settings.logging.verbose = true;
    }

    // Logging precedence: --verbose (CLI flag, VERBOSE env var or config
    // file) > RUST_LOG > config file level > "info"
    let env_filter = if settings.logging.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting student API v{}", crate::utils::version::get_version());

    // Connect to the document store. A startup ping failure is logged inside
    // connect() and the server still starts listening.
    let repository = Arc::new(MongoStudentRepository::connect(&settings.database).await?);

    let app = app::create_app(repository, settings.clone());

    let addr = parse_and_bind_address(&settings.server.host, settings.server.port).await?;

    tracing::info!(
        "Student API v{} listening on {}",
        crate::utils::version::get_version(),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Complete when the process receives a shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, draining in-flight requests");
}

/// Parse host string and attempt to bind to the address
///
/// Binds IPv6 any (`::`) when possible and falls back to IPv4 any
/// (`0.0.0.0`) when the IPv6 bind fails.
pub async fn parse_and_bind_address(host: &str, port: u16) -> Result<std::net::SocketAddr> {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

    // Try to parse as IP address first
    if let Ok(ip) = host.parse::<IpAddr>() {
        let addr = SocketAddr::new(ip, port);
        tracing::debug!("Parsed address: {}", addr);
        return Ok(addr);
    }

    // Handle special cases like "::" for IPv6 any
    match host {
        "::" => {
            let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port);
            tracing::debug!("Using IPv6 any address: {}", addr);

            // Test if we can bind to IPv6
            match tokio::net::TcpListener::bind(addr).await {
                Ok(_) => {
                    tracing::info!("Successfully bound to IPv6 address {}", addr);
                    Ok(addr)
                }
                Err(e) => {
                    tracing::warn!(
                        "Could not listen on [::]:{} (Caused by {}), falling back to 0.0.0.0",
                        port,
                        e
                    );
                    let fallback_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
                    tracing::info!("Using IPv4 fallback address: {}", fallback_addr);
                    Ok(fallback_addr)
                }
            }
        }
        "0.0.0.0" => {
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
            tracing::info!("Using IPv4 any address: {}", addr);
            Ok(addr)
        }
        _ => {
            anyhow::bail!(
                "Invalid host address: {}. Use '::' for IPv6 or '0.0.0.0' for IPv4",
                host
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_and_bind_ipv4_address() {
        let result = parse_and_bind_address("127.0.0.1", 0).await;
        assert!(result.is_ok());

        let addr = result.unwrap();
        assert_eq!(
            addr.ip(),
            std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
        );
    }

    #[tokio::test]
    async fn test_parse_and_bind_ipv6_address() {
        let result = parse_and_bind_address("::1", 0).await;
        assert!(result.is_ok());

        let addr = result.unwrap();
        assert_eq!(
            addr.ip(),
            std::net::IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
        );
    }

    #[tokio::test]
    async fn test_parse_and_bind_ipv6_any_fallback() {
        let result = parse_and_bind_address("::", 0).await;
        assert!(result.is_ok());

        let addr = result.unwrap();
        // Either IPv6 unspecified or the IPv4 fallback
        assert!(
            addr.ip() == std::net::IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
                || addr.ip() == std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
        );
    }

    #[tokio::test]
    async fn test_parse_and_bind_ipv4_any_address() {
        let result = parse_and_bind_address("0.0.0.0", 0).await;
        assert!(result.is_ok());

        let addr = result.unwrap();
        assert_eq!(
            addr.ip(),
            std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
        );
    }

    #[tokio::test]
    async fn test_parse_and_bind_invalid_address() {
        let result = parse_and_bind_address("invalid-host", 8080).await;
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert!(
            error
                .to_string()
                .contains("Invalid host address: invalid-host")
        );
    }

    #[tokio::test]
    async fn test_parse_and_bind_localhost_fails() {
        // Only IP addresses and the :: / 0.0.0.0 shorthands are accepted
        let result = parse_and_bind_address("localhost", 8080).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_args_with_optional_values() {
        let args = ServeArgs {
            port: None,
            host: None,
            database_uri: None,
            config: None,
            verbose: false,
        };
        assert!(args.port.is_none());
        assert!(args.host.is_none());
        assert!(args.database_uri.is_none());
        assert!(!args.verbose);

        let args = ServeArgs {
            port: Some(8080),
            host: Some("127.0.0.1".to_string()),
            database_uri: Some("mongodb://localhost:27017".to_string()),
            config: Some("/path/to/config.toml".to_string()),
            verbose: true,
        };
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.host, Some("127.0.0.1".to_string()));
        assert_eq!(
            args.database_uri,
            Some("mongodb://localhost:27017".to_string())
        );
        assert!(args.verbose);
    }
}

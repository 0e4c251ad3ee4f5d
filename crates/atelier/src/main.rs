//! atelier - Jewellery retail admin dashboard

use std::net::IpAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "atelier",
    version,
    about = "Jewellery retail admin dashboard",
    long_about = "Admin web UI for the Atelier jewellery catalogue.\n\
                  \n\
                  Serves the navigation shell, plus the compiled Leptos frontend\n\
                  once it has been built with Trunk (run from the workspace root\n\
                  so crates/atelier-web/dist is found).\n\
                  \n\
                  Examples:\n\
                    atelier                          # Serve on 127.0.0.1:3000\n\
                    atelier --port 8080              # Custom port\n\
                    atelier serve --port 8080        # Same, explicit subcommand\n\
                  \n\
                  Environment Variables:\n\
                    ATELIER_HOST                     # Override bind address\n\
                    ATELIER_PORT                     # Override port"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Bind address for the web server
    #[arg(long, global = true, env = "ATELIER_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port for the web server
    #[arg(long, global = true, env = "ATELIER_PORT", default_value = "3000")]
    port: u16,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web interface (default)
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.mode.unwrap_or(Mode::Serve) {
        Mode::Serve => atelier_web::run(cli.host, cli.port).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch process-wide env vars.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_bare_and_serve_invocations_share_args() {
        let _guard = ENV_LOCK.lock().unwrap();

        let cli = Cli::try_parse_from(["atelier"]).unwrap();
        assert!(cli.mode.is_none());
        assert_eq!(cli.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(cli.port, 3000);

        let cli = Cli::try_parse_from(["atelier", "--port", "8080"]).unwrap();
        assert_eq!(cli.port, 8080);

        let cli = Cli::try_parse_from(["atelier", "serve", "--port", "8080"]).unwrap();
        assert!(cli.mode.is_some());
        assert_eq!(cli.port, 8080);
    }

    #[test]
    fn test_env_overrides_apply_without_subcommand() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var("ATELIER_PORT", "4100");
        std::env::set_var("ATELIER_HOST", "0.0.0.0");

        let bare = Cli::try_parse_from(["atelier"]).unwrap();
        let explicit = Cli::try_parse_from(["atelier", "serve"]).unwrap();

        std::env::remove_var("ATELIER_PORT");
        std::env::remove_var("ATELIER_HOST");

        assert_eq!(bare.port, 4100);
        assert_eq!(bare.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(explicit.port, 4100);
        assert_eq!(explicit.host, IpAddr::from([0, 0, 0, 0]));
    }

    #[test]
    fn test_flag_beats_env() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var("ATELIER_PORT", "4100");
        let cli = Cli::try_parse_from(["atelier", "--port", "9000"]).unwrap();
        std::env::remove_var("ATELIER_PORT");

        assert_eq!(cli.port, 9000);
    }
}

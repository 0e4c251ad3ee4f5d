//! atelier-web - Web frontend for the Atelier admin UI using Leptos + Axum

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod nav;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

/// Run the web server
#[cfg(feature = "ssr")]
pub async fn run(host: std::net::IpAddr, port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    let router = create_router();

    let addr = SocketAddr::new(host, port);
    let listener = TcpListener::bind(addr).await?;

    info!("Admin UI listening on http://{}", addr);
    println!("Admin UI listening on http://{}", addr);

    let dist = std::path::Path::new(router::DIST_DIR);
    if dist.join("index.html").exists() {
        println!("Serving compiled frontend from {}", dist.display());
    } else {
        println!("Frontend not built - run 'trunk build' in crates/atelier-web");
    }

    axum::serve(listener, router).await?;

    Ok(())
}

mod error;
mod handlers;
mod logger;
mod models;
mod probes;

use axum::{routing::{any, Router}};
use std::net::SocketAddr;
use tokio::net::TcpListener;

const PORT: u16 = 8080;

// every route accepts any method, and unknown paths fall back to the
// hostname page the same way "/" does
pub fn app() -> Router {

    Router::new()
        .route("/", any(handlers::hostname))
        .route("/hostname", any(handlers::hostname))
        .route("/getuser", any(handlers::get_user))
        .route("/userfile", any(handlers::user_file))
        .route("/rootfile", any(handlers::root_file))
        .route("/procfile", any(handlers::proc_file))
        .fallback(handlers::hostname)

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();
    logger::init();

    tracing::info!("Starting web server on port {}...", PORT);

    let addr: SocketAddr = ([0, 0, 0, 0], PORT).into();

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind listener");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app()).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }

}

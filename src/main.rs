use gift_exchange::{app, integration, state::AppState};
use log::{error, info};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[tokio::main]
async fn main() {
    let cfg = integration::Config::default();

    let router = app(AppState::init())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(cfg.env.allow_origin())
                .allow_methods(cfg.env.allow_methods())
                .allow_headers(cfg.env.allow_headers()),
        );

    let addr = cfg.addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            return;
        }
    };

    info!("listening on {addr}");
    if let Err(e) = axum::serve(listener, router).await {
        error!("server error: {e}");
    }
}

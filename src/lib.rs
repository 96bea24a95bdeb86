use std::net::SocketAddr;

mod app;
mod assets;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod course;
pub mod i18n;
pub mod obfuscate;
pub mod setup;
pub mod state;
pub mod store;
mod templates;
pub mod types;
pub mod uploads;

pub use app::app;

pub async fn serve(addr: SocketAddr, config: config::AppConfig) {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app(config)).await.expect("server error");
}

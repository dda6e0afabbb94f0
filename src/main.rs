use dotenvy::dotenv;

use studyref::logging::init_tracing;
use studyref::router::init_router;
use studyref::state::init_app_state;
use studyref_config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();

    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server_config.port))
        .await
        .expect("Failed to bind listener");
    tracing::info!("server running on port {}", server_config.port);
    axum::serve(listener, app).await.expect("Server error");
}

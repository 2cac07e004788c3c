mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::server::handlers::{tolls, trips, waypoints};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trips/estimate", post(trips::estimate))
        .route("/trips/compare", post(trips::compare))
        .route("/tolls/estimate", post(tolls::estimate))
        .route("/waypoints/intervals", post(waypoints::intervals))
        .route("/waypoints/forecast", post(waypoints::forecast))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) {
    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    tracing::info!("listening on {}", addr);

    if let Err(err) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", err);
    }
}

async fn health() -> &'static str {
    "ok"
}

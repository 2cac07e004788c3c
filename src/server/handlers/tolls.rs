use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, TollAPI};
use crate::entities::{RouteGeometry, TollEstimate};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    geometry: RouteGeometry,
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<EstimateParams>,
) -> Result<Json<TollEstimate>, Error> {
    let estimate = api.estimate_tolls(params.geometry).await?;

    Ok(estimate.into())
}

#[test]
fn estimate_handler_reads_geojson_geometry() {
    use std::sync::Arc;

    use crate::{config::Config, engine::testing::StubProvider, engine::Engine};
    use tokio_test::block_on;

    let engine = Engine::with_provider(
        Config::default(),
        Box::new(StubProvider {
            route: None,
            toll_free: None,
            distance: 0.0,
        }),
    );
    let api = Arc::new(engine) as DynAPI;

    let params: EstimateParams = serde_json::from_str(
        r#"{"geometry": {"type": "LineString", "coordinates": [[-73.945, 40.86]]}}"#,
    )
    .unwrap();

    let Json(toll_estimate) = block_on(estimate(Extension(api), Json(params))).unwrap();

    assert_eq!(toll_estimate.total, 16.06);
    assert_eq!(toll_estimate.events[0].zone, "GWB");
}

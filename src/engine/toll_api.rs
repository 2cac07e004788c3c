use super::Engine;

use async_trait::async_trait;

use crate::{
    api::TollAPI,
    engine::tolls,
    entities::{RouteGeometry, TollEstimate},
    error::Error,
};

#[async_trait]
impl TollAPI for Engine {
    #[tracing::instrument(skip_all)]
    async fn estimate_tolls(&self, geometry: RouteGeometry) -> Result<TollEstimate, Error> {
        Ok(tolls::estimate_tolls(
            &geometry.line_string(),
            &self.config.toll_zones,
        ))
    }
}

#[test]
fn uses_configured_zone_table() {
    use crate::{
        config::Config,
        engine::testing::StubProvider,
        entities::{TollZone, TollZones},
    };
    use tokio_test::block_on;

    let config = Config {
        toll_zones: [("BRIDGE", TollZone::new(1.0, 2.0, 3.0, 4.0, 9.5))]
            .into_iter()
            .collect::<TollZones>(),
        ..Config::default()
    };
    let engine = Engine::with_provider(
        config,
        Box::new(StubProvider {
            route: None,
            toll_free: None,
            distance: 0.0,
        }),
    );

    let geometry = RouteGeometry {
        coordinates: vec![[-73.945, 40.86], [3.5, 1.5]],
    };
    let estimate = block_on(engine.estimate_tolls(geometry)).unwrap();

    assert_eq!(estimate.total, 9.5);
    assert_eq!(estimate.events.len(), 1);
    assert_eq!(estimate.events[0].zone, "BRIDGE");
}

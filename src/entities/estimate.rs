use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Route, TollEstimate};

pub const METERS_PER_MILE: f64 = 1609.34;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelEstimate {
    pub gallons: f64,
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripEstimate {
    pub token: Uuid,
    pub route: Route,
    pub distance_miles: f64,
    pub duration_mins: f64,
    pub fuel: FuelEstimate,
    pub tolls: TollEstimate,
    pub total_cost: f64,
}

impl TripEstimate {
    pub fn new(route: Route, fuel: FuelEstimate, tolls: TollEstimate) -> Self {
        let total_cost = ((fuel.cost + tolls.total) * 100.0).round() / 100.0;

        Self {
            token: Uuid::new_v4(),
            distance_miles: route.distance / METERS_PER_MILE,
            duration_mins: route.duration / 60.0,
            route,
            fuel,
            tolls,
            total_cost,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    pub primary: TripEstimate,
    pub toll_free: Option<TripEstimate>,
}

mod coordinates;
mod estimate;
mod route;
mod toll;

pub use coordinates::Coordinates;
pub use estimate::{FuelEstimate, RouteComparison, TripEstimate, METERS_PER_MILE};
pub use route::{Route, RouteGeometry};
pub use toll::{TollEstimate, TollEvent, TollZone, TollZones};

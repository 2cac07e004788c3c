mod interface;

pub use interface::{DynAPI, RouteAPI, TollAPI, WaypointAPI, API};

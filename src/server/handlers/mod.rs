pub mod tolls;
pub mod trips;
pub mod waypoints;

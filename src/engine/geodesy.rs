use crate::entities::Coordinates;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

pub fn haversine_distance(a: Coordinates, b: Coordinates) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_M * c
}

pub fn cumulative_distances(points: &[Coordinates]) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(points.len());
    let mut total = 0.0;

    if !points.is_empty() {
        cumulative.push(total);
    }

    for pair in points.windows(2) {
        total += haversine_distance(pair[0], pair[1]);
        cumulative.push(total);
    }

    cumulative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_apart() {
        let p = Coordinates::new(40.7128, -74.006);
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 0.0);

        let expected = EARTH_RADIUS_M * 1f64.to_radians();
        assert!((haversine_distance(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let nyc = Coordinates::new(40.7128, -74.006);
        let philly = Coordinates::new(39.9526, -75.1652);

        let d = haversine_distance(nyc, philly);
        assert!((d - haversine_distance(philly, nyc)).abs() < 1e-9);
        assert!(d > 125_000.0 && d < 135_000.0);
    }

    #[test]
    fn cumulative_is_aligned_with_points() {
        let points = vec![
            Coordinates::new(0.0, 0.0),
            Coordinates::new(0.0, 1.0),
            Coordinates::new(0.0, 2.0),
        ];

        let cumulative = cumulative_distances(&points);
        assert_eq!(cumulative.len(), 3);
        assert_eq!(cumulative[0], 0.0);
        assert!(cumulative[1] < cumulative[2]);

        assert!(cumulative_distances(&[]).is_empty());
    }
}

use std::collections::HashSet;

use geo_types::LineString;

use crate::entities::{TollEstimate, TollEvent, TollZones};

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// Zones entered by the same coordinate are charged in identifier order.
#[tracing::instrument(skip_all, fields(coordinates = geometry.0.len(), zones = zones.len()))]
pub fn estimate_tolls(geometry: &LineString<f64>, zones: &TollZones) -> TollEstimate {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut events = Vec::new();
    let mut total = 0.0;

    for coord in geometry.coords() {
        let (lat, lon) = (coord.y, coord.x);

        for (id, zone) in zones.iter() {
            if !zone.contains(lat, lon) || !visited.insert(id.as_str()) {
                continue;
            }

            tracing::debug!("entered toll zone {} at ({}, {})", id, lat, lon);

            total += zone.toll;
            events.push(TollEvent::new(
                id,
                round_to(lat, 5),
                round_to(lon, 5),
                zone.toll,
            ));
        }
    }

    TollEstimate {
        total: round_to(total, 2),
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TollZone;

    fn line(coordinates: Vec<[f64; 2]>) -> LineString<f64> {
        LineString::from(coordinates)
    }

    fn test_zones() -> TollZones {
        [
            ("A", TollZone::new(10.0, 11.0, 20.0, 21.0, 5.25)),
            ("B", TollZone::new(12.0, 13.0, 20.0, 21.0, 3.5)),
            ("C", TollZone::new(10.5, 12.5, 20.0, 21.0, 1.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn george_washington_bridge() {
        let zones: TollZones = [("GWB", TollZone::new(40.85, 40.87, -73.96, -73.93, 16.06))]
            .into_iter()
            .collect();

        let estimate = estimate_tolls(&line(vec![[-73.945, 40.86]]), &zones);

        assert_eq!(estimate.total, 16.06);
        assert_eq!(
            estimate.events,
            vec![TollEvent::new("GWB", 40.86, -73.945, 16.06)]
        );
    }

    #[test]
    fn empty_route_is_free() {
        let estimate = estimate_tolls(&line(vec![]), &TollZones::nyc());

        assert_eq!(estimate.total, 0.0);
        assert!(estimate.events.is_empty());
    }

    #[test]
    fn route_outside_every_zone_is_free() {
        let route = line(vec![[-118.24, 34.05], [-118.25, 34.06], [-118.3, 34.1]]);
        let estimate = estimate_tolls(&route, &TollZones::nyc());

        assert_eq!(estimate, TollEstimate::default());
    }

    #[test]
    fn zone_is_charged_once_however_many_points_fall_inside() {
        let route = line(vec![[20.1, 10.1], [20.2, 10.2], [20.3, 10.3], [20.4, 10.4]]);
        let zones: TollZones = [("A", TollZone::new(10.0, 11.0, 20.0, 21.0, 5.25))]
            .into_iter()
            .collect();

        let estimate = estimate_tolls(&route, &zones);

        assert_eq!(estimate.events.len(), 1);
        assert_eq!(estimate.events[0].lat, 10.1);
        assert_eq!(estimate.total, 5.25);
    }

    #[test]
    fn re_entering_a_zone_is_not_charged_again() {
        let zones: TollZones = [
            ("A", TollZone::new(10.0, 11.0, 20.0, 21.0, 5.25)),
            ("B", TollZone::new(12.0, 13.0, 20.0, 21.0, 3.5)),
        ]
        .into_iter()
        .collect();
        // A, gap, B, gap, A again
        let route = line(vec![
            [20.5, 10.5],
            [20.5, 11.5],
            [20.5, 12.5],
            [20.5, 11.5],
            [20.5, 10.5],
        ]);

        let estimate = estimate_tolls(&route, &zones);

        let order: Vec<&str> = estimate.events.iter().map(|e| e.zone.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(estimate.total, 8.75);
    }

    #[test]
    fn events_follow_route_order_not_identifier_order() {
        let zones: TollZones = [
            ("A", TollZone::new(10.0, 11.0, 20.0, 21.0, 5.25)),
            ("B", TollZone::new(12.0, 13.0, 20.0, 21.0, 3.5)),
        ]
        .into_iter()
        .collect();
        let route = line(vec![[20.5, 12.5], [20.5, 10.5]]);

        let estimate = estimate_tolls(&route, &zones);

        let order: Vec<&str> = estimate.events.iter().map(|e| e.zone.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn overlapping_zones_are_all_charged_in_identifier_order() {
        // 10.75 is inside both A and C
        let route = line(vec![[20.5, 10.75]]);

        let estimate = estimate_tolls(&route, &test_zones());

        let order: Vec<&str> = estimate.events.iter().map(|e| e.zone.as_str()).collect();
        assert_eq!(order, vec!["A", "C"]);
        assert_eq!(estimate.total, 6.25);
    }

    #[test]
    fn coordinate_on_the_boundary_is_charged() {
        let zones: TollZones = [("A", TollZone::new(10.0, 11.0, 20.0, 21.0, 5.25))]
            .into_iter()
            .collect();

        let estimate = estimate_tolls(&line(vec![[21.0, 10.0]]), &zones);

        assert_eq!(estimate.events.len(), 1);
        assert_eq!(estimate.total, 5.25);
    }

    #[test]
    fn event_coordinates_are_rounded() {
        let zones: TollZones = [("A", TollZone::new(10.0, 11.0, 20.0, 21.0, 5.25))]
            .into_iter()
            .collect();

        let estimate = estimate_tolls(&line(vec![[20.1234567, 10.7654321]]), &zones);

        assert_eq!(estimate.events[0].lat, 10.76543);
        assert_eq!(estimate.events[0].lon, 20.12346);
    }

    #[test]
    fn total_is_rounded_to_cents() {
        let zones: TollZones = [
            ("A", TollZone::new(10.0, 11.0, 20.0, 21.0, 0.1)),
            ("B", TollZone::new(10.0, 11.0, 20.0, 21.0, 0.2)),
        ]
        .into_iter()
        .collect();

        let estimate = estimate_tolls(&line(vec![[20.5, 10.5]]), &zones);

        assert_eq!(estimate.total, 0.3);
    }

    #[test]
    fn nyc_route_through_lincoln_tunnel() {
        // Midtown Manhattan out through the Lincoln Tunnel towards Weehawken
        let route = line(vec![[-73.985, 40.758], [-73.995, 40.765], [-74.02, 40.77]]);

        let estimate = estimate_tolls(&route, &TollZones::nyc());

        let order: Vec<&str> = estimate.events.iter().map(|e| e.zone.as_str()).collect();
        assert_eq!(order, vec!["LINCOLN_TUNNEL", "GSP"]);
        assert_eq!(estimate.events[0].name, "Lincoln Tunnel");
        assert_eq!(estimate.total, 18.06);
    }
}

use crate::{
    entities::FuelEstimate,
    error::{invalid_input_error, Error},
};

pub fn estimate_fuel(
    distance_miles: f64,
    miles_per_gallon: f64,
    price_per_gallon: f64,
) -> Result<FuelEstimate, Error> {
    if miles_per_gallon.is_nan() || miles_per_gallon <= 0.0 || distance_miles < 0.0 {
        return Err(invalid_input_error());
    }

    let gallons = distance_miles / miles_per_gallon;

    Ok(FuelEstimate {
        gallons,
        cost: gallons * price_per_gallon,
    })
}

#[test]
fn fuel_for_fifty_miles() {
    let fuel = estimate_fuel(50.0, 25.0, 2.972).unwrap();

    assert_eq!(fuel.gallons, 2.0);
    assert!((fuel.cost - 5.944).abs() < 1e-9);
}

#[test]
fn fuel_rejects_non_positive_efficiency() {
    assert_eq!(estimate_fuel(50.0, 0.0, 2.972), Err(invalid_input_error()));
    assert_eq!(estimate_fuel(50.0, -3.0, 2.972), Err(invalid_input_error()));
    assert_eq!(estimate_fuel(-1.0, 25.0, 2.972), Err(invalid_input_error()));
}

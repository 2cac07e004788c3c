use crate::{
    engine::geodesy::cumulative_distances,
    entities::Coordinates,
    error::{invalid_input_error, Error},
};

// Rounding in the running sum may leave a point this fraction of the path
// length short of a target it sits on.
const RELATIVE_TOLERANCE: f64 = 1e-9;

/// The origin is never a stop. A path of zero length has no interior stops
/// and yields nothing.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn sample_intervals(
    points: &[Coordinates],
    num_intervals: usize,
) -> Result<Vec<Coordinates>, Error> {
    if points.len() < 2 {
        tracing::warn!("cannot sample a path of {} points", points.len());
        return Err(invalid_input_error());
    }

    if num_intervals == 0 {
        return Ok(Vec::new());
    }

    let cumulative = cumulative_distances(points);
    let total = cumulative[cumulative.len() - 1];

    if total <= 0.0 {
        tracing::debug!("zero length path, no interior stops");
        return Ok(Vec::new());
    }

    let step = total / (num_intervals as f64 + 1.0);
    let tolerance = total * RELATIVE_TOLERANCE;
    let last = points.len() - 1;
    let mut samples = Vec::with_capacity(num_intervals.min(points.len()));
    let mut cursor = 1;

    for k in 1..=num_intervals {
        let target = step * k as f64;

        while cursor < last && cumulative[cursor] + tolerance < target {
            cursor += 1;
        }

        samples.push(points[cursor]);
    }

    Ok(samples)
}

pub fn sample_every(points: &[Coordinates], stride: usize) -> Result<Vec<Coordinates>, Error> {
    if stride == 0 {
        return Err(invalid_input_error());
    }

    Ok(points.iter().step_by(stride).copied().collect())
}

pub fn forecast_stride(len: usize, samples: usize) -> usize {
    match samples {
        0 => 1,
        _ => (len / samples).max(1),
    }
}

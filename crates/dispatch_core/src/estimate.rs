//! Arrival time estimation: distance over speed, rounded to whole seconds.

use crate::error::InvalidArgumentError;

const SECS_PER_HOUR: f64 = 3600.0;

/// Arrival time for a ride of `distance_miles` at `speed_mph` departing at
/// `departed_at` (simulation seconds): `departed_at + round(distance / speed * 3600)`.
///
/// Fails if distance or speed is not a positive finite number.
pub fn estimated_arrival(
    distance_miles: f64,
    speed_mph: f64,
    departed_at: u64,
) -> Result<u64, InvalidArgumentError> {
    if !distance_miles.is_finite() || distance_miles <= 0.0 {
        return Err(InvalidArgumentError::new(
            "distance must be a positive number",
        ));
    }
    if !speed_mph.is_finite() || speed_mph <= 0.0 {
        return Err(InvalidArgumentError::new("speed must be a positive number"));
    }
    let travel_secs = (distance_miles / speed_mph * SECS_PER_HOUR).round() as u64;
    Ok(departed_at + travel_secs)
}

//! Speed between two timestamped points

use log::trace;

use super::distance::get_distance;
use crate::coordinate::ToGeoPoint;
use crate::errors::{GeoError, GeoResult};
use crate::units::{round_to, SpeedUnit};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Average speed travelling from `start` to `end`
///
/// Both points must carry a timestamp in milliseconds. The distance is the
/// ellipsoidal [`get_distance`] rounded to the meter.
///
/// # Returns
/// Speed in `unit`, rounded to 4 decimals
pub fn get_speed<A, B>(start: &A, end: &B, unit: SpeedUnit) -> GeoResult<f64>
where
    A: ToGeoPoint + ?Sized,
    B: ToGeoPoint + ?Sized,
{
    let start_time = start.timestamp().ok_or(GeoError::MissingTimestamp)?;
    let end_time = end.timestamp().ok_or(GeoError::MissingTimestamp)?;

    if end_time <= start_time {
        return Err(GeoError::NonPositiveInterval { start: start_time, end: end_time });
    }

    let meters = get_distance(start, end, 1.0, 0)?;
    // converted first: the i64 difference can overflow
    let hours = (end_time as f64 - start_time as f64) / MILLIS_PER_HOUR;
    let kmh = meters / 1000.0 / hours;
    trace!("{} m in {} h is {} km/h", meters, hours, kmh);

    Ok(round_to(kmh * unit.factor(), 4))
}

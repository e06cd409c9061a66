//! Ranking points by distance from a reference point

use std::cmp::Ordering;

use log::trace;

use crate::coordinate::ToGeoPoint;
use crate::errors::GeoResult;
use crate::geodesy::get_distance;

/// A point's position in the input collection and its distance in meters
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceIndexElement {
    /// Index into the input collection, as a string
    pub key: String,
    pub distance: f64,
}

impl DistanceIndexElement {
    /// The key as a numeric index
    pub fn index(&self) -> usize {
        // keys are only ever produced from usize values
        self.key.parse().unwrap_or(usize::MAX)
    }
}

/// Order every point by ascending distance from `point`
///
/// Distances come from [`get_distance`] with accuracy 1. Equal distances
/// keep their input order.
pub fn order_by_distance<A, P>(point: &A, points: &[P]) -> GeoResult<Vec<DistanceIndexElement>>
where
    A: ToGeoPoint + ?Sized,
    P: ToGeoPoint,
{
    let origin = point.to_geo_point()?;

    let mut ranked = points
        .iter()
        .enumerate()
        .map(|(index, p)| Ok((index, get_distance(&origin, p, 1.0, 0)?)))
        .collect::<GeoResult<Vec<(usize, f64)>>>()?;

    ranked.sort_by(|a, b| match a.1.total_cmp(&b.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });

    trace!("Ordered {} points by distance from {}", ranked.len(), origin);

    Ok(ranked
        .into_iter()
        .map(|(index, distance)| DistanceIndexElement { key: index.to_string(), distance })
        .collect())
}

/// The element at rank `offset` in distance order, `None` past the end
pub fn find_nearest<A, P>(point: &A, points: &[P], offset: usize) -> GeoResult<Option<DistanceIndexElement>>
where
    A: ToGeoPoint + ?Sized,
    P: ToGeoPoint,
{
    Ok(order_by_distance(point, points)?.into_iter().nth(offset))
}

/// Up to `limit` elements in distance order, starting at rank `offset`
pub fn find_nearest_n<A, P>(
    point: &A,
    points: &[P],
    offset: usize,
    limit: usize,
) -> GeoResult<Vec<DistanceIndexElement>>
where
    A: ToGeoPoint + ?Sized,
    P: ToGeoPoint,
{
    Ok(order_by_distance(point, points)?.into_iter().skip(offset).take(limit).collect())
}

//! Accepted point shapes and their normalization
//!
//! Callers hand points over either as GeoJSON-ordered coordinate arrays
//! (`[longitude, latitude, elevation?]`) or as keyed records. A record is one
//! of six latitude/longitude key combinations, each optionally carrying an
//! elevation under one of four keys. Every shape is normalized into a
//! [`GeoPoint`] by a single match in [`normalize`].

use std::str::FromStr;

use log::trace;

use super::point::GeoPoint;
use super::sexagesimal::{is_sexagesimal, sexagesimal_to_decimal};
use crate::errors::{GeoError, GeoResult};

/// An angle as supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Angle {
    /// Decimal degrees
    Decimal(f64),
    /// Degrees/minutes/seconds text, e.g. `37° 46' 29.74" N`
    Sexagesimal(String),
}

impl Angle {
    /// Value in decimal degrees
    pub fn to_decimal(&self) -> GeoResult<f64> {
        match self {
            Angle::Decimal(value) => Ok(*value),
            Angle::Sexagesimal(text) => sexagesimal_to_decimal(text),
        }
    }

    /// Interpret text as a decimal number, falling back to sexagesimal
    pub fn parse(text: &str) -> Angle {
        let text = text.trim();
        match text.parse::<f64>() {
            Ok(value) => Angle::Decimal(value),
            Err(_) => Angle::Sexagesimal(text.to_string()),
        }
    }
}

impl From<f64> for Angle {
    fn from(value: f64) -> Self {
        Angle::Decimal(value)
    }
}

impl From<&str> for Angle {
    fn from(value: &str) -> Self {
        Angle::parse(value)
    }
}

/// Key a keyed record uses for latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatitudeKey {
    Lat,
    Latitude,
}

impl LatitudeKey {
    pub const ALL: [LatitudeKey; 2] = [LatitudeKey::Lat, LatitudeKey::Latitude];

    pub fn name(&self) -> &'static str {
        match self {
            LatitudeKey::Lat => "lat",
            LatitudeKey::Latitude => "latitude",
        }
    }
}

/// Key a keyed record uses for longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudeKey {
    Lng,
    Lon,
    Longitude,
}

impl LongitudeKey {
    pub const ALL: [LongitudeKey; 3] = [LongitudeKey::Lng, LongitudeKey::Lon, LongitudeKey::Longitude];

    pub fn name(&self) -> &'static str {
        match self {
            LongitudeKey::Lng => "lng",
            LongitudeKey::Lon => "lon",
            LongitudeKey::Longitude => "longitude",
        }
    }
}

/// Key a keyed record uses for elevation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationKey {
    Alt,
    Altitude,
    Elev,
    Elevation,
}

impl ElevationKey {
    pub const ALL: [ElevationKey; 4] = [
        ElevationKey::Alt,
        ElevationKey::Altitude,
        ElevationKey::Elev,
        ElevationKey::Elevation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ElevationKey::Alt => "alt",
            ElevationKey::Altitude => "altitude",
            ElevationKey::Elev => "elev",
            ElevationKey::Elevation => "elevation",
        }
    }
}

/// Key holding a millisecond timestamp in textual records
pub const TIME_KEY: &str = "time";

/// A keyed point record
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedPoint {
    pub lat_key: LatitudeKey,
    pub latitude: Angle,
    pub lng_key: LongitudeKey,
    pub longitude: Angle,
    pub elevation: Option<(ElevationKey, f64)>,
    /// Milliseconds since the Unix epoch
    pub time: Option<i64>,
}

impl KeyedPoint {
    pub fn new(
        lat_key: LatitudeKey,
        latitude: impl Into<Angle>,
        lng_key: LongitudeKey,
        longitude: impl Into<Angle>,
    ) -> Self {
        KeyedPoint {
            lat_key,
            latitude: latitude.into(),
            lng_key,
            longitude: longitude.into(),
            elevation: None,
            time: None,
        }
    }

    pub fn with_elevation(mut self, key: ElevationKey, elevation: f64) -> Self {
        self.elevation = Some((key, elevation));
        self
    }

    pub fn with_time(mut self, millis: i64) -> Self {
        self.time = Some(millis);
        self
    }
}

/// Every point shape the library accepts
#[derive(Debug, Clone, PartialEq)]
pub enum PointInput {
    /// GeoJSON order: `[longitude, latitude]` or `[longitude, latitude, elevation]`
    Coordinates(Vec<Angle>),
    /// Record using one of the six latitude/longitude key combinations
    Keyed(KeyedPoint),
}

impl PointInput {
    /// Coordinate pair in GeoJSON order
    pub fn coords(longitude: f64, latitude: f64) -> Self {
        PointInput::Coordinates(vec![Angle::Decimal(longitude), Angle::Decimal(latitude)])
    }

    /// Coordinate triple in GeoJSON order
    pub fn coords_3d(longitude: f64, latitude: f64, elevation: f64) -> Self {
        PointInput::Coordinates(vec![
            Angle::Decimal(longitude),
            Angle::Decimal(latitude),
            Angle::Decimal(elevation),
        ])
    }

    /// `{ lat, lng }` record
    pub fn lat_lng(latitude: impl Into<Angle>, longitude: impl Into<Angle>) -> Self {
        PointInput::Keyed(KeyedPoint::new(LatitudeKey::Lat, latitude, LongitudeKey::Lng, longitude))
    }

    /// Build a keyed record from raw `(key, value)` text fields
    ///
    /// Latitude, longitude and elevation keys are looked up in alias order;
    /// `time` is read when present and other keys are ignored.
    pub fn from_fields<'a, I>(fields: I) -> GeoResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let fields: Vec<(&str, &str)> = fields
            .into_iter()
            .map(|(k, v)| (k.trim(), v.trim()))
            .collect();
        let lookup = |name: &str| fields.iter().find(|(k, _)| *k == name).map(|(_, v)| *v);

        let (lat_key, lat) = LatitudeKey::ALL
            .iter()
            .find_map(|key| lookup(key.name()).map(|v| (*key, v)))
            .ok_or_else(|| GeoError::InvalidPoint("record has no latitude key".to_string()))?;

        let (lng_key, lng) = LongitudeKey::ALL
            .iter()
            .find_map(|key| lookup(key.name()).map(|v| (*key, v)))
            .ok_or_else(|| GeoError::InvalidPoint("record has no longitude key".to_string()))?;

        let mut point = KeyedPoint::new(lat_key, Angle::parse(lat), lng_key, Angle::parse(lng));

        if let Some((key, value)) = ElevationKey::ALL
            .iter()
            .find_map(|key| lookup(key.name()).map(|v| (*key, v)))
        {
            let elevation = value.parse::<f64>().map_err(|_| {
                GeoError::InvalidPoint(format!("invalid {} value '{}'", key.name(), value))
            })?;
            point = point.with_elevation(key, elevation);
        }

        if let Some(value) = lookup(TIME_KEY) {
            let time = value.parse::<i64>().map_err(|_| {
                GeoError::InvalidPoint(format!("invalid time value '{}'", value))
            })?;
            point = point.with_time(time);
        }

        Ok(PointInput::Keyed(point))
    }

    /// Latitude as supplied, without conversion
    fn raw_latitude(&self) -> GeoResult<&Angle> {
        match self {
            PointInput::Coordinates(values) => coordinate_slice(values).map(|v| &v[1]),
            PointInput::Keyed(point) => Ok(&point.latitude),
        }
    }

    /// Longitude as supplied, without conversion
    fn raw_longitude(&self) -> GeoResult<&Angle> {
        match self {
            PointInput::Coordinates(values) => coordinate_slice(values).map(|v| &v[0]),
            PointInput::Keyed(point) => Ok(&point.longitude),
        }
    }
}

impl From<KeyedPoint> for PointInput {
    fn from(point: KeyedPoint) -> Self {
        PointInput::Keyed(point)
    }
}

impl From<GeoPoint> for PointInput {
    fn from(point: GeoPoint) -> Self {
        match point.elevation {
            Some(elev) => PointInput::coords_3d(point.longitude, point.latitude, elev),
            None => PointInput::coords(point.longitude, point.latitude),
        }
    }
}

impl FromStr for PointInput {
    type Err = GeoError;

    /// Parse `"lng,lat[,elev]"` or `"key=value,key=value"` text
    fn from_str(s: &str) -> GeoResult<Self> {
        let s = s.trim();
        if s.contains('=') {
            let mut fields = Vec::new();
            for part in s.split(',') {
                let (key, value) = part.split_once('=').ok_or_else(|| {
                    GeoError::InvalidPoint(format!("expected key=value, got '{}'", part))
                })?;
                fields.push((key, value));
            }
            PointInput::from_fields(fields)
        } else {
            let values = s.split(',').map(Angle::parse).collect();
            Ok(PointInput::Coordinates(values))
        }
    }
}

/// Check a coordinate array has two or three entries
fn coordinate_slice(values: &[Angle]) -> GeoResult<&[Angle]> {
    match values.len() {
        2 | 3 => Ok(values),
        n => Err(shape_error(n)),
    }
}

fn shape_error(len: usize) -> GeoError {
    GeoError::InvalidPoint(format!(
        "expected [longitude, latitude, elevation?], got {} values", len
    ))
}

/// Normalize any accepted point shape into a `GeoPoint`
///
/// Fails with `InvalidPoint` when the shape is malformed or the resulting
/// latitude/longitude is out of range.
pub fn normalize(point: &PointInput) -> GeoResult<GeoPoint> {
    let normalized = match point {
        PointInput::Coordinates(values) => match values.as_slice() {
            [lng, lat] => GeoPoint::new(lat.to_decimal()?, lng.to_decimal()?)?,
            [lng, lat, elev] => {
                let elevation = match elev {
                    Angle::Decimal(value) => *value,
                    Angle::Sexagesimal(text) => {
                        return Err(GeoError::InvalidPoint(format!("invalid elevation '{}'", text)));
                    }
                };
                GeoPoint::new_3d(lat.to_decimal()?, lng.to_decimal()?, elevation)?
            }
            other => return Err(shape_error(other.len())),
        },
        PointInput::Keyed(keyed) => {
            GeoPoint::new(keyed.latitude.to_decimal()?, keyed.longitude.to_decimal()?)?
                .with_elevation(keyed.elevation.map(|(_, value)| value))
        }
    };

    trace!("Normalized {:?} to {}", point, normalized);
    Ok(normalized)
}

/// Anything that can be turned into a validated `GeoPoint`
pub trait ToGeoPoint {
    fn to_geo_point(&self) -> GeoResult<GeoPoint>;

    /// Milliseconds since the Unix epoch, when the shape carries one
    fn timestamp(&self) -> Option<i64> {
        None
    }
}

impl ToGeoPoint for GeoPoint {
    fn to_geo_point(&self) -> GeoResult<GeoPoint> {
        Ok(*self)
    }
}

impl ToGeoPoint for PointInput {
    fn to_geo_point(&self) -> GeoResult<GeoPoint> {
        normalize(self)
    }

    fn timestamp(&self) -> Option<i64> {
        match self {
            PointInput::Keyed(point) => point.time,
            PointInput::Coordinates(_) => None,
        }
    }
}

impl ToGeoPoint for KeyedPoint {
    fn to_geo_point(&self) -> GeoResult<GeoPoint> {
        GeoPoint::new(self.latitude.to_decimal()?, self.longitude.to_decimal()?)
            .map(|p| p.with_elevation(self.elevation.map(|(_, value)| value)))
    }

    fn timestamp(&self) -> Option<i64> {
        self.time
    }
}

/// GeoJSON-ordered `[longitude, latitude]`
impl ToGeoPoint for [f64; 2] {
    fn to_geo_point(&self) -> GeoResult<GeoPoint> {
        GeoPoint::new(self[1], self[0])
    }
}

/// GeoJSON-ordered `[longitude, latitude, elevation]`
impl ToGeoPoint for [f64; 3] {
    fn to_geo_point(&self) -> GeoResult<GeoPoint> {
        GeoPoint::new_3d(self[1], self[0], self[2])
    }
}

impl<T: ToGeoPoint + ?Sized> ToGeoPoint for &T {
    fn to_geo_point(&self) -> GeoResult<GeoPoint> {
        (**self).to_geo_point()
    }

    fn timestamp(&self) -> Option<i64> {
        (**self).timestamp()
    }
}

/// Normalize every member of a collection
pub fn normalize_all<P: ToGeoPoint>(points: &[P]) -> GeoResult<Vec<GeoPoint>> {
    points.iter().map(ToGeoPoint::to_geo_point).collect()
}

/// Latitude of a point
///
/// With `raw` set the value is returned as supplied (decimal or sexagesimal
/// text) and no range check is made. Otherwise it is converted to decimal.
pub fn get_lat(point: &PointInput, raw: bool) -> GeoResult<Angle> {
    if raw {
        return point.raw_latitude().cloned();
    }
    Ok(Angle::Decimal(normalize(point)?.latitude))
}

/// Longitude of a point, see [`get_lat`] for the meaning of `raw`
pub fn get_lon(point: &PointInput, raw: bool) -> GeoResult<Angle> {
    if raw {
        return point.raw_longitude().cloned();
    }
    Ok(Angle::Decimal(normalize(point)?.longitude))
}

/// Latitude of a point in decimal degrees
pub fn latitude<P: ToGeoPoint + ?Sized>(point: &P) -> GeoResult<f64> {
    Ok(point.to_geo_point()?.latitude)
}

/// Longitude of a point in decimal degrees
pub fn longitude<P: ToGeoPoint + ?Sized>(point: &P) -> GeoResult<f64> {
    Ok(point.to_geo_point()?.longitude)
}

/// Elevation of a point, `None` when it carries none
pub fn get_elev<P: ToGeoPoint + ?Sized>(point: &P) -> GeoResult<Option<f64>> {
    Ok(point.to_geo_point()?.elevation)
}

/// Alias of [`get_elev`]
pub fn elevation<P: ToGeoPoint + ?Sized>(point: &P) -> GeoResult<Option<f64>> {
    get_elev(point)
}

/// Input accepted by [`use_decimal`]
#[derive(Debug, Clone, PartialEq)]
pub enum DecimalInput {
    Number(f64),
    Text(String),
    Point(PointInput),
    Points(Vec<PointInput>),
}

/// Output of [`use_decimal`]
#[derive(Debug, Clone, PartialEq)]
pub enum DecimalValue {
    Number(f64),
    Point(GeoPoint),
    Points(Vec<GeoPoint>),
}

impl DecimalValue {
    /// The plain number, if this is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DecimalValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Bring any supported value into decimal form
///
/// Numbers pass through, text is parsed as a decimal or decoded as
/// sexagesimal, points and collections are normalized.
pub fn use_decimal(value: &DecimalInput) -> GeoResult<DecimalValue> {
    match value {
        DecimalInput::Number(number) => Ok(DecimalValue::Number(*number)),
        DecimalInput::Text(text) => {
            let text = text.trim();
            if let Ok(number) = text.parse::<f64>() {
                Ok(DecimalValue::Number(number))
            } else if is_sexagesimal(text) {
                Ok(DecimalValue::Number(sexagesimal_to_decimal(text)?))
            } else {
                Err(GeoError::InvalidSexagesimal(text.to_string()))
            }
        }
        DecimalInput::Point(point) => Ok(DecimalValue::Point(normalize(point)?)),
        DecimalInput::Points(points) => Ok(DecimalValue::Points(normalize_all(points)?)),
    }
}

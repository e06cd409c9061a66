//! Library facade applying configured defaults

use log::debug;

use crate::config::GeoKitConfig;
use crate::coordinate::{GeoPoint, PointInput, ToGeoPoint};
use crate::errors::GeoResult;
use crate::geodesy::{compute_destination_point, get_distance, get_distance_simple, get_path_length, get_speed};
use crate::nearest::{find_nearest_n, DistanceIndexElement};
use crate::registry::{OperationOutput, OperationRegistry};
use crate::units::{round_to, DEFAULT_ROUND};

/// Main interface to the GeoKit library
///
/// Wraps the free functions with the defaults from a [`GeoKitConfig`] and
/// dispatches named operations through an [`OperationRegistry`].
pub struct GeoKit {
    config: GeoKitConfig,
    registry: OperationRegistry,
}

impl Default for GeoKit {
    fn default() -> Self {
        GeoKit::new(GeoKitConfig::default())
    }
}

impl GeoKit {
    /// Create a new GeoKit instance with the built-in operations
    pub fn new(config: GeoKitConfig) -> Self {
        GeoKit::with_registry(config, OperationRegistry::with_defaults())
    }

    /// Create a new GeoKit instance with a caller-built registry
    pub fn with_registry(config: GeoKitConfig, registry: OperationRegistry) -> Self {
        GeoKit { config, registry }
    }

    /// Create a GeoKit instance from a TOML configuration file
    ///
    /// # Arguments
    /// * `config_path` - Path to the file, defaults are used when `None`
    pub fn from_config_file(config_path: Option<&str>) -> GeoResult<Self> {
        let config = match config_path {
            Some(path) => {
                debug!("Reading configuration from {}", path);
                GeoKitConfig::from_file(path)?
            }
            None => GeoKitConfig::default(),
        };
        Ok(GeoKit::new(config))
    }

    pub fn config(&self) -> &GeoKitConfig {
        &self.config
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Distance between two points in the configured unit
    ///
    /// # Returns
    /// The ellipsoidal distance, rounded with the configured accuracy and
    /// precision, then converted
    pub fn distance<A, B>(&self, start: &A, end: &B) -> GeoResult<f64>
    where
        A: ToGeoPoint + ?Sized,
        B: ToGeoPoint + ?Sized,
    {
        let meters = get_distance(start, end, self.config.accuracy, self.config.precision)?;
        Ok(self.in_configured_unit(meters))
    }

    /// Spherical distance in the configured unit, see [`get_distance_simple`]
    pub fn distance_simple<A, B>(&self, start: &A, end: &B) -> GeoResult<f64>
    where
        A: ToGeoPoint + ?Sized,
        B: ToGeoPoint + ?Sized,
    {
        let meters = get_distance_simple(start, end, self.config.accuracy)?;
        Ok(self.in_configured_unit(meters))
    }

    /// Length of a path in the configured unit
    pub fn path_length<P: ToGeoPoint>(&self, points: &[P]) -> GeoResult<f64> {
        let meters = get_path_length(points)?;
        Ok(self.in_configured_unit(meters))
    }

    /// Destination point on a sphere of the configured radius
    ///
    /// # Arguments
    /// * `start` - Starting point
    /// * `distance` - Distance in meters
    /// * `bearing` - Bearing in degrees
    pub fn destination<P: ToGeoPoint + ?Sized>(&self, start: &P, distance: f64, bearing: f64) -> GeoResult<GeoPoint> {
        compute_destination_point(start, distance, bearing, Some(self.config.radius))
    }

    /// Speed between two timestamped points in the configured unit
    pub fn speed<A, B>(&self, start: &A, end: &B) -> GeoResult<f64>
    where
        A: ToGeoPoint + ?Sized,
        B: ToGeoPoint + ?Sized,
    {
        get_speed(start, end, self.config.speed_unit)
    }

    /// The `limit` nearest points starting at rank `offset`
    pub fn nearest<A, P>(&self, point: &A, points: &[P], offset: usize, limit: usize) -> GeoResult<Vec<DistanceIndexElement>>
    where
        A: ToGeoPoint + ?Sized,
        P: ToGeoPoint,
    {
        find_nearest_n(point, points, offset, limit)
    }

    /// Run a registered operation by name
    pub fn run(&self, name: &str, args: &[PointInput]) -> GeoResult<OperationOutput> {
        debug!("Running operation '{}' on {} points", name, args.len());
        self.registry.invoke(name, args)
    }

    fn in_configured_unit(&self, meters: f64) -> f64 {
        round_to(meters * self.config.unit.factor(), DEFAULT_ROUND.max(self.config.precision))
    }
}

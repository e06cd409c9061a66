//! Named operations callable at runtime
//!
//! The registry maps operation names to typed function pointers so callers
//! (the CLI `measure` subcommand, the facade's `run`) can dispatch by name.
//! It is filled before use and only read afterwards; extra operations go in
//! through [`OperationRegistry::register`].

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::coordinate::{latitude, longitude, PointInput};
use crate::errors::{GeoError, GeoResult};
use crate::geodesy::{get_bearing, get_distance, get_distance_simple, get_path_length, get_rhumb_line_bearing, get_speed};
use crate::predicates::is_point_inside;
use crate::units::SpeedUnit;

/// Measure between two points
pub type PairMeasureFn = fn(&PointInput, &PointInput) -> GeoResult<f64>;
/// Measure over an ordered sequence of points
pub type PathMeasureFn = fn(&[PointInput]) -> GeoResult<f64>;
/// Value read from a single point
pub type PointQueryFn = fn(&PointInput) -> GeoResult<f64>;
/// Test of a point against a shape given as points
pub type ContainmentFn = fn(&PointInput, &[PointInput]) -> GeoResult<bool>;

/// A registered operation
#[derive(Clone, Copy)]
pub enum Operation {
    PairMeasure(PairMeasureFn),
    PathMeasure(PathMeasureFn),
    PointQuery(PointQueryFn),
    Containment(ContainmentFn),
}

/// Result of invoking an operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationOutput {
    Number(f64),
    Flag(bool),
}

impl fmt::Display for OperationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationOutput::Number(value) => write!(f, "{}", value),
            OperationOutput::Flag(value) => write!(f, "{}", value),
        }
    }
}

impl Operation {
    /// Short description of the arguments the operation takes
    pub fn arity(&self) -> &'static str {
        match self {
            Operation::PairMeasure(_) => "2 points",
            Operation::PathMeasure(_) => "any number of points",
            Operation::PointQuery(_) => "1 point",
            Operation::Containment(_) => "1 point followed by at least 3 polygon vertices",
        }
    }

    /// Invoke the operation on positional point arguments
    pub fn invoke(&self, args: &[PointInput]) -> GeoResult<OperationOutput> {
        match (self, args) {
            (Operation::PairMeasure(f), [a, b]) => f(a, b).map(OperationOutput::Number),
            (Operation::PathMeasure(f), points) => f(points).map(OperationOutput::Number),
            (Operation::PointQuery(f), [point]) => f(point).map(OperationOutput::Number),
            (Operation::Containment(f), [point, shape @ ..]) => f(point, shape).map(OperationOutput::Flag),
            (op, _) => Err(GeoError::InvalidArguments(format!(
                "expected {}, got {}",
                op.arity(),
                args.len()
            ))),
        }
    }
}

/// Name to operation lookup
#[derive(Clone, Default)]
pub struct OperationRegistry {
    operations: BTreeMap<String, Operation>,
}

impl OperationRegistry {
    /// An empty registry
    pub fn new() -> Self {
        OperationRegistry::default()
    }

    /// A registry holding the built-in operations
    pub fn with_defaults() -> Self {
        let mut registry = OperationRegistry::new();

        registry.register("distance", Operation::PairMeasure(|a, b| get_distance(a, b, 1.0, 0)), false);
        registry.register("distance-simple", Operation::PairMeasure(|a, b| get_distance_simple(a, b, 1.0)), false);
        registry.register("bearing", Operation::PairMeasure(|a, b| get_bearing(a, b)), false);
        registry.register("rhumb-line-bearing", Operation::PairMeasure(|a, b| get_rhumb_line_bearing(a, b)), false);
        registry.register("speed", Operation::PairMeasure(|a, b| get_speed(a, b, SpeedUnit::default())), false);
        registry.register("path-length", Operation::PathMeasure(|points| get_path_length(points)), false);
        registry.register("latitude", Operation::PointQuery(|p| latitude(p)), false);
        registry.register("longitude", Operation::PointQuery(|p| longitude(p)), false);
        registry.register("inside", Operation::Containment(|p, polygon| is_point_inside(p, polygon)), false);

        registry
    }

    /// Add an operation under `name`
    ///
    /// An existing entry is only replaced when `overwrite` is set.
    ///
    /// # Returns
    /// Whether the operation was stored
    pub fn register(&mut self, name: &str, operation: Operation, overwrite: bool) -> bool {
        if !overwrite && self.operations.contains_key(name) {
            debug!("Operation '{}' already registered, keeping existing", name);
            return false;
        }
        self.operations.insert(name.to_string(), operation);
        true
    }

    /// Look up an operation by name
    pub fn get(&self, name: &str) -> GeoResult<Operation> {
        self.operations
            .get(name)
            .copied()
            .ok_or_else(|| GeoError::UnknownOperation(name.to_string()))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    /// Look up `name` and invoke it on `args`
    pub fn invoke(&self, name: &str, args: &[PointInput]) -> GeoResult<OperationOutput> {
        self.get(name)?.invoke(args)
    }
}

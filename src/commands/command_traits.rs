//! Command pattern interfaces
//!
//! Each CLI subcommand is a `Command` built by a `CommandFactory` from the
//! parsed arguments. Commands borrow the `GeoKit` facade for their defaults.

use clap::ArgMatches;

use crate::api::GeoKit;
use crate::errors::GeoResult;

/// Represents an executable command in the application
pub trait Command {
    /// Compute the text the command prints
    fn output(&self) -> GeoResult<String>;

    /// Execute the command, printing its output to stdout
    fn execute(&self) -> GeoResult<()> {
        println!("{}", self.output()?);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - Top-level argument matches from clap
    /// * `geokit` - Facade holding the configured defaults
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &ArgMatches, geokit: &'a GeoKit) -> GeoResult<Box<dyn Command + 'a>>;
}

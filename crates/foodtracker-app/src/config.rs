//! Command line options and the runtime configuration derived from them.

use std::path::PathBuf;

use clap::Parser;
use foodtracker_core::RatingPolicy;
use foodtracker_store::paths::{self, PathError};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodtracker", version, about)]
pub struct Cli {
    /// Snapshot file to load and save meals from.
    ///
    /// Defaults to `foodtracker/meals.cbor` in the platform data directory.
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Clamp out-of-range ratings in the snapshot instead of rejecting it.
    #[arg(long)]
    pub clamp_ratings: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    #[display("no --data-file given and {_0}")]
    DataFile(PathError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub rating_policy: RatingPolicy,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let data_file = match cli.data_file {
            Some(path) => path,
            None => paths::default_data_file()?,
        };
        let rating_policy = if cli.clamp_ratings {
            RatingPolicy::Clamp
        } else {
            RatingPolicy::Reject
        };
        Ok(Self {
            data_file,
            rating_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn explicit_data_file_is_used() {
        let cli = Cli::try_parse_from(["foodtracker", "--data-file", "/tmp/meals.cbor"]).unwrap();
        let config = AppConfig::from_cli(cli).unwrap();
        assert_eq!(config.data_file, Path::new("/tmp/meals.cbor"));
        assert_eq!(config.rating_policy, RatingPolicy::Reject);
    }

    #[test]
    fn clamp_flag_selects_clamp_policy() {
        let cli = Cli::try_parse_from([
            "foodtracker",
            "--clamp-ratings",
            "--data-file",
            "meals.cbor",
        ])
        .unwrap();
        assert!(cli.clamp_ratings);
        let config = AppConfig::from_cli(cli).unwrap();
        assert_eq!(config.rating_policy, RatingPolicy::Clamp);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["foodtracker", "--bogus"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory as _;
        Cli::command().debug_assert();
    }
}

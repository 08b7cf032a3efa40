mod args;
mod constants;
mod env;
mod file;
mod load;
mod paths;
mod types;
mod util;

pub use args::CliArgs;
pub(crate) use args::USAGE;
pub use types::{CheckerConfig, ReportFormat};

#[cfg(test)]
pub(super) use util::{parse_bool, parse_sections};

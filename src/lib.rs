mod config;
mod domain;
mod error;
mod generator;
mod output;
mod summary;
mod telemetry;
mod verify;

pub use config::{
    DEFAULT_EMAIL_DOMAIN, DEFAULT_EMAIL_PREFIX, DEFAULT_OUTPUT_PATH, DEFAULT_PASSWORD,
    DEFAULT_USER_COUNT, FixtureConfig,
};
pub use error::Error;
pub use output::{HEADER, WriteStats, write_fixture};
pub use summary::Summary;
pub use telemetry::setup_logging;

/// Generates the checkout credentials fixture described by `config` and verifies it on disk.
///
/// This is the main entry point of the crate. It
///
/// 1. creates every missing ancestor directory of the output path,
/// 2. creates (or truncates) the output file and writes the `email,password` header followed by
///    one `<prefix><i>@<domain>,<password>` row per user, `i` running from 1 upwards,
/// 3. closes the file and reads it back to count its lines.
///
/// The returned [`Summary`] is built from the read-back. Its [`Display`](std::fmt::Display)
/// output is the report the binary prints.
///
/// # Errors
///
/// Every failure is an I/O failure of some kind (see [`Error`]) and is returned as is, nothing is
/// retried. If an error is returned the file content is undefined.
///
/// # Example
///
/// ```no_run
/// use checkout_users_csv::{FixtureConfig, generate};
///
/// let summary = generate(&FixtureConfig::default()).unwrap();
/// println!("{summary}");
/// ```
pub fn generate(config: &FixtureConfig) -> Result<Summary, Error> {
    generator::run(config)
}

//! Module serializing the generated credentials into the CSV format read by the load-testing tool.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::config::FixtureConfig;
use crate::domain::{Credential, UserIndex};
use crate::error::Error;


/// Column names, in the order the rows are written
pub const HEADER: [&str; 2] = ["email", "password"];

/// One row of the fixture as it appears in the CSV
#[derive(Serialize, Debug, PartialEq, Eq)]
struct CredentialRecord<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credential> for CredentialRecord<'a> {
    fn from(credential: &'a Credential) -> Self {
        Self {
            email: credential.email(),
            password: credential.password(),
        }
    }
}

/// What [`write_fixture`] put into the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteStats {
    /// Data rows, the header not included
    pub records: usize,
    pub first_email: Option<String>,
    pub last_email: Option<String>,
}

/// Writes the header followed by one credential row per configured user into `writer`.
///
/// Rows are written in ascending user order, each terminated by `\r\n`. The writer is flushed before
/// returning, so a file sink is complete on disk once this returns `Ok`.
pub fn write_fixture(writer: impl Write, config: &FixtureConfig) -> Result<WriteStats, Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)?;

    let mut stats = WriteStats {
        records: 0,
        first_email: None,
        last_email: None,
    };
    for index in UserIndex::range(config.user_count()) {
        let credential = Credential::for_user(index, config.email(), config.password());
        wtr.serialize(CredentialRecord::from(&credential))?;

        stats.records += 1;
        if stats.first_email.is_none() {
            stats.first_email = Some(credential.email().to_string());
        }
        stats.last_email = Some(credential.email().to_string());
    }
    wtr.flush().map_err(csv::Error::from)?;

    debug!(records = stats.records, "credential rows written");
    Ok(stats)
}

//! Module orchestrating a fixture run: directory setup, writing, read-back verification

use std::fs::{self, File};
use std::path::Path;

use tracing::{debug, info};

use crate::config::FixtureConfig;
use crate::error::{Error, create_dir_error, create_file_error};
use crate::output::{WriteStats, write_fixture};
use crate::summary::Summary;
use crate::verify::verify_line_count;


pub(crate) fn run(config: &FixtureConfig) -> Result<Summary, Error> {
    let path = config.output_path();
    info!(
        path = %path.display(),
        users = config.user_count(),
        "generating credential fixture"
    );

    ensure_parent_dir(path)?;
    let stats = write_file(path, config)?;

    let line_count = verify_line_count(path, stats.records + 1)?;

    info!(path = %path.display(), line_count, "fixture generated");
    Ok(Summary {
        path: path.to_path_buf(),
        line_count,
        first_email: stats.first_email,
        last_email: stats.last_email,
        password: config.password().to_string(),
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), Error> {
    // a bare file name has an empty parent, i.e. the working directory
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|e| create_dir_error(parent, e))?;
    debug!(dir = %parent.display(), "output directory ready");
    Ok(())
}

// The file handle is owned by the CSV writer and closed when `write_fixture` returns,
// on success and on error alike.
fn write_file(path: &Path, config: &FixtureConfig) -> Result<WriteStats, Error> {
    let file = File::create(path).map_err(|e| create_file_error(path, e))?;
    write_fixture(file, config)
}

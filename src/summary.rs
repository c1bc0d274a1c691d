//! Module defining the report printed once a fixture has been written and verified

use std::fmt;
use std::path::PathBuf;

/// Outcome of a successful [`crate::generate`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    /// Lines counted when reading the file back, header included
    pub line_count: usize,
    pub first_email: Option<String>,
    pub last_email: Option<String>,
    pub password: String,
}

impl Summary {
    /// Number of credential rows, derived from the read-back line count
    pub fn user_count(&self) -> usize {
        self.line_count.saturating_sub(1)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {}", self.path.display())?;
        writeln!(
            f,
            "  Total lines: {} (1 header + {} users)",
            self.line_count,
            self.user_count()
        )?;
        match (&self.first_email, &self.last_email) {
            (Some(first), Some(last)) => writeln!(f, "  Users: {first} to {last}")?,
            _ => writeln!(f, "  Users: none")?,
        }
        write!(f, "  Password (all): {}", self.password)
    }
}

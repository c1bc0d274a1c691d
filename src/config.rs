//! Module defining the parameters of a fixture run

use std::path::{Path, PathBuf};

use crate::domain::EmailTemplate;

/// Where the checkout stress test scenario expects its user data
pub const DEFAULT_OUTPUT_PATH: &str =
    "performance-testing/scenarios/checkout-flow/test-data/checkout-users.csv";
pub const DEFAULT_USER_COUNT: u32 = 1000;
pub const DEFAULT_PASSWORD: &str = "password123";
pub const DEFAULT_EMAIL_PREFIX: &str = "testuser";
pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// Parameters of a single fixture run.
///
/// [`FixtureConfig::default`] holds the values the binary ships with. The `with_*` methods
/// exist so that tests and library users can point the generator somewhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    output_path: PathBuf,
    user_count: u32,
    password: String,
    email: EmailTemplate,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_count: DEFAULT_USER_COUNT,
            password: DEFAULT_PASSWORD.to_string(),
            email: EmailTemplate::new(DEFAULT_EMAIL_PREFIX, DEFAULT_EMAIL_DOMAIN),
        }
    }
}

impl FixtureConfig {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_user_count(mut self, user_count: u32) -> Self {
        self.user_count = user_count;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_email(mut self, prefix: impl Into<String>, domain: impl Into<String>) -> Self {
        self.email = EmailTemplate::new(prefix, domain);
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn user_count(&self) -> u32 {
        self.user_count
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub(crate) fn email(&self) -> &EmailTemplate {
        &self.email
    }
}

//! Module defining a single generated login of the fixture

use crate::domain::{EmailTemplate, UserIndex};

/// Email/password pair of one synthetic user
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Credential {
    email: String,
    password: String,
}

impl Credential {
    pub(crate) fn for_user(index: UserIndex, template: &EmailTemplate, password: &str) -> Self {
        Self {
            email: template.email_for(index),
            password: password.to_string(),
        }
    }

    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

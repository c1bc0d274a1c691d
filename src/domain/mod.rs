//! Module for the types defining the synthetic credential domain.

mod credential;

pub(crate) use credential::Credential;


/// 1-based position of a synthetic user within the fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct UserIndex(u32);

impl UserIndex {
    #[cfg(test)]
    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    /// Indices `1..=count` in ascending order
    pub(crate) fn range(count: u32) -> impl Iterator<Item = UserIndex> {
        (1..=count).map(UserIndex)
    }
}

impl From<UserIndex> for u32 {
    fn from(value: UserIndex) -> Self {
        value.0
    }
}

/// Builds the email addresses of the synthetic users: `<prefix><index>@<domain>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmailTemplate {
    prefix: String,
    domain: String,
}

impl EmailTemplate {
    pub(crate) fn new(prefix: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            domain: domain.into(),
        }
    }

    pub(crate) fn email_for(&self, index: UserIndex) -> String {
        format!("{}{}@{}", self.prefix, index.0, self.domain)
    }
}

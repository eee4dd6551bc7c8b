use thiserror::Error;

use crate::model::ids::UserId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserCodeError {
    #[error("Please enter your user code.")]
    Empty,
}

/// The login code handed out at signup. It is the only credential a user has.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserCode(String);

impl UserCode {
    /// Parse user input. Surrounding whitespace is dropped.
    ///
    /// # Errors
    ///
    /// Returns `UserCodeError::Empty` for blank input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, UserCodeError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserCodeError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user as returned by login/signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    code: UserCode,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, code: UserCode) -> Self {
        Self { id, code }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn code(&self) -> &UserCode {
        &self.code
    }
}

/// Client-held identity. Having one means "logged in"; it never expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    user_id: UserId,
    user_code: UserCode,
}

impl AuthSession {
    #[must_use]
    pub fn new(user_id: UserId, user_code: UserCode) -> Self {
        Self { user_id, user_code }
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn user_code(&self) -> &UserCode {
        &self.user_code
    }
}

impl From<User> for AuthSession {
    fn from(user: User) -> Self {
        Self::new(user.id, user.code)
    }
}

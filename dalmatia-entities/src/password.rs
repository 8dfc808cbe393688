use std::{fmt, str::FromStr};

use thiserror::Error;

/// A bcrypt hashed password.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Password(String);

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password must have at least {} characters", Password::min_len())]
    TooShort,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    pub fn verify(&self, password: &str) -> bool {
        pwhash::bcrypt::verify(password, &self.0)
    }
}

/// Wraps an already hashed password, e.g. when loading from storage.
impl From<String> for Password {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hashes a plain text password.
impl FromStr for Password {
    type Err = ParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        if password.chars().count() < Password::min_len() {
            return Err(ParseError::TooShort);
        }
        let res = Self(pwhash::bcrypt::hash(password)?);
        debug_assert!(res.verify(password));
        Ok(res)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hash_and_verify_password() {
        let input = "p^$$w%&7*{}";
        let password = input.parse::<Password>().unwrap();
        assert_ne!(password.as_ref(), input);
        assert!(password.verify(input));
        assert!(!password.verify("p^$$w%&7*{"));
    }

    #[test]
    fn should_fail_to_parse_short_passwords() {
        assert!("a".parse::<Password>().is_err());
        assert!("abcde".parse::<Password>().is_err());
        assert!("čćžšđ".parse::<Password>().is_err());
        assert!("abcdef".parse::<Password>().is_ok());
    }
}

//! Credentials for the SMC REST API

use serde::{Deserialize, Serialize};
use std::fmt;

/// User name and password sent as HTTP Basic credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub password: String,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    /// Returns a description of the first missing field, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("user name")
        } else if self.password.is_empty() {
            Some("password")
        } else {
            None
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}

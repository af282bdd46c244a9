//! Registration and login use cases

use crate::domain::{Session, User};
use crate::error::{DaybookError, Result};
use crate::infrastructure::CredentialStore;
use tracing::info;

/// Service for creating accounts and opening sessions
pub struct AuthService<'a, S: CredentialStore> {
    store: &'a S,
}

impl<'a, S: CredentialStore> AuthService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        AuthService { store }
    }

    /// Register a new user after checking the confirmation password
    pub fn register(&self, username: &str, password: &str, confirm: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DaybookError::InvalidInput(
                "Username cannot be empty".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(DaybookError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }
        if password != confirm {
            return Err(DaybookError::PasswordMismatch);
        }

        self.store.register(username, password)
    }

    /// Verify credentials and open a session with the given page size
    pub fn login(&self, username: &str, password: &str, page_size: usize) -> Result<Session> {
        let user = self.store.authenticate(username.trim(), password)?;
        info!(username = %user.username, "Session opened");
        Ok(Session::new(user, page_size))
    }
}

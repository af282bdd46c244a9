//! Registered users

/// A registered user. `password_hash` is an Argon2 PHC string, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

impl User {
    pub fn new(username: String, password_hash: String) -> Self {
        User {
            username,
            password_hash,
        }
    }
}

//! Per-login context passed into every entry operation

use crate::domain::{PageCursor, User};

/// An authenticated user together with their paging position
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
    pub cursor: PageCursor,
}

impl Session {
    pub fn new(user: User, page_size: usize) -> Self {
        Session {
            user,
            cursor: PageCursor::new(page_size),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Username that owns everything this session touches
    pub fn owner(&self) -> &str {
        &self.user.username
    }
}

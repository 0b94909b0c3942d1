use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    UserAccount, UserId, UserProfile, UserRole, UserStats,
};

/// Fresh account whose stored hash matches `FakePasswordHasher` for "SecurePass123".
pub fn account(username: &str) -> UserAccount {
    let now = Utc::now();
    UserAccount {
        id: UserId::from(Uuid::new_v4()),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "hashed::SecurePass123".to_string(),
        avatar: None,
        role: UserRole::User,
        stats: UserStats::default(),
        created_at: now,
        updated_at: now,
    }
}

pub fn profile(username: &str) -> UserProfile {
    account(username).profile()
}

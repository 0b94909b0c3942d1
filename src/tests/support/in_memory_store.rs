use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserAccount, UserId, UserRole, UserStats};
use crate::auth::application::ports::outgoing::{
    NewUser, ProfileChanges, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::leaderboard::application::domain::entities::LeaderboardCandidate;
use crate::leaderboard::application::ports::outgoing::{LeaderboardQuery, LeaderboardQueryError};
use crate::recycling::application::domain::entities::StatsDelta;
use crate::recycling::application::ports::outgoing::{
    UserStatsRepository, UserStatsRepositoryError,
};

/// Shared account table backing every storage port in tests. Clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<UserId, UserAccount>>>,
}

impl InMemoryUserStore {
    pub fn seed(&self, account: UserAccount) {
        self.users.lock().unwrap().insert(account.id, account);
    }

    pub fn snapshot(&self, user_id: UserId) -> Option<UserAccount> {
        self.users.lock().unwrap().get(&user_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn find_where<P>(&self, predicate: P) -> Option<UserAccount>
    where
        P: Fn(&UserAccount) -> bool,
    {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| predicate(u))
            .cloned()
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserAccount>, UserQueryError> {
        Ok(self.snapshot(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, UserQueryError> {
        Ok(self.find_where(|u| u.email == email))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAccount>, UserQueryError> {
        Ok(self.find_where(|u| u.username == username))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, user: NewUser) -> Result<UserAccount, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let account = UserAccount {
            id: UserId::from(Uuid::new_v4()),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            avatar: None,
            role: UserRole::User,
            stats: UserStats::default(),
            created_at: now,
            updated_at: now,
        };
        users.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<UserAccount, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();

        let clash = users.values().any(|u| {
            u.id != user_id
                && (changes.username.as_deref() == Some(u.username.as_str())
                    || changes.email.as_deref() == Some(u.email.as_str()))
        });
        if clash {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let account = users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        if let Some(username) = changes.username {
            account.username = username;
        }
        if let Some(email) = changes.email {
            account.email = email;
        }
        if let Some(hash) = changes.password_hash {
            account.password_hash = hash;
        }
        if let Some(avatar) = changes.avatar {
            account.avatar = Some(avatar);
        }
        account.updated_at = Utc::now();

        Ok(account.clone())
    }
}

#[async_trait]
impl UserStatsRepository for InMemoryUserStore {
    async fn find_stats(&self, user_id: UserId) -> Result<UserStats, UserStatsRepositoryError> {
        self.snapshot(user_id)
            .map(|u| u.stats)
            .ok_or(UserStatsRepositoryError::UserNotFound)
    }

    async fn increment_stats(
        &self,
        user_id: UserId,
        delta: StatsDelta,
    ) -> Result<UserAccount, UserStatsRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let account = users
            .get_mut(&user_id)
            .ok_or(UserStatsRepositoryError::UserNotFound)?;

        account.stats.total_items_recycled += delta.items;
        account.stats.co2_saved += delta.co2_saved;
        account.stats.points += delta.points;
        account.updated_at = Utc::now();

        Ok(account.clone())
    }
}

#[async_trait]
impl LeaderboardQuery for InMemoryUserStore {
    async fn top_users(
        &self,
        limit: u64,
    ) -> Result<Vec<LeaderboardCandidate>, LeaderboardQueryError> {
        let mut candidates: Vec<_> = self
            .users
            .lock()
            .unwrap()
            .values()
            .map(|u| LeaderboardCandidate {
                id: u.id,
                username: u.username.clone(),
                stats: u.stats,
                created_at: u.created_at,
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.stats
                .points
                .cmp(&a.stats.points)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.value().cmp(&b.id.value()))
        });
        candidates.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(candidates)
    }
}

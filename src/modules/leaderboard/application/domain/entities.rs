use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{UserId, UserStats};

/// Bounds applied to the `limit` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardLimits {
    default_limit: u64,
    max_limit: u64,
}

impl LeaderboardLimits {
    pub fn new(default_limit: u64, max_limit: u64) -> Result<Self, String> {
        if max_limit == 0 {
            return Err("maximum limit must be at least 1".to_string());
        }
        if default_limit == 0 || default_limit > max_limit {
            return Err(format!(
                "default limit must be between 1 and {max_limit}, got {default_limit}"
            ));
        }
        Ok(Self {
            default_limit,
            max_limit,
        })
    }

    pub fn default_limit(&self) -> u64 {
        self.default_limit
    }

    pub fn max_limit(&self) -> u64 {
        self.max_limit
    }

    /// `None` falls back to the default; anything outside `1..=max` is rejected.
    pub fn resolve(&self, requested: Option<u64>) -> Result<u64, String> {
        match requested {
            None => Ok(self.default_limit),
            Some(n) if (1..=self.max_limit).contains(&n) => Ok(n),
            Some(_) => Err(format!("limit must be between 1 and {}", self.max_limit)),
        }
    }
}

impl Default for LeaderboardLimits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// A user as read for ranking. `id` and `created_at` only break ties.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardCandidate {
    pub id: UserId,
    pub username: String,
    pub stats: UserStats,
    pub created_at: DateTime<Utc>,
}

impl LeaderboardCandidate {
    /// Points descending, then earliest account, then id.
    fn standing(&self, other: &Self) -> Ordering {
        other
            .stats
            .points
            .cmp(&self.stats.points)
            .then_with(|| self.created_at.cmp(&other.created_at))
            .then_with(|| self.id.value().cmp(&other.id.value()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position
    #[schema(example = 1)]
    pub rank: u64,
    #[schema(example = "greenfan")]
    pub username: String,
    #[schema(example = 120)]
    pub points: i64,
    #[schema(example = 12)]
    pub total_items_recycled: i64,
    #[schema(example = 5.4)]
    pub co2_saved: f64,
}

/// Orders `candidates` into a ranked list of at most `limit` entries.
pub fn rank(mut candidates: Vec<LeaderboardCandidate>, limit: u64) -> Vec<LeaderboardEntry> {
    candidates.sort_by(|a, b| a.standing(b));

    candidates
        .into_iter()
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .zip(1u64..)
        .map(|(c, rank)| LeaderboardEntry {
            rank,
            username: c.username,
            points: c.stats.points,
            total_items_recycled: c.stats.total_items_recycled,
            co2_saved: c.stats.co2_saved,
        })
        .collect()
}

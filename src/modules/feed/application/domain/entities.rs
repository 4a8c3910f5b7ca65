use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Reaction kind every post starts with, and the kind used when a request
/// does not name one.
pub const DEFAULT_REACTION_KIND: &str = "like";

/// Per-kind reaction counters. Kinds are an open set of short tags
/// ("like", "love", "wow", ...); unknown kinds simply appear with their
/// first count. Counters only ever go up; there is no unreact.
pub type ReactionCounts = BTreeMap<String, u64>;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    /// Authoring account, by reference. Posts do not own their author and
    /// author data is never copied onto the post.
    pub account_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Moderation state: false = pending review, true = publicly visible.
    pub approved: bool,
    pub reactions: ReactionCounts,
}

impl Post {
    /// A fully-initialized post; there is no partially-constructed state.
    pub fn new(account_id: Uuid, content: String, approved: bool) -> Self {
        let mut reactions = ReactionCounts::new();
        reactions.insert(DEFAULT_REACTION_KIND.to_string(), 0);

        Self {
            id: Uuid::new_v4(),
            account_id,
            content,
            created_at: Utc::now(),
            approved,
            reactions,
        }
    }
}

/// A reaction kind as accepted from a request: trimmed, bounded, defaulting
/// to "like" when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionKind(String);

#[derive(Debug, Clone)]
pub enum ReactionKindError {
    Empty,
    TooLong,
}

impl std::fmt::Display for ReactionKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactionKindError::Empty => write!(f, "Reaction kind cannot be empty"),
            ReactionKindError::TooLong => write!(f, "Reaction kind is too long"),
        }
    }
}

impl std::error::Error for ReactionKindError {}

impl ReactionKind {
    const MAX_LEN: usize = 32;

    pub fn parse(raw: Option<String>) -> Result<Self, ReactionKindError> {
        let kind = match raw {
            None => DEFAULT_REACTION_KIND.to_string(),
            Some(raw) => {
                let kind = raw.trim().to_string();
                if kind.is_empty() {
                    return Err(ReactionKindError::Empty);
                }
                if kind.chars().count() > Self::MAX_LEN {
                    return Err(ReactionKindError::TooLong);
                }
                kind
            }
        };

        Ok(Self(kind))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_starts_with_a_zero_like_counter() {
        let post = Post::new(Uuid::new_v4(), "hello".to_string(), false);

        assert_eq!(post.reactions.get(DEFAULT_REACTION_KIND), Some(&0));
        assert!(!post.approved);
    }

    #[test]
    fn missing_kind_defaults_to_like() {
        let kind = ReactionKind::parse(None).unwrap();
        assert_eq!(kind.as_str(), DEFAULT_REACTION_KIND);
    }

    #[test]
    fn explicit_kind_is_trimmed() {
        let kind = ReactionKind::parse(Some("  insightful ".to_string())).unwrap();
        assert_eq!(kind.as_str(), "insightful");
    }

    #[test]
    fn blank_kind_is_rejected() {
        assert!(matches!(
            ReactionKind::parse(Some("   ".to_string())),
            Err(ReactionKindError::Empty)
        ));
    }

    #[test]
    fn oversized_kind_is_rejected() {
        assert!(matches!(
            ReactionKind::parse(Some("x".repeat(33))),
            Err(ReactionKindError::TooLong)
        ));
    }
}

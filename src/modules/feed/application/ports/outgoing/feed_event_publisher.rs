use async_trait::async_trait;
use uuid::Uuid;

/// Events pushed to the live-update channel after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    PostCreated {
        post_id: Uuid,
        author_username: String,
        approved: bool,
    },
    ReactionAdded {
        post_id: Uuid,
        kind: String,
        count: u64,
    },
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("event channel error: {0}")]
pub struct PublishError(pub String);

/// Best-effort, at-most-once broadcast to connected viewers. Delivery
/// failure is never retried and never affects the engine's own state;
/// callers fire and forget.
#[async_trait]
pub trait FeedEventPublisher: Send + Sync {
    async fn publish(&self, event: FeedEvent) -> Result<(), PublishError>;
}

use async_trait::async_trait;

use crate::modules::feed::application::ports::outgoing::{
    FeedEvent, FeedEventPublisher, PublishError,
};

/// Stand-in for the live-update transport: events are logged and dropped.
/// A websocket fan-out would implement the same port; either way delivery
/// stays best-effort and at-most-once.
#[derive(Clone, Default)]
pub struct TracingFeedEventPublisher;

impl TracingFeedEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FeedEventPublisher for TracingFeedEventPublisher {
    async fn publish(&self, event: FeedEvent) -> Result<(), PublishError> {
        match &event {
            FeedEvent::PostCreated {
                post_id,
                author_username,
                approved,
            } => {
                tracing::debug!(%post_id, author = %author_username, approved, "feed event: post created");
            }
            FeedEvent::ReactionAdded {
                post_id,
                kind,
                count,
            } => {
                tracing::debug!(%post_id, kind = %kind, count, "feed event: reaction added");
            }
        }

        Ok(())
    }
}

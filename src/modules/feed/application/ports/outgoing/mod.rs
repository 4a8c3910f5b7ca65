pub mod feed_event_publisher;
pub mod post_query;
pub mod post_repository;

pub use feed_event_publisher::{FeedEvent, FeedEventPublisher, PublishError};
pub use post_query::{PostQuery, PostQueryError};
pub use post_repository::{PostRepository, PostRepositoryError};

pub mod feed_composer;

pub use feed_composer::{compose_feed, compose_profile_posts, AuthorCard, FeedPostView};

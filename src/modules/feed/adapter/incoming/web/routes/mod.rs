pub mod create_post;
pub mod list_feed;
pub mod list_profile_posts;
pub mod react_to_post;

pub use create_post::create_post_handler;
pub use list_feed::list_feed_handler;
pub use list_profile_posts::list_profile_posts_handler;
pub use react_to_post::react_to_post_handler;

use crate::modules::feed::application::services::FeedPostView;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PostAuthorDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub account_id: String,

    #[schema(example = "johnkravin")]
    pub username: String,

    #[schema(example = "John Kravin")]
    pub display_name: String,

    #[schema(example = "👨‍💻")]
    pub avatar: String,
}

/// Post payload shared by the feed, profile and moderation surfaces.
#[derive(Serialize, ToSchema)]
pub struct PostDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    pub content: String,

    pub created_at: chrono::DateTime<chrono::Utc>,

    /// false while the post waits for moderation
    pub approved: bool,

    /// Reaction counters, kind → count
    pub reactions: BTreeMap<String, u64>,

    /// Resolved from current account state, never cached on the post
    pub author: PostAuthorDto,
}

impl From<FeedPostView> for PostDto {
    fn from(view: FeedPostView) -> Self {
        Self {
            id: view.id.to_string(),
            content: view.content,
            created_at: view.created_at,
            approved: view.approved,
            reactions: view.reactions,
            author: PostAuthorDto {
                account_id: view.author.account_id.to_string(),
                username: view.author.username,
                display_name: view.author.display_name,
                avatar: view.author.avatar,
            },
        }
    }
}

pub mod create_post;
pub mod list_feed;
pub mod list_profile_posts;
pub mod react_to_post;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::feed::application::domain::entities::{Post, ReactionCounts};
use crate::modules::moderation::application::domain::is_visible;

/// Author fields resolved from *current* account state at composition
/// time. They are never cached on the post, so an avatar change shows up
/// retroactively on every old post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorCard {
    pub account_id: Uuid,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
}

impl From<&Account> for AuthorCard {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id,
            username: account.username.clone(),
            display_name: account.display_name.clone(),
            avatar: account.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedPostView {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
    pub reactions: ReactionCounts,
    pub author: AuthorCard,
}

/// The viewer-scoped feed: visibility-filtered, newest first, stable under
/// equal timestamps. Pure: recomputed from scratch on every call.
pub fn compose_feed(
    posts: Vec<Post>,
    accounts: &[Account],
    viewer: Option<&Account>,
) -> Vec<FeedPostView> {
    let authors: HashMap<Uuid, &Account> =
        accounts.iter().map(|account| (account.id, account)).collect();

    let mut visible: Vec<Post> = posts
        .into_iter()
        .filter(|post| is_visible(post, viewer))
        .collect();

    // Stable sort: posts with identical timestamps keep the store's order.
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    visible
        .into_iter()
        .filter_map(|post| {
            let author = match authors.get(&post.account_id) {
                Some(author) => AuthorCard::from(*author),
                None => {
                    // Accounts are never hard-deleted, so an unresolvable
                    // author means inconsistent store contents.
                    tracing::debug!(post_id = %post.id, "dropping post with unknown author");
                    return None;
                }
            };

            Some(FeedPostView {
                id: post.id,
                content: post.content,
                created_at: post.created_at,
                approved: post.approved,
                reactions: post.reactions,
                author,
            })
        })
        .collect()
}

/// Same filter and ordering as the feed, restricted to one author.
pub fn compose_profile_posts(
    posts: Vec<Post>,
    accounts: &[Account],
    target_account_id: Uuid,
    viewer: Option<&Account>,
) -> Vec<FeedPostView> {
    let authored: Vec<Post> = posts
        .into_iter()
        .filter(|post| post.account_id == target_account_id)
        .collect();

    compose_feed(authored, accounts, viewer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{
        Role, DEFAULT_AVATAR, DEFAULT_BIO,
    };
    use chrono::Duration;

    fn account(username: &str, role: Role) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            display_name: username.to_uppercase(),
            bio: DEFAULT_BIO.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role,
            is_active: true,
            joined_at: Utc::now(),
        }
    }

    fn post_by(author: &Account, approved: bool, age: Duration) -> Post {
        let mut post = Post::new(author.id, "content".to_string(), approved);
        post.created_at = Utc::now() - age;
        post
    }

    #[test]
    fn feed_is_ordered_newest_first() {
        let alice = account("alice", Role::Regular);
        let old = post_by(&alice, true, Duration::hours(2));
        let newer = post_by(&alice, true, Duration::hours(1));

        let feed = compose_feed(
            vec![old.clone(), newer.clone()],
            std::slice::from_ref(&alice),
            None,
        );

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].id, newer.id);
        assert_eq!(feed[1].id, old.id);
    }

    #[test]
    fn equal_timestamps_keep_store_order() {
        let alice = account("alice", Role::Regular);
        let mut first = post_by(&alice, true, Duration::zero());
        let mut second = post_by(&alice, true, Duration::zero());
        let same_instant = Utc::now();
        first.created_at = same_instant;
        second.created_at = same_instant;

        let feed = compose_feed(
            vec![first.clone(), second.clone()],
            std::slice::from_ref(&alice),
            None,
        );

        assert_eq!(feed[0].id, first.id);
        assert_eq!(feed[1].id, second.id);
    }

    #[test]
    fn anonymous_viewer_sees_only_approved_posts() {
        let alice = account("alice", Role::Regular);
        let approved = post_by(&alice, true, Duration::zero());
        let pending = post_by(&alice, false, Duration::zero());

        let feed = compose_feed(
            vec![approved.clone(), pending],
            std::slice::from_ref(&alice),
            None,
        );

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, approved.id);
    }

    #[test]
    fn admin_viewer_sees_pending_posts() {
        let alice = account("alice", Role::Regular);
        let admin = account("admin", Role::Admin);
        let pending = post_by(&alice, false, Duration::zero());

        let feed = compose_feed(vec![pending], std::slice::from_ref(&alice), Some(&admin));

        assert_eq!(feed.len(), 1);
        assert!(!feed[0].approved);
    }

    #[test]
    fn author_card_reflects_current_account_state() {
        let mut alice = account("alice", Role::Regular);
        let post = post_by(&alice, true, Duration::zero());

        // Avatar changed after the post was created.
        alice.avatar = "🚀".to_string();

        let feed = compose_feed(vec![post], std::slice::from_ref(&alice), None);

        assert_eq!(feed[0].author.avatar, "🚀");
        assert_eq!(feed[0].author.username, "alice");
    }

    #[test]
    fn profile_posts_are_restricted_to_the_target() {
        let alice = account("alice", Role::Regular);
        let bob = account("bob", Role::Regular);
        let accounts = vec![alice.clone(), bob.clone()];

        let by_alice = post_by(&alice, true, Duration::zero());
        let by_bob = post_by(&bob, true, Duration::zero());

        let posts = compose_profile_posts(vec![by_alice.clone(), by_bob], &accounts, alice.id, None);

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, by_alice.id);
    }
}

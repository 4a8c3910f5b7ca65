use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::feed::application::domain::entities::Post;

/// Aggregate counters for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_accounts: u64,
    pub total_posts: u64,
    pub pending_posts: u64,
    pub active_accounts: u64,
    pub accounts_joined_today: u64,
    pub posts_created_today: u64,
}

/// Pure aggregation. "Today" comes from the caller so the function stays
/// deterministic under test.
pub fn compute_stats(accounts: &[Account], posts: &[Post], today: NaiveDate) -> DashboardStats {
    DashboardStats {
        total_accounts: accounts.len() as u64,
        total_posts: posts.len() as u64,
        pending_posts: posts.iter().filter(|post| !post.approved).count() as u64,
        active_accounts: accounts.iter().filter(|account| account.is_active).count() as u64,
        accounts_joined_today: accounts
            .iter()
            .filter(|account| account.joined_at.date_naive() == today)
            .count() as u64,
        posts_created_today: posts
            .iter()
            .filter(|post| post.created_at.date_naive() == today)
            .count() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{
        Role, DEFAULT_AVATAR, DEFAULT_BIO,
    };
    use chrono::{DateTime, Duration, Utc};
    use uuid::Uuid;

    fn account_joined(at: DateTime<Utc>, is_active: bool) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: format!("u{}", Uuid::new_v4().simple()),
            email: "user@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: "User".to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role: Role::Regular,
            is_active,
            joined_at: at,
        }
    }

    fn post_created(at: DateTime<Utc>, approved: bool) -> Post {
        let mut post = Post::new(Uuid::new_v4(), "content".to_string(), approved);
        post.created_at = at;
        post
    }

    #[test]
    fn counts_are_computed_against_the_supplied_date() {
        let now = Utc::now();
        let yesterday = now - Duration::days(1);
        let today = now.date_naive();

        let accounts = vec![
            account_joined(now, true),
            account_joined(yesterday, true),
            account_joined(yesterday, false),
        ];
        let posts = vec![
            post_created(now, true),
            post_created(now, false),
            post_created(yesterday, false),
        ];

        let stats = compute_stats(&accounts, &posts, today);

        assert_eq!(
            stats,
            DashboardStats {
                total_accounts: 3,
                total_posts: 3,
                pending_posts: 2,
                active_accounts: 2,
                accounts_joined_today: 1,
                posts_created_today: 2,
            }
        );
    }

    #[test]
    fn empty_stores_produce_zeroes() {
        let stats = compute_stats(&[], &[], Utc::now().date_naive());

        assert_eq!(stats.total_accounts, 0);
        assert_eq!(stats.total_posts, 0);
        assert_eq!(stats.pending_posts, 0);
    }
}

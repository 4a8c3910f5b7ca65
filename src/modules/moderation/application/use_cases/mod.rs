pub mod delete_post;
pub mod fetch_dashboard_stats;
pub mod list_accounts;
pub mod list_all_posts;
pub mod toggle_account_active;
pub mod toggle_post_approval;

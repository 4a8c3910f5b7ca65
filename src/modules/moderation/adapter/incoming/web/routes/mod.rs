pub mod dashboard_stats;
pub mod delete_post;
pub mod list_accounts;
pub mod list_all_posts;
pub mod toggle_account_active;
pub mod toggle_post_approval;

pub use dashboard_stats::dashboard_stats_handler;
pub use delete_post::delete_post_handler;
pub use list_accounts::list_accounts_handler;
pub use list_all_posts::list_all_posts_handler;
pub use toggle_account_active::toggle_account_active_handler;
pub use toggle_post_approval::toggle_post_approval_handler;

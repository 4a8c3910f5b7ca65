pub mod access;
pub mod stats;
pub mod visibility;

pub use access::{require_admin, AdminAccessError};
pub use stats::{compute_stats, DashboardStats};
pub use visibility::{default_approval, is_visible, ApprovalPolicy};

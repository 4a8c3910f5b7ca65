use crate::modules::auth::application::domain::entities::{Account, Role};
use crate::modules::feed::application::domain::entities::Post;

/// Initial moderation state for posts by regular accounts. Admin posts
/// always bypass review regardless of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalPolicy {
    /// Every post is visible immediately.
    AutoApprove,
    /// Regular posts start pending and wait for an admin.
    RequireReview,
}

impl ApprovalPolicy {
    /// `MODERATION_DEFAULT_APPROVAL=auto|review`, defaulting to review.
    pub fn from_env() -> Self {
        match std::env::var("MODERATION_DEFAULT_APPROVAL").as_deref() {
            Ok("auto") => ApprovalPolicy::AutoApprove,
            _ => ApprovalPolicy::RequireReview,
        }
    }
}

/// Initial `approved` value for a new post.
pub fn default_approval(author_role: Role, policy: ApprovalPolicy) -> bool {
    author_role.is_admin() || policy == ApprovalPolicy::AutoApprove
}

/// The visibility predicate: approved posts are visible to everyone
/// (including anonymous viewers); pending posts are visible to admins
/// only. There is no author exception: an author does not see their own
/// pending post.
pub fn is_visible(post: &Post, viewer: Option<&Account>) -> bool {
    post.approved || viewer.is_some_and(|viewer| viewer.role.is_admin())
}

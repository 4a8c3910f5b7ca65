//! Default stand-ins for every use case. Route tests swap in a real mock
//! for the one use case under test and leave the rest stubbed.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AccountProfile;
use crate::auth::application::use_cases::{
    fetch_current_account::{FetchCurrentAccountError, IFetchCurrentAccountUseCase},
    login_account::{ILoginAccountUseCase, LoginError, LoginRequest, LoginResponse},
    logout_account::{ILogoutUseCase, LogoutError},
    refresh_token::{IRefreshTokenUseCase, RefreshError},
    register_account::{IRegisterAccountUseCase, RegisterError, RegisterRequest, RegisteredAccount},
    update_profile::{IUpdateProfileUseCase, UpdateProfileError, UpdateProfileRequest},
};
use crate::feed::application::domain::entities::{ReactionCounts, ReactionKind};
use crate::feed::application::services::FeedPostView;
use crate::feed::application::use_cases::{
    create_post::{CreatePostError, CreatePostRequest, ICreatePostUseCase},
    list_feed::{IListFeedUseCase, ListFeedError},
    list_profile_posts::{IListProfilePostsUseCase, ListProfilePostsError, ProfilePosts},
    react_to_post::{IReactToPostUseCase, ReactToPostError},
};
use crate::moderation::application::domain::DashboardStats;
use crate::moderation::application::use_cases::{
    delete_post::{DeletePostError, IDeletePostUseCase},
    fetch_dashboard_stats::{FetchDashboardStatsError, IFetchDashboardStatsUseCase},
    list_accounts::{IListAccountsUseCase, ListAccountsError},
    list_all_posts::{IListAllPostsUseCase, ListAllPostsError},
    toggle_account_active::{IToggleAccountActiveUseCase, ToggleAccountActiveError},
    toggle_post_approval::{ITogglePostApprovalUseCase, ModeratedPost, TogglePostApprovalError},
};

const UNUSED: &str = "stub not expected to be called in this test";

pub struct StubRegisterAccountUseCase;

#[async_trait]
impl IRegisterAccountUseCase for StubRegisterAccountUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<RegisteredAccount, RegisterError> {
        Err(RegisterError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubLoginAccountUseCase;

#[async_trait]
impl ILoginAccountUseCase for StubLoginAccountUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        Err(LoginError::QueryError(UNUSED.to_string()))
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshError> {
        Err(RefreshError::InvalidToken)
    }
}

pub struct StubFetchCurrentAccountUseCase;

#[async_trait]
impl IFetchCurrentAccountUseCase for StubFetchCurrentAccountUseCase {
    async fn execute(&self, _account_id: Uuid) -> Result<AccountProfile, FetchCurrentAccountError> {
        Err(FetchCurrentAccountError::AccountNotFound)
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _account_id: Uuid,
        _request: UpdateProfileRequest,
    ) -> Result<AccountProfile, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubCreatePostUseCase;

#[async_trait]
impl ICreatePostUseCase for StubCreatePostUseCase {
    async fn execute(
        &self,
        _author_id: Uuid,
        _request: CreatePostRequest,
    ) -> Result<FeedPostView, CreatePostError> {
        Err(CreatePostError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubListFeedUseCase;

#[async_trait]
impl IListFeedUseCase for StubListFeedUseCase {
    async fn execute(&self, _viewer_id: Option<Uuid>) -> Result<Vec<FeedPostView>, ListFeedError> {
        Ok(vec![])
    }
}

pub struct StubListProfilePostsUseCase;

#[async_trait]
impl IListProfilePostsUseCase for StubListProfilePostsUseCase {
    async fn execute(
        &self,
        _target_username: &str,
        _viewer_id: Option<Uuid>,
    ) -> Result<ProfilePosts, ListProfilePostsError> {
        Err(ListProfilePostsError::AccountNotFound)
    }
}

pub struct StubReactToPostUseCase;

#[async_trait]
impl IReactToPostUseCase for StubReactToPostUseCase {
    async fn execute(
        &self,
        _viewer_id: Uuid,
        _post_id: Uuid,
        _kind: ReactionKind,
    ) -> Result<ReactionCounts, ReactToPostError> {
        Err(ReactToPostError::RepositoryError(UNUSED.to_string()))
    }
}

pub struct StubTogglePostApprovalUseCase;

#[async_trait]
impl ITogglePostApprovalUseCase for StubTogglePostApprovalUseCase {
    async fn execute(
        &self,
        _caller_id: Uuid,
        _post_id: Uuid,
    ) -> Result<ModeratedPost, TogglePostApprovalError> {
        Err(TogglePostApprovalError::PostNotFound)
    }
}

pub struct StubDeletePostUseCase;

#[async_trait]
impl IDeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _caller_id: Uuid, _post_id: Uuid) -> Result<(), DeletePostError> {
        Err(DeletePostError::PostNotFound)
    }
}

pub struct StubToggleAccountActiveUseCase;

#[async_trait]
impl IToggleAccountActiveUseCase for StubToggleAccountActiveUseCase {
    async fn execute(
        &self,
        _caller_id: Uuid,
        _username: &str,
    ) -> Result<AccountProfile, ToggleAccountActiveError> {
        Err(ToggleAccountActiveError::AccountNotFound)
    }
}

pub struct StubFetchDashboardStatsUseCase;

#[async_trait]
impl IFetchDashboardStatsUseCase for StubFetchDashboardStatsUseCase {
    async fn execute(&self, _caller_id: Uuid) -> Result<DashboardStats, FetchDashboardStatsError> {
        Err(FetchDashboardStatsError::Forbidden)
    }
}

pub struct StubListAccountsUseCase;

#[async_trait]
impl IListAccountsUseCase for StubListAccountsUseCase {
    async fn execute(&self, _caller_id: Uuid) -> Result<Vec<AccountProfile>, ListAccountsError> {
        Ok(vec![])
    }
}

pub struct StubListAllPostsUseCase;

#[async_trait]
impl IListAllPostsUseCase for StubListAllPostsUseCase {
    async fn execute(&self, _caller_id: Uuid) -> Result<Vec<FeedPostView>, ListAllPostsError> {
        Ok(vec![])
    }
}

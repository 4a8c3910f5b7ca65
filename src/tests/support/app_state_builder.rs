use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::{
    fetch_current_account::IFetchCurrentAccountUseCase, login_account::ILoginAccountUseCase,
    logout_account::ILogoutUseCase, refresh_token::IRefreshTokenUseCase,
    register_account::IRegisterAccountUseCase, update_profile::IUpdateProfileUseCase,
};
use crate::feed::application::use_cases::{
    create_post::ICreatePostUseCase, list_feed::IListFeedUseCase,
    list_profile_posts::IListProfilePostsUseCase, react_to_post::IReactToPostUseCase,
};
use crate::moderation::application::use_cases::{
    delete_post::IDeletePostUseCase, fetch_dashboard_stats::IFetchDashboardStatsUseCase,
    list_accounts::IListAccountsUseCase, list_all_posts::IListAllPostsUseCase,
    toggle_account_active::IToggleAccountActiveUseCase,
    toggle_post_approval::ITogglePostApprovalUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub unless a test
/// swaps in its own mock.
pub struct TestAppStateBuilder {
    register_account: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    login_account: Arc<dyn ILoginAccountUseCase + Send + Sync>,
    logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    fetch_current_account: Arc<dyn IFetchCurrentAccountUseCase + Send + Sync>,
    update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    create_post: Arc<dyn ICreatePostUseCase + Send + Sync>,
    list_feed: Arc<dyn IListFeedUseCase + Send + Sync>,
    list_profile_posts: Arc<dyn IListProfilePostsUseCase + Send + Sync>,
    react_to_post: Arc<dyn IReactToPostUseCase + Send + Sync>,
    toggle_post_approval: Arc<dyn ITogglePostApprovalUseCase + Send + Sync>,
    delete_post: Arc<dyn IDeletePostUseCase + Send + Sync>,
    toggle_account_active: Arc<dyn IToggleAccountActiveUseCase + Send + Sync>,
    fetch_dashboard_stats: Arc<dyn IFetchDashboardStatsUseCase + Send + Sync>,
    list_accounts: Arc<dyn IListAccountsUseCase + Send + Sync>,
    list_all_posts: Arc<dyn IListAllPostsUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_account: Arc::new(StubRegisterAccountUseCase),
            login_account: Arc::new(StubLoginAccountUseCase),
            logout: Arc::new(StubLogoutUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            fetch_current_account: Arc::new(StubFetchCurrentAccountUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            create_post: Arc::new(StubCreatePostUseCase),
            list_feed: Arc::new(StubListFeedUseCase),
            list_profile_posts: Arc::new(StubListProfilePostsUseCase),
            react_to_post: Arc::new(StubReactToPostUseCase),
            toggle_post_approval: Arc::new(StubTogglePostApprovalUseCase),
            delete_post: Arc::new(StubDeletePostUseCase),
            toggle_account_active: Arc::new(StubToggleAccountActiveUseCase),
            fetch_dashboard_stats: Arc::new(StubFetchDashboardStatsUseCase),
            list_accounts: Arc::new(StubListAccountsUseCase),
            list_all_posts: Arc::new(StubListAllPostsUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_account(
        mut self,
        uc: impl IRegisterAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_account = Arc::new(uc);
        self
    }

    pub fn with_login_account(
        mut self,
        uc: impl ILoginAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_account = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_fetch_current_account(
        mut self,
        uc: impl IFetchCurrentAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_current_account = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl IUpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl ICreatePostUseCase + Send + Sync + 'static) -> Self {
        self.create_post = Arc::new(uc);
        self
    }

    pub fn with_list_feed(mut self, uc: impl IListFeedUseCase + Send + Sync + 'static) -> Self {
        self.list_feed = Arc::new(uc);
        self
    }

    pub fn with_list_profile_posts(
        mut self,
        uc: impl IListProfilePostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_profile_posts = Arc::new(uc);
        self
    }

    pub fn with_react_to_post(
        mut self,
        uc: impl IReactToPostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.react_to_post = Arc::new(uc);
        self
    }

    pub fn with_toggle_post_approval(
        mut self,
        uc: impl ITogglePostApprovalUseCase + Send + Sync + 'static,
    ) -> Self {
        self.toggle_post_approval = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl IDeletePostUseCase + Send + Sync + 'static) -> Self {
        self.delete_post = Arc::new(uc);
        self
    }

    pub fn with_toggle_account_active(
        mut self,
        uc: impl IToggleAccountActiveUseCase + Send + Sync + 'static,
    ) -> Self {
        self.toggle_account_active = Arc::new(uc);
        self
    }

    pub fn with_fetch_dashboard_stats(
        mut self,
        uc: impl IFetchDashboardStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_dashboard_stats = Arc::new(uc);
        self
    }

    pub fn with_list_accounts(
        mut self,
        uc: impl IListAccountsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_accounts = Arc::new(uc);
        self
    }

    pub fn with_list_all_posts(
        mut self,
        uc: impl IListAllPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_all_posts = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_account_use_case: self.register_account,
            login_account_use_case: self.login_account,
            logout_use_case: self.logout,
            refresh_token_use_case: self.refresh_token,
            fetch_current_account_use_case: self.fetch_current_account,
            update_profile_use_case: self.update_profile,
            create_post_use_case: self.create_post,
            list_feed_use_case: self.list_feed,
            list_profile_posts_use_case: self.list_profile_posts,
            react_to_post_use_case: self.react_to_post,
            toggle_post_approval_use_case: self.toggle_post_approval,
            delete_post_use_case: self.delete_post,
            toggle_account_active_use_case: self.toggle_account_active,
            fetch_dashboard_stats_use_case: self.fetch_dashboard_stats,
            list_accounts_use_case: self.list_accounts,
            list_all_posts_use_case: self.list_all_posts,
        })
    }
}

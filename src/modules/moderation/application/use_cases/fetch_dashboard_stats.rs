use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feed::application::ports::outgoing::PostQuery;
use crate::modules::moderation::application::domain::{compute_stats, require_admin, DashboardStats};

#[derive(Debug, Clone)]
pub enum FetchDashboardStatsError {
    CallerNotFound,
    Forbidden,
    QueryError(String),
}

impl std::fmt::Display for FetchDashboardStatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchDashboardStatsError::CallerNotFound => write!(f, "Caller account not found"),
            FetchDashboardStatsError::Forbidden => write!(f, "Admin access required"),
            FetchDashboardStatsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchDashboardStatsError {}

#[async_trait]
pub trait IFetchDashboardStatsUseCase: Send + Sync {
    async fn execute(&self, caller_id: Uuid) -> Result<DashboardStats, FetchDashboardStatsError>;
}

#[derive(Clone)]
pub struct FetchDashboardStatsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    accounts: AQ,
    posts: PQ,
}

impl<AQ, PQ> FetchDashboardStatsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    pub fn new(accounts: AQ, posts: PQ) -> Self {
        Self { accounts, posts }
    }
}

#[async_trait]
impl<AQ, PQ> IFetchDashboardStatsUseCase for FetchDashboardStatsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid) -> Result<DashboardStats, FetchDashboardStatsError> {
        let caller = self
            .accounts
            .find_by_id(caller_id)
            .await
            .map_err(|e| FetchDashboardStatsError::QueryError(e.to_string()))?
            .ok_or(FetchDashboardStatsError::CallerNotFound)?;

        require_admin(&caller).map_err(|_| FetchDashboardStatsError::Forbidden)?;

        let accounts = self
            .accounts
            .list_all()
            .await
            .map_err(|e| FetchDashboardStatsError::QueryError(e.to_string()))?;
        let posts = self
            .posts
            .list_all()
            .await
            .map_err(|e| FetchDashboardStatsError::QueryError(e.to_string()))?;

        // The aggregation itself is pure; the clock is supplied here.
        Ok(compute_stats(&accounts, &posts, Utc::now().date_naive()))
    }
}

//! The named operations exposed by every Recman client.

use super::operation::{LocationField, Operation, UserListFilter};
use crate::Result;
use async_trait::async_trait;

/// Decoded JSON payload of a successful call: a list or a mapping of records,
/// depending on the operation.
pub type ApiResponse = serde_json::Value;

/// Recman API surface.
///
/// Implementors only provide [`RecmanApi::execute`]; the named methods build
/// the matching [`Operation`] and delegate to it. Both [`RecmanClient`] and
/// [`CachedRecmanClient`] implement this trait, so they are interchangeable.
///
/// [`RecmanClient`]: crate::client::RecmanClient
/// [`CachedRecmanClient`]: crate::cache::CachedRecmanClient
#[async_trait]
pub trait RecmanApi: Send + Sync {
    async fn execute(&self, operation: &Operation) -> Result<ApiResponse>;

    async fn get_branch_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::BranchList).await
    }

    async fn get_branch_category_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::BranchCategoryList).await
    }

    async fn get_sector_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::SectorList).await
    }

    async fn get_extent_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::ExtentList).await
    }

    /// `field` must be one of `city`, `region`, `country`,
    /// `world-country-list` or `nationality-list`.
    async fn get_location_list(&self, field: &str) -> Result<ApiResponse> {
        let field: LocationField = field.parse()?;
        self.execute(&Operation::LocationList(field)).await
    }

    async fn get_job_post_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::JobPostList).await
    }

    async fn get_department_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::DepartmentList).await
    }

    async fn get_corporation(&self) -> Result<ApiResponse> {
        self.execute(&Operation::Corporation).await
    }

    /// One page (at most [`CANDIDATE_PAGE_SIZE`](crate::client::CANDIDATE_PAGE_SIZE) candidates) of the candidate list.
    /// `None` requests the first page; later pages must be requested explicitly.
    async fn get_candidate_list(&self, page: Option<u32>) -> Result<ApiResponse> {
        self.execute(&Operation::candidate_list(page)).await
    }

    async fn get_candidate(&self, candidate_id: u64) -> Result<ApiResponse> {
        self.execute(&Operation::Candidate { candidate_id }).await
    }

    async fn get_candidate_attribute_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::CandidateAttributeList).await
    }

    async fn get_candidate_attributes(&self) -> Result<ApiResponse> {
        self.execute(&Operation::CandidateAttributes).await
    }

    async fn get_candidate_language_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::CandidateLanguageList).await
    }

    async fn get_user_list(&self, filter: UserListFilter) -> Result<ApiResponse> {
        self.execute(&Operation::UserList(filter)).await
    }

    async fn get_user_tag_list(&self) -> Result<ApiResponse> {
        self.execute(&Operation::UserTagList).await
    }
}

use tracing::info;

use crate::dto::job_dto::{CreateJobPayload, JobListQuery, JobListResponse};
use crate::dto::MessageResponse;
use crate::error::Result;
use crate::models::company::Company;
use crate::models::job::Job;
use crate::transport::Transport;

#[derive(Clone)]
pub struct JobService {
    transport: Transport,
}

impl JobService {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn list(&self, query: &JobListQuery) -> Result<JobListResponse> {
        self.transport.get_query("/jobs", query).await
    }

    pub async fn get(&self, id: &str) -> Result<Job> {
        self.transport.get(&format!("/jobs/{}", id)).await
    }

    pub async fn create(&self, payload: &CreateJobPayload) -> Result<Job> {
        info!(title = %payload.title, company = %payload.company, "Posting job");
        self.transport.post("/jobs", payload).await
    }

    /// Bookmark a job for the current user.
    pub async fn save(&self, id: &str) -> Result<MessageResponse> {
        self.transport
            .post_empty(&format!("/jobs/{}/save", id))
            .await
    }

    pub async fn unsave(&self, id: &str) -> Result<()> {
        self.transport
            .delete_no_content(&format!("/jobs/{}/save", id))
            .await
    }

    /// Companies the current user may post under. The post-a-job flow needs
    /// this next to the job endpoints, so it lives here as well as on
    /// `CompanyService`.
    pub async fn user_companies(&self) -> Result<Vec<Company>> {
        self.transport.get("/companies/my-companies").await
    }
}

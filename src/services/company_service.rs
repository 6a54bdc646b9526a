use crate::dto::company_dto::{
    CompanyListQuery, CompanyListResponse, CreateCompanyPayload, UpdateCompanyPayload,
};
use crate::error::Result;
use crate::models::company::Company;
use crate::transport::Transport;

#[derive(Clone)]
pub struct CompanyService {
    transport: Transport,
}

impl CompanyService {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn list(&self, query: &CompanyListQuery) -> Result<CompanyListResponse> {
        self.transport.get_query("/companies", query).await
    }

    pub async fn get(&self, id: &str) -> Result<Company> {
        self.transport.get(&format!("/companies/{}", id)).await
    }

    pub async fn create(&self, payload: &CreateCompanyPayload) -> Result<Company> {
        self.transport.post("/companies", payload).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateCompanyPayload) -> Result<Company> {
        self.transport
            .put(&format!("/companies/{}", id), payload)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.transport
            .delete_no_content(&format!("/companies/{}", id))
            .await
    }

    /// Admin action: mark a pending company as verified.
    pub async fn verify(&self, id: &str) -> Result<Company> {
        self.transport
            .put_empty(&format!("/companies/{}/verify", id))
            .await
    }

    /// Companies owned by the current user.
    pub async fn my_companies(&self) -> Result<Vec<Company>> {
        self.transport.get("/companies/my-companies").await
    }
}

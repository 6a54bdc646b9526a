pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod transport;
pub mod ui;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::services::{
    auth_service::AuthService, company_service::CompanyService, job_service::JobService,
};
use crate::session::SessionStore;
use crate::transport::Transport;

/// Aggregate client for the job-board API: one shared transport, one session
/// store, and the three resource clients wired to them.
#[derive(Clone)]
pub struct JobBoardClient {
    pub auth: AuthService,
    pub companies: CompanyService,
    pub jobs: JobService,
    pub session: SessionStore,
}

impl JobBoardClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let session = SessionStore::new();
        let transport = Transport::new(&config, session.clone())?;

        Ok(Self {
            auth: AuthService::new(transport.clone()),
            companies: CompanyService::new(transport.clone()),
            jobs: JobService::new(transport),
            session,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

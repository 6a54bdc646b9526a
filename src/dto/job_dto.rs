use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::job::{Job, JobType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    pub title: String,
    /// Identifier of the posting company.
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub job_type: JobType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub items: Vec<Job>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_goes_out_verbatim() {
        let payload = CreateJobPayload {
            title: "Backend Engineer".into(),
            company: "c-9".into(),
            location: "Remote".into(),
            description: "Own the API surface.".into(),
            requirements: vec!["Rust".into(), "HTTP".into()],
            salary: Some(Decimal::from(95000)),
            tags: vec!["rust".into(), "backend".into()],
            job_type: JobType::FullTime,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "full-time");
        assert_eq!(json["requirements"][1], "HTTP");
        assert_eq!(json["tags"], serde_json::json!(["rust", "backend"]));
    }

    #[test]
    fn query_omits_absent_filters() {
        let query = JobListQuery {
            search: Some("engineer".into()),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"search":"engineer","page":2}"#
        );
    }
}

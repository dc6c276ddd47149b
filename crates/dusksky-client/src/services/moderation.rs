//! Moderation service facade: reports and sanctions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::http::{ApiClient, ApiError};

const BASE: &str = "/moderation";

/// What kind of content a report points at. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportContentType {
    Comment,
    Review,
    Profile,
}

/// Triage state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Resolved,
}

/// Kind of sanction a moderator can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanctionType {
    Ban,
    Suspension,
}

/// Report as the moderation service returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub reported_user_id: String,
    pub content_type: ReportContentType,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: ReportStatus,
    #[serde(default)]
    pub reported_at: Option<String>,
}

/// Payload for filing a report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub reported_user_id: String,
    pub content_type: ReportContentType,
    pub reason: String,
}

/// Sanction as the moderation service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sanction {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub sanction_type: SanctionType,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Derived by the service from the dates: active, expired, lifted.
    #[serde(default)]
    pub calculated_status: Option<String>,
}

/// Payload for applying a sanction. Suspensions carry an end date; bans do
/// not.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSanction {
    pub user_id: String,
    #[serde(rename = "type")]
    pub sanction_type: SanctionType,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Facade over the moderation microservice.
pub struct ModerationService {
    api: Arc<ApiClient>,
}

impl ModerationService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn reports(&self) -> Result<Vec<Report>, ApiError> {
        self.api.get(&format!("{BASE}/reports")).await
    }

    pub async fn report(&self, report_id: &str) -> Result<Report, ApiError> {
        self.api.get(&format!("{BASE}/reports/{report_id}")).await
    }

    pub async fn create_report(&self, report: &NewReport) -> Result<Report, ApiError> {
        if report.reported_user_id.is_empty() {
            return Err(ApiError::Config(
                "missing required report field: reported_user_id".into(),
            ));
        }
        let body = serde_json::to_value(report)?;
        self.api.post(&format!("{BASE}/reports"), Some(&body)).await
    }

    pub async fn update_report(&self, report_id: &str, report: &Report) -> Result<Value, ApiError> {
        let mut body = serde_json::to_value(report)?;
        if let Some(obj) = body.as_object_mut() {
            obj.insert("id".into(), json!(report_id));
        }
        self.api.put(&format!("{BASE}/reports/{report_id}"), Some(&body)).await
    }

    pub async fn delete_report(&self, report_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .api
            .delete_maybe(&format!("{BASE}/reports/{report_id}"))
            .await?;
        Ok(())
    }

    /// Mark a report resolved: fetch it, flip the status, write it back.
    pub async fn resolve_report(&self, report_id: &str) -> Result<(), ApiError> {
        let mut report = self.report(report_id).await?;
        report.status = ReportStatus::Resolved;
        self.update_report(report_id, &report).await?;
        tracing::info!(report_id, "report resolved");
        Ok(())
    }

    pub async fn sanctions(&self) -> Result<Vec<Sanction>, ApiError> {
        self.api.get(&format!("{BASE}/sanctions")).await
    }

    pub async fn apply_sanction(&self, sanction: &NewSanction) -> Result<Sanction, ApiError> {
        let body = serde_json::to_value(sanction)?;
        self.api.post(&format!("{BASE}/sanctions"), Some(&body)).await
    }

    pub async fn delete_sanction(&self, sanction_id: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self
            .api
            .delete_maybe(&format!("{BASE}/sanctions/{sanction_id}"))
            .await?;
        Ok(())
    }
}

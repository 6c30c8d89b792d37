use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of a Microsoft Graph `roleAssignmentScheduleRequests` POST
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentScheduleRequest {
    pub action: ScheduleAction,
    pub principal_id: String,
    pub role_definition_id: String,
    pub directory_scope_id: String,
    pub justification: String,
    pub schedule_info: RequestSchedule,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleAction {
    SelfActivate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestSchedule {
    /// Omitted to activate immediately
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_start",
        default
    )]
    pub start_date_time: Option<DateTime<Utc>>,
    pub expiration: ExpirationPattern,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpirationPattern {
    #[serde(rename = "type")]
    pub kind: ExpirationKind,
    /// ISO 8601 duration
    pub duration: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ExpirationKind {
    AfterDuration,
}

// Graph expects whole seconds with a trailing Z
fn serialize_start<S>(start: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match start {
        Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
        None => serializer.serialize_none(),
    }
}

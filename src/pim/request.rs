use crate::duration::{DurationConverter, DurationValue, Representation};
use crate::error::{DurationError, PimError};
use crate::pim::models::{
    ExpirationKind, ExpirationPattern, RequestSchedule, RoleAssignmentScheduleRequest,
    ScheduleAction,
};
use chrono::{DateTime, Utc};

/// Caller input for a self-activation of an eligible directory role
#[derive(Debug, Clone)]
pub struct ActivationParams {
    pub principal_id: String,
    pub role_definition_id: String,
    pub directory_scope_id: String,
    pub justification: String,
    pub duration: DurationValue,
    pub start: Option<DateTime<Utc>>,
}

/// Build the request body for a role self-activation.
///
/// The duration is rendered as ISO 8601 and checked against `max_duration`.
/// Both are measured with the same converter so year/month components
/// resolve against one reference instant.
pub fn build_activation_request(
    params: &ActivationParams,
    max_duration: &DurationValue,
    converter: &DurationConverter,
) -> Result<RoleAssignmentScheduleRequest, PimError> {
    require("principal_id", &params.principal_id)?;
    require("role_definition_id", &params.role_definition_id)?;
    require("directory_scope_id", &params.directory_scope_id)?;
    require("justification", &params.justification)?;

    let converter = match converter.reference() {
        Some(_) => *converter,
        None => DurationConverter::at(params.start.unwrap_or_else(Utc::now)),
    };

    // The ISO rendering keeps whole seconds only
    let requested = total_seconds(&converter, &params.duration)?;
    if requested < 1.0 {
        return Err(PimError::ZeroDuration);
    }

    let duration = converter
        .convert(&params.duration, Representation::Iso8601)?
        .into_iso8601()
        .unwrap_or_default();

    let maximum = total_seconds(&converter, max_duration)?;
    if requested > maximum {
        let maximum = converter
            .convert(max_duration, Representation::Iso8601)?
            .into_iso8601()
            .unwrap_or_default();
        return Err(PimError::ExceedsMaximum {
            requested: duration,
            maximum,
        });
    }

    log::info!(
        "activation request for role {} lasting {}",
        params.role_definition_id,
        duration
    );

    Ok(RoleAssignmentScheduleRequest {
        action: ScheduleAction::SelfActivate,
        principal_id: params.principal_id.trim().to_string(),
        role_definition_id: params.role_definition_id.trim().to_string(),
        directory_scope_id: params.directory_scope_id.trim().to_string(),
        justification: params.justification.trim().to_string(),
        schedule_info: RequestSchedule {
            start_date_time: params.start,
            expiration: ExpirationPattern {
                kind: ExpirationKind::AfterDuration,
                duration,
            },
        },
    })
}

fn require(field: &'static str, value: &str) -> Result<(), PimError> {
    if value.trim().is_empty() {
        return Err(PimError::MissingField { field });
    }
    Ok(())
}

fn total_seconds(
    converter: &DurationConverter,
    value: &DurationValue,
) -> Result<f64, DurationError> {
    Ok(converter
        .convert(value, Representation::TotalSeconds)?
        .as_total_seconds()
        .unwrap_or_default())
}

use crate::config::Config;
use crate::duration::{DurationConverter, DurationValue};
use crate::pim::{ActivationParams, build_activation_request};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;

pub struct RequestArgs {
    pub principal_id: Option<String>,
    pub role_id: String,
    pub duration: Option<String>,
    pub minutes: Option<u64>,
    pub justification: Option<String>,
    pub start: Option<String>,
    pub scope: Option<String>,
}

/// Resolve CLI arguments against the `[pim]` config section
pub fn activation_params(config: &Config, args: RequestArgs) -> Result<ActivationParams> {
    let principal_id = args
        .principal_id
        .or_else(|| config.pim.principal_id.clone())
        .context("Principal id not set. Pass --principal-id or set pim.principal_id in config")?;

    let justification = args
        .justification
        .or_else(|| config.pim.justification.clone())
        .context("Justification not set. Pass --justification or set pim.justification in config")?;

    let duration = match (args.duration, args.minutes) {
        (Some(_), Some(_)) => anyhow::bail!("Give either --duration or --minutes, not both"),
        (Some(iso), None) => DurationValue::iso(iso),
        (None, Some(minutes)) => {
            let secs = minutes
                .checked_mul(60)
                .context("--minutes is too large")?;
            DurationValue::Elapsed(Duration::from_secs(secs))
        }
        (None, None) => DurationValue::iso(config.pim.default_duration.clone()),
    };

    let start = args
        .start
        .map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .with_context(|| format!("Invalid --start '{}', expected RFC 3339", s))
        })
        .transpose()?;

    Ok(ActivationParams {
        principal_id,
        role_definition_id: args.role_id,
        directory_scope_id: args
            .scope
            .unwrap_or_else(|| config.pim.directory_scope_id.clone()),
        justification,
        duration,
        start,
    })
}

/// Print the role activation request body. Submitting it to Graph is left
/// to the caller.
pub fn request(config: &Config, args: RequestArgs) -> Result<()> {
    let params = activation_params(config, args)?;
    let max_duration = DurationValue::iso(config.pim.max_duration.clone());

    let body = build_activation_request(&params, &max_duration, &DurationConverter::new())
        .context("Failed to build role activation request")?;

    let json = serde_json::to_string_pretty(&body).context("Failed to serialize request")?;
    println!("{}", json);
    Ok(())
}

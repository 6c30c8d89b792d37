use crate::OutputFormat;
use crate::config::Config;
use crate::duration::format::format_elapsed;
use crate::duration::{Converted, DurationConverter, DurationValue, FieldMap, Representation};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Elapsed-time parts given as separate flags instead of a duration string
#[derive(Debug, Clone, Copy, Default)]
pub struct ElapsedParts {
    pub days: Option<u64>,
    pub hours: Option<u64>,
    pub minutes: Option<u64>,
    pub seconds: Option<u64>,
}

impl ElapsedParts {
    pub fn is_empty(&self) -> bool {
        self.days.is_none()
            && self.hours.is_none()
            && self.minutes.is_none()
            && self.seconds.is_none()
    }

    pub fn to_duration(self) -> Result<Duration> {
        let secs = [
            (self.days, 86_400u64),
            (self.hours, 3_600),
            (self.minutes, 60),
            (self.seconds, 1),
        ]
        .into_iter()
        .try_fold(0u64, |total, (value, unit)| {
            value
                .unwrap_or(0)
                .checked_mul(unit)
                .and_then(|s| total.checked_add(s))
        })
        .context("Elapsed duration is too large")?;
        Ok(Duration::from_secs(secs))
    }
}

/// Turn CLI input into a duration value.
///
/// A positional value starting with `{` is read as a JSON field map, anything
/// else as an ISO 8601 string. Without a positional value the flag parts form
/// an elapsed duration.
pub fn parse_input(value: Option<&str>, parts: ElapsedParts) -> Result<DurationValue> {
    match value {
        Some(_) if !parts.is_empty() => {
            anyhow::bail!(
                "Give either a duration value or --days/--hours/--minutes/--seconds, not both"
            )
        }
        Some(v) if v.trim_start().starts_with('{') => {
            let fields: FieldMap =
                serde_json::from_str(v).context("Failed to parse field map JSON")?;
            Ok(DurationValue::Fields(fields))
        }
        Some(v) => Ok(DurationValue::iso(v)),
        None if parts.is_empty() => {
            anyhow::bail!(
                "No duration given. Pass an ISO 8601 value (e.g. PT1H30M) or --minutes 90"
            )
        }
        None => Ok(DurationValue::Elapsed(parts.to_duration()?)),
    }
}

/// Reference instant for year/month components; `None` means now.
pub fn parse_reference(at: Option<&str>) -> Result<DurationConverter> {
    match at {
        Some(s) => {
            let reference = DateTime::parse_from_rfc3339(s)
                .with_context(|| format!("Invalid --at '{}', expected RFC 3339", s))?
                .with_timezone(&Utc);
            Ok(DurationConverter::at(reference))
        }
        None => Ok(DurationConverter::new()),
    }
}

pub fn render(converted: &Converted, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let value = match converted {
                Converted::Elapsed(d) => serde_json::json!({
                    "secs": d.as_secs(),
                    "nanos": d.subsec_nanos(),
                    "display": format_elapsed(*d),
                }),
                other => serde_json::to_value(other).context("Failed to serialize result")?,
            };
            serde_json::to_string_pretty(&value).context("Failed to serialize result")
        }
        OutputFormat::Text => Ok(match converted {
            Converted::Elapsed(d) => format_elapsed(*d),
            Converted::Iso8601(s) => s.clone(),
            Converted::TotalSeconds(secs) => secs.to_string(),
            Converted::FieldMap(fields) => {
                if fields.is_empty() {
                    "(no components)".to_string()
                } else {
                    fields
                        .iter()
                        .map(|(component, value)| format!("{:<8} {}", component, value))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
        }),
    }
}

pub fn convert(
    config: &Config,
    value: Option<&str>,
    parts: ElapsedParts,
    to: Option<Representation>,
    at: Option<&str>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let input = parse_input(value, parts)?;
    let converter = parse_reference(at)?;
    let to = to.unwrap_or(config.output.representation);
    let format = format.unwrap_or(config.output.format);

    let converted = converter
        .convert(&input, to)
        .with_context(|| format!("Failed to convert to {}", to))?;

    println!("{}", render(&converted, format)?);
    Ok(())
}

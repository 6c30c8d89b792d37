use crate::duration::calendar::CalendarLengths;
use crate::duration::fields::{Component, FieldMap};
use crate::duration::iso8601;
use crate::error::DurationError;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A duration as handed to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationValue {
    /// Concrete span of time, no calendar components.
    Elapsed(Duration),
    /// ISO 8601 duration string, validated on conversion.
    Iso8601(String),
    /// Component set as produced by [`Representation::FieldMap`].
    Fields(FieldMap),
}

impl DurationValue {
    pub fn iso(s: impl Into<String>) -> Self {
        DurationValue::Iso8601(s.into())
    }
}

impl From<Duration> for DurationValue {
    fn from(d: Duration) -> Self {
        DurationValue::Elapsed(d)
    }
}

impl From<FieldMap> for DurationValue {
    fn from(fields: FieldMap) -> Self {
        DurationValue::Fields(fields)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    Elapsed,
    #[value(name = "iso8601")]
    #[serde(rename = "iso8601")]
    Iso8601,
    FieldMap,
    TotalSeconds,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::Elapsed => "elapsed",
            Representation::Iso8601 => "iso8601",
            Representation::FieldMap => "field-map",
            Representation::TotalSeconds => "total-seconds",
        };
        f.write_str(name)
    }
}

/// Result of a conversion, one variant per [`Representation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    Elapsed(Duration),
    Iso8601(String),
    FieldMap(FieldMap),
    TotalSeconds(f64),
}

impl Converted {
    pub fn into_iso8601(self) -> Option<String> {
        match self {
            Converted::Iso8601(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_total_seconds(&self) -> Option<f64> {
        match self {
            Converted::TotalSeconds(secs) => Some(*secs),
            _ => None,
        }
    }

    pub fn into_field_map(self) -> Option<FieldMap> {
        match self {
            Converted::FieldMap(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Converts durations between representations.
///
/// Years and months are measured from a reference instant: the real length
/// of "one year from now" or "one month from now". Unless pinned with
/// [`DurationConverter::at`], the reference is the current time, read once
/// per conversion and only when a year or month component is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationConverter {
    reference: Option<DateTime<Utc>>,
}

impl DurationConverter {
    pub fn new() -> Self {
        Self { reference: None }
    }

    pub fn at(reference: DateTime<Utc>) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    pub fn reference(&self) -> Option<DateTime<Utc>> {
        self.reference
    }

    pub fn convert(
        &self,
        value: &DurationValue,
        to: Representation,
    ) -> Result<Converted, DurationError> {
        match value {
            DurationValue::Elapsed(elapsed) => Ok(convert_elapsed(*elapsed, to)),
            DurationValue::Iso8601(input) => {
                let fields = iso8601::parse(input)?;
                if to == Representation::Iso8601 {
                    log::debug!("{} is already ISO 8601", input);
                    return Ok(Converted::Iso8601(input.clone()));
                }
                self.convert_fields(&fields, to)
                    .ok_or_else(|| DurationError::OutOfRange {
                        input: input.clone(),
                    })
            }
            DurationValue::Fields(fields) => {
                self.convert_fields(fields, to)
                    .ok_or_else(|| DurationError::OutOfRange {
                        input: iso8601::format(fields),
                    })
            }
        }
    }

    /// `None` when the total does not fit in 64 bits of seconds.
    fn convert_fields(&self, fields: &FieldMap, to: Representation) -> Option<Converted> {
        let converted = match to {
            Representation::FieldMap => Converted::FieldMap(fields.clone()),
            Representation::Iso8601 => Converted::Iso8601(iso8601::format(fields)),
            Representation::TotalSeconds => {
                Converted::TotalSeconds(self.total_secs(fields)? as f64)
            }
            Representation::Elapsed => {
                Converted::Elapsed(Duration::from_secs(self.total_secs(fields)?))
            }
        };
        Some(converted)
    }

    fn total_secs(&self, fields: &FieldMap) -> Option<u64> {
        let mut calendar: Option<CalendarLengths> = None;
        let mut total: u64 = 0;

        for (component, value) in fields.iter() {
            if value == 0 {
                continue;
            }
            let unit = match component.fixed_seconds() {
                Some(unit) => unit,
                None => {
                    let lengths = match calendar {
                        Some(lengths) => lengths,
                        None => {
                            let reference = self.reference.unwrap_or_else(Utc::now);
                            let lengths = CalendarLengths::from_reference(reference)?;
                            calendar = Some(lengths);
                            lengths
                        }
                    };
                    if component == Component::Years {
                        lengths.year_secs
                    } else {
                        lengths.month_secs
                    }
                }
            };
            total = total.checked_add(value.checked_mul(unit)?)?;
        }
        Some(total)
    }
}

fn convert_elapsed(elapsed: Duration, to: Representation) -> Converted {
    match to {
        Representation::Elapsed => Converted::Elapsed(elapsed),
        Representation::TotalSeconds => Converted::TotalSeconds(elapsed.as_secs_f64()),
        Representation::FieldMap => Converted::FieldMap(elapsed_fields(elapsed)),
        Representation::Iso8601 => Converted::Iso8601(iso8601::format(&elapsed_fields(elapsed))),
    }
}

/// Convert with the current time as reference.
pub fn convert(value: &DurationValue, to: Representation) -> Result<Converted, DurationError> {
    DurationConverter::new().convert(value, to)
}

/// Days, hours, minutes and seconds of an elapsed value, zero entries left
/// out. Sub-second precision is dropped.
fn elapsed_fields(elapsed: Duration) -> FieldMap {
    let secs = elapsed.as_secs();
    [
        (Component::Days, secs / 86_400),
        (Component::Hours, (secs % 86_400) / 3_600),
        (Component::Minutes, (secs % 3_600) / 60),
        (Component::Seconds, secs % 60),
    ]
    .into_iter()
    .filter(|(_, v)| *v != 0)
    .collect()
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One designator of an ISO 8601 duration.
///
/// Variant order is the order components appear in a duration string, so the
/// derived `Ord` keeps a [`FieldMap`] sorted Y, M, W, D, H, M, S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Component {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Component {
    pub const ALL: [Component; 7] = [
        Component::Years,
        Component::Months,
        Component::Weeks,
        Component::Days,
        Component::Hours,
        Component::Minutes,
        Component::Seconds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Component::Years => "Years",
            Component::Months => "Months",
            Component::Weeks => "Weeks",
            Component::Days => "Days",
            Component::Hours => "Hours",
            Component::Minutes => "Minutes",
            Component::Seconds => "Seconds",
        }
    }

    pub fn designator(self) -> char {
        match self {
            Component::Years => 'Y',
            Component::Months | Component::Minutes => 'M',
            Component::Weeks => 'W',
            Component::Days => 'D',
            Component::Hours => 'H',
            Component::Seconds => 'S',
        }
    }

    /// Components written after the `T` separator.
    pub fn is_time(self) -> bool {
        matches!(
            self,
            Component::Hours | Component::Minutes | Component::Seconds
        )
    }

    /// Exact length in seconds for components that have one.
    pub fn fixed_seconds(self) -> Option<u64> {
        match self {
            Component::Weeks => Some(7 * 86_400),
            Component::Days => Some(86_400),
            Component::Hours => Some(3_600),
            Component::Minutes => Some(60),
            Component::Seconds => Some(1),
            Component::Years | Component::Months => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Component set of a duration. A missing entry means the component was not
/// given, which is not the same thing as an explicit zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<Component, u64>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, component: Component, value: u64) -> Self {
        self.insert(component, value);
        self
    }

    pub fn insert(&mut self, component: Component, value: u64) -> Option<u64> {
        self.0.insert(component, value)
    }

    pub fn get(&self, component: Component) -> Option<u64> {
        self.0.get(&component).copied()
    }

    pub fn contains(&self, component: Component) -> bool {
        self.0.contains_key(&component)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in designator order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, u64)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| v == 0)
    }
}

impl FromIterator<(Component, u64)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (Component, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

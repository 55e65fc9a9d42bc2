//! Recurrence cadence vocabulary.

use super::RecurrenceDomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Validated day-of-week index, Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    /// Creates a validated weekday index.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceDomainError::InvalidWeekday`] when the value is
    /// outside `0..=6`.
    pub const fn new(value: u8) -> Result<Self, RecurrenceDomainError> {
        if value > 6 {
            return Err(RecurrenceDomainError::InvalidWeekday(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying index.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for WeekdayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated month index, January = 1 through December = 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthIndex(u8);

impl MonthIndex {
    /// Creates a validated month index.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceDomainError::InvalidMonth`] when the value is
    /// outside `1..=12`.
    pub const fn new(value: u8) -> Result<Self, RecurrenceDomainError> {
        if value == 0 || value > 12 {
            return Err(RecurrenceDomainError::InvalidMonth(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying index.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How often a template spawns instances.
///
/// The workweek shortcut stays a distinct variant with its own persisted
/// literal; it behaves like a Monday-to-Friday custom cadence but keeps what
/// the user picked visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cadence {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Monday through Friday.
    Workweek,
    /// A custom weekday (and optionally month) selection.
    Custom {
        /// Days of the week the cadence runs on.
        days: BTreeSet<WeekdayIndex>,
        /// Months the cadence is limited to; empty means every month.
        #[serde(default)]
        months: BTreeSet<MonthIndex>,
    },
}

impl Cadence {
    /// Creates a custom cadence from raw day and month indices.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceDomainError::EmptyCustomDays`] when no days are
    /// given, or the index errors when a value is out of range.
    pub fn custom(
        days: impl IntoIterator<Item = u8>,
        months: impl IntoIterator<Item = u8>,
    ) -> Result<Self, RecurrenceDomainError> {
        let days = days
            .into_iter()
            .map(WeekdayIndex::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        if days.is_empty() {
            return Err(RecurrenceDomainError::EmptyCustomDays);
        }
        let months = months
            .into_iter()
            .map(MonthIndex::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self::Custom { days, months })
    }

    /// Returns the canonical wire representation of the cadence type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Workweek => "workweek",
            Self::Custom { .. } => "custom",
        }
    }

    /// Returns the weekday selection this cadence is limited to, if any.
    ///
    /// The workweek shortcut expands to Monday through Friday.
    #[must_use]
    pub fn effective_days(&self) -> Option<BTreeSet<WeekdayIndex>> {
        match self {
            Self::Workweek => Some((1..=5).filter_map(|day| WeekdayIndex::new(day).ok()).collect()),
            Self::Custom { days, .. } => Some(days.clone()),
            Self::Daily | Self::Weekly | Self::Monthly => None,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;

use crate::utils::is_plain_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
}

/// A `<time>` such as `0.3s` or `250ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub value: f64,
    pub unit: TimeUnit,
}

impl Time {
    pub const fn seconds(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Seconds,
        }
    }

    pub const fn milliseconds(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Milliseconds,
        }
    }

    /// Only unsigned `<number>ms` and `<number>s` are accepted
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        let (number, unit) = if let Some(number) = s.strip_suffix("ms") {
            (number, TimeUnit::Milliseconds)
        } else if let Some(number) = s.strip_suffix('s') {
            (number, TimeUnit::Seconds)
        } else {
            return None;
        };

        if !is_plain_number(number) {
            return None;
        }

        Some(Self {
            value: number.parse().ok()?,
            unit,
        })
    }

    pub fn as_millis(self) -> f64 {
        match self.unit {
            TimeUnit::Seconds => self.value * 1000.0,
            TimeUnit::Milliseconds => self.value,
        }
    }

    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TimeUnit::Seconds => write!(f, "{}s", self.value),
            TimeUnit::Milliseconds => write!(f, "{}ms", self.value),
        }
    }
}

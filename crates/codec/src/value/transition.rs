use std::fmt;

use crate::utils::split_unnested;

use super::Time;

/// The timing functions the transition editor offers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimingFunction {
    #[default]
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl TimingFunction {
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        Some(match s.to_ascii_lowercase().as_str() {
            "ease" => Self::Ease,
            "linear" => Self::Linear,
            "ease-in" => Self::EaseIn,
            "ease-out" => Self::EaseOut,
            "ease-in-out" => Self::EaseInOut,
            lower => {
                let args = lower.strip_prefix("cubic-bezier(")?.strip_suffix(')')?;
                let points = args
                    .split(',')
                    .map(|arg| arg.trim().parse::<f64>().ok())
                    .collect::<Option<Vec<f64>>>()?;

                match points[..] {
                    [x1, y1, x2, y2] => Self::CubicBezier(x1, y1, x2, y2),
                    _ => return None,
                }
            }
        })
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ease => f.write_str("ease"),
            Self::Linear => f.write_str("linear"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// One transition of a `transition` value: `<property> <duration> <timing> [<delay>]`
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionShorthand {
    pub property: String,
    pub duration: Time,
    pub timing: TimingFunction,
    pub delay: Option<Time>,
}

impl Default for TransitionShorthand {
    fn default() -> Self {
        Self {
            property: "all".to_owned(),
            duration: Time::seconds(0.3),
            timing: TimingFunction::Ease,
            delay: None,
        }
    }
}

impl TransitionShorthand {
    /// Parse a single transition
    ///
    /// The first `<time>` is the duration and the second the delay. A leading
    /// token that is neither a time nor a timing function is the property.
    /// Anything missing keeps its default of `all 0.3s ease`. Unknown tokens
    /// are ignored.
    ///
    /// ```
    /// # use stylekit_codec::{TimingFunction, TransitionShorthand};
    /// let transition = TransitionShorthand::parse("opacity 250ms ease-in 1s");
    /// assert_eq!(transition.property, "opacity");
    /// assert_eq!(transition.timing, TimingFunction::EaseIn);
    /// assert_eq!(transition.to_string(), "opacity 250ms ease-in 1s");
    /// ```
    pub fn parse(value: &str) -> Self {
        let mut transition = Self::default();
        let mut times = 0;

        for (idx, part) in split_unnested(value, char::is_whitespace)
            .into_iter()
            .enumerate()
        {
            if let Some(time) = Time::parse(part) {
                match times {
                    0 => transition.duration = time,
                    1 => transition.delay = Some(time),
                    _ => {}
                }
                times += 1;
            } else if let Some(timing) = TimingFunction::parse(part) {
                transition.timing = timing;
            } else if idx == 0 {
                transition.property = part.to_owned();
            }
        }

        transition
    }

    /// Parse every transition of a comma separated `transition` value. `none`
    /// and the empty string have no transitions.
    pub fn parse_list(value: &str) -> Vec<Self> {
        if value.trim().eq_ignore_ascii_case("none") {
            return Vec::new();
        }

        split_unnested(value, |c| c == ',')
            .into_iter()
            .map(Self::parse)
            .collect()
    }
}

impl fmt::Display for TransitionShorthand {
    /// A zero delay is left out
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.property, self.duration, self.timing)?;

        match self.delay {
            Some(delay) if !delay.is_zero() => write!(f, " {}", delay),
            _ => Ok(()),
        }
    }
}

/// The same transition applied to each of `properties`, or `none` if there
/// are no properties
pub fn build_transition_list<S: AsRef<str>>(
    properties: &[S],
    duration: Time,
    timing: TimingFunction,
    delay: Option<Time>,
) -> String {
    if properties.is_empty() {
        return "none".to_owned();
    }

    properties
        .iter()
        .map(|property| {
            TransitionShorthand {
                property: property.as_ref().to_owned(),
                duration,
                timing,
                delay,
            }
            .to_string()
        })
        .collect::<Vec<String>>()
        .join(", ")
}

use std::fmt;

use crate::utils::split_unnested;

use super::Time;

/// Keywords of the `animation` shorthand that are never an animation name
static ANIMATION_KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "ease",
    "linear",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
    "forwards",
    "backwards",
    "both",
    "none",
    "normal",
    "reverse",
    "alternate",
    "alternate-reverse",
    "running",
    "paused",
};

const DEFAULT_DURATION_MS: f64 = 1000.0;

/// The parts of an `animation` value the editor lets a user change
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationShorthand {
    pub name: String,
    pub duration_ms: f64,
    pub iterations: u32,
    pub infinite: bool,
}

impl AnimationShorthand {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            duration_ms: DEFAULT_DURATION_MS,
            iterations: 1,
            infinite: false,
        }
    }

    /// Parse the first animation of an `animation` value
    ///
    /// The first `<time>` is the duration (1000ms if absent); a bare integer
    /// is the iteration count; functions such as `cubic-bezier()` and the
    /// shorthand's keywords are skipped; any other token is the name, the last
    /// one winning. Returns `None` for `none` or when no name is present.
    ///
    /// ```
    /// # use stylekit_codec::AnimationShorthand;
    /// let animation = AnimationShorthand::parse("spin 1.5s linear infinite").unwrap();
    /// assert_eq!(animation.name, "spin");
    /// assert_eq!(animation.duration_ms, 1500.0);
    /// assert!(animation.infinite);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let first = split_unnested(value, |c| c == ',').into_iter().next()?;

        let mut name = None;
        let mut duration = None;
        let mut iterations = 1;
        let mut infinite = false;

        for part in split_unnested(first, char::is_whitespace) {
            if part.eq_ignore_ascii_case("infinite") {
                infinite = true;
            } else if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(count) = part.parse() {
                    iterations = count;
                }
            } else if let Some(time) = Time::parse(part) {
                duration.get_or_insert(time);
            } else if part.contains('(')
                || ANIMATION_KEYWORDS.contains(part.to_ascii_lowercase().as_str())
            {
                continue;
            } else {
                name = Some(part.to_owned());
            }
        }

        Some(Self {
            name: name?,
            duration_ms: duration.map_or(DEFAULT_DURATION_MS, Time::as_millis),
            iterations,
            infinite,
        })
    }
}

impl fmt::Display for AnimationShorthand {
    /// `<name> <duration>ms ease [infinite] forwards`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms ease", self.name, self.duration_ms)?;

        if self.infinite {
            f.write_str(" infinite")?;
        } else if self.iterations != 1 {
            write!(f, " {}", self.iterations)?;
        }

        f.write_str(" forwards")
    }
}

use std::{cmp::Ordering, fmt};

use indexmap::IndexMap;

use crate::{ast::DeclarationBlock, serializer::Serializer, Options};

/// The position of a keyframe within an animation, as a percentage in `[0, 100]`
///
/// `from` and `to` are normalized to `0` and `100` on parse and are never
/// written back out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeSelector(f64);

impl KeyframeSelector {
    pub const FROM: KeyframeSelector = KeyframeSelector(0.0);
    pub const TO: KeyframeSelector = KeyframeSelector(100.0);

    /// `None` if `percent` is not a finite number in `[0, 100]`
    pub fn new(percent: f64) -> Option<Self> {
        if percent.is_finite() && (0.0..=100.0).contains(&percent) {
            // folds -0.0 into 0.0
            Some(Self(percent + 0.0))
        } else {
            None
        }
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Parse a single selector: `from`, `to` or a percentage
    ///
    /// When `require_percent_sign` is false a bare number is accepted as well,
    /// which is how frame maps returned by the backend are keyed.
    pub(crate) fn parse(text: &str, require_percent_sign: bool) -> Option<Self> {
        let text = text.trim();

        if text.eq_ignore_ascii_case("from") {
            return Some(Self::FROM);
        }

        if text.eq_ignore_ascii_case("to") {
            return Some(Self::TO);
        }

        let number = match text.strip_suffix('%') {
            Some(number) => number,
            None if require_percent_sign => return None,
            None => text,
        };

        let mut chars = number.chars().peekable();
        let mut buffer = String::new();

        while let Some(c @ '0'..='9') = chars.peek().copied() {
            buffer.push(c);
            chars.next();
        }

        if chars.peek() == Some(&'.') {
            buffer.push('.');
            chars.next();

            while let Some(c @ '0'..='9') = chars.peek().copied() {
                buffer.push(c);
                chars.next();
            }
        }

        if chars.next().is_some() || !buffer.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        Self::new(buffer.parse().ok()?)
    }
}

impl Eq for KeyframeSelector {}

impl PartialOrd for KeyframeSelector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyframeSelector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for KeyframeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframe {
    pub selector: KeyframeSelector,
    pub declarations: DeclarationBlock,
}

impl Keyframe {
    pub fn new(selector: KeyframeSelector, declarations: DeclarationBlock) -> Self {
        Self {
            selector,
            declarations,
        }
    }
}

/// The two shapes keyframes arrive in
#[derive(Debug, Clone)]
pub enum KeyframesSource<'a> {
    /// The body of a `@keyframes` rule, e.g. `from { opacity: 0; } to { opacity: 1; }`.
    /// A complete `@keyframes name { ... }` rule is accepted as well.
    Css(&'a str),

    /// Frames already split by selector, e.g. `[("0%", "opacity: 0;")]`
    Frames(Vec<(&'a str, &'a str)>),
}

impl<'a> KeyframesSource<'a> {
    /// Borrow frames from any map-like collection of selector to declaration text
    pub fn from_frames<I, K, V>(frames: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: AsRef<str> + ?Sized + 'a,
        V: AsRef<str> + ?Sized + 'a,
    {
        KeyframesSource::Frames(
            frames
                .into_iter()
                .map(|(k, v)| (k.as_ref(), v.as_ref()))
                .collect(),
        )
    }
}

impl<'a> From<&'a str> for KeyframesSource<'a> {
    fn from(css: &'a str) -> Self {
        KeyframesSource::Css(css)
    }
}

impl<'a> From<&'a String> for KeyframesSource<'a> {
    fn from(css: &'a String) -> Self {
        KeyframesSource::Css(css)
    }
}

impl<'a> From<Vec<(&'a str, &'a str)>> for KeyframesSource<'a> {
    fn from(frames: Vec<(&'a str, &'a str)>) -> Self {
        KeyframesSource::Frames(frames)
    }
}

/// The frames of one named animation, kept in ascending selector order
///
/// Frames sharing a selector are all retained, in the order they were added.
/// Use [`KeyframeSet::dedup`] to collapse them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyframeSet(Vec<Keyframe>);

impl KeyframeSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse keyframes without reporting dropped frames anywhere
    ///
    /// ```
    /// # use stylekit_codec::KeyframeSet;
    /// let frames = KeyframeSet::parse("to { opacity: 1 } from { opacity: 0 }");
    /// assert_eq!(frames.len(), 2);
    /// assert_eq!(frames.iter().next().unwrap().selector.percent(), 0.0);
    /// ```
    pub fn parse<'a, S: Into<KeyframesSource<'a>>>(source: S) -> Self {
        crate::parse_keyframes(source, &Options::silent())
    }

    /// Build a set from frames in any order. The result is stably sorted.
    pub fn from_frames<I: IntoIterator<Item = Keyframe>>(frames: I) -> Self {
        let mut frames: Vec<Keyframe> = frames.into_iter().collect();
        frames.sort_by(|a, b| a.selector.cmp(&b.selector));
        Self(frames)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Keyframe> {
        self.0.iter_mut()
    }

    /// The first frame at `percent`
    pub fn get(&self, percent: f64) -> Option<&Keyframe> {
        self.0.iter().find(|frame| frame.selector.percent() == percent)
    }

    pub fn get_mut(&mut self, percent: f64) -> Option<&mut Keyframe> {
        self.0
            .iter_mut()
            .find(|frame| frame.selector.percent() == percent)
    }

    /// Add a frame after any existing frames with the same selector
    pub fn push(&mut self, frame: Keyframe) {
        let idx = self
            .0
            .partition_point(|existing| existing.selector <= frame.selector);
        self.0.insert(idx, frame);
    }

    /// Add a new frame at `percent`, seeded with the declarations of the
    /// closest frame before it, or failing that the closest one after it.
    /// An empty set seeds the frame with `opacity: 1`.
    ///
    /// Returns `false` without modifying the set if `percent` is out of range
    /// or already has a frame.
    pub fn insert_frame(&mut self, percent: f64) -> bool {
        let Some(selector) = KeyframeSelector::new(percent) else {
            return false;
        };

        if self.get(percent).is_some() {
            return false;
        }

        let before = self.0.iter().rev().find(|frame| frame.selector < selector);
        let after = self.0.iter().find(|frame| frame.selector > selector);

        let declarations = match before.or(after) {
            Some(source) => source.declarations.clone(),
            None => DeclarationBlock::from_iter([("opacity", "1")]),
        };

        self.push(Keyframe::new(selector, declarations));

        true
    }

    /// Remove every frame at `percent`
    ///
    /// Returns `false` without modifying the set if nothing matches, or if it
    /// would leave the set without any frames.
    pub fn remove_frame(&mut self, percent: f64) -> bool {
        let remaining = self
            .0
            .iter()
            .filter(|frame| frame.selector.percent() != percent)
            .count();

        if remaining == self.0.len() || remaining == 0 {
            return false;
        }

        self.0.retain(|frame| frame.selector.percent() != percent);

        true
    }

    /// Collapse frames sharing a selector, keeping the last of each
    pub fn dedup(&mut self) {
        let mut deduped: Vec<Keyframe> = Vec::with_capacity(self.0.len());

        for frame in self.0.drain(..) {
            match deduped.last_mut() {
                Some(last) if last.selector == frame.selector => *last = frame,
                _ => deduped.push(frame),
            }
        }

        self.0 = deduped;
    }

    /// The frames in the shape the backend stores them:
    /// `"0%" => "opacity: 0; transform: none;"`
    ///
    /// Frames without declarations are skipped. If several frames share a
    /// selector the last one wins.
    pub fn to_frame_map(&self) -> IndexMap<String, String> {
        self.0
            .iter()
            .filter(|frame| !frame.declarations.is_empty())
            .map(|frame| {
                let declarations = frame
                    .declarations
                    .iter()
                    .map(|(property, value)| format!("{}: {};", property, value))
                    .collect::<Vec<String>>()
                    .join(" ");

                (frame.selector.to_string(), declarations)
            })
            .collect()
    }

    /// Serialize as `@keyframes <name> { ... }` in the expanded style
    pub fn to_css(&self, name: &str) -> String {
        let options = Options::silent();
        let mut serializer = Serializer::new(&options);
        serializer.visit_keyframes(name, self);
        serializer.finish()
    }
}

impl FromIterator<Keyframe> for KeyframeSet {
    fn from_iter<T: IntoIterator<Item = Keyframe>>(iter: T) -> Self {
        KeyframeSet::from_frames(iter)
    }
}

impl IntoIterator for KeyframeSet {
    type Item = Keyframe;
    type IntoIter = std::vec::IntoIter<Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyframeSet {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Whether `name` can be saved as an animation name: an ASCII letter
/// followed by ASCII letters, digits, `_` or `-`
pub fn is_valid_keyframes_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(..) | None => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

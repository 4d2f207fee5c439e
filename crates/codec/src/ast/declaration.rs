use std::fmt;

use indexmap::{map, IndexMap};

use crate::{parse::DeclarationParser, serializer::Serializer, Options};

/// The parsed contents of a rule body: property names mapped to values
///
/// Properties are unique and keep the position at which they were first
/// inserted. Inserting an existing property replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBlock(IndexMap<String, String>);

impl DeclarationBlock {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Parse declaration text without reporting dropped fragments anywhere
    ///
    /// See [`crate::parse_declarations`] to have them reported to a [`crate::Logger`]
    ///
    /// ```
    /// # use stylekit_codec::DeclarationBlock;
    /// let block = DeclarationBlock::parse("color: red; font-size: 16px");
    /// assert_eq!(block.get("font-size"), Some("16px"));
    /// ```
    pub fn parse(text: &str) -> Self {
        crate::parse_declarations(text, &Options::silent())
    }

    pub(crate) fn parse_with(
        text: &str,
        file_name: &str,
        options: &Options,
    ) -> DeclarationBlock {
        let mut map = codemap::CodeMap::new();
        let file = map.add_file(file_name.to_owned(), text.to_owned());
        let lexer = crate::lexer::Lexer::new_from_file(&file);

        DeclarationParser::new(lexer, &map, options).parse_declarations()
    }

    /// Insert a declaration, returning the value it replaced
    ///
    /// Both sides are trimmed. Declarations with an empty side are ignored,
    /// exactly as they would be when parsed.
    pub fn insert<P: Into<String>, V: Into<String>>(&mut self, property: P, value: V) -> Option<String> {
        let property = property.into();
        let value = value.into();
        let (property, value) = (property.trim(), value.trim());

        if property.is_empty() || value.is_empty() {
            return None;
        }

        self.0.insert(property.to_owned(), value.to_owned())
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Remove a declaration, keeping the order of the remaining ones
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.0.shift_remove(property)
    }

    /// Rename a property in place. Does nothing if `from` does not exist or
    /// `to` is already declared.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        let to = to.trim();
        if to.is_empty() || self.0.contains_key(to) {
            return false;
        }

        let Some(idx) = self.0.get_index_of(from) else {
            return false;
        };

        let Some((_, value)) = self.0.shift_remove_index(idx) else {
            return false;
        };

        self.0.shift_insert(idx, to.to_owned(), value);

        true
    }

    /// The first of `base`, `base-1`, `base-2`, ... not already declared
    pub fn unique_property_name(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_owned();
        }

        (1..)
            .map(|n| format!("{}-{}", base, n))
            .find(|name| !self.contains(name))
            .unwrap_or_else(|| base.to_owned())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize in the expanded style
    pub fn to_css(&self) -> String {
        let options = Options::silent();
        let mut serializer = Serializer::new(&options);
        serializer.visit_declarations(self);
        serializer.finish()
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for DeclarationBlock {
    fn from_iter<T: IntoIterator<Item = (P, V)>>(iter: T) -> Self {
        let mut block = DeclarationBlock::new();
        for (property, value) in iter {
            block.insert(property, value);
        }
        block
    }
}

impl IntoIterator for DeclarationBlock {
    type Item = (String, String);
    type IntoIter = map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::DeclarationBlock;

    #[test]
    fn rename_keeps_position() {
        let mut block = DeclarationBlock::parse("a: 1; b: 2; c: 3");
        assert!(block.rename("b", "z"));

        let names: Vec<&str> = block.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["a", "z", "c"]);
        assert_eq!(block.get("z"), Some("2"));
    }

    #[test]
    fn rename_onto_existing_property_is_refused() {
        let mut block = DeclarationBlock::parse("a: 1; b: 2");
        assert!(!block.rename("a", "b"));
        assert_eq!(block.get("a"), Some("1"));
    }

    #[test]
    fn unique_property_name_counts_up() {
        let block = DeclarationBlock::parse("color: red; color-1: blue");
        assert_eq!(block.unique_property_name("margin"), "margin");
        assert_eq!(block.unique_property_name("color"), "color-2");
    }

    #[test]
    fn insert_ignores_empty_sides() {
        let mut block = DeclarationBlock::new();
        assert_eq!(block.insert("  ", "red"), None);
        assert_eq!(block.insert("color", " "), None);
        assert!(block.is_empty());
    }
}

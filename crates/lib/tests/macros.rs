use std::{
    borrow::Cow,
    cell::RefCell,
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use stylekit::{codemap::SpanLoc, Fs, Logger};

/// Parse a declaration block and verify how it is written back out
#[macro_export]
macro_rules! test {
    (@base $( #[$attr:meta] ),*$func:ident, $input:expr, $output:expr, $options:expr) => {
        $(#[$attr])*
        #[test]
        #[allow(non_snake_case)]
        fn $func() {
            let options = $options;
            let block = stylekit::parse_declarations($input, &options);
            assert_eq!(
                String::from($output),
                stylekit::serialize_declarations(&block, &options)
            );
        }
    };
    ($( #[$attr:meta] ),*$func:ident, $input:expr, $output:expr, $options:expr) => {
        test!(@base $(#[$attr])* $func, $input, $output, $options);
    };
    ($( #[$attr:meta] ),*$func:ident, $input:expr, $output:expr) => {
        test!(@base $(#[$attr])* $func, $input, $output, stylekit::Options::default());
    };
}

/// Parse keyframes and verify how they are written back out, always under the
/// animation name `a`
#[macro_export]
macro_rules! keyframes {
    (@base $( #[$attr:meta] ),*$func:ident, $input:expr, $output:expr, $options:expr) => {
        $(#[$attr])*
        #[test]
        #[allow(non_snake_case)]
        fn $func() {
            let options = $options;
            let frames = stylekit::parse_keyframes($input, &options);
            assert_eq!(
                String::from($output),
                stylekit::serialize_keyframes("a", &frames, &options)
            );
        }
    };
    ($( #[$attr:meta] ),*$func:ident, $input:expr, $output:expr, $options:expr) => {
        keyframes!(@base $(#[$attr])* $func, $input, $output, $options);
    };
    ($( #[$attr:meta] ),*$func:ident, $input:expr, $output:expr) => {
        keyframes!(@base $(#[$attr])* $func, $input, $output, stylekit::Options::default());
    };
}

/// Verify the prefix, color and suffix found in a value
#[macro_export]
macro_rules! extract {
    ($( #[$attr:meta] ),*$func:ident, $input:expr, $prefix:expr, $color:expr, $suffix:expr) => {
        $(#[$attr])*
        #[test]
        #[allow(non_snake_case)]
        fn $func() {
            let found = stylekit::extract_color($input)
                .expect(concat!("no color found in ", $input));
            assert_eq!(
                ($prefix, $color, $suffix),
                (found.prefix.as_str(), found.color.as_str(), found.suffix.as_str())
            );
        }
    };
}

/// Verify that no color is found anywhere in a value
#[macro_export]
macro_rules! no_color {
    ($( #[$attr:meta] ),*$func:ident, $input:expr) => {
        $(#[$attr])*
        #[test]
        #[allow(non_snake_case)]
        fn $func() {
            assert_eq!(None, stylekit::extract_color($input));
        }
    };
}

/// Create a temporary file with the given name
/// and contents.
///
/// This must be a macro rather than a function
/// because the tempfile will be deleted when it
/// exits scope
#[macro_export]
macro_rules! tempfile {
    ($name:literal, $content:expr) => {
        let mut f = tempfile::Builder::new()
            .rand_bytes(0)
            .prefix("")
            .suffix($name)
            .tempfile_in("")
            .unwrap();
        f.write_all(AsRef::<[u8]>::as_ref(&$content)).unwrap();
    };
}

/// Does not properly implement path resolution, paths are only ever compared
/// byte for byte
#[derive(Debug)]
pub struct TestFs {
    files: BTreeMap<PathBuf, Cow<'static, [u8]>>,
}

#[allow(unused)]
impl TestFs {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    pub fn add_file(&mut self, name: &'static str, contents: &'static str) {
        self.files
            .insert(PathBuf::from(name), Cow::Borrowed(contents.as_bytes()));
    }

    pub fn add_bytes(&mut self, name: &'static str, contents: &'static [u8]) {
        self.files.insert(PathBuf::from(name), Cow::Borrowed(contents));
    }
}

#[allow(unused)]
impl Fs for TestFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .map(|contents| contents.to_vec())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not in TestFs"))
    }
}

#[derive(Debug, Default)]
struct TestLoggerState {
    debug_messages: Vec<String>,
    warning_messages: Vec<String>,
    warning_lines: Vec<usize>,
}

#[derive(Debug, Default)]
pub struct TestLogger(RefCell<TestLoggerState>);

#[allow(unused)]
impl TestLogger {
    pub fn debug_messages(&self) -> Vec<String> {
        self.0.borrow().debug_messages.clone()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.0.borrow().warning_messages.clone()
    }

    /// One-based line of every warning, in the order they were logged
    pub fn warning_lines(&self) -> Vec<usize> {
        self.0.borrow().warning_lines.clone()
    }
}

impl Logger for TestLogger {
    fn debug(&self, _location: SpanLoc, message: &str) {
        self.0.borrow_mut().debug_messages.push(message.into());
    }

    fn warning(&self, location: SpanLoc, message: &str) {
        let mut state = self.0.borrow_mut();
        state.warning_messages.push(message.into());
        state.warning_lines.push(location.begin.line + 1);
    }
}

use crate::{Fs, Logger, NullLogger, StdFs, StdLogger};

/// Configuration for parsing and serializing
///
/// The simplest usage is `stylekit::Options::default()`; however, a builder pattern
/// is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) fs: &'a dyn Fs,
    pub(crate) logger: &'a dyn Logger,
    pub(crate) style: OutputStyle,
    pub(crate) quiet: bool,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            fs: &StdFs,
            logger: &StdLogger,
            style: OutputStyle::Expanded,
            quiet: false,
        }
    }
}

impl<'a> Options<'a> {
    /// Options which never log anything. Used by the convenience constructors
    /// on [`DeclarationBlock`](crate::DeclarationBlock) and
    /// [`KeyframeSet`](crate::KeyframeSet).
    pub(crate) fn silent() -> Options<'static> {
        Options {
            fs: &StdFs,
            logger: &NullLogger,
            style: OutputStyle::Expanded,
            quiet: true,
        }
    }

    /// This option allows you to control the file system used by the `*_from_path`
    /// entry points.
    ///
    /// By default, it uses [`StdFs`], which is backed by [`std::fs`].
    #[must_use]
    #[inline]
    pub fn fs(mut self, fs: &'a dyn Fs) -> Self {
        self.fs = fs;
        self
    }

    /// This option allows you to define how log events should be handled
    ///
    /// Be default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// `stylekit` currently offers 2 different output styles
    ///
    ///  - [`OutputStyle::Expanded`] writes each declaration on its own line.
    ///  - [`OutputStyle::Compressed`] removes as many extra characters as possible
    ///    and writes everything on a single line.
    ///
    /// By default, output is expanded.
    #[must_use]
    #[inline]
    pub const fn style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// This flag stops dropped declarations and frames from being reported to
    /// the [`crate::Logger`].
    ///
    /// By default, this value is `false` and warnings are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub(crate) fn is_compressed(&self) -> bool {
        matches!(self.style, OutputStyle::Compressed)
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    /// This mode writes each declaration on its own line.
    ///
    /// This is the default output.
    Expanded,

    /// Ideal for payloads sent over the wire, this mode removes as many extra
    /// characters as possible and writes everything on a single line.
    Compressed,
}

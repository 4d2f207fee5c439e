use std::{
    error::Error,
    fmt::{self, Display},
    io,
    string::FromUtf8Error,
};

pub type CodecResult<T> = Result<T, Box<CodecError>>;

/// The only failures this crate surfaces come from reading input, never from
/// parsing it. Malformed CSS is dropped and reported to the [`crate::Logger`].
#[derive(Debug)]
pub struct CodecError {
    kind: CodecErrorKind,
}

impl CodecError {
    pub fn kind(&self) -> PublicCodecErrorKind {
        match &self.kind {
            CodecErrorKind::IoError(err) => PublicCodecErrorKind::IoError(err.kind()),
            CodecErrorKind::FromUtf8Error(message) => {
                PublicCodecErrorKind::FromUtf8Error(message.clone())
            }
        }
    }
}

/// A subset of the error information, exposed to callers that need to match on it
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PublicCodecErrorKind {
    IoError(io::ErrorKind),
    FromUtf8Error(String),
}

#[derive(Debug)]
enum CodecErrorKind {
    IoError(io::Error),
    FromUtf8Error(String),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CodecErrorKind::IoError(err) => write!(f, "Error: {}", err),
            CodecErrorKind::FromUtf8Error(message) => write!(f, "Error: {}", message),
        }
    }
}

impl From<io::Error> for Box<CodecError> {
    #[inline]
    fn from(error: io::Error) -> Box<CodecError> {
        Box::new(CodecError {
            kind: CodecErrorKind::IoError(error),
        })
    }
}

impl From<FromUtf8Error> for Box<CodecError> {
    #[inline]
    fn from(error: FromUtf8Error) -> Box<CodecError> {
        let byte = error.as_bytes()[error.utf8_error().valid_up_to()];
        Box::new(CodecError {
            kind: CodecErrorKind::FromUtf8Error(format!(
                "Invalid UTF-8 character \"\\x{:X?}\"",
                byte
            )),
        })
    }
}

impl Error for CodecError {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            CodecErrorKind::IoError(err) => Some(err),
            CodecErrorKind::FromUtf8Error(..) => None,
        }
    }
}

pub(crate) use base::BaseParser;
pub(crate) use declarations::DeclarationParser;
pub(crate) use keyframes::KeyframesParser;

mod base;
mod declarations;
mod keyframes;

pub use declaration::DeclarationBlock;
pub use keyframes::{
    is_valid_keyframes_name, Keyframe, KeyframeSelector, KeyframeSet, KeyframesSource,
};

mod declaration;
mod keyframes;

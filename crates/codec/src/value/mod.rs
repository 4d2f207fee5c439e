//! Structured views of the `animation` and `transition` shorthands, as edited
//! by the transition editor

pub use animation::AnimationShorthand;
pub use time::{Time, TimeUnit};
pub use transition::{build_transition_list, TimingFunction, TransitionShorthand};

mod animation;
mod time;
mod transition;

// extensions/mod.rs
//
// Time-based animation helpers. Pure math plus per-run bookkeeping;
// nothing here knows about particles or surfaces.

pub mod easing;
pub mod tween;

pub use easing::{Easing, lerp, BACK_OVERSHOOT};
pub use tween::{Tween, TweenStatus};

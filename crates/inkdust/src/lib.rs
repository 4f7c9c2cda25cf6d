pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{InkConfig, ParticleConfig, PointerConfig, StageConfig, TextConfig, DEFAULT_SEED};
pub use api::error::{Error, Result};
pub use api::phrases::{Phrase, PhraseSet};
pub use components::particle::{Particle, ParticlePhase};
pub use crate::core::rng::Rng;
pub use crate::core::schedule::Scheduler;
pub use crate::core::time::FrameLimiter;
pub use crate::core::vector::PolarExt;
pub use input::queue::{InputEvent, InputQueue, PointerTracker};
pub use renderer::raster::RasterSurface;
pub use renderer::traits::{AlphaMask, Fill, Font, Surface};
pub use systems::field::ParticleField;
pub use systems::stage::Stage;
pub use systems::text::TextSampler;

pub use extensions::{Easing, lerp, Tween, TweenStatus};

//! A single dust particle: one ink sample of the rendered phrase.
//!
//! Lifecycle: `Pending → FadingIn → Idle ⇄ FadingOut → Dead`. The particle
//! never removes itself; its owner prunes it once [`Particle::is_dead`] holds.

use glam::Vec2;

use crate::api::config::ParticleConfig;
use crate::api::error::Result;
use crate::core::rng::Rng;
use crate::core::vector::PolarExt;
use crate::extensions::easing::Easing;
use crate::extensions::tween::Tween;
use crate::renderer::traits::{Fill, Surface};

/// Radius and alpha at or below this count as gone.
pub const DEAD_EPSILON: f32 = 0.01;

/// Observable phase of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticlePhase {
    /// Waiting out its fade-in delay.
    Pending,
    FadingIn,
    /// Settled on its anchor; the only phase a pointer can disturb.
    Idle,
    FadingOut,
    Dead,
}

/// Result of [`Particle::distance_to`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
    pub distance: f32,
}

#[derive(Debug, Clone)]
pub struct Particle {
    color: String,

    initial_pos: Vec2,
    current_pos: Vec2,
    goal_pos: Vec2,

    initial_radius: f32,
    current_radius: f32,
    goal_radius: f32,
    max_radius: f32,

    initial_alpha: f32,
    current_alpha: f32,
    goal_alpha: f32,

    fade_in_duration: f64,
    fade_out_duration: f64,
    tween: Tween,
    /// Set when the first animation run ends; never cleared.
    has_faded_in: bool,
    fading_out: bool,
}

impl Particle {
    /// Create a particle anchored at `anchor` and schedule its fade-in.
    ///
    /// The start position is jittered up to `random_spread` per axis, the
    /// resting radius is drawn from `[min_radius, max_radius)`, and the fade-in
    /// begins after a delay drawn from `[fade_in_delay / 2, fade_in_delay]`.
    pub fn new(anchor: Vec2, now: f64, config: &ParticleConfig, rng: &mut Rng) -> Self {
        let spread = config.random_spread;
        let initial_pos = Vec2::new(
            rng.range_f32(anchor.x - spread, anchor.x + spread),
            rng.range_f32(anchor.y - spread, anchor.y + spread),
        );
        let goal_radius = rng.range_f32(config.min_radius, config.max_radius);

        let mut particle = Self {
            color: config.color.clone(),
            initial_pos,
            current_pos: initial_pos,
            goal_pos: anchor,
            initial_radius: 0.0,
            current_radius: 0.0,
            goal_radius,
            max_radius: config.max_radius,
            initial_alpha: 1.0,
            current_alpha: 1.0,
            goal_alpha: 1.0,
            fade_in_duration: config.fade_in_duration,
            fade_out_duration: config.fade_out_duration,
            tween: Tween::new(Easing::QuadOut),
            has_faded_in: false,
            fading_out: false,
        };

        let delay = rng.range_f64_inclusive(config.fade_in_delay / 2.0, config.fade_in_delay);
        particle.fade_in(now + delay);
        particle
    }

    /// Schedule the fade-in run to start at `at`.
    pub fn fade_in(&mut self, at: f64) {
        self.tween.schedule(at, self.fade_in_duration);
    }

    /// Push the particle away and fade it out, starting at `now`.
    ///
    /// The current values become the new start values, so calling this again
    /// mid-flight restarts the run from wherever the particle is.
    pub fn fade_out(&mut self, now: f64, angle: f32, force: f32) {
        let push = Vec2::polar(force, angle);

        self.initial_radius = self.current_radius;
        self.goal_radius = 0.0;

        self.initial_alpha = self.current_alpha;
        self.goal_alpha = 0.0;

        self.initial_pos = self.current_pos;
        self.goal_pos = self.current_pos + push;

        self.fading_out = true;
        self.tween.restart(now, self.fade_out_duration);
    }

    /// Advance the animation to `now`.
    pub fn update(&mut self, now: f64) {
        let finished = self.tween.advance(now);
        if !self.tween.is_running() && !finished {
            return;
        }

        self.current_pos = self.tween.value_vec2(self.initial_pos, self.goal_pos);
        self.current_radius = self
            .tween
            .value(self.initial_radius, self.goal_radius)
            .clamp(0.0, self.max_radius);
        self.current_alpha = self
            .tween
            .value(self.initial_alpha, self.goal_alpha)
            .clamp(0.0, 1.0);

        if finished && !self.has_faded_in {
            // The first run to finish is always the fade-in.
            self.has_faded_in = true;
        }
    }

    /// Idle particles are the only ones a collision may push.
    pub fn can_collide(&self) -> bool {
        self.has_faded_in && !self.tween.is_running()
    }

    pub fn is_dead(&self) -> bool {
        self.has_faded_in
            && self.current_alpha <= DEAD_EPSILON
            && self.current_radius <= DEAD_EPSILON
    }

    /// Offset from the current position to `point`.
    pub fn distance_to(&self, point: Vec2) -> Offset {
        let d = point - self.current_pos;
        Offset {
            dx: d.x,
            dy: d.y,
            distance: d.length(),
        }
    }

    /// Fill a circle at the current position, radius and alpha.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        if self.current_radius <= 0.0 || self.current_alpha <= 0.0 {
            return Ok(());
        }
        surface.fill_circle(
            self.current_pos,
            self.current_radius,
            Fill {
                color: &self.color,
                alpha: self.current_alpha,
            },
        )
    }

    pub fn phase(&self) -> ParticlePhase {
        if self.is_dead() {
            ParticlePhase::Dead
        } else if self.tween.is_running() {
            if self.fading_out {
                ParticlePhase::FadingOut
            } else {
                ParticlePhase::FadingIn
            }
        } else if self.has_faded_in {
            ParticlePhase::Idle
        } else {
            ParticlePhase::Pending
        }
    }

    pub fn position(&self) -> Vec2 {
        self.current_pos
    }

    pub fn initial_position(&self) -> Vec2 {
        self.initial_pos
    }

    pub fn goal_position(&self) -> Vec2 {
        self.goal_pos
    }

    pub fn radius(&self) -> f32 {
        self.current_radius
    }

    pub fn goal_radius(&self) -> f32 {
        self.goal_radius
    }

    pub fn alpha(&self) -> f32 {
        self.current_alpha
    }

    pub fn goal_alpha(&self) -> f32 {
        self.goal_alpha
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_running()
    }

    pub fn has_faded_in(&self) -> bool {
        self.has_faded_in
    }

    pub fn animation_duration(&self) -> f64 {
        self.tween.duration()
    }

    pub fn animation_start_time(&self) -> f64 {
        self.tween.start_time()
    }

    pub fn elapsed(&self) -> f64 {
        self.tween.elapsed()
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

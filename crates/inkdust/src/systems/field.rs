//! The particle field: population lifecycle, pointer collisions, per-frame
//! update and draw.
//!
//! A population cycle starts when the field samples a phrase and spawns one
//! particle per anchor. The pointer knocks idle particles away; once no more
//! than [`REPOPULATE_RATIO`] of the population is left, the survivors are
//! dispersed and the field unpopulates itself one fade-out later, after which
//! the owner samples a new phrase.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::config::{InkConfig, ParticleConfig, DEFAULT_SEED};
use crate::api::error::Result;
use crate::api::phrases::PhraseSet;
use crate::components::particle::Particle;
use crate::core::rng::Rng;
use crate::core::schedule::Scheduler;
use crate::input::queue::OFFSCREEN;
use crate::renderer::traits::Surface;
use crate::systems::text::TextSampler;

/// Share of the baseline population at or below which the field disperses.
pub const REPOPULATE_RATIO: f64 = 0.05;
/// Push strength range for collisions and dispersal, `[min, max)`.
pub const PUSH_FORCE: (f32, f32) = (2.0, 5.0);

/// Deferred field actions, tagged with the generation that scheduled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Unpopulate { generation: u64 },
}

pub struct ParticleField {
    particles: Vec<Particle>,
    /// Particle count right after the last population.
    baseline: usize,
    pointer: Vec2,
    pointer_radius: f32,
    populated: bool,
    /// Survivors have been told to fade out; waiting for the unpopulate event.
    dispersing: bool,
    /// Bumped on every populate and reset.
    generation: u64,
    rng: Rng,
    events: Scheduler<FieldEvent>,
    particle_config: ParticleConfig,
    sampler: TextSampler,
    phrases: PhraseSet,
}

impl ParticleField {
    pub fn new(config: &InkConfig) -> Self {
        Self::with_rng(config, Rng::new(config.stage.seed_or_else(|| DEFAULT_SEED)))
    }

    pub fn with_rng(config: &InkConfig, rng: Rng) -> Self {
        Self {
            particles: Vec::new(),
            baseline: 0,
            pointer: OFFSCREEN,
            pointer_radius: config.pointer.radius,
            populated: false,
            dispersing: false,
            generation: 0,
            rng,
            events: Scheduler::new(),
            particle_config: config.particle.clone(),
            sampler: TextSampler::from_config(&config.text, config.particle.density),
            phrases: config.text.phrases.clone(),
        }
    }

    /// Sample a random phrase on `text_surface` and spawn its particles.
    ///
    /// Does nothing while already populated. Returns the number of particles.
    pub fn populate<S: Surface + ?Sized>(&mut self, text_surface: &mut S, now: f64) -> Result<usize> {
        if self.populated {
            return Ok(self.particles.len());
        }

        let index = self.rng.pick(self.phrases.len());
        let anchors = match self.phrases.pick(index) {
            Some(lines) => {
                let anchors = self.sampler.sample(text_surface, lines)?;
                log::info!("populating phrase {index} {lines:?} with {} particles", anchors.len());
                anchors
            }
            None => {
                log::warn!("no phrases configured; populating an empty field");
                Vec::new()
            }
        };

        Ok(self.populate_with(&anchors, now))
    }

    /// Spawn one particle per anchor, replacing the current population.
    pub fn populate_with(&mut self, anchors: &[Vec2], now: f64) -> usize {
        self.particles.clear();
        self.particles.extend(
            anchors
                .iter()
                .map(|&anchor| Particle::new(anchor, now, &self.particle_config, &mut self.rng)),
        );
        self.baseline = self.particles.len();
        self.generation += 1;
        self.dispersing = false;
        self.populated = true;
        self.baseline
    }

    /// Advance the field to `now` with the pointer at `pointer`.
    pub fn update(&mut self, now: f64, pointer: Vec2) {
        self.pointer = pointer;
        if !self.populated {
            return;
        }

        for event in self.events.take_due(now) {
            match event {
                FieldEvent::Unpopulate { generation } if generation == self.generation => {
                    self.unpopulate();
                }
                FieldEvent::Unpopulate { generation } => {
                    log::debug!("dropping stale unpopulate from generation {generation}");
                }
            }
        }
        if !self.populated {
            return;
        }

        self.particles.retain(|p| !p.is_dead());

        let remaining = self.particles.len();
        if remaining as f64 <= self.baseline as f64 * REPOPULATE_RATIO {
            if remaining == 0 {
                self.unpopulate();
                return;
            }
            if !self.dispersing {
                log::debug!("{remaining} of {} particles left, dispersing", self.baseline);
                for particle in &mut self.particles {
                    let (angle, force) = push(&mut self.rng);
                    particle.fade_out(now, angle, force);
                }
                self.dispersing = true;
                let at = now + self.particle_config.fade_out_duration;
                self.events.schedule(at, FieldEvent::Unpopulate { generation: self.generation });
            }
        }

        for particle in &mut self.particles {
            if !particle.can_collide() {
                continue;
            }
            if particle.distance_to(self.pointer).distance <= particle.radius() + self.pointer_radius {
                let (angle, force) = push(&mut self.rng);
                particle.fade_out(now, angle, force);
            }
        }

        for particle in &mut self.particles {
            particle.update(now);
        }
    }

    /// Draw every live particle.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        for particle in &self.particles {
            particle.draw(surface)?;
        }
        Ok(())
    }

    /// Force a fresh population on the next frame. Pending events are orphaned.
    pub fn reset(&mut self) {
        self.populated = false;
        self.dispersing = false;
        self.generation += 1;
    }

    fn unpopulate(&mut self) {
        log::debug!("generation {} spent", self.generation);
        self.populated = false;
        self.dispersing = false;
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn is_dispersing(&self) -> bool {
        self.dispersing
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn baseline_count(&self) -> usize {
        self.baseline
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn pointer_radius(&self) -> f32 {
        self.pointer_radius
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phrases(&self) -> &PhraseSet {
        &self.phrases
    }
}

/// Random push for a fade-out.
fn push(rng: &mut Rng) -> (f32, f32) {
    (rng.range_f32(0.0, TAU), rng.range_f32(PUSH_FORCE.0, PUSH_FORCE.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::particle::ParticlePhase;
    use crate::renderer::raster::RasterSurface;

    /// Past any fade-in delay plus the fade-in itself.
    const SETTLED: f64 = 3501.0;

    fn field() -> ParticleField {
        ParticleField::new(&InkConfig::default())
    }

    fn crowd(at: Vec2, n: usize) -> Vec<Vec2> {
        (0..n).map(|i| at + Vec2::new(i as f32 * 0.01, 0.0)).collect()
    }

    #[test]
    fn update_is_a_no_op_until_populated() {
        let mut f = field();
        f.update(100.0, Vec2::ZERO);
        assert!(!f.is_populated());
        assert!(f.is_empty());
        assert_eq!(f.pointer(), Vec2::ZERO);
    }

    #[test]
    fn populate_samples_a_phrase() {
        let mut f = field();
        let mut text = RasterSurface::new(1200, 400);
        let n = f.populate(&mut text, 0.0).unwrap();
        assert!(n > 0);
        assert_eq!(f.len(), n);
        assert_eq!(f.baseline_count(), n);
        assert_eq!(f.generation(), 1);
        assert!(f.is_populated());
        assert_eq!(text.inked_pixels(), 0);

        // Already populated: nothing changes.
        assert_eq!(f.populate(&mut text, 10.0).unwrap(), n);
        assert_eq!(f.generation(), 1);
    }

    #[test]
    fn same_seed_same_population() {
        let mut a = field();
        let mut b = field();
        a.populate(&mut RasterSurface::new(900, 300), 0.0).unwrap();
        b.populate(&mut RasterSurface::new(900, 300), 0.0).unwrap();
        let pa: Vec<_> = a.particles().iter().map(|p| p.goal_position()).collect();
        let pb: Vec<_> = b.particles().iter().map(|p| p.goal_position()).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn nearly_spent_field_disperses_then_unpopulates() {
        let mut f = field();
        let mut anchors = crowd(Vec2::new(10.0, 10.0), 96);
        anchors.extend(crowd(Vec2::new(1000.0, 1000.0), 4));
        assert_eq!(f.populate_with(&anchors, 0.0), 100);

        f.update(SETTLED, OFFSCREEN);
        assert!(f.particles().iter().all(|p| p.can_collide()));

        // Knock the crowd of 96 away.
        f.update(4000.0, Vec2::new(10.0, 10.0));
        assert_eq!(
            f.particles().iter().filter(|p| p.phase() == ParticlePhase::FadingOut).count(),
            96
        );

        f.update(5500.0, OFFSCREEN);
        f.update(5600.0, OFFSCREEN);
        assert_eq!(f.len(), 4);
        assert!(f.is_dispersing());
        assert!(f.particles().iter().all(|p| p.phase() == ParticlePhase::FadingOut));

        f.update(7099.0, OFFSCREEN);
        assert!(f.is_populated());
        f.update(7100.0, OFFSCREEN);
        assert!(!f.is_populated());
    }

    #[test]
    fn fully_spent_field_unpopulates_immediately() {
        let mut f = field();
        f.populate_with(&crowd(Vec2::ZERO, 40), 0.0);
        f.update(SETTLED, OFFSCREEN);
        f.update(4000.0, Vec2::ZERO);
        f.update(5501.0, OFFSCREEN);
        assert!(f.particles().iter().all(|p| p.is_dead()));
        assert!(f.is_populated());

        // Nothing survives the prune: no dispersal, no waiting.
        f.update(5502.0, OFFSCREEN);
        assert!(f.is_empty());
        assert!(!f.is_populated());
        assert!(!f.is_dispersing());
    }

    #[test]
    fn survivors_are_not_restarted_every_frame() {
        let mut f = field();
        let mut anchors = crowd(Vec2::ZERO, 39);
        anchors.push(Vec2::new(800.0, 800.0));
        f.populate_with(&anchors, 0.0);
        f.update(SETTLED, OFFSCREEN);
        f.update(4000.0, Vec2::ZERO);
        f.update(5500.0, OFFSCREEN);
        f.update(5600.0, OFFSCREEN);
        assert!(f.is_dispersing());
        let start = f.particles()[0].animation_start_time();
        f.update(5700.0, OFFSCREEN);
        f.update(5800.0, OFFSCREEN);
        assert_eq!(f.particles()[0].animation_start_time(), start);
    }

    #[test]
    fn stale_unpopulate_is_ignored_after_reset() {
        let mut f = field();
        let mut anchors = crowd(Vec2::ZERO, 39);
        anchors.push(Vec2::new(800.0, 800.0));
        f.populate_with(&anchors, 0.0);
        f.update(SETTLED, OFFSCREEN);
        f.update(4000.0, Vec2::ZERO);
        f.update(5500.0, OFFSCREEN);
        f.update(5600.0, OFFSCREEN);
        assert!(f.is_dispersing());

        f.reset();
        assert!(!f.is_populated());
        f.populate_with(&[Vec2::new(50.0, 50.0)], 5700.0);
        f.update(7100.0, OFFSCREEN);
        assert!(f.is_populated());
    }

    #[test]
    fn collision_boundary_is_inclusive() {
        let mut f = field();
        f.populate_with(&[Vec2::ZERO], 0.0);
        f.update(SETTLED, OFFSCREEN);
        let reach = f.particles()[0].radius() + f.pointer_radius();

        f.update(3600.0, Vec2::new(reach, 0.0));
        assert_eq!(f.particles()[0].phase(), ParticlePhase::FadingOut);
    }

    #[test]
    fn just_outside_reach_does_not_collide() {
        let mut f = field();
        f.populate_with(&[Vec2::ZERO], 0.0);
        f.update(SETTLED, OFFSCREEN);
        let reach = f.particles()[0].radius() + f.pointer_radius();

        f.update(3600.0, Vec2::new(reach + 0.01, 0.0));
        assert_eq!(f.particles()[0].phase(), ParticlePhase::Idle);
    }

    #[test]
    fn fading_in_particles_ignore_the_pointer() {
        let mut f = field();
        f.populate_with(&[Vec2::new(20.0, 20.0)], 0.0);
        f.update(1000.0, Vec2::new(20.0, 20.0));
        f.update(1100.0, Vec2::new(20.0, 20.0));
        assert_eq!(f.particles()[0].phase(), ParticlePhase::FadingIn);
    }

    #[test]
    fn empty_sample_is_retried_next_tick() {
        let mut f = field();
        assert_eq!(f.populate_with(&[], 0.0), 0);
        assert!(f.is_populated());
        f.update(16.0, OFFSCREEN);
        assert!(!f.is_populated());
    }

    #[test]
    fn draw_paints_live_particles() {
        let mut f = field();
        f.populate_with(&[Vec2::new(10.0, 10.0), Vec2::new(30.0, 10.0)], 0.0);
        f.update(SETTLED, OFFSCREEN);
        let mut surface = RasterSurface::new(40, 20);
        f.draw(&mut surface).unwrap();
        assert!(surface.alpha_at(9, 9) > 0);
        assert!(surface.alpha_at(29, 9) > 0);
    }
}

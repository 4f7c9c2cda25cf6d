// extensions/easing.rs
//
// Penner easing equations. Every curve has the signature
// `(t, b, c, d) -> value`: elapsed time, beginning value, change in value,
// duration. `t` and `d` share a unit (the engine uses milliseconds).
// Pure math, no state.

use std::f32::consts::PI;

/// Default overshoot for the back curves (10% overshoot).
pub const BACK_OVERSHOOT: f32 = 1.70158;

/// Easing curve selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    QuadIn,
    /// Decelerating to zero velocity. Drives every particle animation.
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    /// Back curves use [`BACK_OVERSHOOT`]; call [`back_in`] etc. directly for another amount.
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Easing {
    /// Evaluate the curve at elapsed time `t` of duration `d`, from `b` by `c`.
    ///
    /// A non-positive duration has already finished, so it returns `b + c`.
    #[inline]
    pub fn ease(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        if d <= 0.0 {
            return b + c;
        }
        match self {
            Easing::Linear => linear(t, b, c, d),
            Easing::QuadIn => quad_in(t, b, c, d),
            Easing::QuadOut => quad_out(t, b, c, d),
            Easing::QuadInOut => quad_in_out(t, b, c, d),
            Easing::CubicIn => cubic_in(t, b, c, d),
            Easing::CubicOut => cubic_out(t, b, c, d),
            Easing::CubicInOut => cubic_in_out(t, b, c, d),
            Easing::QuartIn => quart_in(t, b, c, d),
            Easing::QuartOut => quart_out(t, b, c, d),
            Easing::QuartInOut => quart_in_out(t, b, c, d),
            Easing::QuintIn => quint_in(t, b, c, d),
            Easing::QuintOut => quint_out(t, b, c, d),
            Easing::QuintInOut => quint_in_out(t, b, c, d),
            Easing::SineIn => sine_in(t, b, c, d),
            Easing::SineOut => sine_out(t, b, c, d),
            Easing::SineInOut => sine_in_out(t, b, c, d),
            Easing::ExpoIn => expo_in(t, b, c, d),
            Easing::ExpoOut => expo_out(t, b, c, d),
            Easing::ExpoInOut => expo_in_out(t, b, c, d),
            Easing::CircIn => circ_in(t, b, c, d),
            Easing::CircOut => circ_out(t, b, c, d),
            Easing::CircInOut => circ_in_out(t, b, c, d),
            Easing::ElasticIn => elastic_in(t, b, c, d),
            Easing::ElasticOut => elastic_out(t, b, c, d),
            Easing::ElasticInOut => elastic_in_out(t, b, c, d),
            Easing::BackIn => back_in(t, b, c, d, BACK_OVERSHOOT),
            Easing::BackOut => back_out(t, b, c, d, BACK_OVERSHOOT),
            Easing::BackInOut => back_in_out(t, b, c, d, BACK_OVERSHOOT),
            Easing::BounceIn => bounce_in(t, b, c, d),
            Easing::BounceOut => bounce_out(t, b, c, d),
            Easing::BounceInOut => bounce_in_out(t, b, c, d),
        }
    }

    /// Normalized form: progress `t` in [0, 1] mapped to eased progress.
    /// Can leave [0, 1] for Back and Elastic.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        self.ease(t.clamp(0.0, 1.0), 0.0, 1.0, 1.0)
    }
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ── Linear ───────────────────────────────────────────────────────────────

#[inline]
pub fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

// ── Quadratic ────────────────────────────────────────────────────────────

#[inline]
pub fn quad_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t + b
}

#[inline]
pub fn quad_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

#[inline]
pub fn quad_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

// ── Cubic ────────────────────────────────────────────────────────────────

#[inline]
pub fn cubic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t + b
}

#[inline]
pub fn cubic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

#[inline]
pub fn cubic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

// ── Quartic ──────────────────────────────────────────────────────────────

#[inline]
pub fn quart_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t * t + b
}

#[inline]
pub fn quart_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

#[inline]
pub fn quart_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t + b;
    }
    let t = t - 2.0;
    -c / 2.0 * (t * t * t * t - 2.0) + b
}

// ── Quintic ──────────────────────────────────────────────────────────────

#[inline]
pub fn quint_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t * t * t + b
}

#[inline]
pub fn quint_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t * t * t + 1.0) + b
}

#[inline]
pub fn quint_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t * t * t + 2.0) + b
}

// ── Sinusoidal ───────────────────────────────────────────────────────────

#[inline]
pub fn sine_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * (t / d * (PI / 2.0)).cos() + c + b
}

#[inline]
pub fn sine_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d * (PI / 2.0)).sin() + b
}

#[inline]
pub fn sine_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

// ── Exponential ──────────────────────────────────────────────────────────

#[inline]
pub fn expo_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    c * 2.0_f32.powf(10.0 * (t / d - 1.0)) + b
}

#[inline]
pub fn expo_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == d {
        return b + c;
    }
    c * (-(2.0_f32.powf(-10.0 * t / d)) + 1.0) + b
}

#[inline]
pub fn expo_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * 2.0_f32.powf(10.0 * (t - 1.0)) + b;
    }
    let t = t - 1.0;
    c / 2.0 * (-(2.0_f32.powf(-10.0 * t)) + 2.0) + b
}

// ── Circular ─────────────────────────────────────────────────────────────

#[inline]
pub fn circ_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

#[inline]
pub fn circ_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

#[inline]
pub fn circ_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    let t = t - 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

// ── Elastic ──────────────────────────────────────────────────────────────
//
// Amplitude is the full change `c` and the period 0.3·d (0.45·d for in/out),
// which puts the phase shift at a quarter period.

#[inline]
pub fn elastic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    let t = t - 1.0;
    -(c * 2.0_f32.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
}

#[inline]
pub fn elastic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    c * 2.0_f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
}

#[inline]
pub fn elastic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = d * (0.3 * 1.5);
    let s = p / 4.0;
    if t < 1.0 {
        let t = t - 1.0;
        return -0.5 * (c * 2.0_f32.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b;
    }
    let t = t - 1.0;
    c * 2.0_f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() * 0.5 + c + b
}

// ── Back ─────────────────────────────────────────────────────────────────

#[inline]
pub fn back_in(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

#[inline]
pub fn back_out(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

#[inline]
pub fn back_in_out(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    let s = s * 1.525;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

// ── Bounce ───────────────────────────────────────────────────────────────

#[inline]
pub fn bounce_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c - bounce_out(d - t, 0.0, c, d) + b
}

#[inline]
pub fn bounce_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let t = t / d;
    if t < 1.0 / D1 {
        c * (N1 * t * t) + b
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        c * (N1 * t * t + 0.75) + b
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        c * (N1 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / D1;
        c * (N1 * t * t + 0.984375) + b
    }
}

#[inline]
pub fn bounce_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        return bounce_in(t * 2.0, 0.0, c, d) * 0.5 + b;
    }
    bounce_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::QuadIn, Easing::QuadOut, Easing::QuadInOut,
        Easing::CubicIn, Easing::CubicOut, Easing::CubicInOut,
        Easing::QuartIn, Easing::QuartOut, Easing::QuartInOut,
        Easing::QuintIn, Easing::QuintOut, Easing::QuintInOut,
        Easing::SineIn, Easing::SineOut, Easing::SineInOut,
        Easing::ExpoIn, Easing::ExpoOut, Easing::ExpoInOut,
        Easing::CircIn, Easing::CircOut, Easing::CircInOut,
        Easing::ElasticIn, Easing::ElasticOut, Easing::ElasticInOut,
        Easing::BackIn, Easing::BackOut, Easing::BackInOut,
        Easing::BounceIn, Easing::BounceOut, Easing::BounceInOut,
    ];

    fn close(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn linear_endpoints() {
        assert_eq!(linear(0.0, 10.0, 5.0, 100.0), 10.0);
        assert_eq!(linear(100.0, 10.0, 5.0, 100.0), 15.0);
        assert_eq!(linear(50.0, 10.0, 5.0, 100.0), 12.5);
    }

    #[test]
    fn quad_out_lands_exactly_on_target() {
        assert_eq!(quad_out(3000.0, 0.0, 1.3, 3000.0), 1.3);
        assert_eq!(quad_out(0.0, 1.0, -1.0, 1500.0), 1.0);
        assert_eq!(quad_out(1500.0, 1.0, -1.0, 1500.0), 0.0);
    }

    #[test]
    fn quad_out_faster_start() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!(close(mid, 0.75, 1e-6), "QuadOut at 0.5 should be 0.75, got {}", mid);
    }

    #[test]
    fn quad_in_out_is_symmetric_at_midpoint() {
        assert!(close(quad_in_out(50.0, 0.0, 10.0, 100.0), 5.0, 1e-5));
        assert!(close(quad_in_out(25.0, 0.0, 10.0, 100.0), 1.25, 1e-5));
    }

    #[test]
    fn exponential_special_cases_are_exact() {
        assert_eq!(expo_in(0.0, 4.0, 6.0, 10.0), 4.0);
        assert_eq!(expo_out(10.0, 4.0, 6.0, 10.0), 10.0);
        assert_eq!(expo_in_out(0.0, 4.0, 6.0, 10.0), 4.0);
        assert_eq!(expo_in_out(10.0, 4.0, 6.0, 10.0), 10.0);
        // Without the special case 2^-10 would leak in at t = 0.
        assert!(expo_in(1e-3, 0.0, 1.0, 10.0) > 0.0);
    }

    #[test]
    fn elastic_endpoints_and_ringing() {
        assert_eq!(elastic_out(0.0, 2.0, 3.0, 1.0), 2.0);
        assert_eq!(elastic_out(1.0, 2.0, 3.0, 1.0), 5.0);
        assert_eq!(elastic_in(1.0, 2.0, 3.0, 1.0), 5.0);
        assert_eq!(elastic_in_out(1.0, 2.0, 3.0, 1.0), 5.0);
        // Overshoots the target shortly after the start.
        let peak = (1..100)
            .map(|i| elastic_out(i as f32 / 100.0, 0.0, 1.0, 1.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "ElasticOut should overshoot, peak {}", peak);
    }

    #[test]
    fn elastic_out_matches_closed_form() {
        // t = 0.5: 2^-5 * sin((0.5 - 0.075) * 2π / 0.3) + 1
        let expected = 2.0_f32.powf(-5.0) * ((0.5 - 0.075) * 2.0 * PI / 0.3).sin() + 1.0;
        assert!(close(elastic_out(0.5, 0.0, 1.0, 1.0), expected, 1e-6));
    }

    #[test]
    fn back_overshoots() {
        let early = Easing::BackOut.apply(0.3);
        assert!(early > 0.3, "BackOut should overshoot");
        assert!(back_in(0.2, 0.0, 1.0, 1.0, BACK_OVERSHOOT) < 0.0, "BackIn should dip below start");
    }

    #[test]
    fn back_overshoot_argument_is_honoured() {
        // s = 0 reduces back-in to cubic-in.
        assert!(close(back_in(0.4, 0.0, 1.0, 1.0, 0.0), cubic_in(0.4, 0.0, 1.0, 1.0), 1e-6));
    }

    #[test]
    fn bounce_out_segments() {
        assert!(close(bounce_out(0.0, 0.0, 1.0, 1.0), 0.0, 1e-6));
        assert!(close(bounce_out(1.0 / 2.75, 0.0, 1.0, 1.0), 1.0, 1e-5));
        assert!(close(bounce_out(1.0, 0.0, 1.0, 1.0), 1.0, 1e-5));
        assert!(close(bounce_in(0.0, 0.0, 1.0, 1.0), 0.0, 1e-5));
        assert!(close(bounce_in_out(0.5, 0.0, 1.0, 1.0), 0.5, 1e-5));
    }

    #[test]
    fn zero_duration_is_already_finished() {
        for easing in ALL {
            assert_eq!(easing.ease(0.0, 1.0, 2.0, 0.0), 3.0, "{:?}", easing);
        }
    }

    proptest! {
        #[test]
        fn every_curve_starts_and_ends_on_its_bounds(
            b in -500.0f32..500.0,
            c in -500.0f32..500.0,
            d in 1.0f32..5000.0,
        ) {
            let tol = 1e-3 * (1.0 + b.abs() + c.abs());
            for easing in ALL {
                let start = easing.ease(0.0, b, c, d);
                let end = easing.ease(d, b, c, d);
                prop_assert!(close(start, b, tol), "{:?} start {} != {}", easing, start, b);
                prop_assert!(close(end, b + c, tol), "{:?} end {} != {}", easing, end, b + c);
            }
        }

        #[test]
        fn quad_out_never_passes_its_target(t in 0.0f32..=1.0) {
            let v = Easing::QuadOut.apply(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}

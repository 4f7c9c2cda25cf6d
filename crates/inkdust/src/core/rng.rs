//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, so a seed reproduces every jitter, radius and repulsion.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound). Returns 0 for a zero bound.
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly, so 1.0 is never produced.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [lo, hi). Returns `lo` when the range is empty.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        let v = lo + self.next_f32() * (hi - lo);
        // Rounding can land on `hi` for wide ranges.
        if v >= hi { lo } else { v }
    }

    /// Uniform f64 in [lo, hi], both ends reachable. For millisecond delays.
    pub fn range_f64_inclusive(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        let v = lo + unit_closed(self.next_u64()) * (hi - lo);
        v.min(hi)
    }

    /// Pick an index in [0, len).
    pub fn pick(&mut self, len: usize) -> usize {
        self.next_int(len.min(u32::MAX as usize) as u32) as usize
    }
}

/// Map the top 53 bits onto [0, 1], so an all-ones draw yields exactly 1.0.
fn unit_closed(bits: u64) -> f64 {
    (bits >> 11) as f64 / ((1u64 << 53) - 1) as f64
}

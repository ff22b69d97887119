//! Lightweight xorshift32 PRNG — no external crate needed

use ember_core::Span;

pub struct FireRng {
    state: u32,
}

impl FireRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Draws from an inclusive span
    pub fn span(&mut self, span: Span) -> f32 {
        self.range(span.min, span.max)
    }

    /// Returns a phase angle in [0, 2π)
    pub fn phase(&mut self) -> f32 {
        self.next_f32() * std::f32::consts::TAU
    }

    /// Returns a symmetric offset in [-half, half)
    pub fn jitter(&mut self, half: f32) -> f32 {
        (self.next_f32() - 0.5) * 2.0 * half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds() {
        let mut rng = FireRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!(v >= 0.0 && v < 10.0);
        }
    }

    #[test]
    fn jitter_bounds() {
        let mut rng = FireRng::new(7);
        for _ in 0..1000 {
            let v = rng.jitter(4.0);
            assert!(v >= -4.0 && v < 4.0);
        }
    }

    #[test]
    fn phase_bounds() {
        let mut rng = FireRng::new(99);
        for _ in 0..1000 {
            let v = rng.phase();
            assert!(v >= 0.0 && v < std::f32::consts::TAU);
        }
    }

    #[test]
    fn degenerate_span_returns_endpoint() {
        let mut rng = FireRng::new(11);
        assert_eq!(rng.span(Span::new(0.0, 0.0)), 0.0);
        assert_eq!(rng.span(Span::new(-5.0, -5.0)), -5.0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = FireRng::new(12345);
        let mut b = FireRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut zero = FireRng::new(0);
        let mut one = FireRng::new(1);
        assert_eq!(zero.next_f32(), one.next_f32());
    }
}

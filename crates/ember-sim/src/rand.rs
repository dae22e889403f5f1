//! Lightweight xorshift32 PRNG — deterministic under a fixed seed

pub struct SimRng {
    state: u32,
}

impl SimRng {
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

    /// Returns a float in [-1, 1), the jitter factor applied to every
    /// "var" half-width
    pub fn jitter(&mut self) -> f32 {
        self.range(-1.0, 1.0)
    }
}

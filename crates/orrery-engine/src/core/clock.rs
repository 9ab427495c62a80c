/// Free-running simulation clock.
///
/// Accumulates wall-clock frame deltas into a monotonic elapsed-time
/// reading. Deliberately keeps running while the simulation is paused:
/// body angles are an absolute function of elapsed time, so resuming
/// jumps them forward to where they would have been.
pub struct SimClock {
    elapsed: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Add one frame's wall-clock delta. Call every tick, paused or not.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0) as f64;
    }

    /// Seconds since the loop started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_deltas() {
        let mut clock = SimClock::new();
        clock.advance(0.016);
        clock.advance(0.016);
        assert!((clock.elapsed() - 0.032).abs() < 1e-6);
    }

    #[test]
    fn negative_deltas_are_ignored() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(-1.0);
        assert!((clock.elapsed() - 0.5).abs() < 1e-6);
    }
}

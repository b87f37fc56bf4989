use rand::Rng;

/// Exclusive upper bound of the confidence jitter.
pub const JITTER_SPAN: u8 = 10;

/// Source of the small random bump added to the triage confidence.
///
/// The bump is the only non-deterministic input to scoring; swapping the
/// source makes an assessment reproducible.
pub trait ConfidenceJitter {
    /// Next value in `0..JITTER_SPAN`.
    fn next_jitter(&mut self) -> u8;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl ConfidenceJitter for ThreadRngJitter {
    fn next_jitter(&mut self) -> u8 {
        rand::thread_rng().gen_range(0..JITTER_SPAN)
    }
}

/// Always yields the same value, clamped into range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedJitter(pub u8);

impl ConfidenceJitter for FixedJitter {
    fn next_jitter(&mut self) -> u8 {
        self.0.min(JITTER_SPAN - 1)
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_core::RngCore;

/// Uniform integer draws consumed by the text strategies.
///
/// Every `rand` generator is a source already. Each invocation should own
/// its source; sharing one across threads needs a generator that is safe for it.
pub trait RandomSource {
    /// Uniform draw from `0..upper`. `upper` must be non-zero.
    fn below(&mut self, upper: usize) -> usize;

    /// Fair coin: a draw from `0..2` that lands on `1`.
    fn coin(&mut self) -> bool {
        self.below(2) == 1
    }
}

impl<R: RngCore> RandomSource for R {
    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Pick one item uniformly, or `None` for an empty slice.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.below(items.len()))
}

/// Deterministic generator for reproducible runs.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed list of draws, panicking when it runs dry or a draw is out of range.
#[cfg(test)]
pub(crate) struct ScriptedSource(std::collections::VecDeque<usize>);

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(draws: &[usize]) -> Self {
        Self(draws.iter().copied().collect())
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn below(&mut self, upper: usize) -> usize {
        let draw = self.0.pop_front().expect("scripted draws exhausted");
        assert!(draw < upper, "scripted draw {draw} out of range 0..{upper}");
        draw
    }
}

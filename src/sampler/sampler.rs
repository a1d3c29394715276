use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Generation tags cycle through the 8 bits of a visited slot.
const LAST_TAG: u8 = 1 << 7;

/// Draws distinct indices from `0..population`, reusable across many passes.
///
/// When the desired count covers the whole population this is a plain
/// counter. Otherwise indices are drawn uniformly without replacement and
/// marked in a visited buffer. Instead of wiping that buffer on every
/// [`reset`](Self::reset), each pass owns one bit of every slot; the bit
/// rotates per reset and the buffer is only wiped once all 8 bits have
/// been used. Reset is O(1) seven times out of eight.
///
/// Single-owner state: one sampler per worker.
#[derive(Debug, Clone)]
pub struct IndexSampler {
    rng: SmallRng,
    visited: Vec<u8>,
    tag: u8,
    population: usize,
    size: usize,
    drawn: usize,
    sampling: bool,
}

impl IndexSampler {
    pub fn new(capacity: usize) -> Self {
        Self::from_rng(capacity, SmallRng::from_rng(&mut rand::rng()))
    }
    pub fn seeded(capacity: usize, seed: u64) -> Self {
        Self::from_rng(capacity, SmallRng::seed_from_u64(seed))
    }
    fn from_rng(capacity: usize, rng: SmallRng) -> Self {
        Self {
            rng,
            visited: vec![0; capacity],
            tag: 1,
            population: 0,
            size: 0,
            drawn: 0,
            sampling: false,
        }
    }

    /// Sets up passes over `0..population` yielding `min(population, desired)`
    /// indices each. The sampler is exhausted until the next [`reset`](Self::reset).
    pub fn configure(&mut self, population: usize, desired: usize) -> usize {
        assert!(population <= u32::MAX as usize, "population must fit in u32");
        if population > self.visited.len() {
            self.visited.resize(population, 0);
        }
        self.population = population;
        self.sampling = population > desired;
        self.size = population.min(desired);
        self.drawn = self.size;
        self.size
    }

    /// Rearms the sampler for another pass with the same configuration.
    pub fn reset(&mut self) {
        self.drawn = 0;
        if self.sampling {
            if self.tag == LAST_TAG {
                self.visited.fill(0);
            }
            self.tag = self.tag.rotate_left(1);
        }
    }

    /// Indices per pass under the current configuration.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Next index of this pass, or `None` once `size()` indices were drawn.
    pub fn next(&mut self) -> Option<usize> {
        if self.drawn >= self.size {
            return None;
        }
        self.drawn += 1;
        if !self.sampling {
            return Some(self.drawn - 1);
        }
        loop {
            let index = self.bounded(self.population as u32) as usize;
            let slot = &mut self.visited[index];
            if *slot & self.tag == 0 {
                *slot |= self.tag;
                return Some(index);
            }
        }
    }

    /// Uniform draw from `0..n` without modulo bias.
    ///
    /// Multiply-shift maps a 32-bit draw onto `0..n`; the low half of the product
    /// tells whether the draw fell into the over-represented remainder
    /// `(2^32 - n) mod n`, in which case it is redrawn.
    fn bounded(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0);
        let mut product = self.rng.next_u32() as u64 * n as u64;
        let mut low = product as u32;
        if low < n {
            let threshold = n.wrapping_neg() % n;
            while low < threshold {
                product = self.rng.next_u32() as u64 * n as u64;
                low = product as u32;
            }
        }
        (product >> 32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn drain(sampler: &mut IndexSampler) -> Vec<usize> {
        std::iter::from_fn(|| sampler.next()).collect()
    }

    #[test]
    fn exhausted_until_reset() {
        let mut sampler = IndexSampler::seeded(16, 7);
        assert_eq!(sampler.configure(10, 3), 3);
        assert_eq!(sampler.next(), None);
        sampler.reset();
        assert_eq!(drain(&mut sampler).len(), 3);
        assert_eq!(sampler.next(), None);
    }

    #[test]
    fn counter_when_population_is_small() {
        let mut sampler = IndexSampler::seeded(16, 7);
        assert_eq!(sampler.configure(5, 8), 5);
        sampler.reset();
        assert_eq!(drain(&mut sampler), vec![0, 1, 2, 3, 4]);
        sampler.reset();
        assert_eq!(drain(&mut sampler), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn repeated_cycles_stay_distinct_and_in_range() {
        let mut sampler = IndexSampler::seeded(10, 42);
        sampler.configure(10, 3);
        for _ in 0..200 {
            sampler.reset();
            let drawn = drain(&mut sampler);
            assert_eq!(drawn.len(), 3);
            assert!(drawn.iter().all(|&i| i < 10));
            assert_eq!(drawn.iter().collect::<BTreeSet<_>>().len(), 3);
        }
    }

    #[test]
    fn drains_min_of_population_and_desired() {
        let mut sampler = IndexSampler::seeded(0, 3);
        for (n, d) in [(1, 1), (2, 1), (50, 49), (50, 50), (990, 92), (1081, 2000), (7, 0)] {
            let size = sampler.configure(n, d);
            assert_eq!(size, n.min(d));
            for _ in 0..12 {
                sampler.reset();
                let drawn = drain(&mut sampler);
                assert_eq!(drawn.len(), size);
                assert!(drawn.iter().all(|&i| i < n));
                assert_eq!(drawn.iter().collect::<BTreeSet<_>>().len(), size);
            }
        }
    }

    #[test]
    fn near_full_draw_covers_population() {
        let mut sampler = IndexSampler::seeded(64, 11);
        sampler.configure(64, 63);
        sampler.reset();
        let drawn = drain(&mut sampler).into_iter().collect::<BTreeSet<_>>();
        assert_eq!(drawn.len(), 63);
    }

    #[test]
    fn roughly_uniform() {
        let mut sampler = IndexSampler::seeded(10, 5);
        let mut hits = [0usize; 10];
        sampler.configure(10, 1);
        for _ in 0..20_000 {
            sampler.reset();
            hits[sampler.next().unwrap()] += 1;
        }
        assert!(hits.iter().all(|&h| (1_700..2_300).contains(&h)), "{:?}", hits);
    }
}

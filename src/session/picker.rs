//! Random cell selection that never repeats the previous pick.

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Index in `0..bound`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Pick a cell in `0..len` different from `previous` whenever `len > 1`.
///
/// Iterative rejection sampling; a one-cell board returns its only cell and an
/// empty board yields `None`.
pub fn pick_cell<R: RandomSource + ?Sized>(
    len: usize,
    previous: Option<usize>,
    rng: &mut R,
) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        _ => loop {
            let idx = rng.next_index(len) % len;
            if Some(idx) != previous {
                break Some(idx);
            }
        },
    }
}

/// Randomness from the platform (browser crypto on wasm), falling back to a
/// linear congruential step seeded from the clock when entropy is unavailable.
pub struct EntropySource {
    state: u64,
}

impl EntropySource {
    pub fn new() -> Self {
        Self { state: clock_seed() }
    }

    fn fallback(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    #[cfg(feature = "rng")]
    fn draw(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => u64::from_le_bytes(buf),
            Err(err) => {
                log::warn!("entropy unavailable ({err}), using fallback generator");
                self.fallback()
            }
        }
    }

    #[cfg(not(feature = "rng"))]
    fn draw(&mut self) -> u64 {
        self.fallback()
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        // Reject the biased tail so every index is equally likely.
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let v = self.draw();
            if v < zone {
                return (v % bound) as usize;
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| (p.now() * 1000.0) as u64)
        .unwrap_or(0)
        ^ 0x9E37_79B9_7F4A_7C15
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
        ^ 0x9E37_79B9_7F4A_7C15
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of indices, cycling when exhausted.
    struct Scripted {
        values: Vec<usize>,
        pos: usize,
    }

    impl RandomSource for Scripted {
        fn next_index(&mut self, _bound: usize) -> usize {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn test_pick_cell_rejects_previous() {
        let mut rng = Scripted {
            values: vec![4, 4, 4, 2],
            pos: 0,
        };
        assert_eq!(pick_cell(9, Some(4), &mut rng), Some(2));
        assert_eq!(rng.pos, 4);
    }

    #[test]
    fn test_pick_cell_accepts_first_draw_without_previous() {
        let mut rng = Scripted {
            values: vec![3],
            pos: 0,
        };
        assert_eq!(pick_cell(9, None, &mut rng), Some(3));
    }

    #[test]
    fn test_pick_cell_single_and_empty_board() {
        // A source that always says 0 would loop forever if the distinctness
        // check applied to a one-cell board.
        let mut rng = Scripted {
            values: vec![0],
            pos: 0,
        };
        assert_eq!(pick_cell(1, Some(0), &mut rng), Some(0));
        assert_eq!(pick_cell(0, None, &mut rng), None);
        assert_eq!(rng.pos, 0);
    }

    #[test]
    fn test_entropy_source_never_repeats_consecutively() {
        let mut rng = EntropySource::new();
        let mut prev = None;
        let mut seen = [false; 9];
        for _ in 0..2_000 {
            let idx = pick_cell(9, prev, &mut rng).unwrap();
            assert!(idx < 9);
            assert_ne!(Some(idx), prev);
            seen[idx] = true;
            prev = Some(idx);
        }
        assert!(seen.iter().all(|s| *s), "every cell should come up eventually");
    }

    #[test]
    fn test_fallback_generator_is_seed_deterministic() {
        let mut a = EntropySource { state: 12345 };
        let mut b = EntropySource { state: 12345 };
        let xs: Vec<u64> = (0..16).map(|_| a.fallback()).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.fallback()).collect();
        assert_eq!(xs, ys);
        assert!(xs.windows(2).any(|w| w[0] != w[1]));
        assert_eq!(a.next_index(1), 0);
    }
}

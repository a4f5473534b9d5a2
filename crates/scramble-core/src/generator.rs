use crate::piece::Piece;
use crate::{EDGE_COUNT, PIECE_COUNT, ROTATION_COUNT};

/// Configuration for piece-set generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Largest edge magnitude; values are drawn from `1..=max_value` with
    /// a random sign
    pub max_value: i16,
    /// Seed for reproducible output; `None` seeds from the system
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_value: 4,
            seed: None,
        }
    }
}

/// Random generator of solvable piece sets.
///
/// Authors a solved 3x3 layout first and disguises it afterwards: the
/// twelve internal edges get matching `v`/`-v` pairs, the twelve border
/// edges get free values, then every piece is spun and the order is
/// shuffled. The authored layout survives the disguise as a valid
/// arrangement, so a generated set always has at least one solution;
/// small edge ranges usually admit several.
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimpleRng::with_seed(seed),
            None => SimpleRng::new(),
        };
        Self { config, rng }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
    }

    /// Generate a solvable set of nine pieces
    pub fn generate(&mut self) -> [Piece; PIECE_COUNT] {
        // Right edges of the left and middle columns, bottom edges of the
        // top and middle rows. The facing edge is the negation.
        let mut rightward = [[0i16; 2]; 3];
        let mut downward = [[0i16; 3]; 2];
        for row in &mut rightward {
            for value in row {
                *value = self.signed_value();
            }
        }
        for row in &mut downward {
            for value in row {
                *value = self.signed_value();
            }
        }

        let mut pieces = [Piece::new([0; EDGE_COUNT]); PIECE_COUNT];
        for row in 0..3 {
            for col in 0..3 {
                let top = if row == 0 {
                    self.signed_value()
                } else {
                    -downward[row - 1][col]
                };
                let right = if col == 2 {
                    self.signed_value()
                } else {
                    rightward[row][col]
                };
                let bottom = if row == 2 {
                    self.signed_value()
                } else {
                    downward[row][col]
                };
                let left = if col == 0 {
                    self.signed_value()
                } else {
                    -rightward[row][col - 1]
                };
                pieces[row * 3 + col] = Piece::new([top, right, bottom, left]);
            }
        }

        // Disguise the layout: spin each piece, then shuffle the order
        for piece in &mut pieces {
            *piece = piece.rotated(self.rng.next_usize(ROTATION_COUNT) as u8);
        }
        self.shuffle(&mut pieces);
        pieces
    }

    /// Random magnitude in `1..=max_value` with a random sign
    fn signed_value(&mut self) -> i16 {
        let bound = self.config.max_value.max(1) as usize;
        let magnitude = self.rng.next_usize(bound) as i16 + 1;
        if self.rng.next_usize(2) == 0 {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Simple PRNG for no-std compatibility
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        let seed = u64::from_le_bytes(seed_bytes);
        Self::with_seed(seed)
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

//! # Seeds and Simplex Noise
//!
//! Deterministic 2-D noise fields for terrain generation.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`WorldSeed`], [`SimplexNoise`] produces exactly the same
//! values on any platform: the permutation table comes from a fixed
//! xorshift stream and sampling is plain IEEE-754 arithmetic.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

/// World seed for deterministic generation.
///
/// All procedural generation derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Fixed SipHash keys so text seeds hash identically across builds.
    const TEXT_KEYS: (u64, u64) = (0x626c_6f63_6b77_6f72, 0x6c64_2d73_6565_6421);

    /// Creates a seed from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Derives a seed from arbitrary text (e.g. a request body).
    ///
    /// Uses SipHash-1-3 with fixed keys, so the mapping is stable across
    /// processes and releases, unlike `std`'s randomly keyed hasher.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut hasher = SipHasher13::new_with_keys(Self::TEXT_KEYS.0, Self::TEXT_KEYS.1);
        hasher.write(text.as_bytes());
        Self(hasher.finish())
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives an independent sub-seed for one purpose (elevation, moisture...).
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0 ^ purpose.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        hash = hash.wrapping_mul(0x517C_C1B7_2722_0A95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(0xB10C_0000_0000_0001)
    }
}

/// 12 gradient directions for 2-D simplex noise.
const GRADIENTS: [(f64, f64); 12] = [
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (-1.0, 0.0),
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (-1.0, 0.0),
    (0.0, -1.0),
];

/// 2-D simplex noise generator.
///
/// Produces smooth, continuous values in `[-1, 1]`.
pub struct SimplexNoise {
    /// 256-entry permutation, doubled so lookups never wrap.
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Skewing factor for the 2-D simplex grid: `(sqrt(3) - 1) / 2`.
    const F2: f64 = 0.366_025_403_784_439;
    /// Unskewing factor: `(3 - sqrt(3)) / 6`.
    const G2: f64 = 0.211_324_865_405_187;

    /// Creates a noise field from a seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        let mut table = [0u8; 256];
        for (slot, value) in table.iter_mut().zip(0u8..=255) {
            *slot = value;
        }

        // Fisher-Yates with xorshift64; zero state would stick, so nudge it.
        let mut state = seed.value() | 1;
        for i in (1..table.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = usize::try_from(state % (i as u64 + 1)).unwrap_or(0);
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&table);
        perm[256..].copy_from_slice(&table);
        Self { perm }
    }

    #[inline]
    fn hash(&self, index: usize) -> usize {
        usize::from(self.perm[index & 511])
    }

    /// Samples the noise field at `(x, y)`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew into simplex space and find the containing cell.
        let skew = (x + y) * Self::F2;
        let i = (x + skew).floor();
        let j = (y + skew).floor();

        let unskew = (i + j) * Self::G2;
        let x0 = x - (i - unskew);
        let y0 = y - (j - unskew);

        // Upper or lower triangle of the cell.
        let (i1, j1): (u8, u8) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        // Wrap cell coordinates into the table; rem_euclid keeps negatives positive.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ii = (i.rem_euclid(256.0)) as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let jj = (j.rem_euclid(256.0)) as usize;
        let (i1, j1) = (usize::from(i1), usize::from(j1));

        let g0 = self.hash(ii + self.hash(jj));
        let g1 = self.hash(ii + i1 + self.hash(jj + j1));
        let g2 = self.hash(ii + 1 + self.hash(jj + 1));

        let n0 = Self::corner(x0, y0, g0);
        let n1 = Self::corner(x1, y1, g1);
        let n2 = Self::corner(x2, y2, g2);

        // 70 scales the sum into [-1, 1].
        (70.0 * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }

    #[inline]
    fn corner(x: f64, y: f64, hash: usize) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }
        let (gx, gy) = GRADIENTS[hash % GRADIENTS.len()];
        let t2 = t * t;
        t2 * t2 * (x * gx + y * gy)
    }

    /// Fractal (octaved) noise, normalized back into `[-1, 1]`.
    ///
    /// * `octaves` - number of layers (at least 1 is always sampled)
    /// * `persistence` - amplitude decay per octave (typically 0.5)
    /// * `lacunarity` - frequency growth per octave (typically 2.0)
    #[must_use]
    pub fn octaved(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves.max(1) {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        total / max_amplitude
    }
}

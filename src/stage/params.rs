use crate::foundation::rng::RmxRng;

/// Archimedean spiral shape shared by every block of one activation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpiralParams {
    /// Radians of turn per block index.
    pub tightness: f64,
    /// Radius reached by the last block.
    pub max_radius: f64,
    /// `+1.0` (clockwise in screen space) or `-1.0`.
    pub direction: f64,
}

/// Range the morph stage draws per-block scale factors from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphParams {
    /// Lower bound (inclusive).
    pub scale_lo: f64,
    /// Upper bound (exclusive).
    pub scale_hi: f64,
}

/// Random parameters drawn once per stage activation.
///
/// Every stage rule is a pure function of these plus the block's index and state, so one
/// activation yields one coherent visual regime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActivationParams {
    /// Spiral shape.
    pub spiral: SpiralParams,
    /// Morph scale range.
    pub morph: MorphParams,
    /// Block kept on screen by the single-word stage; `None` without blocks.
    pub survivor: Option<usize>,
    /// Seed for per-block chaos values (positions, rotations, scales, exit angles).
    pub chaos_seed: u64,
}

impl ActivationParams {
    /// Draw a fresh parameter set for `block_count` blocks.
    pub fn sample(rng: &mut RmxRng, block_count: usize) -> Self {
        let spiral = SpiralParams {
            tightness: rng.range(0.2, 1.2),
            max_radius: rng.range(100.0, 250.0),
            direction: rng.sign(),
        };
        let morph = MorphParams {
            scale_lo: rng.range(0.5, 1.0),
            scale_hi: rng.range(2.0, 10.0),
        };
        let survivor = (block_count > 0).then(|| rng.index(block_count));
        Self {
            spiral,
            morph,
            survivor,
            chaos_seed: rng.next_u64(),
        }
    }
}

//! Random boxes (replay tokens + bounded sampler).
//!
//! Purpose
//! - Provide a small, deterministic source of valid boxes for property
//!   checks, benches and the CLI `sample` command.
//!
//! Model
//! - The minimum corner is uniform in `[coord_min, coord_max]²`, width and
//!   height are uniform in `[0, max_extent]`; zero sizes are drawn on purpose.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::marker::PhantomData;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::box2::Box2;
use crate::boxes;
use crate::error::BoxError;

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxSamplerCfg {
    /// Smallest coordinate for the minimum corner.
    pub coord_min: i32,
    /// Largest coordinate for the minimum corner.
    pub coord_max: i32,
    /// Largest width and height.
    pub max_extent: i32,
}

impl Default for BoxSamplerCfg {
    fn default() -> Self {
        Self {
            coord_min: -400,
            coord_max: 400,
            max_extent: 400,
        }
    }
}

impl BoxSamplerCfg {
    pub fn validate(&self) -> Result<(), BoxError> {
        if self.coord_min > self.coord_max {
            return Err(BoxError::invariant(format!(
                "coord_min ({}) must be <= coord_max ({})",
                self.coord_min, self.coord_max
            )));
        }
        if self.max_extent < 0 {
            return Err(BoxError::invariant(format!(
                "max_extent must be >= 0, not {}",
                self.max_extent
            )));
        }
        // The far corner of the largest box must stay representable.
        self.coord_max
            .checked_add(self.max_extent)
            .ok_or_else(|| BoxError::overflow("add"))?;
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one box for `tok`. Same `(cfg, tok)` → same box.
pub fn draw_box<S>(cfg: BoxSamplerCfg, tok: ReplayToken) -> Result<Box2<S>, BoxError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let x = rng.gen_range(cfg.coord_min..=cfg.coord_max);
    let y = rng.gen_range(cfg.coord_min..=cfg.coord_max);
    let w = rng.gen_range(0..=cfg.max_extent);
    let h = rng.gen_range(0..=cfg.max_extent);
    boxes::create(x, y, w, h)
}

/// Endless stream of boxes for one seed, at indexes `0, 1, 2, ...`.
pub struct BoxSampler<S> {
    cfg: BoxSamplerCfg,
    next: ReplayToken,
    space: PhantomData<fn() -> S>,
}

impl<S> BoxSampler<S> {
    pub fn new(cfg: BoxSamplerCfg, seed: u64) -> Result<Self, BoxError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            next: ReplayToken { seed, index: 0 },
            space: PhantomData,
        })
    }

    pub fn cfg(&self) -> &BoxSamplerCfg {
        &self.cfg
    }

    /// Token that the next call to `next` will use.
    pub fn peek_token(&self) -> ReplayToken {
        self.next
    }
}

impl<S> Iterator for BoxSampler<S> {
    type Item = Box2<S>;

    fn next(&mut self) -> Option<Box2<S>> {
        let tok = self.next;
        self.next.index = self.next.index.wrapping_add(1);
        // `cfg` was validated in `new`, so drawing cannot fail.
        draw_box(self.cfg, tok).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoxBounds;
    use crate::testing::Screen;

    #[test]
    fn reproducible_draw() {
        let cfg = BoxSamplerCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let a: Box2<Screen> = draw_box(cfg, tok).unwrap();
        let b: Box2<Screen> = draw_box(cfg, tok).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn draws_respect_cfg() {
        let cfg = BoxSamplerCfg {
            coord_min: -5,
            coord_max: 5,
            max_extent: 3,
        };
        let sampler: BoxSampler<Screen> = BoxSampler::new(cfg, 1).unwrap();
        for b in sampler.take(500) {
            assert!((-5..=5).contains(&b.minimum_x()));
            assert!((-5..=5).contains(&b.minimum_y()));
            assert!((0..=3).contains(&b.width()));
            assert!((0..=3).contains(&b.height()));
        }
    }

    #[test]
    fn sampler_matches_replay() {
        let cfg = BoxSamplerCfg::default();
        let mut sampler: BoxSampler<Screen> = BoxSampler::new(cfg, 9).unwrap();
        sampler.next();
        sampler.next();
        let tok = sampler.peek_token();
        assert_eq!(tok, ReplayToken { seed: 9, index: 2 });
        let replayed: Box2<Screen> = draw_box(cfg, tok).unwrap();
        assert_eq!(sampler.next(), Some(replayed));
    }

    #[test]
    fn invalid_cfg_rejected() {
        let inverted = BoxSamplerCfg {
            coord_min: 1,
            coord_max: 0,
            max_extent: 1,
        };
        assert!(matches!(
            BoxSampler::<Screen>::new(inverted, 0),
            Err(BoxError::InvariantViolation { .. })
        ));
        let overflowing = BoxSamplerCfg {
            coord_min: 0,
            coord_max: i32::MAX,
            max_extent: 1,
        };
        assert_eq!(
            overflowing.validate(),
            Err(BoxError::ArithmeticOverflow { op: "add" })
        );
    }
}

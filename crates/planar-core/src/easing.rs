//! Easing curves and a frame-stepped tween.
//!
//! Every curve maps a progress ratio `t` in `[0, 1]` to an eased value,
//! with `0 → 0` and `1 → 1` (except [`Easing::Shake`], which oscillates
//! around zero).

use crate::number::PI;

const C4: f64 = (2.0 * PI) / 3.0;
const C5: f64 = (2.0 * PI) / 4.5;

/// A named easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
    /// `sin(t · amount · π)`, negated when `inverse` is set.
    Shake { amount: f64, inverse: bool },
}

impl Easing {
    /// Evaluate the curve at `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::InCubic => t.powi(3),
            Self::OutCubic => (t - 1.0).powi(3) + 1.0,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (t - 1.0).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 + (t - 1.0).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
            Self::InElastic => elastic_edges(t).unwrap_or_else(|| {
                -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
            }),
            Self::OutElastic => elastic_edges(t).unwrap_or_else(|| {
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
            }),
            Self::InOutElastic => elastic_edges(t).unwrap_or_else(|| {
                let s = ((20.0 * t - 11.125) * C5).sin();
                if t < 0.5 {
                    -(2f64.powf(20.0 * t - 10.0) * s) / 2.0
                } else {
                    (2f64.powf(-20.0 * t + 10.0) * s) / 2.0 + 1.0
                }
            }),
            Self::InBounce => 1.0 - bounce_out(1.0 - t),
            Self::OutBounce => bounce_out(t),
            Self::InOutBounce => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
            Self::Shake { amount, inverse } => {
                let v = (t * amount * PI).sin();
                if inverse { -v } else { v }
            }
        }
    }
}

/// Elastic curves are pinned exactly at both ends.
fn elastic_edges(t: f64) -> Option<f64> {
    if t == 0.0 {
        Some(0.0)
    } else if t == 1.0 {
        Some(1.0)
    } else {
        None
    }
}

fn bounce_out(x: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if x < 1.0 / D1 {
        N1 * x * x
    } else if x < 2.0 / D1 {
        let x = x - 1.5 / D1;
        N1 * x * x + 0.75
    } else if x < 2.5 / D1 {
        let x = x - 2.25 / D1;
        N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / D1;
        N1 * x * x + 0.984375
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Parameters of a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenConfig {
    pub easing: Easing,
    /// Value at progress 0.
    pub start: f64,
    /// Distance travelled at progress 1.
    pub scale: f64,
    /// Number of frames the tween lasts.
    pub steps: u32,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            easing: Easing::Linear,
            start: 0.0,
            scale: 1.0,
            steps: 60,
        }
    }
}

/// A tween advanced one frame per [`Iterator::next`] call.
///
/// Frame `k` (1-based) yields `start + easing(k / steps) · scale`; after
/// `steps` frames the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Tween {
    config: TweenConfig,
    frame: u32,
}

impl Tween {
    pub fn new(config: TweenConfig) -> Self {
        Self { config, frame: 0 }
    }

    /// Whether every frame has been produced.
    pub fn is_finished(&self) -> bool {
        self.frame >= self.config.steps
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }
}

impl Iterator for Tween {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.is_finished() {
            return None;
        }
        self.frame += 1;
        let ratio = f64::from(self.frame) / f64::from(self.config.steps);
        Some(self.config.start + self.config.easing.apply(ratio) * self.config.scale)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.config.steps.saturating_sub(self.frame) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Tween {}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 19] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
    ];

    #[test]
    fn curves_are_anchored() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-9, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-9, "{e:?} at 1");
        }
    }

    #[test]
    fn in_out_curves_are_symmetric_at_half() {
        for e in [
            Easing::InOutQuad,
            Easing::InOutCubic,
            Easing::InOutQuart,
            Easing::InOutQuint,
            Easing::InOutBounce,
        ] {
            assert!((e.apply(0.5) - 0.5).abs() < 1e-9, "{e:?}");
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(Easing::InQuad.apply(0.5), 0.25);
        assert_eq!(Easing::OutQuad.apply(0.5), 0.75);
        assert_eq!(Easing::OutCubic.apply(0.5), 0.875);
        assert!((Easing::OutBounce.apply(0.2) - 0.3025).abs() < 1e-12);
    }

    #[test]
    fn shake_oscillates() {
        let s = Easing::Shake { amount: 2.0, inverse: false };
        assert!((s.apply(0.25) - 1.0).abs() < 1e-9);
        let inv = Easing::Shake { amount: 2.0, inverse: true };
        assert!((inv.apply(0.25) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn tween_steps_then_finishes() {
        let mut tw = Tween::new(TweenConfig {
            easing: Easing::Linear,
            start: 10.0,
            scale: 20.0,
            steps: 4,
        });
        assert_eq!(tw.len(), 4);
        let values: Vec<f64> = tw.by_ref().collect();
        assert_eq!(values, vec![15.0, 20.0, 25.0, 30.0]);
        assert!(tw.is_finished());
        assert_eq!(tw.next(), None);
    }

    #[test]
    fn zero_step_tween_is_empty() {
        let tw = Tween::new(TweenConfig {
            steps: 0,
            ..TweenConfig::default()
        });
        assert!(tw.is_finished());
        assert_eq!(tw.count(), 0);
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Response curve applied to raw progress before interpolation.
///
/// All curves except [`Linear`](Self::Linear) ease out: fast at the start, slow
/// into the target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// `a`
    #[default]
    Linear,
    /// `1 - (1 - a)²`
    Quadratic,
    /// `1 - (1 - a)³`
    Cubic,
    /// `1 - 2^(-10a)`, pinned to exactly `1` at `a = 1`.
    Exponential,
}

impl Easing {
    /// Map raw progress in `[0, 1]` to eased progress.
    ///
    /// Input outside the range is clamped. Every curve maps `0` to exactly `0`
    /// and `1` to exactly `1`.
    #[must_use]
    pub fn apply(self, alpha: f64) -> f64 {
        let a = alpha.clamp(0.0, 1.0);
        match self {
            Self::Linear => a,
            Self::Quadratic => 1.0 - (1.0 - a) * (1.0 - a),
            Self::Cubic => 1.0 - (1.0 - a) * (1.0 - a) * (1.0 - a),
            Self::Exponential => {
                if a >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * a)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::Quadratic,
        Easing::Cubic,
        Easing::Exponential,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = easing.apply(f64::from(step) / 100.0);
                assert!(value >= last, "{easing:?} decreased at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn midpoints() {
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert_eq!(Easing::Quadratic.apply(0.5), 0.75);
        assert_eq!(Easing::Cubic.apply(0.5), 0.875);
        assert_eq!(Easing::Exponential.apply(0.5), 1.0 - 2.0_f64.powf(-5.0));
    }

    #[test]
    fn out_of_range_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }
}

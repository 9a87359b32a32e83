// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// A placement that cannot be resolved as declared.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum PlacementError {
    /// Width and height are both aspect-coupled, so neither can resolve first.
    #[error("width and height are both aspect-coupled (ratios {width} and {height})")]
    BothAxesAspect {
        /// Width ratio.
        width: f64,
        /// Height ratio.
        height: f64,
    },

    /// A coordinate or dimension parameter is NaN or infinite.
    #[error("non-finite {what} parameter")]
    NonFinite {
        /// Which declaration holds the bad value (`"x"`, `"y"`, `"width"`, `"height"`).
        what: &'static str,
    },
}

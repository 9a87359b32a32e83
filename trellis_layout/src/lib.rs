// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Layout: parent-relative geometry that resolves to pixel rectangles.
//!
//! Every element in a Trellis tree declares where it sits and how large it is
//! relative to its parent, one axis at a time:
//!
//! - [`Coordinate`]: a position on one axis, either a fraction of the parent span
//!   or a pixel offset from the parent's min edge, center, or max edge. Its
//!   [`Anchor`] also says which point of the element itself the position refers to.
//! - [`Dimension`]: a size on one axis, either a fraction of the parent span, a
//!   fixed pixel size, the parent span minus a margin, or a ratio of the *other*
//!   axis's resolved size (aspect coupling).
//! - [`Placement`]: the four declarations for one element, and the resolution
//!   rules that turn them into a [`ResolvedRect`].
//!
//! ## Resolution order
//!
//! Size always resolves before position, because anchoring an element by its
//! min or max edge needs its own extent. Within size resolution, an ASPECT axis
//! resolves after the other axis.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use trellis_layout::{Anchor, Coordinate, Dimension, Placement, ResolvedRect};
//!
//! let parent = ResolvedRect::new(Point::ZERO, Size::new(400.0, 200.0));
//! let placement = Placement::new(
//!     Coordinate::pixels(10.0, Anchor::Min),
//!     Coordinate::CENTER,
//!     Dimension::Aspect(2.0),
//!     Dimension::Relative(0.5),
//! );
//!
//! let rect = placement.resolve(parent);
//! assert_eq!(rect.size, Size::new(200.0, 100.0));
//! // Left edge pinned 10 px inside the parent's left edge.
//! assert_eq!(rect.min().x, -190.0);
//! ```
//!
//! ## Coordinate space
//!
//! Layout space has its origin at the center of the root span and +Y pointing up.
//! Windowing backends usually report the cursor with +Y pointing down; convert
//! before hit-testing with [`ResolvedRect::contains`].
//!
//! ## Degenerate input
//!
//! Layout has no runtime error surface: a bad declaration shows up as a wrong
//! picture. Non-finite results panic in debug builds and resolve to `0.0` in
//! release builds so that a single NaN cannot spread through a subtree.
//! [`Placement::validate`] checks a declaration up front and reports a
//! [`PlacementError`].

mod coordinate;
mod dimension;
mod error;
mod placement;
mod types;
mod util;

pub use coordinate::{Coordinate, CoordinateKind};
pub use dimension::Dimension;
pub use error::PlacementError;
pub use placement::{Placement, ResolvedRect};
pub use types::{Anchor, Axis};
pub use util::finite_or_zero;

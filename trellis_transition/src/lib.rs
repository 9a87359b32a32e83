// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Transition: animate typed fields of a UI element over time.
//!
//! A [`Transition`] describes a desired end state as a set of *components*, one
//! per animated field. Each component pairs a [`Lens`] (a named getter/setter for
//! one field of the element type `T`) with a target value. When the transition
//! is attached to an element, [`Transition::init`] snapshots every field's
//! current value as the *original*. Each [`Transition::update`] then advances a
//! normalized progress value, eases it, and writes interpolated values back
//! through the lenses. When progress reaches `1.0` every field is set to its
//! exact target and the transition reports that it is done.
//!
//! ## Value kinds
//!
//! Plain values (`f64`, [`Vec2`](kurbo::Vec2), `[f64; 3]`, `[f64; 4]`) are
//! interpolated linearly with the eased progress.
//!
//! [`Coordinate`](trellis_layout::Coordinate) and [`Dimension`](trellis_layout::Dimension)
//! fields cannot be interpolated in their own units, since original and target
//! may be of different kinds. Both ends are converted to pixels against the
//! current parent and own size, interpolated, and written back as a pixel value
//! for the in-between frames. The final frame writes the exact target, kind and
//! anchor included, so the element stays responsive to later parent resizes.
//! Layout fields are addressed through an [`AxisLens`], which fixes the axis
//! whose extents the conversion uses.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use trellis_layout::Placement;
//! use trellis_transition::{Animatable, Easing, Lens, Transition};
//!
//! #[derive(Default)]
//! struct Sprite {
//!     placement: Placement,
//!     alpha_mult: f64,
//!     glow: f64,
//! }
//!
//! impl Animatable for Sprite {
//!     fn placement(&self) -> &Placement { &self.placement }
//!     fn placement_mut(&mut self) -> &mut Placement { &mut self.placement }
//!     fn alpha_mult(&self) -> f64 { self.alpha_mult }
//!     fn set_alpha_mult(&mut self, alpha_mult: f64) { self.alpha_mult = alpha_mult; }
//! }
//!
//! let glow = Lens::new("glow", |s: &Sprite| s.glow, |s: &mut Sprite, v| s.glow = v);
//!
//! let mut fade_in = Transition::new(1000.0, Easing::Linear);
//! fade_in.set_target_alpha_mult(1.0).set_target_float(glow, 10.0);
//!
//! let mut sprite = Sprite::default();
//! fade_in.init(&sprite, 0.0);
//!
//! let size = Size::new(100.0, 100.0);
//! assert!(fade_in.update(500.0, &mut sprite, size, size));
//! assert_eq!(sprite.glow, 5.0);
//! assert!(!fade_in.update(500.0, &mut sprite, size, size));
//! assert_eq!(sprite.alpha_mult, 1.0);
//! ```
//!
//! ## Re-targeting
//!
//! There is no cancellation. Replacing an element's transition with a new one
//! and calling [`Transition::init`] snapshots the element's current, possibly
//! half-animated values, so the new animation starts where the old one left off.

mod component;
mod easing;
mod lens;
mod transition;

pub use component::{Lerp, ValueKind};
pub use easing::Easing;
pub use lens::{Animatable, AxisLens, Lens};
pub use transition::{Phase, Transition};

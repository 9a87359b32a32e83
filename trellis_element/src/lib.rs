// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Element: a retained tree of widgets with parent-relative layout.
//!
//! An [`Element`] combines:
//!
//! - a [`Placement`](trellis_layout::Placement), resolved every frame against
//!   the parent's rectangle;
//! - an alpha multiplier and an `active` flag, both inherited by the subtree
//!   (alpha multiplicatively, `active` only where a widget propagates it);
//! - a [`Widget`] payload that draws and reacts to input;
//! - owned children, drawn after (above) their parent in list order;
//! - at most one running [`Transition`](trellis_transition::Transition).
//!
//! ## Frame protocol
//!
//! 1. [`Element::update`] walks the tree parent-first. Each node lets its
//!    widget adjust the placement, resolves size then position, advances its
//!    transition, then updates its children inside the new rectangle.
//! 2. [`Element::render`] walks the tree again and issues draw calls to a
//!    [`Renderer`], compositing alpha on the way down.
//! 3. [`Element::handle_event`] broadcasts an [`Event`](trellis_event_state::Event)
//!    to every node. Widgets hit-test against the rectangle resolved by the
//!    last update and push [`Action`]s into a sink.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use trellis_element::{
//!     Action, Button, Element, FontId, FrameContext, Panel, RectDraw, Renderer, StringDraw,
//!     TextMeasure,
//! };
//! use trellis_event_state::{Event, InputState};
//! use trellis_layout::{Coordinate, Dimension, Placement};
//!
//! struct Monospace;
//! impl TextMeasure for Monospace {
//!     fn measure(&self, text: &str, _: FontId, scale: f64, _: f64) -> Size {
//!         Size::new(8.0 * scale * text.len() as f64, 16.0 * scale)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Count(usize);
//! impl Renderer for Count {
//!     fn draw_rect(&mut self, _: &RectDraw) { self.0 += 1; }
//!     fn draw_string(&mut self, _: &StringDraw<'_>) { self.0 += 1; }
//! }
//!
//! let ok = Placement::new(
//!     Coordinate::CENTER,
//!     Coordinate::CENTER,
//!     Dimension::Pixels(120.0),
//!     Dimension::Pixels(40.0),
//! );
//! let mut root = Element::panel(Placement::default(), Panel::filled([0.1, 0.1, 0.1, 1.0]))
//!     .with_child(Element::button(ok, Button::new(1, Panel::default())));
//! root.validate_tree().unwrap();
//!
//! let mut input = InputState::new();
//! input.set_mouse_state(Point::new(10.0, 5.0), false);
//! let mut cx = FrameContext::new(&input, &Monospace);
//! root.update_root(16.0, Size::new(800.0, 600.0), &mut cx);
//!
//! let mut renderer = Count::default();
//! root.render(1.0, &mut renderer);
//! assert_eq!(renderer.0, 2);
//!
//! let mut actions = Vec::new();
//! root.handle_event(&Event::MouseRelease, &input, &mut actions);
//! assert_eq!(actions, [Action::Clicked { id: 1 }]);
//! ```

mod context;
mod element;
pub mod props;
mod render;
mod widget;

#[cfg(test)]
mod testing;

pub use context::{Action, FrameContext};
pub use element::Element;
pub use render::{FontId, RectDraw, Renderer, Rgba, StringDraw, TextAlign, TextMeasure, TextureId};
pub use widget::{Button, ButtonState, Checkbox, Label, Panel, Slider, Widget};

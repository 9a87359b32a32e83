// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Event State: what the host tells the element tree about input.
//!
//! Two kinds of information flow into a tree each frame:
//!
//! - [`InputState`]: a snapshot of cursor position, primary button state and
//!   held modifier keys. Widgets read it during `update` (hover, drag) and while
//!   handling events. It is passed explicitly, so several trees (or tests) can
//!   each have their own.
//! - [`Event`]: discrete happenings such as a button release or a typed
//!   character. Events carry no target; they are broadcast to the whole tree
//!   and each widget decides relevance from its own geometry and the snapshot.
//!
//! ## Coordinate spaces
//!
//! Both spaces put the origin at the window center. Cursor space, as most
//! windowing backends report it, grows downward; layout space grows upward.
//! [`InputState::cursor_in_layout_space`] is the one place the sign flips.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use trellis_event_state::InputState;
//!
//! let mut input = InputState::new();
//! let window = Size::new(800.0, 600.0);
//! // Backend reports 100 px right and 50 px down from the top-left corner.
//! let cursor = InputState::cursor_from_window(Point::new(100.0, 50.0), window);
//! input.set_mouse_state(cursor, true);
//!
//! assert!(input.just_pressed());
//! assert_eq!(input.cursor_in_layout_space(), Point::new(-300.0, 250.0));
//! ```

mod event;
mod input;

pub use event::{ArrowDirection, Event};
pub use input::{InputState, Modifiers};

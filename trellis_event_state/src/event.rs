// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events broadcast through an element tree.

/// Direction of an arrow key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// A discrete input event, broadcast to every element of a tree.
///
/// Events carry no routing information. There is no consumption either: two
/// overlapping widgets that both consider themselves hit will both react.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Event {
    /// Nothing happened.
    #[default]
    None,
    /// The primary mouse button was released.
    MouseRelease,
    /// An arrow key was pressed.
    ArrowKey(ArrowDirection),
    /// Delete or backspace was pressed.
    Delete {
        /// `true` for backspace, `false` for forward delete.
        backspace: bool,
    },
    /// A character was typed.
    Character(char),
    /// The scroll wheel moved; positive is away from the user.
    Scroll {
        /// Scroll amount in lines.
        delta: f64,
    },
}

impl Event {
    /// Whether this is a pointer event, as opposed to keyboard input.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::MouseRelease | Self::Scroll { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_classification() {
        assert!(Event::MouseRelease.is_pointer());
        assert!(Event::Scroll { delta: -1.0 }.is_pointer());
        assert!(!Event::Character('a').is_pointer());
        assert!(!Event::ArrowKey(ArrowDirection::Left).is_pointer());
        assert!(!Event::default().is_pointer());
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget behaviour attached to an [`Element`](crate::Element).

mod button;
mod checkbox;
mod label;
mod panel;
mod slider;

pub use button::{Button, ButtonState};
pub use checkbox::Checkbox;
pub use label::Label;
pub use panel::Panel;
pub use slider::Slider;

use trellis_event_state::Event;
use trellis_layout::{Placement, ResolvedRect};
use trellis_transition::Transition;

use crate::context::{Action, FrameContext};
use crate::element::Element;
use crate::render::Renderer;

/// What an element is, beyond its geometry and children.
#[expect(
    clippy::large_enum_variant,
    reason = "widgets live inline in their element and are matched every frame"
)]
#[derive(Clone, Debug, Default)]
pub enum Widget {
    /// Groups children; draws nothing.
    #[default]
    Container,
    /// A rectangle.
    Panel(Panel),
    /// Text.
    Label(Label),
    /// A clickable panel.
    Button(Button),
    /// A toggle.
    Checkbox(Checkbox),
    /// A track and knob; the element's first two children.
    Slider(Slider),
}

impl Widget {
    /// The panel this widget draws, if any.
    #[must_use]
    pub fn panel(&self) -> Option<&Panel> {
        match self {
            Self::Panel(panel) => Some(panel),
            Self::Button(button) => Some(&button.panel),
            Self::Checkbox(checkbox) => Some(&checkbox.panel),
            Self::Container | Self::Label(_) | Self::Slider(_) => None,
        }
    }

    /// The panel this widget draws, mutably.
    pub fn panel_mut(&mut self) -> Option<&mut Panel> {
        match self {
            Self::Panel(panel) => Some(panel),
            Self::Button(button) => Some(&mut button.panel),
            Self::Checkbox(checkbox) => Some(&mut checkbox.panel),
            Self::Container | Self::Label(_) | Self::Slider(_) => None,
        }
    }

    /// Runs before the element resolves its geometry. May rewrite the
    /// placement, drive children, and ask for a transition to start.
    pub(crate) fn before_layout(
        &mut self,
        placement: &mut Placement,
        last: ResolvedRect,
        active: bool,
        children: &mut [Element],
        cx: &mut FrameContext<'_>,
    ) -> Option<Transition<Element>> {
        match self {
            Self::Container | Self::Panel(_) => None,
            Self::Label(label) => {
                label.measure(placement, last.size.width, cx.text);
                None
            }
            Self::Button(button) => button.track_pointer(last, cx.input),
            Self::Checkbox(checkbox) => {
                checkbox.sync_texture();
                None
            }
            Self::Slider(slider) => {
                slider.drive(last, active, cx.input, children, &mut cx.actions);
                None
            }
        }
    }

    /// React to a broadcast event. `hovered` is the owner's active hit test.
    pub(crate) fn on_event(
        &mut self,
        hovered: bool,
        event: &Event,
        actions: &mut Vec<Action>,
    ) -> Option<Transition<Element>> {
        match self {
            Self::Button(button) => {
                button.on_event(hovered, event, actions);
                None
            }
            Self::Checkbox(checkbox) => checkbox.on_event(hovered, event, actions),
            Self::Container | Self::Panel(_) | Self::Label(_) | Self::Slider(_) => None,
        }
    }

    /// Issue this widget's own draw call.
    pub(crate) fn draw<R: Renderer + ?Sized>(&self, rect: ResolvedRect, alpha: f64, renderer: &mut R) {
        match self {
            Self::Label(label) => label.draw(rect, alpha, renderer),
            _ => {
                if let Some(panel) = self.panel() {
                    panel.draw(rect, alpha, renderer);
                }
            }
        }
    }
}

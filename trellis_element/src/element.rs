// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element tree.

use kurbo::{Point, Size};
use trellis_event_state::{Event, InputState};
use trellis_layout::{Coordinate, Dimension, Placement, PlacementError, ResolvedRect};
use trellis_transition::{Animatable, Transition};

use crate::context::{Action, FrameContext};
use crate::render::Renderer;
use crate::widget::{Button, Checkbox, Label, Panel, Slider, Widget};

/// One node of a retained UI tree.
///
/// An element owns its children; dropping it drops the subtree. Each frame the
/// host calls [`update`](Self::update) on the root, then
/// [`render`](Self::render), and forwards input with
/// [`handle_event`](Self::handle_event).
#[derive(Clone, Debug)]
pub struct Element {
    /// Declared position and size relative to the parent.
    pub placement: Placement,
    /// Multiplies the alpha of this element and its whole subtree.
    pub alpha_mult: f64,
    /// Inactive elements still lay out, animate and draw, but ignore input.
    pub active: bool,
    /// Widget behaviour.
    pub widget: Widget,
    children: Vec<Self>,
    transition: Option<Transition<Self>>,
    resolved: ResolvedRect,
}

impl Default for Element {
    fn default() -> Self {
        Self::new(Placement::default(), Widget::Container)
    }
}

impl Animatable for Element {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn alpha_mult(&self) -> f64 {
        self.alpha_mult
    }

    fn set_alpha_mult(&mut self, alpha_mult: f64) {
        self.alpha_mult = alpha_mult;
    }
}

impl Element {
    /// An active, fully opaque element with no children.
    #[must_use]
    pub fn new(placement: Placement, widget: Widget) -> Self {
        Self {
            placement,
            alpha_mult: 1.0,
            active: true,
            widget,
            children: Vec::new(),
            transition: None,
            resolved: ResolvedRect::ZERO,
        }
    }

    /// A grouping element that draws nothing.
    #[must_use]
    pub fn container(placement: Placement) -> Self {
        Self::new(placement, Widget::Container)
    }

    /// A rectangle.
    #[must_use]
    pub fn panel(placement: Placement, panel: Panel) -> Self {
        Self::new(placement, Widget::Panel(panel))
    }

    /// A text label. Its height, and with a fixed scale its width, come from
    /// the measured text.
    #[must_use]
    pub fn label(x: Coordinate, y: Coordinate, width: Dimension, label: Label) -> Self {
        Self::new(
            Placement::new(x, y, width, Dimension::FILL),
            Widget::Label(label),
        )
    }

    /// A button.
    #[must_use]
    pub fn button(placement: Placement, button: Button) -> Self {
        Self::new(placement, Widget::Button(button))
    }

    /// A checkbox.
    #[must_use]
    pub fn checkbox(placement: Placement, checkbox: Checkbox) -> Self {
        Self::new(placement, Widget::Checkbox(checkbox))
    }

    /// A slider with its track and knob.
    ///
    /// The track spans the slider lengthwise at half its thickness. The knob
    /// is square, as thick as the slider.
    #[must_use]
    pub fn slider(placement: Placement, slider: Slider, track: Panel, knob: Button) -> Self {
        let half = Dimension::Relative(0.5);
        let square = Dimension::Aspect(1.0);
        let (track_size, knob_size) = if slider.vertical {
            ((half, Dimension::FILL), (Dimension::FILL, square))
        } else {
            ((Dimension::FILL, half), (square, Dimension::FILL))
        };
        let centered = |(width, height): (Dimension, Dimension)| {
            Placement::new(Coordinate::CENTER, Coordinate::CENTER, width, height)
        };
        Self::new(placement, Widget::Slider(slider))
            .with_child(Self::panel(centered(track_size), track))
            .with_child(Self::button(centered(knob_size), knob))
    }

    /// Append `child` and return `self`.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Set the alpha multiplier and return `self`.
    #[must_use]
    pub fn with_alpha_mult(mut self, alpha_mult: f64) -> Self {
        self.alpha_mult = alpha_mult;
        self
    }

    /// Set whether the element takes input and return `self`.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Append a child. Children draw above their parent and above earlier
    /// siblings.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Insert a child at `index`, or at the end if `index` is past it.
    pub fn insert_child(&mut self, index: usize, child: Self) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    /// Remove and return the child at `index`.
    pub fn remove_child(&mut self, index: usize) -> Option<Self> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Children in draw order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Children in draw order, mutably.
    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Rectangle resolved by the last update.
    #[must_use]
    pub fn resolved(&self) -> ResolvedRect {
        self.resolved
    }

    /// The running transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition<Self>> {
        self.transition.as_ref()
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Start `transition` after `delay` milliseconds, replacing any running
    /// one. The new transition starts from the element's current values, so
    /// replacing a half-finished animation does not jump.
    pub fn set_transition(&mut self, mut transition: Transition<Self>, delay: f64) {
        transition.init(self, delay);
        if self.transition.is_some() {
            tracing::trace!(fields = transition.len(), "replacing running transition");
        }
        self.transition = Some(transition);
    }

    /// Check this element's placement and every descendant's.
    pub fn validate_tree(&self) -> Result<(), PlacementError> {
        self.placement.validate()?;
        self.children.iter().try_for_each(Self::validate_tree)
    }

    /// Whether the element takes input and the cursor is strictly inside its
    /// last resolved rectangle.
    #[must_use]
    pub fn is_hovered(&self, input: &InputState) -> bool {
        self.active && self.resolved.contains(input.cursor_in_layout_space())
    }

    /// Whether this element or any descendant is hovered.
    #[must_use]
    pub fn any_hovered(&self, input: &InputState) -> bool {
        self.is_hovered(input) || self.children.iter().any(|c| c.any_hovered(input))
    }

    /// Update a root element filling a viewport of `size` centered on the
    /// layout origin.
    pub fn update_root(&mut self, dt: f64, size: Size, cx: &mut FrameContext<'_>) {
        self.update(dt, ResolvedRect::new(Point::ZERO, size), cx);
    }

    /// Advance one frame: resolve size, then position, then advance the
    /// transition, then update the children inside the new rectangle.
    ///
    /// `dt` is in milliseconds. A transition that moves or resizes the
    /// element writes the placement after it was resolved, so its effect shows
    /// in the next frame's geometry.
    pub fn update(&mut self, dt: f64, parent: ResolvedRect, cx: &mut FrameContext<'_>) {
        if let Some(transition) = self.widget.before_layout(
            &mut self.placement,
            self.resolved,
            self.active,
            &mut self.children,
            cx,
        ) {
            self.set_transition(transition, 0.0);
        }

        self.resolved = self.placement.resolve(parent);

        if let Some(mut transition) = self.transition.take() {
            let own_size = self.resolved.size;
            if transition.update(dt, self, parent.size, own_size) {
                self.transition = Some(transition);
            }
        }

        let rect = self.resolved;
        for child in &mut self.children {
            child.update(dt, rect, cx);
        }
    }

    /// Draw this element, then its children, with alpha composited from
    /// `parent_alpha`.
    pub fn render<R: Renderer + ?Sized>(&self, parent_alpha: f64, renderer: &mut R) {
        let alpha = self.alpha_mult * parent_alpha;
        self.widget.draw(self.resolved, alpha, renderer);
        for child in &self.children {
            child.render(alpha, renderer);
        }
    }

    /// Offer `event` to this element and every descendant.
    ///
    /// Nothing stops propagation: every widget that is hit reacts and reports
    /// its own action.
    pub fn handle_event(&mut self, event: &Event, input: &InputState, actions: &mut Vec<Action>) {
        let hovered = self.is_hovered(input);
        if let Some(transition) = self.widget.on_event(hovered, event, actions) {
            self.set_transition(transition, 0.0);
        }
        for child in &mut self.children {
            child.handle_event(event, input, actions);
        }
    }
}

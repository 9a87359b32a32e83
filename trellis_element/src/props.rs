// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenses onto widget fields, for use with
//! [`Transition::set_target_float`](trellis_transition::Transition::set_target_float)
//! and friends.
//!
//! Panel lenses address the panel of a [`Widget::Panel`], [`Widget::Button`]
//! or [`Widget::Checkbox`]. On any other widget they read a zero value and
//! ignore writes. [`label_color`] does the same for non-labels.
//!
//! ```rust
//! use trellis_element::{Element, Panel, props};
//! use trellis_layout::Placement;
//! use trellis_transition::{Easing, Transition};
//!
//! let mut element = Element::panel(Placement::default(), Panel::filled([0.0, 0.0, 0.0, 1.0]));
//! let mut flash = Transition::new(250.0, Easing::Cubic);
//! flash.set_target_vec4(props::panel_color(), [1.0, 0.8, 0.0, 1.0]);
//! element.set_transition(flash, 0.0);
//! ```

use trellis_transition::Lens;

use crate::element::Element;
use crate::render::Rgba;
use crate::widget::{Panel, Widget};

/// The element's alpha multiplier.
#[must_use]
pub fn alpha_mult() -> Lens<Element, f64> {
    Lens::alpha_mult()
}

fn read<V: Default>(element: &Element, field: fn(&Panel) -> V) -> V {
    element.widget.panel().map(field).unwrap_or_default()
}

fn write(element: &mut Element, field: impl FnOnce(&mut Panel)) {
    if let Some(panel) = element.widget.panel_mut() {
        field(panel);
    }
}

/// Panel fill color.
#[must_use]
pub fn panel_color() -> Lens<Element, Rgba> {
    Lens::new(
        "panel_color",
        |e: &Element| read(e, |p| p.color),
        |e: &mut Element, v| write(e, |p| p.color = v),
    )
}

/// Panel outline color.
#[must_use]
pub fn panel_outline_color() -> Lens<Element, Rgba> {
    Lens::new(
        "panel_outline_color",
        |e: &Element| read(e, |p| p.outline_color),
        |e: &mut Element, v| write(e, |p| p.outline_color = v),
    )
}

/// Panel corner radius.
#[must_use]
pub fn panel_corner_radius() -> Lens<Element, f64> {
    Lens::new(
        "panel_corner_radius",
        |e: &Element| read(e, |p| p.corner_radius),
        |e: &mut Element, v| write(e, |p| p.corner_radius = v),
    )
}

/// Panel rotation in degrees.
#[must_use]
pub fn panel_angle() -> Lens<Element, f64> {
    Lens::new(
        "panel_angle",
        |e: &Element| read(e, |p| p.angle),
        |e: &mut Element, v| write(e, |p| p.angle = v),
    )
}

/// Panel outline thickness.
#[must_use]
pub fn panel_outline_thickness() -> Lens<Element, f64> {
    Lens::new(
        "panel_outline_thickness",
        |e: &Element| read(e, |p| p.outline_thickness),
        |e: &mut Element, v| write(e, |p| p.outline_thickness = v),
    )
}

/// Label glyph color.
#[must_use]
pub fn label_color() -> Lens<Element, Rgba> {
    Lens::new(
        "label_color",
        |e: &Element| match &e.widget {
            Widget::Label(label) => label.color,
            _ => Rgba::default(),
        },
        |e: &mut Element, v| {
            if let Widget::Label(label) = &mut e.widget {
                label.color = v;
            }
        },
    )
}

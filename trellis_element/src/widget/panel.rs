// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat and textured rectangles.

use trellis_layout::ResolvedRect;

use crate::render::{Renderer, RectDraw, Rgba, TextureId, with_alpha};

/// A filled, optionally textured and outlined rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Panel {
    /// Texture to sample, or a flat fill.
    pub texture: Option<TextureId>,
    /// Fill color.
    pub color: Rgba,
    /// Corner radius in pixels.
    pub corner_radius: f64,
    /// Rotation in degrees.
    pub angle: f64,
    /// Outline color.
    pub outline_color: Rgba,
    /// Outline thickness in pixels.
    pub outline_thickness: f64,
}

impl Default for Panel {
    /// Opaque white, no texture, no outline.
    fn default() -> Self {
        Self {
            texture: None,
            color: [1.0, 1.0, 1.0, 1.0],
            corner_radius: 0.0,
            angle: 0.0,
            outline_color: [0.0, 0.0, 0.0, 1.0],
            outline_thickness: 0.0,
        }
    }
}

impl Panel {
    /// A flat panel of `color`.
    #[must_use]
    pub fn filled(color: Rgba) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Set the corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the outline.
    #[must_use]
    pub fn with_outline(mut self, color: Rgba, thickness: f64) -> Self {
        self.outline_color = color;
        self.outline_thickness = thickness;
        self
    }

    /// Set the texture.
    #[must_use]
    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    pub(crate) fn draw<R: Renderer + ?Sized>(&self, rect: ResolvedRect, alpha: f64, renderer: &mut R) {
        renderer.draw_rect(&RectDraw {
            texture: self.texture,
            center: rect.center,
            size: rect.size,
            angle: self.angle,
            color: with_alpha(self.color, alpha),
            corner_radius: self.corner_radius,
            outline_color: with_alpha(self.outline_color, alpha),
            outline_thickness: self.outline_thickness,
        });
    }
}

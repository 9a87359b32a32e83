// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing and text-measuring collaborators a tree talks to.
//!
//! Trellis owns no GPU resources. Textures and fonts are opaque handles that the
//! host hands out and the tree passes back unchanged in draw calls.

use kurbo::{Point, Size};

/// Straight (non-premultiplied) RGBA color, each channel in `[0, 1]`.
pub type Rgba = [f64; 4];

/// Opaque texture handle owned by the host renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Opaque font handle owned by the host renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Horizontal alignment of text lines around the draw position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Lines start at the left edge.
    #[default]
    Left,
    /// Lines end at the right edge.
    Right,
    /// Lines are centered.
    Center,
}

/// One rectangle draw call. Positions are in layout space (+Y up).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectDraw {
    /// Texture to sample, or a flat fill.
    pub texture: Option<TextureId>,
    /// Center of the rectangle.
    pub center: Point,
    /// Full size of the rectangle.
    pub size: Size,
    /// Rotation about the center, in degrees.
    pub angle: f64,
    /// Fill color, alpha already composited.
    pub color: Rgba,
    /// Corner radius in pixels.
    pub corner_radius: f64,
    /// Outline color, alpha already composited.
    pub outline_color: Rgba,
    /// Outline thickness in pixels; zero draws no outline.
    pub outline_thickness: f64,
}

/// One text draw call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StringDraw<'a> {
    /// Text to draw.
    pub text: &'a str,
    /// Font to draw with.
    pub font: FontId,
    /// Center of the text block.
    pub center: Point,
    /// Glyph scale.
    pub scale: f64,
    /// Line wrap width in pixels; zero disables wrapping.
    pub wrap_width: f64,
    /// Line alignment.
    pub align: TextAlign,
    /// Glyph color, alpha already composited.
    pub color: Rgba,
    /// Distance-field threshold for glyph edges.
    pub thickness: f64,
    /// Distance-field edge softness.
    pub softness: f64,
    /// Outline color, alpha already composited.
    pub outline_color: Rgba,
    /// Outline width in distance-field units.
    pub outline_thickness: f64,
    /// Outline edge softness.
    pub outline_softness: f64,
}

/// Receives the draw calls of a tree, in back-to-front order.
pub trait Renderer {
    /// Draw a rectangle.
    fn draw_rect(&mut self, rect: &RectDraw);
    /// Draw a string.
    fn draw_string(&mut self, text: &StringDraw<'_>);
}

/// Measures rendered text.
pub trait TextMeasure {
    /// Pixel size of `text` drawn with `font` at `scale`, wrapped at
    /// `wrap_width` pixels (zero for no wrapping).
    fn measure(&self, text: &str, font: FontId, scale: f64, wrap_width: f64) -> Size;
}

/// Multiply a color's alpha channel by `alpha`.
pub(crate) fn with_alpha(color: Rgba, alpha: f64) -> Rgba {
    let [r, g, b, a] = color;
    [r, g, b, a * alpha]
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text labels.

use trellis_layout::{Dimension, Placement, ResolvedRect};

use crate::render::{FontId, Renderer, Rgba, StringDraw, TextAlign, TextMeasure, with_alpha};

/// A run of text.
///
/// A label sizes itself from its text. Its height is always the measured
/// height. Its width comes from one of three modes:
///
/// - fixed `scale`, no wrap: the width becomes the measured width;
/// - `scale <= 0`, no wrap: the declared width stays, and the scale is chosen
///   so the text fills it;
/// - `wrap_width > 0`: the declared width stays and is used as the wrap width.
///   With `scale <= 0` the scale is `resolved width / wrap_width`.
///
/// Measuring uses last frame's resolved width, so a label whose width depends
/// on its scale settles one frame after a resize.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The text.
    pub text: String,
    /// Font handle.
    pub font: FontId,
    /// Glyph color.
    pub color: Rgba,
    /// Glyph scale; zero or less fits the text to the resolved width.
    pub scale: f64,
    /// Wrap width at unit scale; zero or less disables wrapping.
    pub wrap_width: f64,
    /// Line alignment.
    pub align: TextAlign,
    /// Distance-field edge threshold.
    pub thickness: f64,
    /// Distance-field edge softness.
    pub softness: f64,
    /// Outline color.
    pub outline_color: Rgba,
    /// Outline width.
    pub outline_thickness: f64,
    /// Outline softness.
    pub outline_softness: f64,
    render_scale: f64,
    render_wrap: f64,
}

impl Label {
    /// White, left-aligned, fit-to-width text.
    #[must_use]
    pub fn new(text: impl Into<String>, font: FontId) -> Self {
        Self {
            text: text.into(),
            font,
            color: [1.0, 1.0, 1.0, 1.0],
            scale: 0.0,
            wrap_width: 0.0,
            align: TextAlign::Left,
            thickness: 0.5,
            softness: 0.05,
            outline_color: [0.0, 0.0, 0.0, 0.0],
            outline_thickness: 1.0,
            outline_softness: 0.05,
            render_scale: 0.0,
            render_wrap: 0.0,
        }
    }

    /// Set the glyph color.
    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set a fixed glyph scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Enable wrapping.
    #[must_use]
    pub fn with_wrap_width(mut self, wrap_width: f64) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Set line alignment.
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the outline.
    #[must_use]
    pub fn with_outline(mut self, color: Rgba, thickness: f64, softness: f64) -> Self {
        self.outline_color = color;
        self.outline_thickness = thickness;
        self.outline_softness = softness;
        self
    }

    /// Scale used for the last draw.
    #[must_use]
    pub fn render_scale(&self) -> f64 {
        self.render_scale
    }

    /// Rewrite `placement` from the measured text.
    pub(crate) fn measure(
        &mut self,
        placement: &mut Placement,
        resolved_width: f64,
        text: &dyn TextMeasure,
    ) {
        let height = if self.wrap_width <= 0.0 {
            if self.scale <= 0.0 {
                let unit = text.measure(&self.text, self.font, 1.0, 0.0).width;
                self.render_scale = if unit > 0.0 { resolved_width / unit } else { 0.0 };
            } else {
                self.render_scale = self.scale;
                placement.width =
                    Dimension::Pixels(text.measure(&self.text, self.font, self.scale, 0.0).width);
            }
            self.render_wrap = 0.0;
            text.measure(&self.text, self.font, self.render_scale, 0.0).height
        } else {
            self.render_scale = if self.scale <= 0.0 {
                resolved_width / self.wrap_width
            } else {
                self.scale
            };
            self.render_wrap = resolved_width;
            text.measure(&self.text, self.font, self.render_scale, self.render_wrap)
                .height
        };
        placement.height = Dimension::Pixels(height);
    }

    pub(crate) fn draw<R: Renderer + ?Sized>(&self, rect: ResolvedRect, alpha: f64, renderer: &mut R) {
        renderer.draw_string(&StringDraw {
            text: &self.text,
            font: self.font,
            center: rect.center,
            scale: self.render_scale,
            wrap_width: self.render_wrap,
            align: self.align,
            color: with_alpha(self.color, alpha),
            thickness: self.thickness,
            softness: self.softness,
            outline_color: with_alpha(self.outline_color, alpha),
            outline_thickness: self.outline_thickness,
            outline_softness: self.outline_softness,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedMeasure;

    #[test]
    fn fixed_scale_sizes_both_axes() {
        let mut label = Label::new("hello", FontId(0)).with_scale(2.0);
        let mut placement = Placement::default();
        label.measure(&mut placement, 0.0, &FixedMeasure);
        // Five glyphs of 10 px at scale 2; one 20 px line at scale 2.
        assert_eq!(placement.width, Dimension::Pixels(100.0));
        assert_eq!(placement.height, Dimension::Pixels(40.0));
        assert_eq!(label.render_scale(), 2.0);
    }

    #[test]
    fn fit_scale_follows_resolved_width() {
        let mut label = Label::new("abcd", FontId(0));
        let mut placement = Placement::default();
        label.measure(&mut placement, 80.0, &FixedMeasure);
        assert_eq!(label.render_scale(), 2.0);
        assert_eq!(placement.width, Dimension::FILL, "declared width is kept");
        assert_eq!(placement.height, Dimension::Pixels(40.0));
    }

    #[test]
    fn empty_text_fits_to_zero_scale() {
        let mut label = Label::new("", FontId(0));
        let mut placement = Placement::default();
        label.measure(&mut placement, 80.0, &FixedMeasure);
        assert_eq!(label.render_scale(), 0.0);
    }

    #[test]
    fn wrapping_measures_lines() {
        let mut label = Label::new("abcdefghij", FontId(0)).with_wrap_width(50.0);
        let mut placement = Placement::default();
        // Scale 1: 100 px of text wrapped at 50 px is two lines.
        label.measure(&mut placement, 50.0, &FixedMeasure);
        assert_eq!(label.render_scale(), 1.0);
        assert_eq!(placement.height, Dimension::Pixels(40.0));
    }

    #[test]
    fn wrapped_fit_scale_divides_width_by_wrap() {
        let mut label = Label::new("abcdefghij", FontId(0)).with_wrap_width(50.0);
        let mut placement = Placement::default();
        // Scale 100 / 50 = 2: 200 px of text wrapped at 100 px is two 40 px lines.
        label.measure(&mut placement, 100.0, &FixedMeasure);
        assert_eq!(label.render_scale(), 2.0);
        assert_eq!(placement.width, Dimension::FILL, "declared width is kept");
        assert_eq!(placement.height, Dimension::Pixels(80.0));
    }
}

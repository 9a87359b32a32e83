// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator doubles for unit tests.

use kurbo::Size;

use crate::render::{FontId, RectDraw, Renderer, StringDraw, TextMeasure};

/// Every glyph is 10 px wide and every line 20 px tall, at unit scale.
pub(crate) struct FixedMeasure;

impl TextMeasure for FixedMeasure {
    fn measure(&self, text: &str, _font: FontId, scale: f64, wrap_width: f64) -> Size {
        let width = 10.0 * scale * text.chars().count() as f64;
        if wrap_width > 0.0 && width > wrap_width {
            let lines = (width / wrap_width).ceil();
            Size::new(wrap_width, 20.0 * scale * lines)
        } else {
            Size::new(width, 20.0 * scale)
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum Draw {
    Rect(RectDraw),
    String { text: String, scale: f64 },
}

#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) draws: Vec<Draw>,
}

impl Renderer for RecordingRenderer {
    fn draw_rect(&mut self, rect: &RectDraw) {
        self.draws.push(Draw::Rect(*rect));
    }

    fn draw_string(&mut self, text: &StringDraw<'_>) {
        self.draws.push(Draw::String {
            text: text.text.to_owned(),
            scale: text.scale,
        });
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small settings menu driven by scripted input.
//!
//! This example shows how to:
//! - build a tree of panels, labels, a button, a checkbox and a slider,
//! - fade the menu in with a delayed transition,
//! - feed per-frame input and broadcast events,
//! - collect the resulting actions,
//! - draw through a renderer that prints its calls.
//!
//! Run:
//! - `cargo run -p trellis_demos --example settings_menu`

use kurbo::{Point, Size};
use trellis_element::{
    Action, Button, Checkbox, Element, FontId, FrameContext, Label, Panel, RectDraw, Renderer,
    Slider, StringDraw, TextAlign, TextMeasure, props,
};
use trellis_event_state::{Event, InputState};
use trellis_layout::{Anchor, Coordinate, Dimension, Placement};
use trellis_transition::{Easing, Transition};

const WINDOW: Size = Size::new(800.0, 600.0);
const FRAME_MS: f64 = 1000.0 / 60.0;

const PLAY: u32 = 1;
const MUTE: u32 = 2;
const VOLUME: u32 = 3;

/// Pretends every glyph is 9 px wide and 18 px tall at scale 1.
struct Monospace;

impl TextMeasure for Monospace {
    fn measure(&self, text: &str, _font: FontId, scale: f64, wrap_width: f64) -> Size {
        let width = 9.0 * scale * text.chars().count() as f64;
        if wrap_width > 0.0 && width > wrap_width {
            Size::new(wrap_width, 18.0 * scale * (width / wrap_width).ceil())
        } else {
            Size::new(width, 18.0 * scale)
        }
    }
}

/// Prints one line per draw call.
struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn draw_rect(&mut self, rect: &RectDraw) {
        println!(
            "  rect   center=({:7.1}, {:7.1}) size={:5.1}x{:5.1} alpha={:.2}",
            rect.center.x, rect.center.y, rect.size.width, rect.size.height, rect.color[3]
        );
    }

    fn draw_string(&mut self, text: &StringDraw<'_>) {
        println!(
            "  string center=({:7.1}, {:7.1}) scale={:.2} alpha={:.2} {:?}",
            text.center.x, text.center.y, text.scale, text.color[3], text.text
        );
    }
}

fn row(index: u8) -> Coordinate {
    Coordinate::pixels(20.0 + 50.0 * f64::from(index), Anchor::Max)
}

fn build_menu() -> Element {
    let font = FontId(0);

    let mut hover = Transition::new(120.0, Easing::Quadratic);
    hover.set_target_vec4(props::panel_color(), [0.35, 0.55, 0.9, 1.0]);
    let mut base = Transition::new(200.0, Easing::Quadratic);
    base.set_target_vec4(props::panel_color(), [0.25, 0.4, 0.7, 1.0])
        .set_target_width(Dimension::Relative(0.8));
    let mut hold = Transition::new(60.0, Easing::Linear);
    hold.set_target_width(Dimension::Relative(0.75));
    let mut release = hover.clone();
    release.set_target_width(Dimension::Relative(0.8));

    let play = Button::new(PLAY, Panel::filled([0.25, 0.4, 0.7, 1.0]).with_corner_radius(8.0))
        .with_transitions(base, release, hold);
    let mute = Checkbox::new(MUTE, false, Panel::filled([0.9, 0.9, 0.9, 1.0]));
    let volume = Slider::new(VOLUME, 0.5, 0.0, 1.0);

    Element::panel(
        Placement::new(
            Coordinate::CENTER,
            Coordinate::CENTER,
            Dimension::Pixels(320.0),
            Dimension::Aspect(0.75),
        ),
        Panel::filled([0.12, 0.12, 0.14, 0.95])
            .with_corner_radius(12.0)
            .with_outline([1.0, 1.0, 1.0, 0.2], 1.0),
    )
    .with_alpha_mult(0.0)
    .with_child(Element::label(
        Coordinate::CENTER,
        row(0),
        Dimension::Relative(0.6),
        Label::new("Settings", font).with_align(TextAlign::Center),
    ))
    .with_child(Element::button(
        Placement::new(
            Coordinate::CENTER,
            row(1),
            Dimension::Relative(0.8),
            Dimension::Pixels(36.0),
        ),
        play,
    ))
    .with_child(Element::checkbox(
        Placement::new(
            Coordinate::pixels(24.0, Anchor::Min),
            row(2),
            Dimension::Aspect(1.0),
            Dimension::Pixels(24.0),
        ),
        mute,
    ))
    .with_child(Element::label(
        Coordinate::pixels(60.0, Anchor::Min),
        row(2),
        Dimension::FILL,
        Label::new("Mute audio", font).with_scale(1.0),
    ))
    .with_child(Element::slider(
        Placement::new(
            Coordinate::CENTER,
            row(3),
            Dimension::Relative(0.8),
            Dimension::Pixels(20.0),
        ),
        volume,
        Panel::filled([0.4, 0.4, 0.45, 1.0]),
        Button::silent(Panel::filled([0.95, 0.95, 0.95, 1.0]).with_corner_radius(10.0)),
    ))
}

/// One scripted frame: where the cursor is (window pixels, top-left origin),
/// whether the button is held, and what else happened.
struct Step {
    frames: usize,
    cursor: Point,
    pressed: bool,
    event: Option<Event>,
}

fn main() {
    let mut menu = build_menu();
    if let Err(err) = menu.validate_tree() {
        eprintln!("menu layout is invalid: {err}");
        return;
    }

    let mut fade_in = Transition::new(300.0, Easing::Cubic);
    fade_in.set_target_alpha_mult(1.0);
    menu.set_transition(fade_in, 100.0);

    // In window pixels the play button is centered at (400, 268) and the
    // slider track spans x 272..528 at y 360.
    let script = [
        Step { frames: 30, cursor: Point::new(20.0, 20.0), pressed: false, event: None },
        Step { frames: 10, cursor: Point::new(400.0, 268.0), pressed: false, event: None },
        Step { frames: 4, cursor: Point::new(400.0, 268.0), pressed: true, event: None },
        Step {
            frames: 1,
            cursor: Point::new(400.0, 268.0),
            pressed: false,
            event: Some(Event::MouseRelease),
        },
        Step { frames: 2, cursor: Point::new(400.0, 360.0), pressed: true, event: None },
        Step { frames: 6, cursor: Point::new(500.0, 360.0), pressed: true, event: None },
        Step { frames: 1, cursor: Point::new(500.0, 360.0), pressed: false, event: None },
    ];

    let mut input = InputState::new();
    let mut frame = 0_usize;
    for step in &script {
        for _ in 0..step.frames {
            input.set_mouse_state(InputState::cursor_from_window(step.cursor, WINDOW), step.pressed);
            let mut cx = FrameContext::new(&input, &Monospace);
            menu.update_root(FRAME_MS, WINDOW, &mut cx);
            let mut actions = cx.take_actions();
            if let Some(event) = &step.event {
                menu.handle_event(event, &input, &mut actions);
            }
            for action in actions {
                report(frame, action);
            }
            frame += 1;
        }
    }

    println!("final frame {frame}, hovered: {}", menu.any_hovered(&input));
    menu.render(1.0, &mut ConsoleRenderer);
}

fn report(frame: usize, action: Action) {
    match action {
        Action::Clicked { id: PLAY } => println!("[{frame:3}] play clicked"),
        Action::Toggled { id: MUTE, checked } => println!("[{frame:3}] mute = {checked}"),
        Action::ValueChanged { id: VOLUME, value } => println!("[{frame:3}] volume = {value:.2}"),
        other => println!("[{frame:3}] unhandled {other:?}"),
    }
}

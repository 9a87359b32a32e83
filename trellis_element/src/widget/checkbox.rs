// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle checkboxes.

use trellis_event_state::Event;
use trellis_transition::Transition;

use crate::context::Action;
use crate::element::Element;
use crate::render::TextureId;
use crate::widget::Panel;

/// A two-state toggle drawn as a panel whose texture follows the state.
#[derive(Clone, Debug)]
pub struct Checkbox {
    /// Appearance; the texture is overwritten every frame.
    pub panel: Panel,
    /// Id reported in [`Action::Toggled`].
    pub id: u32,
    /// Current state.
    pub checked: bool,
    /// Texture while checked.
    pub checked_texture: Option<TextureId>,
    /// Texture while unchecked.
    pub unchecked_texture: Option<TextureId>,
    /// Plays when the box becomes checked.
    pub check: Transition<Element>,
    /// Plays when the box becomes unchecked.
    pub uncheck: Transition<Element>,
}

impl Checkbox {
    /// An untextured checkbox.
    #[must_use]
    pub fn new(id: u32, checked: bool, panel: Panel) -> Self {
        Self {
            panel,
            id,
            checked,
            checked_texture: None,
            unchecked_texture: None,
            check: Transition::default(),
            uncheck: Transition::default(),
        }
    }

    /// Set the per-state textures.
    #[must_use]
    pub fn with_textures(mut self, checked: TextureId, unchecked: TextureId) -> Self {
        self.checked_texture = Some(checked);
        self.unchecked_texture = Some(unchecked);
        self
    }

    /// Set the per-state transitions.
    #[must_use]
    pub fn with_transitions(
        mut self,
        check: Transition<Element>,
        uncheck: Transition<Element>,
    ) -> Self {
        self.check = check;
        self.uncheck = uncheck;
        self
    }

    pub(crate) fn sync_texture(&mut self) {
        self.panel.texture = if self.checked {
            self.checked_texture
        } else {
            self.unchecked_texture
        };
    }

    pub(crate) fn on_event(
        &mut self,
        hovered: bool,
        event: &Event,
        actions: &mut Vec<Action>,
    ) -> Option<Transition<Element>> {
        if *event != Event::MouseRelease || !hovered {
            return None;
        }
        self.checked = !self.checked;
        tracing::debug!(id = self.id, checked = self.checked, "checkbox toggled");
        actions.push(Action::Toggled {
            id: self.id,
            checked: self.checked,
        });
        Some(if self.checked {
            self.check.clone()
        } else {
            self.uncheck.clone()
        })
    }
}

// Decoded action data for one sprite element

use super::tables::{ActionIndex, DirectionIndex};
use super::AnimationError;
use crate::core::math::wrap_index;
use glam::Vec2;
use serde::Deserialize;

fn unit_scale() -> Vec2 {
    Vec2::ONE
}

/// A single positioned, scaled, optionally mirrored image inside a frame
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Index into the element's sprite sheet; negative means "draw nothing"
    pub sprite_frame_index: i32,
    /// Offset in source pixels
    #[serde(default)]
    pub position: Vec2,
    #[serde(default = "unit_scale")]
    pub scale: Vec2,
    #[serde(default)]
    pub mirrored: bool,
}

impl Layer {
    pub fn new(sprite_frame_index: i32) -> Self {
        Self {
            sprite_frame_index,
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            mirrored: false,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Sprite-frame index, or `None` for an inert layer
    pub fn sprite_index(&self) -> Option<usize> {
        usize::try_from(self.sprite_frame_index).ok()
    }
}

/// One still image made of stacked layers
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Anchor deltas used to chain offsets between elements, by frame index
    #[serde(default)]
    pub position_deltas: Vec<Vec2>,
}

impl Frame {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            layers,
            position_deltas: Vec::new(),
        }
    }

    pub fn with_position_deltas(mut self, deltas: Vec<Vec2>) -> Self {
        self.position_deltas = deltas;
        self
    }

    /// Delta for `frame_index`; `None` when the frame carries none for it
    pub fn position_delta(&self, frame_index: usize) -> Option<Vec2> {
        self.position_deltas.get(frame_index).copied()
    }
}

/// One animation sequence: a delay and its frames
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Authored delay per frame, in milliseconds
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Action {
    pub fn new(delay_ms: f64, frames: Vec<Frame>) -> Self {
        Self { delay_ms, frames }
    }

    /// Get the number of frames in the action
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Read-only view over the decoded actions of one sprite element
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ActionSet {
    #[serde(default)]
    actions: Vec<Action>,
}

impl ActionSet {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Decode an action set from the JSON shape produced by the asset tools
    pub fn from_json(json: &str) -> Result<Self, AnimationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the number of actions
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Reduce a raw action index into range; `None` when there are no actions
    pub fn effective_index(&self, raw: usize) -> Option<usize> {
        wrap_index(raw, self.actions.len())
    }

    /// Action for an action group and facing, wrapped into range
    pub fn action(&self, group: ActionIndex, direction: DirectionIndex) -> Option<&Action> {
        self.action_at(group.raw(direction))
    }

    /// Action at a raw index, wrapped into range
    pub fn action_at(&self, raw: usize) -> Option<&Action> {
        self.effective_index(raw).map(|i| &self.actions[i])
    }
}

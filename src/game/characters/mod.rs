// Character sprite system
//
// This module contains everything needed to turn a character's state into
// an ordered list of draw descriptors:
// - Activity state, facing and action timing
// - Lookup tables from state/facing to action index
// - Decoded action data per sprite element
// - Frame selection and layer compositing
// - Shadow/body/head aggregation

pub mod action;
pub mod animation;
pub mod compositor;
pub mod config;
pub mod sprite;
pub mod state;
pub mod tables;

// Re-export commonly used types
pub use action::{Action, ActionSet, Frame, Layer};
pub use animation::{cycle_duration_ms, frame_duration_ms, select_frame, FrameSelection};
pub use compositor::{LayerCompositor, OffsetMode};
pub use config::CompositorConfig;
pub use sprite::{
    CharacterCompositor, CompositeCharacterSprite, ElementPolicy, ElementPolicyTable,
    ElementSprites, ResolvedElement, SpriteElement,
};
pub use state::{ActionClock, ActivityState, CharacterState, Direction, PlayMode};
pub use tables::{direction_index, ActionIndex, ActionTable, CameraRotation, DirectionIndex};

/// Errors raised while setting up the compositor
///
/// Per-tick resolution never fails; these only surface at startup or when
/// decoding action data.
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("No action index configured for activity state {0:?}")]
    MissingActionIndex(ActivityState),

    #[error("No policy configured for sprite element {0:?}")]
    MissingElementPolicy(SpriteElement),

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },

    #[error("Malformed animation data: {0}")]
    Malformed(#[from] serde_json::Error),
}

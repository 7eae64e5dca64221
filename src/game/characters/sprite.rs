// Composite character sprite: shadow, body and head resolved together

use super::action::ActionSet;
use super::animation::{select_frame, FrameSelection};
use super::compositor::{LayerCompositor, OffsetMode};
use super::config::CompositorConfig;
use super::state::{ActivityState, CharacterState};
use super::tables::{direction_index, ActionTable, DirectionIndex};
use super::AnimationError;
use crate::engine::assets::SpriteSource;
use crate::engine::renderer::DrawDescriptor;
use glam::Vec2;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Independently animated part of a character, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteElement {
    Shadow,
    Body,
    Head,
}

impl SpriteElement {
    /// Back-to-front draw order; offsets chain in this order too
    pub const ALL: [SpriteElement; 3] = [Self::Shadow, Self::Body, Self::Head];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Per-element exceptions to the normal action lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ElementPolicy {
    /// Always play this raw action, whatever the state and facing
    pub pinned_action: Option<usize>,
    pub offset_mode: OffsetMode,
    /// States in which the element is not drawn at all
    pub hidden_in: Vec<ActivityState>,
}

impl ElementPolicy {
    pub fn new(offset_mode: OffsetMode) -> Self {
        Self {
            pinned_action: None,
            offset_mode,
            hidden_in: Vec::new(),
        }
    }

    pub fn pinned(mut self, action: usize) -> Self {
        self.pinned_action = Some(action);
        self
    }

    pub fn hidden_in(mut self, states: &[ActivityState]) -> Self {
        self.hidden_in = states.to_vec();
        self
    }

    pub fn is_hidden(&self, state: ActivityState) -> bool {
        self.hidden_in.contains(&state)
    }
}

/// Policy for every sprite element
#[derive(Debug, Clone)]
pub struct ElementPolicyTable {
    policies: HashMap<SpriteElement, ElementPolicy>,
}

impl ElementPolicyTable {
    /// Build a table, failing if any element has no policy
    pub fn new(
        policies: impl IntoIterator<Item = (SpriteElement, ElementPolicy)>,
    ) -> Result<Self, AnimationError> {
        let policies: HashMap<_, _> = policies.into_iter().collect();

        if let Some(missing) = SpriteElement::ALL
            .iter()
            .find(|element| !policies.contains_key(element))
        {
            return Err(AnimationError::MissingElementPolicy(*missing));
        }

        Ok(Self { policies })
    }

    /// Shadow has a single animation and hides while dead or sitting; the
    /// body anchors the chain and the head follows it.
    pub fn standard() -> Self {
        let policies = [
            (
                SpriteElement::Shadow,
                ElementPolicy::new(OffsetMode::Chained)
                    .pinned(0)
                    .hidden_in(&[ActivityState::Dead, ActivityState::Sitting]),
            ),
            (SpriteElement::Body, ElementPolicy::new(OffsetMode::Anchor)),
            (SpriteElement::Head, ElementPolicy::new(OffsetMode::Chained)),
        ];

        Self {
            policies: policies.into_iter().collect(),
        }
    }

    pub fn policy(&self, element: SpriteElement) -> Option<&ElementPolicy> {
        self.policies.get(&element)
    }
}

impl Default for ElementPolicyTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Decoded data for one element: its actions and the images they reference
///
/// Both halves are shared read-only between every character using them.
#[derive(Clone)]
pub struct ElementSprites {
    pub actions: Arc<ActionSet>,
    pub sprites: Arc<dyn SpriteSource + Send + Sync>,
}

impl ElementSprites {
    pub fn new(actions: Arc<ActionSet>, sprites: Arc<dyn SpriteSource + Send + Sync>) -> Self {
        Self { actions, sprites }
    }
}

impl std::fmt::Debug for ElementSprites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementSprites")
            .field("action_count", &self.actions.action_count())
            .finish_non_exhaustive()
    }
}

/// The elements making up one character
///
/// Holds no timing state; everything time-dependent comes from the
/// `CharacterState` passed to the compositor each tick.
#[derive(Debug, Clone, Default)]
pub struct CompositeCharacterSprite {
    elements: [Option<ElementSprites>; 3],
}

impl CompositeCharacterSprite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, element: SpriteElement, sprites: ElementSprites) -> Self {
        self.set_element(element, sprites);
        self
    }

    pub fn set_element(&mut self, element: SpriteElement, sprites: ElementSprites) {
        self.elements[element.slot()] = Some(sprites);
    }

    pub fn remove_element(&mut self, element: SpriteElement) -> Option<ElementSprites> {
        self.elements[element.slot()].take()
    }

    pub fn element(&self, element: SpriteElement) -> Option<&ElementSprites> {
        self.elements[element.slot()].as_ref()
    }
}

/// Where an element landed for one tick
#[derive(Debug, Clone, Copy)]
pub struct ResolvedElement<'a> {
    /// Action index after pinning and wrapping
    pub action_index: usize,
    pub selection: FrameSelection<'a>,
}

/// Resolves whole characters into ordered draw lists
#[derive(Debug, Clone)]
pub struct CharacterCompositor {
    layers: LayerCompositor,
    actions: ActionTable,
    policies: ElementPolicyTable,
}

impl CharacterCompositor {
    /// Create a compositor, validating the configuration up front
    pub fn new(
        config: CompositorConfig,
        actions: ActionTable,
        policies: ElementPolicyTable,
    ) -> Result<Self, AnimationError> {
        config.validate()?;
        Ok(Self {
            layers: LayerCompositor::new(config),
            actions,
            policies,
        })
    }

    /// Compositor with the standard tables
    pub fn with_config(config: CompositorConfig) -> Result<Self, AnimationError> {
        Self::new(config, ActionTable::standard()?, ElementPolicyTable::standard())
    }

    pub fn config(&self) -> &CompositorConfig {
        self.layers.config()
    }

    /// Draw list for one character, back to front
    pub fn compose(
        &self,
        sprite: &CompositeCharacterSprite,
        state: &CharacterState,
    ) -> Vec<DrawDescriptor> {
        let mut out = Vec::new();
        self.compose_into(sprite, state, &mut out);
        out
    }

    /// Append one character's draw list to `out`
    pub fn compose_into(
        &self,
        sprite: &CompositeCharacterSprite,
        state: &CharacterState,
        out: &mut Vec<DrawDescriptor>,
    ) {
        let direction = direction_index(state.direction, self.config().camera_rotation);
        let mut offset = Vec2::ZERO;

        for element in SpriteElement::ALL {
            let Some(policy) = self.policies.policy(element) else {
                continue;
            };
            if policy.is_hidden(state.activity) {
                continue;
            }
            let Some(data) = sprite.element(element) else {
                continue;
            };
            let Some(resolved) = self.resolve_with(element, policy, data, state, direction) else {
                continue;
            };

            offset = self.layers.compose(
                &resolved.selection,
                policy.offset_mode,
                offset,
                state.position,
                data.sprites.as_ref(),
                out,
            );
        }
    }

    /// Action and frame an element shows this tick
    ///
    /// `None` when the element is hidden, missing, or has no frames to show.
    pub fn resolve_element<'a>(
        &self,
        sprite: &'a CompositeCharacterSprite,
        element: SpriteElement,
        state: &CharacterState,
    ) -> Option<ResolvedElement<'a>> {
        let policy = self.policies.policy(element)?;
        if policy.is_hidden(state.activity) {
            return None;
        }
        let data = sprite.element(element)?;
        let direction = direction_index(state.direction, self.config().camera_rotation);
        self.resolve_with(element, policy, data, state, direction)
    }

    /// Whether a `PlayOnce` action has run out on the body
    pub fn is_action_finished(
        &self,
        sprite: &CompositeCharacterSprite,
        state: &CharacterState,
    ) -> bool {
        self.resolve_element(sprite, SpriteElement::Body, state)
            .map_or(false, |resolved| resolved.selection.finished)
    }

    fn resolve_with<'a>(
        &self,
        element: SpriteElement,
        policy: &ElementPolicy,
        data: &'a ElementSprites,
        state: &CharacterState,
        direction: DirectionIndex,
    ) -> Option<ResolvedElement<'a>> {
        let raw = match policy.pinned_action {
            Some(pinned) => pinned,
            None => self.actions.action_index(state.activity).raw(direction),
        };

        let Some(action_index) = data.actions.effective_index(raw) else {
            debug!("{:?} has no actions, skipping", element);
            return None;
        };
        let action = data.actions.action_at(action_index)?;

        let Some(selection) = select_frame(action, state.elapsed_ms, state.play_mode, self.config())
        else {
            debug!("{:?} action {} has no frames, skipping", element, action_index);
            return None;
        };

        Some(ResolvedElement {
            action_index,
            selection,
        })
    }
}

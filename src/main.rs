use anyhow::{Context, Result};
use glam::Vec3;
use log::{debug, info};
use rusted_sprites::engine::assets::{AssetId, SpriteFrame, SpriteSheet, TextureHandle};
use rusted_sprites::game::characters::cycle_duration_ms;
use rusted_sprites::{
    ActionClock, ActionSet, ActivityState, CharacterCompositor, CompositeCharacterSprite,
    CompositorConfig, Direction, ElementSprites, PlayMode, SpriteElement,
};
use std::sync::Arc;

/// Simulated frame time (20 ticks per second)
const TICK_SECONDS: f32 = 0.05;

/// (activity, facing, play mode, ticks to hold it)
///
/// Each step starts its action from the first frame, so back-to-back
/// attacks play twice.
const SCRIPT: [(ActivityState, Direction, PlayMode, u32); 6] = [
    (ActivityState::Idle, Direction::South, PlayMode::Repeat, 10),
    (ActivityState::Walking, Direction::East, PlayMode::Repeat, 10),
    (ActivityState::Attacking, Direction::East, PlayMode::PlayOnce, 6),
    (ActivityState::Attacking, Direction::East, PlayMode::PlayOnce, 12),
    (ActivityState::Sitting, Direction::South, PlayMode::Repeat, 4),
    (ActivityState::Dead, Direction::South, PlayMode::PlayOnce, 4),
];

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Sprites demo...");

    let compositor = CharacterCompositor::with_config(CompositorConfig::default())?;
    let sprite = demo_character()?;
    let position = Vec3::new(0.0, 42.0, 0.0);

    let mut clock = ActionClock::new();
    let mut tick = 0u32;

    for (activity, direction, play_mode, ticks) in SCRIPT {
        clock.restart(activity, direction, play_mode);
        info!("Switching to {:?} facing {:?} ({:?})", activity, direction, play_mode);

        let state = clock.snapshot(position);
        if let Some(body) = compositor.resolve_element(&sprite, SpriteElement::Body, &state) {
            let action = sprite
                .element(SpriteElement::Body)
                .and_then(|data| data.actions.action_at(body.action_index));
            if let Some(action) = action {
                info!(
                    "  body action {} runs {:.0}ms per cycle",
                    body.action_index,
                    cycle_duration_ms(action, compositor.config())
                );
            }
        }

        for _ in 0..ticks {
            let state = clock.snapshot(position);
            let draws = compositor.compose(&sprite, &state);

            info!(
                "tick {:3} t={:6.1}ms: {} layer(s)",
                tick,
                state.elapsed_ms,
                draws.len()
            );
            for draw in &draws {
                debug!(
                    "  texture {:#018x} size ({:.3}, {:.3}) at ({:.3}, {:.3}, {:.3})",
                    draw.texture.id().as_u64(),
                    draw.size.x,
                    draw.size.y,
                    draw.world_position.x,
                    draw.world_position.y,
                    draw.world_position.z
                );
            }

            if play_mode == PlayMode::PlayOnce
                && activity != ActivityState::Dead
                && compositor.is_action_finished(&sprite, &state)
            {
                info!("{:?} finished, back to idle", activity);
                clock.transition(ActivityState::Idle, direction, PlayMode::Repeat);
            }

            clock.update(TICK_SECONDS);
            tick += 1;
        }
    }

    info!("Demo finished after {} ticks", tick);
    Ok(())
}

/// Build a character from the bundled action documents
fn demo_character() -> Result<CompositeCharacterSprite> {
    let element = |name: &str, json: &str, images: &[(u32, u32)]| -> Result<ElementSprites> {
        let actions = ActionSet::from_json(json)
            .with_context(|| format!("Failed to decode {} actions", name))?;
        let mut sheet = SpriteSheet::new();
        for &(w, h) in images {
            let path = format!("{}.spr#{}", name, sheet.frame_count());
            let texture = TextureHandle::new(AssetId::from_path(&path));
            sheet.push(SpriteFrame::new(w, h, texture));
        }
        Ok(ElementSprites::new(Arc::new(actions), Arc::new(sheet)))
    };

    Ok(CompositeCharacterSprite::new()
        .with_element(
            SpriteElement::Shadow,
            element("shadow", include_str!("../demos/shadow.json"), &[(40, 20)])?,
        )
        .with_element(
            SpriteElement::Body,
            element(
                "body",
                include_str!("../demos/body.json"),
                &[(42, 78), (42, 76), (58, 80), (64, 78)],
            )?,
        )
        .with_element(
            SpriteElement::Head,
            element("head", include_str!("../demos/head.json"), &[(30, 32), (30, 32)])?,
        ))
}

//! Abstract rendering
//!
//! Builds a flat list of draw commands from the game state each frame. The
//! platform owns the actual images, fonts and blitting; this module only
//! decides what goes where, in back-to-front order.

pub mod hud;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{BandLayer, GameState, ObstacleKind};

/// Images the platform must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Ground,
    Plane,
    ObstacleTop,
    ObstacleBottom,
    Menu,
}

/// Text colors used by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Yellow,
    Cyan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Large,
    Small,
}

/// How a position anchors the drawn item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
    MidTop,
}

/// One thing to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        anchor: Anchor,
        /// Degrees, counter-clockwise
        rotation: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: Anchor,
        color: Color,
        size: FontSize,
    },
}

/// Build the full frame for the current state
pub fn build_frame(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let mut frame = Vec::new();

    if let Some(band) = state.field.band(BandLayer::Background) {
        band_tiles(&mut frame, Sprite::Background, band.y, &band.tiles);
    }

    for obstacle in state.field.obstacles() {
        let (sprite, anchor_y) = match obstacle.kind {
            ObstacleKind::Top => (Sprite::ObstacleTop, obstacle.anchor_y),
            ObstacleKind::Bottom => (Sprite::ObstacleBottom, obstacle.gap_edge_y()),
        };
        frame.push(DrawCommand::Sprite {
            sprite,
            pos: Vec2::new(obstacle.x - obstacle.half_width - obstacle.cap_overhang, anchor_y),
            anchor: Anchor::TopLeft,
            rotation: 0.0,
        });
    }

    if let Some(band) = state.field.band(BandLayer::Ground) {
        band_tiles(&mut frame, Sprite::Ground, band.y, &band.tiles);
    }

    if let Some(plane) = state.plane.as_ref() {
        frame.push(DrawCommand::Sprite {
            sprite: Sprite::Plane,
            pos: plane.pos,
            anchor: Anchor::Center,
            rotation: settings.effective_rotation(plane.rotation()),
        });
    }

    hud::draw_hud(&mut frame, state, settings);
    frame
}

fn band_tiles(frame: &mut Vec<DrawCommand>, sprite: Sprite, y: f32, tiles: &[f32]) {
    for &x in tiles {
        frame.push(DrawCommand::Sprite {
            sprite,
            pos: Vec2::new(x, y),
            anchor: Anchor::TopLeft,
            rotation: 0.0,
        });
    }
}

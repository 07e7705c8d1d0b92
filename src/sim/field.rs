//! Field geometry: bounds, goal mouths and kickoff spots

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PlayerId;
use crate::clamp_to_bounds;
use crate::consts::*;

/// Fixed rectangular play area with a goal mouth flush with each vertical edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub goal_width: f32,
    pub goal_height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            goal_width: GOAL_WIDTH,
            goal_height: GOAL_HEIGHT,
        }
    }

    /// Derive the field from the host's available display area
    pub fn from_display(screen_width: f32, screen_height: f32) -> Self {
        // Never smaller than two goal mouths side by side plus a player body
        let min_width = 2.0 * GOAL_WIDTH + PLAYER_SIZE;
        let min_height = GOAL_HEIGHT + PLAYER_SIZE;
        Self::new(
            (screen_width - DISPLAY_MARGIN_X).max(min_width),
            (screen_height - DISPLAY_MARGIN_Y).max(min_height),
        )
    }

    pub fn with_goal(mut self, goal_width: f32, goal_height: f32) -> Self {
        self.goal_width = goal_width;
        self.goal_height = goal_height;
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Vertical extent of both goal mouths (exclusive bounds)
    pub fn goal_band(&self) -> (f32, f32) {
        (
            (self.height - self.goal_height) / 2.0,
            (self.height + self.goal_height) / 2.0,
        )
    }

    /// True if `y` lies strictly inside the goal mouth band
    pub fn in_goal_band(&self, y: f32) -> bool {
        let (top, bottom) = self.goal_band();
        y > top && y < bottom
    }

    /// Keep a body of the given diameter fully inside the field
    #[inline]
    pub fn clamp(&self, pos: Vec2, diameter: f32) -> Vec2 {
        clamp_to_bounds(pos, diameter, self.size())
    }

    /// Starting spot for a player, either side of the center line
    pub fn kickoff_position(&self, id: PlayerId, player_size: f32) -> Vec2 {
        let offset = match id {
            PlayerId::One => -KICKOFF_OFFSET,
            PlayerId::Two => KICKOFF_OFFSET,
        };
        self.clamp(self.center() + Vec2::new(offset, 0.0), player_size)
    }
}

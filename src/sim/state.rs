//! World state and core simulation types
//!
//! Continuous float positions are the source of truth for every entity; the
//! integer rects used for collision and rendering are rounded projections,
//! recomputed on demand and never mutated independently.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{self, Contacts};
use super::rect::Rect;
use super::spawn::{self, GenParams};
use crate::config::GameConfig;
use crate::consts::*;

/// The player-controlled kinematic body
///
/// Motion constants are per-tick at the fixed 60 Hz rate. Grounding is
/// re-derived from collision every tick, never carried over.
#[derive(Debug, Clone)]
pub struct Player {
    /// Continuous position (top-left corner)
    pub pos: Vec2,
    /// Velocity in units/tick
    pub vel: Vec2,
    width: i32,
    height: i32,
    /// In contact with a platform top (or the screen floor) this tick
    pub on_ground: bool,
    move_left: bool,
    move_right: bool,
    jump_strength: f32,
}

impl Player {
    /// Spawn resting on the ground strip at the reference start position
    pub fn new(config: &GameConfig) -> Self {
        let x = 50.0;
        let y = (config.screen.height - config.player.height - config.platforms.height) as f32;
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            width: config.player.width,
            height: config.player.height,
            on_ground: false,
            move_left: false,
            move_right: false,
            jump_strength: config.player.jump_strength,
        }
    }

    /// Rounded bounding rect (collision + render view)
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x.round() as i32,
            self.pos.y.round() as i32,
            self.width,
            self.height,
        )
    }

    /// Update held-direction state (from key down/up events)
    pub fn set_input(&mut self, move_left: bool, move_right: bool) {
        self.move_left = move_left;
        self.move_right = move_right;
    }

    /// Instantaneous velocity-set jump; only fires when grounded
    pub fn jump(&mut self) {
        if self.on_ground {
            self.vel.y = self.jump_strength;
            self.on_ground = false;
        }
    }

    /// Shift horizontally without touching velocity (camera recentering)
    pub fn translate_x(&mut self, dx: f32) {
        self.pos.x += dx;
    }

    /// Advance one tick against the given static geometry
    ///
    /// Order matters and is fixed: grounded reset, input acceleration, gravity,
    /// horizontal move+resolve+screen clamp, vertical move+resolve, floor
    /// clamp. The horizontal axis is fully resolved before the vertical axis
    /// begins.
    pub fn advance(&mut self, colliders: &[Rect], screen_w: i32, screen_h: i32) -> Contacts {
        self.on_ground = false;
        let mut contacts = Contacts::default();

        // Horizontal velocity from held input, friction toward zero otherwise
        if self.move_left && !self.move_right {
            self.vel.x = (self.vel.x - RUN_ACCEL).max(-MAX_RUN_SPEED);
        } else if self.move_right && !self.move_left {
            self.vel.x = (self.vel.x + RUN_ACCEL).min(MAX_RUN_SPEED);
        } else if self.vel.x > 0.0 {
            self.vel.x = (self.vel.x - RUN_FRICTION).max(0.0);
        } else if self.vel.x < 0.0 {
            self.vel.x = (self.vel.x + RUN_FRICTION).min(0.0);
        }

        // Gravity applies unconditionally; grounding is re-derived below
        self.vel.y += GRAVITY;

        // --- Horizontal sub-step ---
        self.pos.x += self.vel.x;
        let (snapped, hit) = collision::resolve_horizontal(self.rect(), self.vel.x, colliders);
        if hit {
            self.pos.x = snapped.x as f32;
            self.vel.x = 0.0;
            contacts.wall = true;
        }
        let (snapped, clamped) = collision::clamp_to_screen_x(self.rect(), screen_w);
        if clamped {
            self.pos.x = snapped.x as f32;
            self.vel.x = 0.0;
            contacts.wall = true;
        }

        // --- Vertical sub-step ---
        self.pos.y += self.vel.y;
        let v = collision::resolve_vertical(self.rect(), self.vel.y, colliders);
        if v.hit {
            self.pos.y = v.rect.y as f32;
            self.vel.y = 0.0;
            if v.grounded {
                self.on_ground = true;
                contacts.ground = true;
            } else {
                contacts.ceiling = true;
            }
        }

        // Floor clamp: the screen bottom is always solid
        if self.rect().bottom() >= screen_h {
            let snapped = self.rect().with_bottom(screen_h);
            self.pos.y = snapped.y as f32;
            self.vel.y = 0.0;
            self.on_ground = true;
            contacts.ground = true;
        }

        contacts
    }
}

/// A static platform
///
/// Only the horizontal position changes after creation (scroll and camera
/// recentering); y and dimensions are fixed.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pos_x: f32,
    y: i32,
    width: i32,
    height: i32,
}

impl Platform {
    pub fn new(x: f32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos_x: x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos_x.round() as i32, self.y, self.width, self.height)
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Translate horizontally (scroll / recenter / wrap)
    pub fn shift(&mut self, dx: f32) {
        self.pos_x += dx;
    }
}

/// Complete gameplay world: player, geometry, generator state
///
/// Owns everything the per-tick update touches; there is no module-level
/// state. Same seed and input sequence gives an identical run.
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) gen_params: GenParams,
    config: GameConfig,
    pub player: Player,
    /// Wide strip covering the screen bottom; persists for the world's lifetime
    pub ground: Platform,
    /// Generated platform chain (never contains the ground)
    pub platforms: Vec<Platform>,
    /// Camera-follow mode: pin the player near a fixed screen x by scrolling
    /// the world underneath
    pub auto_run: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl WorldState {
    /// Create a world from host configuration and a run seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = config.sanitized();
        let screen_w = config.screen.width;
        let screen_h = config.screen.height;
        let gen_params = GenParams::derive(&config);

        log::info!(
            "world seed {seed}: gap {}..{} step -{}..+{} band {}..{}",
            gen_params.min_gap,
            gen_params.max_gap,
            gen_params.max_step_up,
            gen_params.max_step_down,
            gen_params.top_y,
            gen_params.bottom_y,
        );

        let mut rng = Pcg32::seed_from_u64(seed);

        let ground = Platform::new(
            0.0,
            screen_h - config.platforms.height,
            screen_w * GROUND_WIDTH_FACTOR,
            config.platforms.height,
        );

        // Starter platform, then a chain extending past the right edge of a
        // growing window so the first seconds of scroll are already populated
        let mut last = Platform::new(
            200.0,
            screen_h - 180,
            (config.platforms.width as f32 * 1.2) as i32,
            config.platforms.height,
        );
        let mut platforms = vec![last];
        while last.rect().x < screen_w + 500 {
            last = spawn::spawn_next(&mut rng, &gen_params, &last);
            platforms.push(last);
        }

        let player = Player::new(&config);

        Self {
            seed,
            rng,
            gen_params,
            config,
            player,
            ground,
            platforms,
            auto_run: true,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn screen_width(&self) -> i32 {
        self.config.screen.width
    }

    #[inline]
    pub fn screen_height(&self) -> i32 {
        self.config.screen.height
    }

    /// Static geometry the player collides with this tick
    pub fn collider_rects(&self) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.platforms.len() + 1);
        rects.push(self.ground.rect());
        rects.extend(self.platforms.iter().map(Platform::rect));
        rects
    }

    /// Rects for the renderer: ground first, then the platform chain
    pub fn platform_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        std::iter::once(self.ground.rect()).chain(self.platforms.iter().map(Platform::rect))
    }
}

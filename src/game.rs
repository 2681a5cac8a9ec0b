//! Simulation core: player state machine, obstacle and cloud lifecycles,
//! spawn timers, collision, score. No I/O lives here; the frame loop
//! drives this with `step()` and reads the fields back out to paint.
//!
//! All coordinates are world units (y grows downward). The terminal side
//! maps them to buffer pixels in `render`.

use rand::{Rng, SeedableRng, rngs::SmallRng};

pub const FLOOR_HEIGHT: f64 = 80.0;

pub const PLAYER_X: f64 = 50.0;
pub const PLAYER_WIDTH: f64 = 64.0;
pub const PLAYER_HEIGHT: f64 = 64.0;
pub const GRAVITY: f64 = 0.8;
pub const JUMP_POWER: f64 = 15.0;

pub const OBSTACLE_WIDTH: f64 = 32.0;
pub const OBSTACLE_HEIGHT: f64 = 32.0;
pub const OBSTACLE_SPEED: f64 = 6.0;
pub const MIN_SPAWN_INTERVAL: u32 = 60;
pub const MAX_SPAWN_INTERVAL: u32 = 120;
const FIRST_SPAWN_INTERVAL: u32 = 90;

pub const CLOUD_SPAWN_INTERVAL: u32 = 120;
pub const CLOUD_CULL_X: f64 = -200.0;

/// Axis-aligned rectangle overlap, top-left + size, nonzero area only.
pub fn overlaps(
    ax: f64,
    ay: f64,
    aw: f64,
    ah: f64,
    bx: f64,
    by: f64,
    bw: f64,
    bh: f64,
) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

/// Uniform integer in the inclusive range [min, max].
pub fn random_int(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn floor_top(&self) -> f64 {
        self.height - FLOOR_HEIGHT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Grounded,
    Airborne,
}

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub y: f64,
    pub velocity_y: f64,
    pub state: PlayerState,
}

impl Player {
    fn on_floor(viewport: &Viewport) -> Self {
        Player {
            y: viewport.floor_top() - PLAYER_HEIGHT,
            velocity_y: 0.0,
            state: PlayerState::Grounded,
        }
    }

    /// One tick of flight: integrate position, then velocity, then clamp
    /// to the floor. Position must update before velocity; swapping the
    /// order changes the landing height by one step of gravity.
    fn fall(&mut self, viewport: &Viewport) {
        if self.state != PlayerState::Airborne {
            return;
        }
        self.y += self.velocity_y;
        self.velocity_y += GRAVITY;
        let ground_y = viewport.floor_top() - PLAYER_HEIGHT;
        if self.y >= ground_y {
            self.y = ground_y;
            self.velocity_y = 0.0;
            self.state = PlayerState::Grounded;
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Over,
}

pub struct Game {
    pub viewport: Viewport,
    pub player: Player,
    pub score: u32,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub status: Status,
    spawn_timer: u32,
    next_spawn_interval: u32,
    cloud_timer: u32,
    rng: SmallRng,
}

impl Game {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, SmallRng::from_entropy())
    }

    /// Deterministic construction for tests and replays.
    pub fn seeded(width: f64, height: f64, seed: u64) -> Self {
        Self::with_rng(width, height, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(width: f64, height: f64, rng: SmallRng) -> Self {
        let viewport = Viewport { width, height };
        Game {
            viewport,
            player: Player::on_floor(&viewport),
            score: 0,
            obstacles: Vec::new(),
            clouds: Vec::new(),
            status: Status::Running,
            spawn_timer: 0,
            next_spawn_interval: FIRST_SPAWN_INTERVAL,
            cloud_timer: 0,
            rng,
        }
    }

    /// Jump action. Only takes effect while grounded and running; extra
    /// invocations mid-air or after the game ends are no-ops. Returns
    /// whether the jump actually happened.
    pub fn jump(&mut self) -> bool {
        if self.status != Status::Running || self.player.state != PlayerState::Grounded {
            return false;
        }
        self.player.velocity_y = -JUMP_POWER;
        self.player.state = PlayerState::Airborne;
        self.score += 1;
        true
    }

    /// Advance the world by one tick.
    pub fn step(&mut self) {
        if self.status == Status::Over {
            return;
        }

        self.player.fall(&self.viewport);

        self.spawn_timer += 1;
        if self.spawn_timer >= self.next_spawn_interval {
            self.spawn_timer = 0;
            self.next_spawn_interval =
                random_int(&mut self.rng, MIN_SPAWN_INTERVAL, MAX_SPAWN_INTERVAL);
            self.obstacles.push(Obstacle {
                x: self.viewport.width,
                y: self.viewport.floor_top() - OBSTACLE_HEIGHT,
            });
        }

        // Collision is checked against the player's position from this
        // tick, and a hit does not stop the remaining obstacles moving.
        for m in &mut self.obstacles {
            m.x -= OBSTACLE_SPEED;
            if overlaps(
                PLAYER_X,
                self.player.y,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
                m.x,
                m.y,
                OBSTACLE_WIDTH,
                OBSTACLE_HEIGHT,
            ) {
                self.status = Status::Over;
            }
        }
        self.obstacles.retain(|m| m.x > -OBSTACLE_WIDTH);

        self.cloud_timer += 1;
        if self.cloud_timer >= CLOUD_SPAWN_INTERVAL {
            self.cloud_timer = 0;
            let band = (self.viewport.height / 3.0).max(1.0);
            let cloud = Cloud {
                x: self.viewport.width,
                y: 20.0 + self.rng.gen_range(0.0..band),
                size: self.rng.gen_range(20.0..50.0),
                speed: self.rng.gen_range(1.0..2.5),
            };
            self.clouds.push(cloud);
        }
        for c in &mut self.clouds {
            c.x -= c.speed;
        }
        self.clouds.retain(|c| c.x > CLOUD_CULL_X);
    }

    /// Viewport change. A grounded player is re-anchored to the new floor;
    /// an airborne one is left mid-flight and clamps on its next landing.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
        if self.player.state == PlayerState::Grounded {
            self.player.y = self.viewport.floor_top() - PLAYER_HEIGHT;
        }
    }
}

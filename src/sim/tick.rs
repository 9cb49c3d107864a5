//! Per-frame simulation tick
//!
//! Order within a tick mirrors a frame of the original game: physics
//! integration and out-of-bounds recycling first (the engine's half of the
//! frame), then spawning, then trail capture and slice resolution.

use glam::Vec2;
use rand::Rng;

use super::collision::crosses_either;
use super::state::{GameEvent, GameState, Particle};
use crate::{distance, velocity_toward};

/// Input for a single tick
///
/// The pointer position is reported in world coordinates; hosts report
/// (0, 0) while no pointer is active, which suppresses trail rendering and
/// hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub pointer: Vec2,
}

impl TickInput {
    pub fn new(pointer: Vec2) -> Self {
        Self { pointer }
    }

    /// No pointer active this tick
    pub fn inactive() -> Self {
        Self::default()
    }
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;
    state.clock_ms += f64::from(dt) * 1000.0;

    integrate_fruits(state, dt);
    age_particles(state, dt);
    try_launch(state);

    state.trail.push(input.pointer);
    if state.trail.is_active() {
        resolve_slices(state, input.pointer);
    }
}

/// Ballistic integration and out-of-bounds recycling for alive fruits
fn integrate_fruits(state: &mut GameState, dt: f32) {
    let gravity = state.tuning.gravity_y;
    let (w, h) = (state.world.width, state.world.height);
    let mut missed = Vec::new();

    for idx in state.pool.alive_indices() {
        let fruit = state.pool.get_mut(idx);
        fruit.vel.y += gravity * dt;
        fruit.pos += fruit.vel * dt;
        fruit.angular_vel += fruit.angular_accel * dt;
        fruit.angle += fruit.angular_vel * dt;

        // A fruit is gone once its whole bounding square has left the world
        let m = fruit.size;
        let out = fruit.pos.x < -m || fruit.pos.x > w + m || fruit.pos.y < -m || fruit.pos.y > h + m;
        if out {
            missed.push((idx, fruit.kind));
        }
    }

    for (idx, kind) in missed {
        state.pool.recycle(idx);
        state.events.push(GameEvent::Missed { kind });
        log::debug!("{} left the world unsliced", kind.as_str());
    }
}

/// Advance burst particles and drop the expired ones
fn age_particles(state: &mut GameState, dt: f32) {
    let gravity = state.tuning.burst_gravity_y;
    for p in &mut state.particles {
        p.vel.y += gravity * dt;
        p.pos += p.vel * dt;
        p.life_ms -= dt * 1000.0;
    }
    state.particles.retain(|p| p.life_ms > 0.0);
}

/// Launch a random dead fruit from the bottom of the world, at most once per
/// fire interval. A no-op (timer untouched) while the pool is exhausted.
fn try_launch(state: &mut GameState) {
    if state.clock_ms < state.next_fire_ms {
        return;
    }
    let Some(idx) = state.pool.spawn_candidate(&mut state.rng) else {
        return;
    };

    let t = &state.tuning;
    let world = state.world;
    let center = world.center();
    let size = state.fruit_size();

    // Launch x lands in the central band of the screen, centered on center.x
    let u: f32 = state.rng.random_range(0.0..1.0);
    let x = (u * world.width - center.x) * t.launch_band + center.x;
    let angle = state.rng.random_range(-t.start_angle_max_deg..=t.start_angle_max_deg);
    let angular_accel = state.rng.random_range(-t.angular_accel_max..=t.angular_accel_max);
    // Speed never falls below the floor, whatever the world height
    let speed = state.rng.random_range(0.0..world.height).max(t.launch_speed_floor);

    let fire_interval = f64::from(t.fire_interval_ms);
    let fruit = state.pool.get_mut(idx);
    fruit.pos = Vec2::new(x, world.height);
    fruit.vel = velocity_toward(fruit.pos, center, speed);
    fruit.angle = angle;
    fruit.angular_vel = 0.0;
    fruit.angular_accel = angular_accel;
    fruit.size = size;
    fruit.alive = true;

    let kind = fruit.kind;
    state.next_fire_ms = state.clock_ms + fire_interval;
    state.events.push(GameEvent::Launched { kind });
    log::debug!(
        "launched {} at x={:.0} speed={:.0}",
        kind.as_str(),
        x,
        speed
    );
}

/// Test every trail segment against every alive fruit's diagonals
///
/// A hit only counts if the live pointer is close enough to the fruit right
/// now; a match against an old, far-away piece of the trail is rejected.
/// The first accepted slice clears the trail, ending the pass.
fn resolve_slices(state: &mut GameState, pointer: Vec2) {
    let segments: Vec<_> = state.trail.segments().collect();

    for seg in &segments {
        for idx in state.pool.alive_indices() {
            let fruit = state.pool.get(idx);
            if !crosses_either(seg, &fruit.diagonals()) {
                continue;
            }
            if distance(pointer, fruit.pos) > state.tuning.slice_max_dist {
                continue;
            }
            slice_fruit(state, idx);
            return;
        }
    }
}

/// Deactivate a sliced fruit: burst, score, trail reset
fn slice_fruit(state: &mut GameState, idx: usize) {
    let fruit = state.pool.get(idx);
    let kind = fruit.kind;
    let pos = fruit.pos;

    spawn_burst(state, pos);
    state.pool.recycle(idx);
    state.score += 1;
    state.trail.clear();
    state.events.push(GameEvent::Sliced { kind, pos });
    log::info!("sliced {} (score {})", kind.as_str(), state.score);
}

/// One-shot particle burst at the slice position
fn spawn_burst(state: &mut GameState, pos: Vec2) {
    let t = &state.tuning;
    let count = t.burst_count;
    let y_speed = t.burst_y_speed;
    let (scale_min, scale_max) = (t.burst_scale_min, t.burst_scale_max);
    let life_ms = t.burst_lifetime_ms;

    for _ in 0..count {
        // Mild horizontal spread, strong vertical scatter
        let vx: f32 = state.rng.random_range(-100.0..=100.0);
        let vy: f32 = state.rng.random_range(-y_speed..=y_speed);
        let scale = state.rng.random_range(scale_min..=scale_max);
        state.particles.push(Particle {
            pos,
            vel: Vec2::new(vx, vy),
            scale,
            life_ms,
        });
    }
}

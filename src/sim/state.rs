//! Game state and core simulation types
//!
//! Everything that must survive between ticks (and serialize for snapshots)
//! lives here. Fruits are pooled: one record per catalog entry, recycled
//! forever, never allocated or freed during play.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Segment;
use crate::consts::*;
use crate::tuning::Tuning;

/// The fixed fruit catalog. One pooled sprite exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Banana,
    Cherry,
    DragonFruit,
    Orange,
    Pineapple,
    Pumpkin,
    Strawberry,
}

/// All fruit kinds, in catalog order
pub const FRUIT_CATALOG: [FruitKind; 8] = [
    FruitKind::Apple,
    FruitKind::Banana,
    FruitKind::Cherry,
    FruitKind::DragonFruit,
    FruitKind::Orange,
    FruitKind::Pineapple,
    FruitKind::Pumpkin,
    FruitKind::Strawberry,
];

impl FruitKind {
    /// Logical asset name for the host's image loader
    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
            FruitKind::Cherry => "cherry",
            FruitKind::DragonFruit => "dragon-fruit",
            FruitKind::Orange => "orange",
            FruitKind::Pineapple => "pineapple",
            FruitKind::Pumpkin => "pumpkin",
            FruitKind::Strawberry => "strawberry",
        }
    }
}

/// A pooled fruit sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub kind: FruitKind,
    /// Center position (anchor 0.5, 0.5)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Display rotation (degrees)
    pub angle: f32,
    /// Degrees per second
    pub angular_vel: f32,
    /// Degrees per second squared
    pub angular_accel: f32,
    /// Side length of the axis-aligned bounding square
    pub size: f32,
    pub alive: bool,
}

impl Fruit {
    /// A dead fruit parked far off-screen
    pub fn parked(kind: FruitKind) -> Self {
        Self {
            kind,
            pos: Vec2::new(PARK_X, PARK_Y),
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
            angular_accel: 0.0,
            size: 0.0,
            alive: false,
        }
    }

    /// The two diagonals of the bounding square, used as the slice hit region
    pub fn diagonals(&self) -> [Segment; 2] {
        let half = self.size / 2.0;
        let tl = self.pos + Vec2::new(-half, -half);
        let tr = self.pos + Vec2::new(half, -half);
        let bl = self.pos + Vec2::new(-half, half);
        let br = self.pos + Vec2::new(half, half);
        [Segment::new(tl, br), Segment::new(bl, tr)]
    }
}

/// Fixed-size pool of fruit sprites, indexed by integer handle
///
/// Invariant: the pool holds exactly one fruit per catalog entry for the
/// lifetime of the game; alive + dead always equals the catalog length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    fruits: Vec<Fruit>,
}

impl Pool {
    pub fn new() -> Self {
        Self {
            fruits: FRUIT_CATALOG.iter().map(|&k| Fruit::parked(k)).collect(),
        }
    }

    /// Pick a uniformly-random dead fruit, or `None` if all are alive.
    ///
    /// Does not activate the fruit; the spawner assigns its launch state.
    pub fn spawn_candidate<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        let dead: Vec<usize> = (0..self.fruits.len())
            .filter(|&i| !self.fruits[i].alive)
            .collect();
        if dead.is_empty() {
            return None;
        }
        // Clamp guards the selection even though the empty case is excluded above
        let pick = rng.random_range(0..dead.len()).min(dead.len() - 1);
        Some(dead[pick])
    }

    /// Mark a fruit dead and park it off-screen
    pub fn recycle(&mut self, idx: usize) {
        let fruit = &mut self.fruits[idx];
        fruit.alive = false;
        fruit.vel = Vec2::ZERO;
        fruit.pos = Vec2::new(PARK_X, PARK_Y);
    }

    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.fruits.iter().filter(|f| f.alive).count()
    }

    pub fn get(&self, idx: usize) -> &Fruit {
        &self.fruits[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut Fruit {
        &mut self.fruits[idx]
    }

    /// Handles of all alive fruits, in stable pool order
    pub fn alive_indices(&self) -> Vec<usize> {
        (0..self.fruits.len())
            .filter(|&i| self.fruits[i].alive)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fruit> {
        self.fruits.iter()
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounded history of pointer samples
///
/// Newest sample at the back; the oldest is dropped once the capacity of
/// [`TRAIL_LENGTH`] is exceeded. The host reports (0, 0) when no pointer is
/// active, so a front sample with x == 0 marks the trail as inactive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    points: Vec<Vec2>,
}

impl Trail {
    pub fn push(&mut self, sample: Vec2) {
        self.points.push(sample);
        if self.points.len() > TRAIL_LENGTH {
            let excess = self.points.len() - TRAIL_LENGTH;
            self.points.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the trail should be drawn and hit-tested this tick
    pub fn is_active(&self) -> bool {
        match self.points.first() {
            Some(p) => p.x != 0.0,
            None => false,
        }
    }

    /// Retained samples, oldest first, for drawing the slash polyline
    pub fn polyline(&self) -> &[Vec2] {
        &self.points
    }

    /// Consecutive sample pairs as hit-test segments
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }
}

/// A burst particle, rendered by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: f32,
    /// Remaining lifetime (ms); retained while positive
    pub life_ms: f32,
}

/// Gameplay events accumulated during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fruit was launched from the bottom of the world
    Launched { kind: FruitKind },
    /// A fruit was sliced at the given position
    Sliced { kind: FruitKind, pos: Vec2 },
    /// A fruit fell out of the world unsliced
    Missed { kind: FruitKind },
}

/// World dimensions, handed in by the host at construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG stream, advanced only by spawning and burst emission
    pub rng: Pcg32,
    pub world: WorldBounds,
    pub tuning: Tuning,
    /// Accumulated simulation clock (ms)
    pub clock_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Earliest clock at which the next launch may fire (ms)
    pub next_fire_ms: f64,
    pub score: u32,
    pub pool: Pool,
    pub trail: Trail,
    /// Live burst particles (visual only, host-drawn)
    pub particles: Vec<Particle>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64, world: WorldBounds) -> Self {
        Self::with_tuning(seed, world, Tuning::default())
    }

    pub fn with_tuning(seed: u64, world: WorldBounds, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world,
            tuning,
            clock_ms: 0.0,
            time_ticks: 0,
            next_fire_ms: 0.0,
            score: 0,
            pool: Pool::new(),
            trail: Trail::default(),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Bounding size assigned to fruits at launch
    pub fn fruit_size(&self) -> f32 {
        (self.world.width.min(self.world.height) * self.tuning.fruit_size_frac).round()
    }

    /// Whether the score has reached the win threshold.
    ///
    /// The tick loop never gates on this; the host decides what winning means.
    pub fn has_won(&self) -> bool {
        self.score >= self.tuning.score_to_win
    }

    /// Take all events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_one_fruit_per_catalog_entry() {
        let pool = Pool::new();
        assert_eq!(pool.len(), FRUIT_CATALOG.len());
        assert_eq!(pool.alive_count(), 0);
        for (fruit, kind) in pool.iter().zip(FRUIT_CATALOG) {
            assert_eq!(fruit.kind, kind);
            assert!(!fruit.alive);
        }
    }

    #[test]
    fn test_spawn_candidate_none_iff_all_alive() {
        let mut pool = Pool::new();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..pool.len() {
            let idx = pool.spawn_candidate(&mut rng).expect("dead fruit available");
            assert!(!pool.get(idx).alive);
            pool.get_mut(idx).alive = true;
        }
        assert_eq!(pool.alive_count(), pool.len());
        assert!(pool.spawn_candidate(&mut rng).is_none());

        pool.recycle(3);
        assert_eq!(pool.spawn_candidate(&mut rng), Some(3));
    }

    #[test]
    fn test_recycle_parks_off_screen() {
        let mut pool = Pool::new();
        pool.get_mut(0).alive = true;
        pool.get_mut(0).pos = Vec2::new(100.0, 100.0);
        pool.recycle(0);
        assert!(!pool.get(0).alive);
        assert!(pool.get(0).pos.x > 10_000.0);
    }

    #[test]
    fn test_trail_capacity() {
        let mut trail = Trail::default();
        for i in 0..15 {
            trail.push(Vec2::new(i as f32 + 1.0, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
        // Oldest retained sample is the 6th pushed
        assert_eq!(trail.polyline()[0].x, 6.0);
        assert_eq!(trail.polyline()[TRAIL_LENGTH - 1].x, 15.0);
    }

    #[test]
    fn test_trail_sentinel_inactive() {
        let mut trail = Trail::default();
        assert!(!trail.is_active());
        trail.push(Vec2::new(0.0, 120.0));
        assert!(!trail.is_active());
        trail.clear();
        trail.push(Vec2::new(45.0, 120.0));
        assert!(trail.is_active());
    }

    #[test]
    fn test_trail_segments_pair_consecutive_points() {
        let mut trail = Trail::default();
        trail.push(Vec2::new(1.0, 1.0));
        trail.push(Vec2::new(2.0, 2.0));
        trail.push(Vec2::new(3.0, 1.0));
        let segs: Vec<_> = trail.segments().collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].a, Vec2::new(1.0, 1.0));
        assert_eq!(segs[1].b, Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_fruit_diagonals_cross_center() {
        let mut fruit = Fruit::parked(FruitKind::Apple);
        fruit.pos = Vec2::new(100.0, 100.0);
        fruit.size = 50.0;
        let [d1, d2] = fruit.diagonals();
        // Both diagonals have the fruit center as their midpoint
        assert_eq!((d1.a + d1.b) / 2.0, fruit.pos);
        assert_eq!((d2.a + d2.b) / 2.0, fruit.pos);
        assert!((d1.a - d1.b).length() > 70.0); // 50 * sqrt(2)
    }
}

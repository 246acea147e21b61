use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use super::config::{
    ConfigError, GameConfig, EFFECT_DURATION_TICKS, FAST_DELTA_MS, FAST_FLOOR_MS, FOOD_PER_LEVEL,
    LEVEL_SPEEDUP_MS, MIN_SPEED_MS, SLOW_CEILING_MS, SLOW_DELTA_MS,
};
use super::direction::Direction;
use super::event::GameEvent;
use super::food::{Food, FoodKind};
use super::position::Position;
use super::session::SessionScore;
use super::snake::Snake;

/// Attempts at random food placement before falling back.
const SPAWN_ATTEMPTS: usize = 100;

/// Cell used when random placement keeps hitting the snake. On a
/// pathologically full grid this can coincide with the snake; accepted.
const SPAWN_FALLBACK: Position = Position { x: 0, y: 0 };

/// The simulation engine: one snake, at most one food, and the progression
/// state, advanced one grid-step per `update()` call.
///
/// The engine does no I/O and has no internal timers. The driver calls
/// `update()` at `effective_speed()`-millisecond intervals, forwards input
/// through `change_direction()`, and drains the returned events.
pub struct GameEngine {
    config: GameConfig,
    snake: Snake,
    food: Option<Food>,
    direction: Direction,
    buffered: Option<Direction>,
    score: u32,
    level: u32,
    food_eaten: u32,
    base_speed: u64,
    fast_timer: u32,
    slow_timer: u32,
    game_over: bool,
    session: SessionScore,
    rng: SmallRng,
}

impl GameEngine {
    /// Create an engine with a fresh game in the Running state.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Create an engine with deterministic food placement.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: SmallRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            snake: Snake::new(Self::start_cell(&config)),
            food: None,
            direction: Direction::Right,
            buffered: None,
            score: 0,
            level: 1,
            food_eaten: 0,
            base_speed: config.initial_speed_ms,
            fast_timer: 0,
            slow_timer: 0,
            game_over: false,
            session: SessionScore::default(),
            rng,
            config,
        };
        engine.food = Some(engine.spawn_food());
        Ok(engine)
    }

    /// Start cell for the initial snake. Kept off the left edge so the two
    /// trailing segments always fit a validated grid.
    fn start_cell(config: &GameConfig) -> Position {
        let x = (config.grid_width as i32 / 2).max(2);
        let y = config.grid_height as i32 / 2;
        Position::new(x, y)
    }

    /// Replace the current game wholesale. The session high score and the
    /// RNG survive.
    pub fn restart(&mut self) {
        self.snake = Snake::new(Self::start_cell(&self.config));
        self.direction = Direction::Right;
        self.buffered = None;
        self.score = 0;
        self.level = 1;
        self.food_eaten = 0;
        self.base_speed = self.config.initial_speed_ms;
        self.fast_timer = 0;
        self.slow_timer = 0;
        self.game_over = false;
        self.food = Some(self.spawn_food());
    }

    /// Advance the simulation one tick. No-op once the game is over.
    pub fn update(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.game_over {
            return events;
        }

        self.tick_speed_timers(&mut events);

        if let Some(direction) = self.buffered.take() {
            self.direction = direction;
        }

        self.snake.advance(self.direction);

        let head = self.snake.head();
        if !self.in_bounds(head) || self.snake.hits_self() {
            self.enter_game_over(&mut events);
            return events;
        }

        if let Some(food) = self.food {
            if food.position == head {
                self.food = None;
                self.eat_food(food, &mut events);
            }
        }

        events
    }

    /// Buffer a direction change for the next tick. Requests that reverse
    /// the currently applied direction are dropped; comparing against the
    /// applied direction (not the buffered one) keeps two same-tick
    /// requests from smuggling a reversal through.
    pub fn change_direction(&mut self, requested: Direction) {
        if self.direction.is_opposite(requested) {
            return;
        }
        self.buffered = Some(requested);
    }

    /// Tick interval in milliseconds, with at most one speed effect
    /// applied. A running fast effect wins over a running slow one.
    pub fn effective_speed(&self) -> u64 {
        if self.fast_timer > 0 {
            self.base_speed.saturating_sub(FAST_DELTA_MS).max(FAST_FLOOR_MS)
        } else if self.slow_timer > 0 {
            (self.base_speed + SLOW_DELTA_MS).min(SLOW_CEILING_MS)
        } else {
            self.base_speed
        }
    }

    /// Seed the session high score from persisted state; monotonic max.
    pub fn restore_high_score(&mut self, best: u32) {
        self.session.restore(best);
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn high_score(&self) -> u32 {
        self.session.best()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.config.grid_width as i32
            && pos.y >= 0
            && pos.y < self.config.grid_height as i32
    }

    /// Count down the speed-effect timers. The clear event fires only on a
    /// tick where a timer was running and both sit at zero afterwards,
    /// never when one expires while the other still runs.
    fn tick_speed_timers(&mut self, events: &mut Vec<GameEvent>) {
        let ticked = self.fast_timer > 0 || self.slow_timer > 0;
        if self.fast_timer > 0 {
            self.fast_timer -= 1;
        }
        if self.slow_timer > 0 {
            self.slow_timer -= 1;
        }
        if ticked && self.fast_timer == 0 && self.slow_timer == 0 {
            events.push(GameEvent::SpeedChanged(0));
        }
    }

    fn enter_game_over(&mut self, events: &mut Vec<GameEvent>) {
        self.game_over = true;
        events.push(GameEvent::GameOver);
        // Final check uses >= on purpose: a score that merely ties the
        // session best still gets flagged, unlike the strict > applied
        // during play.
        if self.score >= self.session.best() {
            self.session.record(self.score);
            events.push(GameEvent::HighScoreUpdated(self.session.best()));
        }
    }

    fn eat_food(&mut self, food: Food, events: &mut Vec<GameEvent>) {
        match food.kind {
            FoodKind::FastFood => {
                self.fast_timer = EFFECT_DURATION_TICKS;
                events.push(GameEvent::SpeedChanged(1));
            }
            FoodKind::SlowFood => {
                self.slow_timer = EFFECT_DURATION_TICKS;
                events.push(GameEvent::SpeedChanged(-1));
            }
            FoodKind::Normal | FoodKind::Bonus => {}
        }

        self.snake.grow();
        self.score += food.kind.points();
        self.food_eaten += 1;

        // High score is compared once, against the post-eat score; the
        // level-up below cannot re-trigger it.
        if self.session.record(self.score) {
            events.push(GameEvent::HighScoreUpdated(self.session.best()));
        }
        events.push(GameEvent::ScoreUpdated(self.score));
        events.push(GameEvent::FoodEaten(food.kind));

        if self.food_eaten == FOOD_PER_LEVEL {
            self.level += 1;
            self.food_eaten = 0;
            self.base_speed = self
                .base_speed
                .saturating_sub(LEVEL_SPEEDUP_MS)
                .max(MIN_SPEED_MS);
            events.push(GameEvent::LevelUpdated(self.level));
        }

        self.food = Some(self.spawn_food());
    }

    /// Pick a free cell uniformly at random, giving up after a bounded
    /// number of attempts and using the fallback cell instead.
    fn spawn_food(&mut self) -> Food {
        let kind = FoodKind::from_roll(self.rng.gen_range(0..100));

        for _ in 0..SPAWN_ATTEMPTS {
            let candidate = Position::new(
                self.rng.gen_range(0..self.config.grid_width as i32),
                self.rng.gen_range(0..self.config.grid_height as i32),
            );
            if !self.snake.occupies(candidate) {
                return Food::new(candidate, kind);
            }
        }

        warn!(
            attempts = SPAWN_ATTEMPTS,
            "no free cell found for food, using fallback"
        );
        Food::new(SPAWN_FALLBACK, kind)
    }
}

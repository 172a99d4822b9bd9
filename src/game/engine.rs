use super::{
    action::Direction,
    config::GameConfig,
    state::{Cell, GameOutcome, GameState, SessionState, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

/// Random samples tried before food placement falls back to scanning the free cells
const MAX_FOOD_SAMPLES: usize = 256;

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// False when the session was not running and nothing happened
    pub applied: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set on the tick that ended the session
    pub outcome: Option<GameOutcome>,
}

impl TickResult {
    pub fn ended(&self) -> bool {
        self.outcome.is_some()
    }
}

/// The game engine: sole owner of the game state.
///
/// Everything outside the engine reads the state through [`GameEngine::state`]
/// and influences it only through the direction passed to [`GameEngine::tick`].
/// The configuration is expected to have passed [`GameConfig::validate`].
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Create an idle engine with the starting snake on the board and food placed
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = Snake::new(config.start, Direction::Right);
        let state = GameState::new(snake, config.start, config.grid_count);

        let mut engine = Self { config, rng, state };
        engine.spawn_food();
        engine
    }

    /// Create an engine around an existing state, e.g. a hand-built position.
    ///
    /// The state must be laid out on the configured board size.
    pub fn with_state(config: GameConfig, state: GameState) -> Self {
        debug_assert_eq!(
            state.grid_count, config.grid_count,
            "state board size differs from the configured one"
        );
        let mut engine = Self::new(config);
        engine.state = state;
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only snapshot for renderers and input gating
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn session(&self) -> SessionState {
        self.state.session
    }

    /// Idle -> Running. Returns false if the session was not idle.
    pub fn start(&mut self) -> bool {
        if self.state.session != SessionState::Idle {
            return false;
        }
        self.reset();
        true
    }

    /// Over -> Running. Returns false if the session was not over.
    pub fn restart(&mut self) -> bool {
        if self.state.session != SessionState::Over {
            return false;
        }
        self.reset();
        true
    }

    /// Reinitialize snake, direction, score and food, and set the session running
    pub fn reset(&mut self) {
        self.state = GameState::new(
            Snake::new(self.config.start, Direction::Right),
            self.config.start,
            self.config.grid_count,
        )
        .running();
        self.spawn_food();
        info!(
            grid_count = self.config.grid_count,
            food = ?self.state.food,
            "session started"
        );
    }

    /// Place food on a random cell not covered by the snake.
    ///
    /// Returns `None`, leaving the food where it was, when the snake covers
    /// the whole board.
    pub fn spawn_food(&mut self) -> Option<Cell> {
        let food = self.sample_free_cell()?;
        self.state.food = food;
        Some(food)
    }

    fn sample_free_cell(&mut self) -> Option<Cell> {
        self.sample_free_cell_within(MAX_FOOD_SAMPLES)
    }

    /// Try `budget` uniform samples, then pick uniformly among the free cells
    fn sample_free_cell_within(&mut self, budget: usize) -> Option<Cell> {
        let n = self.config.grid_count;
        if self.state.snake.len() >= self.config.area() {
            return None;
        }

        for _ in 0..budget {
            let cell = Cell::new(
                self.rng.gen_range(0..n) as i32,
                self.rng.gen_range(0..n) as i32,
            );
            if !self.state.snake.occupies(cell) {
                return Some(cell);
            }
        }

        // nearly full board: pick uniformly among what is left
        let free = self.free_cells();
        warn!(
            free_cells = free.len(),
            snake_len = self.state.snake.len(),
            "food sampling exhausted, falling back to free-cell scan"
        );
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.gen_range(0..free.len())])
    }

    /// Every cell not covered by the snake, row by row
    pub fn free_cells(&self) -> Vec<Cell> {
        let n = self.config.grid_count as i32;
        (0..n)
            .flat_map(|y| (0..n).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.state.snake.occupies(*cell))
            .collect()
    }

    /// Advance the game by one step.
    ///
    /// `pending` is the most recent direction requested since the last tick.
    /// A request for the exact opposite of the current direction is ignored.
    pub fn tick(&mut self, pending: Option<Direction>) -> TickResult {
        if !self.state.is_running() {
            return TickResult::default();
        }

        let current = self.state.snake.direction;
        let direction = match pending {
            Some(requested) if !current.is_opposite(requested) => requested,
            _ => current,
        };

        let new_head = self
            .state
            .snake
            .head()
            .stepped(direction, self.config.grid_count);

        if self.state.snake.occupies(new_head) {
            self.end_game(GameOutcome::SelfCollision);
            return TickResult {
                applied: true,
                ate_food: false,
                outcome: Some(GameOutcome::SelfCollision),
            };
        }

        self.state.snake.direction = direction;
        self.state.snake.push_head(new_head);
        self.state.ticks += 1;

        if new_head != self.state.food {
            self.state.snake.drop_tail();
            return TickResult {
                applied: true,
                ate_food: false,
                outcome: None,
            };
        }

        self.state.score += self.config.food_score;
        debug!(
            score = self.state.score,
            length = self.state.snake.len(),
            "food eaten"
        );

        let outcome = match self.spawn_food() {
            Some(_) => None,
            None => {
                self.end_game(GameOutcome::BoardFull);
                Some(GameOutcome::BoardFull)
            }
        };

        TickResult {
            applied: true,
            ate_food: true,
            outcome,
        }
    }

    fn end_game(&mut self, outcome: GameOutcome) {
        self.state.session = SessionState::Over;
        self.state.outcome = Some(outcome);
        info!(
            ?outcome,
            score = self.state.score,
            length = self.state.snake.len(),
            ticks = self.state.ticks,
            "session over"
        );
    }
}

//! Invariants of the tick rule over random play

use grid_snake::game::{
    Cell, Direction, GameConfig, GameEngine, GameOutcome, GameState, SessionState, Snake,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Up)),
        Just(Some(Direction::Down)),
        Just(Some(Direction::Left)),
        Just(Some(Direction::Right)),
    ]
}

fn has_no_overlap(state: &GameState) -> bool {
    let body = &state.snake.body;
    body.iter()
        .enumerate()
        .all(|(i, cell)| !body.iter().skip(i + 1).any(|other| other == cell))
}

fn started(grid_count: usize, seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(GameConfig::new(grid_count).with_seed(seed));
    assert!(engine.start());
    engine
}

proptest! {
    #[test]
    fn length_grows_only_when_food_is_eaten(
        seed in any::<u64>(),
        grid_count in 4usize..12,
        moves in prop::collection::vec(direction(), 1..300),
    ) {
        let mut engine = started(grid_count, seed);

        for pending in moves {
            let before = engine.state().snake.len();
            let result = engine.tick(pending);
            let after = engine.state().snake.len();

            if result.ate_food {
                prop_assert_eq!(after, before + 1);
            } else {
                prop_assert_eq!(after, before);
            }
            if !engine.state().is_running() {
                break;
            }
        }
    }

    #[test]
    fn head_stays_on_board_and_body_never_overlaps(
        seed in any::<u64>(),
        grid_count in 2usize..10,
        moves in prop::collection::vec(direction(), 1..300),
    ) {
        let mut engine = started(grid_count, seed);

        for pending in moves {
            engine.tick(pending);
            let state = engine.state();
            prop_assert!(state.snake.head().is_within(grid_count));
            prop_assert!(has_no_overlap(state));
            if state.is_running() {
                prop_assert!(!state.is_occupied_by_snake(state.food));
            }
        }
    }

    #[test]
    fn reversal_is_never_applied(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..200),
    ) {
        let mut engine = started(20, seed);

        for pending in moves {
            let previous = engine.state().snake.direction;
            engine.tick(pending);
            if !engine.state().is_running() {
                break;
            }
            let applied = engine.state().snake.direction;
            prop_assert!(!previous.is_opposite(applied));
            if pending == Some(previous.opposite()) {
                prop_assert_eq!(applied, previous);
            }
        }
    }

    #[test]
    fn game_over_freezes_everything(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..400),
        after in prop::collection::vec(direction(), 1..20),
    ) {
        let mut engine = started(5, seed);
        for pending in moves {
            engine.tick(pending);
            if engine.state().is_over() {
                break;
            }
        }
        if !engine.state().is_over() {
            return Ok(());
        }

        let frozen = engine.state().clone();
        for pending in after {
            prop_assert!(!engine.tick(pending).applied);
        }
        prop_assert_eq!(engine.state(), &frozen);
    }

    #[test]
    fn spawned_food_is_never_on_the_snake(seed in any::<u64>(), len in 1usize..16) {
        // Serpentine body over a 4x4 board, `len` cells long
        let cells: Vec<Cell> = (0..4)
            .flat_map(|y| {
                let row: Vec<Cell> = (0..4).map(|x| Cell::new(x, y)).collect();
                if y % 2 == 0 { row } else { row.into_iter().rev().collect() }
            })
            .take(len)
            .collect();
        let snake = Snake::from_cells(&cells, Direction::Right).unwrap();
        let config = GameConfig::new(4).with_seed(seed);
        let state = GameState::new(snake, Cell::new(3, 3), 4).running();
        let mut engine = GameEngine::with_state(config, state);

        let food = engine.spawn_food().unwrap();
        prop_assert!(!cells.contains(&food));
        prop_assert!(food.is_within(4));
    }
}

#[test]
fn scenario_eat_on_first_tick() {
    let config = GameConfig::default().with_seed(1);
    let state = GameState::new(
        Snake::new(Cell::new(10, 10), Direction::Right),
        Cell::new(11, 10),
        config.grid_count,
    )
    .running();
    let mut engine = GameEngine::with_state(config, state);

    let result = engine.tick(None);

    let state = engine.state();
    assert!(result.ate_food);
    assert_eq!(state.snake.head(), Cell::new(11, 10));
    assert_eq!(state.score, 10);
    assert_ne!(state.food, Cell::new(11, 10));
    assert!(!state.is_occupied_by_snake(state.food));
    assert_eq!(state.session, SessionState::Running);
}

#[test]
fn scenario_wrap_through_left_edge() {
    let config = GameConfig::default().with_seed(2);
    let snake = Snake::from_cells(&[Cell::new(0, 10), Cell::new(1, 10)], Direction::Left).unwrap();
    let state = GameState::new(snake, Cell::new(5, 5), config.grid_count).running();
    let mut engine = GameEngine::with_state(config, state);

    engine.tick(None);

    assert_eq!(engine.state().snake.head(), Cell::new(19, 10));
}

#[test]
fn scenario_restart_after_over() {
    let mut engine = started(20, 3);
    // Grow to length five, then turn into the body
    for _ in 0..4 {
        let head = engine.state().snake.head();
        let next = head.stepped(Direction::Right, 20);
        let grown = GameState {
            food: next,
            ..engine.state().clone()
        };
        engine = GameEngine::with_state(GameConfig::default().with_seed(3), grown);
        assert!(engine.tick(None).ate_food);
    }
    engine.tick(Some(Direction::Down));
    engine.tick(Some(Direction::Left));
    let result = engine.tick(Some(Direction::Up));
    assert_eq!(result.outcome, Some(GameOutcome::SelfCollision));
    assert!(engine.state().score > 0);

    assert!(engine.restart());
    let state = engine.state();
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.body, [Cell::new(10, 10)]);
    assert_eq!(state.session, SessionState::Running);
}

#[test]
fn full_board_ends_without_hanging() {
    // Two-cell board: one food and the game is won
    let config = GameConfig {
        grid_count: 2,
        start: Cell::new(0, 0),
        ..Default::default()
    }
    .with_seed(4);
    let snake = Snake::from_cells(
        &[Cell::new(0, 1), Cell::new(0, 0), Cell::new(1, 0)],
        Direction::Down,
    )
    .unwrap();
    let state = GameState::new(snake, Cell::new(1, 1), 2).running();
    let mut engine = GameEngine::with_state(config, state);

    let result = engine.tick(Some(Direction::Right));

    assert_eq!(result.outcome, Some(GameOutcome::BoardFull));
    assert!(engine.state().is_over());
}

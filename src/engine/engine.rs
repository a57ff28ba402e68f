use crate::log;

use super::food::Food;
use super::rng::SessionRng;
use super::settings::EngineSettings;
use super::snake::Snake;
use super::types::{Direction, GridSize, Location, RunState};

const SCORE_PER_FOOD: u32 = 1;

pub struct Engine {
    grid: GridSize,
    settings: EngineSettings,
    snake: Snake,
    food: Option<Food>,
    score: u32,
    run_state: RunState,
    ticks_in_chop: u64,
    rng: SessionRng,
}

impl Engine {
    pub fn new(width: usize, height: usize) -> Result<Self, String> {
        Self::with_settings(EngineSettings::new(width, height))
    }

    pub fn with_settings(settings: EngineSettings) -> Result<Self, String> {
        settings.validate()?;
        let grid = settings.grid();
        let mut rng = match settings.rng_seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_os_entropy(),
        };
        let snake = Self::initial_snake(&settings, &grid);
        let food = Food::spawn(&grid, &snake, &mut rng);

        Ok(Self {
            grid,
            settings,
            snake,
            food,
            score: 0,
            run_state: RunState::Playing,
            ticks_in_chop: 0,
            rng,
        })
    }

    fn initial_snake(settings: &EngineSettings, grid: &GridSize) -> Snake {
        let head = Location::new(grid.height / 2, grid.width / 2);
        Snake::new(head, settings.initial_length, Direction::Right, grid)
    }

    /// Buffers the facing request for the next tick. Only the most recent
    /// request before a step takes effect.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// Advances the simulation by one tick. No-op once the run is over.
    pub fn step(&mut self) {
        if self.run_state == RunState::GameOver {
            return;
        }

        self.snake.apply_pending_direction();
        let next_head = self.grid.neighbor(self.snake.head(), self.snake.direction());
        let ate = self.food.is_some_and(|food| food.location() == next_head);
        self.snake.advance(next_head, ate);

        if ate {
            self.score += SCORE_PER_FOOD;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.row,
                next_head.col,
                self.score
            );

            self.food = Food::spawn(&self.grid, &self.snake, &mut self.rng);
            match self.food {
                Some(food) => {
                    let location = food.location();
                    log!("Food spawned at ({}, {})", location.row, location.col);
                }
                None => {
                    // No free cell left: the run is complete.
                    self.run_state = RunState::GameOver;
                    log!("Grid filled at score {}. Game over", self.score);
                    return;
                }
            }
        }

        if self.run_state == RunState::Playing {
            if self.snake.head_overlaps_body() {
                self.run_state = RunState::Chopped;
                self.ticks_in_chop = 0;
                log!(
                    "Self collision at ({}, {}). Countdown started",
                    next_head.row,
                    next_head.col
                );
            }
        } else if self.run_state == RunState::Chopped {
            self.ticks_in_chop += 1;
            if self.ticks_in_chop >= self.settings.grace_period_ticks {
                self.run_state = RunState::GameOver;
                let len = self.snake.len();
                self.snake.hide_from_tail(len);
                log!("Countdown expired at score {}. Game over", self.score);
            } else {
                let hidden = (self.ticks_in_chop as usize * self.snake.len())
                    / self.settings.grace_period_ticks as usize;
                self.snake.hide_from_tail(hidden);
            }
        }
    }

    /// Returns to a fresh Playing run. Valid from any state.
    pub fn reset(&mut self) {
        self.snake = Self::initial_snake(&self.settings, &self.grid);
        self.food = Food::spawn(&self.grid, &self.snake, &mut self.rng);
        self.score = 0;
        self.run_state = RunState::Playing;
        self.ticks_in_chop = 0;
        log!("Run reset");
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Location> {
        self.food.map(|food| food.location())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_chopped(&self) -> bool {
        self.run_state == RunState::Chopped
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    // Whole ticks left in the countdown, clamped for stable display: never
    // more than grace - 1, never negative.
    pub fn countdown_remaining(&self) -> u64 {
        match self.run_state {
            RunState::Chopped => {
                let grace = self.settings.grace_period_ticks;
                (grace - self.ticks_in_chop).min(grace - 1)
            }
            _ => 0,
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, location: Location) {
        self.food = Some(Food::at(location));
    }
}

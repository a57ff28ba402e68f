use super::rng::SessionRng;
use super::snake::Snake;
use super::types::{GridSize, Location};

const PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    location: Location,
}

impl Food {
    pub fn location(&self) -> Location {
        self.location
    }

    /// Draws a location uniformly from the cells no segment occupies.
    /// Returns None when the snake covers the whole grid.
    pub fn spawn(grid: &GridSize, snake: &Snake, rng: &mut SessionRng) -> Option<Food> {
        // Rejection sampling first; it is uniform and cheap while free cells
        // are plentiful. Segment count below the cell count guarantees a free
        // cell exists (overlapping segments only free up more).
        if snake.len() < grid.cell_count() {
            for _ in 0..PLACEMENT_ATTEMPTS {
                let location = Location::new(
                    rng.random_range(0..grid.height),
                    rng.random_range(0..grid.width),
                );
                if !snake.occupies(location) {
                    return Some(Food { location });
                }
            }
        }

        let free: Vec<Location> = (0..grid.height)
            .flat_map(|row| (0..grid.width).map(move |col| Location::new(row, col)))
            .filter(|location| !snake.occupies(*location))
            .collect();
        if free.is_empty() {
            return None;
        }

        let index = rng.random_range(0..free.len());
        Some(Food {
            location: free[index],
        })
    }

    #[cfg(test)]
    pub(crate) fn at(location: Location) -> Food {
        Food { location }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Direction;

    #[test]
    fn test_spawn_avoids_snake() {
        let grid = GridSize::new(8, 8);
        let snake = Snake::new(Location::new(4, 4), 3, Direction::Right, &grid);
        let mut rng = SessionRng::new(42);
        for _ in 0..100 {
            let food = Food::spawn(&grid, &snake, &mut rng).unwrap();
            assert!(!snake.occupies(food.location()));
        }
    }

    #[test]
    fn test_spawn_finds_single_free_cell() {
        // Snake fills all of a 2x2 grid except one cell.
        let grid = GridSize::new(2, 2);
        let mut snake = Snake::new(Location::new(1, 1), 2, Direction::Right, &grid);
        snake.advance(Location::new(0, 1), true);
        let mut rng = SessionRng::new(42);
        let food = Food::spawn(&grid, &snake, &mut rng).unwrap();
        assert_eq!(food.location(), Location::new(0, 0));
    }

    #[test]
    fn test_spawn_none_when_grid_full() {
        let grid = GridSize::new(2, 2);
        let mut snake = Snake::new(Location::new(1, 1), 2, Direction::Right, &grid);
        snake.advance(Location::new(0, 1), true);
        snake.advance(Location::new(0, 0), true);
        let mut rng = SessionRng::new(42);
        assert!(Food::spawn(&grid, &snake, &mut rng).is_none());
    }
}

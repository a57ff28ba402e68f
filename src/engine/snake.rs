use std::collections::VecDeque;

use super::segment::Segment;
use super::types::{Direction, GridSize, Location};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Segment>,
    direction: Direction,
    pending_direction: Option<Direction>,
}

impl Snake {
    // The body extends away from the facing direction, wrapped on the grid.
    pub fn new(head: Location, length: usize, direction: Direction, grid: &GridSize) -> Self {
        let mut body = VecDeque::with_capacity(length);
        let mut location = head;
        body.push_back(Segment::new(location));
        for _ in 1..length {
            location = grid.neighbor(location, direction.opposite());
            body.push_back(Segment::new(location));
        }

        Self {
            body,
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Location {
        self.body
            .front()
            .expect("snake body should never be empty")
            .location
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Segments head-first.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    // Last write wins; the buffered request is examined on the next advance.
    pub fn request_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    // A request to reverse into the body is discarded, not an error.
    pub fn apply_pending_direction(&mut self) {
        if let Some(requested) = self.pending_direction.take()
            && !requested.is_opposite(&self.direction)
        {
            self.direction = requested;
        }
    }

    pub fn advance(&mut self, next_head: Location, grow: bool) {
        self.body.push_front(Segment::new(next_head));
        if !grow {
            self.body.pop_back();
        }
    }

    pub fn occupies(&self, location: Location) -> bool {
        self.body.iter().any(|s| s.location == location)
    }

    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|s| s.location == head)
    }

    // Marks the last `count` segments invisible. Segments are never marked
    // visible again, so repeated calls with a growing count stay monotonic.
    pub fn hide_from_tail(&mut self, count: usize) {
        let len = self.body.len();
        for segment in self.body.iter_mut().skip(len.saturating_sub(count)) {
            segment.visible = false;
        }
    }

    pub fn hidden_count(&self) -> usize {
        self.body.iter().filter(|s| !s.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSize {
        GridSize::new(10, 10)
    }

    #[test]
    fn test_new_lays_body_behind_head() {
        let snake = Snake::new(Location::new(5, 5), 3, Direction::Right, &grid());
        let locations: Vec<Location> = snake.segments().map(|s| s.location).collect();
        assert_eq!(
            locations,
            vec![
                Location::new(5, 5),
                Location::new(5, 4),
                Location::new(5, 3)
            ]
        );
        assert!(snake.segments().all(|s| s.visible));
    }

    #[test]
    fn test_new_wraps_body_over_edge() {
        let snake = Snake::new(Location::new(0, 1), 3, Direction::Right, &grid());
        let locations: Vec<Location> = snake.segments().map(|s| s.location).collect();
        assert_eq!(
            locations,
            vec![
                Location::new(0, 1),
                Location::new(0, 0),
                Location::new(0, 9)
            ]
        );
    }

    #[test]
    fn test_reverse_request_is_discarded() {
        let mut snake = Snake::new(Location::new(5, 5), 3, Direction::Right, &grid());
        snake.request_direction(Direction::Left);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_last_request_wins() {
        let mut snake = Snake::new(Location::new(5, 5), 3, Direction::Right, &grid());
        snake.request_direction(Direction::Up);
        snake.request_direction(Direction::Down);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Location::new(5, 5), 3, Direction::Right, &grid());
        snake.advance(Location::new(5, 6), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Location::new(5, 6));
        assert!(!snake.occupies(Location::new(5, 3)));
    }

    #[test]
    fn test_advance_with_growth_extends_length() {
        let mut snake = Snake::new(Location::new(5, 5), 3, Direction::Right, &grid());
        snake.advance(Location::new(5, 6), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Location::new(5, 6));
        assert!(snake.occupies(Location::new(5, 3)));
    }

    #[test]
    fn test_head_overlap_detection() {
        let mut snake = Snake::new(Location::new(5, 5), 4, Direction::Right, &grid());
        assert!(!snake.head_overlaps_body());
        snake.advance(Location::new(5, 4), true);
        assert!(snake.head_overlaps_body());
    }

    #[test]
    fn test_hide_from_tail_is_monotonic() {
        let mut snake = Snake::new(Location::new(5, 5), 5, Direction::Right, &grid());
        snake.hide_from_tail(2);
        assert_eq!(snake.hidden_count(), 2);
        let hidden: Vec<bool> = snake.segments().map(|s| s.visible).collect();
        assert_eq!(hidden, vec![true, true, true, false, false]);

        snake.hide_from_tail(1);
        assert_eq!(snake.hidden_count(), 2);

        snake.hide_from_tail(4);
        assert_eq!(snake.hidden_count(), 4);
    }
}

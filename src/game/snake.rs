use super::direction::Direction;
use super::position::Position;

/// The snake's body: ordered segments with the head at index 0.
///
/// Segments move in lock-step. `advance` never checks bounds; the engine
/// validates the head afterwards, so an out-of-grid head is a legal
/// transient state here.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head first.
    pub body: Vec<Position>,
}

/// Initial body length.
pub const INITIAL_LENGTH: usize = 3;

impl Snake {
    /// Create the initial snake: head at `start`, two segments trailing to
    /// its left, as if it had been moving right.
    pub fn new(start: Position) -> Self {
        let body = (0..INITIAL_LENGTH as i32)
            .map(|i| start.offset(-i, 0))
            .collect();
        Self { body }
    }

    /// Head position.
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Move one step in `direction`: each segment takes its predecessor's
    /// place and the head advances one cell.
    pub fn advance(&mut self, direction: Direction) {
        let new_head = self.head().step(direction);
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Append a segment at the tail position. The duplicate gets pulled
    /// into place on subsequent advances.
    pub fn grow(&mut self) {
        if let Some(&tail) = self.body.last() {
            self.body.push(tail);
        }
    }

    /// True iff the head occupies the same cell as any other segment.
    pub fn hits_self(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    /// True iff any segment occupies `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_body() {
        let snake = Snake::new(Position::new(5, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_advance_moves_head_and_shifts_body() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Direction::Right);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.body, vec![
            Position::new(6, 5),
            Position::new(5, 5),
            Position::new(4, 5),
        ]);

        snake.advance(Direction::Down);
        assert_eq!(snake.head(), Position::new(6, 6));
        assert_eq!(snake.body[1], Position::new(6, 5));
    }

    #[test]
    fn test_advance_in_each_direction() {
        for (direction, expected) in [
            (Direction::Up, Position::new(5, 4)),
            (Direction::Down, Position::new(5, 6)),
            (Direction::Left, Position::new(4, 5)),
            (Direction::Right, Position::new(6, 5)),
        ] {
            let mut snake = Snake::new(Position::new(5, 5));
            snake.advance(direction);
            assert_eq!(snake.head(), expected);
        }
    }

    #[test]
    fn test_grow_duplicates_tail() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.grow();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body[3], Position::new(3, 5));

        // The duplicate resolves itself on the next advance.
        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body[3], Position::new(3, 5));
        snake.advance(Direction::Right);
        assert_eq!(snake.body[3], Position::new(4, 5));
    }

    #[test]
    fn test_repeated_grow_adds_one_segment_each() {
        let mut snake = Snake::new(Position::new(5, 5));
        for n in 1..=4 {
            snake.grow();
            assert_eq!(snake.len(), INITIAL_LENGTH + n);
        }
    }

    #[test]
    fn test_no_self_collision_on_fresh_snake() {
        let snake = Snake::new(Position::new(5, 5));
        assert!(!snake.hits_self());
    }

    #[test]
    fn test_self_collision_after_tight_turn() {
        // Grow to length 5, then turn in a 2x2 box so the head lands on
        // the body.
        let mut snake = Snake::new(Position::new(5, 5));
        snake.grow();
        snake.grow();
        snake.advance(Direction::Right);
        snake.advance(Direction::Down);
        snake.advance(Direction::Left);
        assert!(!snake.hits_self());
        snake.advance(Direction::Up);
        assert!(snake.hits_self());
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::new(Position::new(5, 5));
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }
}

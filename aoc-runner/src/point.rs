//! Grid coordinates and offsets

use std::ops::{Add, Neg, Sub};

/// A grid coordinate or a 2D offset.
///
/// `x` indexes rows and `y` indexes columns within a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The four cardinal offsets, in lookup order: (-1,0), (1,0), (0,-1), (0,1)
    pub const CARDINALS: [Point; 4] = [
        Point::new(-1, 0),
        Point::new(1, 0),
        Point::new(0, -1),
        Point::new(0, 1),
    ];

    /// The four diagonal offsets
    pub const DIAGONALS: [Point; 4] = [
        Point::new(-1, -1),
        Point::new(-1, 1),
        Point::new(1, -1),
        Point::new(1, 1),
    ];

    /// `self + offset`, or `None` if either coordinate overflows
    pub const fn checked_add(self, offset: Point) -> Option<Point> {
        match (self.x.checked_add(offset.x), self.y.checked_add(offset.y)) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }

    /// `self + offset` with each coordinate clamped to the `i64` range
    pub const fn saturating_add(self, offset: Point) -> Point {
        Point::new(
            self.x.saturating_add(offset.x),
            self.y.saturating_add(offset.y),
        )
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// A cardinal direction on the grid. Rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset for this direction
    pub const fn offset(self) -> Point {
        match self {
            Direction::Up => Point::new(-1, 0),
            Direction::Down => Point::new(1, 0),
            Direction::Left => Point::new(0, -1),
            Direction::Right => Point::new(0, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

//! Bounds-checked 2D grid

use crate::error::GridError;
use crate::point::{Direction, Point};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

/// A 2D container indexed by [`Point`] as `(row, column)`.
///
/// Rows are not required to share a length; bounds are checked against the
/// length of the addressed row. The grid owns its storage and is never
/// resized after construction. `Clone` produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Build a grid from owned rows
    ///
    /// # Returns
    /// * `Ok(Grid)` - At least one row, and the first row is non-empty
    /// * `Err(GridError::Empty)` - Otherwise
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        match rows.first() {
            Some(first) if !first.is_empty() => Ok(Self { rows }),
            _ => Err(GridError::Empty),
        }
    }

    /// Build a grid by collecting any nested iterable
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `x`, if it exists
    pub fn row_len(&self, x: usize) -> Option<usize> {
        self.rows.get(x).map(Vec::len)
    }

    fn index(&self, point: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (y < self.rows.get(x)?.len()).then_some((x, y))
    }

    /// True iff either coordinate is negative, the row does not exist, or the
    /// column is past the end of that row
    pub fn out_of_bounds(&self, point: Point) -> bool {
        self.index(point).is_none()
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        let (x, y) = self.index(point)?;
        Some(&self.rows[x][y])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        let (x, y) = self.index(point)?;
        Some(&mut self.rows[x][y])
    }

    /// Overwrite the value at `point`
    pub fn set(&mut self, point: Point, value: T) -> Result<(), GridError> {
        let cell = self
            .get_mut(point)
            .ok_or(GridError::OutOfBounds(point))?;
        *cell = value;
        Ok(())
    }

    /// Exchange the values stored at two points
    pub fn swap_items(&mut self, a: Point, b: Point) -> Result<(), GridError> {
        let (ax, ay) = self.index(a).ok_or(GridError::OutOfBounds(a))?;
        let (bx, by) = self.index(b).ok_or(GridError::OutOfBounds(b))?;

        if ax == bx {
            self.rows[ax].swap(ay, by);
            return Ok(());
        }

        let ((low_x, low_y), (high_x, high_y)) = if ax < bx {
            ((ax, ay), (bx, by))
        } else {
            ((bx, by), (ax, ay))
        };
        let (head, tail) = self.rows.split_at_mut(high_x);
        std::mem::swap(&mut head[low_x][low_y], &mut tail[0][high_y]);
        Ok(())
    }

    /// Every point paired with its value, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .map(move |(y, value)| (Point::new(x as i64, y as i64), value))
        })
    }

    /// Iterate rows from the top. Each call starts over.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Distinct values in first-seen, row-major order
    pub fn unique_items(&self) -> Vec<&T>
    where
        T: Eq + Hash,
    {
        let mut seen = FxHashSet::default();
        self.rows
            .iter()
            .flatten()
            .filter(|value| seen.insert(*value))
            .collect()
    }

    /// Every point holding `target`, row-major
    pub fn find_items(&self, target: &T) -> Vec<Point>
    where
        T: PartialEq,
    {
        self.cells()
            .filter(|(_, value)| *value == target)
            .map(|(point, _)| point)
            .collect()
    }

    /// Breadth-first flood fill from `start` across cardinal neighbours holding
    /// the same value. The start point is always first in the result.
    pub fn find_connected_region(&self, start: Point) -> Result<Vec<Point>, GridError>
    where
        T: PartialEq,
    {
        let target = self.get(start).ok_or(GridError::StartNotInGrid(start))?;

        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut queue = VecDeque::from([start]);
        let mut region = Vec::new();

        while let Some(current) = queue.pop_front() {
            region.push(current);

            for neighbour in self.cardinal_neighbours(current) {
                if self.get(neighbour) == Some(target) && visited.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }

        Ok(region)
    }

    /// Cardinal neighbours of `points` that are outside the grid or outside the set.
    ///
    /// A neighbour shared by several members is emitted once per member, so the
    /// result length is the fence length of the region, not its distinct
    /// boundary cells. Duplicate input points are counted once.
    pub fn region_perimeter<I>(&self, points: I) -> Vec<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut members = FxHashSet::default();
        let ordered: Vec<Point> = points
            .into_iter()
            .filter(|point| members.insert(*point))
            .collect();

        ordered
            .iter()
            .flat_map(|&point| self.cardinal_neighbours(point))
            .filter(|neighbour| self.out_of_bounds(*neighbour) || !members.contains(neighbour))
            .collect()
    }

    /// Representable cardinal neighbours of `point`, in [`Point::CARDINALS`] order.
    /// A neighbour that would overflow `i64` is always out of bounds and is skipped.
    fn cardinal_neighbours(&self, point: Point) -> impl Iterator<Item = Point> {
        Point::CARDINALS
            .into_iter()
            .filter_map(move |offset| point.checked_add(offset))
    }

    /// The point at `point + offset` and its value, if in bounds.
    ///
    /// On overflow the point is saturated and the value is `None`.
    pub fn adjacent_item(&self, point: Point, offset: Point) -> (Point, Option<&T>) {
        match point.checked_add(offset) {
            Some(neighbour) => (neighbour, self.get(neighbour)),
            None => (point.saturating_add(offset), None),
        }
    }

    pub fn adjacent_in(&self, point: Point, direction: Direction) -> (Point, Option<&T>) {
        self.adjacent_item(point, direction.offset())
    }

    /// In-bounds cardinal neighbours in [`Point::CARDINALS`] order
    pub fn surrounding_items(&self, point: Point) -> Vec<Point> {
        self.cardinal_neighbours(point)
            .filter(|neighbour| !self.out_of_bounds(*neighbour))
            .collect()
    }

    /// In-bounds neighbours including diagonals: diagonals first, then cardinals
    pub fn surrounding_items_diagonal(&self, point: Point) -> Vec<Point> {
        Point::DIAGONALS
            .into_iter()
            .chain(Point::CARDINALS)
            .filter_map(|offset| point.checked_add(offset))
            .filter(|neighbour| !self.out_of_bounds(*neighbour))
            .collect()
    }

    /// One string per row with every cell mapped through `mapper`
    pub fn to_strings_with<F>(&self, mut mapper: F) -> Vec<String>
    where
        F: FnMut(&T) -> String,
    {
        self.rows
            .iter()
            .map(|row| row.iter().map(&mut mapper).collect())
            .collect()
    }

    pub fn to_strings(&self) -> Vec<String>
    where
        T: fmt::Display,
    {
        self.to_strings_with(|value| value.to_string())
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a Vec<T>;
    type IntoIter = std::slice::Iter<'a, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.to_strings().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

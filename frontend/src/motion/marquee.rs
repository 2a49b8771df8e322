use crate::config::motion::{MARQUEE_BOOST, MARQUEE_LOOP_SECS, MARQUEE_RELAX_SECS};

/// Wraps `value` into `[min, max)`. A zero-width range collapses to `min`.
pub fn wrap(min: f64, max: f64, value: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 || !value.is_finite() {
        return min;
    }
    let wrapped = min + (value - min).rem_euclid(range);
    // rem_euclid can round up to exactly `range` for tiny negative inputs
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Even rows travel left, odd rows right.
    pub fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// One horizontally looping row. The row's content is repeated so that
/// shifting it by one set width is invisible.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeRow {
    direction: Direction,
    set_width: f64,
    offset: f64,
    time_scale: f64,
    relaxing: bool,
}

impl MarqueeRow {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            set_width: 0.0,
            offset: 0.0,
            time_scale: 1.0,
            relaxing: false,
        }
    }

    /// Sets the width of one copy of the row. Left rows start at 0, right rows at `-width`;
    /// a re-measure keeps the current phase instead of restarting.
    pub fn measure(&mut self, set_width: f64) {
        let set_width = if set_width.is_finite() { set_width.max(0.0) } else { 0.0 };
        let phase = if self.set_width > 0.0 {
            -self.offset / self.set_width
        } else {
            match self.direction {
                Direction::Left => 0.0,
                Direction::Right => 1.0,
            }
        };
        self.set_width = set_width;
        self.offset = -phase.clamp(0.0, 1.0) * set_width;
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[cfg(test)]
    pub fn set_width(&self) -> f64 {
        self.set_width
    }

    #[cfg(test)]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Wheel over the row: run at double speed until the pointer leaves.
    pub fn boost(&mut self) {
        self.time_scale = MARQUEE_BOOST;
        self.relaxing = false;
    }

    /// Pointer left the row: ease back to normal speed.
    pub fn relax(&mut self) {
        if self.time_scale > 1.0 {
            self.relaxing = true;
        }
    }

    /// Advances the row by `dt` seconds and returns the new offset, always within `[-W, 0]`.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if self.relaxing {
            let step = (MARQUEE_BOOST - 1.0) * dt / MARQUEE_RELAX_SECS;
            self.time_scale = (self.time_scale - step).max(1.0);
            if self.time_scale <= 1.0 {
                self.relaxing = false;
            }
        }
        if self.set_width <= 0.0 {
            self.offset = 0.0;
            return self.offset;
        }
        let speed = self.set_width / MARQUEE_LOOP_SECS;
        let next = self.offset + self.direction.sign() * speed * self.time_scale * dt;
        self.offset = wrap(-self.set_width, 0.0, next);
        self.offset
    }
}

/// Splits `items` into rows of at most `per_row`.
pub fn chunk_rows<T: Clone>(items: &[T], per_row: usize) -> Vec<Vec<T>> {
    if per_row == 0 {
        return Vec::new();
    }
    items.chunks(per_row).map(|c| c.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(row: &MarqueeRow) -> bool {
        let w = row.set_width();
        row.offset() >= -w && row.offset() <= 0.0
    }

    #[test]
    fn wrap_matches_modular_range() {
        assert_eq!(wrap(-100.0, 0.0, -150.0), -50.0);
        assert_eq!(wrap(-100.0, 0.0, 30.0), -70.0);
        assert_eq!(wrap(-100.0, 0.0, -100.0), -100.0);
        assert_eq!(wrap(-100.0, 0.0, 0.0), -100.0);
        assert_eq!(wrap(0.0, 0.0, 42.0), 0.0);
    }

    #[test]
    fn rows_alternate_direction() {
        assert_eq!(Direction::for_row(0), Direction::Left);
        assert_eq!(Direction::for_row(1), Direction::Right);
        assert_eq!(Direction::for_row(2), Direction::Left);
    }

    #[test]
    fn offset_stays_within_one_set_width() {
        for (i, width) in [480.0, 1234.5, 3.0].into_iter().enumerate() {
            let mut row = MarqueeRow::new(Direction::for_row(i));
            row.measure(width);
            assert!(in_bounds(&row));
            for step in 0..5_000 {
                if step % 700 == 0 {
                    row.boost();
                }
                if step % 700 == 350 {
                    row.relax();
                }
                row.advance(1.0 / 60.0);
                assert!(in_bounds(&row), "offset {} escaped width {}", row.offset(), width);
            }
        }
    }

    #[test]
    fn left_rows_move_left_and_right_rows_move_right() {
        let mut left = MarqueeRow::new(Direction::Left);
        left.measure(400.0);
        left.advance(1.0);
        assert_eq!(left.offset(), -10.0);

        let mut right = MarqueeRow::new(Direction::Right);
        right.measure(400.0);
        assert_eq!(right.offset(), -400.0);
        right.advance(1.0);
        assert_eq!(right.offset(), -390.0);
    }

    #[test]
    fn zero_width_row_never_divides_by_zero() {
        let mut row = MarqueeRow::new(Direction::Right);
        row.measure(0.0);
        row.boost();
        for _ in 0..10 {
            assert_eq!(row.advance(0.5), 0.0);
        }
        row.measure(f64::NAN);
        assert_eq!(row.advance(0.5), 0.0);
    }

    #[test]
    fn wheel_doubles_speed_and_leave_relaxes() {
        let mut row = MarqueeRow::new(Direction::Left);
        row.measure(4_000.0);
        row.boost();
        assert_eq!(row.time_scale(), 2.0);
        row.advance(1.0);
        assert_eq!(row.offset(), -200.0);

        row.relax();
        row.advance(0.2);
        assert!(row.time_scale() > 1.0 && row.time_scale() < 2.0);
        row.advance(0.3);
        assert_eq!(row.time_scale(), 1.0);
    }

    #[test]
    fn relax_without_boost_is_a_no_op() {
        let mut row = MarqueeRow::new(Direction::Left);
        row.measure(100.0);
        row.relax();
        row.advance(1.0);
        assert_eq!(row.time_scale(), 1.0);
    }

    #[test]
    fn remeasure_keeps_phase() {
        let mut row = MarqueeRow::new(Direction::Left);
        row.measure(400.0);
        row.advance(10.0);
        assert_eq!(row.offset(), -100.0);
        row.measure(800.0);
        assert_eq!(row.offset(), -200.0);
        row.measure(800.0);
        assert_eq!(row.offset(), -200.0);
    }

    #[test]
    fn chunking_keeps_order() {
        let rows = chunk_rows(&[1, 2, 3, 4, 5, 6, 7], 3);
        assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
        assert!(chunk_rows(&[1, 2], 0).is_empty());
    }
}

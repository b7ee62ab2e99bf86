use serde::Serialize;

/// An integer position relative to a layout origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A destination rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The integer bounding box of a layout pass.
///
/// Starts as the empty rectangle at the origin and only ever grows, so the
/// origin is always inside (or on the edge of) the box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// The smallest box enclosing both `self` and `x, y, width, height`.
    ///
    /// Returns `None` if an edge or the resulting extent overflows `i32`.
    pub fn checked_extend(&self, x: i32, y: i32, width: i32, height: i32) -> Option<Bounds> {
        let right = self.right().max(x.checked_add(width)?);
        let bottom = self.bottom().max(y.checked_add(height)?);
        let left = self.x.min(x);
        let top = self.y.min(y);
        Some(Bounds::new(
            left,
            top,
            right.checked_sub(left)?,
            bottom.checked_sub(top)?,
        ))
    }

    /// Translates the box into surface coordinates.
    pub fn offset(&self, origin_x: f32, origin_y: f32) -> Rect {
        Rect::new(
            origin_x + self.x as f32,
            origin_y + self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_grows_monotonically() {
        let mut b = Bounds::default();
        b = b.checked_extend(0, 0, 10, 5).unwrap();
        assert_eq!(b, Bounds::new(0, 0, 10, 5));

        b = b.checked_extend(10, 0, 4, 5).unwrap();
        assert_eq!(b, Bounds::new(0, 0, 14, 5));

        // A smaller box inside changes nothing
        b = b.checked_extend(2, 1, 1, 1).unwrap();
        assert_eq!(b, Bounds::new(0, 0, 14, 5));
    }

    #[test]
    fn test_extend_stays_anchored_at_origin() {
        let mut b = Bounds::default();
        b = b.checked_extend(20, 30, 5, 5).unwrap();
        assert_eq!(b, Bounds::new(0, 0, 25, 35));
    }

    #[test]
    fn test_extend_negative_coordinates() {
        let mut b = Bounds::default();
        b = b.checked_extend(0, -4, 8, 16).unwrap();
        assert_eq!(b, Bounds::new(0, -4, 8, 16));
        assert_eq!(b.bottom(), 12);

        b = b.checked_extend(-3, 0, 1, 1).unwrap();
        assert_eq!(b, Bounds::new(-3, -4, 11, 16));
    }

    #[test]
    fn test_extend_overflow_is_none() {
        let b = Bounds::new(0, 0, 10, 10);
        assert_eq!(b.checked_extend(i32::MAX - 5, 0, 10, 1), None);
        assert_eq!(b.checked_extend(0, i32::MAX, 1, 1), None);
        // Right edge fits, but the extent from a negative left edge does not
        assert_eq!(b.checked_extend(i32::MIN, 0, 1, 1), None);
        assert_eq!(
            b.checked_extend(i32::MAX - 10, 0, 10, 1),
            Some(Bounds::new(0, 0, i32::MAX, 10))
        );
    }

    #[test]
    fn test_offset() {
        let b = Bounds::new(-2, 0, 10, 20);
        assert_eq!(b.offset(50.0, 50.0), Rect::new(48.0, 50.0, 10.0, 20.0));
    }
}

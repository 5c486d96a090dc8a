//! Integer 2D offsets.

use std::ops::Add;

/// A cell offset or grid position. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `other`
    pub const fn add(self, other: Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::add(self, other)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_translates_both_axes() {
        assert_eq!(Vector::new(2, 3) + Vector::new(-1, 4), Vector::new(1, 7));
        assert_eq!(Vector::new(0, 0).add(Vector::new(5, -2)), Vector::new(5, -2));
    }
}

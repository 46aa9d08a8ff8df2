//! Interface Segregation Principle
//!
//! No type should be forced to expose operations it cannot honour. Making
//! `Square` implement `Rectangle` leaves it with `set_width`/`set_height`
//! methods that have to do nothing. Splitting the capability into a small
//! `TwoDSimpleShape` trait lets each shape add only the methods that make
//! sense for it.
//!
//! Run with: cargo run --bin solid_04_interface_segregation

use colored::Colorize;
use thiserror::Error;

// =============================================================================
// Milestone 1: One fat trait, two dead methods
// =============================================================================

pub trait Rectangle {
    fn set_width(&mut self, width: u16);
    fn set_height(&mut self, height: u16);
    fn width(&self) -> u16;
    fn height(&self) -> u16;

    fn calculate_area(&self) -> u16 {
        self.width().wrapping_mul(self.height())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainRectangle {
    width: u16,
    height: u16,
}

impl PlainRectangle {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Rectangle for PlainRectangle {
    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    width: u16,
    height: u16,
}

impl Square {
    pub fn new(length: u16) -> Self {
        Self {
            width: length,
            height: length,
        }
    }

    pub fn set_length(&mut self, length: u16) {
        self.width = length;
        self.height = length;
    }

    pub fn length(&self) -> u16 {
        self.width
    }
}

impl Rectangle for Square {
    // Public, callable, and useless.
    fn set_width(&mut self, _width: u16) {}

    fn set_height(&mut self, _height: u16) {}

    fn width(&self) -> u16 {
        self.length()
    }

    fn height(&self) -> u16 {
        self.length()
    }
}

// =============================================================================
// Milestone 2: A segregated shape hierarchy
// =============================================================================

/// Width/height storage shared by every simple 2D shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }
}

pub trait TwoDSimpleShape {
    fn calculate_area(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle2D {
    dims: Dimensions,
}

impl Rectangle2D {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            dims: Dimensions { width, height },
        }
    }

    pub fn set_width(&mut self, width: u16) {
        self.dims.width = width;
    }

    pub fn set_height(&mut self, height: u16) {
        self.dims.height = height;
    }

    pub fn width(&self) -> u16 {
        self.dims.width
    }

    pub fn height(&self) -> u16 {
        self.dims.height
    }
}

impl TwoDSimpleShape for Rectangle2D {
    fn calculate_area(&self) -> u32 {
        self.dims.area()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square2D {
    dims: Dimensions,
}

impl Square2D {
    pub fn new(length: u16) -> Self {
        Self {
            dims: Dimensions {
                width: length,
                height: length,
            },
        }
    }

    pub fn set_length(&mut self, length: u16) {
        self.dims = Dimensions {
            width: length,
            height: length,
        };
    }

    pub fn length(&self) -> u16 {
        self.dims.width
    }
}

impl TwoDSimpleShape for Square2D {
    fn calculate_area(&self) -> u32 {
        self.dims.area()
    }
}

// =============================================================================
// Milestone 3: Conversions between the shapes
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Rectangle {width}x{height} is not a square")]
    NotSquare { width: u16, height: u16 },
}

impl TryFrom<Rectangle2D> for Square2D {
    type Error = ShapeError;

    fn try_from(rect: Rectangle2D) -> Result<Self, Self::Error> {
        if rect.width() != rect.height() {
            return Err(ShapeError::NotSquare {
                width: rect.width(),
                height: rect.height(),
            });
        }
        Ok(Square2D { dims: rect.dims })
    }
}

impl From<Square2D> for Rectangle2D {
    fn from(square: Square2D) -> Self {
        Rectangle2D { dims: square.dims }
    }
}

pub fn total_area(shapes: &[&dyn TwoDSimpleShape]) -> u64 {
    shapes
        .iter()
        .map(|shape| u64::from(shape.calculate_area()))
        .sum()
}

fn main() {
    println!(
        "{}",
        "=== Milestone 1: Square forced into Rectangle ===".bold()
    );
    let mut square = Square::new(5);
    square.set_width(9);
    println!(
        "Square::set_width(9) did nothing: width {}, area {}",
        square.width(),
        square.calculate_area()
    );
    square.set_length(9);
    println!(
        "Square::set_length(9): length {}, area {}",
        square.length(),
        square.calculate_area()
    );
    let rect = PlainRectangle::new(3, 4);
    println!("PlainRectangle 3x4 area {}", rect.calculate_area());

    println!("\n{}", "=== Milestone 2: Segregated shapes ===".bold());
    let rect = Rectangle2D::new(3, 4);
    let mut square = Square2D::new(4);
    square.set_length(5);
    println!(
        "Rectangle2D 3x4 area {}",
        rect.calculate_area().to_string().green()
    );
    println!(
        "Square2D length {} area {}",
        square.length(),
        square.calculate_area().to_string().green()
    );
    println!("Total area {}", total_area(&[&rect, &square]));

    println!("\n{}", "=== Milestone 3: Conversions ===".bold());
    match Square2D::try_from(rect) {
        Ok(square) => println!("Converted to square of length {}", square.length()),
        Err(err) => println!("{}", err.to_string().yellow()),
    }
    let widened = Rectangle2D::from(square);
    println!(
        "Square2D 5 as Rectangle2D: {}x{}",
        widened.width(),
        widened.height()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_flawed_square_ignores_dimension_setters() {
        let mut square = Square::new(5);
        square.set_width(7);
        square.set_height(9);
        assert_eq!(square.width(), 5);
        assert_eq!(square.height(), 5);
        assert_eq!(square.calculate_area(), 25);

        square.set_length(6);
        assert_eq!(square.width(), 6);
        assert_eq!(square.calculate_area(), 36);
    }

    #[test]
    fn test_flawed_rectangle_area() {
        let mut rect = PlainRectangle::new(3, 4);
        assert_eq!(rect.calculate_area(), 12);
        rect.set_height(10);
        assert_eq!(rect.calculate_area(), 30);
    }

    #[test]
    fn test_rectangle2d_area() {
        let mut rect = Rectangle2D::new(3, 4);
        assert_eq!(rect.calculate_area(), 12);
        rect.set_width(10);
        assert_eq!(rect.width(), 10);
        assert_eq!(rect.height(), 4);
        assert_eq!(rect.calculate_area(), 40);
    }

    #[test]
    fn test_square2d_area() {
        let mut square = Square2D::new(5);
        assert_eq!(square.calculate_area(), 25);
        square.set_length(6);
        assert_eq!(square.length(), 6);
        assert_eq!(square.calculate_area(), 36);
    }

    #[test]
    fn test_segregated_area_does_not_truncate() {
        let rect = Rectangle2D::new(u16::MAX, u16::MAX);
        assert_eq!(rect.calculate_area(), 65_535 * 65_535);
    }

    #[test]
    fn test_total_area_mixed_shapes() {
        let rect = Rectangle2D::new(3, 4);
        let square = Square2D::new(5);
        assert_eq!(total_area(&[&rect, &square]), 37);
        assert_eq!(total_area(&[]), 0);
    }

    #[test]
    fn test_try_from_rejects_non_square() {
        let err = Square2D::try_from(Rectangle2D::new(3, 4)).unwrap_err();
        assert_eq!(err, ShapeError::NotSquare { width: 3, height: 4 });
        assert!(err.to_string().contains("3x4"));
    }

    #[test]
    fn test_try_from_accepts_square() {
        let square = Square2D::try_from(Rectangle2D::new(6, 6)).unwrap();
        assert_eq!(square.length(), 6);
        assert_eq!(square.calculate_area(), 36);
    }

    proptest! {
        #[test]
        fn test_square_rectangle_round_trip_keeps_area(length: u16) {
            let square = Square2D::new(length);
            let rect = Rectangle2D::from(square);
            prop_assert_eq!(rect.calculate_area(), square.calculate_area());
            prop_assert_eq!(Square2D::try_from(rect), Ok(square));
        }

        #[test]
        fn test_rectangle2d_area_is_product(width: u16, height: u16) {
            let rect = Rectangle2D::new(width, height);
            prop_assert_eq!(rect.calculate_area(), u32::from(width) * u32::from(height));
            prop_assert_eq!(rect.calculate_area(), rect.calculate_area());
        }
    }
}

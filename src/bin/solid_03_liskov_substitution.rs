//! Liskov Substitution Principle
//!
//! Every implementor of a trait must be usable wherever the trait is expected,
//! without surprising the caller. `Square` below keeps its sides equal by
//! resizing both on every setter call, so code written against `Rectangle`
//! gets a different area than it asked for. This file shows the violation
//! only; see `solid_04_interface_segregation` for the redesign.
//!
//! Run with: cargo run --bin solid_03_liskov_substitution

use colored::Colorize;

// =============================================================================
// Milestone 1: The base capability
// =============================================================================

pub trait Rectangle {
    fn set_width(&mut self, width: u16);
    fn set_height(&mut self, height: u16);
    fn width(&self) -> u16;
    fn height(&self) -> u16;

    /// Truncated to `u16`, overflow wraps.
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

// =============================================================================
// Milestone 2: A square that breaks substitution
// =============================================================================

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
}

impl Rectangle for Square {
    // Setting one side silently resizes the other.
    fn set_width(&mut self, width: u16) {
        self.width = width;
        self.height = width;
    }

    fn set_height(&mut self, height: u16) {
        self.width = height;
        self.height = height;
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

/// A client that only knows about `Rectangle`: widen the shape, report the area.
pub fn stretch_width(shape: &mut dyn Rectangle, width: u16) -> u16 {
    shape.set_width(width);
    shape.calculate_area()
}

fn main() {
    println!(
        "{}",
        "=== Liskov Substitution: Square as Rectangle ===".bold()
    );

    report("PlainRectangle 5x5", &mut PlainRectangle::new(5, 5));
    report("Square 5", &mut Square::new(5));
}

fn report(name: &str, shape: &mut dyn Rectangle) {
    let expected = 7u16.wrapping_mul(shape.height());
    let observed = stretch_width(shape, 7);

    let verdict = if observed == expected {
        "as expected".green()
    } else {
        "substitution broken".red()
    };
    println!("{name}: set_width(7) -> expected area {expected}, got {observed} ({verdict})");
}

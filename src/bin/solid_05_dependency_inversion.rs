//! Dependency Inversion Principle
//!
//! High-level code should not depend on low-level details; both should depend
//! on an abstraction. `ColorSearcher` reaches into the basket's tuple vector
//! and breaks as soon as the storage changes. `ColorSearcherDip` only knows the
//! `BasketSearcher` trait.
//!
//! Run with: cargo run --bin solid_05_dependency_inversion

use colored::Colorize;
use std::io::{self, Write};

// =============================================================================
// Milestone 1: High-level code tied to low-level storage
// =============================================================================

#[derive(Debug, Default, Clone)]
pub struct FruitBasket {
    /// (fruit, color)
    pub basket: Vec<(String, String)>,
}

impl FruitBasket {
    pub fn add_to_basket(&mut self, fruit: &str, color: &str) {
        self.basket.push((fruit.to_string(), color.to_string()));
    }
}

pub struct ColorSearcher;

impl ColorSearcher {
    pub fn list_color<W: Write>(
        &self,
        out: &mut W,
        fruit_basket: &FruitBasket,
        color: &str,
    ) -> io::Result<()> {
        for (fruit, fruit_color) in &fruit_basket.basket {
            if fruit_color == color {
                writeln!(out, "Found {fruit}")?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Milestone 2: Both sides depend on a trait
// =============================================================================

pub trait BasketSearcher {
    /// Names of every item with exactly this color, in insertion order.
    fn search_by_color(&self, color: &str) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Fruit {
    name: String,
    color: String,
}

#[derive(Debug, Default, Clone)]
pub struct FruitBasketDip {
    basket: Vec<Fruit>,
}

impl FruitBasketDip {
    pub fn add_to_basket(&mut self, fruit: &str, color: &str) {
        self.basket.push(Fruit {
            name: fruit.to_string(),
            color: color.to_string(),
        });
    }
}

impl BasketSearcher for FruitBasketDip {
    fn search_by_color(&self, color: &str) -> Vec<String> {
        self.basket
            .iter()
            .filter(|fruit| fruit.color == color)
            .map(|fruit| fruit.name.clone())
            .collect()
    }
}

pub struct ColorSearcherDip;

impl ColorSearcherDip {
    pub fn list_color<W: Write>(
        &self,
        out: &mut W,
        basket_searcher: &dyn BasketSearcher,
        color: &str,
    ) -> io::Result<()> {
        for item in basket_searcher.search_by_color(color) {
            writeln!(out, "Found {item}")?;
        }
        Ok(())
    }
}

/// Writes only the `Found <name>` lines; banners go to stderr.
fn run<W: Write>(out: &mut W) -> io::Result<()> {
    eprintln!("{}", "=== Milestone 1: ColorSearcher ===".bold());
    let mut fruit_basket = FruitBasket::default();
    fruit_basket.add_to_basket("Banana", "Yellow");
    fruit_basket.add_to_basket("Apple", "Red");
    ColorSearcher.list_color(out, &fruit_basket, "Yellow")?;
    out.flush()?;

    eprintln!("{}", "=== Milestone 2: ColorSearcherDip ===".bold());
    let mut fruit_basket_dip = FruitBasketDip::default();
    fruit_basket_dip.add_to_basket("Banana", "Yellow");
    fruit_basket_dip.add_to_basket("Apple", "Red");
    ColorSearcherDip.list_color(out, &fruit_basket_dip, "Yellow")?;
    out.flush()
}

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out)
}

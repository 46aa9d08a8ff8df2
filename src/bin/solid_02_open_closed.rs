//! Open Closed Principle
//!
//! Code should be open for extension and closed for modification. Rather than
//! growing `TextAdder` a new method for every way of joining two strings, the
//! caller hands it a strategy and `TextAdder` never changes again.
//!
//! Run with: cargo run --bin solid_02_open_closed

use colored::Colorize;

// =============================================================================
// Milestone 1: The strategy trait
// =============================================================================

/// How two strings are combined.
pub trait TextAddType {
    fn add(&self, original: &str, new_string: &str) -> String;
}

pub struct TextAppend;

impl TextAddType for TextAppend {
    fn add(&self, original: &str, new_string: &str) -> String {
        format!("{original}{new_string}")
    }
}

pub struct TextPrepend;

impl TextAddType for TextPrepend {
    fn add(&self, original: &str, new_string: &str) -> String {
        format!("{new_string}{original}")
    }
}

// A closure is a strategy too.
impl<F> TextAddType for F
where
    F: Fn(&str, &str) -> String,
{
    fn add(&self, original: &str, new_string: &str) -> String {
        self(original, new_string)
    }
}

// =============================================================================
// Milestone 2: The adder is closed for modification
// =============================================================================

pub struct TextAdder;

impl TextAdder {
    pub fn add_to_text(&self, original: &str, new_string: &str, adder: &dyn TextAddType) -> String {
        adder.add(original, new_string)
    }
}

fn main() {
    println!("{}", "=== Open Closed: TextAdder strategies ===".bold());

    let text_adder = TextAdder;
    let hyphenate = |original: &str, new_string: &str| format!("{original}-{new_string}");

    show(&text_adder, "append", &TextAppend);
    show(&text_adder, "prepend", &TextPrepend);
    show(&text_adder, "hyphenate", &hyphenate);
}

fn show(text_adder: &TextAdder, name: &str, strategy: &dyn TextAddType) {
    let combined = text_adder.add_to_text("foo", "bar", strategy);
    println!("{}: {}", format!("{name:>10}").yellow(), combined);
}

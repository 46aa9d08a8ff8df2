//! Single Responsibility Principle
//!
//! A type should have one reason to change. Instead of giving every country
//! its own `calculate_tax`, one `TaxCalculator` owns the tax policy for all of
//! them; a policy change touches the calculator and nothing else.
//!
//! Run with: cargo run --bin solid_01_single_responsibility

use colored::Colorize;

// =============================================================================
// Milestone 1: Country records hold data only
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitedStates {
    avg_citizen_income: u16,
}

impl UnitedStates {
    pub fn new(avg_income: u16) -> Self {
        Self {
            avg_citizen_income: avg_income,
        }
    }

    pub fn avg_citizen_income(&self) -> u16 {
        self.avg_citizen_income
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitedKingdom {
    avg_citizen_income: u16,
}

impl UnitedKingdom {
    pub fn new(avg_income: u16) -> Self {
        Self {
            avg_citizen_income: avg_income,
        }
    }

    pub fn avg_citizen_income(&self) -> u16 {
        self.avg_citizen_income
    }
}

// =============================================================================
// Milestone 2: One calculator, one impl per country type
// =============================================================================

/// Tax policy for a country type `C`. The impl is picked by the argument type.
pub trait CalculateTax<C> {
    fn calculate_tax(&self, country: C) -> u16;
}

pub struct TaxCalculator;

impl TaxCalculator {
    pub const US_DIVISOR: u16 = 8;
    pub const UK_DIVISOR: u16 = 10;
}

impl CalculateTax<UnitedStates> for TaxCalculator {
    fn calculate_tax(&self, country: UnitedStates) -> u16 {
        country.avg_citizen_income() / Self::US_DIVISOR
    }
}

impl CalculateTax<UnitedKingdom> for TaxCalculator {
    fn calculate_tax(&self, country: UnitedKingdom) -> u16 {
        country.avg_citizen_income() / Self::UK_DIVISOR
    }
}

fn main() {
    println!("{}", "=== Single Responsibility: TaxCalculator ===".bold());

    let calculator = TaxCalculator;
    let us = UnitedStates::new(800);
    let uk = UnitedKingdom::new(800);

    println!(
        "United States (income {}): tax {}",
        us.avg_citizen_income(),
        calculator.calculate_tax(us).to_string().green()
    );
    println!(
        "United Kingdom (income {}): tax {}",
        uk.avg_citizen_income(),
        calculator.calculate_tax(uk).to_string().green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_us_tax_divides_by_eight() {
        assert_eq!(TaxCalculator.calculate_tax(UnitedStates::new(800)), 100);
    }

    #[test]
    fn test_uk_tax_divides_by_ten() {
        assert_eq!(TaxCalculator.calculate_tax(UnitedKingdom::new(800)), 80);
    }

    #[test]
    fn test_tax_truncates() {
        assert_eq!(TaxCalculator.calculate_tax(UnitedStates::new(805)), 100);
        assert_eq!(TaxCalculator.calculate_tax(UnitedKingdom::new(809)), 80);
        assert_eq!(TaxCalculator.calculate_tax(UnitedStates::new(7)), 0);
    }

    #[test]
    fn test_record_untouched_by_calculator() {
        let us = UnitedStates::new(1234);
        let _ = TaxCalculator.calculate_tax(us);
        assert_eq!(us.avg_citizen_income(), 1234);
    }

    proptest! {
        #[test]
        fn test_tax_is_integer_division(income: u16) {
            prop_assert_eq!(
                TaxCalculator.calculate_tax(UnitedStates::new(income)),
                income / TaxCalculator::US_DIVISOR
            );
            prop_assert_eq!(
                TaxCalculator.calculate_tax(UnitedKingdom::new(income)),
                income / TaxCalculator::UK_DIVISOR
            );
        }

        #[test]
        fn test_tax_is_repeatable(income: u16) {
            let uk = UnitedKingdom::new(income);
            prop_assert_eq!(
                TaxCalculator.calculate_tax(uk),
                TaxCalculator.calculate_tax(uk)
            );
        }
    }
}

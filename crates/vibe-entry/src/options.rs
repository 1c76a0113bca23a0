//! Onboarding Option Tables
//!
//! Closed enumerations backing the sign-up preference selects.

use vibe_forms::SelectOption;

pub fn countries() -> Vec<SelectOption> {
    vec![
        SelectOption::new("US", "United States"),
        SelectOption::new("GB", "United Kingdom"),
        SelectOption::new("CA", "Canada"),
        SelectOption::new("AU", "Australia"),
        SelectOption::new("DE", "Germany"),
        SelectOption::new("FR", "France"),
        SelectOption::new("JP", "Japan"),
        SelectOption::new("SG", "Singapore"),
        SelectOption::new("IN", "India"),
        SelectOption::new("BR", "Brazil"),
        SelectOption::new("ZA", "South Africa"),
        SelectOption::new("CH", "Switzerland"),
    ]
}

pub fn investment_goals() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Growth", "Growth"),
        SelectOption::new("Income", "Income"),
        SelectOption::new("Balanced", "Balanced"),
        SelectOption::new("Preservation", "Capital Preservation"),
    ]
}

pub fn risk_tolerance_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Low", "Low"),
        SelectOption::new("Medium", "Medium"),
        SelectOption::new("High", "High"),
    ]
}

pub fn preferred_industries() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Technology", "Technology"),
        SelectOption::new("Healthcare", "Healthcare"),
        SelectOption::new("Financials", "Financial Services"),
        SelectOption::new("Energy", "Energy"),
        SelectOption::new("Consumer", "Consumer Goods"),
        SelectOption::new("RealEstate", "Real Estate"),
    ]
}

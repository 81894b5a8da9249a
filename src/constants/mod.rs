// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions and the fixed fueling heuristics used by the planner

//! Constants module
//!
//! Constants are grouped by domain: [`units`] holds pure unit conversions and
//! [`fueling`] holds the heuristic coefficients of the plan formulas.

/// Unit conversion constants
pub mod units;

/// Fixed coefficients for expenditure and macronutrient heuristics
pub mod fueling;

/// Service identification used in structured logs
pub mod service_names {
    /// Crate name used as the tracing target and service name
    pub const PIERRE_FUEL_PLANNER: &str = "pierre_fuel_planner";
}

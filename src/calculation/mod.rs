//! Charge calculation and checkout orchestration.
//!
//! This module turns a classified rental period into money: counting
//! billable days per the tool type's billing flags, applying the configured
//! decimal rounding to the discount, and assembling the final agreement.

mod charges;
mod checkout;

pub use charges::{ChargeBreakdown, calculate_charges, charge_days};
pub use checkout::RentalEngine;

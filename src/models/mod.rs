//! Domain models for the Rental Agreement Engine.

mod agreement;
mod rental_period;
mod tool;

pub use agreement::RentalAgreement;
pub use rental_period::RentalPeriod;
pub use tool::{Tool, ToolType};

//! Rental Agreement Engine for a tool rental point of sale.
//!
//! This crate computes rental agreements: given a tool code, checkout date,
//! rental duration, and discount percentage, it produces the due date, the
//! count of billable days, and the charge breakdown, applying tool-type
//! billing rules and a configurable holiday calendar.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;

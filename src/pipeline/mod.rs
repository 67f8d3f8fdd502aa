//! Filter-and-aggregate pipeline for the booking dashboard.
//!
//! This module turns the raw booking table plus a hotel selection into the
//! scalar KPIs and chart-ready tables the dashboard displays, and exports
//! the results as JSON for the rendering layer.

pub mod aggregate;
pub mod export;
pub mod types;
pub mod utility;

//! Output formatting for calculation results.
//!
//! This module handles formatting and outputting results:
//! - [`terminal`] - Terminal output with colors
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;

pub use csv::{format_field, print_csv, render_csv};
pub use json::{print_json, render_json, CalculationReport, NetworkReport, SubnetReport};
pub use terminal::{
    banner, center, network_info_rows, print_calculation, print_error, render_network_info,
    render_subnet_table,
};

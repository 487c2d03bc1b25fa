//! CSV output formatting for calculation results.

use super::terminal::network_info_rows;
use crate::models::Subnet;
use crate::processing::Calculation;
use std::error::Error;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn subnet_row(i: usize, subnet: &Subnet) -> String {
    format!(
        "{cnt},{subnet},{first},{last},{broadcast},{hosts}",
        cnt = format_field(i + 1, 6),
        subnet = format_field(subnet, 18),
        first = format_field(subnet.first_usable(), 17),
        last = format_field(subnet.last_usable(), 17),
        broadcast = format_field(subnet.broadcast(), 17),
        hosts = format_field(subnet.usable_hosts(), 10),
    )
}

/// Render the network fields and subnets as CSV.
pub fn render_csv(calc: &Calculation) -> String {
    let mut out = String::from("\"field\",\"value\"\n");
    for (label, value) in network_info_rows(&calc.view) {
        out.push_str(&format!("{},{}\n", format_field(label, 0), format_field(value, 0)));
    }

    if let Some(subnets) = &calc.subnets {
        out.push('\n');
        out.push_str(
            r#" "cnt",     "subnet_cidr",     "first_usable",      "last_usable",        "broadcast", "usable""#,
        );
        out.push('\n');
        for (i, subnet) in subnets.clone().enumerate() {
            out.push_str(&subnet_row(i, &subnet));
            out.push('\n');
        }
    }
    out
}

/// Print the calculation as CSV to stdout.
pub fn print_csv(calc: &Calculation) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_csv() for {}", calc.network());
    print!("{}", render_csv(calc));
    Ok(())
}

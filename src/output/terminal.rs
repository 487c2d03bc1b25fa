//! Terminal output with colors.
//!
//! Renders the network information block and the subnetting table.

use crate::config::DisplayConfig;
use crate::models::{NetworkView, Subnet};
use colored::Colorize;
use std::error::Error;

/// Center `text` in `width` columns padded with `fill`, extra padding goes right.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    let right = pad - left;
    format!(
        "{}{text}{}",
        fill.to_string().repeat(left),
        fill.to_string().repeat(right)
    )
}

/// Title framed with `=`, e.g. `==== NETWORK INFORMATION ====`.
pub fn banner(title: &str, width: usize) -> String {
    center(&format!(" {title} "), width, '=')
}

/// Label/value pairs shown in the network information block.
pub fn network_info_rows(view: &NetworkView) -> Vec<(&'static str, String)> {
    vec![
        ("Network Address", view.network_address().to_string()),
        ("Network Address (bin)", view.network_address_bin()),
        ("Broadcast Address", view.broadcast_address().to_string()),
        ("First usable Address", view.first_usable().to_string()),
        ("Last usable Address", view.last_usable().to_string()),
        ("Usable IP Range", view.host_range().to_string()),
        ("Cidr Notation", view.cidr_notation()),
        ("Netmask", view.netmask().to_string()),
        ("Netmask (bin)", view.netmask_bin()),
        ("Number of Hosts", view.total_hosts().to_string()),
        ("Number of Usable Hosts", view.usable_hosts().to_string()),
    ]
}

pub fn render_network_info(view: &NetworkView, display: &DisplayConfig) -> String {
    let mut out = format!(
        "\n{}\n\n",
        banner("NETWORK INFORMATION", display.banner_width)
    );
    for (label, value) in network_info_rows(view) {
        out.push_str(&format!(
            "{label}{value}\n",
            label = format!("{label:<width$}", width = display.label_width)
                .color(display.label_color),
            value = value.color(display.value_color),
        ));
    }
    out
}

fn table_row(cells: [&str; 3], fill: char, display: &DisplayConfig) -> String {
    let [w0, w1, w2] = display.column_widths;
    format!(
        "{}|{}|{}",
        center(cells[0], w0, fill),
        center(cells[1], w1, fill),
        center(cells[2], w2, fill)
    )
    .color(display.table_color)
    .to_string()
}

pub fn render_subnet_table<I>(subnets: I, display: &DisplayConfig) -> String
where
    I: IntoIterator<Item = Subnet>,
{
    let mut out = format!(
        "\n{}\n",
        banner("SUBNETTING TABLE", display.table_width())
    );
    out.push_str(&table_row(
        ["Subnet Address", "Usable Address Range", "Broadcast Address"],
        ' ',
        display,
    ));
    out.push('\n');
    out.push_str(&table_row(["", "", ""], '_', display));
    out.push('\n');

    for subnet in subnets {
        let view = subnet.view();
        let network = view.network_address().to_string();
        let range = view.host_range().to_string();
        let broadcast = view.broadcast_address().to_string();
        out.push_str(&table_row(
            [network.as_str(), range.as_str(), broadcast.as_str()],
            ' ',
            display,
        ));
        out.push('\n');
    }
    out
}

/// Print the network block and, when present, the subnetting table.
pub fn print_calculation(
    calc: &crate::processing::Calculation,
    display: &DisplayConfig,
) -> Result<(), Box<dyn Error>> {
    print!("{}", render_network_info(&calc.view, display));
    if let Some(subnets) = &calc.subnets {
        log::info!("Printing {} subnets", subnets.len());
        print!("{}", render_subnet_table(subnets.clone(), display));
    }
    Ok(())
}

pub fn print_error(err: &dyn Error, display: &DisplayConfig) {
    eprintln!(
        "\n{}",
        format!("Network configuration error: {err}").color(display.error_color)
    );
}

//! Shopping Cart Business Logic Helpers

use super::models::CartLine;

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Galaxy S23, 1x iPhone 15"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.item.name))
        .collect::<Vec<_>>()
        .join(", ")
}

//! Category display formatting
//!
//! Categories are listed as one table per transaction type.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Transaction, TransactionType};

#[derive(Tabled)]
struct CategoryRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Color")]
    color: &'a str,
    #[tabled(rename = "Icon")]
    icon: &'a str,
    #[tabled(rename = "Used")]
    used: usize,
}

/// Format categories grouped by type, with how many transactions use each
pub fn format_category_list(categories: &[Category], transactions: &[Transaction]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();

    for kind in TransactionType::all() {
        let rows: Vec<CategoryRow> = categories
            .iter()
            .filter(|c| c.kind == *kind)
            .map(|c| CategoryRow {
                id: c.id.as_str(),
                name: &c.name,
                color: &c.color,
                icon: &c.icon,
                used: transactions.iter().filter(|t| t.category == c.id).count(),
            })
            .collect();

        if rows.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{} categories\n", kind));
        output.push_str(&Table::new(rows).with(Style::psql()).to_string());
        output.push('\n');
    }

    output
}

/// Format category details for display
pub fn format_category_details(category: &Category, usage: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:    {}\n", category.id));
    output.push_str(&format!("  Type:  {}\n", category.kind));
    output.push_str(&format!("  Color: {}\n", category.color));
    output.push_str(&format!("  Icon:  {}\n", category.icon));
    output.push_str(&format!("  Used by {} transaction(s)\n", usage));

    output
}

//! Column-aligned text table for customer lists.
//!
//! ```text
//! ID | Name  | Phone    | Email | Notes
//! ---+-------+----------+-------+------
//! 1  | Alice | 555-1234 |       |
//! ```
//!
//! Column widths are measured in terminal cells, so they are computed up
//! front; the lines themselves are produced lazily.

use crate::model::Customer;
use unicode_width::UnicodeWidthStr;

pub const CELL_SEPARATOR: &str = " | ";
pub const RULE_SEPARATOR: &str = "-+-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Phone,
    Email,
    Notes,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Name,
        Column::Phone,
        Column::Email,
        Column::Notes,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Phone => "Phone",
            Column::Email => "Email",
            Column::Notes => "Notes",
        }
    }

    pub fn cell(self, customer: &Customer) -> String {
        let raw = match self {
            Column::Id => return customer.id.to_string(),
            Column::Name => &customer.name,
            Column::Phone => &customer.phone,
            Column::Email => &customer.email,
            Column::Notes => &customer.notes,
        };
        // A table row is a single line.
        raw.chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect()
    }
}

pub struct Table<'a> {
    customers: &'a [Customer],
    widths: [usize; 5],
}

impl<'a> Table<'a> {
    pub fn new(customers: &'a [Customer]) -> Self {
        let mut widths = Column::ALL.map(|col| col.header().width());
        for customer in customers {
            for (width, col) in widths.iter_mut().zip(Column::ALL) {
                *width = (*width).max(col.cell(customer).width());
            }
        }
        Self { customers, widths }
    }

    pub fn widths(&self) -> &[usize; 5] {
        &self.widths
    }

    /// Header, dash rule, then one line per customer.
    pub fn into_lines(self) -> impl Iterator<Item = String> + 'a {
        let Table { customers, widths } = self;

        let header = std::iter::once_with(move || {
            format_row(&widths, Column::ALL.iter().map(|col| col.header().to_string()))
        });
        let rule = std::iter::once_with(move || {
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join(RULE_SEPARATOR)
        });
        let rows = customers.iter().map(move |customer| {
            format_row(&widths, Column::ALL.iter().map(|col| col.cell(customer)))
        });

        header.chain(rule).chain(rows)
    }
}

/// Lazily renders `customers` as table lines.
pub fn render_table(customers: &[Customer]) -> impl Iterator<Item = String> + '_ {
    Table::new(customers).into_lines()
}

fn format_row(widths: &[usize], cells: impl Iterator<Item = String>) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

fn pad_to_width(mut cell: String, width: usize) -> String {
    let padding = width.saturating_sub(cell.width());
    cell.push_str(&" ".repeat(padding));
    cell
}

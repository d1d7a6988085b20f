//! HTML rendering of a [`RenderedTable`].
//!
//! Team names come from an external document, so everything interpolated
//! into markup goes through [`escape`].

use std::fmt::Write;

use crate::model::structures::display_row::{DisplayRow, RenderedTable};

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c)
        }
    }

    out
}

fn row(row: &DisplayRow) -> String {
    let team = if row.flag.is_empty() {
        escape(&row.name)
    } else {
        format!("{} {}", escape(&row.flag), escape(&row.name))
    };

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
        row.rank,
        team,
        escape(&row.rating)
    )
}

/// The last-update line followed by the ranking table.
pub fn render_fragment(table: &RenderedTable) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "<p class=\"last-update\">Last update: {}</p>",
        escape(&table.last_update)
    );
    out.push_str("<table class=\"ranking\">\n");
    out.push_str("<thead><tr><th>#</th><th>Team</th><th>ELO</th></tr></thead>\n");
    out.push_str("<tbody>\n");
    for r in &table.rows {
        out.push_str(&row(r));
        out.push('\n');
    }
    out.push_str("</tbody>\n</table>\n");

    out
}

/// A standalone document wrapping [`render_fragment`].
pub fn render_page(table: &RenderedTable, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"UTF-8\">\n<title>{}</title>\n</head><body>\n<h1>{}</h1>\n{}</body></html>\n",
        escape(title),
        escape(title),
        render_fragment(table)
    )
}

//! Text and HTML renderings of the view states.

use std::fmt::Write;

use crate::label::ComposedLabel;
use crate::state::CatalogView;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Two-column label markup: text on the left, QR and logo on the right.
/// The size class sits on the container.
pub fn label_html(label: &ComposedLabel) -> String {
    let mut html = String::new();
    let _ = writeln!(html, r#"<div id="label-preview" class="{}">"#, escape(&label.size_class));
    html.push_str("  <table class=\"label-layout\"><tr>\n");
    html.push_str("    <td class=\"label-text\">\n");
    for (i, line) in label.text.iter().enumerate() {
        let tag = if i == 0 { "h3" } else { "p" };
        let _ = writeln!(html, "      <{tag}>{}</{tag}>", escape(line));
    }
    html.push_str("    </td>\n");
    html.push_str("    <td class=\"label-qr\">\n");
    let _ = writeln!(
        html,
        r#"      <img class="qr" src="{}" alt="{}">"#,
        escape(&label.qr_url),
        escape(&label.record.inventory_number)
    );
    let _ = writeln!(html, r#"      <img class="logo" src="{}" alt="">"#, escape(&label.logo_url));
    html.push_str("    </td>\n");
    html.push_str("  </tr></table>\n");
    html.push_str("</div>\n");
    html
}

/// Visible rows as an aligned text table, numbered by row position.
///
/// Every attribute the search matches on has a column, so a row shown by
/// a query always shows why.
pub fn rows_table(view: &CatalogView) -> String {
    let rows: Vec<(usize, &str, &str, &str, String)> = view
        .rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.visible)
        .map(|(i, r)| {
            let record = &r.record;
            let details: Vec<&str> = [&record.model, &record.equipment_type, &record.serial_number]
                .into_iter()
                .filter_map(|f| f.as_deref().filter(|v| !v.is_empty()))
                .collect();
            (
                i,
                record.inventory_number.as_str(),
                record.product_name.as_str(),
                record.brand.as_deref().unwrap_or("-"),
                if details.is_empty() { "-".to_string() } else { details.join(", ") },
            )
        })
        .collect();
    if rows.is_empty() {
        return "(no products)\n".to_string();
    }

    let key_w = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(0).max(9);
    let name_w = rows.iter().map(|r| r.2.chars().count()).max().unwrap_or(0).max(7);
    let brand_w = rows.iter().map(|r| r.3.chars().count()).max().unwrap_or(0).max(5);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<key_w$}  {:<name_w$}  {:<brand_w$}  DETAILS",
        "#", "INVENTORY", "PRODUCT", "BRAND"
    );
    for (i, key, name, brand, details) in rows {
        let _ = writeln!(out, "{:>3}  {:<key_w$}  {:<name_w$}  {:<brand_w$}  {}", i, key, name, brand, details);
    }
    out
}

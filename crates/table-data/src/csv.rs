//! CSV serialization of table content

use serde_json::Value;

use crate::table::DataTable;

/// Serialize a table as CSV text.
///
/// Layout: a `Name,<col>,...` header, then one line per row in table order,
/// `\n` line endings, trailing newline. Output is deterministic so it can be
/// byte-compared against the on-disk source file.
pub fn to_csv(table: &DataTable) -> String {
    let mut out = String::new();

    push_record(
        &mut out,
        std::iter::once("Name").chain(table.columns().iter().map(String::as_str)),
    );

    for row in table.rows() {
        let cells: Vec<String> = row.values.iter().map(render_cell).collect();
        push_record(
            &mut out,
            std::iter::once(row.name.as_str()).chain(cells.iter().map(String::as_str)),
        );
    }

    out
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        push_field(out, field);
    }
    out.push('\n');
}

/// RFC 4180 quoting: quote fields containing commas, quotes, or newlines;
/// double any embedded quotes.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Render a cell value as CSV text.
///
/// Strings are rendered raw (quoting is handled at the field level);
/// structured values fall back to compact JSON.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Array(items) => render_rows(&items, options),
        // one line per field
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            table::render(&["field", "value"], &rows, options)
        }
        scalar => table::render(&["value"], &[vec![value_to_cell(&scalar)]], options),
    };
    Ok(rendered)
}

/// One row per array item, with the union of the items' keys as columns.
fn render_rows(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render(&["value"], &rows, options);
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        other @ Value::Object(_) => {
            serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Hit {
        keyword: &'static str,
        description: &'static str,
        file: Option<&'static str>,
    }

    const DATE: Hit = Hit {
        keyword: "DATE",
        description: "Sets the date.",
        file: Some(r"IMEX\Content\date.htm"),
    };

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&DATE, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["keyword"], "DATE");
        assert_eq!(parsed["file"], r"IMEX\Content\date.htm");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&[DATE], OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.starts_with('['));
    }

    #[test]
    fn object_table_has_one_line_per_field() {
        let out = render(&DATE, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("field"));
        assert!(lines.iter().any(|line| line.starts_with("keyword") && line.contains("DATE")));
    }

    #[test]
    fn array_table_has_one_row_per_item() {
        let rows = [
            DATE,
            Hit {
                keyword: "WELL",
                description: "Defines a well.",
                file: None,
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("keyword"));
        assert!(lines[3].contains("WELL"));
        assert!(lines[3].contains("  -  "));
    }

    #[test]
    fn empty_array_table() {
        let rows: [Hit; 0] = [];
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }
}

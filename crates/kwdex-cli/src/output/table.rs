//! Plain aligned tables for `--format table`.

/// Column separator.
const GAP: &str = "  ";

/// Columns are never squeezed below this width.
const MIN_COLUMN: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`, left-aligning text and right-aligning
/// numbers. With `max_width` set, the widest columns are narrowed first and
/// their cells truncated with an ellipsis.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&truncate(header, *width), *width, false)
    }));
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
            let cell = row.get(index).map_or("-", String::as_str);
            let text = truncate(cell, *width);
            let padded = pad(&text, *width, is_numeric(&text));
            if options.color {
                colorize(&text, padded)
            } else {
                padded
            }
        })));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(GAP).trim_end().to_string()
}

/// Narrow the widest column one character at a time until the table fits
/// or every column is at its minimum.
fn shrink_to(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// Color known status words; `padded` keeps its padding outside the escape.
fn colorize(text: &str, padded: String) -> String {
    let code = match text {
        "array" | "single" | "shared-description" => "32",
        "no-match" => "33",
        "unreadable" | "missing" => "31",
        _ => return padded,
    };
    let trailing = &padded[text.len()..];
    format!("\u{1b}[{code}m{text}\u{1b}[0m{trailing}")
}

//! Plain-text table renderer for list output.

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

/// Width and color settings for [`render_entity_table`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned plain-text table. Numeric cells are right-aligned and
/// over-wide columns are shrunk (widest first) to fit `max_width`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = column_widths(headers, rows);
    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(title, &width)| pad(&clip(title, width), width, Align::Left))
        .collect::<Vec<_>>()
        .join(GAP);

    let divider = "-".repeat(visible_len(&header));
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header);
    lines.push(divider);

    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let text = clip(row.get(index).map_or("-", String::as_str), width);
                let align = if is_numeric(&text) {
                    Align::Right
                } else {
                    Align::Left
                };
                let text = if options.color { paint(&text) } else { text };
                pad(&text, width, align)
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(GAP));
    }

    lines.join("\n")
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
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
        .collect()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    let floor = |index: usize| headers[index].chars().count().max(MIN_COLUMN);

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|&(index, &width)| width > floor(index))
            .max_by_key(|&(index, &width)| (width, std::cmp::Reverse(index)))
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value
        .chars()
        .take(width.saturating_sub(1))
        .chain(std::iter::once('…'))
        .collect()
}

fn pad(value: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_len(value)));
    match align {
        Align::Left => format!("{value}{fill}"),
        Align::Right => format!("{fill}{value}"),
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// Color audit outcome words: green for passes, red for failures and
/// zero-tolerance markers.
fn paint(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "pass" | "passed" | "true" | "authenticated" => "32",
        "none" | "skipped" | "operational" => "33",
        "fail" | "failed" | "critical failure" | "zero_tolerance" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

/// Display width ignoring ANSI color sequences.
fn visible_len(value: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for ch in value.chars() {
        match (in_escape, ch) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => len += 1,
        }
    }
    len
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_words_are_colored() {
        assert_eq!(paint("pass"), "\u{1b}[32mpass\u{1b}[0m");
        assert_eq!(paint("zero_tolerance"), "\u{1b}[31mzero_tolerance\u{1b}[0m");
        assert_eq!(paint("Dining Area"), "Dining Area");
    }

    #[test]
    fn colored_cells_pad_by_visible_width() {
        let rows = vec![vec!["fail".to_string()], vec!["unknown".to_string()]];
        let table = render_entity_table(
            &["status"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let widths: Vec<usize> = table.lines().map(visible_len).collect();
        assert_eq!(widths, vec![7, 7, 7, 7]);
    }

    #[test]
    fn numbers_align_right() {
        let rows = vec![vec!["5".to_string()], vec!["300".to_string()]];
        let table = render_entity_table(
            &["points"],
            &rows,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "     5");
        assert_eq!(lines[3], "   300");
    }

    #[test]
    fn clip_marks_truncation() {
        assert_eq!(clip("Floors & Corners", 8), "Floors …");
        assert_eq!(clip("Floors", 8), "Floors");
    }
}

//! Plain-text rendering of analysis results
//!
//! Tables are printed with a left-aligned label column followed by
//! right-aligned numeric columns, separated by a dashed rule.

/// Format a number for display
///
/// Large magnitudes get two decimals, tiny non-zero magnitudes use
/// scientific notation, and everything else gets four decimals.
pub fn format_number(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1000.0 {
        format!("{value:.2}")
    } else if abs != 0.0 && abs < 0.01 {
        format!("{value:.2e}")
    } else {
        format!("{value:.4}")
    }
}

/// Format a possibly undefined value, printing `N/A` when undefined
pub fn format_optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "N/A".to_owned(), |v| format!("{v:.precision$}"))
}

/// A text table with one label column
#[derive(Debug, Clone)]
pub struct TextTable {
    label_header: String,
    headers: Vec<String>,
    rows: Vec<(String, Vec<String>)>,
}

impl TextTable {
    pub fn new<S, I, H>(label_header: S, headers: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = H>,
        H: Into<String>,
    {
        Self {
            label_header: label_header.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    pub fn push_row<S>(&mut self, label: S, cells: Vec<String>)
    where
        S: Into<String>,
    {
        debug_assert_eq!(cells.len(), self.headers.len(), "row width mismatch");
        self.rows.push((label.into(), cells));
    }

    pub fn render(&self) -> String {
        let label_width = self
            .rows
            .iter()
            .map(|(label, _)| label.len())
            .chain([self.label_header.len()])
            .max()
            .unwrap_or(0);
        let widths = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|(_, cells)| cells[i].len())
                    .chain([header.len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();
        let total_width = label_width + widths.iter().map(|w| w + 2).sum::<usize>();

        let mut lines = vec![format_line(
            &self.label_header,
            label_width,
            &self.headers,
            &widths,
        )];
        lines.push(format!("  {}", "-".repeat(total_width)));
        lines.extend(
            self.rows
                .iter()
                .map(|(label, cells)| format_line(label, label_width, cells, &widths)),
        );
        lines.into_iter().map(|line| line + "\n").collect()
    }
}

fn format_line(label: &str, label_width: usize, cells: &[String], widths: &[usize]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("  {cell:>width$}"))
        .collect::<String>();
    format!("  {label:<label_width$}{cells}")
}

/// Render a horizontal bar proportional to `count / max_count`
pub fn bar(count: usize, max_count: usize, max_width: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    let len = (count * max_width).div_ceil(max_count);
    "█".repeat(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(245_000.0), "245000.00");
        assert_eq!(format_number(5.843_333), "5.8433");
        assert_eq!(format_number(0.001_25), "1.25e-3");
        assert_eq!(format_number(0.0), "0.0000");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(0.912_34), 3), "0.912");
        assert_eq!(format_optional(None, 3), "N/A");
    }

    #[test]
    fn test_render_aligns_columns() {
        let mut table = TextTable::new("Column", ["Mean", "Max"]);
        table.push_row("a", vec!["1.0".to_owned(), "10.0".to_owned()]);
        table.push_row("longer", vec!["100.5".to_owned(), "2.0".to_owned()]);
        let rendered = table.render();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  Column   Mean   Max");
        assert_eq!(lines[2], "  a         1.0  10.0");
        assert_eq!(lines[3], "  longer  100.5   2.0");
    }

    #[test]
    fn test_render_rule_and_empty_table() {
        let table = TextTable::new("Id", ["Rows"]);
        assert_eq!(table.render(), "  Id  Rows\n  --------\n");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 10, 20), "");
        assert_eq!(bar(10, 10, 20).chars().count(), 20);
        assert_eq!(bar(1, 10, 20).chars().count(), 2);
        assert_eq!(bar(3, 0, 20), "");
    }
}

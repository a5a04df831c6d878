//! Box-drawn table formatting for CLI output.

/// Horizontal alignment of a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A grid table with a header row, drawn with double rules around the header
/// and single rules between body rows.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<'a>(columns: impl IntoIterator<Item = (&'a str, Align)>) -> Self {
        let (headers, aligns) = columns
            .into_iter()
            .map(|(header, align)| (header.to_string(), align))
            .unzip();
        Self {
            headers,
            aligns,
            rows: Vec::new(),
        }
    }

    /// Add a body row. Missing cells render empty, extra cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        (0..self.headers.len())
            .map(|col| {
                std::iter::once(&self.headers[col])
                    .chain(self.rows.iter().map(|row| &row[col]))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = vec![rule(&widths, '╒', '═', '╤', '╕')];
        // Headers are always left-aligned.
        lines.push(row(&self.headers, &widths, &vec![Align::Left; widths.len()]));

        if self.rows.is_empty() {
            lines.push(rule(&widths, '╘', '═', '╧', '╛'));
            return lines.join("\n");
        }

        lines.push(rule(&widths, '╞', '═', '╪', '╡'));
        for (i, cells) in self.rows.iter().enumerate() {
            if i > 0 {
                lines.push(rule(&widths, '├', '─', '┼', '┤'));
            }
            lines.push(row(cells, &widths, &self.aligns));
        }
        lines.push(rule(&widths, '╘', '═', '╧', '╛'));
        lines.join("\n")
    }
}

fn rule(widths: &[usize], left: char, fill: char, cross: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{left}{}{right}", segments.join(&cross.to_string()))
}

fn row(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, &width), align)| match align {
            Align::Left => format!(" {cell:<width$} "),
            Align::Right => format!(" {cell:>width$} "),
        })
        .collect();
    format!("│{}│", padded.join("│"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_grid_with_aligned_columns() {
        let mut table = Table::new([("Product", Align::Left), ("Value", Align::Right)]);
        table.push_row(vec!["Runner".into(), "R 150.0".into()]);
        table.push_row(vec!["Walker".into(), "R 40.0".into()]);

        let expected = "\
╒═════════╤═════════╕
│ Product │ Value   │
╞═════════╪═════════╡
│ Runner  │ R 150.0 │
├─────────┼─────────┤
│ Walker  │  R 40.0 │
╘═════════╧═════════╛";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn empty_table_shows_only_headers() {
        let table = Table::new([("Product", Align::Left), ("Value", Align::Right)]);
        assert_eq!(table.render().lines().count(), 3);
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let mut table = Table::new([("Country", Align::Left)]);
        table.push_row(vec!["Côte d Ivoire".into()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new([("A", Align::Left), ("B", Align::Left)]);
        table.push_row(vec!["x".into()]);
        assert!(table.render().contains("│ x │   │"));
    }
}

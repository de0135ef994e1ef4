//! Table rendering for listings.

use console::measure_text_width;

/// A box-drawn table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row. Cells beyond the header count are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();

        for (i, cell) in row.iter().enumerate() {
            self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let inner: Vec<String> = self
            .column_widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect();
        format!("{}{}{}", left, inner.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");
        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(measure_text_width(cell));
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_still_renders_headers() {
        let table = Table::new(&["Name", "Tool"]);
        assert!(table.is_empty());
        let output = table.render();
        assert!(output.contains("Name"));
        assert!(output.contains("Tool"));
    }

    #[test]
    fn rows_widen_columns() {
        let mut table = Table::new(&["Name"]);
        table.add_row(&["LIBOPENCORE_AMRNB"]);
        let output = table.render();
        let first = output.lines().next().unwrap();
        assert_eq!(measure_text_width(first), "LIBOPENCORE_AMRNB".len() + 4);
    }

    #[test]
    fn missing_cells_are_blank() {
        let mut table = Table::new(&["A", "B", "C"]);
        table.add_row(&["only", "two"]);
        assert!(table.render().contains("only"));
    }

    #[test]
    fn line_count_matches_rows() {
        let mut table = Table::new(&["Name", "Category", "Usable"]);
        table.add_row(&["LIBX264", "encoder", "yes"]);
        table.add_row(&["LIBOPUS", "codec", "yes"]);
        table.add_row(&["VAAPI", "hardware-accelerator", "no"]);

        let output = table.render();
        // top, header, separator, 3 rows, bottom
        assert_eq!(output.lines().count(), 7);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn multibyte_cells_align() {
        let mut table = Table::new(&["Usable"]);
        table.add_row(&["✓"]);
        table.add_row(&["✗"]);
        let widths: Vec<usize> = table.render().lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}

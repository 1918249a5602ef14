//! Report table with dynamically discovered column pairs
//!
//! Column 0 is always the board label. Every other column comes in an
//! absolute/relative pair keyed by a heading string, appended in first-seen
//! order and never reordered.

use std::collections::HashMap;

/// Heading of the first column
pub const BOARD_HEADING: &str = "Board";

/// Heading of the relative column that follows every absolute column
pub const RELATIVE_HEADING: &str = "%";

/// Header row, data rows and the heading-to-column index
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    columns: HashMap<String, usize>,
}

impl Table {
    /// Create a table with only the board column
    pub fn new() -> Self {
        Self {
            header: vec![BOARD_HEADING.to_string()],
            rows: Vec::new(),
            columns: HashMap::new(),
        }
    }

    /// Header row
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows; rows begun before a later column was discovered are shorter than the header
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns in the header
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Begin a new row labelled `label`, padded to the current header width
    pub fn push_row(&mut self, label: impl Into<String>) {
        let mut row = vec![String::new(); self.header.len()];
        row[0] = label.into();
        self.rows.push(row);
    }

    /// Index of the absolute column for `heading`, creating the column pair on first use
    ///
    /// The relative column is always at the returned index plus one. New
    /// columns widen only the row currently being populated (the last one);
    /// earlier rows are complete and keep their length.
    ///
    /// # Panics
    ///
    /// Panics if no row has been started, or if the current row has fallen
    /// out of step with the header.
    pub fn column_index_for(&mut self, heading: &str) -> usize {
        if let Some(&index) = self.columns.get(heading) {
            return index;
        }

        let index = self.header.len();
        let row = self
            .rows
            .last_mut()
            .expect("a row must be started before columns are resolved");
        assert_eq!(
            row.len(),
            index,
            "current row must span the full header before a column is added"
        );

        self.header.push(heading.to_string());
        self.header.push(RELATIVE_HEADING.to_string());
        row.push(String::new());
        row.push(String::new());
        self.columns.insert(heading.to_string(), index);

        index
    }

    /// Fill the absolute/relative cell pair of the current row
    pub fn set_pair(&mut self, column: usize, absolute: String, relative: String) {
        if let Some(row) = self.rows.last_mut() {
            row[column] = absolute;
            row[column + 1] = relative;
        }
    }

    /// Iterate rows (header first) padded with empty cells to the header width
    pub fn padded_rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        let width = self.width();
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(move |row| {
                let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
                cells.resize(width, "");
                cells
            })
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

//! Summary and detailed table construction

use super::classify::summary_value;
use super::model::{BoardReport, DeltaRange, SketchesReport, NOT_APPLICABLE};
use super::table::Table;

/// Builds the summary and detailed tables from a set of sketches reports
///
/// Each table is owned by a single pass; rows are populated one board at a
/// time, which is what lets [`Table::column_index_for`] widen only the last row.
pub struct TableBuilder;

impl TableBuilder {
    /// One row per board, one column pair per memory type
    pub fn summary(reports: &[SketchesReport]) -> Table {
        let mut table = Table::new();
        for board in boards(reports) {
            Self::add_summary_row(&mut table, board);
        }
        table
    }

    /// One row per board, one column pair per sketch and memory type
    pub fn detailed(reports: &[SketchesReport]) -> Table {
        let mut table = Table::new();
        for board in boards(reports) {
            Self::add_detailed_row(&mut table, board);
        }
        table
    }

    fn add_summary_row(table: &mut Table, board: &BoardReport) {
        table.push_row(board.label());

        for size in &board.sizes {
            let column = table.column_index_for(&size.name);
            let (absolute, relative) = match &size.delta {
                Some(delta) => (
                    summary_value(true, &delta.absolute),
                    summary_value(false, &delta.relative),
                ),
                None => {
                    let na = DeltaRange::not_applicable();
                    (summary_value(true, &na), summary_value(false, &na))
                }
            };
            table.set_pair(column, absolute, relative);
        }
    }

    fn add_detailed_row(table: &mut Table, board: &BoardReport) {
        table.push_row(board.label());

        for sketch in &board.sketches {
            for size in &sketch.sizes {
                let heading = format!("`{}`<br>{}", sketch.name, size.name);
                let column = table.column_index_for(&heading);
                let (absolute, relative) = match &size.delta {
                    Some(delta) => (delta.absolute.to_string(), delta.relative.to_string()),
                    None => (NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string()),
                };
                table.set_pair(column, absolute, relative);
            }
        }
    }
}

fn boards(reports: &[SketchesReport]) -> impl Iterator<Item = &BoardReport> {
    reports.iter().flat_map(|report| report.boards.iter())
}

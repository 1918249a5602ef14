//! Markdown and CSV rendering of report tables
//!
//! The comment body is assembled from a summary that is always present plus
//! optional sections that are each kept only if the body stays under
//! [`MAX_COMMENT_LENGTH`].

use super::table::Table;
use crate::error::SizeDeltasError;
use serde::Serialize;

/// Beginning of every report comment; followed by the commit hash it reports on
pub const REPORT_KEY_PREFIX: &str = "**Memory usage change @ ";

/// Largest comment body the hosting platform accepts, in bytes
pub const MAX_COMMENT_LENGTH: usize = 262_144;

/// Parts of the comment body, from least to most detailed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Heading and summary table
    Summary,
    /// Collapsible Markdown rendering of the detailed table
    FullTable,
    /// Collapsible CSV rendering of the detailed table
    Csv,
}

/// A rendered comment body and the sections it contains
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    /// Comment body
    pub body: String,
    /// Sections that fit, in order
    pub sections: Vec<Section>,
}

impl RenderedReport {
    /// Whether `section` made it into the body
    pub fn includes(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

/// Heading line that fingerprints a report for `commit_hash`
pub fn report_heading(commit_hash: &str) -> String {
    format!("{}{}**\n\n", REPORT_KEY_PREFIX, commit_hash)
}

/// Render rows as a pipe-delimited Markdown table
///
/// # Examples
///
/// ```
/// use size_deltas::report::render::markdown_table;
///
/// let rows = [vec!["Board", "Flash", "RAM"], vec!["foo:bar:baz", "42", "11"]];
/// assert_eq!(markdown_table(&rows), "Board|Flash|RAM\n-|-|-\nfoo:bar:baz|42|11\n");
/// ```
pub fn markdown_table(rows: &[Vec<&str>]) -> String {
    let Some((header, data)) = rows.split_first() else {
        return String::new();
    };

    let mut markdown = header.join("|");
    markdown.push('\n');
    markdown.push_str(&vec!["-"; header.len()].join("|"));
    markdown.push('\n');
    for row in data {
        markdown.push_str(&row.join("|"));
        markdown.push('\n');
    }
    markdown
}

/// Render rows as CSV with code-span back-ticks removed
///
/// # Examples
///
/// ```
/// use size_deltas::report::render::csv_table;
///
/// let rows = [vec!["Board", "Flash", "RAM"], vec!["`foo:bar:baz`", "42", "11"]];
/// assert_eq!(csv_table(&rows).unwrap(), "Board,Flash,RAM\nfoo:bar:baz,42,11\n");
/// ```
pub fn csv_table(rows: &[Vec<&str>]) -> Result<String, SizeDeltasError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        let record: Vec<String> = row.iter().map(|cell| cell.replace('`', "")).collect();
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SizeDeltasError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|e| SizeDeltasError::Render(e.to_string()))
}

fn padded(table: &Table) -> Vec<Vec<&str>> {
    table.padded_rows().collect()
}

impl Section {
    /// Text appended to the body for this section
    fn render(self, summary: &Table, detailed: &Table) -> Result<String, SizeDeltasError> {
        Ok(match self {
            Self::Summary => format!("{}\n", markdown_table(&padded(summary))),
            Self::FullTable => format!(
                "<details>\n<summary>Click for full report table</summary>\n\n{}\n</details>\n\n",
                markdown_table(&padded(detailed))
            ),
            Self::Csv => format!(
                "<details>\n<summary>Click for full report CSV</summary>\n\n```\n{}```\n</details>",
                csv_table(&padded(detailed))?
            ),
        })
    }
}

/// Assembles the comment body within the length ceiling
pub struct ReportRenderer {
    max_length: usize,
}

impl ReportRenderer {
    /// Renderer bounded by [`MAX_COMMENT_LENGTH`]
    pub fn new() -> Self {
        Self {
            max_length: MAX_COMMENT_LENGTH,
        }
    }

    /// Renderer with a custom ceiling
    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Render the comment body for `commit_hash`
    ///
    /// The heading and summary are always emitted. The full table and then the
    /// CSV are appended while the body stays strictly under the ceiling; the
    /// first section that does not fit ends the body, so the CSV never appears
    /// without the full table. A summary that alone exceeds the ceiling is
    /// emitted unchanged.
    pub fn render(
        &self,
        summary: &Table,
        detailed: &Table,
        commit_hash: &str,
    ) -> Result<RenderedReport, SizeDeltasError> {
        let mut body = report_heading(commit_hash);
        body.push_str(&Section::Summary.render(summary, detailed)?);
        let mut sections = vec![Section::Summary];

        if body.len() >= self.max_length {
            log::warn!(
                "Summary alone is {} bytes, over the {} byte comment limit",
                body.len(),
                self.max_length
            );
        }

        for section in [Section::FullTable, Section::Csv] {
            let candidate = format!("{}{}", body, section.render(summary, detailed)?);
            if candidate.len() >= self.max_length {
                log::info!(
                    "Omitting {:?} section onwards: {} bytes would exceed the {} byte limit",
                    section,
                    candidate.len(),
                    self.max_length
                );
                break;
            }
            body = candidate;
            sections.push(section);
        }

        log::debug!("Report:\n{}", body);
        Ok(RenderedReport { body, sections })
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tables() -> (Table, Table) {
        let mut summary = Table::new();
        summary.push_row("`arduino:avr:uno`");
        let column = summary.column_index_for("flash");
        summary.set_pair(
            column,
            ":green_heart: -994 - -994".to_string(),
            "-3.08 - -3.08".to_string(),
        );

        let mut detailed = Table::new();
        detailed.push_row("`arduino:avr:uno`");
        let column = detailed.column_index_for("`examples/Foo`<br>flash");
        detailed.set_pair(column, "-994".to_string(), "-3.08".to_string());

        (summary, detailed)
    }

    #[test]
    fn test_markdown_table_matches_pipe_format() {
        let rows = [vec!["Board", "Flash", "RAM"], vec!["foo:bar:baz", "42", "11"]];
        assert_eq!(
            markdown_table(&rows),
            "Board|Flash|RAM\n-|-|-\nfoo:bar:baz|42|11\n"
        );
    }

    #[test]
    fn test_csv_table_matches_comma_format() {
        let rows = [vec!["Board", "Flash", "RAM"], vec!["foo:bar:baz", "42", "11"]];
        assert_eq!(csv_table(&rows).unwrap(), "Board,Flash,RAM\nfoo:bar:baz,42,11\n");
    }

    #[test]
    fn test_csv_table_quotes_cells_with_commas() {
        let rows = [vec!["Board", "`a, b`<br>flash"]];
        assert_eq!(csv_table(&rows).unwrap(), "Board,\"a, b<br>flash\"\n");
    }

    #[test]
    fn test_render_includes_all_sections_when_small() {
        let (summary, detailed) = sample_tables();
        let report = ReportRenderer::new()
            .render(&summary, &detailed, "d8fd302")
            .unwrap();

        assert_eq!(
            report.body,
            "**Memory usage change @ d8fd302**\n\n\
             Board|flash|%\n\
             -|-|-\n\
             `arduino:avr:uno`|:green_heart: -994 - -994|-3.08 - -3.08\n\n\
             <details>\n\
             <summary>Click for full report table</summary>\n\n\
             Board|`examples/Foo`<br>flash|%\n\
             -|-|-\n\
             `arduino:avr:uno`|-994|-3.08\n\n\
             </details>\n\n\
             <details>\n\
             <summary>Click for full report CSV</summary>\n\n\
             ```\n\
             Board,examples/Foo<br>flash,%\n\
             arduino:avr:uno,-994,-3.08\n\
             ```\n\
             </details>"
        );
        assert_eq!(
            report.sections,
            [Section::Summary, Section::FullTable, Section::Csv]
        );
    }

    #[test]
    fn test_render_falls_back_to_summary_only() {
        let (summary, detailed) = sample_tables();
        let summary_only = format!(
            "{}{}\n",
            report_heading("d8fd302"),
            markdown_table(&padded(&summary))
        );

        let report = ReportRenderer::with_max_length(summary_only.len() + 10)
            .render(&summary, &detailed, "d8fd302")
            .unwrap();

        assert_eq!(report.body, summary_only);
        assert_eq!(report.sections, [Section::Summary]);
    }

    #[test]
    fn test_render_stops_at_full_table_even_when_csv_would_fit() {
        let mut summary = Table::new();
        summary.push_row("`a`");

        let mut detailed = Table::new();
        detailed.push_row("`a`");
        let column = detailed.column_index_for("`a long sketch name`<br>flash");
        detailed.set_pair(column, "1".to_string(), "2".to_string());

        let base = format!("{}{}\n", report_heading("abc"), markdown_table(&padded(&summary)));
        let table_len = Section::FullTable.render(&summary, &detailed).unwrap().len();
        let csv_len = Section::Csv.render(&summary, &detailed).unwrap().len();
        assert!(csv_len < table_len);

        let report = ReportRenderer::with_max_length(base.len() + csv_len + 1)
            .render(&summary, &detailed, "abc")
            .unwrap();

        assert_eq!(report.sections, [Section::Summary]);
        assert_eq!(report.body, base);
        assert!(!report.body.contains("Click for full report CSV"));
    }

    #[test]
    fn test_render_never_exceeds_limit_with_large_detail() {
        let mut summary = Table::new();
        let mut detailed = Table::new();
        for board in 0..100 {
            let label = format!("`vendor:arch:board{}`", board);
            summary.push_row(label.clone());
            let column = summary.column_index_for("flash");
            summary.set_pair(column, "+1 - +1".to_string(), "+0.01 - +0.01".to_string());

            detailed.push_row(label);
            for sketch in 0..400 {
                let column = detailed.column_index_for(&format!("`examples/Sketch{}`<br>flash", sketch));
                detailed.set_pair(column, "1".to_string(), "0.01".to_string());
            }
        }

        let report = ReportRenderer::new()
            .render(&summary, &detailed, "d8fd302")
            .unwrap();
        assert!(report.body.len() <= MAX_COMMENT_LENGTH);
        assert!(report.includes(Section::Summary));
        assert!(!report.includes(Section::FullTable));
    }

    #[test]
    fn test_report_heading_is_fingerprint_prefix() {
        assert_eq!(report_heading("abc123"), "**Memory usage change @ abc123**\n\n");
        assert!(report_heading("abc123").starts_with(REPORT_KEY_PREFIX));
    }
}

//! Sketches report fixtures
//!
//! Three boards compiled at commit d8fd302: two AVR boards with size deltas
//! for `examples/Foo`, and a board whose sizes are all unavailable.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Commit the fixture reports were generated for
pub const COMMIT_HASH: &str = "d8fd302";

/// Comment body expected for the fixture reports
pub const EXPECTED_REPORT: &str = concat!(
    "**Memory usage change @ d8fd302**\n\n",
    "Board|flash|%|RAM for global variables|%\n",
    "-|-|-|-|-\n",
    "`arduino:avr:leonardo`|:green_heart: -12 - -12|-0.05 - -0.05|0 - 0|0.0 - 0.0\n",
    "`arduino:avr:uno`|:green_heart: -994 - -994|-3.08 - -3.08|:green_heart: -175 - -175|-8.54 - -8.54\n",
    "`arduino:mbed_portenta:envie_m7`|N/A|N/A|N/A|N/A\n\n",
    "<details>\n",
    "<summary>Click for full report table</summary>\n\n",
    "Board|`examples/Bar`<br>flash|%|`examples/Bar`<br>RAM for global variables|%|`examples/Foo`<br>flash|%|",
    "`examples/Foo`<br>RAM for global variables|%\n",
    "-|-|-|-|-|-|-|-|-\n",
    "`arduino:avr:leonardo`|N/A|N/A|N/A|N/A|-12|-0.05|0|0.0\n",
    "`arduino:avr:uno`|N/A|N/A|N/A|N/A|-994|-3.08|-175|-8.54\n",
    "`arduino:mbed_portenta:envie_m7`|N/A|N/A|N/A|N/A|N/A|N/A|N/A|N/A\n\n",
    "</details>\n\n",
    "<details>\n",
    "<summary>Click for full report CSV</summary>\n\n",
    "```\n",
    "Board,examples/Bar<br>flash,%,examples/Bar<br>RAM for global variables,%,examples/Foo<br>flash,%,examples/Foo",
    "<br>RAM for global variables,%\n",
    "arduino:avr:leonardo,N/A,N/A,N/A,N/A,-12,-0.05,0,0.0\n",
    "arduino:avr:uno,N/A,N/A,N/A,N/A,-994,-3.08,-175,-8.54\n",
    "arduino:mbed_portenta:envie_m7,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A\n",
    "```\n",
    "</details>"
);

fn unavailable_sketch(name: &str) -> Value {
    json!({
        "name": name,
        "compilation_success": true,
        "sizes": [
            {"name": "flash", "maximum": "N/A", "current": {"absolute": "N/A", "relative": "N/A"},
             "previous": {"absolute": "N/A", "relative": "N/A"},
             "delta": {"absolute": "N/A", "relative": "N/A"}},
            {"name": "RAM for global variables", "maximum": "N/A",
             "current": {"absolute": "N/A", "relative": "N/A"},
             "previous": {"absolute": "N/A", "relative": "N/A"},
             "delta": {"absolute": "N/A", "relative": "N/A"}}
        ]
    })
}

fn avr_board(board: &str, flash: (i64, Value), ram: (i64, Value)) -> Value {
    let (flash_absolute, flash_relative) = flash;
    let (ram_absolute, ram_relative) = ram;
    json!({
        "board": board,
        "sizes": [
            {"name": "flash", "maximum": 28672, "delta": {
                "absolute": {"minimum": flash_absolute, "maximum": flash_absolute},
                "relative": {"minimum": flash_relative, "maximum": flash_relative}}},
            {"name": "RAM for global variables", "maximum": 2560, "delta": {
                "absolute": {"minimum": ram_absolute, "maximum": ram_absolute},
                "relative": {"minimum": ram_relative, "maximum": ram_relative}}}
        ],
        "sketches": [
            unavailable_sketch("examples/Bar"),
            {
                "name": "examples/Foo",
                "compilation_success": true,
                "sizes": [
                    {"name": "flash", "maximum": 28672,
                     "delta": {"absolute": flash_absolute, "relative": flash_relative}},
                    {"name": "RAM for global variables", "maximum": 2560,
                     "delta": {"absolute": ram_absolute, "relative": ram_relative}}
                ]
            }
        ]
    })
}

fn report(board: Value) -> Value {
    json!({
        "commit_hash": COMMIT_HASH,
        "commit_url": "https://example.com/foo/bar/commit/d8fd302",
        "boards": [board]
    })
}

/// The fixture reports, keyed by file name
pub fn current_reports() -> Vec<(&'static str, Value)> {
    let leonardo = avr_board(
        "arduino:avr:leonardo",
        (-12, json!(-0.05)),
        (0, json!(0.0)),
    );
    let uno = avr_board("arduino:avr:uno", (-994, json!(-3.08)), (-175, json!(-8.54)));
    let envie_m7 = json!({
        "board": "arduino:mbed_portenta:envie_m7",
        "sizes": [
            {"name": "flash", "maximum": "N/A", "delta": {
                "absolute": {"minimum": "N/A", "maximum": "N/A"},
                "relative": {"minimum": "N/A", "maximum": "N/A"}}},
            {"name": "RAM for global variables", "maximum": "N/A", "delta": {
                "absolute": {"minimum": "N/A", "maximum": "N/A"},
                "relative": {"minimum": "N/A", "maximum": "N/A"}}}
        ],
        "sketches": [unavailable_sketch("examples/Bar"), unavailable_sketch("examples/Foo")]
    });

    vec![
        ("arduino-avr-leonardo.json", report(leonardo)),
        ("arduino-avr-uno.json", report(uno)),
        ("arduino-mbed_portenta-envie_m7.json", report(envie_m7)),
    ]
}

/// A report in the format used before size deltas were added
pub fn legacy_report() -> Value {
    json!({
        "sketch_path": "examples/Foo",
        "commit_hash": COMMIT_HASH,
        "boards": [{"fqbn": "arduino:avr:uno", "sizes": [{"name": "flash", "current": 1234}]}]
    })
}

/// Write `reports` into `folder`, creating it
pub fn write_reports(folder: &Path, reports: &[(&str, Value)]) -> anyhow::Result<()> {
    fs::create_dir_all(folder)?;
    for (name, report) in reports {
        fs::write(folder.join(name), serde_json::to_string_pretty(report)?)?;
    }
    Ok(())
}

/// Workspace with the fixture reports under `sketches-reports/`
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the reports folder) - the TempDir must be kept alive
pub fn create_workspace() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let folder = temp_dir.path().join("sketches-reports");
    write_reports(&folder, &current_reports())?;
    Ok((temp_dir, folder))
}

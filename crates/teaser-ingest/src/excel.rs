//! Tabular chunker: one chunk per non-empty spreadsheet sheet

use crate::clean::clean_text;
use crate::source::display_name;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use teaser_domain::{Chunk, ChunkKind};
use tracing::warn;

/// Sheets whose rendered table is shorter than this are noise.
const MIN_SHEET_TEXT: usize = 10;

/// Sheet-name markers that tag a sheet as financial content.
const FINANCIAL_SHEET_MARKERS: [&str; 4] = ["balance", "p&l", "profit", "financial"];

/// Chunk every sheet of a workbook. Unreadable workbooks yield nothing.
pub(crate) fn chunk_excel(path: &Path) -> Vec<Chunk> {
    match read_workbook(path) {
        Ok(chunks) => chunks,
        Err(e) => {
            warn!("error reading workbook {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn read_workbook(path: &Path) -> Result<Vec<Chunk>, calamine::Error> {
    let filename = display_name(path);
    let mut workbook = open_workbook_auto(path)?;

    let mut chunks = Vec::new();
    for sheet_name in workbook.sheet_names().to_vec() {
        let range = match workbook.worksheet_range(&sheet_name) {
            Ok(range) => range,
            Err(e) => {
                warn!("skipping sheet '{}' in {}: {}", sheet_name, filename, e);
                continue;
            }
        };
        let grid: Vec<Vec<Option<String>>> = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        if let Some(chunk) = chunk_sheet(&filename, &sheet_name, &grid) {
            chunks.push(chunk);
        }
    }
    Ok(chunks)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        other => {
            let rendered = other.to_string();
            if rendered.trim().is_empty() {
                None
            } else {
                Some(rendered)
            }
        }
    }
}

/// Build the chunk for one sheet, or `None` when the sheet is effectively
/// empty after dropping blank rows and columns.
pub(crate) fn chunk_sheet(
    filename: &str,
    sheet_name: &str,
    grid: &[Vec<Option<String>>],
) -> Option<Chunk> {
    let table = render_grid(grid);
    let text = clean_text(&table);
    if text.chars().count() < MIN_SHEET_TEXT {
        return None;
    }

    let kind = if sheet_is_financial(sheet_name) {
        ChunkKind::ExcelFinancial
    } else {
        ChunkKind::ExcelGeneric
    };
    Some(Chunk::new(
        text,
        filename,
        format!("Sheet: {}", sheet_name),
        kind,
    ))
}

fn sheet_is_financial(sheet_name: &str) -> bool {
    let lower = sheet_name.to_lowercase();
    FINANCIAL_SHEET_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Render the grid as a pipe-delimited textual table, dropping fully-empty
/// rows and columns first so sparse sheets do not balloon the context.
fn render_grid(grid: &[Vec<Option<String>>]) -> String {
    let width = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    let kept_columns: Vec<usize> = (0..width)
        .filter(|&col| {
            grid.iter()
                .any(|row| row.get(col).map_or(false, |cell| cell.is_some()))
        })
        .collect();

    let mut out = String::new();
    for row in grid {
        if row.iter().all(|cell| cell.is_none()) {
            continue;
        }
        let mut line = String::from("|");
        for &col in &kept_columns {
            let cell = row.get(col).and_then(|c| c.as_deref()).unwrap_or("");
            line.push_str(&format!(" {} |", cell));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

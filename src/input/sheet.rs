use std::path::Path;

use tracing::warn;

use crate::input::detect::{SheetFormat, detect_sheet_format};
use crate::input::{InputError, open_reader, path_display};

/// Number of leading imported criteria that default to benefit criteria.
pub const IMPORT_BENEFICIAL_DEFAULT: usize = 3;

/// Decision table as read from a spreadsheet export.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedSheet {
    pub format: SheetFormat,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    /// Cells that were blank or unparseable and were read as 0.
    pub defaulted_cells: usize,
}

impl ImportedSheet {
    pub fn n_alternatives(&self) -> usize {
        self.alternatives.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.criteria.len()
    }
}

pub fn import_default_mask(n_criteria: usize) -> Vec<bool> {
    (0..n_criteria)
        .map(|idx| idx < IMPORT_BENEFICIAL_DEFAULT)
        .collect()
}

pub fn read_sheet(path: &Path) -> Result<ImportedSheet, InputError> {
    let format = detect_sheet_format(path);
    let reader = open_reader(path)?;
    let sheet = parse_sheet(reader, format, &path_display(path).to_string())?;
    if sheet.defaulted_cells > 0 {
        warn!(
            path = %path_display(path),
            cells = sheet.defaulted_cells,
            "blank or non-numeric cells imported as 0"
        );
    }
    Ok(sheet)
}

/// Layout: the header row holds criterion names after the first cell, the
/// first column holds alternative names, the rest is the matrix. Blank header
/// cells are dropped, rows with a blank first cell are skipped.
pub fn parse_sheet<R: std::io::Read>(
    reader: R,
    format: SheetFormat,
    source: &str,
) -> Result<ImportedSheet, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(format.delimiter())
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Err(InputError::TooFewRows(source.to_string())),
    };

    // Column positions in the raw record for each kept criterion.
    let mut criterion_cols = Vec::new();
    let mut criteria = Vec::new();
    for (pos, cell) in header.iter().enumerate().skip(1) {
        if !cell.is_empty() {
            criterion_cols.push(pos);
            criteria.push(cell.to_string());
        }
    }
    if criteria.is_empty() {
        return Err(InputError::NoCriteria(source.to_string()));
    }

    let mut alternatives = Vec::new();
    let mut rows = Vec::new();
    let mut defaulted_cells = 0usize;
    for record in records {
        let record = record?;
        let name = record.get(0).unwrap_or("");
        if name.is_empty() {
            continue;
        }
        let mut row = Vec::with_capacity(criterion_cols.len());
        for pos in &criterion_cols {
            match record.get(*pos).and_then(parse_cell) {
                Some(v) => row.push(v),
                None => {
                    defaulted_cells += 1;
                    row.push(0.0);
                }
            }
        }
        alternatives.push(name.to_string());
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(InputError::TooFewRows(source.to_string()));
    }

    Ok(ImportedSheet {
        format,
        alternatives,
        criteria,
        rows,
        defaulted_cells,
    })
}

/// Reads the leading number of a cell, so unit-suffixed values such as
/// `12%` or `38.1 MPa` import as 12 and 38.1. Cells without a leading number,
/// and infinities or NaN, yield `None`.
fn parse_cell(cell: &str) -> Option<f64> {
    let prefix = &cell[..numeric_prefix_len(cell.as_bytes())];
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length of the longest `[sign] digits [. digits] [e [sign] digits]` prefix
/// holding at least one mantissa digit, or 0.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/sheet.rs"]
mod tests;

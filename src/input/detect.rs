use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Tsv,
}

impl SheetFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            SheetFormat::Csv => b',',
            SheetFormat::Tsv => b'\t',
        }
    }
}

impl std::fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetFormat::Csv => write!(f, "csv"),
            SheetFormat::Tsv => write!(f, "tsv"),
        }
    }
}

/// Picks the delimiter from the file name, looking through a trailing `.gz`.
/// Anything that is not `.tsv`/`.tab`/`.txt` is read as CSV.
pub fn detect_sheet_format(path: &Path) -> SheetFormat {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match ext {
        "tsv" | "tab" | "txt" => SheetFormat::Tsv,
        _ => SheetFormat::Csv,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/detect.rs"]
mod tests;

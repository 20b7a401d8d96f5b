use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{BenchError, Result};

/// Column order follows the benchmark run order: scalar first, then
/// the 128/256/512-bit variants.
pub const CSV_HEADER: &str = "size,fmt size,scalar,sse,avx2,avx512";

pub const VARIANT_COUNT: usize = 4;

#[derive(Debug, Clone)]
pub struct ResultRow {
    pub size: usize,
    pub fmt_size: String,
    pub timings: [String; VARIANT_COUNT],
}

impl ResultRow {
    fn csv_line(&self) -> String {
        format!(
            "{},{},{}",
            self.size,
            self.fmt_size,
            self.timings.join(",")
        )
    }
}

#[derive(Debug, Default)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn write_csv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", CSV_HEADER)?;
        for row in &self.rows {
            writeln!(out, "{}", row.csv_line())?;
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let wrap = |source| BenchError::ReportWrite {
            path: path.display().to_string(),
            source,
        };
        let file = File::create(path).map_err(wrap)?;
        let mut out = BufWriter::new(file);
        self.write_csv(&mut out).map_err(wrap)?;
        out.flush().map_err(wrap)
    }
}

pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    const GB: f64 = 1024.0 * 1024.0 * 1024.0;

    if bytes < 1024 {
        format!("{} bytes", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.2} KB", bytes as f64 / KB)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.2} MB", bytes as f64 / MB)
    } else {
        format!("{:.2} GB", bytes as f64 / GB)
    }
}

/// Result-file name carrying the run parameters and the processor
/// brand, trimmed of surrounding whitespace.
pub fn output_filename(threads: usize, repetitions: usize, brand: &str) -> String {
    format!("vcopy_T{}_N{}_{}.csv", threads, repetitions, brand.trim())
}

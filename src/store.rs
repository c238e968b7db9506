// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TRANSACTIONS_SHEET: &str = "Transactions";
pub const BALANCE_SHEET: &str = "Account Balance";
pub const MONTHLY_SHEET: &str = "Monthly Category";

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.moneytracker", "Moneytracker", "moneytracker"));

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sheet '{0}' not found in workbook")]
    MissingSheet(String),
    #[error("sheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: String },
    #[error("check columns in '{sheet}' sheet: {}", .columns.join(", "))]
    MalformedColumns { sheet: String, columns: Vec<String> },
}

/// One named sheet of the workbook: a header row plus data rows, all cells
/// kept as raw strings. Typed parsing happens at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: &str, headers: Vec<String>) -> Self {
        Sheet {
            name: name.to_string(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn require_column(&self, header: &str) -> Result<usize, StoreError> {
        self.column(header).ok_or_else(|| StoreError::MissingColumn {
            sheet: self.name.clone(),
            column: header.to_string(),
        })
    }

    /// Headers the spreadsheet could not name (blank cells on load).
    pub fn unnamed_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|h| h.starts_with("Unnamed"))
            .cloned()
            .collect()
    }
}

/// Platform data location for the workbook when `--file` is not given.
pub fn default_workbook_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().join("ledger");
    fs::create_dir_all(&dir).context("Failed to create workbook dir")?;
    Ok(dir)
}

/// Loads every sheet of the workbook: one CSV file per sheet, sheet name =
/// file stem. Blank header cells are normalized to "Unnamed: {idx}"
/// placeholders so schema checks can spot a malformed sheet.
///
/// The workbook is shared between invocations with no locking; concurrent
/// runs against the same directory are last-writer-wins.
pub fn load_all_sheets(dir: &Path) -> Result<BTreeMap<String, Sheet>> {
    let mut sheets = BTreeMap::new();
    if !dir.is_dir() {
        return Ok(sheets);
    }
    for entry in
        fs::read_dir(dir).with_context(|| format!("Read workbook dir {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        let sheet = read_sheet(&path, &name)?;
        sheets.insert(name, sheet);
    }
    Ok(sheets)
}

fn read_sheet(path: &Path, name: &str) -> Result<Sheet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open sheet {}", path.display()))?;

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result.with_context(|| format!("Row {} of sheet '{}'", i + 1, name))?;
        if i == 0 {
            headers = rec
                .iter()
                .enumerate()
                .map(|(idx, h)| {
                    let h = h.trim();
                    if h.is_empty() {
                        format!("Unnamed: {}", idx)
                    } else {
                        h.to_string()
                    }
                })
                .collect();
        } else {
            let mut row: Vec<String> = rec.iter().map(|c| c.trim().to_string()).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }
    }
    Ok(Sheet {
        name: name.to_string(),
        headers,
        rows,
    })
}

pub fn get_sheet<'a>(sheets: &'a BTreeMap<String, Sheet>, name: &str) -> Result<&'a Sheet> {
    sheets
        .get(name)
        .ok_or_else(|| StoreError::MissingSheet(name.to_string()).into())
}

/// Writes the named sheet back, creating the workbook directory if absent.
/// Only this sheet's file is replaced; sibling sheets are untouched.
pub fn write_sheet(dir: &Path, sheet: &Sheet) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Create workbook dir {}", dir.display()))?;
    let path = dir.join(format!("{}.csv", sheet.name));
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("Write sheet {}", path.display()))?;
    wtr.write_record(&sheet.headers)?;
    for row in &sheet.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

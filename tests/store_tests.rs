// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneytracker::store::{self, Sheet};
use std::fs;
use tempfile::TempDir;

fn sheet(name: &str, headers: &[&str], rows: &[&[&str]]) -> Sheet {
    Sheet {
        name: name.to_string(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

#[test]
fn write_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let original = sheet(
        "Transactions",
        &["Date", "Description", "Category", "Amount", "Source", "Share"],
        &[&["2021-06-01", "Jayne's", "Food", "-23", "Checking", "TRUE"]],
    );
    store::write_sheet(dir.path(), &original).unwrap();

    let sheets = store::load_all_sheets(dir.path()).unwrap();
    assert_eq!(sheets.get("Transactions"), Some(&original));
}

#[test]
fn write_preserves_sibling_sheets() {
    let dir = TempDir::new().unwrap();
    let balance = sheet(
        "Account Balance",
        &["Account", "Init Balance"],
        &[&["Checking", "100"]],
    );
    let txns = sheet("Transactions", &["Date"], &[&["2021-06-01"]]);
    store::write_sheet(dir.path(), &balance).unwrap();
    store::write_sheet(dir.path(), &txns).unwrap();

    let mut updated = txns.clone();
    updated.rows.push(vec!["2021-06-02".to_string()]);
    store::write_sheet(dir.path(), &updated).unwrap();

    let sheets = store::load_all_sheets(dir.path()).unwrap();
    assert_eq!(sheets.get("Account Balance"), Some(&balance));
    assert_eq!(sheets.get("Transactions").unwrap().rows.len(), 2);
}

#[test]
fn blank_headers_become_unnamed_placeholders() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Account Balance.csv"),
        "Account,Init Balance,\nChecking,100,5\n",
    )
    .unwrap();

    let sheets = store::load_all_sheets(dir.path()).unwrap();
    let balance = sheets.get("Account Balance").unwrap();
    assert_eq!(balance.headers, vec!["Account", "Init Balance", "Unnamed: 2"]);
    assert_eq!(balance.unnamed_headers(), vec!["Unnamed: 2"]);
}

#[test]
fn missing_workbook_loads_empty() {
    let dir = TempDir::new().unwrap();
    let sheets = store::load_all_sheets(&dir.path().join("nope")).unwrap();
    assert!(sheets.is_empty());
}

#[test]
fn non_csv_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "not a sheet").unwrap();
    let sheets = store::load_all_sheets(dir.path()).unwrap();
    assert!(sheets.is_empty());
}

#[test]
fn short_rows_are_padded_to_header_width() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Transactions.csv"), "A,B,C\n1,2\n").unwrap();
    let sheets = store::load_all_sheets(dir.path()).unwrap();
    assert_eq!(sheets.get("Transactions").unwrap().rows[0], vec!["1", "2", ""]);
}

#[test]
fn write_creates_missing_workbook_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("books").join("2021");
    let txns = sheet("Transactions", &["Date"], &[]);
    store::write_sheet(&nested, &txns).unwrap();
    assert!(nested.join("Transactions.csv").is_file());
}

// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneytracker::cli;
use moneytracker::commands::{balance, share};
use moneytracker::store::{self, Sheet};
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

fn transactions_sheet() -> Sheet {
    sheet(
        "Transactions",
        &["Date", "Description", "Category", "Amount", "Source", "Share"],
        &[&["2021-06-01", "Jayne's", "Food", "-23", "Checking", "FALSE"]],
    )
}

#[test]
fn an_operation_flag_is_required() {
    let result = cli::build_cli().try_get_matches_from(["moneytracker"]);
    assert!(result.is_err());
}

#[test]
fn operation_flags_are_mutually_exclusive() {
    let result = cli::build_cli().try_get_matches_from(["moneytracker", "-c", "-u"]);
    assert!(result.is_err());
}

#[test]
fn short_and_long_flags_parse() {
    let matches = cli::build_cli().get_matches_from(["moneytracker", "-c"]);
    assert!(matches.get_flag("share"));
    assert!(!matches.get_flag("json"));

    let matches = cli::build_cli().get_matches_from(["moneytracker", "--update-balance"]);
    assert!(matches.get_flag("update-balance"));
}

#[test]
fn workbook_path_is_overridable() {
    let matches =
        cli::build_cli().get_matches_from(["moneytracker", "-m", "--file", "/tmp/book"]);
    assert_eq!(
        matches.get_one::<String>("file").map(String::as_str),
        Some("/tmp/book")
    );
}

#[test]
fn share_runs_end_to_end() {
    let dir = TempDir::new().unwrap();
    store::write_sheet(dir.path(), &transactions_sheet()).unwrap();
    let sheets = store::load_all_sheets(dir.path()).unwrap();

    let matches = cli::build_cli().get_matches_from(["moneytracker", "-c"]);
    share::handle(&sheets, &matches).unwrap();
}

#[test]
fn balance_update_writes_snapshot_back() {
    let dir = TempDir::new().unwrap();
    store::write_sheet(dir.path(), &transactions_sheet()).unwrap();
    store::write_sheet(
        dir.path(),
        &sheet(
            "Account Balance",
            &["Account", "Init Balance"],
            &[&["Checking", "100"], &["Savings", "50"]],
        ),
    )
    .unwrap();
    let sheets = store::load_all_sheets(dir.path()).unwrap();

    balance::handle(dir.path(), &sheets).unwrap();

    let reloaded = store::load_all_sheets(dir.path()).unwrap();
    let updated = reloaded.get("Account Balance").unwrap();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(updated.headers.len(), 3);
    assert_eq!(updated.headers[2], today);
    assert_eq!(updated.rows[0], vec!["Checking", "100", "77"]);
    assert_eq!(updated.rows[1], vec!["Savings", "50", "50"]);
}

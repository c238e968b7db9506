// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{self, DEFAULT_CUTOFF, Transaction};
use crate::store::{self, Sheet, StoreError};
use crate::utils::{parse_date, parse_decimal};

/// Label of the seed column holding opening balances.
pub const INIT_BALANCE_COLUMN: &str = "Init Balance";

pub fn handle(dir: &Path, sheets: &BTreeMap<String, Sheet>) -> Result<()> {
    let balance = store::get_sheet(sheets, store::BALANCE_SHEET)?;
    let txn_sheet = store::get_sheet(sheets, store::TRANSACTIONS_SHEET)?;
    let txns = models::parse_transactions(txn_sheet)?;
    let today = Local::now().date_naive();
    let updated = updated_balance_sheet(balance, &txns, today)?;
    store::write_sheet(dir, &updated)?;
    println!(
        "Appended balance snapshot '{}' to '{}'",
        today,
        store::BALANCE_SHEET
    );
    Ok(())
}

/// Appends a snapshot column labeled with `today` to the balance sheet:
/// per account, the rightmost column's balance plus the net flow of
/// transactions dated strictly after the baseline. Existing columns are
/// never recomputed.
pub fn updated_balance_sheet(
    balance: &Sheet,
    txns: &[Transaction],
    today: NaiveDate,
) -> Result<Sheet> {
    let unnamed = balance.unnamed_headers();
    if !unnamed.is_empty() {
        return Err(StoreError::MalformedColumns {
            sheet: balance.name.clone(),
            columns: unnamed,
        }
        .into());
    }
    let account_col = balance.require_column("Account")?;
    let latest_col = balance.headers.len() - 1;
    let latest = balance.headers[latest_col].as_str();

    let baseline = if latest == INIT_BALANCE_COLUMN {
        *DEFAULT_CUTOFF
    } else {
        parse_date(latest)
            .with_context(|| format!("Snapshot column '{}' is not a date", latest))?
    };

    let label = today.format("%Y-%m-%d").to_string();
    if balance.headers.iter().any(|h| h == &label) {
        bail!(
            "snapshot column '{}' already exists in '{}'",
            label,
            balance.name
        );
    }

    let mut flows: BTreeMap<&str, Decimal> = BTreeMap::new();
    for t in txns.iter().filter(|t| t.date > baseline) {
        *flows.entry(t.source.as_str()).or_insert(Decimal::ZERO) += t.amount;
    }

    let mut updated = balance.clone();
    updated.headers.push(label);
    for row in &mut updated.rows {
        let account = row[account_col].clone();
        let prev = parse_decimal(&row[latest_col])
            .with_context(|| format!("Previous balance for account '{}'", account))?;
        let flow = flows.get(account.as_str()).copied().unwrap_or(Decimal::ZERO);
        row.push((prev + flow).to_string());
    }
    Ok(updated)
}

// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::store::Sheet;
use crate::utils::{parse_date, parse_decimal};

/// Category marking a settlement event; only transactions after the most
/// recent one count toward the next share payment.
pub const SETTLEMENT_CATEGORY: &str = "Share_Payment";

/// Description marking expenses paid entirely on the partner's behalf.
pub const PARTNER_DESCRIPTION: &str = "Jayne's";

/// Cutoff used when a sheet has no settlement or snapshot history yet.
pub static DEFAULT_CUTOFF: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2021, 5, 1).unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub source: String,
    pub share: bool,
}

/// Typed view of the Transactions sheet, matched by header name.
pub fn parse_transactions(sheet: &Sheet) -> Result<Vec<Transaction>> {
    let date_col = sheet.require_column("Date")?;
    let desc_col = sheet.require_column("Description")?;
    let cat_col = sheet.require_column("Category")?;
    let amount_col = sheet.require_column("Amount")?;
    let source_col = sheet.require_column("Source")?;
    let share_col = sheet.require_column("Share")?;

    let mut txns = Vec::with_capacity(sheet.rows.len());
    for (i, row) in sheet.rows.iter().enumerate() {
        let date = parse_date(&row[date_col])
            .with_context(|| format!("Row {} of sheet '{}'", i + 2, sheet.name))?;
        let amount = parse_decimal(&row[amount_col])
            .with_context(|| format!("Row {} of sheet '{}'", i + 2, sheet.name))?;
        txns.push(Transaction {
            date,
            description: row[desc_col].clone(),
            category: row[cat_col].clone(),
            amount,
            source: row[source_col].clone(),
            share: truthy(&row[share_col]),
        });
    }
    Ok(txns)
}

fn truthy(cell: &str) -> bool {
    matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1"
    )
}

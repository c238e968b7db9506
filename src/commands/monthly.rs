// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{self, Transaction};
use crate::store::{self, Sheet};
use crate::utils::month_label;

pub fn handle(dir: &Path, sheets: &BTreeMap<String, Sheet>) -> Result<()> {
    let txn_sheet = store::get_sheet(sheets, store::TRANSACTIONS_SHEET)?;
    let txns = models::parse_transactions(txn_sheet)?;
    let today = Local::now().date_naive();
    match updated_monthly_sheet(sheets.get(store::MONTHLY_SHEET), &txns, today)? {
        Some(sheet) => {
            store::write_sheet(dir, &sheet)?;
            println!("Appended monthly sums to '{}'", store::MONTHLY_SHEET);
        }
        None => println!("No new months to summarize"),
    }
    Ok(())
}

/// Appends one column per summarized month (category rows, "%b %Y"
/// column labels). Months already present are never touched, and the
/// current month is skipped as incomplete. Returns None when there is
/// nothing to append.
pub fn updated_monthly_sheet(
    existing: Option<&Sheet>,
    txns: &[Transaction],
    today: NaiveDate,
) -> Result<Option<Sheet>> {
    // (year, month) keys keep the appended columns chronological.
    let mut sums: BTreeMap<(i32, u32), (String, BTreeMap<String, Decimal>)> = BTreeMap::new();
    for t in txns {
        let key = (t.date.year(), t.date.month());
        if key == (today.year(), today.month()) {
            continue;
        }
        let (_, by_category) = sums
            .entry(key)
            .or_insert_with(|| (month_label(t.date), BTreeMap::new()));
        *by_category.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
    }

    let mut sheet = match existing {
        Some(s) if !s.headers.is_empty() => s.clone(),
        _ => Sheet::new(store::MONTHLY_SHEET, vec!["Category".to_string()]),
    };
    let category_col = sheet.require_column("Category")?;

    let new_months: Vec<(&String, &BTreeMap<String, Decimal>)> = sums
        .values()
        .filter(|(label, _)| !sheet.headers.iter().any(|h| h == label))
        .map(|(label, by_category)| (label, by_category))
        .collect();
    if new_months.is_empty() {
        return Ok(None);
    }

    let known: BTreeSet<String> = sheet
        .rows
        .iter()
        .map(|row| row[category_col].clone())
        .collect();
    let incoming: BTreeSet<&String> = new_months
        .iter()
        .flat_map(|(_, by_category)| by_category.keys())
        .collect();
    for category in incoming {
        if !known.contains(category.as_str()) {
            let mut row = vec![String::new(); sheet.headers.len()];
            row[category_col] = category.clone();
            sheet.rows.push(row);
        }
    }

    for (label, by_category) in new_months {
        sheet.headers.push(label.clone());
        for row in &mut sheet.rows {
            let sum = by_category
                .get(&row[category_col])
                .copied()
                .unwrap_or(Decimal::ZERO);
            row.push(sum.to_string());
        }
    }
    Ok(Some(sheet))
}

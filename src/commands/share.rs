// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::{self, DEFAULT_CUTOFF, PARTNER_DESCRIPTION, SETTLEMENT_CATEGORY, Transaction};
use crate::store::{self, Sheet};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(sheets: &BTreeMap<String, Sheet>, m: &clap::ArgMatches) -> Result<()> {
    let sheet = store::get_sheet(sheets, store::TRANSACTIONS_SHEET)?;
    let txns = models::parse_transactions(sheet)?;
    let report = share_report(&txns);
    if !maybe_print_json(m.get_flag("json"), &report)? {
        let rows: Vec<Vec<String>> = report
            .rows
            .iter()
            .map(|r| vec![r.category.clone(), r.payment.to_string()])
            .collect();
        println!(
            "For share payment\n{}",
            pretty_table(&["Category", "Payment"], rows)
        );
        println!("Total payment: {}", report.total);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ShareLine {
    pub category: String,
    pub payment: i64,
}

#[derive(Debug, Serialize)]
pub struct ShareReport {
    pub rows: Vec<ShareLine>,
    pub total: i64,
}

/// Most recent settlement date, or the fixed default when no settlement
/// has been recorded yet.
pub fn settlement_cutoff(txns: &[Transaction]) -> NaiveDate {
    txns.iter()
        .filter(|t| t.category == SETTLEMENT_CATEGORY)
        .map(|t| t.date)
        .max()
        .unwrap_or(*DEFAULT_CUTOFF)
}

/// Per-category payment suggestions for everything after the last
/// settlement: partner-marked expenses bucketed by 10, shared-flagged
/// expenses bucketed by 20, added together with missing sides as zero.
pub fn share_report(txns: &[Transaction]) -> ShareReport {
    let cutoff = settlement_cutoff(txns);
    let after: Vec<&Transaction> = txns.iter().filter(|t| t.date > cutoff).collect();

    let mut partner: BTreeMap<&str, Decimal> = BTreeMap::new();
    for t in after.iter().filter(|t| t.description == PARTNER_DESCRIPTION) {
        *partner.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount;
    }
    let mut shared: BTreeMap<&str, Decimal> = BTreeMap::new();
    for t in after.iter().filter(|t| t.share) {
        *shared.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount;
    }

    let mut combined: BTreeMap<String, i64> = BTreeMap::new();
    for (cat, sum) in &partner {
        *combined.entry(cat.to_string()).or_insert(0) += bucket(*sum, Decimal::TEN);
    }
    for (cat, sum) in &shared {
        *combined.entry(cat.to_string()).or_insert(0) += bucket(*sum, Decimal::from(20));
    }

    let total = combined.values().sum();
    ShareReport {
        rows: combined
            .into_iter()
            .map(|(category, payment)| ShareLine { category, payment })
            .collect(),
        total,
    }
}

/// Rounds a category sum to a friendly payment unit: truncating division
/// by `unit`, then absolute value, scaled back by 10 and ceiled. The
/// truncation must happen before the absolute value.
fn bucket(sum: Decimal, unit: Decimal) -> i64 {
    ((sum / unit).trunc().abs() * Decimal::TEN)
        .ceil()
        .to_i64()
        .unwrap_or(0)
}

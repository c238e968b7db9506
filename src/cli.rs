// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command};

pub fn build_cli() -> Command {
    Command::new("moneytracker")
        .version(clap::crate_version!())
        .about("Shared-expense settlement and account-balance snapshots over a CSV ledger workbook")
        .arg(
            Arg::new("share")
                .short('c')
                .long("share")
                .action(ArgAction::SetTrue)
                .help("Calculate share payment since the last settlement"),
        )
        .arg(
            Arg::new("update-balance")
                .short('u')
                .long("update-balance")
                .action(ArgAction::SetTrue)
                .help("Append today's balance snapshot to the Account Balance sheet"),
        )
        .arg(
            Arg::new("monthly-category")
                .short('m')
                .long("monthly-category")
                .action(ArgAction::SetTrue)
                .help("Append per-category monthly sums to the Monthly Category sheet"),
        )
        .group(
            ArgGroup::new("operation")
                .args(["share", "update-balance", "monthly-category"])
                .required(true),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("DIR")
                .help("Workbook directory, one CSV file per sheet"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the share report as JSON"),
        )
        .after_help(
            "Concurrent runs against the same workbook are unsafe: the last writer wins.",
        )
}

// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use moneytracker::{cli, commands, store};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let dir = match matches.get_one::<String>("file") {
        Some(p) => PathBuf::from(p),
        None => store::default_workbook_dir()?,
    };
    let sheets = store::load_all_sheets(&dir)?;

    if matches.get_flag("share") {
        commands::share::handle(&sheets, &matches)?;
    } else if matches.get_flag("update-balance") {
        commands::balance::handle(&dir, &sheets)?;
    } else if matches.get_flag("monthly-category") {
        commands::monthly::handle(&dir, &sheets)?;
    }
    Ok(())
}

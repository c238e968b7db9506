// Copyright (c) 2025 Moneytracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod share;
pub mod balance;
pub mod monthly;

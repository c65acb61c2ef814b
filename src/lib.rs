// Copyright The gtester-tools developers.
// SPDX-License-Identifier: Apache-2.0

pub mod commands;
pub mod report;
pub mod utils;

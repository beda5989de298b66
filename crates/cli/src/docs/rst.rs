// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RST format parameter reference.

use super::{ParamDoc, ParamsFormatter, mk_rst_table};
use crate::error::Result;

const TITLE: &str = "Unit file parameters";

/// RST format formatter: a section title followed by a simple table.
pub struct RstFormatter;

impl ParamsFormatter for RstFormatter {
    fn format(&self, params: &[ParamDoc]) -> Result<String> {
        let titles = ["Parameter", "Description", "Default"];
        let columns = vec![
            params.iter().map(|p| format!("``{}``", p.name)).collect(),
            params.iter().map(|p| p.description.to_string()).collect(),
            params
                .iter()
                .map(|p| {
                    if p.default.is_empty() {
                        "(required)".to_string()
                    } else {
                        p.default.to_string()
                    }
                })
                .collect::<Vec<String>>(),
        ];

        let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len()), String::new()];
        lines.extend(mk_rst_table(&titles, &columns)?);
        Ok(lines.join("\n"))
    }
}

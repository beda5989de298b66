// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format parameter reference.

use super::{ParamDoc, ParamsFormatter};
use crate::error::Result;

/// JSON format formatter: a pretty-printed array of parameter objects.
pub struct JsonFormatter;

impl ParamsFormatter for JsonFormatter {
    fn format(&self, params: &[ParamDoc]) -> Result<String> {
        Ok(serde_json::to_string_pretty(params)?)
    }
}

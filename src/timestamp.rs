// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! ISO-8601 timestamps as reported in every payload

use chrono::{SecondsFormat, Utc};

/// Current UTC time, millisecond precision, `Z` suffix
///
/// Example: `2026-10-19T08:15:00.123Z`
#[must_use]
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

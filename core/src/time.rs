// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use crate::{Error, Result};
use chrono::{FixedOffset, NaiveDate, Utc};

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// LocalDateTime is a wall-clock time at a fixed UTC offset, as recorded on timesheets.
pub type LocalDateTime = chrono::DateTime<FixedOffset>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Create a fixed offset from a number of minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| Error::config_invalid(format!("utc offset {minutes} minutes is out of range")))
}

/// Current wall-clock time at the given offset.
pub fn now_at(offset: FixedOffset) -> LocalDateTime {
    now().with_timezone(&offset)
}

/// Format time into date: `2022-03-01`
pub fn format_date(t: LocalDateTime) -> String {
    t.format("%Y-%m-%d").to_string()
}

/// Format time into clock time: `08:59:30`
pub fn format_clock(t: LocalDateTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Parse a date in `2022-03-01` form.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        Error::request_invalid(format!("parse '{s}' into date failed")).with_source(e)
    })
}

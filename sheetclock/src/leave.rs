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

//! Leave requests and the remaining annual leave balance.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use log::{debug, warn};
use sheetclock_core::{Error, Result};

/// Column order of rows written to the leave worksheet.
pub const LEAVE_HEADER: [&str; 6] = ["employee", "kind", "start", "end", "days", "reason"];

/// Balances are compared with this tolerance; half days are the smallest unit.
const DAYS_EPSILON: f64 = 1e-9;

/// Kind of leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeaveKind {
    /// One day per weekday in the range.
    FullDay,
    /// Half a day, taken in the morning.
    HalfDayMorning,
    /// Half a day, taken in the afternoon.
    HalfDayAfternoon,
}

impl LeaveKind {
    /// Whether the leave covers half a day.
    pub fn is_half_day(&self) -> bool {
        matches!(self, LeaveKind::HalfDayMorning | LeaveKind::HalfDayAfternoon)
    }

    /// Name written to the worksheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveKind::FullDay => "full_day",
            LeaveKind::HalfDayMorning => "half_day_am",
            LeaveKind::HalfDayAfternoon => "half_day_pm",
        }
    }
}

impl fmt::Display for LeaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveKind {
    type Err = Error;

    /// Accepts the worksheet names as well as the Korean form labels.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "full_day" | "연차" => Ok(LeaveKind::FullDay),
            "half_day_am" | "오전반차" => Ok(LeaveKind::HalfDayMorning),
            "half_day_pm" | "오후반차" => Ok(LeaveKind::HalfDayAfternoon),
            v => Err(Error::request_invalid(format!("unknown leave kind '{v}'"))),
        }
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A request for leave between two dates, both inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaveRequest {
    /// Employee name as listed on the employees sheet.
    pub employee: String,
    /// Full or half day.
    pub kind: LeaveKind,
    /// First day of leave.
    pub start: NaiveDate,
    /// Last day of leave.
    pub end: NaiveDate,
    /// Free-form reason, may be empty.
    pub reason: String,
}

impl LeaveRequest {
    /// Leave days consumed: weekdays in the range, or 0.5 for a half day on a weekday.
    pub fn days(&self) -> f64 {
        if self.kind.is_half_day() {
            return if self.start == self.end && is_weekday(self.start) {
                0.5
            } else {
                0.0
            };
        }

        self.start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .filter(|d| is_weekday(*d))
            .count() as f64
    }

    /// Check that the request can be filed.
    pub fn validate(&self) -> Result<()> {
        if self.employee.trim().is_empty() {
            return Err(Error::request_invalid("employee must not be empty"));
        }
        if self.end < self.start {
            return Err(Error::request_invalid(format!(
                "leave ends on {} before it starts on {}",
                self.end, self.start
            )));
        }
        if self.kind.is_half_day() && self.start != self.end {
            return Err(Error::request_invalid(
                "half-day leave must start and end on the same day",
            ));
        }
        if self.days() <= 0.0 {
            return Err(Error::request_invalid(format!(
                "no weekdays between {} and {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Worksheet row in [`LEAVE_HEADER`] order.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.employee.trim().to_string(),
            self.kind.to_string(),
            self.start.to_string(),
            self.end.to_string(),
            format_days(self.days()),
            self.reason.trim().to_string(),
        ]
    }
}

/// `3` for whole days, `2.5` for half days.
fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{days:.0}")
    } else {
        format!("{days:.1}")
    }
}

/// Granted and used leave days of one employee.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeaveBalance {
    /// Days granted for the year.
    pub granted: f64,
    /// Days already taken.
    pub used: f64,
}

impl LeaveBalance {
    /// Create a balance.
    pub fn new(granted: f64, used: f64) -> Self {
        Self { granted, used }
    }

    /// Days still available.
    pub fn remaining(&self) -> f64 {
        self.granted - self.used
    }

    /// Sum the `days` column of `employee`'s rows in the leave worksheet.
    ///
    /// Rows whose `days` cell is missing or not a number are skipped.
    pub fn from_records(employee: &str, granted: f64, records: &[HashMap<String, String>]) -> Self {
        let employee = employee.trim();
        let mut used = 0.0;

        for (idx, record) in records.iter().enumerate() {
            if record.get("employee").map(|v| v.trim()) != Some(employee) {
                continue;
            }
            match record.get("days").map(|v| v.trim().parse::<f64>()) {
                Some(Ok(days)) if days.is_finite() && days >= 0.0 => used += days,
                _ => warn!("skipping leave row {idx} of {employee}: unusable days value"),
            }
        }

        debug!("{employee} used {used} of {granted} leave days");
        Self { granted, used }
    }

    /// Balance after `request` is granted.
    pub fn apply(&self, request: &LeaveRequest) -> Result<LeaveBalance> {
        request.validate()?;

        let days = request.days();
        if days > self.remaining() + DAYS_EPSILON {
            return Err(Error::request_invalid(format!(
                "{} requested {} days but only {} remain",
                request.employee.trim(),
                format_days(days),
                format_days(self.remaining())
            )));
        }

        Ok(LeaveBalance {
            granted: self.granted,
            used: self.used + days,
        })
    }
}

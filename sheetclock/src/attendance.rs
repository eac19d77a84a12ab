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

//! Clock-in / clock-out state carried explicitly through each request.

use log::debug;
use sheetclock_core::time::{format_clock, format_date, LocalDateTime};
use sheetclock_core::{Error, Result};

/// Column order of rows written to the attendance worksheet.
pub const ATTENDANCE_HEADER: [&str; 6] = ["date", "employee", "work_type", "in", "out", "hours"];

/// Whether an employee is currently on the clock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClockState {
    /// Nobody is clocked in.
    #[default]
    Idle,
    /// `employee` clocked in at `since`.
    Working {
        /// Employee name as listed on the employees sheet.
        employee: String,
        /// Kind of work, e.g. office or remote.
        work_type: String,
        /// Clock-in time.
        since: LocalDateTime,
    },
}

/// A clock-in event, written as a row with empty `out` and `hours` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockIn {
    /// Employee name as listed on the employees sheet.
    pub employee: String,
    /// Kind of work, e.g. office or remote.
    pub work_type: String,
    /// Clock-in time.
    pub at: LocalDateTime,
}

impl ClockIn {
    /// Worksheet row in [`ATTENDANCE_HEADER`] order.
    pub fn row(&self) -> Vec<String> {
        vec![
            format_date(self.at),
            self.employee.clone(),
            self.work_type.clone(),
            format_clock(self.at),
            String::new(),
            String::new(),
        ]
    }
}

/// A completed shift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceRecord {
    /// Employee name as listed on the employees sheet.
    pub employee: String,
    /// Kind of work, e.g. office or remote.
    pub work_type: String,
    /// Start of the shift.
    pub clock_in: LocalDateTime,
    /// End of the shift, never before `clock_in`.
    pub clock_out: LocalDateTime,
}

impl AttendanceRecord {
    /// Worked hours, rounded to two decimals.
    pub fn hours(&self) -> f64 {
        let secs = (self.clock_out - self.clock_in).num_seconds() as f64;
        (secs / 36.0).round() / 100.0
    }

    /// Worksheet row in [`ATTENDANCE_HEADER`] order. The date is the clock-in date.
    pub fn row(&self) -> Vec<String> {
        vec![
            format_date(self.clock_in),
            self.employee.clone(),
            self.work_type.clone(),
            format_clock(self.clock_in),
            format_clock(self.clock_out),
            format!("{:.2}", self.hours()),
        ]
    }
}

impl ClockState {
    /// Whether someone is clocked in.
    pub fn is_working(&self) -> bool {
        matches!(self, ClockState::Working { .. })
    }

    /// The employee currently clocked in.
    pub fn employee(&self) -> Option<&str> {
        match self {
            ClockState::Idle => None,
            ClockState::Working { employee, .. } => Some(employee),
        }
    }

    /// Start a shift.
    pub fn clock_in(
        self,
        employee: impl Into<String>,
        work_type: impl Into<String>,
        at: LocalDateTime,
    ) -> Result<(ClockState, ClockIn)> {
        if let ClockState::Working {
            employee, since, ..
        } = &self
        {
            return Err(Error::request_invalid(format!(
                "{employee} is already clocked in since {}",
                format_clock(*since)
            )));
        }

        let employee = employee.into().trim().to_string();
        let work_type = work_type.into().trim().to_string();
        if employee.is_empty() {
            return Err(Error::request_invalid("employee must not be empty"));
        }
        if work_type.is_empty() {
            return Err(Error::request_invalid("work type must not be empty"));
        }

        debug!("{employee} clocked in at {at}");
        let state = ClockState::Working {
            employee: employee.clone(),
            work_type: work_type.clone(),
            since: at,
        };
        Ok((
            state,
            ClockIn {
                employee,
                work_type,
                at,
            },
        ))
    }

    /// Finish the current shift.
    pub fn clock_out(self, at: LocalDateTime) -> Result<(ClockState, AttendanceRecord)> {
        let ClockState::Working {
            employee,
            work_type,
            since,
        } = self
        else {
            return Err(Error::request_invalid("nobody is clocked in"));
        };

        if at < since {
            return Err(Error::request_invalid(format!(
                "clock-out {} is before clock-in {}",
                format_clock(at),
                format_clock(since)
            )));
        }

        debug!("{employee} clocked out at {at}");
        Ok((
            ClockState::Idle,
            AttendanceRecord {
                employee,
                work_type,
                clock_in: since,
                clock_out: at,
            },
        ))
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

crate::coded_enum! {
    /// Day status of a child.
    AttendanceStatus, "attendance status" {
        Present => "present", "Present", ["p", "here"],
        Absent => "absent", "Absent", ["a"],
        Sick => "sick", "Sick", ["s", "ill"],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Option<i64>,
    pub child_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    /// "Last First" of the child, filled on reads.
    pub child_name: Option<String>,
}

impl AttendanceRecord {
    pub fn new(child_id: i64, date: NaiveDate, status: AttendanceStatus) -> Self {
        AttendanceRecord {
            id: None,
            child_id,
            date,
            status,
            notes: None,
            created_at: None,
            updated_at: None,
            child_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceUpdate {
    pub status: Option<AttendanceStatus>,
    pub notes: Option<String>,
}

impl AttendanceUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Day counts per status over a date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub present: i64,
    pub absent: i64,
    pub sick: i64,
}

impl AttendanceSummary {
    pub fn total(&self) -> i64 {
        self.present + self.absent + self.sick
    }
}

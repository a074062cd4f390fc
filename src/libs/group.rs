use crate::db::error::{require, require_if_set, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::coded_enum! {
    /// Age band a group is formed for.
    AgeCategory, "age category" {
        Nursery => "nursery", "Nursery (1-3)", ["toddlers", "ясельная"],
        Junior => "junior", "Junior (3-4)", ["younger", "младшая"],
        Middle => "middle", "Middle (4-5)", ["средняя"],
        Senior => "senior", "Senior (5-6)", ["older", "старшая"],
        Preschool => "preschool", "Preschool (6-7)", ["preparatory", "подготовительная"],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<i64>,
    pub name: String,
    pub age_category: AgeCategory,
    pub teacher_id: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
    /// Full name of the assigned teacher, filled on reads.
    pub teacher_name: Option<String>,
    /// Number of children in the group, filled on reads.
    pub children_count: i64,
}

impl Group {
    pub fn new(name: &str, age_category: AgeCategory, teacher_id: Option<i64>) -> Self {
        Group {
            id: None,
            name: name.to_string(),
            age_category,
            teacher_id,
            created_at: None,
            teacher_name: None,
            children_count: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("group name", &self.name)
    }
}

/// Partial update. `teacher_id: Some(None)` detaches the teacher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub age_category: Option<AgeCategory>,
    pub teacher_id: Option<Option<i64>>,
}

impl GroupUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        require_if_set("group name", self.name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStatistics {
    pub group_id: i64,
    pub group_name: String,
    pub age_category: AgeCategory,
    pub children_count: i64,
    pub boys_count: i64,
    pub girls_count: i64,
}

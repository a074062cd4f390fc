use crate::db::error::{require, DbError, Result};
use crate::libs::formatter::full_name;
use crate::libs::group::AgeCategory;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

crate::coded_enum! {
    Gender, "gender" {
        Male => "M", "Male", ["boy", "м"],
        Female => "F", "Female", ["girl", "ж"],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: Option<i64>,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub group_id: Option<i64>,
    pub enrollment_date: NaiveDate,
    pub created_at: Option<NaiveDateTime>,
    /// Name of the assigned group, filled on reads.
    pub group_name: Option<String>,
    /// Age category of the assigned group, filled on reads.
    pub age_category: Option<AgeCategory>,
}

impl Child {
    pub fn new(last_name: &str, first_name: &str, birth_date: NaiveDate, gender: Gender, enrollment_date: NaiveDate) -> Self {
        Child {
            id: None,
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            middle_name: None,
            birth_date,
            gender,
            group_id: None,
            enrollment_date,
            created_at: None,
            group_name: None,
            age_category: None,
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.last_name, &self.first_name, self.middle_name.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        require("last name", &self.last_name)?;
        require("first name", &self.first_name)?;
        if self.enrollment_date < self.birth_date {
            return Err(DbError::Validation("enrollment date is before the birth date".to_string()));
        }
        Ok(())
    }

    /// The child as it would read after `update`, for validating the
    /// combined record before writing.
    pub fn apply(&self, update: &ChildUpdate) -> Child {
        let mut child = self.clone();
        if let Some(last_name) = &update.last_name {
            child.last_name = last_name.clone();
        }
        if let Some(first_name) = &update.first_name {
            child.first_name = first_name.clone();
        }
        if let Some(middle_name) = &update.middle_name {
            child.middle_name = Some(middle_name.clone());
        }
        if let Some(birth_date) = update.birth_date {
            child.birth_date = birth_date;
        }
        if let Some(gender) = update.gender {
            child.gender = gender;
        }
        if let Some(group_id) = update.group_id {
            child.group_id = group_id;
        }
        if let Some(enrollment_date) = update.enrollment_date {
            child.enrollment_date = enrollment_date;
        }
        child
    }
}

/// Partial update. `group_id: Some(None)` takes the child out of its group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildUpdate {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub group_id: Option<Option<i64>>,
    pub enrollment_date: Option<NaiveDate>,
}

impl ChildUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildWithAge {
    #[serde(flatten)]
    pub child: Child,
    pub age: i32,
}

/// A child as seen from one of their parents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedChild {
    #[serde(flatten)]
    pub child: Child,
    pub relationship: String,
}

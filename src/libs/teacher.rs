use crate::db::error::{require, require_if_set, Result};
use crate::libs::formatter::full_name;
use chrono::NaiveDateTime;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A teacher. Serializes with a computed `full_name` after the name parts,
/// which group pickers and listings display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Teacher {
    pub id: Option<i64>,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Teacher {
    pub fn new(last_name: &str, first_name: &str) -> Self {
        Teacher {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.last_name, &self.first_name, self.middle_name.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        require("last name", &self.last_name)?;
        require("first name", &self.first_name)
    }
}

impl Serialize for Teacher {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Teacher", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("last_name", &self.last_name)?;
        state.serialize_field("first_name", &self.first_name)?;
        state.serialize_field("middle_name", &self.middle_name)?;
        state.serialize_field("full_name", &self.full_name())?;
        state.serialize_field("phone", &self.phone)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("created_at", &self.created_at)?;
        state.end()
    }
}

/// Fields to overwrite on an existing teacher; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherUpdate {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl TeacherUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rejects a name that is given but blank.
    pub fn validate(&self) -> Result<()> {
        require_if_set("last name", self.last_name.as_deref())?;
        require_if_set("first name", self.first_name.as_deref())
    }
}

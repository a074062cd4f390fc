use crate::db::error::{require, require_if_set, Result};
use crate::libs::formatter::full_name;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parent {
    pub id: Option<i64>,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Parent {
    pub fn new(last_name: &str, first_name: &str) -> Self {
        Parent {
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParentUpdate {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ParentUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        require_if_set("last name", self.last_name.as_deref())?;
        require_if_set("first name", self.first_name.as_deref())
    }
}

/// A parent as seen from one of their children, with the relationship label
/// ("mother", "grandfather", ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedParent {
    #[serde(flatten)]
    pub parent: Parent,
    pub relationship: String,
}

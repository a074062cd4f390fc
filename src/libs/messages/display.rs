//! Text of every [`Message`].
//!
//! Keeping all wording in one match means a new variant cannot ship without
//! its text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TEACHER MESSAGES ===
            Message::TeacherCreated(id) => format!("Teacher added with ID: {}", id),
            Message::TeacherUpdated(id) => format!("Teacher {} updated", id),
            Message::TeacherDeleted(name) => format!("Teacher {} deleted", name),
            Message::TeacherNotFound(id) => format!("Teacher with ID {} not found", id),
            Message::TeacherInUse(name, groups) => format!(
                "{} is assigned to: {}. Reassign these groups before deleting the teacher",
                name,
                groups.join(", ")
            ),
            Message::TeachersNotFound => "No teachers found".to_string(),
            Message::TeachersHeader => "Teachers".to_string(),
            Message::ConfirmDeleteTeacher(name) => format!("Delete teacher {}?", name),

            // === GROUP MESSAGES ===
            Message::GroupCreated(id) => format!("Group created with ID: {}", id),
            Message::GroupUpdated(id) => format!("Group {} updated", id),
            Message::GroupDeleted(name, detached) => {
                format!("Group '{}' deleted, {} children left without a group", name, detached)
            }
            Message::GroupNotFound(id) => format!("Group with ID {} not found", id),
            Message::GroupsNotFound => "No groups found".to_string(),
            Message::GroupsHeader => "Groups".to_string(),
            Message::ConfirmDeleteGroup(name, count) => {
                if *count > 0 {
                    format!("Delete group '{}'? Its {} children will be left without a group", name, count)
                } else {
                    format!("Delete group '{}'?", name)
                }
            }

            // === PARENT MESSAGES ===
            Message::ParentCreated(id) => format!("Parent added with ID: {}", id),
            Message::ParentUpdated(id) => format!("Parent {} updated", id),
            Message::ParentDeleted(name) => format!("Parent {} deleted", name),
            Message::ParentNotFound(id) => format!("Parent with ID {} not found", id),
            Message::ParentsNotFound => "No parents found".to_string(),
            Message::ParentsHeader => "Parents".to_string(),
            Message::ConfirmDeleteParent(name) => format!("Delete parent {} and their links to children?", name),

            // === CHILD MESSAGES ===
            Message::ChildCreated(id) => format!("Child enrolled with ID: {}", id),
            Message::ChildUpdated(id) => format!("Child {} updated", id),
            Message::ChildDeleted(name) => format!("Child {} deleted", name),
            Message::ChildNotFound(id) => format!("Child with ID {} not found", id),
            Message::ChildrenNotFound => "No children found".to_string(),
            Message::ChildrenHeader => "Children".to_string(),
            Message::ChildrenOfGroupHeader(group) => format!("Children of group '{}'", group),
            Message::ChildrenByAgeHeader(min, max) => format!("Children aged {} to {}", min, max),
            Message::ChildAssigned(child, group) => format!("{} moved to group '{}'", child, group),
            Message::ChildUnassigned(child) => format!("{} is no longer in a group", child),
            Message::ChildrenTransferred(count) => format!("{} children transferred", count),
            Message::ConfirmDeleteChild(name) => {
                format!("Delete {} together with parent links and attendance history?", name)
            }

            // === RELATION MESSAGES ===
            Message::RelationSaved(parent, child, relationship) => {
                format!("{} linked to {} as {}", parent, child, relationship)
            }
            Message::RelationRemoved => "Relation removed".to_string(),
            Message::RelationNotFound => "These two are not linked".to_string(),
            Message::ParentsOfChildHeader(child) => format!("Parents of {}", child),
            Message::ChildrenOfParentHeader(parent) => format!("Children of {}", parent),
            Message::RelationsReplaced(child, count) => format!("{} now has {} linked parents", child, count),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceMarked(child, date, status) => format!("{} marked {} on {}", child, status, date),
            Message::AttendanceAdded(id) => format!("Attendance record added with ID: {}", id),
            Message::AttendanceUpdated(id) => format!("Attendance record {} updated", id),
            Message::AttendanceDeleted(id) => format!("Attendance record {} deleted", id),
            Message::AttendanceNotFound(id) => format!("Attendance record with ID {} not found", id),
            Message::AttendanceDuplicate(child, date) => {
                format!("{} already has an attendance record for {}. Use 'attendance mark' to change it", child, date)
            }
            Message::AttendanceNotFoundForDate(date) => format!("No attendance recorded for {}", date),
            Message::AttendanceHeader(date) => format!("Attendance for {}", date),
            Message::AttendanceSummary(child, present, absent, sick) => {
                format!("{}: present {}, absent {}, sick {}", child, present, absent, sick)
            }

            // === STATISTICS MESSAGES ===
            Message::StatisticsHeader => "Kindergarten statistics".to_string(),
            Message::GroupStatisticsHeader => "Groups".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigPromptAppTitle => "Application title".to_string(),
            Message::ConfigPromptDatabasePath => "Database file".to_string(),
            Message::ConfigPromptDefaultAgeCategory => "Default age category for new groups".to_string(),
            Message::ConfigPromptDateFormat => "Date display format".to_string(),
            Message::DatabasePath(path) => format!("Database: {}", path),
            Message::DatabaseMissing(path) => format!("No database at {} yet; run `kindergarten init` to create it", path),

            // === MIGRATION MESSAGES ===
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::LatestVersion(version) => format!("Latest available version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEmpty => "No migrations have been applied".to_string(),

            // === GENERAL MESSAGES ===
            Message::NoChangesProvided => "Nothing to update, no fields given".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidInput(detail) => format!("Invalid input: {}", detail),
            Message::ConstraintViolation(detail) => format!("The database refused the change: {}", detail),
            Message::DatabaseError(detail) => format!("Database error: {}", detail),
        };

        write!(f, "{}", text)
    }
}

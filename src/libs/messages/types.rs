/// Every user-facing line the CLI prints. Text lives in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TEACHER MESSAGES ===
    TeacherCreated(i64),
    TeacherUpdated(i64),
    TeacherDeleted(String),
    TeacherNotFound(i64),
    TeacherInUse(String, Vec<String>), // teacher, groups
    TeachersNotFound,
    TeachersHeader,
    ConfirmDeleteTeacher(String),

    // === GROUP MESSAGES ===
    GroupCreated(i64),
    GroupUpdated(i64),
    GroupDeleted(String, i64), // name, detached children
    GroupNotFound(i64),
    GroupsNotFound,
    GroupsHeader,
    ConfirmDeleteGroup(String, i64),

    // === PARENT MESSAGES ===
    ParentCreated(i64),
    ParentUpdated(i64),
    ParentDeleted(String),
    ParentNotFound(i64),
    ParentsNotFound,
    ParentsHeader,
    ConfirmDeleteParent(String),

    // === CHILD MESSAGES ===
    ChildCreated(i64),
    ChildUpdated(i64),
    ChildDeleted(String),
    ChildNotFound(i64),
    ChildrenNotFound,
    ChildrenHeader,
    ChildrenOfGroupHeader(String),
    ChildrenByAgeHeader(i32, i32),
    ChildAssigned(String, String), // child, group
    ChildUnassigned(String),
    ChildrenTransferred(usize),
    ConfirmDeleteChild(String),

    // === RELATION MESSAGES ===
    RelationSaved(String, String, String), // parent, child, relationship
    RelationRemoved,
    RelationNotFound,
    ParentsOfChildHeader(String),
    ChildrenOfParentHeader(String),
    RelationsReplaced(String, usize),

    // === ATTENDANCE MESSAGES ===
    AttendanceMarked(String, String, String), // child, date, status
    AttendanceAdded(i64),
    AttendanceUpdated(i64),
    AttendanceDeleted(i64),
    AttendanceNotFound(i64),
    AttendanceDuplicate(String, String), // child, date
    AttendanceNotFoundForDate(String),
    AttendanceHeader(String),
    AttendanceSummary(String, i64, i64, i64), // child, present, absent, sick

    // === STATISTICS MESSAGES ===
    StatisticsHeader,
    GroupStatisticsHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigSaveError,
    ConfigParseError,
    ConfigPromptAppTitle,
    ConfigPromptDatabasePath,
    ConfigPromptDefaultAgeCategory,
    ConfigPromptDateFormat,
    DatabasePath(String),
    DatabaseMissing(String),

    // === MIGRATION MESSAGES ===
    DatabaseVersion(u32),
    LatestVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEmpty,

    // === GENERAL MESSAGES ===
    NoChangesProvided,
    OperationCancelled,
    InvalidInput(String),
    ConstraintViolation(String),
    DatabaseError(String),
}

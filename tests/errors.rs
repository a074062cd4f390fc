#[cfg(test)]
mod tests {
    use kindergarten::db::error::{require, require_if_set, DbError};
    use kindergarten::db::kindergarten::KindergartenDb;
    use kindergarten::libs::teacher::Teacher;

    #[test]
    fn test_sqlite_error_text_is_not_prefixed() {
        let err = DbError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, DbError::Sqlite(_)));
        assert_eq!(err.to_string(), rusqlite::Error::QueryReturnedNoRows.to_string());
    }

    #[test]
    fn test_sqlite_failure_keeps_sqlite_message() {
        let db = KindergartenDb::open_in_memory().unwrap();
        let err: DbError = db.conn().execute("DELETE FROM no_such_table", []).unwrap_err().into();
        assert!(matches!(err, DbError::Sqlite(_)));
        assert!(err.to_string().starts_with("no such table"));
    }

    #[test]
    fn test_constraint_violation_is_split_out() {
        let db = KindergartenDb::open_in_memory().unwrap();
        db.teachers().add(&Teacher::new("Ivanova", "Anna")).unwrap();
        let err: DbError = db
            .conn()
            .execute("INSERT INTO teachers (id, last_name, first_name) VALUES (1, 'A', 'B')", [])
            .unwrap_err()
            .into();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_required_fields() {
        assert!(require("last name", "Ivanova").is_ok());
        let err = require("last name", "  ").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: last name is required");
        assert!(require_if_set("last name", None).is_ok());
        assert!(require_if_set("last name", Some("")).is_err());
    }
}

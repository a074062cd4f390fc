#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kindergarten::db::error::DbError;
    use kindergarten::db::kindergarten::KindergartenDb;
    use kindergarten::libs::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary, AttendanceUpdate};
    use kindergarten::libs::child::{Child, Gender};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AttendanceTestContext {
        _temp_dir: TempDir,
        db: KindergartenDb,
        ivan: i64,
        anna: i64,
    }

    impl TestContext for AttendanceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = KindergartenDb::open(temp_dir.path().join("kindergarten.db")).unwrap();
            let ivan = db
                .children()
                .add(&Child::new("Petrov", "Ivan", date(2019, 5, 1), Gender::Male, date(2024, 9, 1)))
                .unwrap();
            let anna = db
                .children()
                .add(&Child::new("Orlova", "Anna", date(2020, 2, 1), Gender::Female, date(2024, 9, 1)))
                .unwrap();
            AttendanceTestContext {
                _temp_dir: temp_dir,
                db,
                ivan,
                anna,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_add_and_get(ctx: &mut AttendanceTestContext) {
        let record = AttendanceRecord {
            notes: Some("picked up early".to_string()),
            ..AttendanceRecord::new(ctx.ivan, date(2025, 3, 3), AttendanceStatus::Present)
        };
        let id = ctx.db.attendance().add(&record).unwrap();

        let fetched = ctx.db.attendance().get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.child_id, ctx.ivan);
        assert_eq!(fetched.date, date(2025, 3, 3));
        assert_eq!(fetched.status, AttendanceStatus::Present);
        assert_eq!(fetched.notes.as_deref(), Some("picked up early"));
        assert_eq!(fetched.child_name.as_deref(), Some("Petrov Ivan"));
        assert!(fetched.created_at.is_some());
        assert!(fetched.updated_at.is_some());
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_duplicate_day_is_constraint_violation(ctx: &mut AttendanceTestContext) {
        let record = AttendanceRecord::new(ctx.ivan, date(2025, 3, 3), AttendanceStatus::Present);
        ctx.db.attendance().add(&record).unwrap();

        let again = AttendanceRecord::new(ctx.ivan, date(2025, 3, 3), AttendanceStatus::Sick);
        let err = ctx.db.attendance().add(&again).unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation(_)));

        // Another child on the same day is fine.
        let other = AttendanceRecord::new(ctx.anna, date(2025, 3, 3), AttendanceStatus::Absent);
        assert!(ctx.db.attendance().add(&other).is_ok());
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_mark_upserts(ctx: &mut AttendanceTestContext) {
        let book = ctx.db.attendance();
        let first = book
            .mark(ctx.ivan, date(2025, 3, 3), AttendanceStatus::Absent, Some("cold"))
            .unwrap();
        let second = book.mark(ctx.ivan, date(2025, 3, 3), AttendanceStatus::Sick, None).unwrap();
        assert_eq!(first, second);

        let records = book.get_by_date(date(2025, 3, 3)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Sick);
        assert_eq!(records[0].notes.as_deref(), Some("cold"));
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_update_and_delete(ctx: &mut AttendanceTestContext) {
        let book = ctx.db.attendance();
        let id = book
            .add(&AttendanceRecord::new(ctx.ivan, date(2025, 3, 3), AttendanceStatus::Absent))
            .unwrap();

        let update = AttendanceUpdate {
            status: Some(AttendanceStatus::Sick),
            notes: Some("doctor's note".to_string()),
        };
        assert!(book.update(id, &update).unwrap());
        let fetched = book.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.status, AttendanceStatus::Sick);
        assert_eq!(fetched.notes.as_deref(), Some("doctor's note"));

        assert!(!book.update(id, &AttendanceUpdate::default()).unwrap());

        book.delete(id).unwrap();
        assert!(book.get_by_id(id).unwrap().is_none());
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_register_of_a_day_is_ordered_by_name(ctx: &mut AttendanceTestContext) {
        let book = ctx.db.attendance();
        book.mark(ctx.ivan, date(2025, 3, 3), AttendanceStatus::Present, None).unwrap();
        book.mark(ctx.anna, date(2025, 3, 3), AttendanceStatus::Absent, None).unwrap();
        book.mark(ctx.anna, date(2025, 3, 4), AttendanceStatus::Present, None).unwrap();

        let names: Vec<String> = book
            .get_by_date(date(2025, 3, 3))
            .unwrap()
            .into_iter()
            .filter_map(|r| r.child_name)
            .collect();
        assert_eq!(names, vec!["Orlova Anna", "Petrov Ivan"]);
        assert!(book.get_by_date(date(2025, 3, 5)).unwrap().is_empty());
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_child_history_and_summary(ctx: &mut AttendanceTestContext) {
        let book = ctx.db.attendance();
        book.mark(ctx.ivan, date(2025, 3, 3), AttendanceStatus::Present, None).unwrap();
        book.mark(ctx.ivan, date(2025, 3, 4), AttendanceStatus::Present, None).unwrap();
        book.mark(ctx.ivan, date(2025, 3, 5), AttendanceStatus::Sick, None).unwrap();
        book.mark(ctx.ivan, date(2025, 3, 6), AttendanceStatus::Absent, None).unwrap();
        book.mark(ctx.ivan, date(2025, 4, 1), AttendanceStatus::Present, None).unwrap();
        book.mark(ctx.anna, date(2025, 3, 4), AttendanceStatus::Sick, None).unwrap();

        let history = book.get_by_child(ctx.ivan, date(2025, 3, 4), date(2025, 3, 6)).unwrap();
        let days: Vec<NaiveDate> = history.iter().map(|r| r.date).collect();
        assert_eq!(days, vec![date(2025, 3, 4), date(2025, 3, 5), date(2025, 3, 6)]);

        let summary = book.summary_for_child(ctx.ivan, date(2025, 3, 1), date(2025, 3, 31)).unwrap();
        assert_eq!(
            summary,
            AttendanceSummary {
                present: 2,
                absent: 1,
                sick: 1
            }
        );
        assert_eq!(summary.total(), 4);

        let empty = book.summary_for_child(ctx.ivan, date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        assert_eq!(empty, AttendanceSummary::default());
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_unknown_status_is_rejected_by_schema(ctx: &mut AttendanceTestContext) {
        let err = ctx
            .db
            .conn()
            .execute(
                "INSERT INTO attendance (child_id, date, status) VALUES (?1, '2025-03-03', 'late')",
                [ctx.ivan],
            )
            .unwrap_err();
        assert!(DbError::from(err).is_constraint_violation());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("present".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
        assert_eq!("ILL".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Sick);
        assert!("late".parse::<AttendanceStatus>().is_err());
    }
}

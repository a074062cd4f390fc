#[cfg(test)]
mod tests {
    use kindergarten::db::error::DbError;
    use kindergarten::db::kindergarten::KindergartenDb;
    use kindergarten::libs::group::{AgeCategory, Group, GroupUpdate};
    use kindergarten::libs::teacher::{Teacher, TeacherUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TeacherTestContext {
        _temp_dir: TempDir,
        db: KindergartenDb,
    }

    impl TestContext for TeacherTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = KindergartenDb::open(temp_dir.path().join("kindergarten.db")).unwrap();
            TeacherTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn teacher(last: &str, first: &str, phone: Option<&str>, email: Option<&str>) -> Teacher {
        Teacher {
            phone: phone.map(String::from),
            email: email.map(String::from),
            ..Teacher::new(last, first)
        }
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_teacher_crud(ctx: &mut TeacherTestContext) {
        let teachers = ctx.db.teachers();

        let new = Teacher {
            middle_name: Some("Petrovna".to_string()),
            ..teacher("Ivanova", "Anna", Some("+7 900 000-00-01"), Some("anna@example.org"))
        };
        let id = teachers.add(&new).unwrap();
        assert!(id > 0);

        let fetched = teachers.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.id, Some(id));
        assert_eq!(fetched.last_name, "Ivanova");
        assert_eq!(fetched.first_name, "Anna");
        assert_eq!(fetched.middle_name.as_deref(), Some("Petrovna"));
        assert_eq!(fetched.phone.as_deref(), Some("+7 900 000-00-01"));
        assert_eq!(fetched.email.as_deref(), Some("anna@example.org"));
        assert!(fetched.created_at.is_some());
        assert_eq!(fetched.full_name(), "Ivanova Anna Petrovna");

        teachers.delete(id).unwrap();
        assert!(teachers.get_by_id(id).unwrap().is_none());
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_missing_teacher_is_none(ctx: &mut TeacherTestContext) {
        assert!(ctx.db.teachers().get_by_id(999).unwrap().is_none());
        // Deleting an unknown id is a no-op.
        ctx.db.teachers().delete(999).unwrap();
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_get_all_orders_by_last_then_first_name(ctx: &mut TeacherTestContext) {
        let teachers = ctx.db.teachers();
        teachers.add(&teacher("Smirnova", "Olga", None, None)).unwrap();
        teachers.add(&teacher("Ivanova", "Maria", None, None)).unwrap();
        teachers.add(&teacher("Ivanova", "Anna", None, None)).unwrap();

        let names: Vec<String> = teachers.get_all().unwrap().iter().map(|t| t.full_name()).collect();
        assert_eq!(names, vec!["Ivanova Anna", "Ivanova Maria", "Smirnova Olga"]);
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_partial_update_keeps_other_fields(ctx: &mut TeacherTestContext) {
        let teachers = ctx.db.teachers();
        let id = teachers
            .add(&teacher("Ivanova", "Anna", Some("111"), Some("anna@example.org")))
            .unwrap();

        let update = TeacherUpdate {
            phone: Some("222".to_string()),
            ..Default::default()
        };
        assert!(teachers.update(id, &update).unwrap());

        let fetched = teachers.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.phone.as_deref(), Some("222"));
        assert_eq!(fetched.last_name, "Ivanova");
        assert_eq!(fetched.first_name, "Anna");
        assert_eq!(fetched.email.as_deref(), Some("anna@example.org"));
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_empty_update_writes_nothing(ctx: &mut TeacherTestContext) {
        let teachers = ctx.db.teachers();
        let id = teachers.add(&teacher("Ivanova", "Anna", None, None)).unwrap();

        assert!(TeacherUpdate::default().is_empty());
        assert!(!teachers.update(id, &TeacherUpdate::default()).unwrap());
        assert_eq!(teachers.get_by_id(id).unwrap().unwrap().full_name(), "Ivanova Anna");
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_update_unknown_teacher_returns_false(ctx: &mut TeacherTestContext) {
        let update = TeacherUpdate {
            first_name: Some("Nobody".to_string()),
            ..Default::default()
        };
        assert!(!ctx.db.teachers().update(42, &update).unwrap());
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_search_is_case_insensitive(ctx: &mut TeacherTestContext) {
        let teachers = ctx.db.teachers();
        teachers.add(&teacher("Ivanova", "Anna", Some("+7 900 123"), None)).unwrap();
        teachers.add(&teacher("Smirnova", "Olga", None, Some("olga@kinder.org"))).unwrap();
        teachers.add(&teacher("Иванова", "Мария", None, None)).unwrap();

        let found = teachers.search("IVAN").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "Ivanova");

        let found = teachers.search("ИВАН").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "Иванова");

        let found = teachers.search("kinder.org").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Olga");

        let found = teachers.search("900").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Anna");

        assert!(teachers.search("nobody").unwrap().is_empty());
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_blank_search_returns_everyone(ctx: &mut TeacherTestContext) {
        let teachers = ctx.db.teachers();
        teachers.add(&teacher("Ivanova", "Anna", None, None)).unwrap();
        teachers.add(&teacher("Smirnova", "Olga", None, None)).unwrap();

        assert_eq!(teachers.search("").unwrap().len(), 2);
        assert_eq!(teachers.search("   ").unwrap().len(), 2);
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_search_wildcards_match_literally(ctx: &mut TeacherTestContext) {
        let teachers = ctx.db.teachers();
        teachers.add(&teacher("Ivanova", "Anna", None, Some("100%_sure@example.org"))).unwrap();
        teachers.add(&teacher("Smirnova", "Olga", None, Some("olga@example.org"))).unwrap();

        let found = teachers.search("%").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Anna");

        let found = teachers.search("_").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Anna");
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_delete_teacher_in_use_is_rejected(ctx: &mut TeacherTestContext) {
        let teacher_id = ctx.db.teachers().add(&teacher("Ivanova", "Anna", None, None)).unwrap();
        let group_id = ctx
            .db
            .groups()
            .add(&Group::new("Sunflowers", AgeCategory::Preschool, Some(teacher_id)))
            .unwrap();

        match ctx.db.teachers().delete(teacher_id) {
            Err(DbError::TeacherInUse { teacher_id: id, groups }) => {
                assert_eq!(id, teacher_id);
                assert_eq!(groups, vec!["Sunflowers".to_string()]);
            }
            other => panic!("expected TeacherInUse, got {:?}", other),
        }
        assert!(ctx.db.teachers().get_by_id(teacher_id).unwrap().is_some());

        // Once the group has no teacher the deletion goes through.
        let update = GroupUpdate {
            teacher_id: Some(None),
            ..Default::default()
        };
        ctx.db.groups().update(group_id, &update).unwrap();
        ctx.db.teachers().delete(teacher_id).unwrap();
        assert!(ctx.db.teachers().get_by_id(teacher_id).unwrap().is_none());
    }

    #[test]
    fn test_teacher_validation() {
        assert!(Teacher::new("Ivanova", "Anna").validate().is_ok());
        assert!(matches!(Teacher::new("  ", "Anna").validate(), Err(DbError::Validation(_))));
        assert!(matches!(Teacher::new("Ivanova", "").validate(), Err(DbError::Validation(_))));
    }

    #[test]
    fn test_update_rejects_blank_names() {
        let blank_last = TeacherUpdate {
            last_name: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(blank_last.validate(), Err(DbError::Validation(_))));

        let blank_first = TeacherUpdate {
            first_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank_first.validate().is_err());

        let phone_only = TeacherUpdate {
            phone: Some("+7 900".to_string()),
            ..Default::default()
        };
        assert!(phone_only.validate().is_ok());
        assert!(TeacherUpdate::default().validate().is_ok());
    }

    #[test_context(TeacherTestContext)]
    #[test]
    fn test_json_carries_full_name(ctx: &mut TeacherTestContext) {
        let teacher = Teacher {
            middle_name: Some("Petrovna".to_string()),
            ..Teacher::new("Ivanova", "Anna")
        };
        let id = ctx.db.teachers().add(&teacher).unwrap();
        let stored = ctx.db.teachers().get_by_id(id).unwrap().unwrap();

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["full_name"], "Ivanova Anna Petrovna");
        assert_eq!(value["id"], id);
        assert_eq!(value["last_name"], "Ivanova");
        assert!(value["phone"].is_null());
        assert!(value["created_at"].is_string());

        let back: Teacher = serde_json::from_value(value).unwrap();
        assert_eq!(back, stored);
    }
}

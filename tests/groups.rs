#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kindergarten::db::error::DbError;
    use kindergarten::db::kindergarten::KindergartenDb;
    use kindergarten::libs::child::{Child, Gender};
    use kindergarten::libs::group::{AgeCategory, Group, GroupUpdate};
    use kindergarten::libs::teacher::Teacher;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct GroupTestContext {
        _temp_dir: TempDir,
        db: KindergartenDb,
    }

    impl TestContext for GroupTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = KindergartenDb::open(temp_dir.path().join("kindergarten.db")).unwrap();
            GroupTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn enroll(db: &KindergartenDb, last: &str, first: &str, group_id: Option<i64>) -> i64 {
        let child = Child {
            group_id,
            ..Child::new(last, first, date(2020, 3, 1), Gender::Female, date(2023, 9, 1))
        };
        db.children().add(&child).unwrap()
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_group_crud_with_teacher(ctx: &mut GroupTestContext) {
        let teacher_id = ctx.db.teachers().add(&Teacher::new("Ivanova", "Anna")).unwrap();
        let id = ctx
            .db
            .groups()
            .add(&Group::new("Sunflowers", AgeCategory::Preschool, Some(teacher_id)))
            .unwrap();

        let group = ctx.db.groups().get_by_id(id).unwrap().unwrap();
        assert_eq!(group.name, "Sunflowers");
        assert_eq!(group.age_category, AgeCategory::Preschool);
        assert_eq!(group.teacher_id, Some(teacher_id));
        assert_eq!(group.teacher_name.as_deref(), Some("Ivanova Anna"));
        assert_eq!(group.children_count, 0);
        assert!(group.created_at.is_some());

        ctx.db.groups().delete(id).unwrap();
        assert!(ctx.db.groups().get_by_id(id).unwrap().is_none());
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_group_without_teacher(ctx: &mut GroupTestContext) {
        let id = ctx.db.groups().add(&Group::new("Bees", AgeCategory::Nursery, None)).unwrap();
        let group = ctx.db.groups().get_by_id(id).unwrap().unwrap();
        assert_eq!(group.teacher_id, None);
        assert_eq!(group.teacher_name, None);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_get_all_orders_by_name_and_counts_children(ctx: &mut GroupTestContext) {
        let groups = ctx.db.groups();
        let sunflowers = groups.add(&Group::new("Sunflowers", AgeCategory::Preschool, None)).unwrap();
        groups.add(&Group::new("Bees", AgeCategory::Nursery, None)).unwrap();
        enroll(&ctx.db, "Petrova", "Anya", Some(sunflowers));
        enroll(&ctx.db, "Sidorova", "Masha", Some(sunflowers));

        let all = groups.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Bees");
        assert_eq!(all[0].children_count, 0);
        assert_eq!(all[1].name, "Sunflowers");
        assert_eq!(all[1].children_count, 2);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_update_can_clear_teacher(ctx: &mut GroupTestContext) {
        let teacher_id = ctx.db.teachers().add(&Teacher::new("Ivanova", "Anna")).unwrap();
        let id = ctx
            .db
            .groups()
            .add(&Group::new("Sunflowers", AgeCategory::Senior, Some(teacher_id)))
            .unwrap();

        let rename = GroupUpdate {
            name: Some("Daisies".to_string()),
            ..Default::default()
        };
        assert!(ctx.db.groups().update(id, &rename).unwrap());
        let group = ctx.db.groups().get_by_id(id).unwrap().unwrap();
        assert_eq!(group.name, "Daisies");
        assert_eq!(group.age_category, AgeCategory::Senior);
        assert_eq!(group.teacher_id, Some(teacher_id));

        let clear = GroupUpdate {
            teacher_id: Some(None),
            ..Default::default()
        };
        assert!(ctx.db.groups().update(id, &clear).unwrap());
        let group = ctx.db.groups().get_by_id(id).unwrap().unwrap();
        assert_eq!(group.name, "Daisies");
        assert_eq!(group.teacher_id, None);
        assert_eq!(group.teacher_name, None);

        assert!(!ctx.db.groups().update(id, &GroupUpdate::default()).unwrap());
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_get_by_teacher(ctx: &mut GroupTestContext) {
        let anna = ctx.db.teachers().add(&Teacher::new("Ivanova", "Anna")).unwrap();
        let olga = ctx.db.teachers().add(&Teacher::new("Smirnova", "Olga")).unwrap();
        ctx.db.groups().add(&Group::new("Sunflowers", AgeCategory::Preschool, Some(anna))).unwrap();
        ctx.db.groups().add(&Group::new("Bees", AgeCategory::Nursery, Some(anna))).unwrap();
        ctx.db.groups().add(&Group::new("Stars", AgeCategory::Middle, Some(olga))).unwrap();

        let names: Vec<String> = ctx.db.groups().get_by_teacher(anna).unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Bees", "Sunflowers"]);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_delete_group_detaches_children(ctx: &mut GroupTestContext) {
        let id = ctx.db.groups().add(&Group::new("Sunflowers", AgeCategory::Preschool, None)).unwrap();
        let child_id = enroll(&ctx.db, "Petrova", "Anya", Some(id));

        ctx.db.groups().delete(id).unwrap();

        let child = ctx.db.children().get_by_id(child_id).unwrap().unwrap();
        assert_eq!(child.group_id, None);
        assert_eq!(child.group_name, None);
        assert_eq!(ctx.db.children().get_unassigned().unwrap().len(), 1);
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_search_groups(ctx: &mut GroupTestContext) {
        ctx.db.groups().add(&Group::new("Sunflowers", AgeCategory::Preschool, None)).unwrap();
        ctx.db.groups().add(&Group::new("Солнышко", AgeCategory::Junior, None)).unwrap();

        let found = ctx.db.groups().search("SUN").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Sunflowers");

        let found = ctx.db.groups().search("солн").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Солнышко");
    }

    #[test_context(GroupTestContext)]
    #[test]
    fn test_unknown_age_category_is_rejected_by_schema(ctx: &mut GroupTestContext) {
        let err = ctx
            .db
            .conn()
            .execute("INSERT INTO kinder_groups (name, age_category) VALUES ('Giants', 'giant')", [])
            .unwrap_err();
        assert!(DbError::from(err).is_constraint_violation());
    }

    #[test]
    fn test_age_category_parsing() {
        assert_eq!("preschool".parse::<AgeCategory>().unwrap(), AgeCategory::Preschool);
        assert_eq!("Nursery (1-3)".parse::<AgeCategory>().unwrap(), AgeCategory::Nursery);
        assert_eq!("старшая".parse::<AgeCategory>().unwrap(), AgeCategory::Senior);
        assert_eq!(AgeCategory::Middle.as_code(), "middle");
        assert!(matches!("giant".parse::<AgeCategory>(), Err(DbError::Validation(_))));
        assert!(Group::new(" ", AgeCategory::Junior, None).validate().is_err());

        let blank = GroupUpdate {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert!(matches!(blank.validate(), Err(DbError::Validation(_))));
        let detach = GroupUpdate {
            teacher_id: Some(None),
            ..Default::default()
        };
        assert!(detach.validate().is_ok());
    }
}

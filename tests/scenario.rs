//! End-to-end walk through a typical enrollment.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kindergarten::db::kindergarten::KindergartenDb;
    use kindergarten::libs::attendance::AttendanceStatus;
    use kindergarten::libs::child::{Child, Gender};
    use kindergarten::libs::group::{AgeCategory, Group};
    use kindergarten::libs::parent::Parent;
    use kindergarten::libs::teacher::Teacher;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ScenarioTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ScenarioTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("kindergarten.db");
            ScenarioTestContext { _temp_dir: temp_dir, path }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(ScenarioTestContext)]
    #[test]
    fn test_enrollment_survives_reopen(ctx: &mut ScenarioTestContext) {
        let db = KindergartenDb::open(&ctx.path).unwrap();

        let teacher_id = db.teachers().add(&Teacher::new("Ivanova", "Anna")).unwrap();
        let group_id = db
            .groups()
            .add(&Group::new("Sunflowers", AgeCategory::Preschool, Some(teacher_id)))
            .unwrap();
        let child_id = db
            .children()
            .add(&Child {
                group_id: Some(group_id),
                ..Child::new("Petrov", "Ivan", date(2019, 5, 1), Gender::Male, date(2024, 9, 1))
            })
            .unwrap();
        db.children()
            .add(&Child::new("Smirnova", "Olga", date(2020, 2, 3), Gender::Female, date(2024, 9, 1)))
            .unwrap();
        let mother_id = db.parents().add(&Parent::new("Petrova", "Elena")).unwrap();
        db.relations().add(mother_id, child_id, "mother").unwrap();
        db.attendance()
            .mark(child_id, date(2024, 9, 2), AttendanceStatus::Present, None)
            .unwrap();

        let members = db.children().get_by_group(group_id).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, Some(child_id));
        assert_eq!(members[0].group_name.as_deref(), Some("Sunflowers"));
        assert_eq!(members[0].age_category, Some(AgeCategory::Preschool));

        let found = db.children().search("Petr").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name(), "Petrov Ivan");

        let group = db.groups().get_by_id(group_id).unwrap().unwrap();
        assert_eq!(group.teacher_name.as_deref(), Some("Ivanova Anna"));
        assert_eq!(group.children_count, 1);

        db.close().unwrap();

        let db = KindergartenDb::open(&ctx.path).unwrap();
        let child = db.children().get_by_id(child_id).unwrap().unwrap();
        assert_eq!(child.birth_date, date(2019, 5, 1));
        assert_eq!(child.gender, Gender::Male);
        assert_eq!(child.enrollment_date, date(2024, 9, 1));
        assert_eq!(child.group_id, Some(group_id));

        let parents = db.relations().get_parents_by_child(child_id).unwrap();
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].relationship, "mother");

        let register = db.attendance().get_by_date(date(2024, 9, 2)).unwrap();
        assert_eq!(register.len(), 1);
        assert_eq!(register[0].status, AttendanceStatus::Present);

        let summary = db.statistics().get_statistics().unwrap();
        assert_eq!(summary.total_children, 2);
        assert_eq!(summary.total_groups, 1);
        assert_eq!(summary.total_teachers, 1);
        assert_eq!(summary.total_parents, 1);
        db.close().unwrap();
    }
}

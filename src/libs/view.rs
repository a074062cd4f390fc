use super::attendance::AttendanceRecord;
use super::child::{Child, ChildWithAge, RelatedChild};
use super::formatter::{format_age, format_date, or_dash};
use super::group::{Group, GroupStatistics};
use super::parent::{Parent, RelatedParent};
use super::summary::Summary;
use super::teacher::Teacher;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn teachers(teachers: &[Teacher]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PHONE", "EMAIL"]);
        for teacher in teachers {
            table.add_row(row![
                teacher.id.unwrap_or(0),
                teacher.full_name(),
                or_dash(teacher.phone.as_deref()),
                or_dash(teacher.email.as_deref())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn groups(groups: &[Group]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "AGE CATEGORY", "TEACHER", "CHILDREN"]);
        for group in groups {
            table.add_row(row![
                group.id.unwrap_or(0),
                group.name,
                group.age_category,
                or_dash(group.teacher_name.as_deref()),
                r->group.children_count
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn parents(parents: &[Parent]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PHONE", "EMAIL", "ADDRESS"]);
        for parent in parents {
            table.add_row(row![
                parent.id.unwrap_or(0),
                parent.full_name(),
                or_dash(parent.phone.as_deref()),
                or_dash(parent.email.as_deref()),
                or_dash(parent.address.as_deref())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn children(children: &[Child], date_format: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "BIRTH DATE", "GENDER", "GROUP", "ENROLLED"]);
        for child in children {
            table.add_row(row![
                child.id.unwrap_or(0),
                child.full_name(),
                format_date(&child.birth_date, date_format),
                child.gender,
                or_dash(child.group_name.as_deref()),
                format_date(&child.enrollment_date, date_format)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn children_with_age(children: &[ChildWithAge], date_format: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "BIRTH DATE", "AGE", "GROUP"]);
        for entry in children {
            table.add_row(row![
                entry.child.id.unwrap_or(0),
                entry.child.full_name(),
                format_date(&entry.child.birth_date, date_format),
                format_age(entry.age),
                or_dash(entry.child.group_name.as_deref())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn related_parents(parents: &[RelatedParent]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "RELATIONSHIP", "PHONE"]);
        for entry in parents {
            table.add_row(row![
                entry.parent.id.unwrap_or(0),
                entry.parent.full_name(),
                entry.relationship,
                or_dash(entry.parent.phone.as_deref())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn related_children(children: &[RelatedChild]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "RELATIONSHIP", "GROUP"]);
        for entry in children {
            table.add_row(row![
                entry.child.id.unwrap_or(0),
                entry.child.full_name(),
                entry.relationship,
                or_dash(entry.child.group_name.as_deref())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn attendance(records: &[AttendanceRecord], date_format: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "CHILD", "STATUS", "NOTES"]);
        for record in records {
            table.add_row(row![
                record.id.unwrap_or(0),
                format_date(&record.date, date_format),
                or_dash(record.child_name.as_deref()),
                record.status,
                or_dash(record.notes.as_deref())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn group_statistics(stats: &[GroupStatistics]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["GROUP", "AGE CATEGORY", "CHILDREN", "BOYS", "GIRLS"]);
        for group in stats {
            table.add_row(row![
                group.group_name,
                group.age_category,
                r->group.children_count,
                r->group.boys_count,
                r->group.girls_count
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &Summary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Children", r->summary.total_children]);
        table.add_row(row!["Groups", r->summary.total_groups]);
        table.add_row(row!["Teachers", r->summary.total_teachers]);
        table.add_row(row!["Parents", r->summary.total_parents]);
        table.add_row(row!["Average age", r->format!("{:.1}", summary.average_age)]);
        table.printstd();

        Ok(())
    }
}

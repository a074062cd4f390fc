//! Head counts for the statistics screen.

use crate::db::error::Result;
use crate::libs::age::average_age_on;
use crate::libs::group::GroupStatistics;
use crate::libs::summary::Summary;
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection};

const GROUP_STATISTICS: &str = "
    SELECT g.id, g.name, g.age_category,
           COUNT(c.id),
           COALESCE(SUM(CASE WHEN c.gender = 'M' THEN 1 ELSE 0 END), 0),
           COALESCE(SUM(CASE WHEN c.gender = 'F' THEN 1 ELSE 0 END), 0)
    FROM kinder_groups g
    LEFT JOIN children c ON c.group_id = g.id
    GROUP BY g.id, g.name, g.age_category
    ORDER BY g.name, g.id";
const TOTALS: &str = "
    SELECT
        (SELECT COUNT(*) FROM children),
        (SELECT COUNT(*) FROM kinder_groups),
        (SELECT COUNT(*) FROM teachers),
        (SELECT COUNT(*) FROM parents)";
const BIRTH_DATES: &str = "SELECT birth_date FROM children";

pub struct Statistics<'a> {
    conn: &'a Connection,
}

impl<'a> Statistics<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// One row per group, empty groups included with zero counts.
    pub fn get_group_statistics(&self) -> Result<Vec<GroupStatistics>> {
        let mut stmt = self.conn.prepare(GROUP_STATISTICS)?;
        let stats = stmt
            .query_map(params![], |row| {
                Ok(GroupStatistics {
                    group_id: row.get(0)?,
                    group_name: row.get(1)?,
                    age_category: row.get(2)?,
                    children_count: row.get(3)?,
                    boys_count: row.get(4)?,
                    girls_count: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(stats)
    }

    pub fn get_statistics(&self) -> Result<Summary> {
        self.get_statistics_on(Local::now().date_naive())
    }

    /// Totals with the average age computed as of `today`.
    pub fn get_statistics_on(&self, today: NaiveDate) -> Result<Summary> {
        let (total_children, total_groups, total_teachers, total_parents) =
            self.conn.query_row(TOTALS, params![], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?;

        let mut stmt = self.conn.prepare(BIRTH_DATES)?;
        let birth_dates = stmt
            .query_map(params![], |row| row.get::<_, NaiveDate>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Summary {
            total_children,
            total_groups,
            total_teachers,
            total_parents,
            average_age: average_age_on(&birth_dates, today),
        })
    }
}

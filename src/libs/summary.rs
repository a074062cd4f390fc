use serde::Serialize;

/// Kindergarten-wide counters shown on the statistics screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_children: i64,
    pub total_groups: i64,
    pub total_teachers: i64,
    pub total_parents: i64,
    /// Mean age of all children in years, one decimal; 0.0 when there are none.
    pub average_age: f64,
}

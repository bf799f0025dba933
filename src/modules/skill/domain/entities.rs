use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub id: i32,
    pub designation: String,
}

/// Aggregation row for the popularity ranking: how many CVs reference the
/// skill. Skills referenced by no CV never appear (inner-join semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillPopularity {
    pub id: i32,
    pub designation: String,
    pub cv_count: i64,
}

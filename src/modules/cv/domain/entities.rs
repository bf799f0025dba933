use serde::{Deserialize, Serialize};

use crate::skill::domain::entities::SkillInfo;
use crate::user::domain::entities::UserInfo;

/// A CV as the API speaks it. `skills` and `user` are `None` when the
/// caller did not ask for those relations; a loaded-but-empty skill set is
/// `Some(vec![])`, and a loaded CV without an owner carries `user_id: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvInfo {
    pub id: i32,
    pub name: String,
    pub firstname: String,
    pub age: i32,
    pub cin: String,
    pub job: String,
    pub path: String,
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// Which relations a CV query should eagerly load. Defaults to both,
/// matching the read paths that return the full entity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvRelations {
    pub skills: bool,
    pub user: bool,
}

impl Default for CvRelations {
    fn default() -> Self {
        Self {
            skills: true,
            user: true,
        }
    }
}

impl CvRelations {
    pub fn none() -> Self {
        Self {
            skills: false,
            user: false,
        }
    }

    /// Query-string toggles narrow the default set only when at least one
    /// toggle is present; absent both, the default {skills, user} applies.
    pub fn from_toggles(with_skills: Option<bool>, with_user: Option<bool>) -> Self {
        if with_skills.is_none() && with_user.is_none() {
            Self::default()
        } else {
            Self {
                skills: with_skills.unwrap_or(false),
                user: with_user.unwrap_or(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_relations_load_both() {
        assert_eq!(CvRelations::default(), CvRelations { skills: true, user: true });
    }

    #[test]
    fn test_toggles_narrow_the_set() {
        let rel = CvRelations::from_toggles(Some(true), None);
        assert!(rel.skills);
        assert!(!rel.user);

        let rel = CvRelations::from_toggles(None, None);
        assert!(rel.skills);
        assert!(rel.user);
    }
}

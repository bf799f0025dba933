use serde::{Deserialize, Serialize};

use crate::cv::domain::entities::CvInfo;

/// A user as exposed to callers: never carries password or salt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvs: Option<Vec<CvInfo>>,
}

/// The stored credential material, used by the authenticator only.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub salt: String,
    pub role: String,
    pub is_admin: bool,
}

impl UserCredentials {
    pub fn into_info(self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            is_admin: self.is_admin,
            cvs: None,
        }
    }
}

/// Aggregation row for the most-CVs ranking. Users without CVs appear with
/// a count of 0 (left-join semantics); ties break by id ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCvCount {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub cv_count: i64,
}

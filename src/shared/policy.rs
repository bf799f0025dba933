use sea_orm::sea_query::IntoCondition;
use sea_orm::{ColumnTrait, Condition};

/// The authenticated caller, as established by the token extractor.
/// Repository queries trust this as-is.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: i32,
    pub role: String,
    pub is_admin: bool,
}

impl Principal {
    pub fn new(id: i32, role: impl Into<String>) -> Self {
        let role = role.into();
        let is_admin = role == "admin";
        Self { id, role, is_admin }
    }
}

/// Owner-scoped visibility: admins see every row, everyone else only rows
/// whose owner column equals their own id. All CV and user listings go
/// through this one predicate so the rule cannot drift per endpoint.
pub fn visibility_scope<C>(principal: &Principal, owner_col: C) -> Condition
where
    C: ColumnTrait,
{
    if principal.is_admin {
        Condition::all()
    } else {
        owner_col.eq(principal.id).into_condition()
    }
}

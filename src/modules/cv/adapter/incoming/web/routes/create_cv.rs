use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::ports::outgoing::CreateCvData;
use crate::cv::application::use_cases::create_cv::CreateCvError;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{
    collect, deserialize_id_list, deserialize_lenient_i32, require_non_empty,
    require_non_negative, to_field_messages, FieldError,
};
use crate::AppState;

/// Creation payload. Multipart clients send everything as strings, so the
/// numeric and list fields accept string-coerced forms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCvRequest {
    pub name: Option<String>,
    pub firstname: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub age: Option<i32>,
    pub cin: Option<String>,
    pub job: Option<String>,
    pub path: Option<String>,
    #[serde(deserialize_with = "deserialize_id_list")]
    pub skills: Option<Vec<i32>>,
}

impl CreateCvRequest {
    /// Upload requests carry the stored file location instead of a `path`
    /// payload field.
    pub fn into_data(self, path_override: Option<String>) -> Result<CreateCvData, Vec<FieldError>> {
        let name = self.name.unwrap_or_default();
        let firstname = self.firstname.unwrap_or_default();
        let cin = self.cin.unwrap_or_default();
        let job = self.job.unwrap_or_default();
        let path = path_override.or(self.path).unwrap_or_default();

        let mut checks = vec![
            require_non_empty("name", &name),
            require_non_empty("firstname", &firstname),
            require_non_empty("cin", &cin),
            require_non_empty("job", &job),
            require_non_empty("path", &path),
        ];

        let age = match self.age {
            Some(age) => {
                checks.push(require_non_negative("age", age));
                age
            }
            None => {
                checks.push(Some(FieldError::new("age", "age is required")));
                0
            }
        };

        collect(checks)?;

        Ok(CreateCvData {
            name,
            firstname,
            age,
            cin,
            job,
            path,
            skills: self.skills,
        })
    }
}

#[post("/api/cvs")]
pub async fn create_cv_handler(
    principal: AuthenticatedPrincipal,
    req: web::Json<CreateCvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_data = match req.into_inner().into_data(None) {
        Ok(data) => data,
        Err(errors) => return ApiResponse::validation_error(to_field_messages(errors)),
    };

    match data
        .create_cv_use_case
        .execute(&principal.0, cv_data)
        .await
    {
        Ok(cv) => ApiResponse::created(cv),
        Err(CreateCvError::UserNotFound(id)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(CreateCvError::RepositoryError(e)) => {
            error!("Repository error creating CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}

//! Candidate email lookup handler.
//!
//! ```text
//! POST /api/find-email {"firstName":"Jane","lastName":"Smith","domain":"example.org"}
//! ```

use actix_web::{post, web};
use email_patterns::{EmailCandidate, GenerationRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::EmailCandidateSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/find-email`.
///
/// Every field is required; absent or `null` fields are rejected with the
/// same message as empty ones.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindEmailRequest {
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[schema(example = "Smith")]
    pub last_name: Option<String>,
    #[schema(example = "example.org")]
    pub domain: Option<String>,
}

impl From<FindEmailRequest> for GenerationRequest {
    fn from(value: FindEmailRequest) -> Self {
        Self {
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            domain: value.domain.unwrap_or_default(),
        }
    }
}

/// Successful response for `POST /api/find-email`.
#[derive(Debug, Serialize, ToSchema)]
pub struct FindEmailResponse {
    /// One candidate per catalogue pattern, in catalogue order.
    #[schema(value_type = Vec<EmailCandidateSchema>)]
    pub results: Vec<EmailCandidate>,
}

/// Suggest likely email addresses for a person at a domain.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use email_finder::inbound::http::find_email::find_email;
///
/// let app = App::new().service(web::scope("/api").service(find_email));
/// ```
#[utoipa::path(
    post,
    path = "/api/find-email",
    request_body = FindEmailRequest,
    responses(
        (status = 200, description = "Candidate addresses", body = FindEmailResponse),
        (status = 400, description = "Missing field or invalid domain", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["emails"],
    operation_id = "findEmail"
)]
#[post("/find-email")]
pub async fn find_email(
    state: web::Data<HttpState>,
    payload: web::Json<FindEmailRequest>,
) -> ApiResult<web::Json<FindEmailResponse>> {
    let request = GenerationRequest::from(payload.into_inner());
    let results = state.email_finder.find_candidates(&request).await?;
    Ok(web::Json(FindEmailResponse { results }))
}

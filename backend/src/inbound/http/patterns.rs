//! Pattern catalogue listing.
//!
//! ```text
//! GET /api/patterns
//! ```

use actix_web::{get, web};
use email_patterns::NamePattern;
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::schemas::NamePatternSchema;
use crate::inbound::http::state::HttpState;

/// Response for `GET /api/patterns`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PatternsResponse {
    /// Patterns in the order candidates are generated.
    #[schema(value_type = Vec<NamePatternSchema>)]
    pub patterns: Vec<NamePattern>,
}

/// List the naming conventions used to build candidates.
#[utoipa::path(
    get,
    path = "/api/patterns",
    responses(
        (status = 200, description = "Pattern catalogue", body = PatternsResponse)
    ),
    tags = ["emails"],
    operation_id = "listPatterns"
)]
#[get("/patterns")]
pub async fn list_patterns(state: web::Data<HttpState>) -> web::Json<PatternsResponse> {
    web::Json(PatternsResponse {
        patterns: state.email_finder.patterns(),
    })
}

//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the email and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], which describe the
//! generation crate's types without making it depend on utoipa.
//!
//! The document backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::find_email::{FindEmailRequest, FindEmailResponse};
use crate::inbound::http::patterns::PatternsResponse;
use crate::inbound::http::schemas::{ConfidenceTierSchema, EmailCandidateSchema, NamePatternSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Email finder API",
        description = "Suggests likely email addresses for a person at an organisation's domain.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::find_email::find_email,
        crate::inbound::http::patterns::list_patterns,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        FindEmailRequest,
        FindEmailResponse,
        PatternsResponse,
        ErrorBody,
        EmailCandidateSchema,
        NamePatternSchema,
        ConfidenceTierSchema,
    )),
    tags(
        (name = "emails", description = "Candidate address generation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! OpenAPI document for the public routes.

use utoipa::OpenApi;

use super::handlers::{self, AchievementsResponse, MessageResponse, SiteResponse};
use crate::content::{AchievementRecord, Profile, SiteContent, Tingkat};
use crate::diagnostics::StatusReport;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "KIR MAN 1 HST API",
        description = "API untuk situs Komunitas Karya Ilmiah Remaja MAN 1 HST"
    ),
    paths(
        handlers::root,
        handlers::hello,
        handlers::test_database,
        handlers::site_content,
        handlers::achievements,
    ),
    components(schemas(
        MessageResponse,
        SiteResponse,
        AchievementsResponse,
        SiteContent,
        Profile,
        AchievementRecord,
        Tingkat,
        StatusReport,
    )),
    tags(
        (name = "general", description = "Greetings"),
        (name = "content", description = "Static site content"),
        (name = "diagnostics", description = "Backend and database status")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_public_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/api/hello", "/test", "/api/site", "/api/achievements"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(doc.info.title, "KIR MAN 1 HST API");
    }
}

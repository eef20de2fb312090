use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Adboard API",
        version = "0.1.0",
        description = "Admin backend for managing ads behind bearer-token authentication."
    ),
    paths(
        crate::routes::login,
        crate::routes::seed,
        crate::routes::list_ads,
        crate::routes::create_ad,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CredentialsRequest,
        crate::dto::LoginResponse,
        crate::dto::MessageResponse,
        crate::dto::CreateAdRequest,
        crate::dto::AdResponse,
        crate::dto::AdListResponse,
        crate::dto::CreateAdResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "admin", description = "Admin login and bootstrap"),
        (name = "ads", description = "Ad management"),
        (name = "system", description = "Health and system status"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /api/admin/login."))
                        .build(),
                ),
            );
        }
    }
}

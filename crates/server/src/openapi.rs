use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct DriverDoc {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub position: i32,
    pub year: i32,
}

#[derive(ToSchema)]
pub struct NewDriverDoc {
    pub name: String,
    pub team: String,
    pub position: i32,
    pub year: i32,
}

#[derive(ToSchema)]
pub struct EnvelopeDoc {
    pub message: String,
    pub status: u16,
    #[schema(value_type = Object, nullable)]
    pub data: Option<serde_json::Value>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::drivers::search,
        crate::routes::drivers::create,
        crate::routes::drivers::update,
        crate::routes::drivers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            DriverDoc,
            NewDriverDoc,
            EnvelopeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "drivers")
    )
)]
pub struct ApiDoc;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct PersonDoc {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub is_active: bool,
    pub joined_date: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct CreatePersonDoc {
    pub name: String,
    pub age: u32,
    pub is_active: bool,
    pub joined_date: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdatePersonDoc {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub is_active: Option<bool>,
    pub joined_date: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::resources::list,
        crate::routes::resources::create,
        crate::routes::resources::get,
        crate::routes::resources::update,
        crate::routes::resources::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PersonDoc,
            CreatePersonDoc,
            UpdatePersonDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "resources")
    )
)]
pub struct ApiDoc;

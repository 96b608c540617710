use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored user. `password` is only present when one was supplied.
#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

/// Create/update body. Under the merge update policy every field is optional.
#[derive(ToSchema)]
pub struct NewUserDoc {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::delete,
    ),
    components(
        schemas(
            HealthResponse,
            UserDoc,
            NewUserDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users")
    )
)]
pub struct ApiDoc;

//! User resource handlers.
//!
//! ```text
//! GET    /api/products/
//! POST   /api/products/ {"username":"alice","email":"a@x.com","net_worth":100.5,
//!                        "accounts":["checking"],"credit_score":700,"budget":["rent"]}
//! GET    /api/products/{id}
//! PUT    /api/products/{id}
//! DELETE /api/products/{id}
//! ```

use actix_web::{HttpResponse, delete, get, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, RequestDeadline, User, UserFields, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::plain_text_response;
use crate::inbound::http::state::HttpState;

/// Request body for creating or replacing a user.
///
/// Omitted and `null` fields take their zero value, so a `PUT` that leaves
/// out `email` clears it. Any `id` in the body is ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[schema(example = 100.5)]
    pub net_worth: Option<f64>,
    #[schema(example = json!(["checking"]))]
    pub accounts: Option<Vec<String>>,
    #[schema(example = 700)]
    pub credit_score: Option<i32>,
    #[schema(example = json!(["rent"]))]
    pub budget: Option<Vec<String>>,
}

impl From<UserPayload> for UserFields {
    fn from(value: UserPayload) -> Self {
        Self {
            username: value.username.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            net_worth: value.net_worth.unwrap_or_default(),
            accounts: value.accounts.unwrap_or_default(),
            credit_score: value.credit_score.unwrap_or_default(),
            budget: value.budget.unwrap_or_default(),
        }
    }
}

/// Body returned by a successful create.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "success")]
    pub message: String,
}

/// JSON extractor configuration turning unparseable bodies into 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request("request body is not a valid user")
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).map_err(|err| {
        Error::invalid_request(format!("invalid user id: {err}")).with_details(json!({
            "field": "id",
            "value": raw,
            "code": "invalid_id",
        }))
    })
}

fn into_internal(error: Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => error,
        ErrorCode::InvalidRequest | ErrorCode::NotFound => Error::internal(error.message()),
    }
}

/// List every user.
///
/// Any storage fault while listing is reported as 404.
#[utoipa::path(
    get,
    path = "/api/products/",
    responses(
        (status = 200, description = "All users, possibly none", body = [User]),
        (status = 404, description = "Users could not be listed", body = Error)
    ),
    tags = ["users"],
    operation_id = "getAllUsers"
)]
pub async fn get_all_users(
    state: web::Data<HttpState>,
    deadline: RequestDeadline,
) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.get_all_users(&deadline).await?;
    Ok(web::Json(users))
}

/// Fetch one user.
///
/// Storage faults return the raw error text as a plain-text 500 body.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "24 character hex user id")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    deadline: RequestDeadline,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    match state.users_query.get_user_by_id(&deadline, &id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(error) if matches!(error.code(), ErrorCode::InternalError) => {
            Ok(plain_text_response(&error))
        }
        Err(error) => Err(error),
    }
}

/// Create a user under a freshly generated id.
///
/// The generated id is not returned.
#[utoipa::path(
    post,
    path = "/api/products/",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Created", body = CreatedResponse),
        (status = 400, description = "Malformed body", body = Error),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    deadline: RequestDeadline,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let mut user = User::new(UserId::random(), payload.into_inner().into());
    state
        .users_command
        .create_user(&deadline, &mut user)
        .await
        .map_err(into_internal)?;
    debug!(user_id = %user.id, "user created");
    Ok(HttpResponse::Created().json(CreatedResponse {
        message: "success".to_owned(),
    }))
}

/// Replace every updatable field of a user.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "24 character hex user id")),
    request_body = UserPayload,
    responses(
        (status = 202, description = "Updated user", body = User),
        (status = 400, description = "Malformed id or body", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    deadline: RequestDeadline,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = state
        .users_command
        .update_user(&deadline, &id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Accepted().json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "24 character hex user id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    deadline: RequestDeadline,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    state.users_command.delete_user_by_id(&deadline, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

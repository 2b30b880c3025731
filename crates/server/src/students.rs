use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use service::errors::ServiceError;
use service::pagination::PageRequest;
use service::student::{PaginatedStudents, Student};

use crate::{errors::ApiError, state::AppState};

/// Raw query parameters; an absent or blank value falls back to the default.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub size: Option<String>,
}

impl ListQuery {
    pub fn page_request(&self) -> Result<PageRequest, std::num::ParseIntError> {
        Ok(PageRequest::new(
            parse_or(self.page.as_deref(), PageRequest::DEFAULT_PAGE)?,
            parse_or(self.size.as_deref(), PageRequest::DEFAULT_SIZE)?,
        ))
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> Result<i64, std::num::ParseIntError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse(),
    }
}

// A non-numeric page or size is a client error (400). A numeric but
// non-positive one is rejected by the service and reported as a 500.
#[utoipa::path(
    get, path = "/students", tag = "students",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of students", body = crate::openapi::PaginatedStudentsDoc),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 500, description = "Failed to retrieve students")
    )
)]
pub async fn list_students(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<PaginatedStudents>, ApiError> {
    let req = q.page_request().map_err(|e| {
        warn!(err = %e, page = ?q.page, size = ?q.size, "unparsable pagination parameters");
        ApiError::message(StatusCode::BAD_REQUEST, "invalid pagination parameters")
    })?;
    match state.students.list_page(req.page, req.size).await {
        Ok(resp) => { info!(count = resp.students.len(), page = req.page, size = req.size, "list students"); Ok(Json(resp)) }
        Err(e) => {
            error!(err = %e, "list students failed");
            Err(ApiError::message(StatusCode::INTERNAL_SERVER_ERROR, "failed to retrieve students"))
        }
    }
}

#[utoipa::path(
    get, path = "/students/{id}", tag = "students",
    params(("id" = String, Path, description = "Student UUID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 404, description = "Not Found or invalid UUID")
    )
)]
pub async fn get_student(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Student>, ApiError> {
    let id = Uuid::parse_str(&raw).map_err(|_| ApiError::message(StatusCode::NOT_FOUND, "invalid UUID"))?;
    match state.students.fetch_by_id(id).await {
        Ok(s) => Ok(Json(s)),
        Err(e) => {
            match e {
                ServiceError::NotFound(_) => debug!(%id, "student not found"),
                _ => error!(%id, err = %e, "get student failed"),
            }
            Err(ApiError::new(StatusCode::NOT_FOUND, json!({ "message": "student not found", "student_id": id })))
        }
    }
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = crate::openapi::NewStudentDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StudentDoc),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Failed to create student")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    body: Result<Json<Student>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let Json(input) = body.map_err(|e| {
        warn!(err = %e, "rejected student body");
        ApiError::error(StatusCode::BAD_REQUEST, "invalid request")
    })?;
    match state.students.add(input).await {
        Ok(created) => { info!(id = %created.id, "created student"); Ok((StatusCode::CREATED, Json(created))) }
        Err(e) => {
            error!(err = %e, "create student failed");
            Err(ApiError::error(StatusCode::INTERNAL_SERVER_ERROR, "failed to create student"))
        }
    }
}

#[utoipa::path(
    delete, path = "/students/{id}", tag = "students",
    params(("id" = String, Path, description = "Student UUID")),
    responses(
        (status = 200, description = "Deleted (also when no such student existed)"),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Delete failed")
    )
)]
pub async fn delete_student(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = Uuid::parse_str(&raw).map_err(|_| ApiError::error(StatusCode::BAD_REQUEST, "invalid UUID"))?;
    match state.students.remove(id).await {
        Ok(()) => { info!(%id, "deleted student"); Ok(Json(json!({ "message": "Student deleted successfully" }))) }
        Err(e) => {
            error!(%id, err = %e, "delete student failed");
            Err(ApiError::error(StatusCode::NOT_FOUND, "student not found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, size: Option<&str>) -> ListQuery {
        ListQuery { page: page.map(Into::into), size: size.map(Into::into) }
    }

    #[test]
    fn missing_or_blank_params_use_defaults() {
        assert_eq!(query(None, None).page_request().unwrap(), PageRequest::new(1, 10));
        assert_eq!(query(Some(""), Some(" ")).page_request().unwrap(), PageRequest::new(1, 10));
    }

    #[test]
    fn explicit_params_pass_through_unvalidated() {
        assert_eq!(query(Some("3"), Some("25")).page_request().unwrap(), PageRequest::new(3, 25));
        assert_eq!(query(Some("0"), Some("-1")).page_request().unwrap(), PageRequest::new(0, -1));
    }

    #[test]
    fn garbage_params_fail_to_parse() {
        assert!(query(Some("abc"), None).page_request().is_err());
        assert!(query(None, Some("1.5")).page_request().is_err());
    }
}

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StudentDoc {
    /// UUID assigned on creation
    pub id: String,
    pub name: String,
    pub surname: String,
}

#[derive(ToSchema)]
pub struct NewStudentDoc { pub name: String, pub surname: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PageDoc {
    pub page_number: i64,
    pub page_size: i64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(ToSchema)]
pub struct PaginatedStudentsDoc {
    pub students: Vec<StudentDoc>,
    pub page: PageDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::students::list_students,
        crate::students::get_student,
        crate::students::create_student,
        crate::students::delete_student,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            NewStudentDoc,
            PageDoc,
            PaginatedStudentsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;

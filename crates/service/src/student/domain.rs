use serde::{Deserialize, Serialize};

use crate::pagination::Page;

/// Wire-facing student. The id travels as a string; on create it is ignored
/// and replaced by a service-generated UUID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
}

impl Student {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self { id: String::new(), name: name.into(), surname: surname.into() }
    }
}

/// One page of students plus its descriptor. `Default` is the zero-valued
/// listing: no rows and an all-zero descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginatedStudents {
    pub students: Vec<Student>,
    pub page: Page,
}

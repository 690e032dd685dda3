//! Query parameter types shared by the JSON and page handlers.
//!
//! Parameter names keep the PascalCase spelling existing links and forms use.

use serde::Deserialize;

/// `?SearchKey=` on the teacher listing endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchKeyParams {
    #[serde(rename = "SearchKey")]
    pub search_key: Option<String>,
}

/// `?SearchKey=&HireDate=` on the teacher list page.
///
/// `HireDate` stays a raw string so an empty form field means "no filter"
/// instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct TeacherListParams {
    #[serde(rename = "SearchKey")]
    pub search_key: Option<String>,
    #[serde(rename = "HireDate")]
    pub hire_date: Option<String>,
}

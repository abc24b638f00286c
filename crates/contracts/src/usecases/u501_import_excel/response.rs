use serde::{Deserialize, Serialize};

/// Result of `POST /upload-excel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportExcelResponse {
    #[serde(default)]
    pub message: String,
    /// Number of products created or updated by the import
    pub products_count: u32,
    /// Number of day rows written across all products
    pub days_count: u32,
}

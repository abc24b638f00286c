//! Pre-flight checks for the spreadsheet upload. A rejected file never
//! reaches the network.

use crate::shared::error::ApiError;

/// Uploads must be strictly smaller than 10 MiB
pub const MAX_IMPORT_BYTES: u64 = 10 * 1024 * 1024;

const EXCEL_MIME_TYPES: [&str; 2] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];

const EXCEL_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

pub fn is_excel_file(name: &str, mime: &str) -> bool {
    let name = name.to_lowercase();
    EXCEL_MIME_TYPES.contains(&mime) || EXCEL_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

pub fn validate_import_file(name: &str, mime: &str, size: u64) -> Result<(), ApiError> {
    if !is_excel_file(name, mime) {
        return Err(ApiError::ValidationRejected(
            "Please select an Excel file (.xlsx or .xls)".to_string(),
        ));
    }
    if size >= MAX_IMPORT_BYTES {
        return Err(ApiError::ValidationRejected(
            "File size cannot exceed 10MB".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    #[test]
    fn test_accepts_excel_by_extension_or_type() {
        assert!(validate_import_file("data.xlsx", "", 1024).is_ok());
        assert!(validate_import_file("DATA.XLS", "", 1024).is_ok());
        assert!(validate_import_file("export", XLSX, 1024).is_ok());
        assert!(validate_import_file("export.bin", "application/vnd.ms-excel", 1).is_ok());
    }

    #[test]
    fn test_rejects_other_files() {
        let err = validate_import_file("data.csv", "text/csv", 1024).unwrap_err();
        assert!(matches!(err, ApiError::ValidationRejected(_)));
        assert!(validate_import_file("xlsx", "", 10).is_err());
    }

    #[test]
    fn test_size_limit() {
        assert!(validate_import_file("data.xlsx", XLSX, MAX_IMPORT_BYTES - 1).is_ok());
        assert_eq!(
            validate_import_file("data.xlsx", XLSX, MAX_IMPORT_BYTES),
            Err(ApiError::ValidationRejected(
                "File size cannot exceed 10MB".to_string()
            ))
        );
    }
}

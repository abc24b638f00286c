use contracts::usecases::u501_import_excel::ImportExcelResponse;
use web_sys::{File, FormData};

use super::validation::validate_import_file;
use crate::shared::error::ApiError;
use crate::shared::http::post_form;
use crate::system::auth::Session;

/// Validate `file` and upload it to `POST /upload-excel`
pub async fn upload_excel(session: &Session, file: File) -> Result<ImportExcelResponse, ApiError> {
    validate_import_file(&file.name(), &file.type_(), file.size() as u64)?;

    let form_data = FormData::new()
        .map_err(|e| ApiError::RequestFailed(format!("Failed to create form data: {e:?}")))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| ApiError::RequestFailed(format!("Failed to attach file: {e:?}")))?;

    post_form(session, "/upload-excel", form_data).await
}

use super::fetcher::{FetchPayload, FetchPlan};
use crate::domain::a001_product::api as product_api;
use crate::shared::error::ApiError;
use crate::system::auth::Session;

/// Run the request(s) for `plan` with the session credential.
pub async fn execute(session: &Session, plan: &FetchPlan) -> Result<FetchPayload, ApiError> {
    match plan {
        FetchPlan::Nothing => Err(ApiError::ValidationRejected(
            "Nothing selected".to_string(),
        )),
        FetchPlan::Single(id) => product_api::get_product(session, id)
            .await
            .map(FetchPayload::Single),
        FetchPlan::Compare(ids) => product_api::compare_products(session, ids)
            .await
            .map(FetchPayload::Compare),
    }
}

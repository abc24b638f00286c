//! Request helpers shared by every API module.
//!
//! Authenticated calls take the [`Session`] explicitly, attach its bearer
//! credential and tear the session down on 401. Every call is bounded by
//! `api.request_timeout_ms`.

use std::future::Future;

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use super::api_utils::{api_url, bearer};
use super::config::config;
use super::error::{check_public_status, check_status, ApiError};
use crate::system::auth::session::Session;

/// Resolve `future`, or fail with a timeout after `timeout_ms`.
pub async fn with_timeout<F, T>(future: F, timeout_ms: u32) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    race_timeout(future, TimeoutFuture::new(timeout_ms), timeout_ms).await
}

/// Whichever of `future` and `timer` finishes first; `future` wins a tie.
async fn race_timeout<F, D, T>(future: F, timer: D, timeout_ms: u32) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    pin_mut!(future);
    pin_mut!(timer);
    match select(future, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::timeout(timeout_ms)),
    }
}

/// Status check for an authenticated call; a 401 tears the session down.
fn classify_authorized(session: &Session, status: u16) -> Result<(), ApiError> {
    check_status(status).map_err(|err| {
        if err.is_auth_expired() {
            session.expire();
        }
        err
    })
}

fn authorized(session: &Session, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = session.token().ok_or(ApiError::AuthExpired)?;
    Ok(builder.header("Authorization", &bearer(&token)))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(format!("Failed to send request: {}", e)))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::RequestFailed(format!("Failed to parse response: {}", e)))
}

async fn send_authorized<T: DeserializeOwned>(
    session: &Session,
    request: Request,
) -> Result<T, ApiError> {
    let response = send(request).await?;
    classify_authorized(session, response.status())?;
    decode(response).await
}

/// `GET <path>` with the session credential, decoding a JSON body.
pub async fn get_json<T: DeserializeOwned>(session: &Session, path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let request = authorized(session, Request::get(&url))?
        .build()
        .map_err(|e| ApiError::RequestFailed(format!("Failed to build request: {}", e)))?;
    with_timeout(
        send_authorized(session, request),
        config().api.request_timeout_ms,
    )
    .await
}

/// Multipart `POST <path>` with the session credential.
///
/// The browser sets the multipart boundary header itself.
pub async fn post_form<T: DeserializeOwned>(
    session: &Session,
    path: &str,
    form: FormData,
) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("POST {} (multipart)", url);
    let request = authorized(session, Request::post(&url))?
        .body(form)
        .map_err(|e| ApiError::RequestFailed(format!("Failed to build request: {}", e)))?;
    with_timeout(
        send_authorized(session, request),
        config().api.request_timeout_ms,
    )
    .await
}

/// Unauthenticated JSON `POST <path>` (login, register).
pub async fn post_json_public<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("POST {}", url);
    let request = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::RequestFailed(format!("Failed to serialize request: {}", e)))?;
    with_timeout(
        async move {
            let response = send(request).await?;
            check_public_status(response.status())?;
            decode(response).await
        },
        config().api.request_timeout_ms,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::{pending, ready};
    use futures_util::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_session() -> (Session, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let session = Session::new(Some("tok".to_string()), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (session, fired)
    }

    #[test]
    fn test_unauthorized_expires_session_once() {
        let (session, fired) = counting_session();

        assert_eq!(classify_authorized(&session, 401), Err(ApiError::AuthExpired));
        assert!(!session.is_authenticated());

        // A second in-flight call failing the same way does not fire again
        assert_eq!(classify_authorized(&session, 401), Err(ApiError::AuthExpired));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_other_failures_keep_session() {
        let (session, fired) = counting_session();

        assert_eq!(
            classify_authorized(&session, 500),
            Err(ApiError::RequestFailed("HTTP 500".to_string()))
        );
        assert_eq!(classify_authorized(&session, 200), Ok(()));
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_timer_firing_first_is_request_failed() {
        let result = race_timeout(pending::<Result<u8, ApiError>>(), ready(()), 15000)
            .now_or_never()
            .unwrap();
        assert_eq!(
            result,
            Err(ApiError::RequestFailed("timed out after 15000 ms".to_string()))
        );
    }

    #[test]
    fn test_response_before_timer() {
        let result = race_timeout(ready(Ok::<u8, ApiError>(7)), pending::<()>(), 15000)
            .now_or_never()
            .unwrap();
        assert_eq!(result, Ok(7));

        let failed = race_timeout(
            ready(Err::<u8, ApiError>(ApiError::AuthExpired)),
            ready(()),
            15000,
        )
        .now_or_never()
        .unwrap();
        assert_eq!(failed, Err(ApiError::AuthExpired));
    }
}

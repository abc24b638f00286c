//! Bearer credential shared by every authenticated call.
//!
//! The session is an explicit value handed to the API layer. Expiry (a 401
//! anywhere) is reported through the `on_expired` callback injected at
//! construction, so nothing here touches the DOM or navigation.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type ExpiredCallback = Box<dyn Fn() + Send + Sync>;

struct SessionInner {
    token: Mutex<Option<String>>,
    on_expired: ExpiredCallback,
}

#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    pub fn new(token: Option<String>, on_expired: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                token: Mutex::new(token.filter(|t| !t.is_empty())),
                on_expired: Box::new(on_expired),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.inner
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn token(&self) -> Option<String> {
        self.lock().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    /// Install a freshly issued credential (login).
    pub fn attach(&self, token: String) {
        *self.lock() = Some(token);
    }

    /// Drop the credential without signalling expiry (logout, failed restore).
    pub fn clear(&self) {
        self.lock().take();
    }

    /// Tear the session down after a 401.
    ///
    /// Idempotent: only the call that actually removes a credential fires
    /// `on_expired`, so several overlapping 401s produce a single reset.
    /// Returns whether this call performed the teardown.
    pub fn expire(&self) -> bool {
        let had_token = self.lock().take().is_some();
        if had_token {
            log::info!("Session expired, credential cleared");
            (self.inner.on_expired)();
        }
        had_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_session(token: Option<&str>) -> (Session, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let session = Session::new(token.map(str::to_string), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (session, fired)
    }

    #[test]
    fn test_attach_and_clear() {
        let (session, fired) = counting_session(None);
        assert!(!session.is_authenticated());

        session.attach("tok".to_string());
        assert_eq!(session.token().as_deref(), Some("tok"));

        session.clear();
        assert!(session.token().is_none());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_concurrent_expiry_fires_once() {
        let (session, fired) = counting_session(Some("tok"));
        let other_handle = session.clone();

        assert!(session.expire());
        assert!(!other_handle.expire());

        assert!(!session.is_authenticated());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_expire_without_credential_is_noop() {
        let (session, fired) = counting_session(None);
        assert!(!session.expire());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_token_is_not_a_credential() {
        let (session, _) = counting_session(Some(""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_new_login_after_expiry() {
        let (session, fired) = counting_session(Some("old"));
        session.expire();
        session.attach("new".to_string());
        assert_eq!(session.token().as_deref(), Some("new"));
        assert!(session.expire());
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}

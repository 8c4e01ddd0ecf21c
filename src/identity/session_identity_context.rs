use super::IdentityContext;
use std::sync::{PoisonError, RwLock};

///
/// Identity of a single logical session that can be switched between users.
///
#[derive(Default)]
pub struct SessionIdentityContext {
    current_user_id: RwLock<Option<String>>,
}

impl SessionIdentityContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch_to(&self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        tracing::debug!(user_id, "switching session user");

        *self
            .current_user_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(user_id);
    }

    pub fn log_out(&self) {
        tracing::debug!("logging out session user");

        *self
            .current_user_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl IdentityContext for SessionIdentityContext {
    fn current_user_id(&self) -> Option<String> {
        self.current_user_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nobody_logged_in_by_default() {
        let identity = SessionIdentityContext::new();

        assert_eq!(identity.current_user_id(), None);
    }

    #[test]
    fn switch_to_replaces_user() {
        let identity = SessionIdentityContext::new();

        identity.switch_to("student");
        assert_eq!(identity.current_user_id().as_deref(), Some("student"));

        identity.switch_to("instructor");
        assert_eq!(identity.current_user_id().as_deref(), Some("instructor"));
    }

    #[test]
    fn log_out_clears_user() {
        let identity = SessionIdentityContext::new();
        identity.switch_to("student");

        identity.log_out();

        assert_eq!(identity.current_user_id(), None);
    }
}

use crate::identity::IdentityContext;
use std::{ops::Deref, sync::Arc};

///
/// Struct with user information.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

///
/// User information retrieved from his JWT.
///
pub struct InnerUser {
    pub id: String,
    pub roles: Vec<String>,
}

impl User {
    pub fn new(id: String, roles: Vec<String>) -> Self {
        Self {
            inner: Arc::new(InnerUser { id, roles }),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

///
/// Authenticated user of a request is the identity
/// every inbox operation of that request acts as.
///
impl IdentityContext for User {
    fn current_user_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

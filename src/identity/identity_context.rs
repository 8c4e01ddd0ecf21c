#[cfg_attr(test, mockall::automock)]
pub trait IdentityContext: Send + Sync {
    ///
    /// ### Returns
    /// id of the user acting in the current request or session,
    /// None when nobody is logged in
    ///
    fn current_user_id(&self) -> Option<String>;
}

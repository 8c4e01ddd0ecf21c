mod dto;
mod error;
mod jwt_authorization_validator;
mod role;
mod util;

pub use dto::User;
pub use error::*;
pub use jwt_authorization_validator::*;
pub use role::*;
pub use util::*;

///
/// Validates that user has all required roles.
///
/// ### Errors
/// - [MissingRoleError] when any of the roles is missing
///
pub fn require_all_roles(user: &User, roles: &[Role]) -> Result<(), MissingRoleError> {
    for role in roles {
        let role = role.as_ref();
        let found_role = user.roles.iter().any(|user_role| user_role == role);
        if !found_role {
            return Err(MissingRoleError {
                missing_role: role.to_string(),
            });
        }
    }

    Ok(())
}

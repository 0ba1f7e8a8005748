use super::error::UserError;
use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserId};

impl Entity for User {
    type Id = UserId;
    type CreateParams = UserCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Error = UserError;

    /// Creates a new User from registration parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the user
    /// * `params` - Username, email and role. Username and email are trimmed
    ///   and must not be empty.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        let username = params.username.trim().to_string();
        let email = params.email.trim().to_string();
        if username.is_empty() {
            return Err(UserError::ValidationError("username must not be empty".to_string()));
        }
        if !email.contains('@') {
            return Err(UserError::ValidationError(format!("invalid email: {}", email)));
        }
        Ok(Self {
            id,
            username,
            email,
            role: params.role,
        })
    }

    fn on_update(&mut self, _update: ()) -> Result<(), UserError> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), UserError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn test_registration_is_trimmed_and_validated() {
        let user = User::from_create_params(UserId(1), UserCreate::customer(" alice ", "alice@example.com")).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Customer);

        let err = User::from_create_params(UserId(2), UserCreate::customer("bob", "not-an-email")).unwrap_err();
        assert!(matches!(err, UserError::ValidationError(_)));
    }
}

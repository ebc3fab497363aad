use crate::model::{id::UserId, role::Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
    pub is_superuser: bool,
}

impl User {
    /// Manager privilege: the platform-wide superuser flag or the manager role.
    pub fn has_manager_privilege(&self) -> bool {
        self.is_superuser || self.role == Role::Manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, is_superuser: bool) -> User {
        User {
            user_id: UserId::new(),
            user_name: "someone".into(),
            email: "someone@example.com".into(),
            role,
            is_superuser,
        }
    }

    #[test]
    fn manager_privilege_comes_from_role_or_superuser_flag() {
        assert!(user(Role::Manager, false).has_manager_privilege());
        assert!(user(Role::User, true).has_manager_privilege());
        assert!(user(Role::Manager, true).has_manager_privilege());
        assert!(!user(Role::User, false).has_manager_privilege());
    }
}

use std::sync::Arc;

use models::User;

/// Holder of the single seller profile. The profile never changes at runtime.
#[derive(Clone, Default)]
pub struct UserService {
    current: Arc<User>,
}

impl UserService {
    pub fn new(user: User) -> Self {
        Self { current: Arc::new(user) }
    }

    pub fn current(&self) -> User {
        self.current.as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_configured_profile() {
        let svc = UserService::new(User { name: "John Smith".into(), ..Default::default() });
        assert_eq!(svc.current().name, "John Smith");
    }
}

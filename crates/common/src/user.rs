use serde::Serialize;

/// Platform-agnostic user identity, built fresh for every event.
///
/// Never cached by this layer; the underlying clients may keep their own
/// caches, which is outside this crate's contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
}

impl User {
    /// "username (id)" form used in log lines and moderation output.
    #[must_use]
    pub fn display_tag(&self) -> String {
        format!("{} ({})", self.username, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_tag_includes_id() {
        let user = User {
            id: "42".into(),
            username: "mira".into(),
            avatar_url: String::new(),
        };
        assert_eq!(user.display_tag(), "mira (42)");
    }
}

//! User record.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::UserId;

/// A user as served by the user service.
///
/// The name is a `Cow` so fixed catalogs can be declared as `const` arrays
/// while deserialized records still own their data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Cow<'static, str>,
}

impl User {
    /// Create a user from a static name.
    #[must_use]
    pub const fn new(id: i32, name: &'static str) -> Self {
        Self {
            id: UserId::new(id),
            name: Cow::Borrowed(name),
        }
    }
}

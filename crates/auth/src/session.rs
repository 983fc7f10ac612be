//! Session context.

use serde::{Deserialize, Serialize};

use crate::account::UserAccount;
use crate::role::Role;

/// The acting identity for one logged-in user.
///
/// Passed explicitly into facade calls that need the actor; there is no
/// ambient "current user" global anywhere in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&UserAccount> for Session {
    fn from(account: &UserAccount) -> Self {
        Self {
            username: account.username.clone(),
            role: account.role,
        }
    }
}

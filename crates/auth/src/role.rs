//! Role model.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use sealtrack_core::DomainError;

/// Role granted to a user account.
///
/// `Admin` additionally grants create/delete on accounts themselves;
/// enforcement happens at the facade, not in the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Operator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Operator => "Operator",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Manager" => Ok(Role::Manager),
            "Operator" => Ok(Role::Operator),
            _ => Err(DomainError::validation(["role"])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for role in [Role::Admin, Role::Manager, Role::Operator] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_a_validation_error() {
        let err = "Intern".parse::<Role>().unwrap_err();
        assert_eq!(err.fields(), &["role"]);
    }
}

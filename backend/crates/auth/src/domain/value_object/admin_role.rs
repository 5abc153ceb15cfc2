//! Admin Role Value Object
//!
//! Stored with each account and echoed in session claims. The authorization
//! gate does not differentiate by role - any valid session is fully
//! privileged - so this is informational until multi-role access control is
//! actually designed.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum AdminRole {
    #[default]
    Editor = 0,
    SuperAdmin = 1,
}

impl AdminRole {
    /// Numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// String code for API responses and token claims
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::SuperAdmin => "super_admin",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => Self::Editor,
            1 => Self::SuperAdmin,
            _ => {
                tracing::error!("Invalid AdminRole id: {}", id);
                unreachable!("Invalid AdminRole id: {}", id)
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "editor" => Some(Self::Editor),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

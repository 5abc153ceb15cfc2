pub mod admin_role;
pub mod email;

pub use admin_role::AdminRole;
pub use email::Email;

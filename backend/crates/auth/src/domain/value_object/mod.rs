//! Value Objects

pub mod account_id;
pub mod account_password;
pub mod email;
pub mod otp_code;
pub mod username;

// Re-exports
pub use account_id::AccountId;
pub use account_password::{AccountPassword, RawPassword};
pub use email::Email;
pub use otp_code::OtpCode;
pub use username::{Username, UsernameError};

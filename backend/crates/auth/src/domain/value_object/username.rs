//! Username Value Object
//!
//! ユーザー名は、アカウントを識別するための**公開識別子（ハンドル）**。
//! 表示、検索、プロフィール更新に使用される。
//!
//! ## 設計方針
//! - ASCII英数字のみ許可（a-z, 0-9）
//! - canonical（正規形）は小文字
//! - NFKC正規化 → trim → 検証 の順で処理
//! - `new` は大文字入力を小文字に折り畳む、`strict` は拒否する
//!
//! ## 不変条件
//! - 長さ: 4〜20文字（正規化後）
//! - 空白禁止
//! - 英数字以外の記号禁止

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for a username (in characters)
pub const USERNAME_MIN_LENGTH: usize = 4;

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 20;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when username validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Username is empty after normalization
    Empty,

    /// Username is too short (minimum: USERNAME_MIN_LENGTH)
    TooShort { length: usize, min: usize },

    /// Username is too long (maximum: USERNAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// Username contains whitespace
    ContainsWhitespace,

    /// Username contains a non-alphanumeric character
    InvalidCharacter { char: char, position: usize },

    /// Username contains uppercase letters (strict mode only)
    NotLowercase,
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username cannot be empty"),
            Self::TooShort { length, min } => {
                write!(f, "Username is too short ({length} chars, minimum {min})")
            }
            Self::TooLong { length, max } => {
                write!(f, "Username is too long ({length} chars, maximum {max})")
            }
            Self::ContainsWhitespace => {
                write!(f, "Username cannot contain spaces")
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "Invalid character '{char}' at position {position}. Only letters and numbers are allowed"
                )
            }
            Self::NotLowercase => {
                write!(f, "Username must be lowercase")
            }
        }
    }
}

impl std::error::Error for UsernameError {}

// ============================================================================
// Username Value Object
// ============================================================================

/// Validated, normalized username
///
/// # Invariants
/// - Non-empty after normalization
/// - Length between USERNAME_MIN_LENGTH and USERNAME_MAX_LENGTH
/// - ASCII lowercase alphanumeric only
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new Username from raw input
    ///
    /// Applies normalization (NFKC, trim, lowercase) and validates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, UsernameError> {
        let canonical = Self::normalize(input.as_ref()).to_lowercase();
        Self::validate(&canonical)?;
        Ok(Self(canonical))
    }

    /// Create a Username without case folding
    ///
    /// Rejects input containing uppercase letters instead of lowering it.
    /// Used where the caller must supply the canonical form themselves
    /// (profile updates).
    pub fn strict(input: impl AsRef<str>) -> Result<Self, UsernameError> {
        let normalized = Self::normalize(input.as_ref());
        if normalized.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(UsernameError::NotLowercase);
        }
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the canonical (lowercase) username
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Normalize input string (NFKC, trim)
    fn normalize(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    /// Validate the canonical username
    fn validate(canonical: &str) -> Result<(), UsernameError> {
        if canonical.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = canonical.chars().count();
        if length < USERNAME_MIN_LENGTH {
            return Err(UsernameError::TooShort {
                length,
                min: USERNAME_MIN_LENGTH,
            });
        }
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                length,
                max: USERNAME_MAX_LENGTH,
            });
        }

        // Interior whitespace survives the trim; report it distinctly
        if canonical.chars().any(|c| c.is_whitespace()) {
            return Err(UsernameError::ContainsWhitespace);
        }

        for (pos, ch) in canonical.chars().enumerate() {
            if !(ch.is_ascii_lowercase() || ch.is_ascii_digit()) {
                return Err(UsernameError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Username").field(&self.0).finish()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================

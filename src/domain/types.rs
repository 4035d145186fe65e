//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., well-formed identifiers,
//! schedule syntax, known time zones) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Upper bound accepted for backup retention, roughly one hundred years.
pub const MAX_RETENTION_DAYS: i16 = 36500;

/// Longest backup task name accepted, in characters.
pub const MAX_BACKUP_NAME_LEN: usize = 255;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Cron expression did not consist of five fields.
    #[error("invalid cron expression")]
    InvalidCronExpression,
    /// Time zone is not a known IANA zone.
    #[error("unknown time zone")]
    InvalidTimeZone,
    /// Destination directory did not match the expected shape.
    #[error("invalid destination directory")]
    InvalidDestinationDir,
    /// Retention was negative or above [`MAX_RETENTION_DAYS`].
    #[error("retention days must be between 0 and {MAX_RETENTION_DAYS}")]
    RetentionOutOfRange,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate uuid-backed identifiers.
macro_rules! uuid_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse from raw bytes (DB boundary).
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeConstraintError> {
                Ok(Self(
                    Uuid::from_slice(bytes).map_err(|_| TypeConstraintError::InvalidUuid)?,
                ))
            }

            /// Convert to raw bytes (DB boundary).
            pub fn as_bytes(&self) -> &[u8; 16] {
                self.0.as_bytes()
            }

            /// Returns the wrapped uuid.
            pub const fn get(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(
                    Uuid::parse_str(s.trim()).map_err(|_| TypeConstraintError::InvalidUuid)?,
                ))
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

uuid_newtype!(DatabaseId, "Unique identifier for a registered PostgreSQL database.");
uuid_newtype!(DestinationId, "Unique identifier for a remote storage destination.");
uuid_newtype!(BackupId, "Unique identifier for a backup task.");
uuid_newtype!(ExecutionId, "Unique identifier for a single backup execution.");

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        string_newtype!($name, $doc);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }
        }
    };
}

non_empty_string_newtype!(DatabaseName, "Display name of a registered database.");
non_empty_string_newtype!(DestinationName, "Display name of a storage destination.");

string_newtype!(BackupName, "Backup task name, trimmed and non-empty.");

impl BackupName {
    /// Keeps the name as typed apart from surrounding whitespace. Markup is
    /// escaped when rendered, not here.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?.into_inner();
        if inner.chars().count() > MAX_BACKUP_NAME_LEN {
            return Err(TypeConstraintError::InvalidValue(format!(
                "backup name is longer than {MAX_BACKUP_NAME_LEN} characters"
            )));
        }
        Ok(Self(inner))
    }

    /// Name used for a duplicated task.
    pub fn copy_name(&self) -> String {
        format!("{} (copy)", self.0)
    }
}

string_newtype!(CronExpression, "Standard five-field cron schedule.");

impl CronExpression {
    /// Accepts exactly five whitespace-separated fields, normalizing spacing.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let fields: Vec<&str> = value.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(TypeConstraintError::InvalidCronExpression);
        }
        Ok(Self(fields.join(" ")))
    }
}

string_newtype!(TimeZoneName, "IANA time zone used to evaluate the schedule.");

impl TimeZoneName {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let tz = value
            .trim()
            .parse::<Tz>()
            .map_err(|_| TypeConstraintError::InvalidTimeZone)?;
        Ok(Self(tz.name().to_string()))
    }

    /// The parsed zone. Values are validated on construction, so this only
    /// falls back to UTC for data deserialized around [`TimeZoneName::new`].
    pub fn tz(&self) -> Tz {
        self.0.parse().unwrap_or(Tz::UTC)
    }
}

string_newtype!(
    DestinationDir,
    "Absolute directory, relative to the destination root, without trailing slash."
);

impl DestinationDir {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let valid = value.len() > 1
            && value.starts_with('/')
            && !value.ends_with('/')
            && !value.chars().any(char::is_whitespace);
        if valid {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidDestinationDir)
        }
    }
}

/// Number of days a backup file is kept, `0` meaning forever.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct RetentionDays(i16);

impl RetentionDays {
    pub fn new(value: i16) -> Result<Self, TypeConstraintError> {
        if (0..=MAX_RETENTION_DAYS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::RetentionOutOfRange)
        }
    }

    pub const fn get(self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for RetentionDays {
    type Error = TypeConstraintError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for RetentionDays {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Enumerations stored in SQLite as short text codes.
//!
//! [`coded_enum!`] generates the enum together with its code/label accessors,
//! case-insensitive parsing (code, label and any aliases), serde renames and
//! the rusqlite `ToSql`/`FromSql` conversions. Unknown codes coming from user
//! input fail with `DbError::Validation`; unknown codes read from the database
//! fail the row mapping.
//!
//! ```rust
//! use kindergarten::libs::child::Gender;
//!
//! let gender: Gender = "boy".parse().unwrap();
//! assert_eq!(gender.as_code(), "M");
//! assert!("x".parse::<Gender>().is_err());
//! ```

#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($variant:ident => $code:literal, $label:literal, [$($alias:literal),* $(,)?]),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $code)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Code stored in the database.
            pub fn as_code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Human-readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn codes() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_code()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::db::error::DbError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                $(
                    if needle == $code.to_lowercase()
                        || needle == $label.to_lowercase()
                        $(|| needle == $alias.to_lowercase())*
                    {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::db::error::DbError::Validation(format!(
                    "unknown {} '{}' (expected one of: {})",
                    $what,
                    s.trim(),
                    Self::codes().join(", ")
                )))
            }
        }

        impl rusqlite::types::ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
                Ok(rusqlite::types::ToSqlOutput::from(self.as_code()))
            }
        }

        impl rusqlite::types::FromSql for $name {
            fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|e: $crate::db::error::DbError| rusqlite::types::FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

//! Macro for implementing Display and FromStr for label enums
//!
//! Lifecycle states and display formats travel through configuration files,
//! environment variables and logs as short lowercase labels. This macro keeps
//! the label table in one place for both directions.
//!
//! # Example
//!
//! ```rust
//! use lotclock_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Phase {
//!     Idle,
//!     Running,
//! }
//!
//! impl_label_conversions!(Phase {
//!     Idle => "idle",
//!     Running => "running",
//! });
//!
//! assert_eq!(Phase::Running.to_string(), "running");
//! assert_eq!(" IDLE ".parse::<Phase>(), Ok(Phase::Idle));
//! ```

/// Implements Display, FromStr and `as_label` for label enums
///
/// This macro generates:
/// - `as_label()`: the `&'static str` label of a variant
/// - Display trait: writes the label
/// - FromStr trait: trims surrounding whitespace and parses case-insensitively
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Stable lowercase label for this variant.
            pub const fn as_label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                $(if normalized == $label {
                    return Ok(Self::$variant);
                })+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestPhase {
        Armed,
        Done,
    }

    impl_label_conversions!(TestPhase {
        Armed => "armed",
        Done => "done",
    });

    #[test]
    fn test_display_uses_label() {
        assert_eq!(TestPhase::Armed.to_string(), "armed");
        assert_eq!(TestPhase::Done.as_label(), "done");
    }

    #[test]
    fn test_fromstr_is_case_insensitive_and_trimmed() {
        assert_eq!(TestPhase::from_str("ARMED"), Ok(TestPhase::Armed));
        assert_eq!(TestPhase::from_str("  Done\n"), Ok(TestPhase::Done));
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestPhase::from_str("paused");
        assert_eq!(result, Err("Invalid TestPhase: paused".to_string()));
    }
}

//! Macros for declaring phase enums and tag enumerations.

/// Generate a `State` implementation for a simple phase enum.
///
/// # Example
///
/// ```
/// use region_explorer::state_enum;
/// use region_explorer::core::State;
///
/// state_enum! {
///     pub enum LoadPhase {
///         Pending,
///         Ready,
///         Broken,
///     }
///     final: [Broken]
///     error: [Broken]
/// }
///
/// assert_eq!(LoadPhase::Ready.name(), "Ready");
/// assert!(LoadPhase::Broken.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate a tag enumeration: a closed set of known labels plus a
/// `Custom` variant for caller-defined tags.
///
/// Tags parse case-insensitively and serialize as their lowercase label, so
/// catalogs can carry tags the built-in set does not know about.
///
/// # Example
///
/// ```
/// use region_explorer::tag_enum;
///
/// tag_enum! {
///     pub enum Season {
///         Summer => "summer",
///         Winter => "winter",
///     }
/// }
///
/// assert_eq!(Season::from("Winter"), Season::Winter);
/// assert_eq!(Season::from("monsoon"), Season::Custom("monsoon".to_string()));
/// assert_eq!(Season::Summer.to_string(), "summer");
/// ```
#[macro_export]
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// Tag outside the built-in set.
            Custom(String),
        }

        impl $name {
            /// Lowercase label used for matching and serialization.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)*
                    Self::Custom(label) => label.as_str(),
                }
            }

            /// Label with its first letter capitalized, for tab and chip text.
            pub fn display_name(&self) -> String {
                let label = self.as_str();
                let mut chars = label.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                let label = raw.trim().to_ascii_lowercase();
                match label.as_str() {
                    $($label => Self::$variant,)*
                    _ => Self::Custom(label),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::from(raw.as_str())
            }
        }

        impl From<$name> for String {
            fn from(tag: $name) -> String {
                tag.as_str().to_string()
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(raw))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestPhase {
            Idle,
            Running,
            Stopped,
        }
        final: [Stopped]
        error: [Stopped]
    }

    tag_enum! {
        enum Flavour {
            Sweet => "sweet",
            Sour => "sour",
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestPhase::Idle.name(), "Idle");
        assert!(!TestPhase::Running.is_final());
        assert!(TestPhase::Stopped.is_final());
        assert!(TestPhase::Stopped.is_error());
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum MinimalPhase {
                One,
                Two,
            }
        }

        assert!(!MinimalPhase::One.is_final());
        assert!(!MinimalPhase::Two.is_error());
    }

    #[test]
    fn tag_parses_case_insensitively() {
        assert_eq!(Flavour::from("SWEET"), Flavour::Sweet);
        assert_eq!(Flavour::from("  sour "), Flavour::Sour);
    }

    #[test]
    fn unknown_tag_becomes_custom() {
        let tag = Flavour::from("Umami");
        assert_eq!(tag, Flavour::Custom("umami".to_string()));
        assert_eq!(tag.display_name(), "Umami");
    }

    #[test]
    fn tag_serializes_as_label() {
        let json = serde_json::to_string(&Flavour::Sour).unwrap();
        assert_eq!(json, "\"sour\"");

        let custom: Flavour = serde_json::from_str("\"bitter\"").unwrap();
        assert_eq!(custom, Flavour::Custom("bitter".to_string()));
    }
}

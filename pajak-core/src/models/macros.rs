//! Declarative macro for the closed category enumerations.
//!
//! Every category the calculators dispatch on is a unit-only enum with a
//! stable wire tag (the value a form or a batch file sends) and a display
//! label. `category_enum!` generates the enum together with:
//!
//! - `ALL`, every variant in declaration order
//! - `as_str()`, the wire tag
//! - `label()`, the human-readable name
//! - `parse()`, strict tag lookup
//! - `Display` (label) and `Serialize`/`Deserialize` (tag)
//!
//! When a `fallback` variant is named, the macro also generates a lenient
//! `from_tag()` that maps unknown tags to that variant, and deserialization
//! goes through it. Without a fallback, an unknown tag is a deserialization
//! error.
//!
//! `FromStr` follows the same rule: lenient with a fallback, otherwise an
//! [`UnknownCategoryError`](crate::error::UnknownCategoryError).
//!
//! # Usage
//!
//! ```rust,ignore
//! category_enum! {
//!     /// Documentation for the enum
//!     pub enum Fruit fallback Other {
//!         Apple => ("apple", "Apple"),
//!         Other => ("other", "Something else"),
//!     }
//! }
//! ```

macro_rules! category_enum {
    (@common
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($tag:literal, $label:literal)
            ),+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident fallback $fallback:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($tag:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        category_enum!(@common $(#[$meta])* $vis enum $name { $($(#[$vmeta])* $variant => ($tag, $label)),+ });

        impl $name {
            /// Resolves a wire tag, mapping unknown tags to the fallback variant.
            pub fn from_tag(tag: &str) -> Self {
                Self::parse(tag).unwrap_or_else(|| {
                    tracing::warn!(
                        category = stringify!($name),
                        tag,
                        fallback = Self::$fallback.as_str(),
                        "unknown category tag, using fallback"
                    );
                    Self::$fallback
                })
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_tag(&tag))
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_tag(s))
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($tag:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        category_enum!(@common $(#[$meta])* $vis enum $name { $($(#[$vmeta])* $variant => ($tag, $label)),+ });

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&tag)
                    .ok_or_else(|| <D::Error as serde::de::Error>::unknown_variant(&tag, &[$($tag),+]))
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::UnknownCategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| crate::error::UnknownCategoryError {
                    category: stringify!($name),
                    tag: s.to_string(),
                    expected: &[$($tag),+],
                })
            }
        }
    };
}

pub(crate) use category_enum;

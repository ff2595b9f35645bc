//! Macros for defining validated text values.

/// Macro for defining a non-empty, trimmed text newtype with an upper bound
/// on its length.
///
/// # Example
///
/// ```rust
/// # use common::define_text;
/// define_text! {
///     #[doc = "Title of a book."]
///     struct Title(max_len = 64);
/// }
///
/// assert!(Title::new("Dune").is_some());
/// assert!(Title::new(" Dune").is_none());
/// assert!(Title::new("").is_none());
/// ```
#[macro_export]
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        struct $name:ident(max_len = $max_len:literal);
    ) => {
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[doc = $doc]
        pub struct $name(::std::string::String);

        impl $name {
            #[doc = ::core::concat!(
                "Creates a new [`", ::core::stringify!($name),
                "`] if the given `text` is valid.",
            )]
            #[must_use]
            pub fn new(
                text: impl ::core::convert::Into<::std::string::String>,
            ) -> ::core::option::Option<Self> {
                let text = text.into();
                Self::check(&text).then_some(Self(text))
            }

            /// Checks whether the given `text` is non-empty, trimmed and
            /// fits the maximum length.
            fn check(text: &str) -> bool {
                text.trim() == text
                    && !text.is_empty()
                    && text.chars().count() <= $max_len
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
            ) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::new(s).ok_or(::core::concat!(
                    "invalid `", ::core::stringify!($name), "`",
                ))
            }
        }
    };
}

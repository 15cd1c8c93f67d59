//! Newtype slugs for type-safe record references.
//!
//! Every record in the content tables is addressed by a short, URL-safe string
//! (`pet-16-embossed`, `warehouse1`). Use the `define_slug!` macro to create
//! wrappers that prevent accidentally mixing identifiers of different tables.

/// Macro to define a type-safe slug wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `Display`, `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use turanpet_core::define_slug;
/// define_slug!(CrateId);
/// define_slug!(PalletId);
///
/// let crate_id = CrateId::new("c-1");
/// let pallet_id = PalletId::new("c-1");
///
/// // These are different types, so this won't compile:
/// // let _: CrateId = pallet_id;
/// ```
#[macro_export]
macro_rules! define_slug {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new slug from a string value.
            #[must_use]
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self(slug.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(slug: String) -> Self {
                Self(slug)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

// Define content record slugs
define_slug!(ProductId);
define_slug!(StrapId);
define_slug!(ToolId);
define_slug!(PostId);
define_slug!(LocationId);

//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. All identifiers are
//! opaque strings; baseline data uses short ids (`r1`, `p3`) while ids minted
//! at runtime carry a one-letter prefix followed by a random UUID.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `generate()`
/// - `From<&str>`, `From<String>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use ecosankalp_core::define_id;
/// define_id!(UserId, "u");
/// define_id!(OrderId, "o");
///
/// let user_id = UserId::new("u1");
/// let order_id = OrderId::generate();
/// assert!(order_id.as_str().starts_with('o'));
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used for freshly generated ids.
            pub const PREFIX: &'static str = $prefix;

            /// Create an ID from an existing string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a new random ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}{}", $prefix, ::uuid::Uuid::new_v4().simple()))
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
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId, "u");
define_id!(ReportId, "r");
define_id!(ModuleId, "m");
define_id!(ProductId, "p");
define_id!(OrderId, "o");
define_id!(QueryId, "q");
define_id!(FacilityId, "f");
define_id!(QuestionId, "qq");

impl UserId {
    /// Derive a stable user id from an email address.
    ///
    /// Logging in twice with the same email yields the same id, so reports
    /// filed in earlier sessions stay attributed to the user.
    #[must_use]
    pub fn from_email(email: &crate::Email) -> Self {
        let uuid = ::uuid::Uuid::new_v5(&::uuid::Uuid::NAMESPACE_OID, email.as_bytes());
        Self(format!("{}{}", Self::PREFIX, uuid.simple()))
    }
}

//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the registration rules (positive identifiers,
//! well-formed email, minimum lengths, closed service set) so that once a
//! value reaches the domain layer it can be treated as trusted. Unlike
//! normalizing wrappers, they keep the caller's text verbatim.
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string was empty.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is shorter than the required minimum.
    #[error("value must be at least {min} characters")]
    TooShort { min: usize },
    /// Provided service name is not one of the known offerings.
    #[error("unknown service: {0}")]
    UnknownService(String),
    /// Provided service list contained no entries.
    #[error("at least one service is required")]
    NoServices,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(LeadId, "Unique identifier for a lead.");

/// Implements the string accessors and conversions shared by text wrappers.
macro_rules! string_wrapper_impls {
    ($name:ident) => {
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

/// Lead display name. Any non-empty text is accepted as given.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LeadName(String);

impl LeadName {
    /// Rejects empty input without trimming or otherwise altering it.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(value))
    }
}

string_wrapper_impls!(LeadName);

/// Returns `true` when `email` is a deliverable-looking address.
///
/// On top of the `validator` syntax check the domain must contain a dot and
/// end in an alphabetic TLD of two or more letters, and the local part may
/// not start, end or repeat a dot.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty()
                && !domain.contains("..")
                && tld.chars().count() >= 2
                && tld.chars().all(char::is_alphabetic)
        }
        None => false,
    }
}

/// Validated lead email address, stored exactly as entered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LeadEmail(String);

impl LeadEmail {
    /// Validates the email syntax.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let email = email.into();
        if is_valid_email(&email) {
            Ok(Self(email))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }
}

string_wrapper_impls!(LeadEmail);

/// Macro to generate text wrappers with a minimum character count.
macro_rules! min_length_newtype {
    ($name:ident, $min:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Minimum number of characters accepted.
            pub const MIN_LENGTH: usize = $min;

            /// Constructs the value ensuring it has at least `MIN_LENGTH` characters.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                if value.chars().count() < Self::MIN_LENGTH {
                    return Err(TypeConstraintError::TooShort {
                        min: Self::MIN_LENGTH,
                    });
                }
                Ok(Self(value))
            }
        }

        string_wrapper_impls!($name);
    };
}

min_length_newtype!(
    MobileNumber,
    6,
    "Contact mobile number; no character-class restriction is applied."
);

min_length_newtype!(Postcode, 4, "Postal code of the lead.");

/// Offering a lead can request.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(async_graphql::Enum))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Service {
    Delivery,
    Pickup,
    Payment,
}

impl Service {
    /// All known services in declaration order.
    pub const ALL: [Service; 3] = [Service::Delivery, Service::Pickup, Service::Payment];

    /// Canonical wire name of the service.
    pub const fn as_str(self) -> &'static str {
        match self {
            Service::Delivery => "DELIVERY",
            Service::Pickup => "PICKUP",
            Service::Payment => "PAYMENT",
        }
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownService(s.to_string()))
    }
}

/// Non-empty list of requested services. Order and duplicates are kept.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<Service>", into = "Vec<Service>")]
pub struct Services(Vec<Service>);

impl Services {
    /// Wraps the list, rejecting an empty one.
    pub fn new(services: Vec<Service>) -> Result<Self, TypeConstraintError> {
        if services.is_empty() {
            return Err(TypeConstraintError::NoServices);
        }
        Ok(Self(services))
    }

    /// Borrow the services as a slice.
    pub fn as_slice(&self) -> &[Service] {
        &self.0
    }

    /// Consume the wrapper returning the owned list.
    pub fn into_inner(self) -> Vec<Service> {
        self.0
    }
}

impl Deref for Services {
    type Target = [Service];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<Service>> for Services {
    type Error = TypeConstraintError;

    fn try_from(value: Vec<Service>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Services> for Vec<Service> {
    fn from(value: Services) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_id_rejects_non_positive_values() {
        assert_eq!(LeadId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(LeadId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(LeadId::new(7).map(LeadId::get), Ok(7));
    }

    #[test]
    fn lead_name_keeps_whitespace() {
        assert_eq!(LeadName::new(""), Err(TypeConstraintError::EmptyString));
        assert_eq!(LeadName::new(" Ann ").unwrap().as_str(), " Ann ");
    }

    #[test]
    fn lead_email_is_not_normalized() {
        let email = LeadEmail::new("Jane@Example.com").unwrap();
        assert_eq!(email.as_str(), "Jane@Example.com");
        assert_eq!(
            LeadEmail::new("notanemail"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn lead_email_requires_dotted_domain_and_clean_local_part() {
        for email in [
            "user@localhost",
            "a@b",
            "a..b@example.com",
            ".a@example.com",
            "a.@example.com",
            "user@example.c",
            "user@example.c0m",
        ] {
            assert_eq!(
                LeadEmail::new(email),
                Err(TypeConstraintError::InvalidEmail),
                "{email} should be rejected"
            );
        }
        assert!(LeadEmail::new("first.last+tag@mail.example.co").is_ok());
    }

    #[test]
    fn min_length_counts_characters() {
        assert_eq!(
            MobileNumber::new("12345"),
            Err(TypeConstraintError::TooShort { min: 6 })
        );
        assert!(MobileNumber::new("abcdef").is_ok());
        assert!(Postcode::new("ÅÄÖÜ").is_ok());
        assert_eq!(
            Postcode::new("123"),
            Err(TypeConstraintError::TooShort { min: 4 })
        );
    }

    #[test]
    fn service_parses_only_known_names() {
        assert_eq!("PICKUP".parse::<Service>(), Ok(Service::Pickup));
        assert_eq!(
            "pickup".parse::<Service>(),
            Err(TypeConstraintError::UnknownService("pickup".to_string()))
        );
        assert_eq!(Service::Payment.to_string(), "PAYMENT");
    }

    #[test]
    fn services_preserve_order_and_duplicates() {
        let services =
            Services::new(vec![Service::Payment, Service::Delivery, Service::Payment]).unwrap();
        assert_eq!(
            services.as_slice(),
            &[Service::Payment, Service::Delivery, Service::Payment]
        );

        let json = serde_json::to_string(&services).unwrap();
        assert_eq!(json, r#"["PAYMENT","DELIVERY","PAYMENT"]"#);
    }

    #[test]
    fn services_reject_empty_list() {
        assert_eq!(Services::new(vec![]), Err(TypeConstraintError::NoServices));
        assert!(serde_json::from_str::<Services>("[]").is_err());
    }
}

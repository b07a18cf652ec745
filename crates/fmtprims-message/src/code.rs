use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::MessageError;

macro_rules! error_codes {
    ($($variant:ident => $code:literal, $arity:literal, $template:literal;)+) => {
        /// Identifies why a value failed validation.
        ///
        /// The string form (`as_str`) is stable and intended for clients that
        /// branch on the failure reason.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ErrorCode {
            $($variant,)+
        }

        impl ErrorCode {
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $code,)+
                }
            }

            /// Number of arguments the template takes.
            pub fn arity(self) -> usize {
                match self {
                    $(ErrorCode::$variant => $arity,)+
                }
            }

            /// English template; each `{}` is replaced by one argument.
            pub fn template(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $template,)+
                }
            }
        }
    };
}

error_codes! {
    XIsNotAValidType => "X_IS_NOT_A_VALID_TYPE", 1, "{} is not a valid type";
    XTypeIsDuplicated => "X_TYPE_IS_DUPLICATED", 1, "{} type is duplicated";
    XMustBeOfTypeY => "X_MUST_BE_OF_TYPE_Y", 2, "{} must be of type {}";
    XMustBeAY => "X_MUST_BE_A_Y", 2, "{} must be of a {}";
    XMustBeAnY => "X_MUST_BE_AN_Y", 2, "{} must be of an {}";
    XIsMissingAndRequired => "X_IS_MISSING_AND_REQUIRED", 1, "{} is missing and required";
    MustBeOfTypeX => "MUST_BE_OF_TYPE_X", 1, "must be of type {}";
    XItemsMustBeUnique => "X_ITEMS_MUST_BE_UNIQUE", 1, "{} items must be unique";
    XItemsMustBeTypeY => "X_ITEMS_MUST_BE_TYPE_Y", 2, "{} items must be {}";
    DoesNotMatchPattern => "DOES_NOT_MATCH_PATTERN", 1, "does not match pattern '{}'";
    DoesNotMatchFormat => "DOES_NOT_MATCH_FORMAT", 1, "does not match format '{}'";
    MustMatchOneEnumValues => "MUST_MATCH_ONE_ENUM_VALUES", 1, "must match one of the enum values [{}]";
    StringLengthMustBeGreaterOrEqual => "STRING_LENGTH_MUST_BE_GREATER_OR_EQUAL", 1, "string length must be greater or equal to {}";
    StringLengthMustBeLowerOrEqual => "STRING_LENGTH_MUST_BE_LOWER_OR_EQUAL", 1, "string length must be lower or equal to {}";
    NumberMustBeLowerOrEqual => "NUMBER_MUST_BE_LOWER_OR_EQUAL", 1, "must be lower than or equal to {}";
    NumberMustBeLower => "NUMBER_MUST_BE_LOWER", 1, "must be lower than {}";
    NumberMustBeGreaterOrEqual => "NUMBER_MUST_BE_GREATER_OR_EQUAL", 1, "must be greater than or equal to {}";
    NumberMustBeGreater => "NUMBER_MUST_BE_GREATER", 1, "must be greater than {}";
    NumberMustValidateAllOf => "NUMBER_MUST_VALIDATE_ALLOF", 0, "must validate all the schemas (allOf)";
    NumberMustValidateOneOf => "NUMBER_MUST_VALIDATE_ONEOF", 0, "must validate one and only one schema (oneOf)";
    NumberMustValidateAnyOf => "NUMBER_MUST_VALIDATE_ANYOF", 0, "must validate at least one schema (anyOf)";
    NumberMustValidateNot => "NUMBER_MUST_VALIDATE_NOT", 0, "must not validate the schema (not)";
    ArrayMinItems => "ARRAY_MIN_ITEMS", 1, "array must have at least {} items";
    ArrayMaxItems => "ARRAY_MAX_ITEMS", 1, "array must have at the most {} items";
    ArrayMinProperties => "ARRAY_MIN_PROPERTIES", 1, "must have at least {} properties";
    ArrayMaxProperties => "ARRAY_MAX_PROPERTIES", 1, "must have at the most {} properties";
    HasDependencyOn => "HAS_DEPENDENCY_ON", 1, "has a dependency on {}";
    MultipleOf => "MULTIPLE_OF", 1, "must be a multiple of {}";
    ArrayNoAdditionalItem => "ARRAY_NO_ADDITIONAL_ITEM", 0, "no additional item allowed on array";
    AdditionalPropertyNotAllowed => "ADDITIONAL_PROPERTY_NOT_ALLOWED", 1, "additional property \"{}\" is not allowed";
    InvalidPatternProperty => "INVALID_PATTERN_PROPERTY", 2, "property \"{}\" does not match pattern {}";
    Internal => "INTERNAL", 1, "internal error {}";
    GetHttpBadStatus => "GET_HTTP_BAD_STATUS", 1, "Could not read schema from HTTP, response status is {}";
    NewSchemaDocumentInvalidArgument => "NEW_SCHEMA_DOCUMENT_INVALID_ARGUMENT", 0, "Invalid argument, must be a JSON string, a JSON reference string or a JSON object";
    InvalidRegexPattern => "INVALID_REGEX_PATTERN", 1, "Invalid regex pattern '{}'";
    XMustBeValidRegex => "X_MUST_BE_VALID_REGEX", 1, "{} must be a valid regex";
    XMustBeGreaterOrEqualTo0 => "X_MUST_BE_GREATER_OR_TO_0", 1, "{} must be greater than or equal to 0";
    XCannotBeGreaterThanY => "X_CANNOT_BE_GREATER_THAN_Y", 2, "{} cannot be greater than {}";
    XMustBeStrictlyGreaterThan0 => "X_MUST_BE_STRICTLY_GREATER_THAN_0", 1, "{} must be strictly greater than 0";
    XCannotBeUsedWithoutY => "X_CANNOT_BE_USED_WITHOUT_Y", 2, "{} cannot be used without {}";
    ReferenceXMustBeCanonical => "REFERENCE_X_MUST_BE_CANONICAL", 1, "Reference {} must be canonical";
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = MessageError;

    /// Parses the string form, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MessageError::UnknownCode(s.to_string()))
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

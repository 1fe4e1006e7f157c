use thiserror::Error;

use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// Error

/// No field of the requested name exists in the type's resolvable hierarchy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{type_path}` doesn't have a field named: {name}")]
pub struct FieldNotFoundError {
    pub type_path: &'static str,
    pub name: Box<str>,
}

/// The type has no zero-argument constructor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("`{type_path}` must have a parameterless constructor")]
pub struct MissingConstructorError {
    pub type_path: &'static str,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractError {
    #[error("Field declared on `{expect}` cannot be read from an instance of `{actual}`")]
    InstanceMismatch {
        expect: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("`{type_path}` is {kind}, only structs have serializable fields")]
    NotAStruct {
        type_path: &'static str,
        kind: ReflectKind,
    },
}

/// Any error produced by this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MetaError {
    #[error(transparent)]
    FieldNotFound(#[from] FieldNotFoundError),

    #[error(transparent)]
    MissingConstructor(#[from] MissingConstructorError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_type() {
        let err = FieldNotFoundError {
            type_path: "app::Player",
            name: "score".into(),
        };
        assert_eq!(err.to_string(), "`app::Player` doesn't have a field named: score");

        let err = MissingConstructorError {
            type_path: "app::Player",
        };
        assert_eq!(
            err.to_string(),
            "`app::Player` must have a parameterless constructor"
        );
    }

    #[test]
    fn umbrella_is_transparent() {
        let err: MetaError = ResolveError::NotAStruct {
            type_path: "u8",
            kind: ReflectKind::Opaque,
        }
        .into();
        assert_eq!(err.to_string(), "`u8` is Opaque, only structs have serializable fields");
    }
}

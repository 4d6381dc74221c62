use thiserror::Error;

/// Failure modes of address resolution. Both variants are recoverable:
/// callers are expected to ask for another address.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("address not found")]
    AddressNotFound,
    #[error("geocoding service error: {0}")]
    Service(String),
}

/// An unsupported shape identifier reached `ShapeKind::from_str`. This is a
/// contract violation, not bad user input, and there is no fallback shape.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid shape kind '{0}', expected circle, square or triangle")]
pub struct ParseShapeKindError(pub String);

/// A color name outside the fixed palette.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid color '{0}', expected red, green, blue, white, black, yellow, cyan or magenta")]
pub struct ParseColorError(pub String);

//! Error types with diagnostics using miette
//!
//! Layout degradation is never an error here; it is clamped and logged.
//! Only caller-contract violations and unusable numeric input surface.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised by the tooltip component
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TooltipError {
    #[error("tooltip shown without a resolvable anchor rectangle")]
    #[diagnostic(
        code(balloontip::missing_anchor),
        help("the anchor must report a bounding rectangle before the tooltip can be laid out")
    )]
    MissingAnchor,

    #[error("invalid pixel scale: {value}")]
    #[diagnostic(
        code(balloontip::invalid_scale),
        help("pixel scale must be finite and greater than zero")
    )]
    InvalidScale { value: f64 },

    #[error("invalid {name}: {reason}")]
    #[diagnostic(code(balloontip::invalid_dimension))]
    InvalidDimension {
        name: &'static str,
        value: f64,
        reason: NumericError,
    },
}

impl TooltipError {
    pub(crate) fn dimension(name: &'static str, value: f64, reason: NumericError) -> Self {
        TooltipError::InvalidDimension { name, value, reason }
    }
}

use colored::Colorize;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgumentPosition {
    Numerator,
    Denominator,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FractionError {
    kind: FractionErrorKind,
}

impl FractionError {
    pub fn invalid_argument_type(position: ArgumentPosition, found: String) -> Self {
        FractionError {
            kind: FractionErrorKind::InvalidArgumentType { position, found },
        }
    }

    pub fn overflow(operation: &'static str) -> Self {
        FractionError {
            kind: FractionErrorKind::Overflow { operation },
        }
    }

    pub fn is_invalid_argument_type(&self) -> bool {
        matches!(self.kind, FractionErrorKind::InvalidArgumentType { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, FractionErrorKind::Overflow { .. })
    }

    pub fn render_error(&self) -> String {
        format!(
            "{}\n{}{}",
            "[Error]".red(),
            self,
            match &self.kind {
                FractionErrorKind::InvalidArgumentType { .. } => "\nHelp: both operands of a fraction must be integers.",
                FractionErrorKind::Overflow { .. } => "",
            },
        )
    }
}

impl fmt::Display for FractionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match &self.kind {
            FractionErrorKind::InvalidArgumentType { position, found } => write!(
                fmt,
                "input argument type must be integer: {} is `{found}`",
                match position {
                    ArgumentPosition::Numerator => "numerator",
                    ArgumentPosition::Denominator => "denominator",
                },
            ),
            FractionErrorKind::Overflow { operation } => write!(
                fmt,
                "attempt to {operation} with overflow",
            ),
        }
    }
}

impl std::error::Error for FractionError {}

#[derive(Clone, Debug, Eq, PartialEq)]
enum FractionErrorKind {
    InvalidArgumentType {
        position: ArgumentPosition,

        // how the rejected operand looks when rendered
        found: String,
    },

    // the reduced result doesn't fit in `i64`
    Overflow { operation: &'static str },
}

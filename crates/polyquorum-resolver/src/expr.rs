//! Share-value expression evaluation.
//!
//! A share's y-value arrives encoded as `name(arg, arg, ...)` where the
//! name selects an integer operation and the arguments are base-10
//! literals. Arguments and results are arbitrary-precision.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use thiserror::Error;

/// Failure to evaluate one share expression. Always a per-record
/// condition; the document resolver logs and skips.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Malformed share expression: '{0}'")]
    MalformedExpression(String),
    #[error("Unsupported operation: '{0}'")]
    UnsupportedOperation(String),
    #[error("Invalid integer argument '{arg}' in '{expr}'")]
    InvalidArgument { expr: String, arg: String },
    #[error("{0} requires at least one argument")]
    MissingArguments(&'static str),
}

/// The operations a share expression may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Sum of all arguments (0 for none).
    Sum,
    /// Product of all arguments (1 for none).
    Multiply,
    /// Greatest common divisor across all arguments.
    Hcf,
    /// Least common multiple across all arguments; 0 if any argument is 0.
    Lcm,
}

impl Operation {
    /// Look up an operation by its (case-insensitive) expression name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sum" => Some(Self::Sum),
            "multiply" => Some(Self::Multiply),
            "hcf" => Some(Self::Hcf),
            "lcm" => Some(Self::Lcm),
            _ => None,
        }
    }

    /// Apply the operation to already-parsed arguments.
    pub fn apply(&self, args: &[BigInt]) -> Result<BigInt, ResolveError> {
        match self {
            Self::Sum => Ok(args.iter().sum()),
            Self::Multiply => Ok(args.iter().product()),
            Self::Hcf => {
                let (first, rest) = args
                    .split_first()
                    .ok_or(ResolveError::MissingArguments("hcf"))?;
                Ok(rest.iter().fold(first.clone(), |acc, arg| acc.gcd(arg)))
            }
            Self::Lcm => {
                let (first, rest) = args
                    .split_first()
                    .ok_or(ResolveError::MissingArguments("lcm"))?;
                if args.iter().any(|arg| arg.is_zero()) {
                    return Ok(BigInt::zero());
                }
                Ok(rest.iter().fold(first.clone(), |acc, arg| acc.lcm(arg)))
            }
        }
    }
}

/// Evaluate a share expression such as `"multiply(10, 20, 5)"`.
pub fn resolve_expression(expr: &str) -> Result<BigInt, ResolveError> {
    let trimmed = expr.trim();

    let malformed = || ResolveError::MalformedExpression(expr.to_string());

    let open = trimmed.find('(').ok_or_else(malformed)?;
    if !trimmed.ends_with(')') {
        return Err(malformed());
    }

    let name = trimmed[..open].trim();
    if name.is_empty() {
        return Err(malformed());
    }
    let op = Operation::from_name(name)
        .ok_or_else(|| ResolveError::UnsupportedOperation(name.to_string()))?;

    let body = &trimmed[open + 1..trimmed.len() - 1];
    let args = parse_arguments(expr, body)?;

    op.apply(&args)
}

fn parse_arguments(expr: &str, body: &str) -> Result<Vec<BigInt>, ResolveError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    body.split(',')
        .map(|raw| {
            raw.trim()
                .parse::<BigInt>()
                .map_err(|_| ResolveError::InvalidArgument {
                    expr: expr.to_string(),
                    arg: raw.trim().to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(resolve_expression("sum(1, 2, 3)").unwrap(), 6.into());
        assert_eq!(resolve_expression("sum(100)").unwrap(), 100.into());
    }

    #[test]
    fn test_multiply() {
        assert_eq!(resolve_expression("multiply(10,20,5)").unwrap(), 1000.into());
        assert_eq!(resolve_expression("multiply(-3, 4)").unwrap(), (-12).into());
    }

    #[test]
    fn test_hcf() {
        assert_eq!(resolve_expression("hcf(12, 18, 24)").unwrap(), 6.into());
        assert_eq!(resolve_expression("hcf(7)").unwrap(), 7.into());
        // gcd is non-negative regardless of argument signs
        assert_eq!(resolve_expression("hcf(-12, 18)").unwrap(), 6.into());
    }

    #[test]
    fn test_lcm() {
        assert_eq!(resolve_expression("lcm(4, 6)").unwrap(), 12.into());
        assert_eq!(resolve_expression("lcm(3, 5, 7)").unwrap(), 105.into());
        assert_eq!(resolve_expression("lcm(0, 9)").unwrap(), 0.into());
    }

    #[test]
    fn test_case_insensitive_names_and_whitespace() {
        assert_eq!(resolve_expression("  SUM( 1 ,2 )  ").unwrap(), 3.into());
        assert_eq!(resolve_expression("Multiply(2,3)").unwrap(), 6.into());
    }

    #[test]
    fn test_huge_arguments() {
        let big = "9".repeat(40);
        let expr = format!("sum({big}, 1)");
        let expected: BigInt = big.parse::<BigInt>().unwrap() + 1;
        assert_eq!(resolve_expression(&expr).unwrap(), expected);
    }

    #[test]
    fn test_malformed_expressions() {
        for bad in ["", "sum", "sum(1", "sum 1,2)", "(1,2)", "42"] {
            assert!(matches!(
                resolve_expression(bad),
                Err(ResolveError::MalformedExpression(_))
            ));
        }
    }

    #[test]
    fn test_unsupported_operation() {
        assert_eq!(
            resolve_expression("pow(2, 10)"),
            Err(ResolveError::UnsupportedOperation("pow".to_string()))
        );
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            resolve_expression("sum(1, two)"),
            Err(ResolveError::InvalidArgument { .. })
        ));
        // Nested calls are not part of the grammar
        assert!(matches!(
            resolve_expression("sum(multiply(2,3))"),
            Err(ResolveError::InvalidArgument { .. })
        ));
        assert!(matches!(
            resolve_expression("sum(1.5)"),
            Err(ResolveError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            resolve_expression("hcf()"),
            Err(ResolveError::MissingArguments("hcf"))
        );
        assert_eq!(
            resolve_expression("lcm()"),
            Err(ResolveError::MissingArguments("lcm"))
        );
        // sum and multiply tolerate empty argument lists
        assert_eq!(resolve_expression("sum()").unwrap(), 0.into());
        assert_eq!(resolve_expression("multiply()").unwrap(), 1.into());
    }
}

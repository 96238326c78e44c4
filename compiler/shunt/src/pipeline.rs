use shunt_eval::{evaluate_cached, EvalError, Evaluation, EvaluationCache, OperationCache, Uncached};
use shunt_lexer::{tokenize, LexError};
use shunt_parser::{parse_to_postfix, ParseError};

/// Any failure of a single expression.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShuntError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ShuntError {
    /// Whether the failure points at a defect rather than at bad input.
    ///
    /// The tokenizer and parser reject every malformed expression, so an
    /// evaluation error means the stages disagree.
    pub fn is_internal(&self) -> bool {
        matches!(self, ShuntError::Eval(_))
    }
}

/// Tokenize, parse and evaluate one expression.
pub fn evaluate_expression(text: &str, use_cache: bool) -> Result<Evaluation, ShuntError> {
    if use_cache {
        evaluate_expression_cached(text, &mut EvaluationCache::new())
    } else {
        evaluate_expression_cached(text, &mut Uncached)
    }
}

/// Like [`evaluate_expression`], memoizing into a caller-owned cache.
pub fn evaluate_expression_cached(
    text: &str,
    cache: &mut dyn OperationCache,
) -> Result<Evaluation, ShuntError> {
    log::debug!("evaluating {text:?}");
    let tokens = tokenize(text)?;
    let postfix = parse_to_postfix(tokens)?;
    Ok(evaluate_cached(postfix, cache)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shunt_lexer::LexErrorKind;

    #[test]
    fn test_full_pipeline() {
        let result = evaluate_expression("log(3.5,2) + 1.5^(4-1/2)", false).unwrap();
        let expected = 2f64.ln() / 3.5f64.ln() + 1.5f64.powf(3.5);
        assert_eq!(result.value, expected);
        assert_eq!(result.tree.label, "+");
    }

    #[test]
    fn test_lex_errors_are_user_errors() {
        let err = evaluate_expression("2(10)", false).unwrap_err();
        assert!(!err.is_internal());
        assert!(matches!(
            err,
            ShuntError::Lex(LexError {
                kind: LexErrorKind::ImplicitMultiplication,
                ..
            })
        ));
        assert_eq!(
            err.to_string(),
            "Does not support implicit multiply. Please add * explicitly at offset 1"
        );
    }

    #[test]
    fn test_internal_error_after_separator() {
        // the comma does not make the following '-' unary
        let err = evaluate_expression("log(2,-4)", false).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_cache_reused_between_expressions() {
        let mut cache = EvaluationCache::new();
        let first = evaluate_expression_cached("2*3", &mut cache).unwrap();
        let second = evaluate_expression_cached("3*2", &mut cache).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(first.value, second.value);
    }
}

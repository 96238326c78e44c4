//! Stack evaluation of postfix sequences.

use shunt_ast::ExpressionNode;
use shunt_lexer::{Operator, Token};

use crate::cache::{memoized, EvaluationCache, OperationCache, Uncached};
use crate::error::EvalError;

/// Result of evaluating one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed value, possibly infinite or NaN
    pub value: f64,
    /// The tree of the computation
    pub tree: ExpressionNode,
}

/// Evaluate a postfix sequence, optionally memoizing binary operations in a
/// cache that lives for this call only.
pub fn evaluate(postfix: Vec<Token>, use_cache: bool) -> Result<Evaluation, EvalError> {
    if use_cache {
        evaluate_cached(postfix, &mut EvaluationCache::new())
    } else {
        evaluate_cached(postfix, &mut Uncached)
    }
}

/// Evaluate a postfix sequence against a caller-owned cache.
///
/// The cache only supplies scalars. Each operator still gets a fresh node,
/// so the tree is the same whether or not an entry was found.
pub fn evaluate_cached(
    postfix: Vec<Token>,
    cache: &mut dyn OperationCache,
) -> Result<Evaluation, EvalError> {
    let mut operands = OperandStack::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(value) => operands.push(value, ExpressionNode::number(value)),

            Token::Operator { op, unary: true } => {
                let (operand, node) = operands.pop_for(op, 1)?;
                let value = op
                    .apply_unary(operand)
                    .ok_or(EvalError::UnsupportedUnary(op.symbol()))?;
                operands.push(value, ExpressionNode::unary(op.symbol(), node));
            }

            Token::Operator { op, unary: false } => {
                operands.require(op, 2)?;
                let (rhs, rhs_node) = operands.pop_for(op, 2)?;
                let (lhs, lhs_node) = operands.pop_for(op, 2)?;
                let value = memoized(cache, op, lhs, rhs);
                operands.push(value, ExpressionNode::binary(op.symbol(), lhs_node, rhs_node));
            }

            Token::OpenParen
            | Token::CloseParen
            | Token::OpenLogBracket
            | Token::CloseLogBracket
            | Token::Separator => return Err(EvalError::UnexpectedToken(token.to_string())),
        }
    }

    let evaluation = operands.finish()?;
    log::debug!("evaluated to {:?}", evaluation.value);
    Ok(evaluation)
}

/// Value and node stacks, kept at equal length.
struct OperandStack {
    values: Vec<f64>,
    nodes: Vec<ExpressionNode>,
}

impl OperandStack {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn push(&mut self, value: f64, node: ExpressionNode) {
        self.values.push(value);
        self.nodes.push(node);
    }

    fn require(&self, op: Operator, needed: usize) -> Result<(), EvalError> {
        if self.len() < needed {
            return Err(EvalError::InsufficientOperands {
                symbol: op.symbol(),
                needed,
                available: self.len(),
            });
        }
        Ok(())
    }

    fn pop_for(&mut self, op: Operator, needed: usize) -> Result<(f64, ExpressionNode), EvalError> {
        match (self.values.pop(), self.nodes.pop()) {
            (Some(value), Some(node)) => Ok((value, node)),
            _ => Err(EvalError::InsufficientOperands {
                symbol: op.symbol(),
                needed,
                available: self.len(),
            }),
        }
    }

    fn finish(mut self) -> Result<Evaluation, EvalError> {
        match self.len() {
            0 => Err(EvalError::EmptyExpression),
            1 => match (self.values.pop(), self.nodes.pop()) {
                (Some(value), Some(tree)) => Ok(Evaluation { value, tree }),
                _ => Err(EvalError::EmptyExpression),
            },
            n => Err(EvalError::LeftoverOperands(n)),
        }
    }
}

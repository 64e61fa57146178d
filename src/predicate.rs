//! Boolean predicates and their AND, OR, NOT combinations.

use crate::defs::Error;
use crate::num::Decimal;
use core::cmp::Ordering;
use std::collections::HashMap;

/// Values substituted for named variables during evaluation.
pub type Bindings<T> = HashMap<String, T>;

/// Condition evaluated against an object.
pub trait Predicate<T> {
    /// Returns true if `object` satisfies the condition.
    /// Named variables are looked up in `bindings`.
    fn evaluate(&self, object: &T, bindings: &Bindings<T>) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T, &Bindings<T>) -> bool,
{
    fn evaluate(&self, object: &T, bindings: &Bindings<T>) -> bool {
        self(object, bindings)
    }
}

/// Predicate with a fixed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantPredicate(pub bool);

impl<T> Predicate<T> for ConstantPredicate {
    fn evaluate(&self, _object: &T, _bindings: &Bindings<T>) -> bool {
        self.0
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
    GreaterOrEqual,
    Greater,
}

impl ComparisonOperator {
    // unordered operands satisfy no operator
    fn matches(&self, ord: Option<Ordering>) -> bool {
        match ord {
            None => false,
            Some(ord) => match self {
                ComparisonOperator::Less => ord == Ordering::Less,
                ComparisonOperator::LessOrEqual => ord != Ordering::Greater,
                ComparisonOperator::Equal => ord == Ordering::Equal,
                ComparisonOperator::NotEqual => ord != Ordering::Equal,
                ComparisonOperator::GreaterOrEqual => ord != Ordering::Less,
                ComparisonOperator::Greater => ord == Ordering::Greater,
            },
        }
    }
}

/// Right hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Fixed value.
    Constant(Decimal),

    /// Value bound to a name at evaluation time.
    Variable(String),
}

/// Compares the evaluated number with an operand: `object <operator> operand`.
/// A missing variable or a NaN on either side makes the predicate false.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalComparison {
    pub operator: ComparisonOperator,
    pub operand: Operand,
}

impl DecimalComparison {
    pub fn new(operator: ComparisonOperator, operand: Operand) -> Self {
        DecimalComparison { operator, operand }
    }
}

impl Predicate<Decimal> for DecimalComparison {
    fn evaluate(&self, object: &Decimal, bindings: &Bindings<Decimal>) -> bool {
        let rhs = match &self.operand {
            Operand::Constant(d) => d,
            Operand::Variable(name) => match bindings.get(name) {
                Some(d) => d,
                None => return false,
            },
        };

        self.operator.matches(object.compare(rhs))
    }
}

/// Kind of a compound predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundKind {
    /// Negation of the first subpredicate.
    Not,

    /// True if all subpredicates are true. True for no subpredicates.
    And,

    /// True if any subpredicate is true. False for no subpredicates.
    Or,
}

/// Predicate combining the results of its subpredicates.
pub struct CompoundPredicate<T> {
    kind: CompoundKind,
    subpredicates: Vec<Box<dyn Predicate<T>>>,
}

impl<T> CompoundPredicate<T> {
    /// Creates a compound predicate.
    ///
    /// ## Panics
    ///
    /// Panics if `kind` is `Not` and `subpredicates` is empty.
    pub fn new(kind: CompoundKind, subpredicates: Vec<Box<dyn Predicate<T>>>) -> Self {
        match Self::try_new(kind, subpredicates) {
            Ok(p) => p,
            Err(_) => panic!("Unsupported predicate count of 0 for {kind:?}"),
        }
    }

    /// Creates a compound predicate.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `kind` is `Not` and `subpredicates` is empty.
    pub fn try_new(kind: CompoundKind, subpredicates: Vec<Box<dyn Predicate<T>>>) -> Result<Self, Error> {
        if kind == CompoundKind::Not && subpredicates.is_empty() {
            return Err(Error::InvalidArgument);
        }

        Ok(CompoundPredicate { kind, subpredicates })
    }

    /// Conjunction of `subpredicates`.
    pub fn and(subpredicates: Vec<Box<dyn Predicate<T>>>) -> Self {
        CompoundPredicate {
            kind: CompoundKind::And,
            subpredicates,
        }
    }

    /// Disjunction of `subpredicates`.
    pub fn or(subpredicates: Vec<Box<dyn Predicate<T>>>) -> Self {
        CompoundPredicate {
            kind: CompoundKind::Or,
            subpredicates,
        }
    }

    /// Negation of `predicate`.
    pub fn not(predicate: Box<dyn Predicate<T>>) -> Self {
        CompoundPredicate {
            kind: CompoundKind::Not,
            subpredicates: vec![predicate],
        }
    }

    pub fn kind(&self) -> CompoundKind {
        self.kind
    }

    pub fn subpredicates(&self) -> &[Box<dyn Predicate<T>>] {
        &self.subpredicates
    }
}

impl<T> Predicate<T> for CompoundPredicate<T> {
    fn evaluate(&self, object: &T, bindings: &Bindings<T>) -> bool {
        match self.kind {
            CompoundKind::And => self.subpredicates.iter().all(|p| p.evaluate(object, bindings)),
            CompoundKind::Or => self.subpredicates.iter().any(|p| p.evaluate(object, bindings)),
            CompoundKind::Not => !self.subpredicates[0].evaluate(object, bindings),
        }
    }
}

use crate::frontend::token::Token;
use std::{fmt, mem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::And => Some(LogicalOp::And),
            Token::Or => Some(LogicalOp::Or),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Eq,
    Ne,
    Le,
    Lt,
    Ge,
    Gt,
}

impl RelOp {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Equal => Some(RelOp::Eq),
            Token::NotEqual => Some(RelOp::Ne),
            Token::LessThanEqual => Some(RelOp::Le),
            Token::LessThan => Some(RelOp::Lt),
            Token::GreaterThanEqual => Some(RelOp::Ge),
            Token::GreaterThan => Some(RelOp::Gt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn additive(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(ArithOp::Add),
            Token::Minus => Some(ArithOp::Sub),
            _ => None,
        }
    }

    pub fn multiplicative(token: &Token) -> Option<Self> {
        match token {
            Token::Multiply => Some(ArithOp::Mul),
            Token::Divide => Some(ArithOp::Div),
            _ => None,
        }
    }

    pub fn is_additive(self) -> bool {
        matches!(self, ArithOp::Add | ArithOp::Sub)
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        })
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RelOp::Eq => "==",
            RelOp::Ne => "!=",
            RelOp::Le => "<=",
            RelOp::Lt => "<",
            RelOp::Ge => ">=",
            RelOp::Gt => ">",
        })
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        })
    }
}

/// A variable reference; `index` is present for array element access.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub index: Option<Box<Expression>>,
    pub line: usize,
}

impl Variable {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            index: None,
            line,
        }
    }

    pub fn indexed(name: impl Into<String>, index: Expression, line: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(Box::new(index)),
            line,
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Logical {
        op: LogicalOp,
        left: Box<Expression>,
        right: Box<Expression>,
        line: usize,
    },
    Not {
        operand: Box<Expression>,
        line: usize,
    },
    Relational {
        op: RelOp,
        left: Box<Expression>,
        right: Box<Expression>,
        line: usize,
    },
    Arithmetic {
        op: ArithOp,
        left: Box<Expression>,
        right: Box<Expression>,
        line: usize,
    },
    Variable(Variable),
    Call {
        name: String,
        line: usize,
    },
    IntConst {
        value: i64,
        line: usize,
    },
    FloatConst {
        value: f64,
        line: usize,
    },
    StringConst {
        value: String,
        line: usize,
    },
}

impl Expression {
    pub fn logical(op: LogicalOp, left: Expression, right: Expression) -> Self {
        let line = left.line();
        Expression::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
            line,
        }
    }

    pub fn not(operand: Expression, line: usize) -> Self {
        Expression::Not {
            operand: Box::new(operand),
            line,
        }
    }

    pub fn relational(op: RelOp, left: Expression, right: Expression) -> Self {
        let line = left.line();
        Expression::Relational {
            op,
            left: Box::new(left),
            right: Box::new(right),
            line,
        }
    }

    pub fn arithmetic(op: ArithOp, left: Expression, right: Expression) -> Self {
        let line = left.line();
        Expression::Arithmetic {
            op,
            left: Box::new(left),
            right: Box::new(right),
            line,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Expression::Logical { line, .. }
            | Expression::Not { line, .. }
            | Expression::Relational { line, .. }
            | Expression::Arithmetic { line, .. }
            | Expression::Call { line, .. }
            | Expression::IntConst { line, .. }
            | Expression::FloatConst { line, .. }
            | Expression::StringConst { line, .. } => *line,
            Expression::Variable(variable) => variable.line,
        }
    }

    fn is_leaf(&self) -> bool {
        match self {
            Expression::Variable(variable) => !variable.is_indexed(),
            Expression::Call { .. }
            | Expression::IntConst { .. }
            | Expression::FloatConst { .. }
            | Expression::StringConst { .. } => true,
            _ => false,
        }
    }

    /// Moves every non-leaf child of `self` onto `pending`, leaving
    /// placeholders behind.
    fn detach_children(&mut self, pending: &mut Vec<Expression>) {
        let mut detach = |child: &mut Expression| {
            if !child.is_leaf() {
                pending.push(mem::replace(child, Expression::IntConst { value: 0, line: 0 }));
            }
        };
        match self {
            Expression::Logical { left, right, .. }
            | Expression::Relational { left, right, .. }
            | Expression::Arithmetic { left, right, .. } => {
                detach(&mut **left);
                detach(&mut **right);
            }
            Expression::Not { operand, .. } => detach(&mut **operand),
            Expression::Variable(Variable {
                index: Some(index), ..
            }) => detach(&mut **index),
            _ => {}
        }
    }

    /// Binding strength, lowest first. Used to decide where the printer needs
    /// parentheses.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Expression::Logical { .. } | Expression::Not { .. } => 1,
            Expression::Relational { .. } => 2,
            Expression::Arithmetic { op, .. } if op.is_additive() => 3,
            Expression::Arithmetic { .. } => 4,
            _ => 5,
        }
    }
}

// Drops through a work list, so tree depth does not grow the call stack.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

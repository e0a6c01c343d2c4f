use crate::ast::{Expression, Variable};

/// A non-empty run of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementList {
    pub statements: Vec<Statement>,
    pub line: usize,
}

impl StatementList {
    pub fn new(statements: Vec<Statement>, line: usize) -> Self {
        Self { statements, line }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(AssignStmt),
    If(IfStmt),
    While(WhileStatement),
    Read(Read),
    Write(Write),
    Return(Return),
    Exit(Exit),
    Compound(StatementList),
}

impl Statement {
    pub fn line(&self) -> usize {
        match self {
            Statement::Assign(stmt) => stmt.line,
            Statement::If(stmt) => stmt.line,
            Statement::While(stmt) => stmt.line,
            Statement::Read(stmt) => stmt.line,
            Statement::Write(stmt) => stmt.line,
            Statement::Return(stmt) => stmt.line,
            Statement::Exit(stmt) => stmt.line,
            Statement::Compound(list) => list.line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Variable,
    pub expr: Expression,
    pub line: usize,
}

impl AssignStmt {
    pub fn new(target: Variable, expr: Expression, line: usize) -> Self {
        Self { target, expr, line }
    }
}

/// `then_block` and `else_block` are always brace-delimited, so an `else`
/// belongs to the nearest enclosing `if` by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Expression,
    pub then_block: StatementList,
    pub else_block: Option<StatementList>,
    pub line: usize,
}

impl IfStmt {
    pub fn new(
        cond: Expression,
        then_block: StatementList,
        else_block: Option<StatementList>,
        line: usize,
    ) -> Self {
        Self {
            cond,
            then_block,
            else_block,
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub cond: Expression,
    pub body: Box<Statement>,
    pub line: usize,
}

impl WhileStatement {
    pub fn new(cond: Expression, body: Statement, line: usize) -> Self {
        Self {
            cond,
            body: Box::new(body),
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub target: Variable,
    pub line: usize,
}

impl Read {
    pub fn new(target: Variable, line: usize) -> Self {
        Self { target, line }
    }
}

/// `expr` is an `Expression::StringConst` for the string form of `write`.
#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    pub expr: Expression,
    pub line: usize,
}

impl Write {
    pub fn new(expr: Expression, line: usize) -> Self {
        Self { expr, line }
    }

    pub fn is_string(&self) -> bool {
        matches!(self.expr, Expression::StringConst { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub expr: Expression,
    pub line: usize,
}

impl Return {
    pub fn new(expr: Expression, line: usize) -> Self {
        Self { expr, line }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exit {
    pub line: usize,
}

impl Exit {
    pub fn new(line: usize) -> Self {
        Self { line }
    }
}

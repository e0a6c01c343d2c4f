
// Abstract Syntax Tree definitions for the C-minus front end.
// One type per nonterminal category; every node records its source line and
// owns its children.

mod declarations;
mod display;
mod expressions;
mod program;
mod statements;
pub mod tree;
pub mod visitor;

pub use declarations::{DeclList, Type, VarDecl};
pub use expressions::{ArithOp, Expression, LogicalOp, RelOp, Variable};
pub use program::{ProcedureDecl, Program};
pub use statements::{
    AssignStmt, Exit, IfStmt, Read, Return, Statement, StatementList, WhileStatement, Write,
};
pub use tree::TreePrinter;
pub use visitor::{NodeCounter, Visitor};

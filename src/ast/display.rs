// Canonical source form of the tree. Reparsing the output yields the same
// tree shape.

use crate::ast::{
    DeclList, Expression, ProcedureDecl, Program, Statement, StatementList, VarDecl, Variable,
};
use crate::utils::string_utils::{format_float, quote};
use std::fmt;

const INDENT: &str = "    ";

fn pad(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        f.write_str(INDENT)?;
    }
    Ok(())
}

/// Writes `expr`, parenthesised when it binds looser than `min_rank`.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expression, min_rank: u8) -> fmt::Result {
    if expr.rank() < min_rank {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Logical {
                op, left, right, ..
            } => {
                write_operand(f, left, 1)?;
                write!(f, " {} ", op)?;
                write_operand(f, right, 2)
            }
            Expression::Not { operand, .. } => {
                f.write_str("!")?;
                write_operand(f, operand, 2)
            }
            Expression::Relational {
                op, left, right, ..
            } => {
                write_operand(f, left, 2)?;
                write!(f, " {} ", op)?;
                write_operand(f, right, 3)
            }
            Expression::Arithmetic {
                op, left, right, ..
            } => {
                let rank = self.rank();
                write_operand(f, left, rank)?;
                write!(f, " {} ", op)?;
                write_operand(f, right, rank + 1)
            }
            Expression::Variable(variable) => write!(f, "{}", variable),
            Expression::Call { name, .. } => write!(f, "{}()", name),
            Expression::IntConst { value, .. } => write!(f, "{}", value),
            Expression::FloatConst { value, .. } => f.write_str(&format_float(*value)),
            Expression::StringConst { value, .. } => f.write_str(&quote(value)),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.index {
            Some(index) => write!(f, "{}[{}]", self.name, index),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for VarDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(size) = self.array_size {
            write!(f, "[{}]", size)?;
        }
        Ok(())
    }
}

fn write_decls(f: &mut fmt::Formatter<'_>, decls: &DeclList, indent: usize) -> fmt::Result {
    for decl in &decls.decls {
        pad(f, indent)?;
        writeln!(f, "{};", decl)?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, list: &StatementList, indent: usize) -> fmt::Result {
    f.write_str("{\n")?;
    for statement in &list.statements {
        write_statement(f, statement, indent + 1)?;
    }
    pad(f, indent)?;
    f.write_str("}")
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, indent: usize) -> fmt::Result {
    pad(f, indent)?;
    match statement {
        Statement::Assign(stmt) => writeln!(f, "{} = {};", stmt.target, stmt.expr),
        Statement::If(stmt) => {
            write!(f, "if ({}) ", stmt.cond)?;
            write_block(f, &stmt.then_block, indent)?;
            if let Some(else_block) = &stmt.else_block {
                f.write_str(" else ")?;
                write_block(f, else_block, indent)?;
            }
            writeln!(f)
        }
        Statement::While(stmt) => {
            write!(f, "while ({})", stmt.cond)?;
            match stmt.body.as_ref() {
                Statement::Compound(list) => {
                    f.write_str(" ")?;
                    write_block(f, list, indent)?;
                    writeln!(f)
                }
                body => {
                    writeln!(f)?;
                    write_statement(f, body, indent + 1)
                }
            }
        }
        Statement::Read(stmt) => writeln!(f, "read({});", stmt.target),
        Statement::Write(stmt) => writeln!(f, "write({});", stmt.expr),
        Statement::Return(stmt) => writeln!(f, "return {};", stmt.expr),
        Statement::Exit(_) => writeln!(f, "exit;"),
        Statement::Compound(list) => {
            write_block(f, list, indent)?;
            writeln!(f)
        }
    }
}

impl fmt::Display for DeclList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decls(f, self, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl fmt::Display for StatementList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write_statement(f, statement, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProcedureDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}()", self.return_type, self.name)?;
        f.write_str("{\n")?;
        write_decls(f, &self.locals, 1)?;
        for statement in &self.body.statements {
            write_statement(f, statement, 1)?;
        }
        f.write_str("}\n")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(globals) = &self.globals {
            write_decls(f, globals, 0)?;
            writeln!(f)?;
        }
        for (i, procedure) in self.procedures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", procedure)?;
        }
        Ok(())
    }
}

use crate::ast::visitor::{
    walk_decl_list, walk_procedure, walk_program, walk_statement, walk_statement_list,
    walk_variable, Visitor,
};
use crate::ast::{
    DeclList, Expression, ProcedureDecl, Program, Statement, StatementList, VarDecl, Variable,
};
use crate::utils::string_utils::{format_float, quote};
use std::fmt::{self, Write};

/// Renders a tree one node per line, with `| ` per level of depth.
#[derive(Debug, Default)]
pub struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    pub fn render(program: &Program) -> String {
        let mut printer = TreePrinter::default();
        printer.visit_program(program);
        printer.out
    }

    fn line(&mut self, label: impl fmt::Display) {
        for _ in 0..self.depth {
            self.out.push_str("| ");
        }
        // Writing into a String cannot fail.
        let _ = writeln!(self.out, "{}", label);
    }

    fn nested(&mut self, label: impl fmt::Display, children: impl FnOnce(&mut Self)) {
        self.line(label);
        self.depth += 1;
        children(self);
        self.depth -= 1;
    }
}

impl Visitor for TreePrinter {
    fn visit_program(&mut self, program: &Program) {
        self.nested("Program", |this| walk_program(this, program));
    }

    fn visit_decl_list(&mut self, decls: &DeclList) {
        self.nested("DeclList", |this| walk_decl_list(this, decls));
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        match decl.array_size {
            Some(size) => self.line(format!("VarDecl {}: {}[{}]", decl.name, decl.ty, size)),
            None => self.line(format!("VarDecl {}: {}", decl.name, decl.ty)),
        }
    }

    fn visit_procedure(&mut self, procedure: &ProcedureDecl) {
        let label = format!("ProcedureDecl {} {}", procedure.return_type, procedure.name);
        self.nested(label, |this| walk_procedure(this, procedure));
    }

    fn visit_statement_list(&mut self, list: &StatementList) {
        self.nested("StatementList", |this| walk_statement_list(this, list));
    }

    fn visit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::If(stmt) => self.nested("If", |this| {
                this.visit_expression(&stmt.cond);
                this.nested("Then", |this| this.visit_statement_list(&stmt.then_block));
                if let Some(else_block) = &stmt.else_block {
                    this.nested("Else", |this| this.visit_statement_list(else_block));
                }
            }),
            Statement::Assign(_) => self.nested("Assignment", |this| walk_statement(this, statement)),
            Statement::While(_) => self.nested("While", |this| walk_statement(this, statement)),
            Statement::Read(_) => self.nested("Read", |this| walk_statement(this, statement)),
            Statement::Write(_) => self.nested("Write", |this| walk_statement(this, statement)),
            Statement::Return(_) => self.nested("Return", |this| walk_statement(this, statement)),
            Statement::Exit(_) => self.line("Exit"),
            Statement::Compound(list) => {
                self.nested("Compound", |this| walk_statement_list(this, list))
            }
        }
    }

    fn visit_expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Logical {
                op, left, right, ..
            } => self.nested(format!("Logical {}", op), |this| {
                this.visit_expression(left);
                this.visit_expression(right);
            }),
            Expression::Not { operand, .. } => {
                self.nested("Not", |this| this.visit_expression(operand))
            }
            Expression::Relational {
                op, left, right, ..
            } => self.nested(format!("Relational {}", op), |this| {
                this.visit_expression(left);
                this.visit_expression(right);
            }),
            Expression::Arithmetic {
                op, left, right, ..
            } => self.nested(format!("Arithmetic {}", op), |this| {
                this.visit_expression(left);
                this.visit_expression(right);
            }),
            Expression::Variable(variable) => self.visit_variable(variable),
            Expression::Call { name, .. } => self.line(format!("Call {}", name)),
            Expression::IntConst { value, .. } => self.line(format!("IntConst {}", value)),
            Expression::FloatConst { value, .. } => {
                self.line(format!("FloatConst {}", format_float(*value)))
            }
            Expression::StringConst { value, .. } => {
                self.line(format!("StringConst {}", quote(value)))
            }
        }
    }

    fn visit_variable(&mut self, variable: &Variable) {
        if variable.is_indexed() {
            let label = format!("Variable {}[]", variable.name);
            self.nested(label, |this| walk_variable(this, variable));
        } else {
            self.line(format!("Variable {}", variable.name));
        }
    }
}

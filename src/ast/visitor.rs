use crate::ast::{
    DeclList, Expression, ProcedureDecl, Program, Statement, StatementList, VarDecl, Variable,
};

/// Read-only traversal over the tree.
///
/// Every method defaults to the matching `walk_*` function, which visits the
/// children in source order. Override a method to act on a node, and call the
/// walker from it to keep descending.
pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_decl_list(&mut self, decls: &DeclList) {
        walk_decl_list(self, decls);
    }

    fn visit_var_decl(&mut self, _decl: &VarDecl) {}

    fn visit_procedure(&mut self, procedure: &ProcedureDecl) {
        walk_procedure(self, procedure);
    }

    fn visit_statement_list(&mut self, list: &StatementList) {
        walk_statement_list(self, list);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        walk_statement(self, statement);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    fn visit_variable(&mut self, variable: &Variable) {
        walk_variable(self, variable);
    }
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    if let Some(globals) = &program.globals {
        visitor.visit_decl_list(globals);
    }
    for procedure in &program.procedures {
        visitor.visit_procedure(procedure);
    }
}

pub fn walk_decl_list<V: Visitor + ?Sized>(visitor: &mut V, decls: &DeclList) {
    for decl in &decls.decls {
        visitor.visit_var_decl(decl);
    }
}

pub fn walk_procedure<V: Visitor + ?Sized>(visitor: &mut V, procedure: &ProcedureDecl) {
    visitor.visit_decl_list(&procedure.locals);
    visitor.visit_statement_list(&procedure.body);
}

pub fn walk_statement_list<V: Visitor + ?Sized>(visitor: &mut V, list: &StatementList) {
    for statement in &list.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Assign(stmt) => {
            visitor.visit_variable(&stmt.target);
            visitor.visit_expression(&stmt.expr);
        }
        Statement::If(stmt) => {
            visitor.visit_expression(&stmt.cond);
            visitor.visit_statement_list(&stmt.then_block);
            if let Some(else_block) = &stmt.else_block {
                visitor.visit_statement_list(else_block);
            }
        }
        Statement::While(stmt) => {
            visitor.visit_expression(&stmt.cond);
            visitor.visit_statement(&stmt.body);
        }
        Statement::Read(stmt) => visitor.visit_variable(&stmt.target),
        Statement::Write(stmt) => visitor.visit_expression(&stmt.expr),
        Statement::Return(stmt) => visitor.visit_expression(&stmt.expr),
        Statement::Exit(_) => {}
        Statement::Compound(list) => visitor.visit_statement_list(list),
    }
}

pub fn walk_expression<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Logical { left, right, .. }
        | Expression::Relational { left, right, .. }
        | Expression::Arithmetic { left, right, .. } => {
            visitor.visit_expression(left);
            visitor.visit_expression(right);
        }
        Expression::Not { operand, .. } => visitor.visit_expression(operand),
        Expression::Variable(variable) => visitor.visit_variable(variable),
        Expression::Call { .. }
        | Expression::IntConst { .. }
        | Expression::FloatConst { .. }
        | Expression::StringConst { .. } => {}
    }
}

pub fn walk_variable<V: Visitor + ?Sized>(visitor: &mut V, variable: &Variable) {
    if let Some(index) = &variable.index {
        visitor.visit_expression(index);
    }
}

/// Counts every node the visitor reaches.
#[derive(Debug, Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl NodeCounter {
    pub fn count(program: &Program) -> usize {
        let mut counter = NodeCounter::default();
        counter.visit_program(program);
        counter.count
    }
}

impl Visitor for NodeCounter {
    fn visit_program(&mut self, program: &Program) {
        self.count += 1;
        walk_program(self, program);
    }

    fn visit_decl_list(&mut self, decls: &DeclList) {
        self.count += 1;
        walk_decl_list(self, decls);
    }

    fn visit_var_decl(&mut self, _decl: &VarDecl) {
        self.count += 1;
    }

    fn visit_procedure(&mut self, procedure: &ProcedureDecl) {
        self.count += 1;
        walk_procedure(self, procedure);
    }

    fn visit_statement_list(&mut self, list: &StatementList) {
        self.count += 1;
        walk_statement_list(self, list);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        self.count += 1;
        walk_statement(self, statement);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.count += 1;
        walk_expression(self, expr);
    }

    fn visit_variable(&mut self, variable: &Variable) {
        self.count += 1;
        walk_variable(self, variable);
    }
}

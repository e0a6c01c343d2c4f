use crate::ast::{DeclList, StatementList, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub globals: Option<DeclList>,
    pub procedures: Vec<ProcedureDecl>,
    pub line: usize,
}

impl Program {
    pub fn new(globals: Option<DeclList>, procedures: Vec<ProcedureDecl>, line: usize) -> Self {
        Self {
            globals,
            procedures,
            line,
        }
    }

    pub fn procedure(&self, name: &str) -> Option<&ProcedureDecl> {
        self.procedures.iter().find(|procedure| procedure.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDecl {
    pub return_type: Type,
    pub name: String,
    pub locals: DeclList,
    pub body: StatementList,
    pub line: usize,
}

impl ProcedureDecl {
    pub fn new(
        return_type: Type,
        name: impl Into<String>,
        locals: DeclList,
        body: StatementList,
        line: usize,
    ) -> Self {
        Self {
            return_type,
            name: name.into(),
            locals,
            body,
            line,
        }
    }
}

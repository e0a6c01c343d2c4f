use crate::frontend::token::Token;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
}

impl Type {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Int => Some(Type::Int),
            Token::Float => Some(Type::Float),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => f.write_str("int"),
            Type::Float => f.write_str("float"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub name: String,
    pub ty: Type,
    pub array_size: Option<u64>,
    pub line: usize,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, ty: Type, array_size: Option<u64>, line: usize) -> Self {
        Self {
            name: name.into(),
            ty,
            array_size,
            line,
        }
    }

    pub fn is_array(&self) -> bool {
        self.array_size.is_some()
    }
}

/// Declarations in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclList {
    pub decls: Vec<VarDecl>,
    pub line: usize,
}

impl DeclList {
    pub fn new(decls: Vec<VarDecl>, line: usize) -> Self {
        Self { decls, line }
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VarDecl> {
        self.decls.iter()
    }

    pub fn get(&self, name: &str) -> Option<&VarDecl> {
        self.decls.iter().find(|decl| decl.name == name)
    }
}

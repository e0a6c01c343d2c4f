use crate::ast::{
    ArithOp, AssignStmt, DeclList, Exit, Expression, IfStmt, LogicalOp, ProcedureDecl, Program,
    Read, RelOp, Return, Statement, StatementList, Type, VarDecl, Variable, WhileStatement, Write,
};
use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Lexeme, Token};
use crate::utils::config::ParseOptions;
use crate::utils::diagnostics::Diagnostic;
use std::mem;

type ParseResult<T> = Result<T, Diagnostic>;

/// Recursive-descent parser pulling tokens from its own lexer.
///
/// The first token that cannot extend the derivation ends the parse. Lexical
/// diagnostics from the whole input are reported alongside it.
///
/// `depth` tracks the height of the tree under construction: each statement,
/// parenthesised expression, array index, `!` and chained binary operator adds
/// a level. Going past `ParseOptions::max_nesting` is a syntax error.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Lexeme,
    depth: usize,
    max_nesting: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &'a str, options: ParseOptions) -> Self {
        Self::from_lexer(Lexer::with_options(source, options))
    }

    pub fn from_lexer(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let max_nesting = lexer.options().max_nesting;
        Self {
            lexer,
            current,
            depth: 0,
            max_nesting,
        }
    }

    /// Parses one compilation unit. Any diagnostic, lexical or syntax, fails
    /// the parse.
    pub fn parse(mut self) -> Result<Program, Vec<Diagnostic>> {
        let result = self.program();
        if result.is_err() {
            while self.lexer.next_token().token != Token::Eof {}
        }
        let mut diagnostics = self.lexer.take_diagnostics();
        match result {
            Ok(program) if diagnostics.is_empty() => Ok(program),
            Ok(_) => Err(diagnostics.into_sorted()),
            Err(error) => {
                diagnostics.push(error);
                Err(diagnostics.into_sorted())
            }
        }
    }

    fn next(&mut self) -> Lexeme {
        let following = self.lexer.next_token();
        mem::replace(&mut self.current, following)
    }

    fn line(&self) -> usize {
        self.current.line
    }

    fn check(&self, expected: &Token) -> bool {
        self.current.token.same_kind(expected)
    }

    fn unexpected(&self, expected: &str) -> Diagnostic {
        Diagnostic::syntax(expected, &self.current.token, self.current.line)
    }

    fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_nesting {
            return Err(Diagnostic::too_deep(
                self.max_nesting,
                &self.current.token,
                self.line(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn expect(&mut self, expected: Token) -> ParseResult<Lexeme> {
        if !self.check(&expected) {
            return Err(self.unexpected(&format!("'{}'", expected)));
        }
        Ok(self.next())
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match &self.current.token {
            Token::Ident(name) => {
                let name = name.clone();
                self.next();
                Ok(name)
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    fn expect_array_size(&mut self) -> ParseResult<u64> {
        match self.current.token {
            Token::IntCon(size) if size >= 0 => {
                self.next();
                Ok(size as u64)
            }
            _ => Err(self.unexpected("an integer array size")),
        }
    }

    fn parse_type(&mut self) -> ParseResult<Type> {
        match Type::from_token(&self.current.token) {
            Some(ty) => {
                self.next();
                Ok(ty)
            }
            None => Err(self.unexpected("a type ('int' or 'float')")),
        }
    }

    /**
     * Parse a program according to the grammar:
     * Program    = [ DeclList ] Procedures .
     * Procedures = ProcedureDecl { ProcedureDecl } .
     *
     * Global declarations and procedures both open with `Type IDENT`; the
     * token after the identifier decides which one follows. Once a procedure
     * has been seen only procedures may follow.
     */
    fn program(&mut self) -> ParseResult<Program> {
        let line = self.line();
        let mut globals = Vec::new();
        let mut globals_line = line;
        let mut procedures = Vec::new();
        loop {
            let start = self.line();
            let ty = self.parse_type()?;
            let name = self.expect_ident()?;
            if procedures.is_empty() && !self.check(&Token::LParen) {
                if globals.is_empty() {
                    globals_line = start;
                }
                globals.extend(self.identifier_list(ty, name, start)?);
                continue;
            }
            procedures.push(self.procedure_decl(ty, name, start)?);
            if self.check(&Token::Eof) {
                break;
            }
        }
        let globals = (!globals.is_empty()).then(|| DeclList::new(globals, globals_line));
        Ok(Program::new(globals, procedures, line))
    }

    /**
     * Parse the rest of a procedure once `Type IDENT` has been read:
     * ProcedureDecl = Type IDENT "(" ")" "{" [ DeclList ] StatementList "}" .
     *
     * Declarations written between ")" and "{" are also accepted and come
     * first in `locals`.
     */
    fn procedure_decl(
        &mut self,
        return_type: Type,
        name: String,
        line: usize,
    ) -> ParseResult<ProcedureDecl> {
        self.expect(Token::LParen)?;
        self.expect(Token::RParen)?;
        let mut decls = self.declarations()?;
        let open = self.expect(Token::LBrace)?;
        decls.extend(self.declarations()?);
        let locals_line = decls.first().map_or(open.line, |decl| decl.line);
        let body = self.statement_list()?;
        self.expect(Token::RBrace)?;
        Ok(ProcedureDecl::new(
            return_type,
            name,
            DeclList::new(decls, locals_line),
            body,
            line,
        ))
    }

    /**
     * Parse zero or more declaration groups:
     * DeclList = ( Type IdentifierList ";" ) { Type IdentifierList ";" } .
     */
    fn declarations(&mut self) -> ParseResult<Vec<VarDecl>> {
        let mut decls = Vec::new();
        while self.current.token.is_type() {
            let start = self.line();
            let ty = self.parse_type()?;
            let name = self.expect_ident()?;
            decls.extend(self.identifier_list(ty, name, start)?);
        }
        Ok(decls)
    }

    /**
     * Parse an identifier list whose first identifier has been read, through
     * the closing ";":
     * IdentifierList = VarDecl { "," VarDecl } .
     */
    fn identifier_list(
        &mut self,
        ty: Type,
        first: String,
        line: usize,
    ) -> ParseResult<Vec<VarDecl>> {
        let mut decls = vec![self.var_decl(ty, first, line)?];
        while self.check(&Token::Comma) {
            self.next();
            let line = self.line();
            let name = self.expect_ident()?;
            decls.push(self.var_decl(ty, name, line)?);
        }
        self.expect(Token::Semicolon)?;
        Ok(decls)
    }

    /**
     * VarDecl = IDENT | IDENT "[" INTCON "]" .
     */
    fn var_decl(&mut self, ty: Type, name: String, line: usize) -> ParseResult<VarDecl> {
        let array_size = if self.check(&Token::LBrack) {
            self.next();
            let size = self.expect_array_size()?;
            self.expect(Token::RBrack)?;
            Some(size)
        } else {
            None
        };
        Ok(VarDecl::new(name, ty, array_size, line))
    }

    /**
     * StatementList = Statement { Statement } .
     */
    fn statement_list(&mut self) -> ParseResult<StatementList> {
        let line = self.line();
        let mut statements = vec![self.statement()?];
        while self.current.token.starts_statement() {
            statements.push(self.statement()?);
        }
        Ok(StatementList::new(statements, line))
    }

    fn statement(&mut self) -> ParseResult<Statement> {
        self.descend()?;
        let statement = self.statement_kind();
        self.ascend(1);
        statement
    }

    /**
     * Parse a statement according to the grammar:
     * Statement = Variable "=" Expr ";"
     *           | "if" "(" Expr ")" CompoundStmt [ "else" CompoundStmt ]
     *           | "while" "(" Expr ")" Statement
     *           | "read" "(" Variable ")" ";"
     *           | "write" "(" ( Expr | STRING ) ")" ";"
     *           | "return" Expr ";"
     *           | "exit" ";"
     *           | CompoundStmt .
     */
    fn statement_kind(&mut self) -> ParseResult<Statement> {
        let line = self.line();
        match &self.current.token {
            Token::Ident(_) => {
                let target = self.variable()?;
                self.expect(Token::Assign)?;
                let expr = self.expression()?;
                self.expect(Token::Semicolon)?;
                Ok(Statement::Assign(AssignStmt::new(target, expr, line)))
            }
            Token::If => {
                self.next();
                let cond = self.condition()?;
                let then_block = self.compound_statement()?;
                let else_block = if self.check(&Token::Else) {
                    self.next();
                    Some(self.compound_statement()?)
                } else {
                    None
                };
                Ok(Statement::If(IfStmt::new(cond, then_block, else_block, line)))
            }
            Token::While => {
                self.next();
                let cond = self.condition()?;
                let body = self.statement()?;
                Ok(Statement::While(WhileStatement::new(cond, body, line)))
            }
            Token::Read => {
                self.next();
                self.expect(Token::LParen)?;
                let target = self.variable()?;
                self.expect(Token::RParen)?;
                self.expect(Token::Semicolon)?;
                Ok(Statement::Read(Read::new(target, line)))
            }
            Token::Write => {
                self.next();
                self.expect(Token::LParen)?;
                let expr = match &self.current.token {
                    Token::StringLiteral(value) => {
                        let value = value.clone();
                        let literal = self.next();
                        Expression::StringConst {
                            value,
                            line: literal.line,
                        }
                    }
                    _ => self.expression()?,
                };
                self.expect(Token::RParen)?;
                self.expect(Token::Semicolon)?;
                Ok(Statement::Write(Write::new(expr, line)))
            }
            Token::Return => {
                self.next();
                let expr = self.expression()?;
                self.expect(Token::Semicolon)?;
                Ok(Statement::Return(Return::new(expr, line)))
            }
            Token::Exit => {
                self.next();
                self.expect(Token::Semicolon)?;
                Ok(Statement::Exit(Exit::new(line)))
            }
            Token::LBrace => Ok(Statement::Compound(self.compound_statement()?)),
            _ => Err(self.unexpected("a statement")),
        }
    }

    /**
     * Test = "(" Expr ")" .
     */
    fn condition(&mut self) -> ParseResult<Expression> {
        self.expect(Token::LParen)?;
        let cond = self.expression()?;
        self.expect(Token::RParen)?;
        Ok(cond)
    }

    /**
     * CompoundStmt = "{" StatementList "}" .
     */
    fn compound_statement(&mut self) -> ParseResult<StatementList> {
        let open = self.expect(Token::LBrace)?;
        let list = self.statement_list()?;
        self.expect(Token::RBrace)?;
        Ok(StatementList::new(list.statements, open.line))
    }

    /**
     * Parse an expression according to the grammar:
     * Expr = Expr ( "&&" | "||" ) SimpleExpr | "!" SimpleExpr | SimpleExpr .
     */
    fn expression(&mut self) -> ParseResult<Expression> {
        let mut lhs = if self.check(&Token::Not) {
            self.descend()?;
            let line = self.next().line;
            let operand = self.simple_expression()?;
            self.ascend(1);
            Expression::not(operand, line)
        } else {
            self.simple_expression()?
        };
        let mut levels = 0;
        while let Some(op) = LogicalOp::from_token(&self.current.token) {
            self.descend()?;
            levels += 1;
            self.next();
            let rhs = self.simple_expression()?;
            lhs = Expression::logical(op, lhs, rhs);
        }
        self.ascend(levels);
        Ok(lhs)
    }

    /**
     * SimpleExpr = SimpleExpr relop AddExpr | AddExpr .
     */
    fn simple_expression(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.additive_expression()?;
        let mut levels = 0;
        while let Some(op) = RelOp::from_token(&self.current.token) {
            self.descend()?;
            levels += 1;
            self.next();
            let rhs = self.additive_expression()?;
            lhs = Expression::relational(op, lhs, rhs);
        }
        self.ascend(levels);
        Ok(lhs)
    }

    /**
     * AddExpr = AddExpr ( "+" | "-" ) MulExpr | MulExpr .
     */
    fn additive_expression(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.term()?;
        let mut levels = 0;
        while let Some(op) = ArithOp::additive(&self.current.token) {
            self.descend()?;
            levels += 1;
            self.next();
            let rhs = self.term()?;
            lhs = Expression::arithmetic(op, lhs, rhs);
        }
        self.ascend(levels);
        Ok(lhs)
    }

    /**
     * MulExpr = MulExpr ( "*" | "/" ) Factor | Factor .
     */
    fn term(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.factor()?;
        let mut levels = 0;
        while let Some(op) = ArithOp::multiplicative(&self.current.token) {
            self.descend()?;
            levels += 1;
            self.next();
            let rhs = self.factor()?;
            lhs = Expression::arithmetic(op, lhs, rhs);
        }
        self.ascend(levels);
        Ok(lhs)
    }

    /**
     * Factor = Variable | INTCON | FLOATCON | IDENT "(" ")" | "(" Expr ")" .
     */
    fn factor(&mut self) -> ParseResult<Expression> {
        let line = self.line();
        match self.current.token {
            Token::Ident(_) => {
                let name = self.expect_ident()?;
                if self.check(&Token::LParen) {
                    self.next();
                    self.expect(Token::RParen)?;
                    Ok(Expression::Call { name, line })
                } else {
                    Ok(Expression::Variable(self.variable_rest(name, line)?))
                }
            }
            Token::IntCon(value) => {
                self.next();
                Ok(Expression::IntConst { value, line })
            }
            Token::FloatCon(value) => {
                self.next();
                Ok(Expression::FloatConst { value, line })
            }
            Token::LParen => {
                self.descend()?;
                self.next();
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                self.ascend(1);
                Ok(expr)
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /**
     * Variable = IDENT | IDENT "[" Expr "]" .
     */
    fn variable(&mut self) -> ParseResult<Variable> {
        let line = self.line();
        let name = self.expect_ident()?;
        self.variable_rest(name, line)
    }

    fn variable_rest(&mut self, name: String, line: usize) -> ParseResult<Variable> {
        if !self.check(&Token::LBrack) {
            return Ok(Variable::new(name, line));
        }
        self.descend()?;
        self.next();
        let index = self.expression()?;
        self.expect(Token::RBrack)?;
        self.ascend(1);
        Ok(Variable::indexed(name, index, line))
    }
}

use crate::ast::{BinOpKind, Block, Decl, Expr, ProcDecl, Program, Stmt, TypeSpec, UnaryOpKind, VarDecl};
use crate::errors::{PascError, PascResult};
use crate::frontend::token::Token;
use std::mem;
use std::slice::Iter;

pub struct Parser<'a> {
    current_token: Token,
    line_number: usize,
    iter: Iter<'a, (Token, usize)>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        let mut parser = Self {
            current_token: Token::Eof,
            line_number: 1,
            iter: tokens.iter(),
        };
        parser.next();
        parser
    }

    // Once the stream is exhausted the cursor stays on Eof.
    fn next(&mut self) {
        if let Some((token, line)) = self.iter.next() {
            self.current_token = token.clone();
            self.line_number = *line;
        }
    }

    fn expect(&mut self, expected: Token) -> PascResult<()> {
        if mem::discriminant(&expected) != mem::discriminant(&self.current_token) {
            return Err(PascError::syntax_error(
                expected.to_string(),
                self.current_token.to_string(),
                self.line_number,
            ));
        }
        self.next();
        Ok(())
    }

    fn get_identifier(&self) -> PascResult<String> {
        match &self.current_token {
            Token::Ident(name) => Ok(name.clone()),
            _ => Err(PascError::syntax_error(
                "identifier",
                self.current_token.to_string(),
                self.line_number,
            )),
        }
    }

    fn expect_ident(&mut self) -> PascResult<()> {
        if !matches!(self.current_token, Token::Ident(_)) {
            return Err(PascError::syntax_error(
                "identifier",
                self.current_token.to_string(),
                self.line_number,
            ));
        }
        self.next();
        Ok(())
    }

    /**
     * Parse a program according to the grammar:
     * program = "PROGRAM" ident ";" block "."
     */
    fn program(&mut self) -> PascResult<Program> {
        self.expect(Token::Program)?;
        let name = self.get_identifier()?;
        self.expect_ident()?;
        self.expect(Token::Semicolon)?;
        let block = self.block()?;
        self.expect(Token::Dot)?;
        Ok(Program { name, block })
    }

    /**
     * Parse a block according to the grammar:
     * block = declarations compound_statement
     */
    fn block(&mut self) -> PascResult<Block> {
        let declarations = self.declarations()?;
        let body = self.compound_statement()?;
        Ok(Block { declarations, body })
    }

    /**
     * Parse declarations according to the grammar:
     * declarations = [ "VAR" ( var_decl ";" )+ ]
     *                { "PROCEDURE" ident ";" block ";" }
     */
    fn declarations(&mut self) -> PascResult<Vec<Decl>> {
        let mut declarations = Vec::new();
        if self.current_token == Token::Var {
            self.expect(Token::Var)?;
            loop {
                declarations.extend(self.var_decl()?);
                self.expect(Token::Semicolon)?;
                if !matches!(self.current_token, Token::Ident(_)) {
                    break;
                }
            }
        }
        while self.current_token == Token::Procedure {
            self.expect(Token::Procedure)?;
            let name = self.get_identifier()?;
            self.expect_ident()?;
            self.expect(Token::Semicolon)?;
            let block = self.block()?;
            self.expect(Token::Semicolon)?;
            declarations.push(Decl::Procedure(ProcDecl { name, block }));
        }
        Ok(declarations)
    }

    /**
     * Parse a variable declaration according to the grammar:
     * var_decl = ident { "," ident } ":" type_spec
     *
     * One declaration line yields one VarDecl per named variable.
     */
    fn var_decl(&mut self) -> PascResult<Vec<Decl>> {
        let mut names = vec![self.get_identifier()?];
        self.expect_ident()?;
        while self.current_token == Token::Comma {
            self.expect(Token::Comma)?;
            names.push(self.get_identifier()?);
            self.expect_ident()?;
        }
        self.expect(Token::Colon)?;
        let type_spec = self.type_spec()?;
        Ok(names
            .into_iter()
            .map(|name| Decl::Var(VarDecl { name, type_spec }))
            .collect())
    }

    /**
     * Parse a type specification according to the grammar:
     * type_spec = "INTEGER" | "REAL"
     */
    fn type_spec(&mut self) -> PascResult<TypeSpec> {
        match self.current_token {
            Token::Integer => {
                self.next();
                Ok(TypeSpec::Integer)
            }
            Token::Real => {
                self.next();
                Ok(TypeSpec::Real)
            }
            _ => Err(PascError::syntax_error(
                "'INTEGER' or 'REAL'",
                self.current_token.to_string(),
                self.line_number,
            )),
        }
    }

    /**
     * Parse a compound statement according to the grammar:
     * compound_statement = "BEGIN" statement_list "END"
     * statement_list     = statement { ";" statement }
     */
    fn compound_statement(&mut self) -> PascResult<Stmt> {
        self.expect(Token::Begin)?;
        let mut statements = vec![self.statement()?];
        while self.current_token == Token::Semicolon {
            self.expect(Token::Semicolon)?;
            statements.push(self.statement()?);
        }
        self.expect(Token::End)?;
        Ok(Stmt::Compound(statements))
    }

    /**
     * Parse a statement according to the grammar:
     * statement = compound_statement | assignment | empty
     */
    fn statement(&mut self) -> PascResult<Stmt> {
        match &self.current_token {
            Token::Begin => self.compound_statement(),
            Token::Ident(_) => self.assignment(),
            _ => Ok(Stmt::NoOp),
        }
    }

    /**
     * Parse an assignment according to the grammar:
     * assignment = ident ":=" expression [ "?" expression ":" expression ]
     *
     * The ternary suffix becomes an ordinary conditional expression whose
     * branch is selected when the assignment executes.
     */
    fn assignment(&mut self) -> PascResult<Stmt> {
        let name = self.get_identifier()?;
        self.expect_ident()?;
        self.expect(Token::Assign)?;
        let mut value = self.expression()?;
        if self.current_token == Token::Question {
            self.expect(Token::Question)?;
            let then_branch = self.expression()?;
            self.expect(Token::Colon)?;
            let else_branch = self.expression()?;
            value = Expr::Conditional {
                condition: Box::new(value),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            };
        }
        Ok(Stmt::Assign { name, value })
    }

    /**
     * Parse an expression according to the grammar:
     * expression = term { ( "+" | "-" ) term }
     */
    fn expression(&mut self) -> PascResult<Expr> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.current_token {
                Token::Plus => BinOpKind::Add,
                Token::Minus => BinOpKind::Subtract,
                _ => break,
            };
            self.next();
            let rhs = self.term()?;
            lhs = Expr::BinOp {
                left: Box::new(lhs),
                op,
                right: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /**
     * Parse a term according to the grammar:
     * term = factor { ( "*" | "/" | "DIV" ) factor }
     */
    fn term(&mut self) -> PascResult<Expr> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.current_token {
                Token::Multiply => BinOpKind::Multiply,
                Token::FloatDiv => BinOpKind::FloatDivide,
                Token::IntDiv => BinOpKind::IntDivide,
                _ => break,
            };
            self.next();
            let rhs = self.factor()?;
            lhs = Expr::BinOp {
                left: Box::new(lhs),
                op,
                right: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /**
     * Parse a factor according to the grammar:
     * factor = ( "+" | "-" ) factor | int_const | real_const
     *        | "(" expression ")" | ident
     */
    fn factor(&mut self) -> PascResult<Expr> {
        match &self.current_token {
            Token::Plus => {
                self.expect(Token::Plus)?;
                Ok(Expr::UnaryOp {
                    op: UnaryOpKind::Plus,
                    operand: Box::new(self.factor()?),
                })
            }
            Token::Minus => {
                self.expect(Token::Minus)?;
                Ok(Expr::UnaryOp {
                    op: UnaryOpKind::Minus,
                    operand: Box::new(self.factor()?),
                })
            }
            Token::IntegerConst(value) => {
                let value = *value;
                self.next();
                Ok(Expr::IntegerLiteral(value))
            }
            Token::RealConst(value) => {
                let value = *value;
                self.next();
                Ok(Expr::RealLiteral(value))
            }
            Token::LParen => {
                self.expect(Token::LParen)?;
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Token::Ident(_) => {
                let name = self.get_identifier()?;
                self.expect_ident()?;
                Ok(Expr::Var(name))
            }
            _ => Err(PascError::syntax_error(
                "expression",
                self.current_token.to_string(),
                self.line_number,
            )),
        }
    }

    pub fn parse(&mut self) -> PascResult<Program> {
        let program = self.program()?;
        if self.current_token != Token::Eof {
            return Err(PascError::syntax_error(
                "end of input",
                self.current_token.to_string(),
                self.line_number,
            ));
        }
        Ok(program)
    }
}

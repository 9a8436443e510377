/*
*                    pasc -- Pascal subset interpreter.
*
* program            = "PROGRAM" ident ";" block "." ;
* block              = declarations compound_statement ;
* declarations       = [ "VAR" ( var_decl ";" )+ ]
*                      { "PROCEDURE" ident ";" block ";" } ;
* var_decl           = ident { "," ident } ":" type_spec ;
* type_spec          = "INTEGER" | "REAL" ;
* compound_statement = "BEGIN" statement_list "END" ;
* statement_list     = statement { ";" statement } ;
* statement          = compound_statement | assignment | empty ;
* assignment         = ident ":=" expression [ "?" expression ":" expression ] ;
* expression         = term { ( "+" | "-" ) term } ;
* term               = factor { ( "*" | "/" | "DIV" ) factor } ;
* factor             = ( "+" | "-" ) factor | int_const | real_const
*                    | "(" expression ")" | ident ;
*/

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpec {
    Integer,
    Real,
}

impl TypeSpec {
    pub fn name(self) -> &'static str {
        match self {
            TypeSpec::Integer => "INTEGER",
            TypeSpec::Real => "REAL",
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub declarations: Vec<Decl>,
    pub body: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Var(VarDecl),
    Procedure(ProcDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub type_spec: TypeSpec,
}

// Parsed and bound, but never invoked: there is no call mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcDecl {
    pub name: String,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Compound(Vec<Stmt>),
    Assign { name: String, value: Expr },
    NoOp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral(i64),
    RealLiteral(f64),
    Var(String),
    BinOp {
        left: Box<Expr>,
        op: BinOpKind,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOpKind,
        operand: Box<Expr>,
    },
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Subtract,
    Multiply,
    FloatDivide,
    IntDivide,
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOpKind::Add => "+",
            BinOpKind::Subtract => "-",
            BinOpKind::Multiply => "*",
            BinOpKind::FloatDivide => "/",
            BinOpKind::IntDivide => "DIV",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Plus,
    Minus,
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnaryOpKind::Plus => "+",
            UnaryOpKind::Minus => "-",
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntegerLiteral(value) => write!(f, "{}", value),
            Expr::RealLiteral(value) => write!(f, "{:?}", value),
            Expr::Var(name) => f.write_str(name),
            Expr::BinOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expr::UnaryOp { op, operand } => write!(f, "({}{})", op, operand),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "({} ? {} : {})", condition, then_branch, else_branch),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROGRAM {}", self.name)?;
        fmt_block(f, &self.block, 1)
    }
}

fn fmt_block(f: &mut fmt::Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    for decl in &block.declarations {
        match decl {
            Decl::Var(var_decl) => {
                writeln!(f, "{}VAR {} : {}", indent(depth), var_decl.name, var_decl.type_spec)?;
            }
            Decl::Procedure(proc_decl) => {
                writeln!(f, "{}PROCEDURE {}", indent(depth), proc_decl.name)?;
                fmt_block(f, &proc_decl.block, depth + 1)?;
            }
        }
    }
    fmt_stmt(f, &block.body, depth)
}

fn fmt_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    match stmt {
        Stmt::Compound(statements) => {
            writeln!(f, "{}BEGIN", indent(depth))?;
            for statement in statements {
                fmt_stmt(f, statement, depth + 1)?;
            }
            writeln!(f, "{}END", indent(depth))
        }
        Stmt::Assign { name, value } => writeln!(f, "{}{} := {}", indent(depth), name, value),
        Stmt::NoOp => Ok(()),
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

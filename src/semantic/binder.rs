use crate::ast::{Block, Decl, Expr, Program, Stmt};
use crate::errors::{PascError, PascResult};
use crate::semantic::symboltable::{Symbol, SymbolKind, SymbolTable};

/// Single pass over the AST between parsing and evaluation: registers every
/// declared variable and checks that each reference resolves. The first
/// unresolved name aborts the pass.
pub struct SemanticBinder {
    table: SymbolTable,
}

impl SemanticBinder {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
        }
    }

    pub fn bind(mut self, program: &Program) -> PascResult<SymbolTable> {
        self.bind_block(&program.block)?;
        Ok(self.table)
    }

    fn bind_block(&mut self, block: &Block) -> PascResult<()> {
        for decl in &block.declarations {
            self.bind_decl(decl)?;
        }
        self.bind_stmt(&block.body)
    }

    fn bind_decl(&mut self, decl: &Decl) -> PascResult<()> {
        match decl {
            Decl::Var(var_decl) => {
                // The type name must already resolve (builtins are pre-seeded).
                if self.table.lookup(var_decl.type_spec.name()).is_none() {
                    return Err(PascError::UndefinedSymbol {
                        name: var_decl.type_spec.name().to_string(),
                    });
                }
                self.table
                    .define(Symbol::new(&var_decl.name, SymbolKind::Variable(var_decl.type_spec)))
            }
            Decl::Procedure(proc_decl) => {
                // No symbol and no scope of its own: the body is bound
                // against the same flat table.
                self.bind_block(&proc_decl.block)
            }
        }
    }

    fn bind_stmt(&mut self, stmt: &Stmt) -> PascResult<()> {
        match stmt {
            Stmt::Compound(statements) => {
                for statement in statements {
                    self.bind_stmt(statement)?;
                }
                Ok(())
            }
            Stmt::Assign { name, value } => {
                self.bind_var(name)?;
                self.bind_expr(value)
            }
            Stmt::NoOp => Ok(()),
        }
    }

    fn bind_expr(&mut self, expr: &Expr) -> PascResult<()> {
        match expr {
            Expr::IntegerLiteral(_) | Expr::RealLiteral(_) => Ok(()),
            Expr::Var(name) => self.bind_var(name),
            Expr::BinOp { left, right, .. } => {
                self.bind_expr(left)?;
                self.bind_expr(right)
            }
            Expr::UnaryOp { operand, .. } => self.bind_expr(operand),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                self.bind_expr(condition)?;
                self.bind_expr(then_branch)?;
                self.bind_expr(else_branch)
            }
        }
    }

    fn bind_var(&self, name: &str) -> PascResult<()> {
        match self.table.lookup(name) {
            Some(_) => Ok(()),
            None => Err(PascError::UndefinedSymbol {
                name: name.to_string(),
            }),
        }
    }
}

impl Default for SemanticBinder {
    fn default() -> Self {
        Self::new()
    }
}

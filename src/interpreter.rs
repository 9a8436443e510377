use crate::ast::{BinOpKind, Block, Expr, Program, Stmt, UnaryOpKind};
use crate::errors::{PascError, PascResult};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
}

impl Value {
    pub fn as_real(self) -> f64 {
        match self {
            Value::Int(n) => n as f64,
            Value::Real(v) => v,
        }
    }

    // DIV operands are used as integers; a real is truncated toward zero.
    pub fn truncated(self) -> i64 {
        match self {
            Value::Int(n) => n,
            Value::Real(v) => v as i64,
        }
    }

    pub fn is_truthy(self) -> bool {
        match self {
            Value::Int(n) => n != 0,
            Value::Real(v) => v != 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Real(v) => write!(f, "{:?}", v),
        }
    }
}

pub type Environment = HashMap<String, Value>;

/// Evaluation pass: walks the AST once and mutates a name→value store that is
/// created empty per interpreter instance. A variable must have been assigned
/// before it is read; a stored zero counts as assigned.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    pub fn interpret(&mut self, program: &Program) -> PascResult<()> {
        self.exec_block(&program.block)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_env(self) -> Environment {
        self.env
    }

    fn exec_block(&mut self, block: &Block) -> PascResult<()> {
        // Declarations only matter to the binder; procedures are never invoked.
        self.exec_stmt(&block.body)
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> PascResult<()> {
        match stmt {
            Stmt::Compound(statements) => {
                for statement in statements {
                    self.exec_stmt(statement)?;
                }
                Ok(())
            }
            Stmt::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.insert(name.clone(), value);
                Ok(())
            }
            Stmt::NoOp => Ok(()),
        }
    }

    fn eval_expr(&self, expr: &Expr) -> PascResult<Value> {
        match expr {
            Expr::IntegerLiteral(value) => Ok(Value::Int(*value)),
            Expr::RealLiteral(value) => Ok(Value::Real(*value)),
            Expr::Var(name) => {
                self.env
                    .get(name)
                    .copied()
                    .ok_or_else(|| PascError::UnassignedVariable { name: name.clone() })
            }
            Expr::UnaryOp { op, operand } => {
                let value = self.eval_expr(operand)?;
                Ok(match op {
                    UnaryOpKind::Plus => value,
                    UnaryOpKind::Minus => match value {
                        Value::Int(n) => Value::Int(-n),
                        Value::Real(v) => Value::Real(-v),
                    },
                })
            }
            Expr::BinOp { left, op, right } => {
                // Left operand strictly before right.
                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                apply_binop(lhs, *op, rhs)
            }
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                // Only the selected branch is evaluated.
                if self.eval_expr(condition)?.is_truthy() {
                    self.eval_expr(then_branch)
                } else {
                    self.eval_expr(else_branch)
                }
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_binop(lhs: Value, op: BinOpKind, rhs: Value) -> PascResult<Value> {
    match op {
        BinOpKind::Add => Ok(match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a + b),
            _ => Value::Real(lhs.as_real() + rhs.as_real()),
        }),
        BinOpKind::Subtract => Ok(match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a - b),
            _ => Value::Real(lhs.as_real() - rhs.as_real()),
        }),
        BinOpKind::Multiply => Ok(match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a * b),
            _ => Value::Real(lhs.as_real() * rhs.as_real()),
        }),
        // Float division yields a real whatever the operand types.
        BinOpKind::FloatDivide => {
            let divisor = rhs.as_real();
            if divisor == 0.0 {
                return Err(PascError::DivisionByZero);
            }
            Ok(Value::Real(lhs.as_real() / divisor))
        }
        BinOpKind::IntDivide => {
            let divisor = rhs.truncated();
            if divisor == 0 {
                return Err(PascError::DivisionByZero);
            }
            Ok(Value::Int(lhs.truncated() / divisor))
        }
    }
}

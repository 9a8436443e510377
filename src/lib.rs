use std::{fs::File, io::Read as _, path::Path};

pub mod ast;
pub mod errors;
pub mod frontend;
pub mod interpreter;
pub mod semantic;

pub const VERSION: &str = "0.1.0";

pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self { line: 1 }
    }
}

use crate::ast::Program;
use crate::errors::{PascError, PascResult};
use crate::frontend::{lexer, parser::Parser, token::Token};
use crate::interpreter::{Environment, Interpreter};
use crate::semantic::{binder::SemanticBinder, symboltable::SymbolTable};

pub fn read(filename: &Path) -> PascResult<String> {
    let path = Path::new(filename);

    match path.extension() {
        Some(ext) if ext.eq("pas") => {}
        _ => {
            return Err(PascError::FileReadError("File must have a .pas extension".to_string()));
        }
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Turn source text into the token sequence the parser consumes.
pub fn tokenize(source: &str) -> PascResult<Vec<(Token, usize)>> {
    let mut state = LineNumber::default();
    lexer::scan(&mut state, source)
}

/// Tokenize and parse one program.
pub fn parse(source: &str) -> PascResult<Program> {
    let tokens = tokenize(source)?;
    Parser::new(&tokens).parse()
}

/// Run the semantic pass, returning the populated symbol table.
pub fn bind(program: &Program) -> PascResult<SymbolTable> {
    SemanticBinder::new().bind(program)
}

/// Execute the program against a fresh environment and return its final contents.
pub fn evaluate(program: &Program) -> PascResult<Environment> {
    let mut interpreter = Interpreter::new();
    interpreter.interpret(program)?;
    Ok(interpreter.into_env())
}

/// The whole pipeline in order: tokenize, parse, bind, evaluate.
pub fn run(source: &str) -> PascResult<(SymbolTable, Environment)> {
    let program = parse(source)?;
    let table = bind(&program)?;
    let env = evaluate(&program)?;
    Ok((table, env))
}

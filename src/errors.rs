use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PascError {
    // File and I/O errors
    FileReadError(String),
    IoError(io::Error),

    // Lexical analysis errors
    UnknownCharacter {
        ch: char,
        line: usize,
    },
    UnterminatedComment {
        line: usize,
    },
    InvalidNumber {
        number: String,
        line: usize,
    },

    // Parsing errors
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },

    // Semantic analysis errors
    UndefinedSymbol {
        name: String,
    },
    SymbolAlreadyDefined {
        name: String,
    },

    // Evaluation errors
    UnassignedVariable {
        name: String,
    },
    DivisionByZero,
}

impl PascError {
    /// Create a syntax error
    pub fn syntax_error(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        PascError::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }
}

impl fmt::Display for PascError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PascError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            PascError::IoError(err) => write!(f, "I/O error: {}", err),

            PascError::UnknownCharacter { ch, line } => {
                write!(f, "Unknown character '{}' at line {}", ch, line)
            }
            PascError::UnterminatedComment { line } => {
                write!(f, "Unterminated comment at line {}", line)
            }
            PascError::InvalidNumber { number, line } => {
                write!(f, "Invalid number '{}' at line {}", number, line)
            }

            PascError::SyntaxError { expected, found, line } => {
                write!(f, "Syntax error at line {}: expected {}, found {}", line, expected, found)
            }

            PascError::UndefinedSymbol { name } => {
                write!(f, "Undeclared variable '{}'", name)
            }
            PascError::SymbolAlreadyDefined { name } => {
                write!(f, "Symbol '{}' already defined", name)
            }

            PascError::UnassignedVariable { name } => {
                write!(f, "Variable '{}' has no value", name)
            }
            PascError::DivisionByZero => {
                write!(f, "Division by zero")
            }
        }
    }
}

impl std::error::Error for PascError {}

impl From<io::Error> for PascError {
    fn from(err: io::Error) -> Self {
        PascError::IoError(err)
    }
}

// Type alias for Result with PascError
pub type PascResult<T> = Result<T, PascError>;

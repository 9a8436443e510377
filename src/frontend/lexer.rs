use crate::errors::{PascError, PascResult};
use crate::frontend::token::Token;
use crate::LineNumber;
use std::{iter::Peekable, str::Chars};

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    state: &'a mut LineNumber,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, state: &'a mut LineNumber) -> Self {
        Self {
            chars: source.chars().peekable(),
            state,
        }
    }

    pub fn scan(mut self) -> PascResult<Vec<(Token, usize)>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let line = self.state.line;
            match self.scan_token()? {
                Some(token) => tokens.push((token, line)),
                None => break,
            }
        }
        tokens.push((Token::Eof, self.state.line));
        Ok(tokens)
    }

    fn skip_whitespace_and_comments(&mut self) -> PascResult<()> {
        loop {
            match self.chars.peek() {
                Some(&'{') => self.scan_comment()?,
                Some(&ch) if ch.is_whitespace() => self.scan_whitespace(),
                _ => break,
            }
        }
        Ok(())
    }

    fn scan_token(&mut self) -> PascResult<Option<Token>> {
        match self.chars.peek() {
            None => Ok(None),
            Some(&ch) if ch.is_alphabetic() || ch == '_' => Ok(Some(self.scan_identifier())),
            Some(&ch) if ch.is_ascii_digit() => Ok(Some(self.scan_number()?)),
            Some(&':') => Ok(Some(self.scan_assignment())),
            Some(&ch) => Ok(Some(self.scan_single_char_token(ch)?)),
        }
    }

    fn scan_comment(&mut self) -> PascResult<()> {
        self.chars.next(); // Consume '{'
        let start_line = self.state.line;
        // Comments do not nest; the first '}' closes the comment
        for ch in self.chars.by_ref() {
            if ch == '\n' {
                self.state.line += 1;
            } else if ch == '}' {
                return Ok(());
            }
        }
        Err(PascError::UnterminatedComment { line: start_line })
    }

    fn scan_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                if ch == '\n' {
                    self.state.line += 1;
                }
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let mut identifier = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
        self.keyword_or_identifier(identifier)
    }

    // Reserved words are matched exactly; a lowercase spelling stays an identifier.
    fn keyword_or_identifier(&self, identifier: String) -> Token {
        match identifier.as_str() {
            "PROGRAM" => Token::Program,
            "VAR" => Token::Var,
            "PROCEDURE" => Token::Procedure,
            "BEGIN" => Token::Begin,
            "END" => Token::End,
            "INTEGER" => Token::Integer,
            "REAL" => Token::Real,
            "DIV" => Token::IntDiv,
            _ => Token::Ident(identifier),
        }
    }

    fn scan_number(&mut self) -> PascResult<Token> {
        let mut number_str = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
        // A '.' makes the constant real only when more digits follow;
        // otherwise it is left alone as the program terminator.
        if self.chars.peek() == Some(&'.') {
            let mut ahead = self.chars.clone();
            ahead.next();
            if matches!(ahead.peek(), Some(ch) if ch.is_ascii_digit()) {
                number_str.push('.');
                self.chars.next();
                while let Some(&ch) = self.chars.peek() {
                    if ch.is_ascii_digit() {
                        number_str.push(ch);
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                return number_str
                    .parse::<f64>()
                    .map(Token::RealConst)
                    .map_err(|_| PascError::InvalidNumber { number: number_str, line: self.state.line });
            }
        }
        number_str
            .parse::<i64>()
            .map(Token::IntegerConst)
            .map_err(|_| PascError::InvalidNumber { number: number_str, line: self.state.line })
    }

    fn scan_assignment(&mut self) -> Token {
        self.chars.next(); // Consume ':'
        if self.chars.peek() == Some(&'=') {
            self.chars.next(); // Consume '='
            Token::Assign
        } else {
            Token::Colon
        }
    }

    fn scan_single_char_token(&mut self, ch: char) -> PascResult<Token> {
        self.chars.next(); // Consume the character
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Multiply,
            '/' => Token::FloatDiv,
            ';' => Token::Semicolon,
            ',' => Token::Comma,
            '.' => Token::Dot,
            '?' => Token::Question,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Err(PascError::UnknownCharacter { ch, line: self.state.line }),
        };
        Ok(token)
    }
}

// Convenience function mirroring the struct API
pub fn scan(state: &mut LineNumber, source: &str) -> PascResult<Vec<(Token, usize)>> {
    let lexer = Lexer::new(source, state);
    lexer.scan()
}

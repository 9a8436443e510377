use crate::ast::TypeSpec;
use crate::errors::{PascError, PascResult};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    BuiltinType,
    Variable(TypeSpec),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: &str, kind: SymbolKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

// One flat table per program: procedure bodies share it, no nested scopes.
#[derive(Debug, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = Self {
            symbols: HashMap::new(),
        };
        for builtin in [TypeSpec::Integer, TypeSpec::Real] {
            table
                .symbols
                .insert(builtin.name().to_string(), Symbol::new(builtin.name(), SymbolKind::BuiltinType));
        }
        table
    }

    pub fn define(&mut self, symbol: Symbol) -> PascResult<()> {
        if self.symbols.contains_key(&symbol.name) {
            return Err(PascError::SymbolAlreadyDefined { name: symbol.name });
        }
        self.symbols.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn all_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn print_symbols(&self) {
        println!("{:-<46}", "");
        println!("| {:<20} | {:<19} |", "Name", "Kind");
        println!("{:-<46}", "");
        let mut names: Vec<&String> = self.symbols.keys().collect();
        names.sort();
        for name in names {
            let kind = match &self.symbols[name].kind {
                SymbolKind::BuiltinType => "builtin type".to_string(),
                SymbolKind::Variable(type_spec) => format!("variable : {}", type_spec),
            };
            println!("| {:<20} | {:<19} |", name, kind);
        }
        println!("{:-<46}", "");
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

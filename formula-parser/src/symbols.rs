//! Immutable catalog of named constants and native functions.
//!
//! Built once at startup and shared read-only across compilations.
//! Lookup is case-insensitive; the lexer lowercases identifiers before
//! they reach the resolver.

use std::collections::HashMap;

use crate::error::ParseError;

/// A resolved native call signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionSig {
    pub name: &'static str,
    pub arity: u8,
}

/// Classification of an identifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Symbol {
    Constant(f64),
    Function(FunctionSig),
    /// The base-2 logarithm expansion rule: ln(operand), push 2.0,
    /// ln, divide. Does not map to a single native call.
    Log2,
    /// The free variable `x`.
    Variable,
}

struct ConstantMeta {
    name: &'static str,
    value: f64,
}

struct FunctionMeta {
    name: &'static str,
    sig: FunctionSig,
}

// The single source of truth for the standard catalog.
const CONSTANT_TABLE: &[ConstantMeta] = &[
    ConstantMeta {
        name: "pi",
        value: std::f64::consts::PI,
    },
    ConstantMeta {
        name: "e",
        value: std::f64::consts::E,
    },
];

const FUNCTION_TABLE: &[FunctionMeta] = &[
    FunctionMeta {
        name: "ln",
        sig: FunctionSig { name: "ln", arity: 1 },
    },
    FunctionMeta {
        name: "lg",
        sig: FunctionSig {
            name: "log10",
            arity: 1,
        },
    },
    FunctionMeta {
        name: "sin",
        sig: FunctionSig {
            name: "sin",
            arity: 1,
        },
    },
    FunctionMeta {
        name: "cos",
        sig: FunctionSig {
            name: "cos",
            arity: 1,
        },
    },
    FunctionMeta {
        name: "tan",
        sig: FunctionSig {
            name: "tan",
            arity: 1,
        },
    },
];

/// Immutable mapping from identifier to catalog entry.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    constants: HashMap<String, f64>,
    functions: HashMap<String, FunctionSig>,
}

impl SymbolTable {
    /// The standard catalog: constants `pi` and `e`, arity-1 functions
    /// `ln lg sin cos tan`, and the `log` expansion rule.
    pub fn standard() -> Self {
        let mut constants = HashMap::new();
        for meta in CONSTANT_TABLE {
            constants.insert(meta.name.to_string(), meta.value);
        }
        let mut functions = HashMap::new();
        for meta in FUNCTION_TABLE {
            functions.insert(meta.name.to_string(), meta.sig);
        }
        Self {
            constants,
            functions,
        }
    }

    /// Classify an identifier. `x` is the variable regardless of the
    /// catalog contents. `col` is carried into the error for an
    /// identifier absent from the catalog.
    pub fn resolve(&self, name: &str, col: usize) -> Result<Symbol, ParseError> {
        let key = name.to_ascii_lowercase();
        if key == "x" {
            return Ok(Symbol::Variable);
        }
        if key == "log" {
            return Ok(Symbol::Log2);
        }
        if let Some(&value) = self.constants.get(&key) {
            return Ok(Symbol::Constant(value));
        }
        if let Some(&sig) = self.functions.get(&key) {
            return Ok(Symbol::Function(sig));
        }
        Err(ParseError::UnknownSymbol {
            name: name.to_string(),
            col,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_resolve() {
        let table = SymbolTable::standard();
        assert_eq!(
            table.resolve("pi", 1),
            Ok(Symbol::Constant(std::f64::consts::PI))
        );
        assert_eq!(table.resolve("e", 1), Ok(Symbol::Constant(std::f64::consts::E)));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = SymbolTable::standard();
        assert_eq!(
            table.resolve("PI", 1),
            Ok(Symbol::Constant(std::f64::consts::PI))
        );
        assert_eq!(table.resolve("X", 1), Ok(Symbol::Variable));
    }

    #[test]
    fn variable_always_resolves() {
        let table = SymbolTable::standard();
        assert_eq!(table.resolve("x", 1), Ok(Symbol::Variable));
    }

    #[test]
    fn functions_resolve_with_arity() {
        let table = SymbolTable::standard();
        assert_eq!(
            table.resolve("sin", 1),
            Ok(Symbol::Function(FunctionSig {
                name: "sin",
                arity: 1
            }))
        );
        // `lg` binds to the native base-10 logarithm.
        assert_eq!(
            table.resolve("lg", 1),
            Ok(Symbol::Function(FunctionSig {
                name: "log10",
                arity: 1
            }))
        );
    }

    #[test]
    fn log_is_the_expansion_rule() {
        let table = SymbolTable::standard();
        assert_eq!(table.resolve("log", 1), Ok(Symbol::Log2));
    }

    #[test]
    fn unknown_symbol() {
        let table = SymbolTable::standard();
        assert_eq!(
            table.resolve("foo", 7),
            Err(ParseError::UnknownSymbol {
                name: "foo".into(),
                col: 7,
            })
        );
    }
}

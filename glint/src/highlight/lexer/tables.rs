//! Fixed keyword and operator tables.
//!
//! These are unions across several common surface languages (JavaScript, TypeScript, Python),
//! so classification looks plausible for all of them without being exact for any one.

/// Reserved and built-in words, sorted for binary search.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "abstract", "and", "any", "as", "async", "await", "boolean",
    "break", "case", "catch", "class", "const", "continue", "declare", "def", "default",
    "delete", "dict", "do", "elif", "else", "enum", "export", "extends", "false", "finally",
    "float", "for", "from", "function", "if", "implements", "import", "in", "instanceof",
    "int", "interface", "is", "keyof", "lambda", "len", "let", "list", "module", "namespace",
    "never", "new", "not", "null", "number", "object", "of", "or", "pass", "print", "private",
    "protected", "public", "range", "return", "set", "static", "str", "string", "super",
    "switch", "this", "throw", "true", "try", "tuple", "type", "typeof", "undefined",
    "unknown", "var", "void", "while", "with", "yield",
];

/// Operators, longest first so that the first match is the longest match.
pub const OPERATORS: &[&str] = &[
    // Three characters.
    "===", "!==", ">>>", "...", "??=",
    // Two characters.
    "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "=>", "+=", "-=", "*=", "/=", "%=", "++",
    "--", "?.", "??",
    // One character.
    "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ":",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search_by(|probe| (*probe).cmp(word)).is_ok()
}

/// Returns the longest operator that `input` starts with, if any.
pub fn match_operator(input: &str) -> Option<&'static str> {
    OPERATORS.iter().copied().find(|op| input.starts_with(op))
}

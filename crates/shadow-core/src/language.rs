//! Per-language comment delimiters
//!
//! Delimiter strings use the `@comment` convention: one token is a
//! single-line delimiter, two tokens are a block pair, three tokens are a
//! single-line delimiter followed by a block pair. An underscore inside a
//! token stands for a space.

/// Language used when nothing else matches.
pub const UNKNOWN_LANGUAGE: &str = "unknown_language";

/// Built-in delimiters, keyed by lower-case language name.
static LANGUAGE_DELIMS: &[(&str, &str)] = &[
    ("ada", "--"),
    ("actionscript", "// /* */"),
    ("autohotkey", "; /* */"),
    ("batch", "REM"),
    ("c", "// /* */"),
    ("csharp", "// /* */"),
    ("cpp", "// /* */"),
    ("css", "/* */"),
    ("elisp", ";"),
    ("fortran", "C"),
    ("fortran90", "!"),
    ("html", "<!-- -->"),
    ("ini", ";"),
    ("java", "// /* */"),
    ("latex", "%"),
    ("lua", "--"),
    ("pascal", "// { }"),
    ("perl", "#"),
    ("php", "// /* */"),
    ("plain", "#"),
    ("plsql", "-- /* */"),
    ("python", "#"),
    ("rapidq", "'"),
    ("rebol", ";"),
    ("rust", "// /* */"),
    ("shell", "#"),
    ("tcltk", "#"),
    ("unknown", "#"),
    (UNKNOWN_LANGUAGE, "#--unknown-language--"),
    ("vimoutline", "#"),
    ("xml", "<!-- -->"),
];

/// Built-in extension to language mapping, keyed by lower-case extension.
static EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("ada", "ada"),
    ("adb", "ada"),
    ("ahk", "autohotkey"),
    ("as", "actionscript"),
    ("bas", "rapidq"),
    ("bat", "batch"),
    ("c", "c"),
    ("cfg", "plain"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("css", "css"),
    ("el", "elisp"),
    ("f", "fortran90"),
    ("h", "c"),
    ("htm", "html"),
    ("html", "html"),
    ("ini", "ini"),
    ("java", "java"),
    ("ksh", "plain"),
    ("lua", "lua"),
    ("otl", "vimoutline"),
    ("p", "pascal"),
    ("php", "php"),
    ("pl", "perl"),
    ("py", "python"),
    ("r", "rebol"),
    ("rs", "rust"),
    ("sh", "shell"),
    ("sql", "plsql"),
    ("tcl", "tcltk"),
    ("tex", "latex"),
    ("txt", "plain"),
    ("xml", "xml"),
];

/// Comment delimiters for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delims {
    /// Single-line comment delimiter, e.g. `#` or `//`.
    pub line: Option<String>,
    /// Block comment pair, e.g. `("<!--", "-->")`.
    pub block: Option<(String, String)>,
}

impl Delims {
    /// Parse a delimiter string such as `"// /* */"` or `"<!-- -->"`.
    ///
    /// Returns `None` when the string holds no tokens.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim_start();
        let s = s.strip_prefix("@comment").unwrap_or(s);

        let tokens: Vec<String> = s
            .split_whitespace()
            .take(3)
            .map(|t| t.replace('_', " "))
            .collect();

        match tokens.as_slice() {
            [] => None,
            [line] => Some(Self {
                line: Some(line.clone()),
                block: None,
            }),
            [open, close] => Some(Self {
                line: None,
                block: Some((open.clone(), close.clone())),
            }),
            [line, open, close, ..] => Some(Self {
                line: Some(line.clone()),
                block: Some((open.clone(), close.clone())),
            }),
        }
    }
}

/// Look up the built-in delimiter string for `language`.
pub fn builtin_delims(language: &str) -> Option<&'static str> {
    let language = language.to_lowercase();
    LANGUAGE_DELIMS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, delims)| *delims)
}

/// Parsed built-in delimiters for `language`.
pub fn comment_delims(language: &str) -> Option<Delims> {
    builtin_delims(language).and_then(Delims::parse)
}

/// Map a file extension (without the dot) to a language name.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.trim_start_matches('.').to_lowercase();
    EXTENSION_LANGUAGES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
}

use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Only punctuation is classified here. Every other maximal run of
/// non-whitespace characters becomes a [`Token::Word`]; deciding whether a
/// word is a keyword, an identifier or a number literal is left to the
/// parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `^`
    #[token("^")]
    Caret,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equal,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Keywords, identifiers, number literals and malformed runs alike.
    #[regex(r"[^\s+\-/*^,:=<>{}();]+", |lex| lex.slice().to_string())]
    Word(String),
    /// Whitespace separates words and is never emitted.
    #[regex(r"\s+", count_newlines)]
    Whitespace,
}

impl Token {
    /// Returns `true` if this token is the word `text`.
    #[must_use]
    pub fn is_word(&self, text: &str) -> bool {
        matches!(self, Self::Word(word) if word == text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Slash => "/",
            Self::Star => "*",
            Self::Caret => "^",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Equal => "=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Word(word) => word.as_str(),
            Self::Whitespace => " ",
        };
        f.write_str(text)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Where a token sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// One-based source line.
    pub line:  usize,
    /// Zero-based index of the token in the token sequence.
    pub index: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} (token {})", self.line, self.index)
    }
}

/// A token together with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token:    Token,
    pub position: Position,
}

/// Advances the line counter over a whitespace run and skips it.
fn count_newlines(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += lex.slice().matches('\n').count();
    logos::Skip
}

/// Splits source text into positioned tokens.
///
/// Punctuation characters become single-character tokens, whitespace is
/// dropped, and everything else accumulates into words. Tokenization cannot
/// fail; malformed words are reported by the parser.
///
/// # Example
/// ```
/// use while_lang::interpreter::lexer::tokenize;
///
/// let words = tokenize("x:=x+1;print x")
///     .into_iter()
///     .map(|lexeme| lexeme.token.to_string())
///     .collect::<Vec<_>>();
///
/// assert_eq!(words, ["x", ":", "=", "x", "+", "1", ";", "print", "x"]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        // Every character is covered by some rule, so errors only guard
        // against future changes to the token set.
        let token = result.unwrap_or_else(|()| Token::Word(lexer.slice().to_string()));
        let position = Position { line:  lexer.extras.line,
                                  index: lexemes.len(), };
        lexemes.push(Lexeme { token, position });
    }

    log::trace!("tokenized {} bytes into {} tokens", source.len(), lexemes.len());
    lexemes
}

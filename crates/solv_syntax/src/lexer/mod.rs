//! Lexer for the Solv dialect.
//!
//! Scans raw source text, character by character, into a flat ordered sequence of
//! [`Token`]s. The lexer knows nothing about grammar; it only classifies characters:
//! - Reserved words vs. identifiers (reserved words always win)
//! - Decimal integer literals (no floats, hex, or scientific notation by design)
//! - Structural symbols and multi-character operators (longest spelling first)
//! - Quoted strings with a single-character escape of the enclosing quote
//! - Line (`//`) and block (`/* */`) comments, skipped but position-tracked
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and matching helpers

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::diagnostics::LexError;
use solv_core::lang::keywords;
use solv_core::lang::operators;
use solv_core::lang::symbols;

/// Lexer state: a forward-only scan position with derived line/column counters.
///
/// Line and column are 1-based and advance on every consumed character, including
/// characters inside comments and string literals.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// ## Errors
    /// Fails with a [`LexError`] on the first unrecognized character, unterminated
    /// string literal, or unterminated block comment. Nothing is recovered; the
    /// error carries the position where the offending construct started.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.peek() {
            let (line, column) = (self.line, self.column);

            if c.is_whitespace() {
                self.advance();
            } else if c == '/' && self.peek_next() == Some('/') {
                self.line_comment();
            } else if c == '/' && self.peek_next() == Some('*') {
                self.block_comment(line, column)?;
            } else if is_ident_start(c) {
                self.identifier_or_keyword(line, column);
            } else if c.is_ascii_digit() {
                self.number(line, column);
            } else if let Some(id) = symbols::from_char(c) {
                self.advance();
                self.push(TokenKind::Symbol(id), line, column);
            } else if c == '"' || c == '\'' {
                self.string(c, line, column)?;
            } else if let Some(op) = operators::longest_match_at(self.rest()) {
                // Operator spellings are ASCII, one char per byte.
                for _ in 0..op.spelling.len() {
                    self.advance();
                }
                self.push(TokenKind::Operator(op.id), line, column);
            } else {
                return Err(LexError::UnexpectedChar { ch: c, line, column });
            }
        }
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn rest(&self) -> &str {
        &self.source[self.current_pos..]
    }

    fn push(&mut self, kind: TokenKind, line: u32, column: u32) {
        self.tokens.push(Token::new(kind, line, column));
    }

    // ========================================================================
    // Scanners
    // ========================================================================

    /// Skip everything up to (not including) the next newline.
    fn line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a `/* ... */` comment, failing if the input ends before `*/`.
    fn block_comment(&mut self, line: u32, column: u32) -> Result<(), LexError> {
        self.advance(); // `/`
        self.advance(); // `*`
        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedComment { line, column }),
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Consume a maximal alphanumeric/underscore run; reserved words beat identifiers.
    fn identifier_or_keyword(&mut self, line: u32, column: u32) {
        let start = self.current_pos;
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];
        if let Some(id) = keywords::from_str(spelling) {
            self.push(TokenKind::Keyword(id), line, column);
        } else {
            self.push(TokenKind::Ident(spelling.to_string()), line, column);
        }
    }

    /// Consume a maximal run of decimal digits.
    fn number(&mut self, line: u32, column: u32) {
        let start = self.current_pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        let text = self.source[start..self.current_pos].to_string();
        self.push(TokenKind::Number(text), line, column);
    }

    /// Consume a quoted string literal.
    ///
    /// A backslash escapes the enclosing quote character only; a backslash before
    /// anything else is kept as a literal backslash.
    fn string(&mut self, quote: char, line: u32, column: u32) -> Result<(), LexError> {
        self.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString { line, column }),
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') if self.peek_next() == Some(quote) => {
                    self.advance();
                    self.advance();
                    value.push(quote);
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }
        self.push(TokenKind::Str(value), line, column);
        Ok(())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solv_core::lang::keywords::KeywordId;
    use solv_core::lang::operators::OperatorId;
    use solv_core::lang::symbols::SymbolId;

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical)
                .unwrap_or_else(|err| panic!("lex({:?}) failed: {err}", k.canonical));
            assert_eq!(
                tokens.len(),
                1,
                "expected a single token for keyword {:?}, got {tokens:?}",
                k.id
            );
            assert!(tokens[0].is_keyword(k.id));
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let tokens =
                lex(o.spelling).unwrap_or_else(|err| panic!("lex({:?}) failed: {err}", o.spelling));
            assert_eq!(
                tokens.len(),
                1,
                "expected a single token for operator {:?}, got {tokens:?}",
                o.spelling
            );
            assert_eq!(tokens[0].operator_id(), Some(o.id));
            assert_eq!(tokens[0].kind.operator_group(), Some(o.group));
        }
    }

    #[test]
    fn test_symbol_registry_parity() {
        for s in symbols::SYMBOLS {
            let source = s.canonical.to_string();
            let tokens =
                lex(&source).unwrap_or_else(|err| panic!("lex({:?}) failed: {err}", s.canonical));
            assert_eq!(
                tokens.len(),
                1,
                "expected a single token for symbol {:?}, got {tokens:?}",
                s.canonical
            );
            assert_eq!(tokens[0].symbol_id(), Some(s.id));
        }
    }

    #[test]
    fn test_identifiers() {
        let tokens = lex("_foo bar42 baz_qux").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "_foo"));
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(s) if s == "bar42"));
        assert!(matches!(&tokens[2].kind, TokenKind::Ident(s) if s == "baz_qux"));
    }

    #[test]
    fn test_reserved_words_beat_identifiers() {
        let tokens = lex("contract contractual").unwrap();
        assert!(tokens[0].is_keyword(KeywordId::Contract));
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(s) if s == "contractual"));
    }

    #[test]
    fn test_identifier_may_not_start_with_digit() {
        // A digit run ends where the letters begin; the remainder is its own identifier.
        let tokens = lex("1x").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(matches!(&tokens[0].kind, TokenKind::Number(n) if n == "1"));
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(s) if s == "x"));
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("42 007 0").unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Number(n) if n == "42"));
        assert!(matches!(&tokens[1].kind, TokenKind::Number(n) if n == "007"));
        assert!(matches!(&tokens[2].kind, TokenKind::Number(n) if n == "0"));
    }

    #[test]
    fn test_strings() {
        let tokens = lex(r#""hello" 'world'"#).unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Str(s) if s == "hello"));
        assert!(matches!(&tokens[1].kind, TokenKind::Str(s) if s == "world"));
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let tokens = lex(r#""He said \"Hi\"""#).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0].kind, TokenKind::Str(s) if s == r#"He said "Hi""#));

        let tokens = lex(r#"'It\'s ok'"#).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0].kind, TokenKind::Str(s) if s == "It's ok"));
    }

    #[test]
    fn test_backslash_before_other_characters_stays_literal() {
        // Only the enclosing quote can be escaped; `\n` is two literal characters.
        let tokens = lex(r#""a\nb""#).unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Str(s) if s == r"a\nb"));
    }

    #[test]
    fn test_line_comment_produces_no_tokens() {
        let tokens = lex("uint // the balance\nbalance").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is_keyword(KeywordId::Uint));
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(s) if s == "balance"));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
    }

    #[test]
    fn test_block_comment_tracks_position() {
        let tokens = lex("a /* x\ny */ b").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 6));
    }

    #[test]
    fn test_token_positions() {
        let tokens = lex("contract Wallet").unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 10));
    }

    #[test]
    fn test_compound_operator_not_split() {
        let tokens = lex("x+=1").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].operator_id(), Some(OperatorId::PlusAssign));

        let tokens = lex("x + = 1").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].operator_id(), Some(OperatorId::Plus));
        assert_eq!(tokens[2].operator_id(), Some(OperatorId::Assign));
    }

    #[test]
    fn test_symbols_win_over_operators() {
        // `.` is in both conceptual vocabularies of Solidity-like dialects; here it is
        // always a symbol token, usable by the dotted-name grammar.
        let tokens = lex("msg.sender").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_keyword(KeywordId::Msg));
        assert!(tokens[1].is_symbol(SymbolId::Dot));
        assert!(matches!(&tokens[2].kind, TokenKind::Ident(s) if s == "sender"));
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("uint @balance;").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                ch: '@',
                line: 1,
                column: 6
            }
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex("\"abc").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 1 });
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = lex("uint /* abc").unwrap_err();
        assert_eq!(err, LexError::UnterminatedComment { line: 1, column: 6 });
    }

    #[test]
    fn test_lexing_is_idempotent() {
        let source = "contract Wallet { uint balance; /* state */ function f() public {} }";
        assert_eq!(lex(source), lex(source));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn legal_identifiers_lex_to_a_single_ident(name in "[a-zA-Z_][a-zA-Z0-9_]{0,24}") {
                prop_assume!(keywords::from_str(&name).is_none());
                let tokens = lex(&name).unwrap();
                prop_assert_eq!(tokens.len(), 1);
                prop_assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == &name));
            }

            #[test]
            fn lexing_any_input_twice_gives_the_same_result(source in "\\PC{0,64}") {
                prop_assert_eq!(lex(&source), lex(&source));
            }
        }
    }
}

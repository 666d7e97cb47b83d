//! Directive argument tokenizer.
//!
//! Splits the raw argument string of a directive (`signup class=wide`) into
//! whitespace-delimited words. Quotes group a word: `title="Sign up"` and
//! `'first name'` are single words.

/// Leading character that marks a word as an expression instead of a key.
pub const EXPRESSION_SIGIL: char = '$';

/// Classified directive word.
///
/// Produced once from the raw text; downstream code matches on the variant
/// and never inspects the sigil again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Opaque key, looked up by name at render time.
    Literal(String),
    /// Expression evaluated at render time (sigil stripped).
    Expression(String),
}

impl Token {
    /// Classify a raw word.
    ///
    /// Quoted words are always literals with the quotes removed. A word that
    /// starts with [`EXPRESSION_SIGIL`] followed by at least one character is
    /// an expression.
    ///
    /// # Example
    ///
    /// ```
    /// use fw_compiler::Token;
    ///
    /// assert_eq!(Token::parse("email"), Token::Literal("email".to_owned()));
    /// assert_eq!(Token::parse("$field"), Token::Expression("field".to_owned()));
    /// assert_eq!(Token::parse("'$x'"), Token::Literal("$x".to_owned()));
    /// ```
    #[must_use]
    pub fn parse(word: &str) -> Self {
        if let Some(inner) = unquote(word) {
            return Self::Literal(inner.to_owned());
        }
        match word.strip_prefix(EXPRESSION_SIGIL) {
            Some(expr) if !expr.is_empty() => Self::Expression(expr.to_owned()),
            _ => Self::Literal(word.to_owned()),
        }
    }

    /// Whether this token is an expression reference.
    #[must_use]
    pub fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(_))
    }

    /// Token text without sigil or quotes.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Expression(text) => text,
        }
    }
}

/// Strip matching surrounding quotes.
fn unquote(word: &str) -> Option<&str> {
    let quote = word.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    word.len()
        .checked_sub(1)
        .filter(|&end| end > 0 && word.ends_with(quote))
        .map(|end| &word[1..end])
}

/// Cursor over a directive's raw argument string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgTokenizer {
    source: String,
    pos: usize,
}

impl ArgTokenizer {
    /// Create a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pos: 0,
        }
    }

    /// The full argument string.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fetch the next raw word, or `None` at the end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use fw_compiler::ArgTokenizer;
    ///
    /// let mut tokens = ArgTokenizer::new(r#"signup title="Sign up" novalidate"#);
    /// assert_eq!(tokens.fetch_word(), Some("signup"));
    /// assert_eq!(tokens.fetch_word(), Some(r#"title="Sign up""#));
    /// assert_eq!(tokens.fetch_word(), Some("novalidate"));
    /// assert_eq!(tokens.fetch_word(), None);
    /// ```
    pub fn fetch_word(&mut self) -> Option<&str> {
        let rest = &self.source[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        let start = self.pos + skipped;

        let mut quote = None;
        let mut end = self.source.len();
        for (i, c) in self.source[start..].char_indices() {
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None if c == '"' || c == '\'' => quote = Some(c),
                None if c.is_whitespace() => {
                    end = start + i;
                    break;
                }
                None => {}
            }
        }

        self.pos = end;
        if start == end {
            None
        } else {
            Some(&self.source[start..end])
        }
    }

    /// Fetch and classify the next word.
    pub fn fetch_token(&mut self) -> Option<Token> {
        self.fetch_word().map(Token::parse)
    }

    /// Fetch all remaining words.
    pub fn fetch_all(&mut self) -> Vec<String> {
        let mut words = Vec::new();
        while let Some(word) = self.fetch_word() {
            words.push(word.to_owned());
        }
        words
    }

    /// Whether only whitespace remains.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.source[self.pos..].trim().is_empty()
    }

    /// Rewind to the start of the argument string.
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

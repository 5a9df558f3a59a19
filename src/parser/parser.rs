//! Tree builder for definition files
//!
//! Builds a rowan GreenNode tree from the lexer's token stream. The grammar
//! has no failure mode: every token stream yields a tree.

use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::config::ParseConfig;
use rowan::{GreenNode, GreenNodeBuilder};

/// Parse result containing the green tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub green: GreenNode,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }
}

/// Parse a definition file into a CST
pub fn parse(input: &str) -> Parse {
    parse_with_config(input, &ParseConfig::default())
}

/// Parse a definition file, honouring the tracing flag of `config`
pub fn parse_with_config(input: &str, config: &ParseConfig) -> Parse {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens, config.trace);
    parser.parse_source_file();
    parser.finish()
}

/// Build a tree from an already lexed token stream
pub fn parse_tokens(tokens: &[Token<'_>]) -> Parse {
    let mut parser = Parser::new(tokens, false);
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    trace: bool,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], trace: bool) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            trace,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
        }
    }

    // =========================================================================
    // Token inspection and consumption
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token. Empty tokens advance the cursor but add
    /// nothing to the tree.
    fn bump(&mut self) {
        let tokens = self.tokens;
        if let Some(token) = tokens.get(self.pos) {
            if self.trace {
                tracing::trace!(kind = ?token.kind, range = ?token.range(), "bump");
            }
            if !token.text.is_empty() {
                self.builder.token(token.kind.into(), token.text);
            }
            self.pos += 1;
        }
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = FirstHalf (DELIMITER SecondHalf)?
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);

        // The first token is the first half, whatever its kind
        self.start_node(SyntaxKind::FIRST_HALF);
        self.bump();
        self.finish_node();

        if !self.at_eof() {
            while self.at(SyntaxKind::DELIMITER) {
                self.bump();
            }
            self.start_node(SyntaxKind::SECOND_HALF);
            while !self.at_eof() {
                self.bump();
            }
            self.finish_node();
        }

        self.finish_node();
    }
}

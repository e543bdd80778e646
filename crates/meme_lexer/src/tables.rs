extern crate alloc;

use crate::token::TokenKind;
use alloc::collections::BTreeMap;
use std::sync::LazyLock;

/// The shared classification tables.
static TABLES: LazyLock<ClassificationTables> = LazyLock::new(ClassificationTables::build);

/// Lookup tables mapping exact lexemes to their token kinds.
#[derive(Debug)]
pub struct ClassificationTables {
    /// Keywords, base type names and composite type constructors.
    words: BTreeMap<&'static str, TokenKind>,
    /// Single character brackets and delimiters.
    punctuation: BTreeMap<char, TokenKind>,
}

impl ClassificationTables {
    /// Return the process wide tables.
    pub fn get() -> &'static Self {
        &TABLES
    }

    fn build() -> Self {
        let mut words = BTreeMap::new();
        // Keywords
        words.insert("concept", TokenKind::KeywordConcept);
        words.insert("relation", TokenKind::KeywordRelation);
        words.insert("required", TokenKind::KeywordRequired);
        words.insert("optional", TokenKind::KeywordOptional);
        words.insert("extends", TokenKind::KeywordExtends);
        // Base types
        words.insert("integer", TokenKind::TypeInteger);
        words.insert("string", TokenKind::TypeString);
        words.insert("boolean", TokenKind::TypeBoolean);
        // Composite type constructors
        words.insert("oneof", TokenKind::KeywordOneOf);
        words.insert("anyof", TokenKind::KeywordAnyOf);

        let mut punctuation = BTreeMap::new();
        punctuation.insert('(', TokenKind::LeftParenthesis);
        punctuation.insert(')', TokenKind::RightParenthesis);
        punctuation.insert('{', TokenKind::LeftBrace);
        punctuation.insert('}', TokenKind::RightBrace);
        punctuation.insert('[', TokenKind::LeftSquareBracket);
        punctuation.insert(']', TokenKind::RightSquareBracket);
        punctuation.insert('<', TokenKind::LeftAngleBracket);
        punctuation.insert('>', TokenKind::RightAngleBracket);
        punctuation.insert(',', TokenKind::Comma);

        Self { words, punctuation }
    }

    /// Look up a word, returning `None` for identifiers.
    pub fn word(&self, lexeme: &str) -> Option<TokenKind> {
        self.words.get(lexeme).copied()
    }

    /// Look up a punctuation character.
    pub fn punctuation(&self, ch: char) -> Option<TokenKind> {
        self.punctuation.get(&ch).copied()
    }

    /// Check if the character starts a punctuation token.
    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains_key(&ch)
    }
}

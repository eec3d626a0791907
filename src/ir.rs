/// A lexical unit of the source. Text borrows from the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    OpenComment { line: usize },
    CloseComment { line: usize },
    Text { text: &'a str },
}

/// A run of tokens belonging to one region of the source.
///
/// Narrative chunks hold only `Text`; code chunks may also hold stray
/// `CloseComment` tokens, which are rendered back as the literal closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk<'a> {
    Narrative { tokens: Vec<Token<'a>> },
    Code { tokens: Vec<Token<'a>> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Narrative { text: String },
    Code { text: String },
}

impl Block {
    pub fn text(&self) -> &str {
        match self {
            Block::Narrative { text } | Block::Code { text } => text,
        }
    }

    pub fn text_mut(&mut self) -> &mut String {
        match self {
            Block::Narrative { text } | Block::Code { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Block::Narrative { text } | Block::Code { text } => text,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Block::Code { .. })
    }

    pub fn same_kind(&self, other: &Block) -> bool {
        self.is_code() == other.is_code()
    }
}

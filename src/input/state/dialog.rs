//! Modal notices and the single-line text prompt (save path or hex color).

/// Severity of a notice dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message shown in a modal box until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Longest text the prompt accepts.
const MAX_PROMPT_CHARS: usize = 4096;

/// What the prompt's text is used for when confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Target path for PNG export
    Save,
    /// `#rrggbb` drawing color
    Color,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Save => "Save canvas as PNG",
            PromptKind::Color => "Pick color (#rrggbb)",
        }
    }
}

/// Editable single-line text entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    kind: PromptKind,
    buffer: String,
}

impl TextPrompt {
    pub fn new(kind: PromptKind, initial: impl Into<String>) -> Self {
        Self {
            kind,
            buffer: initial.into(),
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Appends a character. Control characters and overlong input are ignored.
    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_control() || self.buffer.chars().count() >= MAX_PROMPT_CHARS {
            return false;
        }
        self.buffer.push(ch);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

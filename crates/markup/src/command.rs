use serde::Serialize;

/// One layout instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Command {
    /// Draw a literal run of text.
    DrawText(String),
    /// Draw the registered string stored under this key.
    UseStringRef(String),
    /// Switch to the registered color stored under this key.
    SetColor(String),
    /// Switch to the registered font family stored under this key.
    SetFont(String),
    /// Switch to the registered point size stored under this key.
    SetSize(String),
    /// Draw the registered image stored under this key.
    DrawImage(String),
    Newline,
}

impl Command {
    pub fn kind(&self) -> &'static str {
        match self {
            Command::DrawText(_) => "DrawText",
            Command::UseStringRef(_) => "UseStringRef",
            Command::SetColor(_) => "SetColor",
            Command::SetFont(_) => "SetFont",
            Command::SetSize(_) => "SetSize",
            Command::DrawImage(_) => "DrawImage",
            Command::Newline => "Newline",
        }
    }

    /// The text or registry key carried by the command.
    pub fn data(&self) -> Option<&str> {
        match self {
            Command::DrawText(s)
            | Command::UseStringRef(s)
            | Command::SetColor(s)
            | Command::SetFont(s)
            | Command::SetSize(s)
            | Command::DrawImage(s) => Some(s),
            Command::Newline => None,
        }
    }
}

/// An ordered, append-only sequence of commands.
///
/// Built by the parser or by hand; the layout engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn push_draw_text(&mut self, text: impl Into<String>) {
        self.push(Command::DrawText(text.into()));
    }

    pub fn push_use_string(&mut self, key: impl Into<String>) {
        self.push(Command::UseStringRef(key.into()));
    }

    pub fn push_set_color(&mut self, key: impl Into<String>) {
        self.push(Command::SetColor(key.into()));
    }

    pub fn push_set_font(&mut self, key: impl Into<String>) {
        self.push(Command::SetFont(key.into()));
    }

    pub fn push_set_size(&mut self, key: impl Into<String>) {
        self.push(Command::SetSize(key.into()));
    }

    pub fn push_draw_image(&mut self, key: impl Into<String>) {
        self.push(Command::DrawImage(key.into()));
    }

    pub fn push_newline(&mut self) {
        self.push(Command::Newline);
    }

    /// Drops every command but keeps the allocation for reuse.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl From<Vec<Command>> for CommandList {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

impl FromIterator<Command> for CommandList {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

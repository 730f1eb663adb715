/// A saved command-line snippet: what it does, where it runs, and the exact
/// line to type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: i64,
    pub how_to: String,
    pub platform: String,
    pub command_line: String,
}

/// Insert shape; the storage layer assigns the id.
#[derive(Debug, Clone)]
pub struct NewCommand {
    pub how_to: String,
    pub platform: String,
    pub command_line: String,
}

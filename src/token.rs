//! Recognized watermark placeholder tokens.
//!
//! Exactly four dynamic placeholders are recognized in displayed text;
//! each has a fixed canonical lowercase spelling. There is no escaping,
//! nesting, or custom-token support.

/// A dynamic placeholder recognized in the displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `${currentfilename}` - name of the file being edited
    CurrentFileName,
    /// `${currentdirectoryname}` - name of the file's directory
    CurrentDirectoryName,
    /// `${currentprojectname}` - name of the containing project
    CurrentProjectName,
    /// `${currentfilepathinproject}` - file path relative to the project
    CurrentFilePathInProject,
}

impl Token {
    /// All tokens, in the fixed order substitution passes run.
    pub const ALL: [Token; 4] = [
        Token::CurrentFileName,
        Token::CurrentDirectoryName,
        Token::CurrentProjectName,
        Token::CurrentFilePathInProject,
    ];

    /// The canonical lowercase spelling of this token.
    pub const fn literal(self) -> &'static str {
        match self {
            Token::CurrentFileName => "${currentfilename}",
            Token::CurrentDirectoryName => "${currentdirectoryname}",
            Token::CurrentProjectName => "${currentprojectname}",
            Token::CurrentFilePathInProject => "${currentfilepathinproject}",
        }
    }
}

/// Which tokens were found in a displayed text, one flag per token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenFlags {
    pub file_name: bool,
    pub directory_name: bool,
    pub project_name: bool,
    pub file_path_in_project: bool,
}

impl TokenFlags {
    /// Gets the flag for a single token.
    pub fn get(&self, token: Token) -> bool {
        match token {
            Token::CurrentFileName => self.file_name,
            Token::CurrentDirectoryName => self.directory_name,
            Token::CurrentProjectName => self.project_name,
            Token::CurrentFilePathInProject => self.file_path_in_project,
        }
    }

    /// Sets the flag for a single token.
    pub fn set(&mut self, token: Token, found: bool) {
        match token {
            Token::CurrentFileName => self.file_name = found,
            Token::CurrentDirectoryName => self.directory_name = found,
            Token::CurrentProjectName => self.project_name = found,
            Token::CurrentFilePathInProject => self.file_path_in_project = found,
        }
    }

    /// True if any token was found.
    pub fn any(&self) -> bool {
        self.file_name || self.directory_name || self.project_name || self.file_path_in_project
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    /// Unreadable or non-UTF-8 file. Checks report it as an issue against
    /// the file and keep going.
    #[error("Error reading file - {source}")]
    FileRead {
        #[source]
        source: std::io::Error,
    },

    #[error("No C++ files found under {roots}")]
    NoFilesDiscovered { roots: String },
}

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icon generation
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("Invalid icon size: {size}")]
    #[diagnostic(
        code(pwa_icons::size),
        help("Icon sizes must be between 1 and 8192 pixels")
    )]
    InvalidSize { size: i32 },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pwa_icons::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Encoding error with {path}: {message}")]
    #[diagnostic(code(pwa_icons::encode))]
    Encoding {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(pwa_icons::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Label {label:?} is longer than {max} characters")]
    #[diagnostic(
        code(pwa_icons::label),
        help("A plus sign is drawn in place of labels that do not fit")
    )]
    LabelTooLong { label: String, max: usize },

    #[error("Unsupported glyph: {ch:?}")]
    #[diagnostic(
        code(pwa_icons::glyph),
        help("The label font covers A-Z and 0-9 only")
    )]
    UnsupportedGlyph { ch: char },

    #[error("{failed} of {total} icon file(s) failed")]
    #[diagnostic(
        code(pwa_icons::batch),
        help("See the per-file status lines above")
    )]
    Batch { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, IconError>;

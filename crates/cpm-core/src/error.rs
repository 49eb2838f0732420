use thiserror::Error;

/// Errors raised while resolving command-line code page identifiers.
#[derive(Error, Debug)]
pub enum CpmError {
    /// Identifier does not match the `cpXXXX` pattern.
    #[error("code page '{identifier}' does not match pattern 'cpXXXX'")]
    Malformed {
        /// The rejected identifier as given on the command line.
        identifier: String,
    },

    /// Well-formed identifier naming a page outside the supported family.
    #[error("code page '{identifier}' is not a supported windows-125x page")]
    Unsupported {
        /// The rejected identifier as given on the command line.
        identifier: String,
    },
}

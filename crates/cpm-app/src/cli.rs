use clap::Parser;

/// cpmap — byte-to-Unicode conversion table generator for windows-125x
/// code pages.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Code pages to fold into the table, as cpXXXX (e.g. cp1250 cp1251).
    /// Processing order decides which page wins a codepoint collision.
    pub pages: Vec<String>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

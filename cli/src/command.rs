use clap::Subcommand;

mod debug;
mod extract;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the parsed contents of an EPUB.
    Debug(debug::DebugCommand),
    /// Extract every member of an EPUB into a directory.
    Extract(extract::ExtractCommand),
}

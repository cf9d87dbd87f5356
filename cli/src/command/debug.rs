use clap::Args;
use quire::Epub;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DebugCommand {
    /// An EPUB file
    pub ebook_path: PathBuf,

    /// Display all metadata
    #[arg(long)]
    metadata: bool,

    /// Display the manifest
    #[arg(long)]
    manifest: bool,

    /// Display the spine
    #[arg(long)]
    spine: bool,

    /// Display the ToC
    #[arg(long)]
    toc: bool,

    /// Print JSON instead of debug output
    #[arg(long)]
    json: bool,

    /// Reject structural violations that are otherwise tolerated
    #[arg(long)]
    strict: bool,
}

impl DebugCommand {
    pub fn debug(&self) -> anyhow::Result<()> {
        let epub = Epub::options()
            .strict(self.strict)
            .open(&self.ebook_path)?;

        if self.json {
            println!("{}", self.to_json(&epub)?);
        } else {
            self.show_debug(&epub);
        }
        Ok(())
    }

    pub fn has_selected_components(&self) -> bool {
        self.metadata || self.manifest || self.spine || self.toc
    }

    pub fn show_debug(&self, epub: &Epub) {
        if !self.has_selected_components() {
            println!("{:#?}", epub.document());
            return;
        }

        let debug_structs: &[(bool, &dyn std::fmt::Debug)] = &[
            (self.metadata, &epub.metadata()),
            (self.manifest, &epub.manifest()),
            (self.spine, &epub.spine()),
            (self.toc, &epub.toc()),
        ];

        for (is_print, debug_struct) in debug_structs {
            if *is_print {
                println!("{debug_struct:#?}");
            }
        }
    }

    fn to_json(&self, epub: &Epub) -> serde_json::Result<String> {
        if !self.has_selected_components() {
            return serde_json::to_string_pretty(epub.document());
        }

        let mut sections = Map::new();
        if self.metadata {
            sections.insert("metadata".into(), serde_json::to_value(epub.metadata())?);
        }
        if self.manifest {
            sections.insert("manifest".into(), serde_json::to_value(epub.manifest())?);
        }
        if self.spine {
            sections.insert("spine".into(), serde_json::to_value(epub.spine())?);
        }
        if self.toc {
            sections.insert("toc".into(), serde_json::to_value(epub.toc())?);
        }
        serde_json::to_string_pretty(&Value::Object(sections))
    }
}

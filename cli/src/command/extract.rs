use anyhow::Context;
use clap::Args;
use quire::Epub;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// An EPUB file
    pub ebook_path: PathBuf,

    /// Output directory (defaults to the file stem next to the EPUB)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl ExtractCommand {
    pub fn extract(&self) -> anyhow::Result<()> {
        // Refuse anything that is not a readable publication
        let epub = Epub::open(&self.ebook_path)?;
        let out = self.out_dir();

        let file = File::open(&self.ebook_path)
            .with_context(|| format!("Failed to open {}", self.ebook_path.display()))?;
        let mut archive = zip::ZipArchive::new(file)?;
        archive
            .extract(&out)
            .with_context(|| format!("Failed to extract into {}", out.display()))?;

        tracing::info!(
            entries = archive.len(),
            out = %out.display(),
            title = epub.metadata().title(),
            "Extracted EPUB"
        );
        println!("{}", out.display());
        Ok(())
    }

    fn out_dir(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| {
            let stem = self.ebook_path.file_stem().unwrap_or_default();
            self.ebook_path.with_file_name(stem)
        })
    }
}

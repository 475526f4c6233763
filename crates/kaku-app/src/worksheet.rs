use anyhow::{Context, bail};
use kaku_config::Config;
use kaku_core::{KanjiSource, apply_overrides};
use kaku_lang_japanese::{JapaneseRomanizer, KanjiApiClient, KanjiLoader, curated_overrides};
use kaku_layout::{LayoutSummary, RenderContext, Size, render_document};
use kaku_pdf::{FontSet, PdfCanvas};

use crate::cli::{Cli, InputArgs, SourceArgs};

/// Resolve the kanji list, look them up, and write the worksheet PDF
pub async fn run(cli: &Cli, config: &Config) -> anyhow::Result<LayoutSummary> {
    let symbols = resolve_symbols(&cli.input, config).await?;
    let source = open_source(&cli.source, config)?;

    tracing::info!("Looking up {} kanji in the {}", symbols.len(), source.name());
    let mut records = source
        .lookup(&symbols)
        .await
        .with_context(|| format!("Lookup through the {} failed", source.name()))?;

    if cli.apply_overrides {
        let applied = apply_overrides(&mut records, &curated_overrides());
        tracing::info!("Applied overrides to {} kanji", applied);
    }

    tracing::info!("Retrieved {} kanji", records.len());

    let fonts = FontSet::discover(&config.assets.font_regular, &config.assets.font_bold)
        .context("Failed to load fonts")?;
    let mut canvas = PdfCanvas::new(
        Size::new(config.page.width_mm, config.page.height_mm),
        fonts,
    );
    let romanizer = JapaneseRomanizer;
    let ctx = RenderContext {
        style: cli.style.options(),
        assets: &config.assets,
        romanizer: &romanizer,
    };

    tracing::info!("Rendering to {}", cli.output.display());
    let summary = render_document(&mut canvas, &records, &ctx);
    canvas
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(summary)
}

async fn resolve_symbols(input: &InputArgs, config: &Config) -> anyhow::Result<Vec<String>> {
    match (input.grade, &input.file) {
        (Some(grade), _) => KanjiApiClient::new(config.api.clone())
            .fetch_grade(grade)
            .await
            .with_context(|| format!("Failed to fetch the grade {grade} kanji list")),
        (None, Some(path)) => KanjiLoader::load_symbols(path)
            .with_context(|| format!("Failed to read kanji list {}", path.display())),
        (None, None) => bail!("either --grade or --file is required"),
    }
}

fn open_source(source: &SourceArgs, config: &Config) -> anyhow::Result<Box<dyn KanjiSource>> {
    if let Some(path) = &source.dictionary_file {
        let dictionary = KanjiLoader::load_dictionary(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
        return Ok(Box::new(dictionary));
    }

    if source.api {
        return Ok(Box::new(KanjiApiClient::new(config.api.clone())));
    }

    bail!("either --dictionary-file or --api is required")
}

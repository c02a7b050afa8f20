use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rmx::{
    ActivationReport, BlockFrame, Lexicon, MonospaceOracle, RemixConfig, RemixSession, RmxRng,
    SourceDocument, SourcePage, SuffixTagger, TermExtractor, TermProvider,
};

#[derive(Parser, Debug)]
#[command(name = "rmx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the animated stage cycle and dump a frame snapshot after every stage.
    Animate(AnimateArgs),
    /// Build the nine static remix pages.
    Pages(PagesArgs),
    /// Print the term set extracted from a page.
    Terms(TermsArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Source page (or `{ "pages": [...] }` document) JSON.
    #[arg(long)]
    page: PathBuf,

    /// Page of a multi-page document. Defaults to a random page.
    #[arg(long)]
    page_index: Option<usize>,

    /// Lexicon JSON (`{ "noun": [...], ... }`). Defaults to the suffix tagger.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Number of stage advances to run.
    #[arg(long, default_value_t = 9)]
    stages: usize,

    /// Frames ticked after each advance.
    #[arg(long, default_value_t = 60)]
    ticks_per_stage: usize,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PagesArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Recipe list JSON (`[{ "kind": "remix", ... }, ...]`). Defaults to the nine-page book.
    #[arg(long)]
    recipes: Option<PathBuf>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TermsArgs {
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(serde::Serialize)]
struct StageSnapshot {
    report: ActivationReport,
    clock_ms: f64,
    blocks: Vec<BlockFrame>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Animate(args) => cmd_animate(args),
        Command::Pages(args) => cmd_pages(args),
        Command::Terms(args) => cmd_terms(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Keep a subscriber installed by an embedding host.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct Loaded {
    config: RemixConfig,
    doc: SourceDocument,
    provider: Box<dyn TermProvider>,
}

impl SourceArgs {
    fn load(&self) -> anyhow::Result<Loaded> {
        let mut config = match &self.config {
            Some(path) => RemixConfig::from_path(path)?,
            None => RemixConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        let doc = SourceDocument::from_path(&self.page)?;
        let provider: Box<dyn TermProvider> = match &self.lexicon {
            Some(path) => Box::new(Lexicon::from_path(path)?),
            None => Box::new(SuffixTagger),
        };
        Ok(Loaded {
            config,
            doc,
            provider,
        })
    }
}

fn seeded_rng(config: &RemixConfig) -> RmxRng {
    config
        .seed
        .map(RmxRng::seed_from_u64)
        .unwrap_or_else(RmxRng::from_entropy)
}

fn pick_page<'a>(
    doc: &'a SourceDocument,
    index: Option<usize>,
    rng: &mut RmxRng,
) -> anyhow::Result<&'a SourcePage> {
    match index {
        Some(i) => doc
            .pages
            .get(i)
            .with_context(|| format!("page index {i} out of range ({} pages)", doc.pages.len())),
        None => doc
            .random_page(rng)
            .map(|(_, page)| page)
            .context("document has no pages"),
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let Loaded {
        config,
        doc,
        provider,
    } = args.source.load()?;
    let mut rng = seeded_rng(&config);
    let page = pick_page(&doc, args.source.page_index, &mut rng)?;
    let mut session = RemixSession::new(config)?;
    session.load(page, provider.as_ref());

    let dt = Duration::from_millis(args.frame_ms);
    let handle = session.start_loop();
    let mut snapshots = Vec::with_capacity(args.stages);
    for _ in 0..args.stages {
        let report = session.advance();
        for _ in 0..args.ticks_per_stage {
            session.tick(handle, dt);
        }
        snapshots.push(StageSnapshot {
            report,
            clock_ms: session.clock_ms(),
            blocks: session.frame(),
        });
    }
    session.cancel_loop();

    write_json(&args.out, &snapshots)?;
    eprintln!(
        "wrote {} stage snapshots to {}",
        snapshots.len(),
        args.out.display()
    );
    Ok(())
}

fn cmd_pages(args: PagesArgs) -> anyhow::Result<()> {
    let Loaded {
        config,
        doc,
        provider,
    } = args.source.load()?;
    config.validate()?;
    let mut rng = seeded_rng(&config);
    let page = pick_page(&doc, args.source.page_index, &mut rng)?;
    let terms = TermExtractor::new(config.max_terms)
        .extract(provider.as_ref(), &page.full_text(), &mut rng)
        .inspect_err(|e| tracing::warn!(error = %e, "term extraction failed"))
        .ok();

    let recipes = match &args.recipes {
        Some(path) => rmx::recipes_from_path(path)?,
        None => rmx::default_book(),
    };
    let book = rmx::build_book(
        &recipes,
        page,
        terms.as_ref(),
        config.canvas,
        &MonospaceOracle::default(),
        rng.next_u64(),
    );
    write_json(&args.out, &book)?;
    eprintln!("wrote {} pages to {}", book.len(), args.out.display());
    Ok(())
}

fn cmd_terms(args: TermsArgs) -> anyhow::Result<()> {
    let Loaded {
        config,
        doc,
        provider,
    } = args.source.load()?;
    config.validate()?;
    let mut rng = seeded_rng(&config);
    let page = pick_page(&doc, args.source.page_index, &mut rng)?;
    let terms = TermExtractor::new(config.max_terms)
        .extract(provider.as_ref(), &page.full_text(), &mut rng)
        .context("extract terms")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&terms).context("serialize terms")?
    );
    Ok(())
}

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use markscan::{
    html_report, metrics_csv, term_counts_csv, Analysis, LexiconStore, MemoryLexicon, Term,
    TermFilter, TermKind,
};

#[derive(Parser)]
#[command(
    name = "markscan",
    about = "Detect lexical markers of AI-generated prose",
    version
)]
struct Cli {
    /// Lexicon file (JSON). Created with the default term bank if missing.
    #[arg(long, global = true, default_value = "lexicon.json")]
    lexicon: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze files, --text, or stdin
    Analyze {
        /// File paths to analyze (reads stdin if neither files nor --text given)
        files: Vec<PathBuf>,
        /// Text to analyze directly
        #[arg(long, conflicts_with = "files")]
        text: Option<String>,
        /// Only match terms with at least this weight (1-10)
        #[arg(long)]
        min_weight: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Add or update a word term in the lexicon
    AddWord {
        text: String,
        #[arg(long, default_value_t = 5)]
        weight: u32,
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long, default_value = "user")]
        source: String,
    },
    /// Add or update a phrase term in the lexicon
    AddPhrase {
        text: String,
        #[arg(long, default_value_t = 5)]
        weight: u32,
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long, default_value = "user")]
        source: String,
    },
    /// Delete a term from the lexicon
    Remove {
        text: String,
        #[arg(long, value_enum)]
        kind: KindArg,
    },
    /// List lexicon terms
    List {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        #[arg(long)]
        min_weight: Option<u32>,
    },
    /// Import terms from a CSV file (columns: text,weight[,category,source])
    Import {
        path: PathBuf,
        #[arg(long, value_enum)]
        kind: KindArg,
    },
    /// Export terms of one kind to a CSV file
    Export {
        path: PathBuf,
        #[arg(long, value_enum)]
        kind: KindArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
    Html,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Word,
    Phrase,
}

impl From<KindArg> for TermKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Word => TermKind::Word,
            KindArg::Phrase => TermKind::Phrase,
        }
    }
}

fn load_store(path: &Path) -> anyhow::Result<MemoryLexicon> {
    if path.exists() {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon {}", path.display()))?;
        let terms: Vec<Term> = serde_json::from_str(&json)
            .with_context(|| format!("parsing lexicon {}", path.display()))?;
        Ok(MemoryLexicon::from_terms(terms))
    } else {
        Ok(MemoryLexicon::with_default_bank())
    }
}

fn save_store(path: &Path, store: &MemoryLexicon) -> anyhow::Result<()> {
    let terms = store.list_terms(&TermFilter::default())?;
    let json = serde_json::to_string_pretty(&terms)?;
    fs::write(path, json).with_context(|| format!("writing lexicon {}", path.display()))?;
    Ok(())
}

fn read_input(files: &[PathBuf], text: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;
        return Ok(input);
    }
    let mut combined = String::new();
    for path in files {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        combined.push_str(&contents);
        if !combined.ends_with('\n') {
            combined.push('\n');
        }
    }
    Ok(combined)
}

fn print_text_report(analysis: &Analysis) {
    let report = &analysis.report;
    println!("AI CONTENT ANALYSIS");
    println!("{}", "=".repeat(50));
    println!("Total Words: {}", report.total_words);
    println!("Total Sentences: {}", report.total_sentences);
    println!("Unique Words: {}", report.unique_words);
    println!("AI Markers Found: {}", report.marker_count);
    println!("AI Word Density: {:.2}%", report.word_density_pct);
    println!("AI Phrase Density: {:.2}%", report.phrase_density_pct);
    println!("Weighted AI Score: {:.2}/10", report.weighted_score);

    if !report.word_counts.is_empty() {
        println!("\nAI Words Detected:");
        let mut counts: Vec<_> = report.word_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (word, count) in counts {
            println!("  - {word}: {count}");
        }
    }
    if !report.phrase_counts.is_empty() {
        println!("\nAI Phrases Detected:");
        let mut counts: Vec<_> = report.phrase_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (phrase, count) in counts {
            println!("  - {phrase}: {count}");
        }
    }

    let suggestions = &analysis.suggestions;
    println!("\nSuggestions:");
    for item in &suggestions.general {
        println!("  - {item}");
    }
    for (word, replacements) in &suggestions.word_replacements {
        println!("  - {word} -> {}", replacements.join(", "));
    }
    for (phrase, replacements) in &suggestions.phrase_replacements {
        println!("  - {phrase} -> {}", replacements.join(", "));
    }
    for item in &suggestions.structure {
        println!("  - {item}");
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut store = load_store(&cli.lexicon)?;

    match cli.command {
        Command::Analyze {
            files,
            text,
            min_weight,
            format,
        } => {
            let input = read_input(&files, text)?;
            let filter = match min_weight {
                Some(weight) => TermFilter::min_weight(weight),
                None => TermFilter::default(),
            };
            let analysis = markscan::analyze(&input, &store, &filter)?;
            match format {
                OutputFormat::Text => print_text_report(&analysis),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                }
                OutputFormat::Csv => {
                    print!("{}", metrics_csv(&analysis.report)?);
                    if !analysis.report.word_counts.is_empty() {
                        println!();
                        print!("{}", term_counts_csv("word", &analysis.report.word_counts)?);
                    }
                    if !analysis.report.phrase_counts.is_empty() {
                        println!();
                        print!(
                            "{}",
                            term_counts_csv("phrase", &analysis.report.phrase_counts)?
                        );
                    }
                }
                OutputFormat::Html => {
                    println!(
                        "{}",
                        html_report(
                            &input,
                            &analysis.matches,
                            &analysis.report,
                            &analysis.suggestions
                        )
                    );
                }
            }
        }
        Command::AddWord {
            text,
            weight,
            category,
            source,
        } => {
            store.upsert_term(Term::word(&text, weight, &category, &source))?;
            save_store(&cli.lexicon, &store)?;
            println!("Added word: {}", text.to_lowercase());
        }
        Command::AddPhrase {
            text,
            weight,
            category,
            source,
        } => {
            store.upsert_term(Term::phrase(&text, weight, &category, &source))?;
            save_store(&cli.lexicon, &store)?;
            println!("Added phrase: {}", text.to_lowercase());
        }
        Command::Remove { text, kind } => {
            if store.delete_term(&text, kind.into())? {
                save_store(&cli.lexicon, &store)?;
                println!("Removed: {}", text.to_lowercase());
            } else {
                println!("Not found: {}", text.to_lowercase());
            }
        }
        Command::List { kind, min_weight } => {
            let filter = TermFilter {
                kind: kind.map(Into::into),
                min_weight,
                ..TermFilter::default()
            };
            for term in store.list_terms(&filter)? {
                let kind = match term.kind {
                    TermKind::Word => "word",
                    TermKind::Phrase => "phrase",
                };
                println!(
                    "{:6} {:2}  {}  [{} / {}]",
                    kind, term.weight, term.text, term.category, term.source
                );
            }
        }
        Command::Import { path, kind } => {
            let file = fs::File::open(&path)
                .with_context(|| format!("opening {}", path.display()))?;
            let imported = store.import_csv(file, kind.into())?;
            save_store(&cli.lexicon, &store)?;
            println!("Imported {imported} terms from {}", path.display());
        }
        Command::Export { path, kind } => {
            let file = fs::File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            let exported = store.export_csv(file, kind.into())?;
            println!("Exported {exported} terms to {}", path.display());
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

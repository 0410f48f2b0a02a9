use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use search_core::{paginate, DocId, DocumentStatus, SearchOptions, SearchServer, StopWords};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct InputDoc {
    id: DocId,
    text: String,
    #[serde(default)]
    status: DocumentStatus,
    #[serde(default)]
    ratings: Vec<i32>,
}

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Index a document corpus in memory and run TF-IDF queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct CorpusArgs {
    /// Input path (JSON/JSONL file or a directory of them)
    #[arg(long)]
    input: String,
    /// Space-delimited stop words
    #[arg(long, default_value = "")]
    stop_words: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl From<StatusArg> for DocumentStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Actual => DocumentStatus::Actual,
            StatusArg::Irrelevant => DocumentStatus::Irrelevant,
            StatusArg::Banned => DocumentStatus::Banned,
            StatusArg::Removed => DocumentStatus::Removed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents for a query
    Query {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Query text, e.g. "fluffy cat -collar"
        #[arg(long)]
        query: String,
        /// Only return documents with this status
        #[arg(long, value_enum, default_value_t = StatusArg::Actual)]
        status: StatusArg,
        /// Maximum number of results
        #[arg(long, default_value_t = 5)]
        max_results: usize,
        /// Results per printed page
        #[arg(long, default_value_t = 2)]
        page_size: usize,
        /// Print results as JSON instead of pages
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show which query words a document matches
    Match {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[arg(long)]
        query: String,
        /// Document id
        #[arg(long)]
        id: DocId,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { corpus, query, status, max_results, page_size, json } => {
            let options = SearchOptions { max_results, ..SearchOptions::default() };
            let server = load_server(&corpus, options)?;
            let docs = server.find_top_documents_by_status(&query, status.into())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&docs)?);
                return Ok(());
            }
            for (n, page) in paginate(&docs, page_size)?.iter().enumerate() {
                println!("Page {}", n + 1);
                for doc in page {
                    println!("{doc}");
                }
            }
            Ok(())
        }
        Commands::Match { corpus, query, id } => {
            let server = load_server(&corpus, SearchOptions::default())?;
            let (words, status) = server.match_document(&query, id)?;
            println!("{{ document_id = {id}, status = {status:?}, words = [{}] }}", words.join(", "));
            Ok(())
        }
    }
}

fn load_server(corpus: &CorpusArgs, options: SearchOptions) -> Result<SearchServer> {
    let stop_words = StopWords::parse(&corpus.stop_words).context("invalid stop words")?;
    let mut server = SearchServer::with_options(stop_words, options);

    let files = collect_files(Path::new(&corpus.input))?;
    for file in files {
        for doc in read_docs(&file)? {
            // Bad records are reported and skipped; the rest of the corpus still loads.
            if let Err(err) = server.add_document(doc.id, &doc.text, doc.status, &doc.ratings) {
                tracing::warn!(file = %file.display(), id = doc.id, %err, "skipping document");
            }
        }
    }
    tracing::info!(num_docs = server.document_count(), input = %corpus.input, "corpus loaded");
    Ok(server)
}

fn collect_files(input_path: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else {
        bail!("input path {} does not exist", input_path.display());
    }
    Ok(files)
}

fn read_docs(file: &Path) -> Result<Vec<InputDoc>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        let mut docs = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            docs.push(serde_json::from_str(&line)?);
        }
        return Ok(docs);
    }
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => {
            let docs = arr.into_iter().map(serde_json::from_value::<InputDoc>).collect::<Result<Vec<_>, _>>()?;
            Ok(docs)
        }
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(json)?]),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_jsonl_records_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.jsonl");
        let mut f = File::create(&path).unwrap();
        writeln!(f, r#"{{"id": 0, "text": "white cat", "ratings": [8, -3]}}"#).unwrap();
        writeln!(f).unwrap();
        writeln!(f, r#"{{"id": 1, "text": "fluffy cat", "status": "banned"}}"#).unwrap();
        drop(f);

        let docs = read_docs(&path).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].status, DocumentStatus::Actual);
        assert_eq!(docs[0].ratings, vec![8, -3]);
        assert_eq!(docs[1].status, DocumentStatus::Banned);
        assert!(docs[1].ratings.is_empty());

        std::fs::write(dir.path().join("more.json"), r#"[{"id": 1, "text": "dup"}, {"id": 2, "text": "and"}]"#).unwrap();

        let corpus = CorpusArgs { input: dir.path().to_string_lossy().to_string(), stop_words: "and".into() };
        let server = load_server(&corpus, SearchOptions::default()).unwrap();
        // docs.jsonl sorts first, so the duplicate id 1 from more.json is skipped.
        assert_eq!(server.document_count(), 3);
        assert_eq!(server.document_id(2).unwrap(), 2);
        let (words, status) = server.match_document("fluffy -dup", 1).unwrap();
        assert_eq!(words, vec!["fluffy"]);
        assert_eq!(status, DocumentStatus::Banned);
    }
}

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use corpus_document::Status;
use corpus_index::{scan_corpus, CorpusIndex, ScanReport};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("corpus-indexer")
        .version("0.1.0")
        .about("Structural indexer for proposal document corpora")
        .subcommand_required(true)
        .subcommand(
            Command::new("scan")
                .about("Scan a corpus and print a report")
                .arg(
                    Arg::new("path")
                        .default_value(".")
                        .help("Corpus directory"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("query")
                .about("Query indexed documents")
                .arg(
                    Arg::new("path")
                        .default_value(".")
                        .help("Corpus directory"),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .help("List documents with this status"),
                )
                .arg(
                    Arg::new("author")
                        .long("author")
                        .help("List documents by this author (case-insensitive)"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .help("List identifiers with this prefix"),
                ),
        )
        .subcommand(
            Command::new("unresolved")
                .about("List unresolved cross-references")
                .arg(
                    Arg::new("path")
                        .default_value(".")
                        .help("Corpus directory"),
                ),
        );

    let matches = cli.get_matches();
    let result = match matches.subcommand() {
        Some(("scan", args)) => run_scan(args),
        Some(("query", args)) => run_query(args),
        Some(("unresolved", args)) => run_unresolved(args),
        _ => unreachable!("subcommand is required"),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load_index(args: &ArgMatches) -> anyhow::Result<CorpusIndex> {
    let path = args.get_one::<String>("path").unwrap();
    scan_corpus(path).with_context(|| format!("scanning corpus at '{path}'"))
}

fn run_scan(args: &ArgMatches) -> anyhow::Result<()> {
    let index = load_index(args)?;
    let report = ScanReport::from_index(&index);

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.generate_text());
    }
    Ok(())
}

fn run_query(args: &ArgMatches) -> anyhow::Result<()> {
    let index = load_index(args)?;

    if let Some(status_name) = args.get_one::<String>("status") {
        let status = Status::parse(status_name)
            .ok_or_else(|| anyhow::anyhow!("unknown status '{status_name}'"))?;
        for label in index.identifiers_by_status(status) {
            println!("{label}");
        }
    } else if let Some(author) = args.get_one::<String>("author") {
        for label in index.identifiers_by_author(author) {
            println!("{label}");
        }
    } else if let Some(prefix) = args.get_one::<String>("prefix") {
        for identifier in index.identifiers_with_prefix(prefix) {
            println!("{identifier}");
        }
    } else {
        anyhow::bail!("pass one of --status, --author or --prefix");
    }
    Ok(())
}

fn run_unresolved(args: &ArgMatches) -> anyhow::Result<()> {
    let index = load_index(args)?;
    for (source, raw) in index.unresolved_references() {
        println!("{source} -> {raw}");
    }
    Ok(())
}

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use statblock_importer::config::ImporterConfig;
use statblock_importer::statblock::{BatchParse, StatBlockParser};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Statblock text file; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,
    /// Config file to use instead of the per-user one.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Treat the input as several statblocks.
    #[arg(long)]
    multiple: bool,
    /// Separator between statblocks.
    #[arg(long, value_name = "STR")]
    delimiter: Option<String>,
    /// Special abilities are @-prefixed instead of bulleted.
    #[arg(long = "modified-abilities")]
    modified_abilities: bool,
    /// Bullet glyph alternation, e.g. "•|\*".
    #[arg(long, value_name = "STR")]
    bullets: Option<String>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
    /// Debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    statblock_importer::logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ImporterConfig::from_path(path)?,
        None => ImporterConfig::load(),
    };
    if cli.modified_abilities {
        config.parser.use_modified_special_abilities = true;
    }
    if let Some(bullets) = &cli.bullets {
        config.parser.bullet_delimiter = bullets.clone();
    }
    if let Some(delimiter) = &cli.delimiter {
        config.parser.actor_delimiter = delimiter.clone();
    }

    let input = read_input(cli.path.as_ref())?;
    let parser = StatBlockParser::new(&config.labels, &config.parser)?;
    let delimiter = config.parser.actor_delimiter.as_str();

    let multiple = cli.multiple || (!delimiter.is_empty() && input.contains(delimiter));
    if multiple {
        let batch = expand_names(parser.parse_multiple(&input, delimiter)?)?;
        print_json(&batch, cli.pretty)
    } else {
        let actor = parser.parse(&input)?;
        print_json(&actor, cli.pretty)
    }
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Apply the "Name A | Name B" shorthand and fail when nothing parsed.
fn expand_names(mut batch: BatchParse) -> Result<BatchParse, String> {
    if batch.all_failed() {
        return Err(format!("all {} statblocks failed to parse", batch.failures.len()));
    }
    batch.actors = batch
        .actors
        .iter()
        .flat_map(|actor| actor.named_copies())
        .collect();
    Ok(batch)
}

fn print_json<T: serde::Serialize>(
    value: &T,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

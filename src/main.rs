use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
};

use milim::{
    cards::{
        flags_help_text,
        Card,
        DEFAULT_ID_PREFIX,
    },
    core::{
        pipeline::{
            collect_from_source_list,
            GlobalFilters,
        },
        utils::CleanField,
        MilimError,
    },
    deck,
    scrape::source_list,
    tabular,
};

#[derive(Parser)]
#[command(
    name = "milim",
    version,
    about = "Build an Anki-importable deck from a Hebrew dictionary site or a tabular word list"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape dictionary pages listed in INFILE
    #[command(after_help = scrape_help())]
    Scrape {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Read cards from a CSV/TSV word list
    #[command(after_help = import_help())]
    Import {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// input file (see help below)
    in_file: PathBuf,

    /// output file (ready to be imported into an Anki deck)
    out_file: PathBuf,

    /// add the specified tag(s) to all cards
    #[arg(short, long, value_name = "TAGS")]
    tags: Option<String>,

    /// include cards with the specified flags (comma-separated list)
    #[arg(short, long, value_name = "FLAGS", value_delimiter = ',')]
    include: Vec<String>,

    /// exclude cards with the specified flags (comma-separated list)
    #[arg(short = 'x', long, value_name = "FLAGS", value_delimiter = ',')]
    exclude: Vec<String>,

    /// namespace prefix prepended to every row id
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_ID_PREFIX)]
    prefix: String,
}

fn scrape_help() -> String {
    format!(
        "\
# Source file format

Source text file should contain one dictionary URL per line,
optionally followed by one or two of the following flags:

-x/--exclude FLAGS\texclude cards with these flags
-i/--include FLAGS\tinclude cards with these flags

Inclusion has priority.

{}",
        flags_help_text()
    )
}

fn import_help() -> String {
    format!(
        "\
# Source CSV/TSV file columns:

- Word
- Translation
- Pronunciation
- Flags
- Tags

{}",
        flags_help_text()
    )
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MilimError> {
    match cli.command {
        Command::Scrape { common } => {
            let tags = common.tags.as_deref().unwrap_or("").clean_field();
            println!("reading URLs from {}", common.in_file.display());
            let lines = source_list::read_source_file(&common.in_file)?;

            let filters = GlobalFilters {
                include: common.include.clone(),
                exclude: common.exclude.clone(),
            };
            let cards = collect_from_source_list(&lines, &tags, &filters)?;
            write_output(&common, cards)
        }
        Command::Import { common } => {
            let tags = common.tags.as_deref().unwrap_or("").clean_field();
            println!("reading file {}", common.in_file.display());
            let cards = tabular::read_source_file(&common.in_file, &tags)?;
            println!("{} total cards read", cards.len());

            let filters = GlobalFilters {
                include: common.include.clone(),
                exclude: common.exclude.clone(),
            };
            write_output(&common, filters.apply(cards))
        }
    }
}

fn write_output(common: &CommonArgs, cards: Vec<Card>) -> Result<(), MilimError> {
    println!("{} total cards loaded", cards.len());
    if cards.is_empty() {
        println!("No cards loaded, nothing to write!");
        return Ok(());
    }

    println!("writing cards to {}", common.out_file.display());
    let rows = deck::write_deck(&common.out_file, &cards, &common.prefix)?;
    println!("{} rows written", rows);
    println!("all done!");
    Ok(())
}

use std::error;

use bibscan::{author_contains, journal_contains, scan, title_contains, year_is};
use bibscan::{Parser, Predicate};

use clap;
use clap::Parser as CLIParser;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Settings {
    /// Filepath to file to parse
    #[clap(short, long)]
    input: String,

    /// Return only entries published in this year
    #[clap(short, long)]
    year: Option<i32>,

    /// Return only entries whose author list contains this string
    #[clap(short, long)]
    author: Option<String>,

    /// Return only entries whose title contains this string
    #[clap(short, long)]
    title: Option<String>,

    /// Return only entries whose journal contains this string
    #[clap(short, long)]
    journal: Option<String>,

    #[cfg(feature = "serde_json")]
    /// Print matches as JSON instead of plain text
    #[clap(long)]
    json: bool,
}

fn predicates(s: &Settings) -> Vec<Predicate> {
    let mut checks: Vec<Predicate> = Vec::new();
    if let Some(year) = s.year {
        checks.push(year_is(year));
    }
    if let Some(author) = &s.author {
        checks.push(author_contains(author));
    }
    if let Some(title) = &s.title {
        checks.push(title_contains(title));
    }
    if let Some(journal) = &s.journal {
        checks.push(journal_contains(journal));
    }
    checks
}

fn print_human_readable(s: &Settings) -> Result<(), Box<dyn error::Error>> {
    let entries = Parser::from_file(&s.input)?.entries()?;
    for entry in scan(&entries, predicates(s)) {
        println!("author\t= {}", entry.author);
        println!("title\t= {}", entry.title);
        match entry.year {
            Some(year) => println!("year\t= {}", year),
            None => println!("year\t="),
        }
        println!("journal\t= {}", entry.journal);
        println!("file\t= {}", entry.file);
        println!();
    }

    Ok(())
}

#[cfg(feature = "serde_json")]
fn print_json(s: &Settings) -> Result<(), Box<dyn error::Error>> {
    let entries = Parser::from_file(&s.input)?.entries()?;
    let matches: Vec<_> = scan(&entries, predicates(s)).collect();
    println!("{}", serde_json::to_string(&matches)?);

    Ok(())
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let settings = Settings::parse();

    #[cfg(feature = "serde_json")]
    {
        if settings.json {
            return print_json(&settings);
        }
    }
    print_human_readable(&settings)
}

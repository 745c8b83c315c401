use std::io::Read;

use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "seo-lens",
    about = "Analyze markdown articles for SEO quality and schema type",
    version
)]
struct Cli {
    /// Article title used for keyword extraction
    #[arg(short, long, default_value = "")]
    title: String,

    /// Meta description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Comma-separated tags
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Markdown files to analyze (reads stdin if none provided)
    files: Vec<String>,
}

#[derive(Serialize)]
struct Report {
    analysis: seo_lens::ContentAnalysis,
    schema: seo_lens::DetectedSchema,
}

fn report(content: &str, cli: &Cli) -> Report {
    Report {
        analysis: seo_lens::analyze_content(content, &cli.title, &cli.description, &cli.tags),
        schema: seo_lens::detect_schema(content, &cli.title, &cli.tags),
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .expect("Failed to read stdin");
        println!(
            "{}",
            serde_json::to_string_pretty(&report(&input, &cli)).unwrap()
        );
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading {path}: {e}");
                std::process::exit(1);
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report(&text, &cli)).unwrap()
            );
        }
    }
}

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;

use roomjoin::export::OutputFormat;
use roomjoin::input;
use roomjoin::loader::JsonLoader;
use roomjoin::pipeline::Pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about = "Combine rooms and students data", long_about = None)]
struct Cli {
    /// Path to students JSON file
    #[arg(long, value_name = "PATH")]
    students: String,

    /// Path to rooms JSON file
    #[arg(long, value_name = "PATH")]
    rooms: String,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    output_format: OutputFormat,

    /// Output file name (without extension)
    #[arg(long, value_name = "NAME")]
    output_name: String,
}

fn main() -> Result<()> {
    // example call:
    // roomjoin --students input/students.json --rooms input/rooms.json --output-format json --output-name test
    let (students, rooms, format, output_name) = if std::env::args().len() == 1 {
        let args = input::gather_interactive_args().context("Failed to read input")?;
        (args.students, args.rooms, args.format, args.output_name)
    } else {
        let cli = Cli::parse();
        (
            Utf8PathBuf::from(cli.students),
            Utf8PathBuf::from(cli.rooms),
            cli.output_format,
            cli.output_name,
        )
    };

    let output_dir = Utf8PathBuf::from("output");
    std::fs::create_dir_all(&output_dir).with_context(|| format!("Create {}", output_dir))?;
    let output_file = output_dir.join(format!("{}.{}", output_name, format.extension()));

    let pipeline = Pipeline::new(JsonLoader);
    pipeline
        .process(&rooms, &students, &output_file, format)
        .with_context(|| format!("Failed to combine {} with {}", rooms, students))?;

    println!("Data saved to {}", output_file);
    Ok(())
}

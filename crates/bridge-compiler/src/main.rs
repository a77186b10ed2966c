use std::path::PathBuf;

use anyhow::Context;
use bridge_compiler::{CompilerConfig, PreviewOptions, DEFAULT_OUTPUT, DEFAULT_PREVIEW};
use clap::{value_parser, Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("bridge-compile")
        .version(bridge_compiler::VERSION)
        .about("Compile the Uma + PS system notes into structured JSON and an HTML preview")
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .default_value(DEFAULT_OUTPUT)
                .value_parser(value_parser!(PathBuf))
                .help("Path of the structured JSON document"),
        )
        .arg(
            Arg::new("preview")
                .long("preview")
                .default_value(DEFAULT_PREVIEW)
                .value_parser(value_parser!(PathBuf))
                .help("Path of the HTML preview"),
        )
        .arg(
            Arg::new("stylesheet")
                .long("stylesheet")
                .value_parser(value_parser!(PathBuf))
                .help("Also write a stylesheet derived from the document's colours"),
        )
        .arg(
            Arg::new("suits")
                .long("suits")
                .action(ArgAction::SetTrue)
                .help("Render standalone suit letters as suit symbols in the preview"),
        )
        .get_matches();

    let mut config = CompilerConfig::new()
        .with_preview_options(PreviewOptions::new().with_suit_symbols(matches.get_flag("suits")));
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config = config.with_output(output);
    }
    if let Some(preview) = matches.get_one::<PathBuf>("preview") {
        config = config.with_preview(preview);
    }
    if let Some(stylesheet) = matches.get_one::<PathBuf>("stylesheet") {
        config = config.with_stylesheet(stylesheet);
    }

    let artifacts = bridge_compiler::run(&config).context("failed to write compiled artifacts")?;

    println!("Content parsing complete!");
    println!("- Structured data: {}", artifacts.data.display());
    println!("- HTML preview: {}", artifacts.preview.display());
    if let Some(stylesheet) = &artifacts.stylesheet {
        println!("- Stylesheet: {}", stylesheet.display());
    }

    Ok(())
}

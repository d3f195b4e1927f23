use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tessera::definition::load_template;
use tessera::{ParseFormatError, RenderFormat, TemplateService, TesseraError};

/// Render a JSON template definition to HTML, PDF and/or CSV.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the template definition (JSON)
    definition: PathBuf,

    /// Output format; repeat for several. Defaults to all formats.
    #[arg(short, long = "format", value_parser = parse_format)]
    formats: Vec<RenderFormat>,

    /// Directory the rendered files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_format(s: &str) -> Result<RenderFormat, String> {
    s.parse().map_err(|e: ParseFormatError| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<(), TesseraError> {
    let template = load_template(&args.definition)?;
    let service = TemplateService::new();
    let formats = if args.formats.is_empty() {
        service.registry().formats()
    } else {
        args.formats
    };

    fs::create_dir_all(&args.output_dir)?;
    for format in formats {
        let result = service.render(&template, format)?;
        let path = args.output_dir.join(result.suggested_filename());
        fs::write(&path, result.content())?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! CLI for xml-datatree - prints the simplified tree of an XML document

use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use xml_datatree::{ConvertOptions, JsonRenderer, OutlineRenderer, Renderer, Result, TreeConverter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input XML file path ("-" reads from stdin)
    input: PathBuf,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Keep whitespace-only text nodes
    #[arg(long)]
    preserve_whitespace: bool,

    /// Drop comment nodes
    #[arg(long)]
    ignore_comments: bool,

    /// Maximum nesting depth (0 disables the limit)
    #[arg(long, default_value_t = xml_datatree::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Accept documents containing a DTD
    #[arg(long)]
    allow_dtd: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Outline,
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(rendered) => {
            if let Some(output) = &args.output {
                if let Err(e) = std::fs::write(output, &rendered) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully converted to {:?}", output);
            } else {
                print!("{}", rendered);
            }
        }
        Err(e) => {
            eprintln!("Error converting XML: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let options = ConvertOptions {
        preserve_whitespace: args.preserve_whitespace,
        ignore_comments: args.ignore_comments,
        max_depth: (args.max_depth > 0).then_some(args.max_depth),
        allow_dtd: args.allow_dtd,
        ..Default::default()
    };
    let converter = TreeConverter::new(options);

    let conversion = if args.input.as_os_str() == "-" {
        let mut xml = String::new();
        std::io::stdin().read_to_string(&mut xml)?;
        converter.convert_str(&xml)?
    } else {
        converter.convert_file(&args.input)?
    };

    match args.format {
        Format::Outline => OutlineRenderer::default().render(&conversion.tree),
        Format::Json => JsonRenderer { pretty: true }.render(&conversion.tree),
    }
}

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use letter_pdf::content::FakeDataSource;
use letter_pdf::{LetterConfig, LetterDocumentBuilder, LetterGenerator, LetterVariant};
use log::info;
use serde_json::Value;

/// Renders letters locally, the same way the Lambda function does.
///
/// Letters are set in the embedded font family unless `LETTER_PDF_FONTS_DIR` names another one.
#[derive(Parser)]
#[command(author, version, about = "Local runner for the letter PDF function")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a letter to a PDF file.
    Render {
        /// Destination of the PDF.
        #[arg(short, long, default_value = "letter.pdf")]
        output: PathBuf,

        /// Letter variant; defaults to `LETTER_VARIANT` or `greeting`.
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Seed for reproducible content.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the JSON response the function returns for an event.
    Invoke {
        /// Invocation event as JSON.
        #[arg(long, default_value = "{}")]
        event: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Greeting,
    Dated,
}

impl From<VariantArg> for LetterVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Greeting => LetterVariant::Greeting,
            VariantArg::Dated => LetterVariant::Dated,
        }
    }
}

fn render(
    config: LetterConfig,
    document: &LetterDocumentBuilder,
    output: PathBuf,
    variant: Option<VariantArg>,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let config = match variant {
        Some(variant) => config.with_variant(variant.into()),
        None => config,
    };
    let source = match seed {
        Some(seed) => FakeDataSource::seeded(seed),
        None => FakeDataSource::from_entropy(),
    };

    let (content, pdf) = LetterGenerator::with_source(&config, document, source).render()?;
    fs::write(&output, pdf.bytes())?;
    info!("Letter to {} signed by {}", content.name, content.signature);
    println!("Generated {} ({} bytes)", output.display(), pdf.len());
    Ok(())
}

fn invoke(
    config: LetterConfig,
    document: &LetterDocumentBuilder,
    event: &str,
) -> Result<(), Box<dyn Error>> {
    let event: Value = serde_json::from_str(event)?;
    let response = LetterGenerator::new(&config, document).generate(&event)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = LetterConfig::from_env()?;
    let document = LetterDocumentBuilder::from_env()?;
    match cli.command {
        Commands::Render {
            output,
            variant,
            seed,
        } => render(config, &document, output, variant, seed),
        Commands::Invoke { event } => invoke(config, &document, &event),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}

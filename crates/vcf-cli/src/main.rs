use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vcf_mapping::EXAMPLE_MAPPING_JSON;
use vcf_model::VCardVersion;
use vcf_pipeline::{OutputMode, Pipeline, PipelineConfig, SplitLimits};
use vcf_validation::Strictness;

mod config;

use config::Settings;

#[derive(Parser)]
#[command(name = "csv2vcard")]
#[command(about = "Convert CSV contact exports to vCard files", version)]
struct Cli {
    /// YAML or JSON file with default option values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV file, or a directory of CSV files, to vCards
    Convert {
        /// CSV file or directory containing CSV files
        source: PathBuf,

        /// Field delimiter: a single character or "tab"
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// vCard version: 3.0 or 4.0
        #[arg(short = 'V', long)]
        vcard_version: Option<String>,

        /// Write every contact into one contacts.vcf
        #[arg(short = '1', long)]
        single_vcard: bool,

        /// Split output into files of at most this many bytes
        #[arg(long)]
        split_max_bytes: Option<usize>,

        /// Split output into files of at most this many contacts
        #[arg(long)]
        split_max_count: Option<usize>,

        /// Base name for split files
        #[arg(long)]
        split_base: Option<String>,

        /// JSON file overriding the column mapping
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Input encoding; detected when omitted
        #[arg(short, long)]
        encoding: Option<String>,

        /// Fail on missing required fields and malformed input
        #[arg(long)]
        strict: bool,
    },

    /// Write the built-in sample contact
    Test {
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// vCard version: 3.0 or 4.0
        #[arg(short = 'V', long)]
        vcard_version: Option<String>,
    },

    /// Print an example column mapping file
    Mapping,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load_optional(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            source,
            delimiter,
            output,
            vcard_version,
            single_vcard,
            split_max_bytes,
            split_max_count,
            split_base,
            mapping,
            encoding,
            strict,
        } => {
            if !source.exists() {
                bail!("Source path does not exist: {}", source.display());
            }

            let limits = SplitLimits {
                max_bytes: split_max_bytes.or(settings.split_max_bytes),
                max_count: split_max_count.or(settings.split_max_count),
            };
            let split_base = split_base.or(settings.split_base);
            let single_vcard = single_vcard || settings.single_vcard.unwrap_or(false);

            let output_mode = if limits.max_bytes.is_some()
                || limits.max_count.is_some()
                || split_base.is_some()
            {
                OutputMode::Split {
                    base_name: split_base.unwrap_or_else(|| "contacts".to_string()),
                    limits,
                }
            } else if single_vcard {
                OutputMode::combined()
            } else {
                OutputMode::PerContact
            };

            let config = PipelineConfig::new()
                .delimiter(delimiter.or(settings.delimiter).unwrap_or_else(|| ",".to_string()))
                .encoding(encoding.or(settings.encoding))
                .mapping_file(mapping.or(settings.mapping))
                .version(resolve_version(vcard_version.or(settings.vcard_version))?)
                .strictness(Strictness::from_flag(
                    strict || settings.strict.unwrap_or(false),
                ))
                .output_dir(output_dir(output, settings.output))
                .output_mode(output_mode);

            convert(&source, config)
        }
        Commands::Test {
            output,
            vcard_version,
        } => {
            let config = PipelineConfig::new()
                .version(resolve_version(vcard_version.or(settings.vcard_version))?)
                .output_dir(output_dir(output, settings.output));

            let (vcard, _path) = Pipeline::new(config).write_sample()?;
            print!("{}", vcard.text);
            println!("Test vCard created successfully.");
            Ok(())
        }
        Commands::Mapping => {
            println!("{EXAMPLE_MAPPING_JSON}");
            Ok(())
        }
    }
}

fn convert(source: &Path, config: PipelineConfig) -> anyhow::Result<()> {
    let mut pipeline = Pipeline::new(config);
    let written = pipeline.run(source)?;

    let stats = pipeline.stats();
    tracing::debug!(
        files_read = stats.files_read,
        contacts = stats.contacts_parsed,
        warnings = stats.contacts_with_warnings,
        skipped = stats.rows_skipped,
        "Conversion finished"
    );

    if written.is_empty() {
        println!("No vCard files were created. Check your CSV file.");
    } else {
        println!("Successfully created {} vCard file(s).", written.len());
        for path in &written {
            println!("  - {}", path.display());
        }
    }
    Ok(())
}

fn resolve_version(value: Option<String>) -> anyhow::Result<VCardVersion> {
    Ok(value.as_deref().map(str::parse::<VCardVersion>).transpose()?.unwrap_or_default())
}

fn output_dir(flag: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    flag.or(configured).unwrap_or_else(|| PathBuf::from("export"))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

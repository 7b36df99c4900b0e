use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use saltdigest_cli::config::{AppConfig, ConfigManager, get_config};
use saltdigest_cli::input::{InputSource, decode_hex};
use saltdigest_cli::output::{DigestReport, OutputFormat, SaltReport, VerifyReport};
use saltdigest_cli::terminal;
use saltdigest_core::DigestHasher;

#[derive(Parser)]
#[command(name = "saltdigest")]
#[command(author, version, about = "Salted, iterated SHA-1 digests and secure salt generation", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the SHA-1 digest of text, a file, or stdin
    Hash {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        salt_args: SaltArgs,

        /// Generate a fresh random salt and print it with the digest
        #[arg(short, long, conflicts_with = "salt")]
        generate_salt: bool,

        /// Length of the generated salt in bytes (defaults to hasher.salt_length)
        #[arg(long, value_name = "BYTES", requires = "generate_salt")]
        salt_length: Option<usize>,

        /// Output format (defaults to output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormatArg>,
    },

    /// Check input against a stored hex digest
    Verify {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        salt_args: SaltArgs,

        /// Expected digest, hex-encoded
        #[arg(long, value_name = "HEX")]
        digest: String,

        /// Output format (defaults to output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormatArg>,
    },

    /// Generate a random salt
    Salt {
        /// Number of bytes (defaults to hasher.salt_length)
        bytes: Option<usize>,

        /// Output format (defaults to output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormatArg>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Text to hash, encoded as UTF-8
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Hash the contents of a file instead
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(clap::Args)]
struct SaltArgs {
    /// Salt, hex-encoded
    #[arg(short, long, value_name = "HEX")]
    salt: Option<String>,

    /// Number of digest rounds (defaults to hasher.default_iterations)
    #[arg(short = 'n', long)]
    iterations: Option<u32>,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., hasher.engine_mode)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., hasher.default_iterations)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration values
    List,

    /// Show the configuration file path
    Path,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormatArg {
    Text,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("saltdigest_core", log::LevelFilter::Debug)
            .filter_module("saltdigest_cli", log::LevelFilter::Debug)
            .filter_module("saltdigest", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match cli.command {
        Commands::Hash {
            input,
            salt_args,
            generate_salt,
            salt_length,
            format,
        } => {
            let config = get_config().context("Failed to load configuration")?;
            hash_command(config, input, salt_args, generate_salt, salt_length, format)?;
        }
        Commands::Verify {
            input,
            salt_args,
            digest,
            format,
        } => {
            let config = get_config().context("Failed to load configuration")?;
            verify_command(config, input, salt_args, &digest, format)?;
        }
        Commands::Salt { bytes, format } => {
            let config = get_config().context("Failed to load configuration")?;
            salt_command(config, bytes, format)?;
        }
        Commands::Config { command } => {
            config_command(command)?;
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

fn create_hasher(config: &AppConfig) -> Result<DigestHasher> {
    DigestHasher::with_config(config.hasher.clone()).context("Failed to initialize digest service")
}

fn formatter_for(
    config: &AppConfig,
    format: Option<OutputFormatArg>,
) -> Result<Box<dyn saltdigest_cli::output::OutputFormatter>> {
    let format = match format {
        Some(arg) => OutputFormat::from(arg),
        None => OutputFormat::from_string(&config.output.default_format)?,
    };
    Ok(format.formatter(terminal::should_use_color(config.output.color_enabled)))
}

fn hash_command(
    config: AppConfig,
    input: InputArgs,
    salt_args: SaltArgs,
    generate_salt: bool,
    salt_length: Option<usize>,
    format: Option<OutputFormatArg>,
) -> Result<()> {
    let hasher = create_hasher(&config)?;
    let formatter = formatter_for(&config, format)?;

    let data = InputSource::from_args(input.text, input.file).read()?;
    let iterations = salt_args
        .iterations
        .unwrap_or(config.hasher.default_iterations);

    let salt = if generate_salt {
        let length = salt_length.unwrap_or(config.hasher.salt_length);
        Some(hasher.generate_salt(length)?)
    } else {
        salt_args
            .salt
            .as_deref()
            .map(|value| decode_hex("salt", value))
            .transpose()?
    };

    log::debug!(
        "Hashing {} bytes with {} iterations (salted: {})",
        data.len(),
        iterations,
        salt.is_some()
    );

    let digest = hasher.hash_iterated(&data, salt.as_deref(), iterations)?;
    let report = DigestReport::new(digest.as_bytes(), salt.as_deref(), iterations);
    print!("{}", formatter.format_digest(&report)?);

    Ok(())
}

fn verify_command(
    config: AppConfig,
    input: InputArgs,
    salt_args: SaltArgs,
    expected_hex: &str,
    format: Option<OutputFormatArg>,
) -> Result<()> {
    let hasher = create_hasher(&config)?;
    let formatter = formatter_for(&config, format)?;

    let data = InputSource::from_args(input.text, input.file).read()?;
    let expected = decode_hex("digest", expected_hex)?;
    let salt = salt_args
        .salt
        .as_deref()
        .map(|value| decode_hex("salt", value))
        .transpose()?;
    let iterations = salt_args
        .iterations
        .unwrap_or(config.hasher.default_iterations);

    let matches = hasher.verify(&data, salt.as_deref(), iterations, &expected)?;
    print!(
        "{}",
        formatter.format_verify(&VerifyReport {
            matches,
            iterations
        })?
    );

    if !matches {
        anyhow::bail!("Digest does not match");
    }
    Ok(())
}

fn salt_command(
    config: AppConfig,
    bytes: Option<usize>,
    format: Option<OutputFormatArg>,
) -> Result<()> {
    let hasher = create_hasher(&config)?;
    let formatter = formatter_for(&config, format)?;

    let salt = match bytes {
        Some(n) => hasher.generate_salt(n)?,
        None => hasher.generate_default_salt()?,
    };
    print!("{}", formatter.format_salt(&SaltReport::new(&salt))?);

    Ok(())
}

fn config_command(command: ConfigCommand) -> Result<()> {
    let mut manager = ConfigManager::new();

    match command {
        ConfigCommand::Get { key } => {
            let value = manager.get(&key)?;
            println!("{value}");
        }
        ConfigCommand::Set { key, value } => {
            manager.set(&key, &value)?;
            println!("Set {key} = {value}");
        }
        ConfigCommand::List => {
            for (key, value) in manager.list()? {
                println!("{key} = {value}");
            }
        }
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

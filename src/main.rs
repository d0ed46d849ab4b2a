use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use seqbatch::{FastQc, PlanManifest, Settings, collect_inputs};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seqbatch", version, about = "Render batched FastQC command lines")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate settings and reserved flags
    Check(SettingsArgs),
    /// Print one command line per batch
    Plan(PlanArgs),
}

#[derive(Args)]
struct SettingsArgs {
    /// JSON property file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Override exe.fastqc
    #[arg(long)]
    exe: Option<String>,

    /// Override script.numThreads
    #[arg(short, long)]
    threads: Option<i64>,

    /// Put every input in a single batch
    #[arg(long)]
    single_batch: bool,

    /// Override output.dir
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override temp.dir
    #[arg(long)]
    temp: Option<PathBuf>,
}

#[derive(Args)]
struct PlanArgs {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Input directory or sequence file (repeatable)
    #[arg(short, long = "input", required = true)]
    inputs: Vec<PathBuf>,

    /// Also write a JSON plan manifest
    #[arg(short, long)]
    manifest: Option<PathBuf>,
}

impl SettingsArgs {
    fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(exe) = &self.exe {
            settings.executable = Some(exe.clone());
        }
        if let Some(threads) = self.threads {
            settings.num_threads = Some(threads);
        }
        if self.single_batch {
            settings.single_batch = true;
        }
        if let Some(out) = &self.out {
            settings.output_dir = Some(out.clone());
        }
        if let Some(temp) = &self.temp {
            settings.temp_dir = Some(temp.clone());
        }

        debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Check(args) => {
            let settings = args.resolve()?;
            FastQc::check_dependencies(&settings).context("Settings check failed")?;
            info!("✓ Settings are valid");
        }
        Command::Plan(args) => {
            let settings = args.settings.resolve()?;
            FastQc::check_dependencies(&settings).context("Settings check failed")?;

            let fastqc = FastQc::from_settings(&settings)?;
            let inputs = collect_inputs(&args.inputs)?;
            let commands = fastqc.commands(&inputs)?;

            for command in &commands {
                println!("{}", command);
            }
            info!(
                "✓ Rendered {} commands for {} inputs",
                commands.len(),
                inputs.len()
            );

            if let Some(path) = &args.manifest {
                PlanManifest::new(&inputs, fastqc.config(), &commands).write_to_file(path)?;
            }
        }
    }

    Ok(())
}

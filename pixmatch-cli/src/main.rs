use clap::{Parser, ValueEnum};
use pixmatch::io::load_raster;
use pixmatch::{exact_match, score, ChannelMode, DiffMode, OwnedRaster};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare two images pixel by pixel")]
struct Cli {
    /// Baseline image path.
    expected: PathBuf,
    /// Image to check against the baseline.
    actual: PathBuf,
    /// Require a pixel-for-pixel match instead of a similarity score.
    #[arg(long)]
    exact: bool,
    /// Color decomposition for the similarity score.
    #[arg(long, value_enum, default_value_t = ChannelModeArg::PerChannel)]
    channels: ChannelModeArg,
    /// Difference measure for the similarity score.
    #[arg(long, value_enum, default_value_t = DiffModeArg::Distance)]
    diff: DiffModeArg,
    /// Fail when the similarity score is below this value.
    #[arg(long, default_value_t = 1.0)]
    threshold: f64,
    /// Enable tracing output for diagnostics.
    #[arg(long)]
    trace: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ChannelModeArg {
    PerChannel,
    Packed,
}

impl From<ChannelModeArg> for ChannelMode {
    fn from(value: ChannelModeArg) -> Self {
        match value {
            ChannelModeArg::PerChannel => ChannelMode::PerChannel,
            ChannelModeArg::Packed => ChannelMode::Packed,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DiffModeArg {
    Distance,
    CountMismatch,
}

impl From<DiffModeArg> for DiffMode {
    fn from(value: DiffModeArg) -> Self {
        match value {
            DiffModeArg::Distance => DiffMode::Distance,
            DiffModeArg::CountMismatch => DiffMode::CountMismatch,
        }
    }
}

fn load(path: &PathBuf) -> Result<OwnedRaster, ExitCode> {
    load_raster(path).map_err(|err| {
        eprintln!("{}: {err}", path.display());
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let expected = match load(&cli.expected) {
        Ok(raster) => raster,
        Err(code) => return code,
    };
    let actual = match load(&cli.actual) {
        Ok(raster) => raster,
        Err(code) => return code,
    };

    if cli.exact {
        if exact_match(&expected, &actual) {
            println!("exact match");
            ExitCode::SUCCESS
        } else {
            println!(
                "images differ ({}x{} vs {}x{})",
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            ExitCode::FAILURE
        }
    } else {
        let ratio = score(&expected, &actual, cli.channels.into(), cli.diff.into());
        println!("similarity: {ratio:.6}");
        if ratio >= cli.threshold {
            ExitCode::SUCCESS
        } else {
            println!("below threshold {:.6}", cli.threshold);
            ExitCode::FAILURE
        }
    }
}

use anyhow::Result;
use clap::Parser;
use housing_eda::{AnalysisApp, ColumnSelection};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exploratory analysis of a tabular housing-price dataset
#[derive(Parser, Debug)]
#[command(name = "housing-eda", version, about)]
struct Cli {
    /// Path to the input CSV file (header row required)
    #[arg(default_value = "train.csv")]
    input: PathBuf,

    /// Categorical column used for grouping and the bar chart
    #[arg(long, default_value = "Neighborhood")]
    group_col: String,

    /// Second categorical column for the chi-square test
    #[arg(long, default_value = "HouseStyle")]
    style_col: String,

    /// Numeric column for the histogram and the t-test
    #[arg(long, default_value = "SalePrice")]
    value_col: String,

    /// Numeric column for the scatter plot's x axis
    #[arg(long, default_value = "GrLivArea")]
    area_col: String,

    /// Number of histogram bins
    #[arg(long, default_value_t = 30)]
    bins: usize,

    /// Directory the charts are written to
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,

    /// Log at info level
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("housing-eda v{}", env!("CARGO_PKG_VERSION"));

    let columns = ColumnSelection {
        group: cli.group_col,
        style: cli.style_col,
        value: cli.value_col,
        area: cli.area_col,
    };
    let mut app = AnalysisApp::from_csv(&cli.input, columns)?;
    app.run(&cli.out_dir, cli.bins)?;
    Ok(())
}

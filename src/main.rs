//! Sentiment Dashboard CLI
//!
//! Drives the sentiment analysis backend and renders live-analysis summaries.

use clap::{Parser, Subcommand};
use sentiment_dashboard::{
    analysis::{Aggregator, Summary},
    client::{ApiClient, DashboardApi},
    config::Config,
    export,
    session::LiveSession,
    testing::ResultGenerator,
    types::{AnalysisResult, ExplainMethod, ModelConfig, ModelType, Sentiment, TrainingRequest},
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "sentiboard")]
#[command(about = "Sentiment analysis experiment dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dashboard statistics
    Stats,
    /// Show latest evaluation metrics
    Metrics,
    /// Submit a training job
    Train {
        /// LSTM, BERT, SVM, RF or LR
        #[arg(short, long, default_value = "BERT")]
        model: ModelType,
        /// LIME or SHAP
        #[arg(short, long, default_value = "LIME")]
        explain: ExplainMethod,
        /// Train/test split ratio
        #[arg(short, long, default_value = "0.8")]
        split: f64,
        /// Dataset filenames (at least 3)
        #[arg(short, long = "dataset", required = true)]
        datasets: Vec<String>,
    },
    /// Run a live analysis and summarize it
    Analyze {
        /// Search keyword
        keyword: String,
        /// Number of posts to analyze
        #[arg(short = 'n', long, default_value = "100")]
        count: u32,
        #[arg(short, long, default_value = "BERT")]
        model: ModelType,
        #[arg(short, long, default_value = "LIME")]
        explain: ExplainMethod,
        /// Write results as CSV into the export directory
        #[arg(long = "export")]
        export_csv: bool,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize saved results offline
    Summarize {
        /// JSON file holding an array of analysis results
        #[arg(short, long, conflicts_with = "demo")]
        input: Option<PathBuf>,
        /// Use generated demo results instead of a file
        #[arg(long)]
        demo: Option<usize>,
        /// Subject used in generated demo posts
        #[arg(long, requires = "demo")]
        keyword: Option<String>,
        /// Write results as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset trained models and stored data
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    match cli.command {
        Commands::Stats => show_stats(config).await,
        Commands::Metrics => show_metrics(config).await,
        Commands::Train { model, explain, split, datasets } => {
            train(config, model, explain, split, datasets).await
        }
        Commands::Analyze { keyword, count, model, explain, export_csv, json } => {
            let model = ModelConfig { model_type: model, explain_method: explain };
            analyze(config, &keyword, count, model, export_csv, json).await
        }
        Commands::Summarize { input, demo, keyword, csv, json } => {
            summarize(config, input, demo, keyword, csv, json)
        }
        Commands::Reset => reset(config).await,
    }
}

async fn show_stats(config: Config) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.api)?;
    let stats = api.dashboard_stats().await?;

    println!("\n📊 Dashboard\n");
    println!("Backend:       {}", stats.system_status.backend);
    println!("Last trained:  {}", stats.system_status.last_trained);
    println!("Datasets used: {}", stats.system_status.datasets_used);

    if stats.is_empty() {
        println!("\nNo models trained yet.");
        return Ok(());
    }

    if let Some(best) = &stats.best_model {
        println!(
            "\nBest model: {} ({}) | F1 {:.2} | Accuracy {:.1}%",
            best.name,
            best.explainability,
            best.f1,
            best.accuracy * 100.0
        );
    }

    if !stats.performance_data.is_empty() {
        println!("\n{:<10} {:>6}", "Model", "F1");
        println!("{}", "-".repeat(17));
        for entry in &stats.performance_data {
            println!("{:<10} {:>6.2}", entry.name, entry.f1);
        }
    }

    if !stats.comparison_data.is_empty() {
        println!("\n{:<12} {:>8} {:>8}", "Metric", "Trained", "Live");
        for entry in &stats.comparison_data {
            println!("{:<12} {:>8.2} {:>8.2}", entry.name, entry.trained, entry.live);
        }
    }

    for dataset in &stats.datasets {
        println!("Dataset: {} ({} rows)", dataset.name, dataset.size);
    }

    Ok(())
}

async fn show_metrics(config: Config) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.api)?;
    match api.metrics().await? {
        Some(metrics) => {
            println!("\n📈 Evaluation Metrics\n");
            println!("Accuracy:  {:.1}%", metrics.accuracy * 100.0);
            println!("Precision: {:.1}%", metrics.precision * 100.0);
            println!("Recall:    {:.1}%", metrics.recall * 100.0);
            println!("F1 score:  {:.1}%", metrics.f1_score * 100.0);
            if !metrics.confusion_matrix.is_empty() {
                println!("\nConfusion matrix (rows: actual Neg/Neu/Pos):");
                for row in &metrics.confusion_matrix {
                    let cells: Vec<String> = row.iter().map(|c| format!("{:>6}", c)).collect();
                    println!("  {}", cells.join(""));
                }
            }
        }
        None => println!("No metrics yet. Train a model first."),
    }
    Ok(())
}

async fn train(
    config: Config,
    model: ModelType,
    explain: ExplainMethod,
    split: f64,
    datasets: Vec<String>,
) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.api)?;
    let request = TrainingRequest {
        model_type: model,
        explainability_method: explain,
        split_ratio: split,
        dataset_filenames: datasets,
    };

    let response = api.train(&request).await?;
    println!("{}", response.message);
    if let Some(task_id) = &response.task_id {
        println!("Task: {}", task_id);
    }
    if let Some(metrics) = &response.metrics {
        println!(
            "Accuracy {:.1}% | Precision {:.1}% | Recall {:.1}% | F1 {:.1}%",
            metrics.accuracy * 100.0,
            metrics.precision * 100.0,
            metrics.recall * 100.0,
            metrics.f1_score * 100.0
        );
    }
    Ok(())
}

async fn analyze(
    config: Config,
    keyword: &str,
    count: u32,
    model: ModelConfig,
    export_csv: bool,
    json: bool,
) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.api)?;
    let mut session = LiveSession::new(Aggregator::new(config.analysis.clone()), model);

    let summary = session.run(&api, keyword, count).await?;
    render(&summary, Some(model), json)?;
    if !json {
        print_posts(session.results());
    }

    if export_csv {
        let path = export::export_to_dir(session.results(), config.export.directory_path())?;
        println!("\nCSV written to {}", path.display());
    }
    Ok(())
}

fn summarize(
    config: Config,
    input: Option<PathBuf>,
    demo: Option<usize>,
    keyword: Option<String>,
    csv: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let results: Vec<AnalysisResult> = match (input, demo) {
        (Some(path), _) => {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        }
        (None, Some(count)) => {
            let mut generator = match keyword {
                Some(keyword) => ResultGenerator::new().with_keyword(keyword),
                None => ResultGenerator::new(),
            };
            generator.results(count)
        }
        (None, None) => anyhow::bail!("either --input or --demo is required"),
    };

    let aggregator = Aggregator::new(config.analysis.clone());
    match aggregator.summarize(&results) {
        Some(summary) => {
            render(&summary, None, json)?;
            if !json {
                print_posts(&results);
            }
        }
        None => println!("No analysis data available."),
    }

    if let Some(path) = csv {
        export::export_to_file(&results, &path)?;
        println!("\nCSV written to {}", path.display());
    }
    Ok(())
}

async fn reset(config: Config) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.api)?;
    let response = api.reset().await?;
    println!("{}", response.status);
    Ok(())
}

fn render(summary: &Summary, model: Option<ModelConfig>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    let split = summary.sentiment_split;
    println!("\n📊 Live Data Summary\n");
    if let Some(model) = model {
        println!("Model:        {}", model);
    }
    println!("Total posts:  {}", summary.total);
    println!(
        "Split:        {}% Pos | {}% Neg | {}% Neu",
        split.positive, split.negative, split.neutral
    );

    println!("\nSentiment");
    for sentiment in Sentiment::ALL {
        println!("  {:<10} {:>6}", sentiment, summary.sentiment_counts.get(sentiment));
    }

    println!("\nTop countries");
    for country in &summary.countries {
        println!("  {:<12} {:>6}", country.name, country.count);
    }

    println!("\nSentiment by country");
    println!("  {:<12} {:>5} {:>5} {:>5}", "", "Pos", "Neg", "Neu");
    for country in &summary.country_sentiment {
        println!(
            "  {:<12} {:>5} {:>5} {:>5}",
            country.name, country.counts.positive, country.counts.negative, country.counts.neutral
        );
    }

    println!("\nTop keywords");
    for keyword in &summary.top_keywords {
        println!("  {:<16} {:>5}", keyword.name, keyword.count);
    }

    if !summary.keyword_sentiment.is_empty() {
        println!("\nKeyword sentiment");
        for keyword in &summary.keyword_sentiment {
            println!("  {:<16} {:>+6.2}", keyword.name, keyword.display_score());
        }
    }

    println!("\nTimeline");
    for bucket in &summary.timeline {
        println!(
            "  {}  +{:<3} -{:<3} ={:<3}",
            bucket.time, bucket.counts.positive, bucket.counts.negative, bucket.counts.neutral
        );
    }

    println!("\nConfidence");
    for bucket in &summary.confidence_histogram.buckets {
        println!("  {:<8} {:>5}", bucket.name, bucket.count);
    }

    println!("\nSource (simulated)");
    for source in &summary.sources.sources {
        println!("  {:<14} {:>5}", source.name, source.value);
    }

    Ok(())
}

const RECENT_POSTS: usize = 5;

fn print_posts(results: &[AnalysisResult]) {
    println!("\nRecent posts");
    for result in results.iter().rev().take(RECENT_POSTS) {
        let text: String = result.text.chars().take(60).collect();
        println!(
            "  {:<10} {:<16} {:<9} {:>5.0}%  {}",
            result.display_user_id(),
            result.display_username(),
            result.sentiment,
            result.confidence.value() * 100.0,
            text
        );
    }
}

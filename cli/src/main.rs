use clap::{Parser, Subcommand};
use serde_json::json;

use nurovia_core::assistant::ChatRequest;
use nurovia_core::screening::ObservationSet;

#[derive(Parser)]
#[command(
    name = "nurovia",
    version,
    about = "Nurovia CLI — stroke risk screening and assistant from the terminal"
)]
struct Cli {
    /// API base URL
    #[arg(long, env = "NUROVIA_API_URL", default_value = "http://localhost:7860")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// Score a set of patient observations
    Assess {
        /// Facial droop observed ("yes" to count)
        #[arg(long)]
        facial_droop: Option<String>,
        /// Arm weakness observed ("yes" to count)
        #[arg(long)]
        arm_weakness: Option<String>,
        /// Speech difficulty observed ("yes" to count)
        #[arg(long)]
        speech_difficulty: Option<String>,
        /// Hours since symptom onset
        #[arg(long)]
        onset_time: Option<String>,
        /// Patient age in years
        #[arg(long)]
        age: Option<String>,
        /// Prior stroke or TIA ("yes" to count)
        #[arg(long)]
        history: Option<String>,
    },
    /// Ask the assistant a question
    Chat {
        /// The question to ask
        message: String,
    },
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn exit_error(message: &str, docs_hint: Option<&str>) -> ! {
    let mut err = json!({
        "error": "cli_error",
        "message": message
    });
    if let Some(hint) = docs_hint {
        err["docs_hint"] = json!(hint);
    }
    eprintln!("{}", serde_json::to_string_pretty(&err).unwrap());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Health => health(&cli.api_url).await,
        Commands::Assess {
            facial_droop,
            arm_weakness,
            speech_difficulty,
            onset_time,
            age,
            history,
        } => {
            let observations = ObservationSet {
                facial_droop,
                arm_weakness,
                speech_difficulty,
                onset_time,
                age,
                history,
            };
            assess(&cli.api_url, &observations).await
        }
        Commands::Chat { message } => chat(&cli.api_url, &message).await,
    };

    if let Err(e) = result {
        exit_error(&e.to_string(), None);
    }
}

async fn health(api_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let resp = client().get(format!("{api_url}/health")).send().await?;
    let body: serde_json::Value = resp.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn assess(
    api_url: &str,
    observations: &ObservationSet,
) -> Result<(), Box<dyn std::error::Error>> {
    let resp = client()
        .post(format!("{api_url}/assess"))
        .json(observations)
        .send()
        .await?;

    print_response(resp).await
}

async fn chat(api_url: &str, message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let body = ChatRequest {
        message: Some(message.to_string()),
    };

    let resp = client()
        .post(format!("{api_url}/chat"))
        .json(&body)
        .send()
        .await?;

    print_response(resp).await
}

async fn print_response(resp: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = resp.status();
    let body: serde_json::Value = resp.json().await?;

    if !status.is_success() {
        eprintln!("{}", serde_json::to_string_pretty(&body)?);
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

//! Runs the cart/stock tool against fixed scenarios and prints what the agent would receive.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use larder::prelude::*;
use larder::{CART_ARGUMENT, STOCK_ARGUMENT, parse_host_kind};

#[derive(Parser, Debug)]
#[command(name = "larder-demo", version, about)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Override LARDER_HOST (runtime or stub)
    #[arg(long)]
    host: Option<String>,

    /// Override LARDER_MODEL
    #[arg(long)]
    model: Option<String>,
}

struct Scenario {
    title: &'static str,
    cart_json: String,
    stock_json: String,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "Rich Stock & Some Cart Items",
            cart_json: json!(["pasta", "onion", "eggs"]).to_string(),
            stock_json: json!([
                "canned tomatoes", "garlic", "olive oil", "basil", "chicken breast",
                "broccoli", "carrots", "soy sauce", "ginger", "rice", "flour",
                "milk", "sugar", "baking powder", "strawberries", "blueberries",
                "maple syrup", "lentils", "celery", "vegetable broth", "cumin",
                "coriander", "cheese", "butter", "salt", "pepper"
            ])
            .to_string(),
        },
        Scenario {
            title: "Limited Stock & Few Cart Items",
            cart_json: json!(["chicken breast"]).to_string(),
            stock_json: json!(["broccoli", "soy sauce", "rice", "flour", "eggs", "cheese"])
                .to_string(),
        },
        Scenario {
            title: "Invalid JSON Input",
            cart_json: "not a valid json list".to_string(),
            stock_json: json!(["milk", "eggs"]).to_string(),
        },
    ]
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<AgentConfig> {
    let mut config = AgentConfig::from_env().context("failed to load agent configuration")?;

    if let Some(host) = cli.host.as_deref() {
        let kind = parse_host_kind(host).ok_or_else(|| anyhow!("unknown host '{host}'"))?;
        config = config.with_host(kind);
    }
    if let Some(model) = cli.model.as_deref() {
        config = config.with_model(model);
    }

    Ok(config)
}

/// Four-space indentation, the layout the tool outputs were first shown in.
fn to_display_json<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load_config(&cli)?;
    let bundle = bootstrap(&config).context("failed to install the recipe agent")?;
    println!("{}", bundle.declaration);
    println!(
        "{}",
        serde_json::to_string_pretty(&bundle.host.describe())
            .context("failed to render host description")?
    );

    let scenarios = scenarios();
    println!("--- Simulating direct tool calls (as if triggered by the LLM) ---");
    for (index, scenario) in scenarios.iter().enumerate() {
        let outcome = get_cart_and_stock_info(&scenario.cart_json, &scenario.stock_json);
        println!("\n--- Scenario {}: {} (Tool Output) ---", index + 1, scenario.title);
        println!(
            "{}",
            to_display_json(&outcome).context("failed to render tool outcome")?
        );
    }

    if let (Some(runtime), Some(first)) = (bundle.tool_runtime(), scenarios.first()) {
        let arguments = json!({ CART_ARGUMENT: first.cart_json, STOCK_ARGUMENT: first.stock_json });
        let result = runtime
            .execute(
                ToolCall::new("demo-call-1", larder::CART_STOCK_TOOL_NAME, arguments.to_string()),
                ToolExecutionContext::new("demo-session"),
            )
            .await
            .context("runtime tool call failed")?;
        let output: Value =
            serde_json::from_str(&result.output).context("tool output was not JSON")?;
        println!("\n--- Scenario 1 through the {} host ---", config.host);
        println!("{}", to_display_json(&output)?);
    }

    println!("\nRecipe suggestions themselves are produced by the model behind the agent host,");
    println!("using these tool outputs and the agent instruction.");
    Ok(())
}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, error};

use recipe_assistant::{
    AppConfig, AssistantError, ProviderKind, RecipeAssistant, RecipeOutcome, Screening,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderArg {
    Ollama,
    Openai,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Ollama => ProviderKind::Ollama,
            ProviderArg::Openai => ProviderKind::OpenAI,
        }
    }
}

/// Ask a local LLM for recipes
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dish to get a recipe for; omit to be prompted until you type 'quit'
    dish: Vec<String>,
    /// Suggest 3-5 recipes from ingredients and dietary restrictions instead
    #[arg(long, conflicts_with = "dish")]
    recommend: bool,
    /// Ingredients at hand (comma-separated)
    #[arg(long, value_delimiter = ',', requires = "recommend")]
    ingredients: Vec<String>,
    /// Dietary restrictions (comma-separated)
    #[arg(long, value_delimiter = ',', requires = "recommend")]
    diet: Vec<String>,
    #[arg(long, value_enum)]
    provider: Option<ProviderArg>,
    #[arg(short, long)]
    model: Option<String>,
    /// Server address, e.g. http://localhost:11434
    #[arg(long)]
    base_url: Option<String>,
    /// Forward names like "car" to the model instead of rejecting them
    #[arg(long)]
    allow_non_edible: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AssistantError> {
    let config = AppConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let mut builder = RecipeAssistant::builder().from_config(config);
    if let Some(provider) = cli.provider {
        builder = builder.provider(provider.into());
    }
    if let Some(model) = cli.model {
        builder = builder.model(model);
    }
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    if cli.allow_non_edible {
        builder = builder.reject_non_edible(false);
    }
    let assistant = builder.build()?;

    if cli.recommend {
        let (ingredients, diet) = if cli.ingredients.is_empty() && cli.diet.is_empty() {
            ask_recommendation_lists(&mut io::stdin().lock(), &mut io::stdout())?
        } else {
            (cli.ingredients, cli.diet)
        };

        println!("\nGenerating recipe recommendations...");
        println!("{}", "-".repeat(40));
        let text = assistant.recommend(&ingredients, &diet).await?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.dish.is_empty() {
        let candidate = cli.dish.join(" ");
        let outcome = assistant.recipe_for(&candidate).await?;
        let accepted = matches!(outcome, RecipeOutcome::Recipe { .. });
        print_outcome(&mut io::stdout(), &candidate, &outcome)?;
        return Ok(if accepted {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    interactive(&assistant, &mut io::stdin().lock(), &mut io::stdout()).await?;
    Ok(ExitCode::SUCCESS)
}

/// Read one line, replacing invalid UTF-8. `None` at end of input.
fn read_line_lossy<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string()))
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;
    read_line_lossy(input)
}

fn split_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn ask_recommendation_lists<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<(Vec<String>, Vec<String>)> {
    writeln!(output, "Welcome to Recipe Assistant!")?;
    writeln!(output, "{}", "-".repeat(40))?;
    let ingredients = ask(input, output, "Enter ingredients you have (comma-separated): ")?
        .map(|line| split_list(&line))
        .unwrap_or_default();
    let diet = ask(input, output, "Enter dietary restrictions (comma-separated): ")?
        .map(|line| split_list(&line))
        .unwrap_or_default();
    Ok((ingredients, diet))
}

/// Prompt for dish names until 'quit', 'exit' or end of input.
async fn interactive<R: BufRead, W: Write>(
    assistant: &RecipeAssistant,
    input: &mut R,
    output: &mut W,
) -> Result<(), AssistantError> {
    writeln!(output, "Welcome to Recipe Assistant!")?;
    writeln!(output, "{}", "-".repeat(40))?;

    loop {
        let Some(line) = ask(input, output, "Enter a dish name (or 'quit'): ")? else {
            writeln!(output)?;
            break;
        };
        if matches!(line.trim().to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        match assistant.recipe_for(&line).await {
            Ok(outcome) => print_outcome(output, &line, &outcome)?,
            // Transport failures are reported and the user may try again
            Err(e) => eprintln!("Could not reach the recipe service: {}", e),
        }
    }

    writeln!(output, "Goodbye!")?;
    Ok(())
}

fn print_outcome<W: Write>(
    output: &mut W,
    candidate: &str,
    outcome: &RecipeOutcome,
) -> io::Result<()> {
    match outcome {
        RecipeOutcome::Rejected(reason) => {
            writeln!(output, "Cannot look up {:?}: {}", candidate.trim(), reason)?;
            if let Some(diagnostic) = reason.diagnostic() {
                writeln!(output, "{}", diagnostic)?;
            }
        }
        RecipeOutcome::Recipe {
            dish,
            text,
            screening,
        } => {
            writeln!(output, "\nRecipe for {}:", dish)?;
            writeln!(output, "{}", "-".repeat(40))?;
            writeln!(output, "{}", text.trim())?;
            if *screening == Screening::Declined {
                writeln!(
                    output,
                    "\n(The assistant did not produce a recipe for this request.)"
                )?;
            }
        }
    }
    Ok(())
}

//! Command-line front end for agent-links.
//!
//! # Usage
//!
//! ```bash
//! # Resolve any supported link to its marketplace listing
//! agent-links raw "https://www.hipobuy.com/shopdetail?ra=1&t=wd&id=1625671124"
//!
//! # Convert a link to another agent, with a referral code
//! agent-links convert "https://weidian.com/item.html?itemID=1625671124" --to cnfans --referral 42
//!
//! # Build an agent link from a known listing, printing JSON
//! agent-links build weidian 1625671124 --to hipobuy --json
//!
//! # List supported agents
//! agent-links agents
//! ```
//!
//! # Environment Variables
//!
//! See [`agent_links::config`]. A `.env` file in the working directory is
//! loaded first.

use agent_links::config::{self, Config};
use agent_links::detector::{LinkKind, detect};
use agent_links::domain::{Agent, ItemRef, Marketplace};
use agent_links::outcome::Outcome;
use agent_links::registry::AGENTS;
use agent_links::transcoder::{LinkSource, Transcoder};
use agent_links::utils::url_normalizer::parse_link;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert links between marketplaces and shopping agents.
#[derive(Parser)]
#[command(name = "agent-links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the raw marketplace link behind any supported link
    Raw { link: String },

    /// Print the marketplace and item id behind any supported link
    Item { link: String },

    /// Convert any supported link to an agent link
    Convert {
        link: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Build an agent link from a marketplace and item id
    Build {
        /// Marketplace tag: taobao, tmall, weidian or 1688
        marketplace: Marketplace,

        id: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Tell whether a link belongs to a marketplace or an agent
    Detect { link: String },

    /// List supported agents
    Agents,
}

#[derive(Args)]
struct TargetArgs {
    /// Target agent tag (e.g. "pandabuy")
    #[arg(short, long = "to")]
    to: Agent,

    /// Referral code, overriding the configured one
    #[arg(short, long)]
    referral: Option<String>,

    /// Tracking tag, overriding the configured one
    #[arg(short = 'g', long)]
    tracking: Option<String>,
}

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    // Reports ignored referral variables, so it runs after tracing is up.
    config.print_summary();

    let transcoder = config.transcoder();

    match cli.command {
        Commands::Raw { link } => report(transcoder.try_to_raw(&link), cli.json),
        Commands::Item { link } => handle_item(&transcoder, &link, cli.json),
        Commands::Convert { link, target } => {
            handle_encode(&transcoder, LinkSource::Link(&link), &target, cli.json)
        }
        Commands::Build {
            marketplace,
            id,
            target,
        } => {
            let item = ItemRef::new(marketplace, id);
            handle_encode(&transcoder, LinkSource::Item(&item), &target, cli.json)
        }
        Commands::Detect { link } => handle_detect(&link, cli.json),
        Commands::Agents => handle_agents(cli.json),
    }
}

/// Installs the tracing subscriber. Logs go to stderr so stdout stays
/// parseable.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn handle_item(transcoder: &Transcoder, link: &str, json: bool) -> Result<ExitCode> {
    let outcome = transcoder.try_to_item(link);
    if json {
        return print_outcome(&outcome);
    }

    match outcome {
        Outcome::Success { value } => {
            println!("  Marketplace: {}", value.marketplace.as_str().cyan());
            println!("  Id:          {}", value.id.bright_yellow());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Failure { message } => fail(&message),
    }
}

fn handle_encode(
    transcoder: &Transcoder,
    source: LinkSource<'_>,
    target: &TargetArgs,
    json: bool,
) -> Result<ExitCode> {
    let outcome = transcoder.try_to_agent(
        source,
        target.to,
        target.referral.as_deref(),
        target.tracking.as_deref(),
    );
    report(outcome, json)
}

fn handle_detect(link: &str, json: bool) -> Result<ExitCode> {
    #[derive(Serialize)]
    #[serde(tag = "kind", content = "tag", rename_all = "lowercase")]
    enum Detected {
        Marketplace(Marketplace),
        Agent(Agent),
        Unknown,
    }

    let url = match parse_link(link) {
        Ok(url) => url,
        Err(e) if json => return print_outcome(&Outcome::<Detected>::from(Err(e))),
        Err(e) => return fail(&e.to_string()),
    };

    let detected = match detect(&url) {
        Some(LinkKind::Marketplace(marketplace)) => Detected::Marketplace(marketplace),
        Some(LinkKind::Agent(agent)) => Detected::Agent(agent),
        None => Detected::Unknown,
    };

    if json {
        return print_json(&Outcome::Success { value: detected });
    }

    match detected {
        Detected::Marketplace(m) => println!("  {} {}", "marketplace".green(), m.as_str().cyan()),
        Detected::Agent(a) => println!("  {} {}", "agent".green(), a.as_str().cyan()),
        Detected::Unknown => println!("  {}", "unknown".yellow()),
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the agent table.
///
/// # Output Format
///
/// ```text
///   Agent        Marketplaces               Referral     Decoder
///   ──────────────────────────────────────────────────────────────
///   acbuy        taobao,weidian,1688        u            bespoke
///   itaobuy      taobao,tmall,weidian,1688  inviteCode   fallback
/// ```
fn handle_agents(json: bool) -> Result<ExitCode> {
    #[derive(Serialize)]
    struct AgentRow {
        agent: Agent,
        base: &'static str,
        marketplaces: Vec<Marketplace>,
        referral_param: Option<&'static str>,
        bespoke_decoder: bool,
    }

    let rows: Vec<AgentRow> = AGENTS
        .iter()
        .map(|spec| AgentRow {
            agent: spec.agent,
            base: spec.base,
            marketplaces: spec.marketplaces.to_vec(),
            referral_param: spec.referral_param,
            bespoke_decoder: spec.decode.is_some(),
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    println!(
        "  {:<12} {:<26} {:<12} {:<8}",
        "Agent".bright_white().bold(),
        "Marketplaces".bright_white().bold(),
        "Referral".bright_white().bold(),
        "Decoder".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for row in &rows {
        let marketplaces = row
            .marketplaces
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let decoder = if row.bespoke_decoder {
            "bespoke".green()
        } else {
            "fallback".yellow()
        };

        println!(
            "  {:<12} {:<26} {:<12} {}",
            row.agent.as_str().cyan(),
            marketplaces,
            row.referral_param.unwrap_or("-").bright_black(),
            decoder
        );
    }

    println!();
    println!("  Total: {}", rows.len().to_string().bright_white().bold());

    Ok(ExitCode::SUCCESS)
}

/// Prints a single-value outcome, plain or as JSON.
fn report(outcome: Outcome<String>, json: bool) -> Result<ExitCode> {
    if json {
        return print_outcome(&outcome);
    }

    match outcome {
        Outcome::Success { value } => {
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Failure { message } => fail(&message),
    }
}

/// Prints an outcome as JSON; the exit code still reflects failure.
fn print_outcome<T: Serialize>(outcome: &Outcome<T>) -> Result<ExitCode> {
    print_json(outcome)?;
    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<ExitCode> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(ExitCode::SUCCESS)
}

fn fail(message: &str) -> Result<ExitCode> {
    eprintln!("{} {}", "error:".red().bold(), message);
    Ok(ExitCode::FAILURE)
}

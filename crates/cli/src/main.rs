use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use ticketbooth_cli::CliArgs;

fn read_document(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read purchase document {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read purchase document from stdin")?;
            Ok(raw)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    ticketbooth_observability::init();

    let rules = args.rules().context("invalid purchase rules configuration")?;
    tracing::info!(
        adult_price = rules.adult_price(),
        child_price = rules.child_price(),
        max_tickets = rules.max_tickets(),
        "purchase rules loaded"
    );

    let processor = ticketbooth_cli::logging_processor(rules);
    let document = read_document(args.path.as_deref())?;
    let summary = ticketbooth_cli::run(&processor, &document)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

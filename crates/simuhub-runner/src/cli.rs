//! SimuHub command line interface
//!
//! Browses the catalog and runs simulations through a [`SimulationRunner`].

use crate::config::SimuHubConfig;
use crate::error::RunnerError;
use crate::runner::SimulationRunner;
use crate::session::SimulationSession;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use simuhub_calculator::{Catalog, SimulationDefinition, SimulationOutput, catalog};
use simuhub_types::FieldValue;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "simuhub")]
#[command(about = "Formula-backed simulations for science, finance, business and trees")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to $SIMUHUB_CONFIG_PATH or ./simuhub.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the categories
    Categories,

    /// List the simulations of a category
    List { category: String },

    /// Describe a simulation and its inputs
    Show { category: String, id: String },

    /// Run a simulation once
    Run {
        category: String,
        id: String,

        /// Field edits applied in order, e.g. `--set resistance=0`
        #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Search simulations by id, label or description
    Search { query: String },

    /// Edit a simulation line by line from stdin
    Interactive { category: String, id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Splits `field=value`. The value may be empty or contain further `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((field.to_string(), value.to_string()))
}

impl Cli {
    /// Executes the command against the built-in catalog.
    pub async fn execute<R: BufRead, W: Write>(
        &self,
        config: &SimuHubConfig,
        input: R,
        out: &mut W,
    ) -> Result<()> {
        let catalog = catalog();
        match &self.command {
            Command::Categories => self.categories(catalog, out),
            Command::List { category } => self.list(catalog, category, out),
            Command::Show { category, id } => self.show(catalog, category, id, out),
            Command::Run { category, id, set } => {
                self.run(catalog, config, category, id, set, out).await
            }
            Command::Search { query } => self.search(catalog, query, out),
            Command::Interactive { category, id } => {
                self.interactive(catalog, config, category, id, input, out).await
            }
        }
    }

    fn categories<W: Write>(&self, catalog: &Catalog, out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<_> = catalog
                    .entries()
                    .iter()
                    .map(|entry| {
                        json!({
                            "key": entry.category.key(),
                            "label": entry.category.label(),
                            "description": entry.category.description(),
                            "simulations": entry.simulations.len(),
                        })
                    })
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            }
            OutputFormat::Text => {
                for category in catalog.categories() {
                    writeln!(
                        out,
                        "{:<22}{:<22}{}",
                        category.key(),
                        category.label(),
                        category.description()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn list<W: Write>(&self, catalog: &Catalog, category: &str, out: &mut W) -> Result<()> {
        let simulations = catalog.simulations(category)?;
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(simulations)?)?;
            }
            OutputFormat::Text => {
                for def in simulations {
                    writeln!(out, "{:<28}{:<32}{}", def.id, def.label, def.description)?;
                }
            }
        }
        Ok(())
    }

    fn show<W: Write>(
        &self,
        catalog: &Catalog,
        category: &str,
        id: &str,
        out: &mut W,
    ) -> Result<()> {
        let def = catalog.find(category, id)?;
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(def)?)?,
            OutputFormat::Text => {
                writeln!(out, "{}", def.label)?;
                writeln!(out, "{}", def.description)?;
                writeln!(out)?;
                for field in &def.inputs {
                    writeln!(
                        out,
                        "  {:<24}{:<8}{} [default: {}]",
                        field.id, field.field_type, field.label, field.default_value
                    )?;
                }
            }
        }
        Ok(())
    }

    async fn run<W: Write>(
        &self,
        catalog: &Catalog,
        config: &SimuHubConfig,
        category: &str,
        id: &str,
        assignments: &[(String, String)],
        out: &mut W,
    ) -> Result<()> {
        let mut runner = SimulationRunner::new(catalog, &config.runner);
        runner.open(category, id)?;
        for (field, value) in assignments {
            runner
                .edit(field, value)
                .with_context(|| format!("cannot set {field}={value}"))?;
        }
        let session = runner.active().context("simulation closed unexpectedly")?;
        wait_for_result(session).await;
        writeln!(out, "{}", self.render(session))?;
        runner.close();
        Ok(())
    }

    fn search<W: Write>(&self, catalog: &Catalog, query: &str, out: &mut W) -> Result<()> {
        let hits = catalog.search(query);
        debug!(query, hits = hits.len(), "catalog search");
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<_> = hits
                    .iter()
                    .map(|(category, def)| {
                        json!({ "category": category.key(), "id": def.id, "label": def.label })
                    })
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            }
            OutputFormat::Text => {
                for (category, def) in hits {
                    let path = format!("{}/{}", category.key(), def.id);
                    writeln!(out, "{path:<48}{}", def.label)?;
                }
            }
        }
        Ok(())
    }

    async fn interactive<R: BufRead, W: Write>(
        &self,
        catalog: &Catalog,
        config: &SimuHubConfig,
        category: &str,
        id: &str,
        input: R,
        out: &mut W,
    ) -> Result<()> {
        let mut runner = SimulationRunner::new(catalog, &config.runner);
        let session = runner.open(category, id)?;
        writeln!(
            out,
            "{}: enter FIELD=VALUE or a JSON object, 'defaults' to reset, 'quit' to close",
            session.definition().label
        )?;
        wait_for_result(session).await;
        writeln!(out, "{}", self.render(session))?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            if matches!(command, "quit" | "exit" | "close") {
                break;
            }
            let Some(session) = runner.active_mut() else {
                break;
            };
            if matches!(command, "defaults" | "reset") {
                session.reset();
                writeln!(out, "{}", self.render(session))?;
                continue;
            }
            let edited = if command.starts_with('{') {
                apply_json_edit(session, command)
            } else {
                apply_assignment(session, command)
            };
            match edited {
                Ok(()) => writeln!(out, "{}", self.render(session))?,
                Err(err) => {
                    let error_category = err
                        .downcast_ref::<RunnerError>()
                        .map_or("input", RunnerError::category);
                    warn!(input = command, error = %err, error_category, "rejected edit");
                    writeln!(out, "error: {err}")?;
                }
            }
        }

        if runner.close() {
            info!("interactive session closed");
        }
        Ok(())
    }

    fn render(&self, session: &SimulationSession<'_>) -> String {
        match self.format {
            OutputFormat::Text => session.result().to_string(),
            OutputFormat::Json => render_json(session.definition(), session, session.result()),
        }
    }
}

async fn wait_for_result(session: &SimulationSession<'_>) {
    let remaining = session.remaining_delay(Instant::now());
    if !remaining.is_zero() {
        debug!(delay = ?remaining, "loading");
        tokio::time::sleep(remaining).await;
    }
}

fn apply_assignment(session: &mut SimulationSession<'_>, line: &str) -> Result<()> {
    let (field, value) = parse_assignment(line).map_err(anyhow::Error::msg)?;
    session.set_field(&field, &value)?;
    Ok(())
}

/// Applies a JSON object of field values, e.g. `{"voltage": 1, "resistance": 8}`.
///
/// Every entry is checked before any value is stored, so a rejected line
/// leaves the session untouched.
fn apply_json_edit(session: &mut SimulationSession<'_>, line: &str) -> Result<()> {
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(line).context("expected a JSON object of field values")?;
    let definition = session.definition();
    let mut edits = Vec::with_capacity(object.len());
    for (id, raw) in &object {
        if definition.input(id).is_none() {
            return Err(RunnerError::UnknownField {
                simulation: definition.id.to_string(),
                field: id.clone(),
            }
            .into());
        }
        let value =
            FieldValue::try_from(raw).with_context(|| format!("invalid value for '{id}'"))?;
        edits.push((id, value));
    }
    for (id, value) in edits {
        session.set_value(id, value)?;
    }
    Ok(())
}

fn render_json(
    definition: &SimulationDefinition,
    session: &SimulationSession<'_>,
    output: &SimulationOutput,
) -> String {
    let inputs: serde_json::Map<String, serde_json::Value> = definition
        .inputs
        .iter()
        .filter_map(|field| {
            let value = session.value(field.id)?;
            Some((field.id.to_string(), serde_json::Value::from(value)))
        })
        .collect();
    let lines: Vec<_> = output
        .lines()
        .iter()
        .map(|line| {
            json!({
                "caption": line.caption,
                "display": line.to_string(),
                "value": line.value,
            })
        })
        .collect();
    json!({
        "category": session.category().key(),
        "simulation": definition.id,
        "inputs": inputs,
        "result": lines,
    })
    .to_string()
}

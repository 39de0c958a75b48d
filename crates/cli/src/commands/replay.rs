// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `comms replay <scenario>` - Mount listeners, run dispatches, print the log

use crate::output::{print_logs, OutputFormat};
use crate::scenario::{ListenerDef, Scenario};
use anyhow::{Context, Result};
use clap::Args;
use comms_core::{normalise_listener_id, Communicator, ListenerError, LogQuery};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Args)]
pub struct ReplayArgs {
    /// Scenario file (TOML)
    pub scenario: PathBuf,

    /// Force logging mode on, whatever the scenario says
    #[arg(long)]
    pub log: bool,

    /// Only show log entries for this (canonical) event name
    #[arg(long, default_value = "")]
    pub event: String,

    /// Maximum entries to show; 0 shows all [default: from scenario]
    #[arg(long)]
    pub limit: Option<usize>,

    /// Show oldest entries first
    #[arg(long)]
    pub oldest_first: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn handle(args: ReplayArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    tracing::debug!(
        path = %args.scenario.display(),
        listeners = scenario.listeners.len(),
        dispatches = scenario.dispatch.len(),
        "scenario loaded"
    );

    let mut config = scenario.comms.clone();
    config.logging |= args.log;
    let comms: Communicator<Value> = Communicator::from_config(&config);

    for def in &scenario.listeners {
        mount(&comms, def).with_context(|| format!("could not mount listener \"{}\"", def.id))?;
    }

    for (n, dispatch) in scenario.dispatch.iter().enumerate() {
        comms
            .dispatch(&dispatch.event, dispatch.data.clone(), &dispatch.source)
            .with_context(|| format!("dispatch #{} ({}) failed", n + 1, dispatch.event))?;
    }

    print_logs(&comms.get_logs(&query(&comms, &args)), args.format);
    Ok(())
}

/// Register an echo listener (or a failing one) for `def`
fn mount(comms: &Communicator<Value>, def: &ListenerDef) -> Result<()> {
    let id = normalise_listener_id(&def.id);
    let fail = def.fail;

    comms.add_listener(
        def.events.clone(),
        &def.id,
        move |data: &Value| -> Result<(), ListenerError> {
            if fail {
                return Err(format!("listener {} is configured to fail", id).into());
            }
            println!("{} <- {}", id, data);
            Ok(())
        },
        def.replace,
    )?;
    Ok(())
}

fn query(comms: &Communicator<Value>, args: &ReplayArgs) -> LogQuery {
    let mut query = comms.default_query().event(args.event.clone());
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }
    if args.oldest_first {
        query = query.oldest_first();
    }
    query
}

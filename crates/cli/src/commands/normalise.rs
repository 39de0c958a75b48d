// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `comms normalise <kind> <input>` - Show registry keys

use anyhow::Result;
use clap::{Args, ValueEnum};
use comms_core::{normalise_event, normalise_listener_id};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KeyKind {
    /// Event name (lower-cased, `[a-z0-9]` only)
    Event,
    /// Listener ID (case kept, `[A-Za-z0-9_-]` only)
    Id,
}

#[derive(Args)]
pub struct NormaliseArgs {
    /// Which rule to apply
    #[arg(value_enum)]
    pub kind: KeyKind,

    /// Raw event name or listener ID
    pub input: String,
}

pub fn handle(args: NormaliseArgs) -> Result<()> {
    println!("{}", canonical(args.kind, &args.input));
    Ok(())
}

fn canonical(kind: KeyKind, input: &str) -> String {
    match kind {
        KeyKind::Event => normalise_event(input),
        KeyKind::Id => normalise_listener_id(input),
    }
}

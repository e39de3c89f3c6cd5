//! Command line interface.
//!
//! Each subcommand runs one calculation in a fresh [`Session`] and renders
//! one view of it. Rendering returns the text so it can be tested; the
//! binary only prints it.

use crate::config::{Limits, DEFAULT_PREFIX};
use crate::output::{self, ConsoleTarget};
use crate::session::Session;
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cidr-calculator")]
#[command(about = "IPv4 CIDR and subnet calculator")]
#[command(long_about = "\
IPv4 CIDR and subnet calculator

Give an address and a prefix length, either as separate arguments or in
CIDR form:

  cidr-calculator info 192.168.1.10 --prefix 24
  cidr-calculator subnets 192.168.0.0/22 --target 24
  cidr-calculator csv 10.0.0.0/16 --out-dir /tmp

Output caps can be changed with CIDR_SUBNET_ROW_LIMIT,
CIDR_PAGED_ADDRESS_LIMIT, CIDR_CSV_ROW_LIMIT and CIDR_PAGE_SIZE.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// The block to calculate.
#[derive(Args, Debug, Clone)]
pub struct BlockArgs {
    /// IPv4 address, optionally with a /prefix suffix
    pub address: String,

    /// Prefix length (0-32); ignored when the address has a /prefix suffix
    #[arg(short, long, default_value_t = DEFAULT_PREFIX.to_string())]
    pub prefix: String,
}

impl BlockArgs {
    /// Split `a.b.c.d/n` input; otherwise use the separate prefix.
    pub fn address_and_prefix(&self) -> (&str, &str) {
        match self.address.split_once('/') {
            Some((addr, prefix)) => (addr, prefix),
            None => (&self.address, &self.prefix),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the block as a key/value table
    Info(BlockArgs),
    /// Show the block as plain `Label: value` lines
    Text(BlockArgs),
    /// Show the block as JSON
    Json(BlockArgs),
    /// Split the block into subnets of a longer prefix
    Subnets {
        #[command(flatten)]
        block: BlockArgs,
        /// Prefix length of the subnets
        #[arg(short, long)]
        target: String,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// List one page of the block's addresses
    Addresses {
        #[command(flatten)]
        block: BlockArgs,
        /// Zero-based page number, clamped to the available pages
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page: i64,
        /// Addresses per page
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Write the block's addresses to a CSV file
    Csv {
        #[command(flatten)]
        block: BlockArgs,
        /// Directory the CSV file is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Show address, mask, wildcard and network bit by bit
    Bits {
        #[command(flatten)]
        block: BlockArgs,
        /// Do not colour network and host bits
        #[arg(long)]
        no_color: bool,
    },
}

impl Command {
    pub fn block(&self) -> &BlockArgs {
        match self {
            Command::Info(block) | Command::Text(block) | Command::Json(block) => block,
            Command::Subnets { block, .. }
            | Command::Addresses { block, .. }
            | Command::Csv { block, .. }
            | Command::Bits { block, .. } => block,
        }
    }
}

/// Run `command` and return what should be printed.
pub fn run(command: &Command, limits: Limits) -> Result<String, Box<dyn Error>> {
    let mut session = Session::new(limits);
    let (address, prefix) = command.block().address_and_prefix();
    log::info!("#Start {command:?}");
    let block = session.calculate(address, prefix)?;

    let out = match command {
        Command::Info(_) => output::render_table(&block.summary()),
        Command::Text(_) => output::render_text(&block.summary()),
        Command::Json(_) => output::summary_json(&block.summary())?,
        Command::Subnets { target, json, .. } => {
            let listing = session.subnets(target)?;
            if *json {
                output::to_json(&listing)?
            } else {
                output::render_subnets(&listing)
            }
        }
        Command::Addresses {
            page, page_size, ..
        } => {
            if let Some(size) = page_size {
                session.set_page_size(*size)?;
            }
            output::render_address_view(&session.address_page(*page)?)
        }
        Command::Csv { out_dir, .. } => {
            let mut target = ConsoleTarget::new(Vec::new(), out_dir);
            session.download_csv(&mut target)?;
            String::from_utf8(target.into_inner())?.trim_end().to_string()
        }
        Command::Bits { no_color, .. } => output::render_bits(&session.bits()?, !*no_color),
    };
    Ok(out)
}

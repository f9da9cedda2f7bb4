use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether two booking periods overlap and print the common part.
    #[clap(name = "overlap")]
    Overlap(OverlapArgs),

    /// Print the next working day.
    #[clap(name = "next-workday")]
    NextWorkday(NextWorkdayArgs),
}

#[derive(Parser)]
pub struct OverlapArgs {
    /// First period start, for example `2024-01-01T09:00:00`.
    #[clap(long)]
    pub start_1: NaiveDateTime,

    /// First period end.
    #[clap(long)]
    pub end_1: NaiveDateTime,

    /// Second period start.
    #[clap(long)]
    pub start_2: NaiveDateTime,

    /// Second period end.
    #[clap(long)]
    pub end_2: NaiveDateTime,

    /// Print the result as JSON.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct NextWorkdayArgs {
    /// Starting instant, defaults to now.
    #[clap(long, env = "ROOMBOOK_FROM")]
    pub from: Option<NaiveDateTime>,
}

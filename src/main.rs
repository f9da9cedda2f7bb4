mod cli;

use chrono::Local;
use clap::Parser;
use roombook::{calendar, format, overlap, period::Interval, prelude::*};

use crate::cli::{Args, Command};

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Args::parse().command {
        Command::Overlap(args) => {
            let first = Interval::try_new(args.start_1, args.end_1)?;
            let second = Interval::try_new(args.start_2, args.end_2)?;
            let common = overlap::overlap(&first, &second);
            info!(%first, %second, overlaps = common.is_some(), "checked periods");
            if args.json {
                println!("{}", serde_json::to_string(&common)?);
            } else {
                match common {
                    Some(common) => println!(
                        "{} - {}",
                        format::format_datetime(common.start),
                        format::format_datetime(common.end),
                    ),
                    None => println!("no overlap"),
                }
            }
        }

        Command::NextWorkday(args) => {
            let from = args.from.unwrap_or_else(|| Local::now().naive_local());
            println!("{}", format::format_datetime(calendar::next_work_day(from)));
        }
    }
    Ok(())
}

use std::env;
use std::ffi::OsStr;
use std::io::{self, BufRead};

use anyhow::Context as _;
use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use postgres_interval::{parse, parse_strict, Interval, IsoOptions};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "warn");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

/// Runs a command action and exits the process if it failed.
fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

/// The intervals to convert, either from the arguments or one per line of
/// stdin.
fn read_intervals(context: &Context) -> anyhow::Result<Vec<Interval>> {
    let strict = context.bool_flag("strict");

    let lines = if context.args.is_empty() {
        info!("reading intervals from stdin");
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read from stdin")?
    } else {
        context.args.clone()
    };

    lines
        .iter()
        .map(|line| -> anyhow::Result<Interval> {
            if strict {
                Ok(parse_strict(line)?)
            } else {
                Ok(parse(line.as_str()))
            }
        })
        .collect()
}

fn print_each(
    context: &Context,
    render: fn(&Interval) -> anyhow::Result<String>,
) -> anyhow::Result<()> {
    for interval in read_intervals(context)? {
        println!("{}", render(&interval)?);
    }

    Ok(())
}

fn strict_flag() -> Flag {
    Flag::new("strict", FlagType::Bool)
        .description("[optional] Fail on input that is not an interval instead of using zero.")
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let input_command = Command::new("input")
        .usage(format!("{} input [--strict] [interval...]", args[0]))
        .description("Prints the intervals as interval input, e.g. `1 years -32 days`.")
        .flag(strict_flag())
        .action(|context: &Context| {
            exit_on_error(print_each(context, |interval| Ok(interval.to_native_input())))
        });

    let output_command = Command::new("output")
        .usage(format!("{} output [--strict] [interval...]", args[0]))
        .description(
            "Prints the intervals the way the database outputs them, e.g. `1 days -00:00:03`.",
        )
        .flag(strict_flag())
        .action(|context: &Context| {
            exit_on_error(print_each(context, |interval| Ok(interval.to_native_output())))
        });

    let iso_command = Command::new("iso")
        .usage(format!("{} iso [--short] [--strict] [interval...]", args[0]))
        .description("Prints the intervals as ISO 8601 durations.")
        .flag(
            Flag::new("short", FlagType::Bool)
                .description("[optional] Leave out designators that are zero. Default: false"),
        )
        .flag(strict_flag())
        .action(|context: &Context| {
            let options = IsoOptions::new().short(context.bool_flag("short"));

            let result = read_intervals(context).map(|intervals| {
                for interval in intervals {
                    println!("{}", interval.to_iso(options));
                }
            });

            exit_on_error(result)
        });

    let fields_command = Command::new("fields")
        .usage(format!("{} fields [--strict] [interval...]", args[0]))
        .description("Prints the non-zero fields of the intervals as json.")
        .flag(strict_flag())
        .action(|context: &Context| {
            exit_on_error(print_each(context, |interval| {
                serde_json::to_string(&interval.to_fields())
                    .with_context(|| format!("failed to serialize \"{}\"", interval))
            }))
        });

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [args]", args[0]))
        .command(input_command)
        .command(output_command)
        .command(iso_command)
        .command(fields_command);

    app.run(args);

    Ok(())
}

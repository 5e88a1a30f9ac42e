use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::{backtrace::Backtrace, panic};

use clap::Parser;
use tiercode::Converter;
use tiercode_base::{infra::utils::ToStringOr, trace::logger::LoggingSystem};
use tracing::{debug, error};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct TiercodeCli {
    /// File of endgame descriptors, one per line
    #[arg(short, long, value_name = "FILE", default_value_t = String::from(Converter::DEFAULT_INPUT))]
    input: String,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

pub fn main() -> anyhow::Result<ExitCode> {
    let cli = TiercodeCli::parse();
    LoggingSystem::from_env()?.with_verbosity(cli.debug).init()?;
    debug!("Command line {cli:#?}");

    let orig_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let backtrace = Backtrace::force_capture();
        error!(
            "Thread {name} panic {panic_info:?}\nbacktrace\n{backtrace}",
            name = std::thread::current().name().to_string_or("unknown")
        );
        orig_hook(panic_info);
        std::process::exit(1);
    }));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = Converter::new(&cli.input).run(&mut out)?;
    out.flush()?;
    if summary.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

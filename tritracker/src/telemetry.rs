use std::{fs::OpenOptions, io, sync::Mutex};

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

use crate::args::Args;

/// Install the global `fmt` subscriber.
///
/// Logs go to `--log-file` when given. Otherwise they go to stderr, unless the
/// frontend draws on the whole terminal, in which case they are dropped.
pub(crate) fn init(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(args.log_level.as_filter_str())?;

    if let Some(path) = args.log_file() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        install(filter, Mutex::new(file), false);
    } else if args.frontend.takes_over_terminal() {
        install(filter, io::sink, false);
    } else {
        install(filter, io::stderr, true);
    }

    Ok(())
}

fn install<W>(filter: EnvFilter, writer: W, ansi: bool)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .init();
}

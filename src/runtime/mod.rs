use std::env;
use std::io;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::library::{LoftyTagReader, collect};
use crate::organize::{FsCopier, Placer, Summary};
use crate::report::ConsoleReport;

mod settings;

/// Run one collect-and-place pass.
///
/// Usage: `tagfold [SOURCE] [DESTINATION]`; missing arguments fall back to
/// `paths.source` / `paths.destination` from the settings.
pub fn run() -> Result<Summary> {
    let mut args = env::args_os().skip(1).map(PathBuf::from);
    let settings = settings::load_settings()?.with_cli_paths(args.next(), args.next());

    let source = settings
        .paths
        .source
        .clone()
        .ok_or_else(|| Error::Config("no source directory given (argument 1 or paths.source)".into()))?;
    let destination = settings.paths.destination.clone().ok_or_else(|| {
        Error::Config("no destination directory given (argument 2 or paths.destination)".into())
    })?;

    tracing::info!(source = %source.display(), destination = %destination.display(), "organizing");

    let mut report = ConsoleReport::new(io::stdout().lock(), settings.output.color);

    let collection = collect(&source, &settings.library, &LoftyTagReader)?;
    for (file, reason) in &collection.skipped {
        report.unreadable(file, reason);
    }

    let placer = Placer::new(&destination, &settings.layout, &settings.organize, &FsCopier);
    let summary = placer.run(&collection.albums, &mut report)?;

    report.summary(&summary, collection.skipped.len());
    Ok(summary)
}

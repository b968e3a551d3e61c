//! The interactive session loop.

use anyhow::Result;
use tracing::error;

use crate::console::{LineReader, MessageSink};
use crate::dataset::{TripSource, loader};
use crate::filters::select_filters;
use crate::output;
use crate::prompt::{Prompter, YES_NO};
use crate::viewer;

/// Runs interactive iterations until the user declines to restart.
///
/// A failed dataset load is reported and the loop offers a fresh
/// restart; statistics are never computed on a partial load. Only
/// reader-level failures (closed input, exhausted attempts) propagate.
pub fn run(
    reader: &mut dyn LineReader,
    sink: &dyn MessageSink,
    source: &dyn TripSource,
    max_attempts: Option<usize>,
) -> Result<()> {
    let cities = source.cities();
    let mut prompter = Prompter::new(reader, sink, max_attempts);

    loop {
        let filters = select_filters(&mut prompter, sink, &cities)?;

        match loader::load(source, &filters) {
            Ok(trips) => {
                viewer::display_raw_data(&mut prompter, sink, &trips)?;
                output::report_time_stats(sink, &trips);
                output::report_station_stats(sink, &trips);
                output::report_duration_stats(sink, &trips);
                output::report_user_stats(sink, &trips);
            }
            Err(e) => {
                error!(city = %filters.city, error = %e, "Dataset load failed");
                sink.error(&format!(
                    "\nCould not load data for {}: {:#}\n",
                    filters.city, e
                ));
            }
        }

        if prompter.select("Would you like to restart?", &YES_NO)? == "no" {
            break;
        }
    }

    Ok(())
}

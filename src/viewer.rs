//! Paginated raw-row display.

use std::time::Instant;

use anyhow::Result;

use crate::console::MessageSink;
use crate::dataset::Trip;
use crate::output::{self, render_page};
use crate::prompt::{Prompter, YES_NO};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Offers the raw rows five at a time until the user stops or the data
/// runs out.
///
/// Declining the first prompt returns without producing any output.
pub fn display_raw_data(
    prompter: &mut Prompter<'_>,
    sink: &dyn MessageSink,
    trips: &[Trip],
) -> Result<()> {
    let started = Instant::now();
    let mut start = 0;
    let mut end = PAGE_SIZE;

    let answer = prompter.select("Would you like to display the raw data?", &YES_NO)?;
    if answer == "no" {
        return Ok(());
    }
    render_page(sink, trips, start, end, true);

    let mut stopped = false;
    while end < trips.len() {
        let answer = prompter.select("Display more raw data?", &YES_NO)?;
        if answer == "no" {
            sink.info("");
            stopped = true;
            break;
        }
        start += PAGE_SIZE;
        end += PAGE_SIZE;
        render_page(sink, trips, start, end, false);
    }

    if !stopped {
        sink.info("\nYou have reached the end of the data\n");
    }

    output::report_elapsed(sink, started);
    Ok(())
}

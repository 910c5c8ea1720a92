//! Report rendering for the terminal and for machines.

use crate::compare::{ComparisonReport, Divergence, ExecutionOrderDiff};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Plain text rendering of a [`ComparisonReport`].
///
/// Sections always appear in the same order. Mapping sections are printed as
/// sorted JSON objects, so an empty section prints `{}`.
pub struct TextReport<'a>(pub &'a ComparisonReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "++++ Start comparing")?;
        write_execution_order(f, &report.processor_order)?;
        write_execution_order(f, &report.group_order)?;

        writeln!(f)?;
        writeln!(
            f,
            "++++ GlobalParameters that exist in the first file that are different or non-existent in the second file"
        )?;
        write_json(f, &report.global_parameters.only_in_first)?;
        writeln!(
            f,
            "++++ GlobalParameters that exist in the second file that are different or non-existent in the first file"
        )?;
        write_json(f, &report.global_parameters.only_in_second)?;

        writeln!(f)?;
        writeln!(
            f,
            "++++ Entries that exist in the first file that are different or non-existent in the second file"
        )?;
        write_json(f, &report.processor_parameters.only_in_first)?;
        writeln!(
            f,
            "++++ Entries that exist in the second file that are different or non-existent in the first file"
        )?;
        write_json(f, &report.processor_parameters.only_in_second)?;

        writeln!(f)?;
        writeln!(f, "++++ Done comparing")
    }
}

fn write_execution_order(f: &mut fmt::Formatter<'_>, diff: &ExecutionOrderDiff) -> fmt::Result {
    let kind = diff.kind;
    let plural = kind.plural();

    writeln!(f)?;
    writeln!(f, "++++ Executing {} order", kind)?;

    if let Some(count) = &diff.count_mismatch {
        writeln!(
            f,
            "Mismatch in number of executing {}! {} vs {}",
            plural, count.first, count.second
        )?;
    }

    match &diff.divergence {
        Some(Divergence::MoreEntriesInFirst { position }) => writeln!(
            f,
            "More {} in first file than in second (second file ends at position {})",
            plural, position
        ),
        Some(Divergence::NameMismatch {
            position,
            first,
            second,
        }) => {
            writeln!(
                f,
                "Difference in executing {} at position {}: {} does not match {} {}",
                plural, position, first, kind, second
            )?;
            writeln!(f, "Check the order of {} execution!", kind)
        }
        None => Ok(()),
    }
}

fn write_json<T: Serialize>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    let json = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
    writeln!(f, "{}", json)
}

/// Write the whole report as pretty JSON followed by a newline.
pub fn write_json_report<W: Write>(out: &mut W, report: &ComparisonReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

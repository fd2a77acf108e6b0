use std::io::{self, Write};

use colored::Colorize;
use log::{debug, trace};

use crate::types::{AnalysisResult, HotPath};

const TOP_OFFENDERS: usize = 5;

/// Formats a duration in seconds as `ms` below one second, `s` above.
pub fn format_seconds(secs: f64) -> String {
    if secs >= 1.0 { format!("{:.2}s", secs) } else { format!("{:.1}ms", secs * 1000.0) }
}

fn share_of_total(time: f64, total: f64) -> f64 {
    if total > 0.0 { time / total * 100.0 } else { 0.0 }
}

pub fn print_no_hot_paths_message<W: Write>(writer: &mut W, threshold: f64) -> io::Result<()> {
    debug!("No hot paths detected");
    writeln!(
        writer,
        "{} No slow import chains detected. Threshold: {}",
        "✓".green().bold(),
        format_seconds(threshold)
    )?;
    writer.flush()?;
    Ok(())
}

/// Prints hot paths as an indented tree, in the order they were collected,
/// followed by a summary of the slowest chains.
pub fn print_hot_paths<W: Write>(writer: &mut W, result: &AnalysisResult) -> io::Result<()> {
    debug!("Printing {} hot paths", result.hot_paths.len());

    writeln!(
        writer,
        "{} Slow import chains detected (threshold: {}, total: {})\n",
        "⚠".yellow().bold(),
        format_seconds(result.threshold).yellow(),
        format_seconds(result.total_time).cyan()
    )?;

    for hot in &result.hot_paths {
        let depth = hot.depth();
        trace!("Printing {} at depth {}", hot.leaf_name(), depth);

        let share = share_of_total(hot.total_time, result.total_time);
        let timing = format!("({}, {:.1}%)", format_seconds(hot.total_time), share);

        if depth == 0 {
            writeln!(writer, "{} {}", hot.leaf_name().bright_white().bold(), timing.red().bold())?;
        } else {
            writeln!(
                writer,
                "{}{} {} {}",
                "    ".repeat(depth - 1),
                "└──".dimmed(),
                hot.leaf_name().blue(),
                timing.red()
            )?;
        }
    }
    writeln!(writer)?;

    print_summary(writer, result)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, result: &AnalysisResult) -> io::Result<()> {
    // The root exceeds the threshold whenever anything does, so it is not an offender.
    let mut offenders: Vec<&HotPath> = result.hot_paths.iter().filter(|h| h.depth() > 0).collect();
    offenders.sort_by(|a, b| b.total_time.total_cmp(&a.total_time));
    offenders.truncate(TOP_OFFENDERS);

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Hot paths: {}", result.hot_paths.len().to_string().yellow().bold())?;
    writeln!(writer, "  Frames analyzed: {}", result.nodes_analyzed.to_string().cyan())?;

    if !offenders.is_empty() {
        writeln!(writer, "  Top {} offenders:", offenders.len())?;
        for (idx, hot) in offenders.iter().enumerate() {
            writeln!(
                writer,
                "    {}. {} ({})",
                idx + 1,
                hot.to_path_string(),
                format_seconds(hot.total_time).red()
            )?;
        }
    }

    Ok(())
}

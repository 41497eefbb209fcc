//! Console output for fetched results

use std::io::{self, Write};

use tracing::warn;

use crate::models::MatchResult;

const HEADING: &str = "Today's Match Results:";
const SEPARATOR: &str = "-------------------";

/// One result as a printable block
pub fn render_match(result: &MatchResult) -> String {
    format!(
        "{}\n{} vs {}\nScore: {}\nStatus: {}\nDate: {}\n{}\n",
        result.league,
        result.home_team,
        result.away_team,
        result.score,
        result.status,
        result.match_date,
        SEPARATOR
    )
}

/// Write the heading followed by one block per result
pub fn write_results<W: Write>(mut writer: W, results: &[MatchResult]) -> io::Result<()> {
    writeln!(writer, "{}", HEADING)?;
    for result in results {
        writeln!(writer)?;
        write!(writer, "{}", render_match(result))?;
    }
    writer.flush()
}

/// Print results to stdout
pub fn print_results(results: &[MatchResult]) {
    let stdout = io::stdout();
    if let Err(e) = write_results(stdout.lock(), results) {
        warn!("Failed to write match results to stdout: {}", e);
    }
}

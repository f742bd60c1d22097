//! Statistics reporting.

use console::style;

use crate::download::RunStats;

/// Print statistics for a finished run.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "{}",
        style(format!("Statistics for {}:", stats.username)).bold()
    );
    println!("  Posts found:  {}", stats.posts_found);
    println!("  With media:   {}", stats.media_found);
    println!("  No media:     {}", stats.posts_without_media());
    println!(
        "  Downloaded:   {}",
        style(stats.report.downloaded).green()
    );
    if stats.report.failed > 0 {
        println!("  Failed:       {}", style(stats.report.failed).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}

use anyhow::{Context, Result};
use danmu_etl::{DanmuCrawler, RunReport};
use std::io::{self, Write};

fn main() -> Result<()> {
    print!("Enter the BV id of the video to crawl: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading video id from stdin")?;
    let bvid = line.trim();

    let report = DanmuCrawler::new().run(bvid)?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &RunReport) {
    let c = &report.counters;

    println!();
    println!("Video:  {} (by {})", report.meta.title, report.meta.owner);
    println!("Payload encoding: {}{}", report.encoding, if report.decode_degraded { " (lossy fallback)" } else { "" });
    println!(
        "Spans matched: {}   extracted: {}   skipped: {}   timestamp anomalies: {}",
        c.spans_matched, c.records_extracted, c.records_skipped, c.timestamp_anomalies
    );

    if !c.kept_by_year.is_empty() {
        println!("Accepted by year:");
        for (year, count) in &c.kept_by_year {
            println!("  {year}: {count}");
        }
    }
    if !c.dropped_by_year.is_empty() {
        println!("Dropped by year (outside accepted set):");
        for (year, count) in &c.dropped_by_year {
            println!("  {year}: {count}");
        }
    }

    match &report.output_path {
        Some(path) => println!("Wrote {} rows to {}", c.accepted, path.display()),
        None => println!("No rows accepted; no file written."),
    }

    if !report.comments.is_empty() {
        println!();
        println!("Preview (first {}):", report.comments.len().min(10));
        for comment in report.comments.iter().take(10) {
            println!(
                "  [{} {}] {} | {} | {}",
                comment.send_date,
                comment.send_time,
                comment.user_id_masked,
                comment.color_name,
                comment.content
            );
        }
    }
}

use crate::args::{Accepts, parse_common, take_verbose};
use crate::config::{Settings, parse_reference};
use crate::formatting::{ConsoleReporter, FormatContext};
use crate::logging;
use crate::note::NoteFile;
use crate::operations::{
    annotate_in, log_timestamp_in, refresh_stats_in, scan_in,
};
use crate::shared::table::{
    Align, render_table, terminal_columns, truncate_with_ellipsis,
};
use std::env;
use std::error::Error;
use tracing::debug;

pub fn entry() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = take_verbose(&mut args);
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    let settings = Settings::from_env()?;
    logging::init(settings.log_filter.as_deref(), verbose)?;
    debug!(now = %settings.now, "resolved settings");

    let cmd = args.remove(0);
    match cmd.as_str() {
        "stats" => stats(args, &settings)?,
        "annotate" => annotate(args, &settings)?,
        "log" => log(args, &settings)?,
        "scan" => scan(args, &settings)?,
        "help" | "--help" | "-h" => print_help(),
        other => {
            print_help();
            return Err(format!("Unknown command: {other}").into());
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\
Sprout Notes
Usage:
  sprout stats <file> [--dry-run]
                          Create or refresh the \"## Plant Stats\" section
  sprout annotate <file> [--on M/D/YY] [--dry-run]
                          Append Day#N after each bare \"Sprouted: M/D/YY\"
  sprout log <file> --line <N> [--dry-run]
                          Insert \"🪵 Logged at: HH:MM:SS\" two lines below
                          line N (0-based)
  sprout scan <file>      List Sprouted entries with their day counts
  sprout help             Show this message

Flags:
  -n, --dry-run           Print the updated note instead of writing it
  -v, --verbose           Debug logging on stderr

Environment:
  SPROUT_NOW              Fixed clock, e.g. \"2025-05-18 09:30:00\"
  SPROUT_REFERENCE_DATE   Default M/D/YY reference date for annotate
  SPROUT_LOG              Log filter directive (default: warn)
  NO_COLOR                Disable colored output
"
    );
}

fn stats(
    args: Vec<String>,
    settings: &Settings,
) -> Result<(), Box<dyn Error>> {
    let accepts = Accepts { dry_run: true, ..Default::default() };
    let flags = parse_common(args, "stats", accepts)?;
    let mut reporter = ConsoleReporter::new(settings.use_color, flags.dry_run);
    let mut host =
        NoteFile { path: flags.file, trigger: None, dry_run: flags.dry_run };
    refresh_stats_in(&mut host, &mut reporter, settings.now)?;
    Ok(())
}

fn annotate(
    args: Vec<String>,
    settings: &Settings,
) -> Result<(), Box<dyn Error>> {
    let accepts = Accepts { dry_run: true, on: true, ..Default::default() };
    let flags = parse_common(args, "annotate", accepts)?;
    let reference = match flags.on.as_deref() {
        Some(raw) => parse_reference(raw)?,
        None => settings.reference(),
    };
    let mut reporter = ConsoleReporter::new(settings.use_color, flags.dry_run);
    let mut host =
        NoteFile { path: flags.file, trigger: None, dry_run: flags.dry_run };
    annotate_in(&mut host, &mut reporter, reference)?;
    Ok(())
}

fn log(args: Vec<String>, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let accepts = Accepts { dry_run: true, line: true, ..Default::default() };
    let flags = parse_common(args, "log", accepts)?;
    let mut reporter = ConsoleReporter::new(settings.use_color, flags.dry_run);
    let mut host = NoteFile {
        path: flags.file,
        trigger: flags.line,
        dry_run: flags.dry_run,
    };
    log_timestamp_in(&mut host, &mut reporter, settings.now)?;
    Ok(())
}

fn scan(args: Vec<String>, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let flags = parse_common(args, "scan", Accepts::default())?;
    let mut reporter = ConsoleReporter::new(settings.use_color, true);
    let mut host = NoteFile::new(flags.file);
    let entries = scan_in(&mut host, &mut reporter, settings.now.date())?;
    if entries.is_empty() {
        println!("No \"Sprouted: M/D/YY\" entries found.");
        return Ok(());
    }

    let ctx = FormatContext::new(settings.use_color);
    let date_width = entries
        .iter()
        .map(|e| e.date.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);
    let days_width = entries
        .iter()
        .map(|e| e.days.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);
    // Four columns, three " | " separators.
    let fixed = date_width + days_width + 4 + 9;
    let line_width = terminal_columns(120).saturating_sub(fixed).max(20);

    let headers: Vec<String> = ["Date", "Days", "Week", "Line"]
        .iter()
        .map(|h| ctx.format_header(h))
        .collect();
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                ctx.format_date(&e.date.to_string()),
                ctx.format_days(e.days),
                format!("#{}", e.week()),
                ctx.format_muted(&truncate_with_ellipsis(&e.line, line_width)),
            ]
        })
        .collect();
    let aligns = [Align::Left, Align::Right, Align::Right, Align::Left];
    println!("{}", render_table(&headers, &aligns, &rows));
    Ok(())
}

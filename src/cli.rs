// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat, FailurePolicy, Target};
use crate::log::FileLog;
use crate::net::HttpFetcher;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (url, opts) = parse_cli()?;
    let fetch = HttpFetcher::new(Box::new(FileLog))?;
    let summary = runner::run(&fetch, &opts, &url)?;
    println!("GOT {} RESULTS", summary.rows);
    Ok(())
}

fn parse_cli() -> Result<(String, AppOptions), Box<dyn std::error::Error>> {
    let mut opts = AppOptions::default();
    let mut url: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--book" => opts.search.target = Target::Book,
            "--browse" => opts.search.target = Target::Browse,
            "-w" | "--words" => {
                let v = args.next().ok_or("Missing value for --words")?;
                opts.search.words = parse_words_list(&v);
            }
            "-n" | "--pages" => {
                let v = args.next().ok_or("Missing value for --pages")?;
                opts.search.max_pages = v.parse()?;
            }
            "--no-save-pages" => opts.search.save_pages = false,
            "--data-dir" => {
                opts.search.data_dir =
                    PathBuf::from(args.next().ok_or("Missing value for --data-dir")?);
            }
            "--skip-failures" => opts.search.on_error = FailurePolicy::Skip,
            "-o" | "--out" => {
                opts.export.out_dir =
                    PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--delimiter" => {
                let v = args.next().ok_or("Missing value for --delimiter")?;
                let mut chars = v.chars();
                let c = chars.next().ok_or("Empty delimiter")?;
                if chars.next().is_some() {
                    return Err("Delimiter must be a single character".into());
                }
                opts.export.delimiter = Some(c);
            }
            "--no-headers" => opts.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if !other.starts_with('-') && url.is_none() => url = Some(s!(other)),
            other => return Err(format!("Unknown arg: {}", other).into()),
        }
    }

    let url = url.ok_or("Missing URL argument (book or browse listing)")?;
    if opts.search.words.is_empty() {
        return Err("No search words given (use -w/--words)".into());
    }
    Ok((url, opts))
}

fn parse_words_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(|w| s!(w))
        .collect()
}

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use eyre::{Result, bail};
use log::{debug, info};

mod cli;

use cli::{Cli, OutputFormat};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("yturl.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("yturl")
        .join("logs")
}

fn build_after_help() -> String {
    let log_path = log_dir().join("yturl.log");

    format!(
        "SUPPORTED INPUTS:\n  \
         https://www.youtube.com/watch?v=ID\n  \
         https://youtu.be/ID\n  \
         https://www.youtube.com/embed/ID\n  \
         https://www.youtube.com/shorts/ID\n  \
         https://www.youtube.com/live/ID\n  \
         https://m.youtube.com/watch?v=ID\n  \
         https://music.youtube.com/watch?v=ID\n  \
         https://www.youtube.com/attribution_link?...&v=ID\n  \
         <11-character video ID>\n\n\
         Start times (t= or start=) and playlists (list=) are picked up from\n\
         the query string when present.\n\n\
         Logs are written to: {}",
        log_path.display()
    )
}

/// Retry an async operation with exponential backoff
async fn retry<F, Fut, T>(max_attempts: u32, operation: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut last_err = None;
    for attempt in 0..max_attempts {
        match operation().await {
            Ok(val) => return Ok(val),
            Err(e) => {
                if attempt + 1 < max_attempts {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    debug!("Attempt {} failed: {e}, retrying in {delay:?}", attempt + 1);
                    tokio::time::sleep(delay).await;
                }
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = yturl::config::Config::load().unwrap_or_default();

    // CLI flags take priority over config defaults
    let format = cli
        .format
        .or_else(|| config.default_format.as_deref().and_then(OutputFormat::from_name))
        .unwrap_or(OutputFormat::Text);
    let lookup = cli.lookup || config.lookup.unwrap_or(false);

    if cli.verbose {
        let config_path = yturl::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    let client = reqwest::Client::new();

    // Collect inputs: from arg or stdin
    let inputs = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if inputs.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: yturl <URL>\n       echo <URL> | yturl");
    }

    let mut failed = 0usize;
    for raw_input in &inputs {
        let raw_input = raw_input.trim();
        if raw_input.is_empty() {
            continue;
        }

        let parsed = yturl::resolver::parse(raw_input);
        if !parsed.is_valid {
            failed += 1;
            debug!("no URL shape matched: {raw_input}");
        }

        if cli.verbose && parsed.is_valid {
            eprintln!(
                "Video: {}\nStart: {}\nPlaylist: {}",
                parsed.video_id,
                parsed.start_time.map_or("none".to_string(), |s| format!("{s}s")),
                parsed.playlist_id.as_deref().unwrap_or("none"),
            );
        }

        let metadata = if lookup && parsed.is_valid {
            let cached = if cli.no_cache {
                None
            } else {
                yturl::cache::load(&parsed.video_id)
            };
            match cached {
                Some(meta) => Some(meta),
                None => {
                    let fetched = retry(3, || {
                        let client = &client;
                        let video_id = &parsed.video_id;
                        async move { yturl::metadata::fetch_oembed(client, video_id).await }
                    })
                    .await?;
                    yturl::cache::save(&parsed.video_id, &fetched)?;
                    Some(fetched)
                }
            }
        } else {
            None
        };

        let rendered = match format {
            OutputFormat::Text => Some(yturl::output::render_text(&parsed, metadata.as_ref())),
            OutputFormat::Json => Some(yturl::output::render_json(&parsed, metadata.as_ref())?),
            OutputFormat::Id => parsed.is_valid.then(|| parsed.video_id.clone()),
            OutputFormat::Url => parsed.is_valid.then(|| yturl::output::render_url(&parsed)),
        };

        if let Some(rendered) = rendered {
            if let Some(ref path) = cli.output {
                std::fs::write(path, &rendered)?;
                if cli.verbose {
                    eprintln!("Output written to: {}", path.display());
                }
            } else {
                println!("{rendered}");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} input(s) did not resolve to a YouTube video\n\nRun with --help to see supported formats");
    }

    Ok(())
}

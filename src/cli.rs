use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Id,
    Url,
}

impl OutputFormat {
    /// Resolve a config-file format name; unknown names are ignored
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "id" => Some(OutputFormat::Id),
            "url" => Some(OutputFormat::Url),
            _ => None,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "yturl",
    about = "YouTube URL parser and video identifier resolver",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub url: Option<String>,

    /// Output format: text (default), json, id, url
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fetch video title and channel via the oEmbed API
    #[arg(short, long)]
    pub lookup: bool,

    /// Refresh oEmbed metadata even if cached
    #[arg(long)]
    pub no_cache: bool,

    /// Show parse details on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("id"), Some(OutputFormat::Id));
        assert_eq!(OutputFormat::from_name("url"), Some(OutputFormat::Url));
        assert_eq!(OutputFormat::from_name("srt"), None);
    }
}

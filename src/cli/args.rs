//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// nsfw.xxx user media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "nsfwxxx-downloader",
    version,
    about = "Download all media posted by an nsfw.xxx user",
    long_about = "Crawls a user's listing pages, extracts the image or video of every post,\n\
                  and saves the files to <DIR>/<USERNAME>/."
)]
pub struct Args {
    /// Username to download posts for.
    #[arg(short, long)]
    pub username: String,

    /// Directory to download files to [default: ./].
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Path to an optional configuration file.
    #[arg(short, long, env = "NSFWXXX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.dir {
            config.options.download_directory = Some(dir.clone());
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["nsfwxxx-downloader", "-u", "alice"]).unwrap();
        assert_eq!(args.username, "alice");
        assert_eq!(args.dir, None);
        assert!(!args.quiet);
    }

    #[test]
    fn test_username_required() {
        assert!(Args::try_parse_from(["nsfwxxx-downloader", "--dir", "/tmp"]).is_err());
    }

    #[test]
    fn test_merge_into_config() {
        let args = Args::try_parse_from([
            "nsfwxxx-downloader",
            "--username",
            "alice",
            "--dir",
            "/media",
            "-q",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.download_directory(), PathBuf::from("/media"));
        assert!(!config.options.show_progress);
    }

    #[test]
    fn test_config_directory_kept_without_dir_flag() {
        let mut config: Config =
            toml::from_str("[options]\ndownload_directory = \"/srv/media\"").unwrap();
        let args = Args::try_parse_from(["nsfwxxx-downloader", "-u", "alice"]).unwrap();

        args.merge_into_config(&mut config);

        assert_eq!(config.download_directory(), PathBuf::from("/srv/media"));
    }

    #[test]
    fn test_default_directory_without_flag_or_config() {
        let mut config = Config::default();
        let args = Args::try_parse_from(["nsfwxxx-downloader", "-u", "alice"]).unwrap();

        args.merge_into_config(&mut config);

        assert_eq!(config.download_directory(), PathBuf::from("./"));
    }
}

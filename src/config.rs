// src/config.rs

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{PodcastError, Result};
use crate::render::DEFAULT_AUDIO_URL_BASE;

pub const DEFAULT_OUTPUT: &str = "podcast.html";
pub const DEFAULT_INPUT_NAME: &str = "podcasts.csv";
pub const DEFAULT_PROGRAM_NAME: &str = "generate_html";

/// Overrides the output page path.
pub const ENV_OUTPUT: &str = "PODCAST_HTML";
/// Overrides the base URL audio filenames are appended to.
pub const ENV_AUDIO_URL_BASE: &str = "PODCAST_AUDIO_URL_BASE";

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub audio_base_url: String,
}

impl Config {
    /// Resolve the run configuration from `args` (program name first) and
    /// an environment lookup.
    pub fn resolve<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = match args.get(1) {
            Some(arg) => {
                let path = PathBuf::from(arg);
                if !path.is_file() {
                    return Err(PodcastError::InvalidInput(path));
                }
                path
            }
            None => {
                warn!("No input file was provided. Using default.");
                default_input()
            }
        };
        if args.len() > 2 {
            warn!("Ignoring extra arguments: {}", args[2..].join(" "));
        }

        let output = env(ENV_OUTPUT)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let audio_base_url = env(ENV_AUDIO_URL_BASE)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUDIO_URL_BASE.to_string());

        info!(
            "input={} output={} audio={}",
            input.display(),
            output.display(),
            audio_base_url
        );
        Ok(Self {
            input,
            output,
            audio_base_url,
        })
    }
}

/// `podcasts.csv` next to the running executable.
fn default_input() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_INPUT_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_NAME))
}

/// Log file named after the program: `generate_html` → `generate_html.log`.
pub fn log_file_for(program: Option<&str>) -> PathBuf {
    let stem = program
        .and_then(|p| Path::new(p).file_stem())
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PROGRAM_NAME);
    PathBuf::from(format!("{}.log", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn explicit_input_must_exist() {
        let err = Config::resolve(&args(&["gen", "/definitely/not/here.csv"]), no_env).unwrap_err();
        assert!(matches!(err, PodcastError::InvalidInput(_)));
    }

    #[test]
    fn explicit_input_and_defaults() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_string_lossy().to_string();
        let cfg = Config::resolve(&args(&["gen", &path]), no_env).unwrap();
        assert_eq!(cfg.input, tmp.path());
        assert_eq!(cfg.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cfg.audio_base_url, DEFAULT_AUDIO_URL_BASE);
    }

    #[test]
    fn missing_argument_uses_default_input() {
        let cfg = Config::resolve(&args(&["gen"]), no_env).unwrap();
        assert_eq!(cfg.input.file_name().unwrap(), DEFAULT_INPUT_NAME);
    }

    #[test]
    fn environment_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_OUTPUT, "out/page.html"),
            (ENV_AUDIO_URL_BASE, "https://cdn.example/audio/"),
        ]
        .into_iter()
        .collect();
        let cfg = Config::resolve(&args(&["gen"]), |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.output, PathBuf::from("out/page.html"));
        assert_eq!(cfg.audio_base_url, "https://cdn.example/audio/");
    }

    #[test]
    fn log_file_follows_program_name() {
        assert_eq!(
            log_file_for(Some("/usr/local/bin/generate_html")),
            PathBuf::from("generate_html.log")
        );
        assert_eq!(log_file_for(Some("gen.exe")), PathBuf::from("gen.log"));
        assert_eq!(log_file_for(None), PathBuf::from("generate_html.log"));
    }
}

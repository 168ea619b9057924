//! Run configuration for the `linesketch` binary.
//!
//! A run is described by flags, by a JSON config file, or both. `--config`
//! loads the file wholesale, so flags meant to override it must come after.
use crate::params::SketchParams;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one sketch run needs.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub params: SketchParams,
    pub report: Option<PathBuf>,
}

/// Read a [`RunConfig`] from a JSON file.
pub fn load_config(path: &Path) -> Result<RunConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RunConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Parse the process arguments into a [`RunConfig`].
pub fn parse_cli(program: &str) -> Result<RunConfig, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args(program, &args)
}

fn parse_args(program: &str, args: &[String]) -> Result<RunConfig, String> {
    let mut config = RunConfig::default();
    let mut positionals: Vec<PathBuf> = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage(program)),
            "--config" => {
                let path = next_value(&mut iter, "--config", program)?;
                config = load_config(Path::new(path))?;
            }
            "--denoise" => {
                let value = next_value(&mut iter, "--denoise", program)?;
                config.params.denoise_ksize = parse_int(value, "--denoise")?;
            }
            "--block" => {
                let value = next_value(&mut iter, "--block", program)?;
                config.params.block_size = parse_int(value, "--block")?;
            }
            "--offset" => {
                let value = next_value(&mut iter, "--offset", program)?;
                config.params.threshold_offset = parse_int(value, "--offset")?;
            }
            "--polarity" => {
                let value = next_value(&mut iter, "--polarity", program)?;
                config.params.polarity = value.parse()?;
            }
            "--report" => {
                let value = next_value(&mut iter, "--report", program)?;
                config.report = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option '{other}'\n\n{}", usage(program)));
            }
            path => positionals.push(PathBuf::from(path)),
        }
    }

    let mut positionals = positionals.into_iter();
    if let Some(input) = positionals.next() {
        config.input = Some(input);
    }
    if let Some(output) = positionals.next() {
        config.output = Some(output);
    }
    if let Some(extra) = positionals.next() {
        return Err(format!(
            "Unexpected argument '{}'\n\n{}",
            extra.display(),
            usage(program)
        ));
    }
    Ok(config)
}

fn next_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
    program: &str,
) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {flag}\n\n{}", usage(program)))
}

fn parse_int(value: &str, flag: &str) -> Result<i32, String> {
    value
        .parse::<i32>()
        .map_err(|_| format!("Invalid integer '{value}' for {flag}"))
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [OPTIONS] <input> [output]\n\n\
         Renders <input> into a binary line-art sketch. Without [output] the\n\
         sketch lands next to the input as <stem>_sketch.png.\n\n\
         Options:\n\
         \x20 --config <path>    JSON run config; later flags override it\n\
         \x20 --denoise <int>    median kernel size (default 5)\n\
         \x20 --block <int>      adaptive threshold neighborhood (default 9)\n\
         \x20 --offset <int>     threshold offset (default 9)\n\
         \x20 --polarity <p>     dark-on-light | light-on-dark (default dark-on-light)\n\
         \x20 --report <path>    write the run trace as JSON\n\
         \x20 -h, --help         show this help"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Polarity;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_and_positionals_fill_the_config() {
        let config = parse_args(
            "linesketch",
            &args(&[
                "--denoise",
                "7",
                "--block",
                "15",
                "--offset",
                "-3",
                "--polarity",
                "light-on-dark",
                "photo.jpg",
                "out.png",
            ]),
        )
        .expect("parse");
        assert_eq!(config.input.as_deref(), Some(Path::new("photo.jpg")));
        assert_eq!(config.output.as_deref(), Some(Path::new("out.png")));
        assert_eq!(config.params.denoise_ksize, 7);
        assert_eq!(config.params.block_size, 15);
        assert_eq!(config.params.threshold_offset, -3);
        assert_eq!(config.params.polarity, Polarity::LightOnDark);
        assert!(config.report.is_none());
    }

    #[test]
    fn defaults_survive_when_flags_are_absent() {
        let config = parse_args("linesketch", &args(&["photo.jpg"])).expect("parse");
        assert_eq!(config.params.denoise_ksize, 5);
        assert_eq!(config.params.block_size, 9);
        assert_eq!(config.params.threshold_offset, 9);
        assert_eq!(config.params.polarity, Polarity::DarkOnLight);
        assert!(config.output.is_none());
    }

    #[test]
    fn rejects_unknown_flags_and_missing_values() {
        assert!(parse_args("linesketch", &args(&["--bogus"])).is_err());
        assert!(parse_args("linesketch", &args(&["--denoise"])).is_err());
        assert!(parse_args("linesketch", &args(&["--denoise", "five"])).is_err());
        assert!(parse_args("linesketch", &args(&["--polarity", "inverted"])).is_err());
        assert!(parse_args("linesketch", &args(&["a", "b", "c"])).is_err());
    }

    #[test]
    fn config_file_loads_and_later_flags_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("run.json");
        fs::write(
            &path,
            r#"{
                "input": "photo.jpg",
                "output": "sketch.png",
                "params": { "denoise_ksize": 3, "threshold_offset": 12 },
                "report": "trace.json"
            }"#,
        )
        .expect("write config");

        let path_arg = path.to_string_lossy().into_owned();
        let config = parse_args(
            "linesketch",
            &args(&["--config", &path_arg, "--offset", "20"]),
        )
        .expect("parse");
        assert_eq!(config.input.as_deref(), Some(Path::new("photo.jpg")));
        assert_eq!(config.params.denoise_ksize, 3);
        // Unset fields in the file keep their defaults.
        assert_eq!(config.params.block_size, 9);
        assert_eq!(config.params.threshold_offset, 20, "flag overrides file");
        assert_eq!(config.report.as_deref(), Some(Path::new("trace.json")));
    }

    #[test]
    fn malformed_config_file_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write config");
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("broken.json"), "err: {err}");
    }
}

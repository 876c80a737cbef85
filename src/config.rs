use getopts::Options;
use log::LevelFilter;

use crate::error::Error;
use crate::output::DEFAULT_OUTPUT_FILE;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_file: String,
    pub log_file: Option<String>,
    pub log_level: LevelFilter
}

impl Default for Config {
    fn default() -> Config {
        Config {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            log_file: None,
            log_level: LevelFilter::Info
        }
    }
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt("f", "output_file",
                &format!("specify the file to write the dataset to (default: {})", DEFAULT_OUTPUT_FILE),
                "OUTPUT_FILE");
    opts.optopt("l", "log_file", "specify a file to write the log to (default: stderr)", "LOG_FILE_PATH");
    opts.optflag("v", "verbose", "log every generated row");
    opts.optflag("q", "quiet", "only log warnings and errors");
    opts
}

/// Returns the command line usage text
pub fn usage(program: &str) -> String {
    let brief = format!("Usage: {} [options]", program);
    options().usage(&brief)
}

fn non_empty_path(value: String, what: &str) -> Result<String, Error> {
    let path = value.trim().to_string();
    if path.is_empty() {
        return Err(Error::Config(format!("{} must not be empty.", what)));
    }
    Ok(path)
}

/// Parses command line arguments (including the program name). Returns
/// `Ok(None)` when help was requested.
pub fn load(args: &[String]) -> Result<Option<Config>, Error> {
    let opts = options();
    let matches = opts.parse(args.iter().skip(1))
        .map_err(|err| Error::Config(err.to_string()))?;

    if matches.opt_present("h") {
        return Ok(None);
    }

    if !matches.free.is_empty() {
        return Err(Error::Config(format!("Unexpected argument: {}", matches.free[0])));
    }

    let mut config = Config::default();

    if let Some(output_file) = matches.opt_str("f") {
        config.output_file = non_empty_path(output_file, "Output file")?;
    }

    if let Some(log_file) = matches.opt_str("l") {
        config.log_file = Some(non_empty_path(log_file, "Log file")?);
    }

    config.log_level = match (matches.opt_present("v"), matches.opt_present("q")) {
        (true, true) => {
            return Err(Error::Config("--verbose and --quiet cannot be combined.".to_string()))
        }
        (true, false) => LevelFilter::Debug,
        (false, true) => LevelFilter::Warn,
        (false, false) => LevelFilter::Info
    };

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        let mut v = vec!["zipgen".to_string()];
        v.extend(list.iter().map(|s| s.to_string()));
        v
    }

    #[test]
    fn defaults() {
        let config = load(&args(&[])).unwrap().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_file, "ZipCodes.csv");
    }

    #[test]
    fn all_options() {
        let config = load(&args(&["-f", "out.csv", "--log_file", "run.log", "-v"]))
            .unwrap()
            .unwrap();
        assert_eq!(config.output_file, "out.csv");
        assert_eq!(config.log_file, Some("run.log".to_string()));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(load(&args(&["-h", "-f", "ignored.csv"])).unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(load(&args(&["--bogus"])).is_err());
        assert!(load(&args(&["stray"])).is_err());
        assert!(load(&args(&["-v", "-q"])).is_err());
        assert!(load(&args(&["-f", "  "])).is_err());
    }

    #[test]
    fn blank_log_file_rejected() {
        match load(&args(&["-l", "  "])) {
            Err(Error::Config(msg)) => assert_eq!(msg, "Log file must not be empty."),
            other => panic!("expected config error, got {:?}", other)
        }
        let config = load(&args(&["-l", " run.log "])).unwrap().unwrap();
        assert_eq!(config.log_file, Some("run.log".to_string()));
    }

    #[test]
    fn quiet_lowers_level() {
        let config = load(&args(&["-q"])).unwrap().unwrap();
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.output_file, "ZipCodes.csv");
    }

    #[test]
    fn usage_mentions_options() {
        let text = usage("zipgen");
        assert!(text.contains("--output_file"));
        assert!(text.contains("--log_file"));
    }
}

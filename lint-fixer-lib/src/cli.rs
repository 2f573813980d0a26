//! This module holds the Command Line Interface design.

use std::env;
use std::path::{Path, PathBuf};

// non-std crates
use clap::{Arg, ArgAction, ArgMatches, Command};

/// The file pattern used when `--files` is not given.
pub const DEFAULT_FILES: &str = "src/**/*.js";

/// The demonstration file written by `reset-test` when `--file` is not given.
pub const DEFAULT_TEST_FILE: &str = "src/testFile.js";

/// The directory audio cues are read from when `--sounds-dir` is not given.
///
/// This is the `assets` directory installed next to the executable, so cues are found
/// no matter which project the tool runs in. If the executable's location is unknown,
/// `base_dir`/assets is used instead.
pub fn default_sounds_dir(base_dir: &Path) -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .unwrap_or_else(|| base_dir.join("assets"))
}

/// Builds and returns the Command Line Interface's argument parsing object.
pub fn get_arg_parser() -> Command {
    Command::new("lint-fixer")
        .about("Formats files with Prettier, then lints them with ESLint.")
        .after_help("Audio cues are read from --sounds-dir; pass --no-sound to silence them.")
        .arg(
            Arg::new("fix")
                .long("fix")
                .short('f')
                .action(ArgAction::SetTrue)
                .conflicts_with("check")
                .long_help(
                    "Let ESLint apply its auto-fixes after Prettier has formatted each file.
Anything ESLint cannot fix is still listed as a manual fix.
",
                ),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .short('c')
                .action(ArgAction::SetTrue)
                .long_help(
                    "Only report problems. Prettier is not run and no file is modified.
",
                ),
        )
        .arg(
            Arg::new("no-sound")
                .long("no-sound")
                .action(ArgAction::SetTrue)
                .long_help("Disable audio notifications.\n"),
        )
        .arg(
            Arg::new("files")
                .long("files")
                .default_value(DEFAULT_FILES)
                .long_help(
                    "A glob pattern selecting the files to process. Relative patterns are
resolved against the current working directory.

If the default pattern is used and there is no ``src`` directory, a
demonstration file is written to ``src/testFile.js`` first.
",
                ),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .long_help("Show debug output, including each tool invocation.\n"),
        )
        .arg(
            Arg::new("tool-dir")
                .long("tool-dir")
                .long_help(
                    "A directory containing the ``eslint`` and ``prettier`` executables.

When not given, ``node_modules/.bin`` (relative to the working directory)
is searched first, then ``$PATH``.
",
                ),
        )
        .arg(
            Arg::new("sounds-dir")
                .long("sounds-dir")
                .long_help(
                    "The directory holding the audio cue files.

Defaults to the ``assets`` directory next to the lint-fixer executable.
",
                ),
        )
        .subcommand(
            Command::new("reset-test")
                .about("Reset the demonstration file to its initial state.")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .default_value(DEFAULT_TEST_FILE)
                        .long_help("The file to (over)write.\n"),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .action(ArgAction::SetTrue)
                        .long_help("Show debug output.\n"),
                ),
        )
}

/// How a run treats the files it visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Format each file, then list what ESLint reports without letting it fix.
    Default,
    /// Format each file, then let ESLint auto-fix.
    Fix,
    /// Lint only; nothing is written.
    Check,
}

impl Mode {
    /// Derives the mode from the `--fix` and `--check` flags.
    pub fn from_flags(fix: bool, check: bool) -> Self {
        if fix {
            Mode::Fix
        } else if check {
            Mode::Check
        } else {
            Mode::Default
        }
    }
}

/// Everything a single invocation needs to know. Built once and never modified.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    /// The glob selecting the files to process.
    pub file_pattern: String,

    /// See [`Mode`].
    pub mode: Mode,

    /// Play audio cues?
    pub sound_enabled: bool,

    /// Show debug output?
    pub verbose: bool,

    /// The directory that relative patterns (and `node_modules/.bin`) are resolved
    /// against.
    pub base_dir: PathBuf,

    /// An explicit directory to find `eslint` and `prettier` in.
    pub tool_dir: Option<PathBuf>,

    /// The directory holding the audio cue files.
    pub sounds_dir: PathBuf,
}

impl RunConfiguration {
    /// Instantiate a configuration with default settings for the given `file_pattern`.
    pub fn new(file_pattern: &str, mode: Mode, base_dir: PathBuf) -> Self {
        RunConfiguration {
            file_pattern: file_pattern.to_string(),
            mode,
            sound_enabled: true,
            verbose: false,
            sounds_dir: default_sounds_dir(&base_dir),
            base_dir,
            tool_dir: None,
        }
    }

    /// Builds the configuration from parsed CLI `args`.
    ///
    /// Relative `--tool-dir` and `--sounds-dir` values are made relative to `base_dir`.
    pub fn from_matches(args: &ArgMatches, base_dir: PathBuf) -> Self {
        let file_pattern = args
            .get_one::<String>("files")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_FILES);
        let mode = Mode::from_flags(args.get_flag("fix"), args.get_flag("check"));
        let tool_dir = args
            .get_one::<String>("tool-dir")
            .filter(|dir| !dir.is_empty())
            .map(|dir| base_dir.join(dir));
        let sounds_dir = match args.get_one::<String>("sounds-dir") {
            Some(dir) => base_dir.join(dir),
            None => default_sounds_dir(&base_dir),
        };
        RunConfiguration {
            file_pattern: file_pattern.to_string(),
            mode,
            sound_enabled: !args.get_flag("no-sound"),
            verbose: args.get_flag("verbose"),
            base_dir,
            tool_dir,
            sounds_dir,
        }
    }

    /// Is this run using the default file pattern?
    pub fn uses_default_pattern(&self) -> bool {
        self.file_pattern == DEFAULT_FILES
    }
}

#[cfg(test)]
mod test {
    use std::env;
    use std::path::PathBuf;

    use clap::ArgMatches;

    use super::{
        default_sounds_dir, get_arg_parser, Mode, RunConfiguration, DEFAULT_FILES,
        DEFAULT_TEST_FILE,
    };

    fn parser_args(input: Vec<&str>) -> ArgMatches {
        let arg_parser = get_arg_parser();
        arg_parser.get_matches_from(input)
    }

    fn config_from(input: Vec<&str>) -> RunConfiguration {
        RunConfiguration::from_matches(&parser_args(input), PathBuf::from("/work"))
    }

    #[test]
    fn defaults() {
        let config = config_from(vec!["lint-fixer"]);
        assert_eq!(config.mode, Mode::Default);
        assert_eq!(config.file_pattern, DEFAULT_FILES);
        assert!(config.uses_default_pattern());
        assert!(config.sound_enabled);
        assert!(!config.verbose);
        assert!(config.tool_dir.is_none());
        assert_eq!(config.sounds_dir, default_sounds_dir(&PathBuf::from("/work")));
    }

    #[test]
    fn sounds_dir_follows_the_executable() {
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        let config = config_from(vec!["lint-fixer"]);
        assert_eq!(config.sounds_dir, exe_dir.join("assets"));
        assert!(!config.sounds_dir.starts_with("/work"));
    }

    #[test]
    fn relative_sounds_dir_is_under_base_dir() {
        let config = config_from(vec!["lint-fixer", "--sounds-dir", "media"]);
        assert_eq!(config.sounds_dir, PathBuf::from("/work/media"));
    }

    #[test]
    fn fix_mode() {
        assert_eq!(config_from(vec!["lint-fixer", "--fix"]).mode, Mode::Fix);
        assert_eq!(config_from(vec!["lint-fixer", "-f"]).mode, Mode::Fix);
    }

    #[test]
    fn check_mode() {
        assert_eq!(config_from(vec!["lint-fixer", "--check"]).mode, Mode::Check);
        assert_eq!(config_from(vec!["lint-fixer", "-c"]).mode, Mode::Check);
    }

    #[test]
    fn fix_conflicts_with_check() {
        let result = get_arg_parser().try_get_matches_from(vec!["lint-fixer", "-f", "-c"]);
        assert!(result.is_err());
    }

    #[test]
    fn options() {
        let config = config_from(vec![
            "lint-fixer",
            "--no-sound",
            "-v",
            "--files",
            "lib/**/*.mjs",
            "--tool-dir",
            "bin",
            "--sounds-dir",
            "/opt/sounds",
        ]);
        assert!(!config.sound_enabled);
        assert!(config.verbose);
        assert_eq!(config.file_pattern, "lib/**/*.mjs");
        assert!(!config.uses_default_pattern());
        assert_eq!(config.tool_dir, Some(PathBuf::from("/work/bin")));
        assert_eq!(config.sounds_dir, PathBuf::from("/opt/sounds"));
    }

    #[test]
    fn reset_test_default_file() {
        let args = parser_args(vec!["lint-fixer", "reset-test"]);
        let (name, sub_args) = args.subcommand().unwrap();
        assert_eq!(name, "reset-test");
        assert_eq!(
            sub_args.get_one::<String>("file").unwrap().as_str(),
            DEFAULT_TEST_FILE
        );
    }

    #[test]
    fn reset_test_custom_file() {
        let args = parser_args(vec!["lint-fixer", "reset-test", "-f", "demo/a.js"]);
        let (_, sub_args) = args.subcommand().unwrap();
        assert_eq!(sub_args.get_one::<String>("file").unwrap().as_str(), "demo/a.js");
    }
}

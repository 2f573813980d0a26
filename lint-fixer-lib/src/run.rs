//! This module is the native backend of the lint-fixer package.
//!
//! [`Orchestrator`] runs the formatter and the linter over each resolved file, and
//! [`run_main()`] wires it up from command line arguments.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// project specific modules/crates
use crate::cli::{get_arg_parser, Mode, RunConfiguration, DEFAULT_TEST_FILE};
use crate::common_fs::{display_path, resolve_files, write_if_changed};
use crate::demo::prepare_test_file;
use crate::error::{LintFixerError, Result};
use crate::logger::{self, end_log_group, start_log_group};
use crate::notify::{make_notifier, Notifier, SoundEvent};
use crate::tools::eslint::Eslint;
use crate::tools::prettier::Prettier;
use crate::tools::{Diagnostic, FormatEngine, LintEngine};

/// What happened to a single file.
#[derive(Debug)]
pub struct FileResult {
    /// The absolute path of the file.
    pub path: PathBuf,

    /// Did the formatter rewrite the file?
    pub formatted: bool,

    /// Did the linter rewrite the file?
    pub lint_fixed: bool,

    /// The problems left for a human to fix, in the order the linter reported them.
    pub issues_remaining: Vec<Diagnostic>,
}

impl FileResult {
    /// Was the file modified in any way?
    pub fn changed(&self) -> bool {
        self.formatted || self.lint_fixed
    }

    /// Is there anything left to fix by hand?
    pub fn manual_fix_needed(&self) -> bool {
        !self.issues_remaining.is_empty()
    }
}

/// The accumulated outcome of a run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Does any file still need a manual fix?
    pub any_manual_fix_required: bool,

    /// The number of files processed without error.
    pub files_processed: usize,

    /// The number of files that were modified.
    pub files_changed: usize,

    /// The number of files that could not be processed.
    pub files_failed: usize,
}

/// Runs the formatter and linter over the files selected by a [`RunConfiguration`].
///
/// The formatter is optional; without one, files are only linted.
pub struct Orchestrator<'a> {
    config: &'a RunConfiguration,
    formatter: Option<&'a dyn FormatEngine>,
    linter: &'a dyn LintEngine,
    notifier: &'a dyn Notifier,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        config: &'a RunConfiguration,
        formatter: Option<&'a dyn FormatEngine>,
        linter: &'a dyn LintEngine,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Orchestrator {
            config,
            formatter,
            linter,
            notifier,
        }
    }

    fn name(&self, file: &Path) -> String {
        display_path(file, &self.config.base_dir)
    }

    /// Formats `file` in place. Returns whether the file was rewritten.
    pub fn format_file(&self, file: &Path) -> Result<bool> {
        let Some(formatter) = self.formatter else {
            log::debug!("No formatter configured; skipping {}", self.name(file));
            return Ok(false);
        };
        let content = fs::read_to_string(file)?;
        let formatted = formatter.format(file, &content)?;
        let changed = write_if_changed(file, &content, &formatted)?;
        if changed {
            log::info!("✅ Prettier formatted {}", self.name(file));
            self.notifier.notify(SoundEvent::FormatApplied);
        }
        Ok(changed)
    }

    /// Lints `file`, applying the linter's fixes if `auto_fix` is true.
    ///
    /// Returns whether a manual fix is still needed.
    pub fn lint_file(&self, file: &Path, auto_fix: bool) -> Result<bool> {
        self.lint_and_report(file, auto_fix)
            .map(|(_, issues)| !issues.is_empty())
    }

    /// Does the work of [`Orchestrator::lint_file()`], returning whether the file was
    /// rewritten and the remaining issues.
    fn lint_and_report(&self, file: &Path, auto_fix: bool) -> Result<(bool, Vec<Diagnostic>)> {
        let outcome = self.linter.lint(file, auto_fix)?;
        let mut fixed = false;
        if auto_fix {
            if let Some(output) = &outcome.output {
                let content = fs::read_to_string(file)?;
                fixed = write_if_changed(file, &content, output)?;
                if fixed {
                    log::info!("✅ ESLint fixed {}", self.name(file));
                    self.notifier.notify(SoundEvent::LintFixApplied);
                }
            }
        }
        if !outcome.messages.is_empty() {
            log::warn!("⚠️ Manual fixes needed in {}", self.name(file));
            for message in &outcome.messages {
                log::warn!("{}", message.summary());
                if let Some(hint) = message.hint() {
                    log::debug!("  hint: {hint}");
                }
            }
        }
        Ok((fixed, outcome.messages))
    }

    /// Runs the passes that the configured [`Mode`] calls for on a single `file`.
    pub fn process_file(&self, file: &Path) -> Result<FileResult> {
        let name = self.name(file);
        log::debug!("Processing {}", file.to_string_lossy());
        let (formatted, (lint_fixed, issues_remaining)) = match self.config.mode {
            Mode::Check => {
                log::info!("🔍 Checking {name}");
                (false, self.lint_and_report(file, false)?)
            }
            Mode::Fix => {
                log::info!("🔧 Fixing {name}");
                (self.format_file(file)?, self.lint_and_report(file, true)?)
            }
            Mode::Default => {
                log::info!("🛠️ Formatting and listing manual fixes for {name}");
                (self.format_file(file)?, self.lint_and_report(file, false)?)
            }
        };
        Ok(FileResult {
            path: file.to_path_buf(),
            formatted,
            lint_fixed,
            issues_remaining,
        })
    }

    /// Resolves the configured pattern and processes every matching file.
    ///
    /// Only a failure to resolve files is returned as an error. A failure on any one
    /// file is logged, counted in [`RunSummary::files_failed`], and the run moves on.
    pub fn run(&self) -> Result<RunSummary> {
        let files = resolve_files(&self.config.file_pattern, &self.config.base_dir)?;
        Ok(self.process_files(&files))
    }

    /// Processes already resolved `files` in order, then logs (and sounds) the summary.
    pub fn process_files(&self, files: &[PathBuf]) -> RunSummary {
        log::info!(
            "🔍 {} file(s) match {}",
            files.len(),
            self.config.file_pattern
        );

        let mut summary = RunSummary::default();
        let mut attention_played = false;
        for file in files {
            start_log_group(format!("Processing {}", self.name(file)));
            match self.process_file(file) {
                Ok(result) => {
                    summary.files_processed += 1;
                    if result.changed() {
                        summary.files_changed += 1;
                    }
                    let manual_fix = result.manual_fix_needed();
                    summary.any_manual_fix_required |= manual_fix;
                    if self.config.mode != Mode::Check
                        && (result.changed() || manual_fix)
                        && !attention_played
                    {
                        self.notifier.notify(SoundEvent::Attention);
                        attention_played = true;
                    }
                    if !result.changed() && !manual_fix {
                        log::info!("✅ Nothing to fix in {}", self.name(&result.path));
                    }
                }
                Err(e) => {
                    summary.files_failed += 1;
                    log::error!("❌ {}", e.for_file(file));
                }
            }
            end_log_group();
        }
        self.summarize(&summary);
        summary
    }

    fn summarize(&self, summary: &RunSummary) {
        log::info!(
            "Processed {} file(s): {} changed, {} failed",
            summary.files_processed,
            summary.files_changed,
            summary.files_failed
        );
        if summary.any_manual_fix_required {
            log::warn!("⚠️ Some problems still need a manual fix (listed above)");
        } else {
            log::info!("🎉 No manual fixes remain!");
            self.notifier.notify(SoundEvent::Success);
        }
    }
}

/// Handles the `reset-test` subcommand.
fn reset_test(file: &str, base_dir: &Path) -> i32 {
    log::info!("🛠️ Resetting {file}");
    match prepare_test_file(Path::new(file), base_dir) {
        Ok(_) => 0,
        Err(e) => {
            log::error!("❌ Failed to reset the test file: {e}");
            1
        }
    }
}

/// Resolves the files for `config`, builds the engines, then runs the [`Orchestrator`].
///
/// Files are resolved before any tool is looked up, so an empty pattern is reported
/// as such even where the tools are not installed.
fn lint_and_fix(config: &RunConfiguration) -> Result<RunSummary> {
    if config.uses_default_pattern() && !config.base_dir.join("src").exists() {
        log::warn!("⚠️ There is no src directory; creating one with a demonstration file");
        prepare_test_file(Path::new(DEFAULT_TEST_FILE), &config.base_dir)?;
    }
    log::info!("🔍 File pattern: {}", config.file_pattern);
    let files = resolve_files(&config.file_pattern, &config.base_dir)?;

    let tool_dir = config.tool_dir.as_deref();
    let prettier = match config.mode {
        Mode::Check => None,
        Mode::Fix | Mode::Default => Some(Prettier::new(tool_dir, &config.base_dir)?),
    };
    let eslint = Eslint::new(tool_dir, &config.base_dir)?;
    let notifier = make_notifier(config.sound_enabled, &config.sounds_dir);

    let orchestrator = Orchestrator::new(
        config,
        prettier.as_ref().map(|p| p as &dyn FormatEngine),
        &eslint,
        notifier.as_ref(),
    );
    Ok(orchestrator.process_files(&files))
}

/// This is the backend entry point for console applications.
///
/// The returned value is the process exit code: `1` if no files matched the pattern,
/// a required tool is missing, or `reset-test` could not write its file; `0`
/// otherwise. Remaining manual fixes do not affect the exit code.
pub fn run_main(args: Vec<String>) -> i32 {
    if logger::init().is_err() {
        log::debug!("Logger was already initialized");
    }

    match env::current_dir() {
        Ok(base_dir) => run_in(args, base_dir),
        Err(e) => {
            log::error!("❌ Cannot determine the working directory: {e}");
            1
        }
    }
}

/// Does the work of [`run_main()`] with `base_dir` as the working directory.
fn run_in(args: Vec<String>, base_dir: PathBuf) -> i32 {
    let arg_parser = get_arg_parser();
    let args = arg_parser.get_matches_from(args);

    if let Some(("reset-test", sub_args)) = args.subcommand() {
        logger::set_verbose(sub_args.get_flag("verbose"));
        let file = sub_args
            .get_one::<String>("file")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TEST_FILE);
        return reset_test(file, &base_dir);
    }

    let config = RunConfiguration::from_matches(&args, base_dir);
    logger::set_verbose(config.verbose);
    log::debug!("{config:?}");

    match lint_and_fix(&config) {
        Ok(_) => 0,
        Err(e @ LintFixerError::NoFilesMatched(_)) => {
            log::error!("❌ {e}. Use --files to choose the files to process.");
            1
        }
        Err(e) => {
            log::error!("❌ {e}");
            1
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};

    use tempfile::{tempdir, TempDir};

    use super::{lint_and_fix, run_in, Orchestrator, RunSummary};
    use crate::cli::{Mode, RunConfiguration, DEFAULT_TEST_FILE};
    use crate::demo::TEST_FILE_CONTENT;
    use crate::error::{LintFixerError, Result};
    use crate::notify::{Notifier, SoundEvent};
    use crate::tools::{Diagnostic, FormatEngine, LintEngine, LintOutcome};

    /// Turns single quotes into double quotes. Fails on files named `broken.js`.
    #[derive(Default)]
    struct QuoteFormatter {
        calls: RefCell<usize>,
    }

    impl FormatEngine for QuoteFormatter {
        fn format(&self, file: &Path, content: &str) -> Result<String> {
            *self.calls.borrow_mut() += 1;
            if file.ends_with("broken.js") {
                return Err(LintFixerError::Tool {
                    tool: "prettier".to_string(),
                    message: "SyntaxError: Unexpected token".to_string(),
                });
            }
            Ok(content.replace('\'', "\""))
        }
    }

    /// Requires a semicolon at the end of every statement line (auto-fixable) and
    /// forbids `var` (auto-fixable only if `fix_var` is set).
    #[derive(Default)]
    struct SemiLinter {
        fix_var: bool,
        calls: RefCell<Vec<(PathBuf, bool)>>,
    }

    impl SemiLinter {
        fn missing_semi(line: &str) -> bool {
            let trimmed = line.trim_end();
            !trimmed.is_empty()
                && !trimmed.starts_with("//")
                && !trimmed.ends_with(';')
                && !trimmed.ends_with('{')
                && !trimmed.ends_with('}')
        }

        fn fix(&self, content: &str) -> String {
            content
                .lines()
                .map(|line| {
                    let mut line = line.to_string();
                    if self.fix_var && line.starts_with("var ") {
                        line = line.replacen("var ", "let ", 1);
                    }
                    if Self::missing_semi(&line) {
                        line.push(';');
                    }
                    line + "\n"
                })
                .collect()
        }

        fn check(content: &str) -> Vec<Diagnostic> {
            let mut messages = Vec::new();
            for (index, line) in content.lines().enumerate() {
                let line_number = Some(index as u32 + 1);
                if line.starts_with("var ") {
                    messages.push(Diagnostic {
                        rule_id: Some("no-var".to_string()),
                        severity: 2,
                        message: "Unexpected var, use let or const instead.".to_string(),
                        line: line_number,
                        column: Some(1),
                    });
                }
                if Self::missing_semi(line) {
                    messages.push(Diagnostic {
                        rule_id: Some("semi".to_string()),
                        severity: 2,
                        message: "Missing semicolon.".to_string(),
                        line: line_number,
                        column: Some(line.trim_end().len() as u32 + 1),
                    });
                }
            }
            messages
        }
    }

    impl LintEngine for SemiLinter {
        fn lint(&self, file: &Path, fix: bool) -> Result<LintOutcome> {
            self.calls.borrow_mut().push((file.to_path_buf(), fix));
            let content = fs::read_to_string(file)?;
            if fix {
                let fixed = self.fix(&content);
                let messages = Self::check(&fixed);
                Ok(LintOutcome {
                    output: (fixed != content).then_some(fixed),
                    messages,
                })
            } else {
                Ok(LintOutcome {
                    output: None,
                    messages: Self::check(&content),
                })
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: RefCell<Vec<SoundEvent>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, event: SoundEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    impl RecordingNotifier {
        fn count(&self, event: SoundEvent) -> usize {
            self.events.borrow().iter().filter(|e| **e == event).count()
        }
    }

    fn setup(files: &[(&str, &str)]) -> TempDir {
        let tmp = tempdir().unwrap();
        for (name, content) in files {
            let path = tmp.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        tmp
    }

    fn config(tmp: &TempDir, mode: Mode) -> RunConfiguration {
        RunConfiguration::new("src/**/*.js", mode, tmp.path().to_path_buf())
    }

    fn read(tmp: &TempDir, name: &str) -> String {
        fs::read_to_string(tmp.path().join(name)).unwrap()
    }

    fn run_with(
        config: &RunConfiguration,
        formatter: &QuoteFormatter,
        linter: &SemiLinter,
        notifier: &RecordingNotifier,
    ) -> Result<RunSummary> {
        Orchestrator::new(config, Some(formatter), linter, notifier).run()
    }

    #[test]
    fn no_files_matched_touches_nothing() {
        let tmp = setup(&[("src/a.js", "var a = 'a'\n")]);
        let config = RunConfiguration::new("nonexistent/**/*.js", Mode::Fix, tmp.path().into());
        let (formatter, linter, notifier) = Default::default();
        let result = run_with(&config, &formatter, &linter, &notifier);
        assert!(matches!(result, Err(LintFixerError::NoFilesMatched(_))));
        assert_eq!(*formatter.calls.borrow(), 0);
        assert!(linter.calls.borrow().is_empty());
        assert!(notifier.events.borrow().is_empty());
        assert_eq!(read(&tmp, "src/a.js"), "var a = 'a'\n");
    }

    #[test]
    fn check_mode_never_writes() {
        let originals = [
            ("src/a.js", "var a = 'a'\n"),
            ("src/nested/b.js", "let b = 'b'\nfunction f() {\n  return 1\n}\n"),
            ("src/clean.js", "let c = \"c\";\n"),
        ];
        let tmp = setup(&originals);
        let config = config(&tmp, Mode::Check);
        let (formatter, linter, notifier) = Default::default();
        let summary = run_with(&config, &formatter, &linter, &notifier).unwrap();

        for (name, content) in originals {
            assert_eq!(read(&tmp, name).as_bytes(), content.as_bytes());
        }
        assert_eq!(*formatter.calls.borrow(), 0);
        assert!(linter.calls.borrow().iter().all(|(_, fix)| !fix));
        assert!(summary.any_manual_fix_required);
        assert_eq!(summary.files_processed, 3);
        assert_eq!(summary.files_changed, 0);
        assert_eq!(notifier.count(SoundEvent::Attention), 0);
        assert_eq!(notifier.count(SoundEvent::Success), 0);
    }

    #[test]
    fn fix_mode_clears_auto_fixable_issues() {
        let tmp = setup(&[("src/a.js", "let a = 'a'\nlet b = 2\n")]);
        let config = config(&tmp, Mode::Fix);
        let (formatter, linter, notifier) = Default::default();
        let summary = run_with(&config, &formatter, &linter, &notifier).unwrap();

        assert_eq!(read(&tmp, "src/a.js"), "let a = \"a\";\nlet b = 2;\n");
        let file = tmp.path().join("src/a.js");
        let remaining = linter.lint(&file, false).unwrap();
        assert!(remaining.messages.is_empty());
        assert!(!summary.any_manual_fix_required);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(notifier.count(SoundEvent::FormatApplied), 1);
        assert_eq!(notifier.count(SoundEvent::LintFixApplied), 1);
        assert_eq!(notifier.count(SoundEvent::Success), 1);
    }

    #[test]
    fn fix_mode_is_idempotent() {
        let tmp = setup(&[
            ("src/a.js", "var a = 'a'\n"),
            ("src/b.js", "let b = 'b'\nlet c = b\n"),
        ]);
        let config = config(&tmp, Mode::Fix);
        let (formatter, linter, notifier) = Default::default();
        run_with(&config, &formatter, &linter, &notifier).unwrap();
        let after_first = (read(&tmp, "src/a.js"), read(&tmp, "src/b.js"));

        let (formatter, linter, notifier) = Default::default();
        let summary = run_with(&config, &formatter, &linter, &notifier).unwrap();
        assert_eq!((read(&tmp, "src/a.js"), read(&tmp, "src/b.js")), after_first);
        assert_eq!(summary.files_changed, 0);
        assert_eq!(notifier.count(SoundEvent::FormatApplied), 0);
        assert_eq!(notifier.count(SoundEvent::LintFixApplied), 0);
    }

    #[test]
    fn var_is_reported_after_quotes_are_fixed() {
        let tmp = setup(&[("src/x.js", "var x = 'a'\n")]);
        let config = config(&tmp, Mode::Fix);
        let formatter = QuoteFormatter::default();
        let linter = SemiLinter::default();
        let notifier = RecordingNotifier::default();
        let orchestrator = Orchestrator::new(&config, Some(&formatter), &linter, &notifier);

        let file = tmp.path().join("src/x.js");
        let result = orchestrator.process_file(&file).unwrap();
        assert_eq!(read(&tmp, "src/x.js"), "var x = \"a\";\n");
        assert!(result.formatted);
        assert!(result.lint_fixed);
        assert_eq!(result.issues_remaining.len(), 1);
        assert_eq!(
            result.issues_remaining[0].rule_id.as_deref(),
            Some("no-var")
        );
        assert!(orchestrator.lint_file(&file, true).unwrap());
    }

    #[test]
    fn var_is_fixed_when_configured_as_fixable() {
        let tmp = setup(&[("src/x.js", "var x = 'a'\n")]);
        let config = config(&tmp, Mode::Fix);
        let formatter = QuoteFormatter::default();
        let linter = SemiLinter {
            fix_var: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let summary = run_with(&config, &formatter, &linter, &notifier).unwrap();
        assert_eq!(read(&tmp, "src/x.js"), "let x = \"a\";\n");
        assert!(!summary.any_manual_fix_required);
    }

    #[test]
    fn default_mode_formats_but_does_not_lint_fix() {
        let tmp = setup(&[("src/a.js", "let a = 'a'\n")]);
        let config = config(&tmp, Mode::Default);
        let (formatter, linter, notifier) = Default::default();
        let summary = run_with(&config, &formatter, &linter, &notifier).unwrap();

        assert_eq!(read(&tmp, "src/a.js"), "let a = \"a\"\n");
        assert!(linter.calls.borrow().iter().all(|(_, fix)| !fix));
        assert!(summary.any_manual_fix_required);
        assert_eq!(notifier.count(SoundEvent::LintFixApplied), 0);
        assert_eq!(notifier.count(SoundEvent::Success), 0);
    }

    #[test]
    fn failing_file_does_not_stop_the_run() {
        let tmp = setup(&[
            ("src/a.js", "let a = 1;\n"),
            ("src/broken.js", "let = ;\n"),
            ("src/c.js", "let c = 'c';\n"),
        ]);
        let config = config(&tmp, Mode::Fix);
        let (formatter, linter, notifier) = Default::default();
        let summary = run_with(&config, &formatter, &linter, &notifier).unwrap();

        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.files_processed, 2);
        assert!(!summary.any_manual_fix_required);
        assert_eq!(read(&tmp, "src/c.js"), "let c = \"c\";\n");
        assert_eq!(read(&tmp, "src/broken.js"), "let = ;\n");
        // the linter never saw the broken file because formatting failed first
        assert_eq!(linter.calls.borrow().len(), 2);
        assert_eq!(notifier.count(SoundEvent::Success), 1);
    }

    #[test]
    fn attention_plays_once_per_run() {
        let tmp = setup(&[
            ("src/a.js", "var a = 'a'\n"),
            ("src/b.js", "var b = 'b'\n"),
            ("src/c.js", "let c = 'c'\n"),
        ]);
        let config = config(&tmp, Mode::Fix);
        let (formatter, linter, notifier) = Default::default();
        run_with(&config, &formatter, &linter, &notifier).unwrap();
        assert_eq!(notifier.count(SoundEvent::Attention), 1);
        assert_eq!(notifier.events.borrow()[0], SoundEvent::FormatApplied);
    }

    #[test]
    fn clean_files_need_nothing() {
        let tmp = setup(&[("src/a.js", "let a = \"a\";\n")]);
        let config = config(&tmp, Mode::Fix);
        let (formatter, linter, notifier) = Default::default();
        let summary = run_with(&config, &formatter, &linter, &notifier).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                any_manual_fix_required: false,
                files_processed: 1,
                files_changed: 0,
                files_failed: 0,
            }
        );
        assert_eq!(*notifier.events.borrow(), vec![SoundEvent::Success]);
    }

    #[test]
    fn without_formatter_only_lints() {
        let tmp = setup(&[("src/a.js", "let a = 'a'\n")]);
        let config = config(&tmp, Mode::Fix);
        let linter = SemiLinter::default();
        let notifier = RecordingNotifier::default();
        let orchestrator = Orchestrator::new(&config, None, &linter, &notifier);
        let file = tmp.path().join("src/a.js");
        assert!(!orchestrator.format_file(&file).unwrap());
        orchestrator.run().unwrap();
        assert_eq!(read(&tmp, "src/a.js"), "let a = 'a';\n");
    }

    #[test]
    fn unmatched_pattern_is_reported_before_tools_are_sought() {
        let tmp = setup(&[("src/a.js", "let a = 1;\n")]);
        // an empty tool dir and no node_modules; resolution must fail first regardless
        let mut config = RunConfiguration::new("nonexistent/**/*.js", Mode::Fix, tmp.path().into());
        config.tool_dir = Some(tmp.path().join("no-tools-here"));
        config.sound_enabled = false;
        let result = lint_and_fix(&config);
        assert!(matches!(result, Err(LintFixerError::NoFilesMatched(p)) if p == "nonexistent/**/*.js"));
        assert_eq!(read(&tmp, "src/a.js"), "let a = 1;\n");
    }

    #[test]
    fn unmatched_pattern_exits_nonzero() {
        let tmp = setup(&[("src/a.js", "let a = 1;\n")]);
        let args = ["lint-fixer", "--no-sound", "--files", "nonexistent/**/*.js"]
            .map(String::from)
            .to_vec();
        assert_eq!(run_in(args, tmp.path().to_path_buf()), 1);
        assert_eq!(read(&tmp, "src/a.js"), "let a = 1;\n");
    }

    #[test]
    fn reset_test_overwrites_default_file() {
        let tmp = setup(&[(DEFAULT_TEST_FILE, "let already = \"fixed\";\n")]);
        let args = ["lint-fixer", "reset-test"].map(String::from).to_vec();
        assert_eq!(run_in(args, tmp.path().to_path_buf()), 0);
        assert_eq!(read(&tmp, DEFAULT_TEST_FILE), TEST_FILE_CONTENT);
    }
}

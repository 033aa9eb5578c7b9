use std::io;

use crate::{
    MultiTest,
    config::ReportConfig,
    formatter::color::{Color, ColorSetting, Style, SupportsColor, paint},
    outcome::TestResult,
};

/// Human readable, optionally colored output of results.
#[derive(Debug)]
pub struct PrettyFormatter<W: io::Write> {
    target: W,
    color_setting: ColorSetting,
    failures_only: bool,
}

impl Default for PrettyFormatter<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            color_setting: ColorSetting::default(),
            failures_only: false,
        }
    }
}

impl<W: io::Write> PrettyFormatter<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> PrettyFormatter<WithTarget> {
        PrettyFormatter {
            target: with_target,
            color_setting: self.color_setting,
            failures_only: self.failures_only,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        PrettyFormatter {
            color_setting: color_setting.into(),
            ..self
        }
    }

    /// Only list failed tests in multi test summaries.
    pub fn with_failures_only(self, failures_only: bool) -> Self {
        PrettyFormatter {
            failures_only,
            ..self
        }
    }

    pub fn with_config(self, config: &ReportConfig) -> Self {
        PrettyFormatter {
            color_setting: config.color,
            failures_only: config.failures_only,
            ..self
        }
    }

    pub fn into_target(self) -> W {
        self.target
    }
}

impl<W: io::Write + SupportsColor> PrettyFormatter<W> {
    /// Return whether this formatter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        self.color_setting.enabled_for(&self.target)
    }

    pub fn fmt_result(&mut self, result: &TestResult) -> io::Result<()> {
        let color = self.use_color();
        write_result(&mut self.target, result, color)
    }

    pub fn fmt_multi_test<S>(&mut self, multi: &MultiTest<S>) -> io::Result<()> {
        let color = self.use_color();
        write_multi_test(&mut self.target, multi, color, self.failures_only)
    }
}

fn write_status<W: io::Write + ?Sized>(
    w: &mut W,
    result: &TestResult,
    color: bool,
    indent: &str,
) -> io::Result<()> {
    let status_color = if result.failed() { Color::Red } else { Color::Green };
    writeln!(
        w,
        "{indent}TEST {} {}",
        paint(format_args!("\"{}\"", result.name), Color::BrightBlue, Style::Bold, color),
        paint(result.status_text(), status_color, Style::Bold, color),
    )?;
    if result.failed() {
        writeln!(
            w,
            "{indent}      Reason: {}",
            paint(&result.failure_detail, Color::Yellow, Style::Plain, color)
        )?;
    }
    Ok(())
}

/// Write a single result, with its failure reason on a second line.
pub fn write_result<W: io::Write + ?Sized>(
    w: &mut W,
    result: &TestResult,
    color: bool,
) -> io::Result<()> {
    write_status(w, result, color, "")
}

/// Write the summary of a multi test, one section per constructor.
pub fn write_multi_test<W: io::Write + ?Sized, S>(
    w: &mut W,
    multi: &MultiTest<S>,
    color: bool,
    failures_only: bool,
) -> io::Result<()> {
    if !multi.is_finished() {
        return writeln!(w, "Test \"{}\" is not finished.", multi.name());
    }

    writeln!(
        w,
        "{}",
        paint(
            format_args!("Summary of multi test: \"{}\"", multi.name()),
            Color::White,
            Style::Bold,
            color
        )
    )?;

    for block in multi.results_by_constructor() {
        writeln!(
            w,
            "{} Constructor {}: {} {}",
            paint("###", Color::Red, Style::Bold, color),
            block.index,
            paint(format_args!("\"{}\"", block.constructor), Color::Cyan, Style::Bold, color),
            paint("###", Color::Red, Style::Bold, color),
        )?;
        for result in block.results.iter().filter(|r| !failures_only || r.failed()) {
            write_status(w, result, color, "   ")?;
        }
    }

    let results = multi.results_flat();
    let passed = results.iter().filter(|r| r.passed()).count();
    let failed = results.iter().filter(|r| r.failed()).count();
    writeln!(w)?;
    write!(w, "test result: ")?;
    match (failed, color) {
        (0, false) => write!(w, "ok. ")?,
        (0, true) => write!(w, "{}. ", paint("ok", Color::Green, Style::Plain, true))?,
        (_, false) => write!(w, "FAILED. ")?,
        (_, true) => write!(w, "{}. ", paint("FAILED", Color::Red, Style::Plain, true))?,
    }
    writeln!(w, "{passed} passed; {failed} failed")
}

/// Render the summary of a multi test into a string.
pub fn summary<S>(multi: &MultiTest<S>, color: bool) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_multi_test(&mut buffer, multi, color, false)?;
    String::from_utf8(buffer).map_err(io::Error::other)
}

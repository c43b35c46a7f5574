use std::io::IsTerminal;

use anstyle::{AnsiColor, Effects, Style};
use depmark_resolver::{DependencyStatus, InstallEvent};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputStyle {
    Plain,
    Rich,
}

pub fn current_output_style() -> OutputStyle {
    if std::env::var_os("NO_COLOR").is_some() {
        return OutputStyle::Plain;
    }
    if std::io::stdout().is_terminal() {
        OutputStyle::Rich
    } else {
        OutputStyle::Plain
    }
}

pub fn render_status_line(style: OutputStyle, status: &str, message: &str) -> String {
    match style {
        OutputStyle::Plain => message.to_string(),
        OutputStyle::Rich => format!("{} {message}", status_badge(status)),
    }
}

pub fn render_section_header(style: OutputStyle, title: &str) -> Option<String> {
    match style {
        OutputStyle::Plain => None,
        OutputStyle::Rich => Some(colorize(section_style(), &format!("== {title} =="))),
    }
}

/// Maps an install event to a status token plus the message line. Plain
/// style prints the message verbatim, which is the wording the original
/// console output used.
pub fn format_install_event(event: &InstallEvent) -> (&'static str, String) {
    match event {
        InstallEvent::Installing { name } => ("ok", format!("Installing {name}.")),
        InstallEvent::MarkerFailed { name, error } => {
            ("err", format!("Could not install {name} ({error}), aborting."))
        }
        InstallEvent::Requires { name, dependencies } => (
            "step",
            format!(
                "In order to install {name}, we need {}.",
                format_dependency_list(dependencies)
            ),
        ),
        InstallEvent::MalformedEntry { name } => ("err", format!("{name} must be an array.")),
    }
}

fn format_dependency_list(dependencies: &[DependencyStatus]) -> String {
    dependencies
        .iter()
        .map(|dependency| {
            if dependency.already_installed {
                format!("{0} ({0} is already installed)", dependency.name)
            } else {
                dependency.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" and ")
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "ok" => "[OK]",
        "err" => "[ERR]",
        _ => "[..]",
    }
}

fn section_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightBlue.into()))
        .effects(Effects::BOLD)
}

fn colorize(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

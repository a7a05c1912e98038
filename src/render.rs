//! Rendering of a [`ReducedConfig`] into a `docker run` command line.

use crate::config::CmdLine;
use crate::diff::ReducedConfig;
use anyhow::Result;
use std::io::Write;

/// Separator used in pretty mode: line continuation plus a 4-space indent.
const PRETTY_SEPARATOR: &str = " \\\n    ";

/// POSIX shell escaping for a single token.
///
/// Matches the classic `pipes.quote` contract: an empty string becomes
/// `''`, a token made of safe characters passes through untouched, anything
/// else is wrapped in single quotes with embedded quotes spliced out as
/// `'"'"'`.
pub fn sh_quote(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }

    let safe = token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c));
    if safe {
        return token.to_string();
    }

    format!("'{}'", token.replace('\'', "'\"'\"'"))
}

fn quoted_tokens(line: &CmdLine) -> Vec<String> {
    match line {
        CmdLine::Single(value) => vec![sh_quote(value)],
        CmdLine::Multiple(values) => values.iter().map(|v| sh_quote(v)).collect(),
    }
}

/// Assemble the `docker run` command string, compact or pretty.
pub fn render_command(reduced: &ReducedConfig, pretty: bool) -> String {
    let sep = if pretty { PRETTY_SEPARATOR } else { " " };

    let mut options: Vec<String> = Vec::new();

    options.push(format!("--name {}", reduced.name));

    let mut short_options = String::new();
    if reduced.daemonized {
        short_options.push('d');
    }
    if reduced.interactive {
        short_options.push('i');
    }
    if reduced.tty {
        short_options.push('t');
    }
    if !short_options.is_empty() {
        options.push(format!("-{}", short_options));
    }

    options.push(format!("-h {}", reduced.hostname));

    for volume in &reduced.volumes {
        options.push(format!("-v {}", volume));
    }

    for port in &reduced.ports {
        options.push(format!("-p {}", port));
    }

    for device in &reduced.devices {
        options.push(format!("--device={}", device));
    }

    if let Some(restart) = &reduced.restart {
        options.push(format!("--restart={}", restart));
    }

    if reduced.privileged {
        options.push("--privileged".to_string());
    }

    for dns in &reduced.dns {
        options.push(format!("-dns={}", dns));
    }

    for port in &reduced.expose {
        options.push(format!("--expose={}", port));
    }

    for env in &reduced.environment {
        options.push(format!("-e {}", sh_quote(env)));
    }

    // The entrypoint is escaped token-wise, joined, and the joined string
    // escaped once more so it stays a single argument to --entrypoint
    if let Some(entrypoint) = &reduced.entrypoint {
        let joined = quoted_tokens(entrypoint).join(" ");
        options.push(format!("--entrypoint={}", sh_quote(&joined)));
    }

    if let Some(dir) = &reduced.working_dir {
        options.push(format!("-w {}", sh_quote(dir)));
    }

    if let Some(user) = &reduced.user {
        options.push(format!("-u {}", sh_quote(user)));
    }

    let mut command = format!(
        "docker run{}{}{}{}",
        sep,
        options.join(sep),
        sep,
        reduced.image
    );

    if let Some(cmd) = &reduced.command {
        let tokens = quoted_tokens(cmd);
        if !tokens.is_empty() {
            command.push(' ');
            command.push_str(&tokens.join(" "));
        }
    }

    command
}

/// Write one container's command block: header comment, the command itself,
/// and a trailing blank line.
pub fn write_command(reduced: &ReducedConfig, pretty: bool, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "# docker-run command for {}", reduced.name)?;
    writeln!(out, "{}", render_command(reduced, pretty))?;
    writeln!(out)?;
    Ok(())
}

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use shadecraft::{generate_ramp, render, Color, ShadeRamp, Theme, ThemeSource};
use tracing::{debug, info};

use crate::cli::{BuildArgs, CheckArgs, Command, RampArgs};

/// Executes `command` and returns what should be printed to stdout.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Build(args) => build(args),
        Command::Check(args) => check(args),
        Command::Ramp(args) => ramp(args),
    }
}

fn load(source: &Path) -> Result<Theme> {
    let theme = ThemeSource::from_file(source)
        .and_then(ThemeSource::build)
        .with_context(|| format!("failed to build theme from {}", source.display()))?;
    debug!(
        families = theme.families().len(),
        gradients = theme.gradients().len(),
        "loaded theme"
    );
    Ok(theme)
}

fn deny(theme: &Theme) -> Result<()> {
    let diagnostics = theme.diagnostics();
    if diagnostics.is_empty() {
        return Ok(());
    }
    let listing: Vec<String> = diagnostics.iter().map(|d| format!("  {}", d)).collect();
    bail!(
        "{} diagnostic(s) reported and warnings are denied:\n{}",
        diagnostics.len(),
        listing.join("\n")
    );
}

fn build(args: &BuildArgs) -> Result<String> {
    let theme = load(&args.source)?;
    if args.deny_warnings {
        deny(&theme)?;
    }

    let rendered = if args.config {
        render(&theme.config_document(), args.format)?
    } else {
        render(&theme.serialize(), args.format)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(bytes = rendered.len(), path = %path.display(), "wrote theme");
            Ok(String::new())
        }
        None => Ok(rendered),
    }
}

fn check(args: &CheckArgs) -> Result<String> {
    let theme = load(&args.source)?;
    let mut out = String::new();
    for diagnostic in theme.diagnostics() {
        out.push_str(&format!("warning: {}\n", diagnostic));
    }
    out.push_str(&format!(
        "{}: {} families, {} gradients, {} diagnostic(s)\n",
        args.source.display(),
        theme.families().len(),
        theme.gradients().len(),
        theme.diagnostics().len()
    ));
    if args.deny_warnings {
        deny(&theme)?;
    }
    Ok(out)
}

fn ramp(args: &RampArgs) -> Result<String> {
    let mut ramps: IndexMap<String, ShadeRamp> = IndexMap::new();
    for hex in &args.colors {
        let base = Color::from_hex(hex)?;
        let key = base.to_hex();
        if ramps.contains_key(&key) {
            debug!(base = %key, "skipping repeated base color");
            continue;
        }
        ramps.insert(key, generate_ramp(base));
    }
    Ok(render(&ramps, args.format)?)
}

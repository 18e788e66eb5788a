use anyhow::{Context, Result};
use barren_land::{FieldSurvey, FieldSurveyor, format_areas, image_helper, parse_rectangles};
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

/// Prints the area of every fertile region of the 400 x 600 field, smallest first.
#[derive(Parser, Debug)]
#[command(name = "field_tester", version)]
struct Cli {
    /// Barren rectangles as "x0 y0 x1 y1" groups, e.g. '{"0 292 399 307"}'.
    /// Read from stdin when omitted. Put them after `--` if one starts with a hyphen.
    rectangles: Vec<String>,

    /// Also write a PNG snapshot of the surveyed field.
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,

    /// Log survey progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("BARREN_LAND_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn read_input(cli: &Cli) -> Result<Vec<String>> {
    if !cli.rectangles.is_empty() {
        return Ok(cli.rectangles.clone());
    }

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read rectangles from stdin")?;
    tracing::debug!(bytes = text.len(), "read rectangles from stdin");
    Ok(vec![text])
}

fn save_snapshot(path: &Path, survey: &FieldSurvey) -> Result<()> {
    image_helper::save(path, survey).with_context(|| format!("Failed to save {}", path.display()))?;
    tracing::info!(path = %path.display(), regions = survey.regions.len(), "wrote field snapshot");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // --- 1. Input ---
    let input = read_input(&cli).await?;
    let surveyor = FieldSurveyor::default();
    let rectangles = parse_rectangles(&input, surveyor.config())
        .with_context(|| format!("Error parsing barren land {input:?}"))?;

    // --- 2. Survey ---
    // The survey is synchronous and CPU bound; keep it off the async workers.
    let survey = tokio::task::spawn_blocking(move || surveyor.survey(&rectangles))
        .await
        .context("Survey task failed")?;

    // --- 3. Output ---
    if let Some(path) = &cli.png {
        save_snapshot(path, &survey)?;
    }
    print!("{}", format_areas(&survey.areas));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_positional_rectangles() {
        let cli = Cli::parse_from(["field_tester", "48 192 351 207", "48 392 351 407", "--png", "out.png"]);
        assert_eq!(cli.rectangles, vec!["48 192 351 207", "48 392 351 407"]);
        assert_eq!(cli.png, Some(PathBuf::from("out.png")));
        assert!(!cli.verbose);
    }

    #[test]
    fn no_arguments_means_stdin() {
        let cli = Cli::parse_from(["field_tester", "-v"]);
        assert!(cli.rectangles.is_empty());
        assert!(cli.verbose);
    }

    #[test]
    fn snapshot_is_written_where_asked() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("field.png");
        let survey = FieldSurveyor::default().survey(&[]);

        save_snapshot(&path, &survey).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn snapshot_error_names_the_path() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("missing").join("field.png");
        let survey = FieldSurveyor::default().survey(&[]);

        let err = save_snapshot(&path, &survey).unwrap_err();
        assert!(err.to_string().contains("field.png"), "{err:#}");
    }

    #[tokio::test]
    async fn positional_input_is_used_verbatim() {
        let cli = Cli::parse_from(["field_tester", "{\"0 292 399 307\"}"]);
        let input = read_input(&cli).await.unwrap();
        assert_eq!(input, vec!["{\"0 292 399 307\"}".to_string()]);
    }
}

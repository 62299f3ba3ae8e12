use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use scripts::patcher::{
    DEFAULT_COMPONENT, DEFAULT_EXTENSIONS, DEFAULT_INSERTION, DEFAULT_MARKER,
    DEFAULT_PRESENT_TOKEN,
};
use scripts::{run, Options, PatchRule, Summary};

/// Adds `sizes="100vw"` to hero `<Image priority />` tags that don't have it.
#[derive(Parser, Debug)]
#[command(name = "optimize-hero-images")]
struct Args {
    /// Directory to scan. Defaults to the frontend next to this crate.
    #[arg(env = "HERO_PATCH_ROOT")]
    root: Option<PathBuf>,

    /// File extensions to scan (repeatable).
    #[arg(long = "ext", default_values_t = DEFAULT_EXTENSIONS.map(String::from))]
    extensions: Vec<String>,

    #[arg(long, default_value = DEFAULT_COMPONENT)]
    component: String,

    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Text inserted right after the marker attribute.
    #[arg(long = "insert", default_value = DEFAULT_INSERTION, allow_hyphen_values = true)]
    insertion: String,

    /// A tag containing this text is left alone.
    #[arg(long, default_value = DEFAULT_PRESENT_TOKEN)]
    present_token: String,

    #[arg(long)]
    dry_run: bool,
}

fn default_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend")
}

fn execute(args: Args) -> anyhow::Result<Summary> {
    let rule = PatchRule::new(args.component, args.marker, args.insertion, args.present_token)
        .context("Invalid patch rule")?;
    let options = Options {
        root: args.root.unwrap_or_else(default_root),
        extensions: args.extensions,
        rule,
        dry_run: args.dry_run,
    };

    let verb = if options.dry_run { "Would update" } else { "Updated" };
    let summary = run(&options, |rel| println!("{}: {}", verb, rel))
        .with_context(|| format!("Failed to scan {}", options.root.display()))?;
    Ok(summary)
}

fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match execute(args) {
        Ok(summary) => {
            println!("Done. Updated {} file(s).", summary.modified);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_build_the_hero_image_rule() {
        let args = Args::try_parse_from(["optimize-hero-images", "/tmp/site"]).unwrap();

        assert_eq!(args.extensions, vec!["jsx".to_string(), "tsx".to_string()]);
        assert_eq!(args.insertion, " sizes=\"100vw\"");

        let rule = PatchRule::new(args.component, args.marker, args.insertion, args.present_token)
            .unwrap();
        let patched = scripts::patch_content(&rule, "<Image src=\"/a.webp\" priority />");
        assert_eq!(patched.content, "<Image src=\"/a.webp\" priority sizes=\"100vw\" />");
    }
}

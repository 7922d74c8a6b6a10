use clap::Parser;
use favicon_generator::{GenerateOptions, config, generate, output};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Called once by clap at startup.
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "favicon-generator")]
#[command(about = "Get favicon files from a jpg or png and a snippet of HTML to embed them")]
#[command(long_about = "\
Get favicon files from a jpg or png and a snippet of HTML to embed them

The source must be a square .jpg, .jpeg or .png of at least 512x512.
Icons keep the source format and land next to the source unless -o is given:

  <output>/
  ├── favicon-32x32.png            # <link rel=\"icon\">
  ├── favicon-48x48.png            # apple-touch-icon + manifest
  ├── ...
  ├── favicon-512x512.png
  └── manifest.webmanifest         # icons with ?v=<content hash>

The <link> tags are printed to stdout; diagnostics go to stderr.

Run 'favicon-generator --gen-config' to print a documented config file.")]
#[command(version = version_string())]
struct Cli {
    /// *.png, *.jpg, *.jpeg image file
    #[arg(required_unless_present = "gen_config")]
    file: Option<PathBuf>,

    /// Output directory (defaults to the directory of <file>)
    #[arg(short, long, value_name = "DIRECTORY")]
    output: Option<PathBuf>,

    /// Your app name (manifest `name`). Also accepted as -ap
    #[arg(long, value_name = "NAME")]
    app_name: Option<String>,

    /// Your app short name (manifest `short_name`). Also accepted as -sn
    #[arg(long, value_name = "NAME")]
    short_name: Option<String>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Max parallel encoders (overrides processing.max_processes)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print a stock config file with all options documented
    #[arg(long)]
    gen_config: bool,
}

/// Two-letter short flags clap cannot express, mapped to their long forms.
const LEGACY_FLAGS: &[(&str, &str)] = &[("-ap", "--app-name"), ("-sn", "--short-name")];

/// Rewrite `-ap X` / `-ap=X` (and `-sn`) into long flags before clap sees
/// them. Arguments after `--` are left alone.
fn normalize_legacy_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                passthrough = true;
                return None;
            }
            LEGACY_FLAGS.iter().find_map(|(short, long)| {
                if s == *short {
                    Some(OsString::from(*long))
                } else {
                    s.strip_prefix(short)
                        .and_then(|rest| rest.strip_prefix('='))
                        .map(|value| OsString::from(format!("{long}={value}")))
                }
            })
        });
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let mut settings = config::load_config(cli.config.as_deref())?;
    if let Some(jobs) = cli.jobs {
        settings.processing.max_processes = Some(jobs);
        settings.validate()?;
    }
    init_thread_pool(&settings.processing);

    let input = cli.file.ok_or("missing <file> argument")?;
    let options = GenerateOptions {
        input,
        output_dir: cli.output,
        app_name: cli.app_name,
        short_name: cli.short_name,
        quality: settings.images.quality(),
    };

    let result = generate(&options)?;
    output::log_report(&result);
    output::print_links(&result);
    Ok(())
}

/// Log to stderr; stdout is reserved for the snippet.
fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    log::debug!("using {} encoder thread(s)", threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

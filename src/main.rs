use clap::Parser;
use quilt::collage::{self, CollageError, CollageRequest};
use quilt::imaging::{Quality, RustBackend};
use quilt::{output, sources};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once at startup — trivial, called exactly once
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "quilt")]
#[command(about = "Compose a batch of images into a single grid collage")]
#[command(long_about = "\
Compose a batch of images into a single grid collage

Every readable input becomes one thumbnail in a grid, in argument order.
The grid shape is chosen automatically to stay close to 16:9 with as few
empty cells as possible, and the thumbnail size follows the batch's median
aspect ratio. Unreadable inputs are skipped with a diagnostic; the collage
is built from whatever remains.

Inputs may be image files or directories; a directory is searched
recursively for supported images (jpg, jpeg, png, tif, tiff, webp).
Wildcards are expanded by your shell as usual.

Exit status: 0 on success, 1 when no input yielded a usable image,
2 when the final write fails.")]
#[command(version = version_string())]
struct Cli {
    /// Source images, or directories to search for images
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (always JPEG-encoded)
    #[arg(long, default_value = "collage.jpg")]
    output: PathBuf,

    /// Maximum collage width in pixels
    #[arg(long, default_value_t = 3840)]
    width: u32,

    /// Maximum collage height in pixels
    #[arg(long, default_value_t = 2160)]
    height: u32,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 95)]
    quality: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let paths = sources::expand_inputs(&cli.inputs);
    let request = CollageRequest {
        max_width: cli.width,
        max_height: cli.height,
        output: cli.output,
        quality: Quality::new(cli.quality),
    };

    let backend = RustBackend::new();
    match collage::build_collage(&backend, &paths, &request) {
        Ok(report) => {
            output::print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_failure(&err);
            match err {
                CollageError::NoValidImages { .. } | CollageError::NothingToComposite { .. } => {
                    ExitCode::from(1)
                }
                CollageError::Backend(_) => ExitCode::from(2),
            }
        }
    }
}

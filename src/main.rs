mod compose;
mod error;
mod layout;
mod naming;
mod output;
mod source;
mod timer;

use crate::{
    error::MergeResult,
    layout::Layout,
    timer::Timer,
};

use clap::Parser;

use std::path::PathBuf;

/// Merge two still images into one side-by-side or over-under 3D image.
///
/// Portrait images are placed next to each other and tagged _3DHF, anything
/// else is stacked and tagged _3DVF, so 3D viewers pick the right mode.
#[derive(Parser, Debug)]
#[command(
    author, version, about,
    after_help = "Example: vrmerge scene_left.jpg scene_right.jpg scenery\n\
                  This writes scenery_3DHF.jpg or scenery_3DVF.jpg as necessary."
)]
struct Args {
    /// Left (or top) eye
    first: PathBuf,
    /// Right (or bottom) eye, same format as the first
    second: PathBuf,
    /// Output name; the extension is optional and gets replaced
    output: PathBuf,
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    run(&args).vital("vrmerge");
}

fn run(args: &Args) -> MergeResult<PathBuf>{
    let mut timer = Timer::new();

    let first = source::load(&args.first)?;
    let second = source::load(&args.second)?;
    timer.lap("Decode");

    let format = source::ensure_same_format(&first, &second)?;

    let (w1, h1) = first.dims();
    let (w2, h2) = second.dims();
    println!("Loaded Image 1: ({w1} x {h1})");
    println!("Loaded Image 2: ({w2} x {h2})");

    let layout = Layout::plan(first.dims(), second.dims())?;
    let target = naming::output_path(&args.output, layout.orientation, format)?;

    println!("Combining {}", layout.orientation.describe());
    println!("Final Image Dimensions: ({} x {})", layout.width, layout.height);

    let canvas = compose::compose(&layout, &first.image, &second.image);
    timer.lap("Compose");

    let written = output::save(canvas, format, &target)?;
    timer.lap("Encode");
    log::debug!("{} bytes of {} in {:?}ms", written, format, timer.total().as_millis());

    println!("Created {}", target.display());
    Ok(target)
}

trait Vital<T> {
    fn vital(self, msg: &str) -> T;
}

impl<T, U: std::fmt::Display> Vital<T> for Result<T, U> {
    fn vital(self, msg: &str) -> T {
        match self {
            Ok(res) => res,
            Err(err) => {
                eprintln!("{msg}: {err}");
                std::process::exit(1);
            },
        }
    }
}

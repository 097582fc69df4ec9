use argh::FromArgs;
use std::path::PathBuf;

use upsharp::imgproc::enhance::enhance;
use upsharp::imgproc::resample::ScaleFactor;
use upsharp::io::functional as F;
use upsharp::io::png::write_image_png_rgba8;

#[derive(FromArgs)]
/// Upscale an image by an integer factor and sharpen its edges
struct Args {
    /// path to an input image (png, jpeg or webp)
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// integer scale factor between 2 and 4
    #[argh(option, short = 's', default = "2")]
    scale: u32,

    /// path for the output png, defaults to enhanced-<scale>x.png
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let scale = ScaleFactor::new(args.scale)?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("enhanced-{}x.png", scale.get())));

    // read the image
    let image = F::read_image_any_rgba8(&args.input)?;
    log::info!(
        "loaded {} ({}x{})",
        args.input.display(),
        image.width(),
        image.height()
    );

    // upscale and sharpen
    let start = std::time::Instant::now();
    let enhanced = enhance(&image, scale)?;
    log::info!(
        "enhanced to {}x{} in {:?}",
        enhanced.width(),
        enhanced.height(),
        start.elapsed()
    );

    // write the result
    write_image_png_rgba8(&output, &enhanced)?;
    log::info!("wrote {}", output.display());

    Ok(())
}

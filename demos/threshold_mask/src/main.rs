use argh::FromArgs;
use std::{fs::File, io::BufReader, path::PathBuf};

use cspace_image::{Image, ImageSize};
use cspace_imgproc::color;
use cspace_thresh::{
    ExecutionStrategy, MaskExt, SliderPositions, ThresholdOptions, ThresholdRequest,
};

#[derive(FromArgs)]
/// Threshold an image in a colorspace and save the binary mask
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// colorspace to threshold in: BGR, HSV, HLS, Lab, Luv, YCrCb, XYZ or Gray
    #[argh(option, short = 'c', default = "String::from(\"HSV\")")]
    colorspace: String,

    /// six comma separated slider positions, e.g. 0,100,0,100,0,100
    #[argh(
        option,
        short = 's',
        default = "SliderPositions::full_range()",
        from_str_fn(parse_sliders)
    )]
    sliders: SliderPositions,

    /// JSON file with the colorspace and sliders, overrides -c and -s
    #[argh(option)]
    config: Option<PathBuf>,

    /// path to write the mask to
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// process image rows in parallel
    #[argh(switch)]
    parallel: bool,
}

fn parse_sliders(value: &str) -> Result<SliderPositions, String> {
    let positions = value
        .split(',')
        .map(|v| v.trim().parse::<i32>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    SliderPositions::try_from(positions.as_slice()).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let request = match &args.config {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => ThresholdRequest {
            colorspace: args.colorspace.clone(),
            sliders: args.sliders,
        },
    };

    let strategy = if args.parallel {
        ExecutionStrategy::ParallelRows
    } else {
        ExecutionStrategy::Serial
    };

    // read the image and reorder it as BGR
    let rgb8 = image::open(&args.image_path)?.to_rgb8();
    let size = ImageSize {
        width: rgb8.width() as usize,
        height: rgb8.height() as usize,
    };
    let rgb = Image::<u8, 3>::new(size, rgb8.into_raw())?;
    let mut bgr = Image::<u8, 3>::from_size_val(size, 0)?;
    color::bgr_from_rgb(&rgb, &mut bgr, strategy)?;

    let out = request.run(&bgr, &ThresholdOptions { strategy })?;

    log::info!(
        "{}: lower {:?} upper {:?}, {} of {} pixels in range",
        out.label,
        out.lowerb,
        out.upperb,
        out.mask.count_nonzero(),
        size.width * size.height,
    );

    let mask = image::GrayImage::from_raw(
        size.width as u32,
        size.height as u32,
        out.mask.into_vec(),
    )
    .ok_or("mask does not match the image size")?;
    mask.save(&args.output)?;

    log::info!("mask written to {}", args.output.display());

    Ok(())
}

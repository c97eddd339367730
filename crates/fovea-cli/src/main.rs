use std::path::PathBuf;

use argh::FromArgs;
use serde::Serialize;

use fovea::image::{Image, ImageSize};
use fovea::imgproc::features::{
    extract_color_layout, extract_texture, format_svm_line, to_svm_nodes, DEFAULT_GRID_SIZE,
    DEFAULT_SCALES, DEFAULT_THRESHOLD_STEPS,
};
use fovea::imgproc::resize::{resize_fast, ResizeFilter};
use fovea::io::functional as F;
use fovea::io::ppm::write_image_ppm;

/// Width images are rescaled to before descriptor extraction.
const DEFAULT_WORKING_WIDTH: usize = 300;

#[derive(FromArgs)]
/// Extract the color layout and texture descriptors of an image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// width the working image is rescaled to, keeping the aspect ratio
    #[argh(option, short = 'w', default = "DEFAULT_WORKING_WIDTH")]
    working_width: usize,

    /// output format: svm, plain or json
    #[argh(option, short = 'f', default = "String::from(\"svm\")")]
    format: String,

    /// label prepended to the svm output line
    #[argh(option, short = 'l', default = "0")]
    label: i32,

    /// write the working image to this path as plain text PPM
    #[argh(option)]
    dump_ppm: Option<PathBuf>,
}

#[derive(Serialize)]
struct DescriptorRecord<'a> {
    path: &'a str,
    label: i32,
    color_layout: &'a [f64],
    texture: &'a [f64],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image
    let image: Image<u8, 3> = F::read_image_any_rgb8(&args.image_path)?;
    log::info!("loaded {} as {}", args.image_path.display(), image.size());

    // rescale to the working width, truncating the scaled height
    let factor = args.working_width as f64 / image.width() as f64;
    let working_size = ImageSize {
        width: args.working_width,
        height: (image.height() as f64 * factor) as usize,
    };
    let mut working = Image::from_size_val(working_size, 0)?;
    resize_fast(&image, &mut working, ResizeFilter::CatmullRom)?;

    if let Some(path) = &args.dump_ppm {
        write_image_ppm(path, &working)?;
        log::info!("dumped the working image to {}", path.display());
    }

    let color_layout = extract_color_layout(&working, DEFAULT_GRID_SIZE)?;
    let texture = extract_texture(&working, DEFAULT_THRESHOLD_STEPS, &DEFAULT_SCALES)?;
    log::info!(
        "extracted {} color layout and {} texture features",
        color_layout.len(),
        texture.len()
    );

    match args.format.as_str() {
        "svm" => {
            let nodes = to_svm_nodes(&[&color_layout, &texture]);
            println!("{}", format_svm_line(args.label, &nodes));
        }
        "plain" => {
            let values: Vec<String> = color_layout
                .iter()
                .chain(texture.iter())
                .map(|v| format!("{v:.6}"))
                .collect();
            println!("{}", values.join(" "));
        }
        "json" => {
            let path = args.image_path.to_string_lossy();
            let record = DescriptorRecord {
                path: &path,
                label: args.label,
                color_layout: &color_layout,
                texture: &texture,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
        other => return Err(format!("unknown output format: {other}").into()),
    }

    Ok(())
}

use std::path::Path;

use fovea_image::Image;

use crate::error::IoError;

/// Writes an RGB8 image as a plain text PPM (P3) file.
///
/// The output is the plain variant of the format: a `P3` header line, a line
/// with the width and height, the maximum sample value `255`, then one
/// `R G B` triple per line. Intended for quick visual inspection of
/// intermediate pipeline images; binary formats are better for anything else.
///
/// # Arguments
///
/// * `file_path` - The path to write the PPM file to.
/// * `image` - The image to write.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    // each sample renders to at most 4 bytes including its separator
    let mut out = String::with_capacity(16 + image.as_slice().len() * 4);
    out.push_str("P3\n");
    out.push_str(&format!("{} {}\n255\n", image.cols(), image.rows()));
    for pixel in image.as_slice().chunks_exact(3) {
        out.push_str(&format!("{} {} {}\n", pixel[0], pixel[1], pixel[2]));
    }

    std::fs::write(file_path, out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use fovea_image::{Image, ImageSize};

    #[test]
    fn write_ppm_exact_text() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("tiny.ppm");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10, 20, 30, 0, 128, 255],
        )?;

        super::write_image_ppm(&file_path, &image)?;

        let text = std::fs::read_to_string(&file_path)?;
        assert_eq!(text, "P3\n2 1\n255\n10 20 30\n0 128 255\n");

        Ok(())
    }
}

use std::error::Error;
use std::path::Path;

use image::RgbImage;

use crate::film::Film;
use crate::math::Color;

fn channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Compose each cell's displayable color via `shaded` and save the buffer.
/// The format comes from the file extension; `.bmp` and `.png` both work.
pub fn write_image<P: AsRef<Path>>(film: &Film<Color>, path: P) -> Result<(), Box<dyn Error>> {
    let mut img = RgbImage::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = film.at(x as usize, y as usize).shaded();
        *pixel = image::Rgb([channel(color.r), channel(color.g), channel(color.b)]);
    }
    img.save(path)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_channel_clamps_out_of_domain_values() {
        assert_eq!(channel(-5), 0);
        assert_eq!(channel(0), 0);
        assert_eq!(channel(255), 255);
        assert_eq!(channel(300), 255);
    }

    #[test]
    fn test_write_bmp() {
        let film = Film::new(4, 4, Color::new(255, 0, 0, 0.5));
        let path = std::env::temp_dir().join("lustre_write_test.bmp");
        write_image(&film, &path).expect("failed to write image");
        let img = image::open(&path).expect("failed to read image back");
        assert_eq!(img.to_rgb8().get_pixel(0, 0), &image::Rgb([128, 0, 0]));
        let _ = std::fs::remove_file(&path);
    }
}

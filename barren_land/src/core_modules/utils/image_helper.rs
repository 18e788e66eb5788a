pub mod image_helper {
    use crate::survey::FieldSurvey;
    use image::ImageEncoder;
    use std::path::Path;

    pub const BARREN_COLOR: [u8; 4] = [92, 64, 51, 255];

    /// A stable, distinct-ish colour for the fertile region with the given id.
    pub fn region_color(id: u32) -> [u8; 4] {
        // Golden-angle hue steps keep neighbouring ids apart.
        let hue = (id as f32 * 137.508) % 360.0;
        let (r, g, b) = hsv_to_rgb(hue, 0.55, 0.85);
        [r, g, b, 255]
    }

    fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (u8, u8, u8) {
        let c = value * saturation;
        let h = hue / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = value - c;
        let to_byte = |v: f32| ((v + m) * 255.0).round() as u8;
        (to_byte(r), to_byte(g), to_byte(b))
    }

    /// Paints the surveyed field as an RGBA buffer, one pixel per cell.
    /// Row 0 of the buffer is the top of the field (`y = height - 1`).
    pub fn render(survey: &FieldSurvey) -> Vec<u8> {
        let width = survey.config.width as usize;
        let height = survey.config.height as usize;
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let mut buffer = vec![0u8; width * height * 4];

        for (row, pixels) in buffer.chunks_mut(width * 4).enumerate() {
            let y = height - 1 - row;
            for (x, pixel) in pixels.chunks_mut(4).enumerate() {
                let color = match survey.labels[y * width + x] {
                    Some(id) => region_color(id),
                    None => BARREN_COLOR,
                };
                pixel.copy_from_slice(&color);
            }
        }

        buffer
    }

    /// Writes the rendered field to `path` as a PNG.
    pub fn save(path: impl AsRef<Path>, survey: &FieldSurvey) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(path.as_ref())?;
        let encoder = image::codecs::png::PngEncoder::new(std::io::BufWriter::new(output));

        encoder.write_image(
            &render(survey),
            survey.config.width,
            survey.config.height,
            image::ExtendedColorType::Rgba8,
        )?;

        tracing::debug!(path = %path.as_ref().display(), "saved field snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::*;
    use crate::core_modules::plot::Rectangle;
    use crate::survey::{FieldConfig, FieldSurveyor};
    use pretty_assertions::assert_eq;

    #[test]
    fn region_colors_are_opaque_and_differ() {
        let first = region_color(0);
        let second = region_color(1);
        assert_eq!(first[3], 255);
        assert_ne!(first, second);
        assert_ne!(first, BARREN_COLOR);
    }

    #[test]
    fn render_flips_rows_so_y_grows_upwards() {
        let surveyor = FieldSurveyor::new(FieldConfig { width: 3, height: 2 });
        // Bottom row barren, top row fertile.
        let survey = surveyor.survey(&[Rectangle::from_corners(0, 0, 2, 0)]);
        let buffer = render(&survey);

        assert_eq!(buffer.len(), 3 * 2 * 4);
        assert_eq!(&buffer[0..4], &region_color(0));
        assert_eq!(&buffer[12..16], &BARREN_COLOR);
        assert_eq!(&buffer[20..24], &BARREN_COLOR);
    }

    #[test]
    fn empty_field_renders_no_pixels() {
        for config in [FieldConfig { width: 0, height: 5 }, FieldConfig { width: 5, height: 0 }] {
            let survey = FieldSurveyor::new(config).survey(&[]);
            assert!(survey.regions.is_empty());
            assert!(render(&survey).is_empty());
        }
    }

    #[test]
    fn save_split_field() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("split_field.png");
        let survey = FieldSurveyor::default().survey(&[Rectangle::from_corners(0, 292, 399, 307)]);

        save(&path, &survey).expect("Error Saving File.");

        let image = image::open(&path).expect("Error Reading File.").to_rgba8();
        assert_eq!(image.dimensions(), (400, 600));
        // Pixel row 0 is field row 599, which belongs to the upper band (region 1).
        assert_eq!(image.get_pixel(0, 0).0, region_color(1));
        assert_eq!(image.get_pixel(0, 599 - 300).0, BARREN_COLOR);
        assert_eq!(image.get_pixel(399, 599).0, region_color(0));
    }
}

use super::Image;

/// Quarter turn clockwise. A `w`x`h` image becomes `h`x`w`.
///
/// Output dot `(x, y)` is taken from input dot `(y, h - 1 - x)`.
pub fn rotate_clockwise<T: Copy>(image: &Image<T>) -> Image<T> {
    let (width, height) = (image.width, image.height);
    let mut dots = Vec::with_capacity(image.dots.len());
    for row_index in 0..width {
        for column_index in 0..height {
            dots.push(image.dot(row_index, height - 1 - column_index));
        }
    }
    Image {
        width: height,
        height: width,
        dots,
    }
}

#[cfg(test)]
mod test {
    use image::{imageops, Rgb, RgbImage};

    use super::rotate_clockwise;
    use crate::image::Image;

    #[rustfmt::skip]
    const LANDSCAPE: &[u16] = &[
        1, 2, 3,
        4, 5, 6,
    ];

    #[rustfmt::skip]
    const PORTRAIT: &[u16] = &[
        4, 1,
        5, 2,
        6, 3,
    ];

    #[test]
    fn rotate_small_image() {
        let image = Image::new(3, 2, Vec::from(LANDSCAPE)).expect("size matches");
        let rotated = rotate_clockwise(&image);
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(rotated.dots(), PORTRAIT);
    }

    #[test]
    fn canvas_dimensions_are_swapped() {
        let rotated = rotate_clockwise(&Image::filled(240, 135, 0u16));
        assert_eq!(rotated.width(), 135);
        assert_eq!(rotated.height(), 240);
    }

    #[test]
    fn four_quarter_turns_restore_the_image() {
        let dots = (0..7 * 5).collect::<Vec<u32>>();
        let image = Image::new(7, 5, dots).expect("size matches");
        let mut rotated = rotate_clockwise(&image);
        assert_ne!(rotated.dots(), image.dots());
        for _ in 0..3 {
            rotated = rotate_clockwise(&rotated);
        }
        assert_eq!(rotated, image);
    }

    #[test]
    fn agrees_with_image_crate_rotation() {
        let source = RgbImage::from_fn(6, 4, |x, y| Rgb([x as u8, y as u8, (x * y) as u8]));
        let expected = imageops::rotate90(&source);
        let rotated = rotate_clockwise(&Image::from(&source));
        assert_eq!(RgbImage::from(&rotated), expected);
    }
}

use crate::*;
use image::RgbImage;
use image::imageops::FilterType;
use ndarray::Array4;

/// A raw capture, any resolution.
#[derive(Debug, Clone)]
pub struct Frame(RgbImage);

impl Frame {
    pub fn width(&self) -> u32 {
        self.0.width()
    }
    pub fn height(&self) -> u32 {
        self.0.height()
    }
    pub fn image(&self) -> &RgbImage {
        &self.0
    }
    /// Uniform black frame.
    pub fn blank(width: u32, height: u32) -> Self {
        Self(RgbImage::new(width, height))
    }
}

impl From<RgbImage> for Frame {
    fn from(image: RgbImage) -> Self {
        Self(image)
    }
}

/// Classifier input: a batch of one `IMAGE_SIZE x IMAGE_SIZE x CHANNELS`
/// image, channels scaled to roughly [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor(Array4<f32>);

impl Tensor {
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }
    pub fn array(&self) -> &Array4<f32> {
        &self.0
    }
    /// Pixel value at row `y`, column `x`, channel `c`.
    pub fn at(&self, y: usize, x: usize, c: usize) -> f32 {
        self.0[[0, y, x, c]]
    }
}

impl From<&Frame> for Tensor {
    /// Resize to the model's input size, then apply `x / 127 - 1`.
    fn from(frame: &Frame) -> Self {
        let side = IMAGE_SIZE as u32;
        let resized = image::imageops::resize(frame.image(), side, side, FilterType::Triangle);
        Self(Array4::from_shape_fn(
            (1, IMAGE_SIZE, IMAGE_SIZE, CHANNELS),
            |(_, y, x, c)| resized.get_pixel(x as u32, y as u32)[c] as f32 / PIXEL_SCALE - 1.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_matches_model_input() {
        let tensor = Tensor::from(&Frame::blank(640, 480));
        assert_eq!(tensor.shape(), &[1, IMAGE_SIZE, IMAGE_SIZE, CHANNELS]);
    }
    #[test]
    fn black_maps_to_minus_one() {
        let tensor = Tensor::from(&Frame::blank(32, 32));
        assert!(tensor.array().iter().all(|v| *v == -1.0));
    }
    #[test]
    fn white_maps_just_above_one() {
        let white = RgbImage::from_pixel(300, 300, image::Rgb([255, 255, 255]));
        let tensor = Tensor::from(&Frame::from(white));
        let expected = 255.0 / PIXEL_SCALE - 1.0;
        assert!(tensor.array().iter().all(|v| (*v - expected).abs() < 1e-6));
    }
    #[test]
    fn channels_stay_in_order() {
        let red = RgbImage::from_pixel(IMAGE_SIZE as u32, IMAGE_SIZE as u32, image::Rgb([254, 0, 127]));
        let tensor = Tensor::from(&Frame::from(red));
        assert!((tensor.at(10, 10, 0) - 1.0).abs() < 1e-6);
        assert!((tensor.at(10, 10, 1) + 1.0).abs() < 1e-6);
        assert!(tensor.at(10, 10, 2).abs() < 1e-6);
    }
}

use super::*;
use crate::*;
use ndarray::Array1;
use ndarray::Axis;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Pre-trained nearest-centroid gesture model.
///
/// The image is average-pooled into a `grid x grid` mosaic of colors and
/// compared against one reference mosaic per class. Closer centroids get
/// more mass under a softmax of negative mean squared distance.
///
/// The model file is produced elsewhere. This type only loads and runs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centroids {
    grid: usize,
    temperature: f32,
    centroids: Vec<Vec<f32>>,
}

impl Centroids {
    pub fn new(grid: usize, temperature: f32, centroids: Vec<Vec<f32>>) -> Result<Self, Fault> {
        let model = Self {
            grid,
            temperature,
            centroids,
        };
        model.validate()?;
        Ok(model)
    }
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Fault> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| Fault::Classifier(format!("{}: {}", path.display(), e)))?;
        let model = serde_json::from_reader::<_, Self>(std::io::BufReader::new(file))
            .map_err(|e| Fault::Classifier(format!("{}: {}", path.display(), e)))?;
        model.validate()?;
        log::info!("loaded {}x{} centroid model from {}", model.grid, model.grid, path.display());
        Ok(model)
    }
    pub fn grid(&self) -> usize {
        self.grid
    }
    /// Feature vector length: one color per grid cell.
    pub fn dimension(&self) -> usize {
        self.grid * self.grid * CHANNELS
    }
    /// Average-pool the tensor into a flat `(row, column, channel)` mosaic.
    pub fn features(&self, tensor: &Tensor) -> Array1<f32> {
        let cell = IMAGE_SIZE / self.grid;
        tensor
            .array()
            .index_axis(Axis(0), 0)
            .exact_chunks((cell, cell, CHANNELS))
            .into_iter()
            .flat_map(|chunk| {
                let n = (cell * cell) as f32;
                (0..CHANNELS)
                    .map(|c| chunk.index_axis(Axis(2), c).sum() / n)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn validate(&self) -> Result<(), Fault> {
        if self.grid == 0 || IMAGE_SIZE % self.grid != 0 {
            return Err(Fault::Classifier(format!(
                "grid {} does not divide {}",
                self.grid, IMAGE_SIZE
            )));
        }
        if !(self.temperature > 0.) {
            return Err(Fault::Classifier(format!(
                "temperature must be positive, got {}",
                self.temperature
            )));
        }
        if self.centroids.len() != CLASSES {
            return Err(Fault::Classifier(format!(
                "expected {} centroids, got {}",
                CLASSES,
                self.centroids.len()
            )));
        }
        if let Some(bad) = self.centroids.iter().find(|c| c.len() != self.dimension()) {
            return Err(Fault::Classifier(format!(
                "centroid has {} features, expected {}",
                bad.len(),
                self.dimension()
            )));
        }
        Ok(())
    }
}

impl Classifier for Centroids {
    fn classify(&mut self, tensor: &Tensor) -> Result<Reading, Fault> {
        let features = self.features(tensor);
        let logits = self
            .centroids
            .iter()
            .map(|centroid| {
                let distance = features
                    .iter()
                    .zip(centroid.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f32>()
                    / self.dimension() as f32;
                -distance / self.temperature
            })
            .collect::<Vec<_>>();
        let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let exps = logits.iter().map(|l| (l - max).exp()).collect::<Vec<_>>();
        let total = exps.iter().sum::<f32>();
        if !total.is_finite() || total <= 0. {
            return Err(Fault::Classifier(String::from("degenerate distribution")));
        }
        let mut weights = [0.; CLASSES];
        for (w, e) in weights.iter_mut().zip(exps) {
            *w = e / total;
        }
        Ok(Reading::from(weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::*;
    use image::Rgb;
    use image::RgbImage;

    fn solid(value: f32, dimension: usize) -> Vec<f32> {
        vec![value; dimension]
    }
    fn model() -> Centroids {
        let d = 2 * 2 * CHANNELS;
        Centroids::new(
            2,
            0.05,
            vec![solid(-1., d), solid(0., d), solid(1., d), solid(0.5, d)],
        )
        .expect("valid model")
    }
    fn frame(value: u8) -> Tensor {
        Tensor::from(&Frame::from(RgbImage::from_pixel(64, 64, Rgb([value; 3]))))
    }

    #[test]
    fn black_frame_reads_rock() {
        let reading = model().classify(&frame(0)).expect("classify");
        assert_eq!(reading.gesture(), Gesture::Throw(Choice::Rock));
        assert!(reading.confidence() > 0.9);
    }
    #[test]
    fn gray_frame_reads_paper() {
        let reading = model().classify(&frame(127)).expect("classify");
        assert_eq!(reading.gesture(), Gesture::Throw(Choice::Paper));
    }
    #[test]
    fn distribution_sums_to_one() {
        let reading = model().classify(&frame(200)).expect("classify");
        let total = reading.weights().iter().sum::<f32>();
        assert!((total - 1.).abs() < 1e-5);
    }
    #[test]
    fn pooled_features_have_model_dimension() {
        let model = model();
        assert_eq!(model.features(&frame(0)).len(), model.dimension());
    }
    #[test]
    fn rejects_malformed_models() {
        assert!(Centroids::new(5, 1., vec![vec![]; CLASSES]).is_err());
        assert!(Centroids::new(1, 0., vec![solid(0., 3); CLASSES]).is_err());
        assert!(Centroids::new(1, 1., vec![solid(0., 3); 3]).is_err());
        assert!(Centroids::new(1, 1., vec![solid(0., 4); CLASSES]).is_err());
        assert!(Centroids::new(1, 1., vec![solid(0., 3); CLASSES]).is_ok());
    }
    #[test]
    fn loads_from_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.json");
        let model = model();
        std::fs::write(&path, serde_json::to_string(&model).expect("serialize")).expect("write");
        assert_eq!(Centroids::load(&path), Ok(model));
    }
    #[test]
    fn missing_model_is_classifier_fault() {
        assert!(matches!(
            Centroids::load("/no/such/model.json"),
            Err(Fault::Classifier(_))
        ));
    }
}

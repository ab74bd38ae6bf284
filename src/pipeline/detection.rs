use image::RgbImage;
use image::imageops::{self, FilterType};
use ndarray::Array;
use ort::session::SessionOutputs;
use ort::value::Tensor;
use tracing::{Level, span, trace, warn};

use super::landmarks::{LANDMARK_COUNT, LandmarkProvider, LandmarkSet};
use super::model::{Session, initialize_model};
use super::rect::Rect;
use crate::error::{Error, Result};
use crate::shapes::point::Point;

const DETECT_WIDTH: u32 = 640;
const DETECT_HEIGHT: u32 = 640;
const LANDMARK_SIZE: u32 = 192;
const MIN_CONFIDENCE: f32 = 0.7;

/// ONNX-backed landmark provider.
///
/// Two models under `./models/`: a face detector whose `output0` columns are
/// `[cx, cy, w, h, confidence, ..]` in detector-input pixels, and a 68-point
/// landmark model taking a 192x192 face crop and emitting 136 floats, the
/// (x, y) pairs in crop-input pixels.
pub struct OnnxLandmarkProvider {
    detector: Session,
    landmarker: Session,
}

impl OnnxLandmarkProvider {
    pub fn new(threads: usize) -> Result<OnnxLandmarkProvider> {
        let threads = threads.max(1);
        Ok(OnnxLandmarkProvider {
            detector: initialize_model("face_detection.onnx", threads)?,
            landmarker: initialize_model("face_landmarks_68.onnx", threads)?,
        })
    }

    fn detect_faces(&self, img: &RgbImage) -> Result<Vec<Rect>> {
        let span = span!(Level::DEBUG, "face_detector");
        let _guard = span.enter();

        let scale = (DETECT_WIDTH as f32 / img.width() as f32)
            .min(DETECT_HEIGHT as f32 / img.height() as f32);
        let resized_width = ((img.width() as f32 * scale).round() as u32).max(1);
        let resized_height = ((img.height() as f32 * scale).round() as u32).max(1);
        let resized = imageops::resize(img, resized_width, resized_height, FilterType::Nearest);

        let model_input = Array::from_shape_fn(
            (1, 3, DETECT_HEIGHT as usize, DETECT_WIDTH as usize),
            |(_, c, y, x)| {
                let y: u32 = y as u32;
                let x: u32 = x as u32;
                if y >= resized_height {
                    0.
                } else if x >= resized_width {
                    0.
                } else {
                    resized.get_pixel(x, y)[c] as f32 / 255.0
                }
            },
        );

        let input = Tensor::from_array(model_input)?;
        let outputs = self.detector.run(ort::inputs!["images" => input]?)?;
        let result = outputs["output0"].try_extract_tensor::<f32>()?;

        let x_scale = img.width() as f32 / resized_width as f32;
        let y_scale = img.height() as f32 / resized_height as f32;

        let mut faces: Vec<(Rect, f32)> = Vec::new();
        for row in result.squeeze().columns() {
            let row: Vec<_> = row.iter().copied().collect();
            if row.len() < 5 {
                continue;
            }
            let c = row[4];
            if c < MIN_CONFIDENCE {
                continue;
            }

            let xc = (row[0] * x_scale).round().max(0.) as u32;
            let yc = (row[1] * y_scale).round().max(0.) as u32;
            let w = (row[2] * x_scale).round() as u32;
            let h = (row[3] * y_scale).round() as u32;
            let face = Rect::from_center(xc, yc, w, h);

            let mut has_better_dup = false;
            for (i, (d, dc)) in faces.iter().enumerate() {
                if d.overlap_pct(&face) > 30. {
                    // pick the one with higher confidence
                    if *dc > c {
                        has_better_dup = true;
                    } else {
                        faces.swap_remove(i);
                    }
                    break;
                }
            }

            if !has_better_dup {
                faces.push((face, c));
            }
        }

        trace!("detected {} faces", faces.len());

        Ok(faces.into_iter().map(|(r, _)| r).collect())
    }

    fn landmarks_for_face(&self, img: &RgbImage, bounds: Rect) -> Result<LandmarkSet> {
        let span = span!(Level::DEBUG, "face_landmarker");
        let _guard = span.enter();

        let mut bounds = bounds;
        // pad 25% on each side
        bounds.scale(1.5, img.width(), img.height());

        let face_img = imageops::crop_imm(
            img,
            bounds.left(),
            bounds.top(),
            bounds.w.max(1),
            bounds.h.max(1),
        )
        .to_image();
        let input_img = imageops::resize(&face_img, LANDMARK_SIZE, LANDMARK_SIZE, FilterType::Nearest);

        let input_arr = Array::from_shape_fn(
            (1, LANDMARK_SIZE as usize, LANDMARK_SIZE as usize, 3),
            |(_, y, x, c)| input_img.get_pixel(x as u32, y as u32)[c] as f32 / 255.,
        );

        let input = Tensor::from_array(input_arr)?;
        let outputs = self.landmarker.run(ort::inputs!["input" => input]?)?;

        extract_landmarks(outputs, bounds, img.width(), img.height())
    }
}

impl LandmarkProvider for OnnxLandmarkProvider {
    fn detect(&mut self, img: &RgbImage) -> Result<Vec<LandmarkSet>> {
        let faces = self.detect_faces(img)?;

        let mut sets = Vec::with_capacity(faces.len());
        for bounds in faces {
            trace!("face bounds: {bounds:?}");
            sets.push(self.landmarks_for_face(img, bounds)?);
        }

        Ok(sets)
    }
}

fn extract_landmarks(
    outputs: SessionOutputs,
    run_bounds: Rect,
    img_width: u32,
    img_height: u32,
) -> Result<LandmarkSet> {
    let output = outputs["landmarks"].try_extract_tensor::<f32>()?;
    let vals: Vec<f32> = output.squeeze().iter().copied().collect();

    if vals.len() != LANDMARK_COUNT * 2 {
        warn!(
            "landmark model produced {} values, expected {}",
            vals.len(),
            LANDMARK_COUNT * 2
        );
        return Err(Error::InvalidLandmarkSet {
            count: vals.len() / 2,
        });
    }

    let x_scale = run_bounds.w as f32 / LANDMARK_SIZE as f32;
    let y_scale = run_bounds.h as f32 / LANDMARK_SIZE as f32;
    let x_offset = run_bounds.left() as f32;
    let y_offset = run_bounds.top() as f32;

    let mut points = Vec::with_capacity(LANDMARK_COUNT);
    for i in 0..LANDMARK_COUNT {
        let x = x_offset + vals[i * 2] * x_scale;
        let y = y_offset + vals[i * 2 + 1] * y_scale;

        // edge crops can round a point just past the image; keep the
        // provider's in-bounds contract intact
        points.push(Point::new(
            (x.round() as i32).clamp(0, img_width as i32 - 1),
            (y.round() as i32).clamp(0, img_height as i32 - 1),
        ));
    }

    LandmarkSet::new(points)
}

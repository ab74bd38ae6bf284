use std::path::Path;

use image::{ImageReader, Rgb, RgbImage};
use imageproc::drawing;
use tracing::{Level, debug, span, trace};

use crate::color::Color;
use crate::error::{Error, Result};

pub mod landmarks;
pub mod regions;
pub mod sampler;

mod detection;
mod model;
mod rect;

pub use detection::OnnxLandmarkProvider;
pub use landmarks::{LandmarkProvider, LandmarkSet};
pub use regions::Region;
pub use sampler::ChannelOrder;

/// Decodes a face photo into the RGB buffer the pipeline samples.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbImage> {
    Ok(ImageReader::open(path)?.decode()?.into_rgb8())
}

/// The five feature colors extracted from one face. All-or-nothing: an
/// extraction either produces a complete record or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    pub left_eye: Color,
    pub right_eye: Color,
    pub nose: Color,
    pub jaw: Color,
    pub lips: Color,
}

impl FeatureRecord {
    pub fn color(&self, region: Region) -> Color {
        match region {
            Region::LeftEye => self.left_eye,
            Region::RightEye => self.right_eye,
            Region::Nose => self.nose,
            Region::Jaw => self.jaw,
            Region::Lips => self.lips,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, Color)> + '_ {
        Region::ALL.into_iter().map(|r| (r, self.color(r)))
    }
}

/// Feature Record builder: detect -> locate -> sample, sequentially, with no
/// shared state across invocations. Safe to run one pipeline per worker over
/// independent images.
pub struct Pipeline {
    provider: Box<dyn LandmarkProvider>,
    order: ChannelOrder,
}

impl Pipeline {
    pub fn new(threads: usize) -> Result<Pipeline> {
        Ok(Pipeline::with_provider(Box::new(OnnxLandmarkProvider::new(
            threads,
        )?)))
    }

    pub fn with_provider(provider: Box<dyn LandmarkProvider>) -> Pipeline {
        Pipeline {
            provider,
            order: ChannelOrder::Rgb,
        }
    }

    /// Channel layout of images handed to `extract`. Defaults to RGB.
    pub fn with_channel_order(mut self, order: ChannelOrder) -> Pipeline {
        self.order = order;
        self
    }

    /// Runs one extraction. When the provider reports several faces the
    /// first one wins; there is deliberately no "best face" heuristic.
    /// Never retries and never returns a partial record.
    pub fn extract(&mut self, img: &RgbImage) -> Result<FeatureRecord> {
        let span = span!(Level::DEBUG, "extract");
        let _guard = span.enter();

        let landmarks = self.first_face(img)?;
        self.build_record(img, &landmarks)
    }

    /// Like `extract`, but also marks the landmarks and the five sample
    /// points on the image for debugging.
    pub fn extract_trace(&mut self, img: &mut RgbImage) -> Result<FeatureRecord> {
        let span = span!(Level::DEBUG, "extract");
        let _guard = span.enter();

        let landmarks = self.first_face(img)?;
        let record = self.build_record(img, &landmarks)?;

        for p in landmarks.points() {
            drawing::draw_filled_circle_mut(img, (p.x, p.y), 1, Rgb([0u8, 255u8, 0u8]));
        }
        for (region, pt) in regions::locate(&landmarks) {
            debug!("{} sampled at ({}, {})", region.name(), pt.x, pt.y);
            drawing::draw_filled_circle_mut(img, (pt.x, pt.y), 3, Rgb([255u8, 0u8, 0u8]));
        }

        Ok(record)
    }

    fn first_face(&mut self, img: &RgbImage) -> Result<LandmarkSet> {
        let faces = self.provider.detect(img)?;
        if faces.len() > 1 {
            debug!("{} faces detected, using the first", faces.len());
        }

        faces.into_iter().next().ok_or(Error::NoFaceDetected)
    }

    fn build_record(&self, img: &RgbImage, landmarks: &LandmarkSet) -> Result<FeatureRecord> {
        let sample_region = |region: Region| -> Result<Color> {
            let pt = region.sample_point(landmarks);
            trace!("{} sample point: ({}, {})", region.name(), pt.x, pt.y);
            sampler::sample(img, self.order, pt)
        };

        Ok(FeatureRecord {
            left_eye: sample_region(Region::LeftEye)?,
            right_eye: sample_region(Region::RightEye)?,
            nose: sample_region(Region::Nose)?,
            jaw: sample_region(Region::Jaw)?,
            lips: sample_region(Region::Lips)?,
        })
    }
}

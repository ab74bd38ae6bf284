use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no face detected in image")]
    NoFaceDetected,

    #[error("invalid landmark set: expected 68 points, got {count}")]
    InvalidLandmarkSet { count: usize },

    #[error("sample coordinate ({x}, {y}) out of bounds for {width}x{height} image")]
    CoordinateOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("inference error: {0}")]
    Inference(#[from] ort::Error),

    #[error("upstream request failed: {0}")]
    UpstreamRequest(String),

    #[error("malformed advice text: {0}")]
    MalformedAdviceText(String),
}

pub type Result<T> = std::result::Result<T, Error>;

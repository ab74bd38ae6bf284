use image::{Rgb, RgbImage};

use facehue::advice::{AdviceKind, AdviceRequester, ChatClient, Message};
use facehue::error::{Error, Result};
use facehue::pipeline::{ChannelOrder, LandmarkProvider, LandmarkSet, Pipeline};
use facehue::session::Session;
use facehue::shapes::point::Point;

struct StubProvider {
    faces: Vec<LandmarkSet>,
}

impl LandmarkProvider for StubProvider {
    fn detect(&mut self, _img: &RgbImage) -> Result<Vec<LandmarkSet>> {
        Ok(self.faces.clone())
    }
}

/// 68 points spread across a face-like grid inside a `width` x `height`
/// image, dense enough that every region midpoint lands in bounds.
fn synthetic_landmarks(width: i32, height: i32) -> LandmarkSet {
    let points = (0..68)
        .map(|i| Point::new((i * 7) % width, (i * 11) % height))
        .collect();
    LandmarkSet::new(points).unwrap()
}

#[test]
fn extraction_samples_documented_midpoints() {
    let width = 100;
    let height = 100;
    let landmarks = synthetic_landmarks(width, height);

    // color every pixel by position so each sample is distinguishable
    let img = RgbImage::from_fn(width as u32, height as u32, |x, y| {
        Rgb([x as u8, y as u8, 77])
    });

    let mut pipeline = Pipeline::with_provider(Box::new(StubProvider {
        faces: vec![landmarks.clone()],
    }));
    let record = pipeline.extract(&img).unwrap();

    for (region, endpoints) in [
        (facehue::pipeline::Region::LeftEye, (36, 42)),
        (facehue::pipeline::Region::RightEye, (45, 39)),
        (facehue::pipeline::Region::Nose, (31, 35)),
        (facehue::pipeline::Region::Jaw, (0, 16)),
        (facehue::pipeline::Region::Lips, (48, 54)),
    ] {
        let (a, b) = endpoints;
        let x = (landmarks.point(a).x + landmarks.point(b).x) / 2;
        let y = (landmarks.point(a).y + landmarks.point(b).y) / 2;
        assert_eq!(
            record.color(region),
            facehue::Color::new(x as u8, y as u8, 77),
            "{region:?} sampled away from its midpoint"
        );
    }
}

#[test]
fn red_nose_pixel_extracts_red_hex() {
    let mut points = vec![Point::new(10, 10); 68];
    points[31] = Point::new(40, 60);
    points[35] = Point::new(60, 40);
    let landmarks = LandmarkSet::new(points).unwrap();

    let mut img = RgbImage::new(100, 100);
    img.put_pixel(50, 50, Rgb([255, 0, 0]));

    let mut pipeline = Pipeline::with_provider(Box::new(StubProvider {
        faces: vec![landmarks],
    }));
    let record = pipeline.extract(&img).unwrap();

    assert_eq!(record.nose.hex(), "#ff0000");
}

#[test]
fn bgr_frames_still_extract_rgb_hex() {
    let landmarks = synthetic_landmarks(100, 100);
    // pure red everywhere, stored in BGR channel order
    let img = RgbImage::from_pixel(100, 100, Rgb([0, 0, 255]));

    let mut pipeline = Pipeline::with_provider(Box::new(StubProvider {
        faces: vec![landmarks],
    }))
    .with_channel_order(ChannelOrder::Bgr);

    let record = pipeline.extract(&img).unwrap();
    assert!(record.iter().all(|(_, c)| c.hex() == "#ff0000"));
}

#[test]
fn no_face_never_reaches_the_advice_layer() {
    struct PanicClient;
    impl ChatClient for PanicClient {
        fn complete(&self, _messages: &[Message]) -> Result<String> {
            panic!("advice requested without a feature record");
        }
    }

    let img = RgbImage::new(50, 50);
    let mut pipeline = Pipeline::with_provider(Box::new(StubProvider { faces: Vec::new() }));

    let requester = AdviceRequester::new(PanicClient);
    match pipeline.extract(&img) {
        Err(Error::NoFaceDetected) => {} // requester never invoked
        Ok(record) => {
            let mut session = Session::new(record);
            session.ask(&requester, AdviceKind::Blush).unwrap();
            panic!("extraction unexpectedly succeeded");
        }
        Err(other) => panic!("expected NoFaceDetected, got {other:?}"),
    }
}

#[test]
fn extraction_is_all_or_nothing() {
    // jaw endpoints resolve outside the 20x20 image; no partial record
    let mut points = vec![Point::new(5, 5); 68];
    points[0] = Point::new(500, 5);
    points[16] = Point::new(500, 5);
    let landmarks = LandmarkSet::new(points).unwrap();

    let img = RgbImage::new(20, 20);
    let mut pipeline = Pipeline::with_provider(Box::new(StubProvider {
        faces: vec![landmarks],
    }));

    match pipeline.extract(&img) {
        Err(Error::CoordinateOutOfBounds { .. }) => {}
        other => panic!("expected CoordinateOutOfBounds, got {other:?}"),
    }
}

#[test]
fn repeated_extraction_is_deterministic() {
    let landmarks = synthetic_landmarks(64, 64);
    let img = RgbImage::from_fn(64, 64, |x, y| Rgb([(x * y) as u8, x as u8, y as u8]));

    let mut pipeline = Pipeline::with_provider(Box::new(StubProvider {
        faces: vec![landmarks],
    }));

    let first = pipeline.extract(&img).unwrap();
    let second = pipeline.extract(&img).unwrap();
    assert_eq!(first, second);
}

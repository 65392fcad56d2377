use std::path::Path;

use crate::blurring::domain::blur_request::BlurRequest;
use crate::blurring::domain::raster_blurrer::RasterBlurrer;
use crate::image_io::domain::image_reader::ImageReader;
use crate::image_io::domain::image_writer::ImageWriter;

/// Single-image blurring pipeline: read → blur → write.
///
/// A blur failure is not fatal: the source image is written unchanged so
/// the caller still gets an output file.
pub struct BlurImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    blurrer: Box<dyn RasterBlurrer>,
    request: BlurRequest,
}

impl BlurImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        blurrer: Box<dyn RasterBlurrer>,
        request: BlurRequest,
    ) -> Self {
        Self {
            reader,
            writer,
            blurrer,
            request,
        }
    }

    pub fn execute(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let raster = self.reader.read(input_path)?;
        log::info!(
            "Read {} ({}x{})",
            input_path.display(),
            raster.width(),
            raster.height()
        );

        let output = match self.request.apply(self.blurrer.as_ref(), &raster) {
            Ok(blurred) => blurred,
            Err(e) => {
                log::warn!("Blur failed, writing original: {e}");
                raster
            }
        };

        self.writer.write(output_path, &output)?;
        log::info!("Wrote {}", output_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blurring::domain::blur_error::BlurError;
    use crate::blurring::domain::blur_quality::BlurQuality;
    use crate::blurring::domain::blur_request::Backdrop;
    use crate::shared::raster::Raster;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    struct StubReader {
        raster: Option<Raster>,
    }

    impl ImageReader for StubReader {
        fn read(&self, _path: &Path) -> Result<Raster, Box<dyn std::error::Error>> {
            self.raster.clone().ok_or_else(|| "unreadable".into())
        }
    }

    struct StubWriter {
        written: Arc<Mutex<Vec<(PathBuf, Raster)>>>,
    }

    impl StubWriter {
        fn new() -> Self {
            Self {
                written: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl ImageWriter for StubWriter {
        fn write(&self, path: &Path, raster: &Raster) -> Result<(), Box<dyn std::error::Error>> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), raster.clone()));
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Blur(f32, BlurQuality),
        Glass(f32, f32),
        Depth(f32, f32),
    }

    /// Records calls and marks output by inverting the pixels.
    struct RecordingBlurrer {
        calls: Arc<Mutex<Vec<Call>>>,
        fail: bool,
    }

    impl RecordingBlurrer {
        fn new(fail: bool) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail,
            }
        }

        fn record(&self, raster: &Raster, call: Call) -> Result<Raster, BlurError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                return Err(BlurError::InvalidRaster {
                    width: raster.width() as usize,
                    height: raster.height() as usize,
                    len: 0,
                });
            }
            let pixels = raster.pixels().iter().map(|p| !p).collect();
            Raster::new(pixels, raster.width(), raster.height())
        }
    }

    impl RasterBlurrer for RecordingBlurrer {
        fn blur(
            &self,
            raster: &Raster,
            radius: f32,
            quality: BlurQuality,
        ) -> Result<Raster, BlurError> {
            self.record(raster, Call::Blur(radius, quality))
        }

        fn glass_backdrop(
            &self,
            raster: &Raster,
            radius: f32,
            intensity: f32,
        ) -> Result<Raster, BlurError> {
            self.record(raster, Call::Glass(radius, intensity))
        }

        fn depth_backdrop(
            &self,
            raster: &Raster,
            radius: f32,
            depth: f32,
        ) -> Result<Raster, BlurError> {
            self.record(raster, Call::Depth(radius, depth))
        }
    }

    // --- Helpers ---

    fn make_raster(w: u32, h: u32) -> Raster {
        Raster::filled(w, h, 0xFF336699)
    }

    fn reader(raster: Raster) -> Box<dyn ImageReader> {
        Box::new(StubReader {
            raster: Some(raster),
        })
    }

    // --- Tests ---

    #[test]
    fn test_blurs_and_writes_to_output_path() {
        let writer = StubWriter::new();
        let written = writer.written.clone();
        let blurrer = RecordingBlurrer::new(false);
        let calls = blurrer.calls.clone();

        let uc = BlurImageUseCase::new(
            reader(make_raster(20, 10)),
            Box::new(writer),
            Box::new(blurrer),
            BlurRequest::new(6.0, BlurQuality::Premium),
        );
        uc.execute(Path::new("in.png"), Path::new("out.png"))
            .unwrap();

        assert_eq!(*calls.lock().unwrap(), vec![Call::Blur(6.0, BlurQuality::Premium)]);
        let written = written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("out.png"));
        assert_eq!((written[0].1.width(), written[0].1.height()), (20, 10));
        assert_eq!(written[0].1.pixel(0, 0), !0xFF336699);
    }

    #[test]
    fn test_blur_failure_writes_original() {
        let writer = StubWriter::new();
        let written = writer.written.clone();
        let source = make_raster(4, 4);

        let uc = BlurImageUseCase::new(
            reader(source.clone()),
            Box::new(writer),
            Box::new(RecordingBlurrer::new(true)),
            BlurRequest::new(3.0, BlurQuality::Standard),
        );
        uc.execute(Path::new("in.png"), Path::new("out.png"))
            .unwrap();

        assert_eq!(written.lock().unwrap()[0].1, source);
    }

    #[test]
    fn test_read_failure_propagates_and_writes_nothing() {
        let writer = StubWriter::new();
        let written = writer.written.clone();

        let uc = BlurImageUseCase::new(
            Box::new(StubReader { raster: None }),
            Box::new(writer),
            Box::new(RecordingBlurrer::new(false)),
            BlurRequest::new(3.0, BlurQuality::Fast),
        );

        assert!(uc
            .execute(Path::new("in.png"), Path::new("out.png"))
            .is_err());
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_backdrop_requests_route_to_backdrop_methods() {
        for (backdrop, expected) in [
            (Backdrop::Glass { intensity: 0.4 }, Call::Glass(8.0, 0.4)),
            (Backdrop::Depth { depth: 0.7 }, Call::Depth(8.0, 0.7)),
        ] {
            let blurrer = RecordingBlurrer::new(false);
            let calls = blurrer.calls.clone();
            let uc = BlurImageUseCase::new(
                reader(make_raster(5, 5)),
                Box::new(StubWriter::new()),
                Box::new(blurrer),
                BlurRequest::new(8.0, BlurQuality::Fast).with_backdrop(backdrop),
            );
            uc.execute(Path::new("in.png"), Path::new("out.png"))
                .unwrap();
            assert_eq!(*calls.lock().unwrap(), vec![expected]);
        }
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::blurring::domain::blur_request::BlurRequest;
use crate::blurring::domain::raster_blurrer::RasterBlurrer;
use crate::shared::raster::Raster;

/// Messages sent from the worker thread to the caller.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Complete(Raster),
    Error(String),
    Cancelled,
}

/// One raster to blur off the calling thread.
pub struct BlurJob {
    pub raster: Raster,
    pub request: BlurRequest,
}

/// Spawn a background blur. Returns the channel receiver and cancellation token.
///
/// The blur itself cannot be interrupted; setting the token discards its
/// result and the worker reports `Cancelled` instead.
pub fn spawn(
    blurrer: Box<dyn RasterBlurrer>,
    job: BlurJob,
) -> (Receiver<WorkerMessage>, Arc<AtomicBool>) {
    let (tx, rx) = crossbeam_channel::unbounded::<WorkerMessage>();
    let cancelled = Arc::new(AtomicBool::new(false));
    let cancelled_clone = cancelled.clone();

    thread::spawn(move || run_blur(&tx, &cancelled_clone, blurrer.as_ref(), &job));

    (rx, cancelled)
}

fn run_blur(
    tx: &Sender<WorkerMessage>,
    cancelled: &AtomicBool,
    blurrer: &dyn RasterBlurrer,
    job: &BlurJob,
) {
    if cancelled.load(Ordering::Relaxed) {
        let _ = tx.send(WorkerMessage::Cancelled);
        return;
    }

    let result = job.request.apply(blurrer, &job.raster);

    let message = if cancelled.load(Ordering::Relaxed) {
        log::debug!("Blur finished after cancellation, discarding");
        WorkerMessage::Cancelled
    } else {
        match result {
            Ok(raster) => WorkerMessage::Complete(raster),
            Err(e) => WorkerMessage::Error(e.to_string()),
        }
    };
    let _ = tx.send(message);
}

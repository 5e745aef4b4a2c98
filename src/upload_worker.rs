use crate::api::QuizGenerator;
use crate::logger;
use crate::models::{UploadRequest, UploadResponse};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Runs uploads off the UI thread, one at a time, until the request channel
/// closes.
pub fn spawn_upload_worker(
    generator: Arc<dyn QuizGenerator>,
    upload_tx: Sender<UploadResponse>,
    upload_rx: Receiver<UploadRequest>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("quizmaster::upload_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Upload worker could not start runtime: {}", e));
                    for request in upload_rx.iter() {
                        let UploadRequest::Generate { request_id, .. } = request;
                        let _ = upload_tx.send(UploadResponse::Error {
                            request_id,
                            error: format!("Upload runtime unavailable: {}", e),
                        });
                    }
                    return;
                }
            };

            for request in upload_rx.iter() {
                let UploadRequest::Generate { request_id, file } = request;
                logger::log(&format!(
                    "Worker received request {} for {}",
                    request_id, file.name
                ));

                let response = match rt.block_on(generator.generate_quiz(&file)) {
                    Ok(questions) => UploadResponse::Quiz {
                        request_id,
                        questions,
                    },
                    Err(e) => {
                        logger::log(&format!("Worker error: {}", e));
                        UploadResponse::Error {
                            request_id,
                            error: e.to_string(),
                        }
                    }
                };

                if upload_tx.send(response).is_err() {
                    break;
                }
            }
            logger::log("Worker channel disconnected, exiting");
        })
}

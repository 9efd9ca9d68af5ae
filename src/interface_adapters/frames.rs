// Frame serializer: turns each frame update into shared JSON text once.

use super::protocol::{FrameUpdateDto, HostMessage};
use crate::use_cases::FrameUpdate;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{error, warn};

pub async fn frame_update_serializer(
    mut frame_rx: broadcast::Receiver<FrameUpdate>,
    frame_json_tx: broadcast::Sender<Arc<str>>,
    frame_latest_tx: watch::Sender<Arc<str>>,
) {
    loop {
        match frame_rx.recv().await {
            Ok(update) => {
                let msg = HostMessage::Frame(FrameUpdateDto::from(update));
                let txt = match serde_json::to_string(&msg) {
                    Ok(txt) => txt,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize frame update");
                        continue;
                    }
                };

                let json: Arc<str> = Arc::from(txt);
                // Latest frame is kept for consumers that fall behind.
                let _ = frame_latest_tx.send(json.clone());
                let _ = frame_json_tx.send(json);
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(
                    missed = n,
                    "frame serializer lagged; skipping to latest update"
                );
            }
            Err(broadcast::error::RecvError::Closed) => {
                warn!("frame updates channel closed; serializer exiting");
                break;
            }
        }
    }
}

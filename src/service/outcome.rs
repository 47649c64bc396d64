//! 轉換結果的單次決定機制。
//!
//! 轉換函式可以同步回傳、同步拋出錯誤，或稍後透過 [`Reporter`] 回報。三者之中
//! 最先到達的一個決定結果，之後的回報一律忽略。

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::BoxError;
use crate::models::conversion::TransformOutcome;

/// 所有回報端都被釋放、卻沒有任何結果時的失敗訊息
pub const ABANDONED_MESSAGE: &str = "轉換函式未回報結果即結束";

type Slot = Arc<Mutex<Option<oneshot::Sender<TransformOutcome>>>>;

fn resolve_slot(slot: &Slot, outcome: TransformOutcome) -> bool {
    let sender = slot.lock().take();
    match sender {
        Some(sender) => {
            // 等待端已被丟棄時結果沒有去處，仍算已決定
            let _ = sender.send(outcome);
            true
        }
        None => {
            debug!("結果已決定，忽略後續回報：{:?}", outcome);
            false
        }
    }
}

/// 只能決定一次的結果槽
#[derive(Debug)]
pub struct OutcomeCell {
    slot: Slot,
}

impl OutcomeCell {
    pub fn new() -> (Self, PendingOutcome) {
        let (sender, receiver) = oneshot::channel();
        let cell = OutcomeCell {
            slot: Arc::new(Mutex::new(Some(sender))),
        };
        (cell, PendingOutcome { receiver })
    }

    pub fn reporter(&self) -> Reporter {
        Reporter {
            slot: Arc::clone(&self.slot),
        }
    }

    /// 決定結果，已決定過時回傳 `false`
    pub fn resolve(&self, outcome: TransformOutcome) -> bool {
        resolve_slot(&self.slot, outcome)
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.lock().is_none()
    }
}

/// 交給轉換函式的回報端，可複製並移到其他任務或執行緒
#[derive(Debug, Clone)]
pub struct Reporter {
    slot: Slot,
}

impl Reporter {
    /// 回報結果；回傳值表示這次回報是否決定了結果
    pub fn report(&self, result: Result<String, BoxError>) -> bool {
        let outcome = match result {
            Ok(text) => TransformOutcome::Converted(text),
            Err(err) => TransformOutcome::Failed(err.to_string()),
        };
        resolve_slot(&self.slot, outcome)
    }

    pub fn resolve(&self, text: impl Into<String>) -> bool {
        self.report(Ok(text.into()))
    }

    pub fn reject(&self, err: impl Into<BoxError>) -> bool {
        self.report(Err(err.into()))
    }
}

/// 等待結果的一端
#[derive(Debug)]
pub struct PendingOutcome {
    receiver: oneshot::Receiver<TransformOutcome>,
}

impl PendingOutcome {
    pub async fn wait(self) -> TransformOutcome {
        self.receiver
            .await
            .unwrap_or_else(|_| TransformOutcome::Failed(ABANDONED_MESSAGE.to_string()))
    }
}

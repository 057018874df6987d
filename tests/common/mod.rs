use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};
use tip_carousel::{RenderSurface, TipResult, TipSource, TipsResponse, Zone};

/// Three-field dataset: one header row plus two full records. Tokens are
/// tab-delimited throughout; row breaks only pretty-print the file.
pub const THREE_FIELD_BODY: &str =
    "tip\trationale\tcategory\t\nTip A\tRationale A\tstyle\t\nTip B\tRationale B\tsafety";

/// Source that replays canned responses, the last one repeatedly.
pub struct MockSource {
    replies: Mutex<VecDeque<TipsResponse>>,
    delay: Option<Duration>,
}

impl MockSource {
    pub fn ok(body: &str) -> Self {
        Self::with_status(200, "OK", body)
    }

    pub fn with_status(status: u16, status_text: &str, body: &str) -> Self {
        Self::replies(vec![TipsResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }])
    }

    pub fn replies(replies: Vec<TipsResponse>) -> Self {
        assert!(!replies.is_empty(), "MockSource needs at least one reply");
        Self {
            replies: Mutex::new(replies.into()),
            delay: None,
        }
    }

    pub fn delayed(body: &str, delay: Duration) -> Self {
        let mut source = Self::ok(body);
        source.delay = Some(delay);
        source
    }
}

#[async_trait]
impl TipSource for MockSource {
    async fn fetch(&self, _url: &str) -> TipResult<TipsResponse> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut replies = self.replies.lock().expect("reply queue poisoned");
        let reply = if replies.len() > 1 {
            replies.pop_front().expect("reply queue empty")
        } else {
            replies.front().expect("reply queue empty").clone()
        };
        Ok(reply)
    }
}

/// Every call the session pushed to the surface, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    SetText(Zone, String),
    ClearChildren(Zone),
    RenderList(Zone, Vec<String>),
}

/// Shared handle onto a [`RecordingSurface`]'s call log.
#[derive(Clone, Default)]
pub struct SurfaceLog(Arc<Mutex<Vec<SurfaceCall>>>);

impl SurfaceLog {
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.0.lock().expect("surface log poisoned").clone()
    }

    /// All texts written to `zone`, in order.
    pub fn texts(&self, zone: Zone) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SurfaceCall::SetText(z, text) if z == zone => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_text(&self, zone: Zone) -> Option<String> {
        self.texts(zone).pop()
    }
}

/// Render surface that records every call for later assertions.
pub struct RecordingSurface {
    log: SurfaceLog,
}

impl RecordingSurface {
    pub fn new() -> (Self, SurfaceLog) {
        let log = SurfaceLog::default();
        (Self { log: log.clone() }, log)
    }

    fn push(&self, call: SurfaceCall) {
        self.log.0.lock().expect("surface log poisoned").push(call);
    }
}

impl RenderSurface for RecordingSurface {
    fn set_text(&mut self, zone: Zone, text: &str) {
        self.push(SurfaceCall::SetText(zone, text.to_string()));
    }

    fn clear_children(&mut self, zone: Zone) {
        self.push(SurfaceCall::ClearChildren(zone));
    }

    fn render_list(&mut self, zone: Zone, items: &[String]) {
        self.push(SurfaceCall::RenderList(zone, items.to_vec()));
    }
}

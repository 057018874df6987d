use crate::{
    parse_tips, Carousel, NodeId, Record, RecordShape, RenderSurface, TipError, TipResult,
    TipSource, TipsResponse, Zone,
};
use rand::Rng;
use std::{sync::Arc, time::Duration};

/// Fallback text for a click whose direction attribute is unrecognized.
const UNKNOWN_DIRECTION_TEXT: &str = "I dunno where to go.";

/// How long to wait for the tips endpoint before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Where the current fetch attempt stands. `Error` and `TimedOut` are
/// terminal for that attempt only; a new [`TipSession::load_tips`] call
/// restarts from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Loading,
    Loaded,
    Error,
    TimedOut,
}

/// A recognized navigation request from the host's click handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Parse the click event's `data-direction` attribute value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Configuration for one widget instantiation.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Where the tab-separated tips file lives.
    pub url: String,
    /// Which dataset variant the file uses.
    pub shape: RecordShape,
    /// Fetch deadline; [`DEFAULT_TIMEOUT`] unless overridden.
    pub timeout: Duration,
}

impl SessionOptions {
    #[must_use]
    pub fn new(url: impl Into<String>, shape: RecordShape) -> Self {
        Self {
            url: url.into(),
            shape,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The tip session controller: bridges fetch results and user navigation.
///
/// Owns all session state explicitly: the current carousel, the current-tip
/// pointer, and the attempt phase. One instance per widget instantiation;
/// every successful load replaces the carousel and reseats the pointer.
pub struct TipSession<S> {
    source: Arc<dyn TipSource>,
    surface: S,
    options: SessionOptions,
    carousel: Option<Carousel<Record>>,
    current: Option<NodeId>,
    phase: SessionPhase,
}

impl<S: RenderSurface> TipSession<S> {
    #[must_use]
    pub fn new(source: Arc<dyn TipSource>, surface: S, options: SessionOptions) -> Self {
        Self {
            source,
            surface,
            options,
            carousel: None,
            current: None,
            phase: SessionPhase::Uninitialized,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The record under the current-tip pointer, if a load has succeeded.
    #[must_use]
    pub fn current_record(&self) -> Option<&Record> {
        match (&self.carousel, self.current) {
            (Some(carousel), Some(node)) => Some(carousel.get(node)),
            _ => None,
        }
    }

    /// Fetch the tips file, rebuild the carousel, and show a random tip.
    ///
    /// The fetch races a fixed deadline; whichever resolves first is the
    /// only outcome that mutates session state (the losing future is
    /// dropped), so at most one of success, error, or timeout takes effect
    /// per attempt.
    pub async fn load_tips(&mut self) {
        self.phase = SessionPhase::Loading;
        tracing::debug!(url = %self.options.url, "fetching tips file");

        match self.fetch_with_deadline().await {
            Ok(response) => self.resolve_response(&response),
            Err(error @ TipError::TimedOut(_)) => {
                tracing::warn!(%error, "tips fetch timed out");
                self.phase = SessionPhase::TimedOut;
                self.surface.set_text(Zone::Tip, &error.to_string());
            }
            Err(error) => {
                tracing::warn!(%error, "tips fetch failed");
                self.phase = SessionPhase::Error;
                self.surface.set_text(Zone::Tip, &format!("ERROR: {error}"));
            }
        }
    }

    async fn fetch_with_deadline(&self) -> TipResult<TipsResponse> {
        let deadline = self.options.timeout;
        tokio::time::timeout(deadline, self.source.fetch(&self.options.url))
            .await
            .unwrap_or_else(|_elapsed| Err(TipError::TimedOut(deadline.as_secs())))
    }

    /// Move the current-tip pointer one link and re-render. An unrecognized
    /// direction shows the fallback text and leaves the pointer unchanged.
    pub fn navigate(&mut self, direction: &str) {
        let Some(parsed) = Direction::parse(direction) else {
            tracing::warn!(direction, "unrecognized navigation direction");
            self.surface.set_text(Zone::Tip, UNKNOWN_DIRECTION_TEXT);
            return;
        };
        let (Some(carousel), Some(current)) = (&self.carousel, self.current) else {
            tracing::warn!("navigation before a successful load, ignoring");
            return;
        };
        let moved = match parsed {
            Direction::Previous => carousel.previous(current),
            Direction::Next => carousel.next(current),
        };
        self.current = Some(moved);
        self.show_current();
    }

    fn resolve_response(&mut self, response: &TipsResponse) {
        // Status 0 is the no-network-layer sentinel for local fetches.
        if response.status != 200 && response.status != 0 {
            let text = if response.body.trim().is_empty() {
                &response.status_text
            } else {
                &response.body
            };
            tracing::warn!(status = response.status, "tips endpoint returned an error");
            self.phase = SessionPhase::Error;
            self.surface.set_text(Zone::Tip, &format!("ERROR: {text}"));
            return;
        }

        let parsed = parse_tips(&response.body, self.options.shape);
        match Carousel::new(parsed.records) {
            Ok(carousel) => {
                let start = carousel.node_at(rand::thread_rng().gen_range(0..carousel.len()));
                tracing::debug!(tips = carousel.len(), "tips carousel rebuilt");
                self.carousel = Some(carousel);
                self.current = Some(start);
                self.phase = SessionPhase::Loaded;
                self.show_current();
            }
            Err(error) => {
                tracing::warn!(%error, "tips file too small for a carousel");
                self.phase = SessionPhase::Error;
                self.carousel = None;
                self.current = None;
                self.surface.set_text(Zone::Tip, &format!("ERROR: {error}"));
            }
        }
    }

    fn show_current(&mut self) {
        let Some(record) = self.current_record() else {
            return;
        };
        let tip = record.primary().to_owned();
        let items = record.rationale_items();
        self.surface.set_text(Zone::Tip, &tip);
        self.surface.clear_children(Zone::Rationale);
        if let Some(items) = items {
            self.surface.render_list(Zone::Rationale, &items);
        }
    }
}

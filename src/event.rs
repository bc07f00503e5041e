use crate::api::directory::types::UserInfo;
use crate::api::pulse::types::{
    AlertReport, ClearMetricsResponse, HungReportResponse, MetricDetail, MetricsResponse,
    TestDataResponse,
};
use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, MouseEvent};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;

/// Everything the main loop reacts to: terminal input, the tick interval the
/// debounce and flash timers ride on, and one completion variant per request
/// kind. Request tasks flatten their errors to `String` before crossing the
/// channel.
#[derive(Clone, Debug)]
pub enum Event {
    Tick,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    AlertsFetched(Result<AlertReport, String>),
    MetricsFetched(Result<MetricsResponse, String>),
    MetricDetailFetched(Result<MetricDetail, String>),
    MeterToggled(Result<serde_json::Value, String>),
    MetricsCleared(Result<ClearMetricsResponse, String>),
    HungReportFetched(Result<HungReportResponse, String>),
    TestDataFetched(Result<TestDataResponse, String>),
    DbConnectionTested(Result<String, String>),
    CurrentTimeFetched(Result<String, String>),
    UserInfoFetched(Result<UserInfo, String>),
}

#[derive(Debug)]
pub struct EventHandler {
    _tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: std::time::Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let _tx = tx.clone();
        let task_tx = tx.clone();
        let _task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                let tick_delay = interval.tick();
                let crossterm_event = reader.next().fuse();
                tokio::select! {
                    _ = tick_delay => {
                        if task_tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    Some(Ok(evt)) = crossterm_event => {
                        let forwarded = match evt {
                            CrosstermEvent::Key(key)
                                if key.kind == crossterm::event::KeyEventKind::Press =>
                            {
                                Some(Event::Key(key))
                            }
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(event) = forwarded
                            && task_tx.send(event).is_err()
                        {
                            break;
                        }
                    }
                };
            }
        });
        Self { _tx, rx, _task }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self._tx.clone()
    }

    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Unable to get event"))
    }
}

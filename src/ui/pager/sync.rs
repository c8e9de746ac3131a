//! Pager driver: couples the reducer to animation tasks and to the
//! page-change callback.
//!
//! Each animated transition runs as one tokio task that sends frames back
//! over a channel. The owner applies them on its own task, so a superseding
//! `jump_to_page` is handled while an animation is still outstanding.
//! Starting a new transition aborts the previous task; frames it already
//! queued carry a stale generation and are dropped by the reducer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::{PagerConfig, SelectionPolicy};
use crate::error::{NavError, Result};
use crate::ui::mvi::Reducer;

use super::intent::PagerIntent;
use super::page::PageDescriptor;
use super::reducer::{PagerEffect, PagerReducer};
use super::state::{PagerState, TabIndicator, Transition};

/// Called once per distinct settled page.
pub type PageChangeCallback = Box<dyn FnMut(&PageDescriptor) + Send>;

/// Animation duration and frame interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub duration: Duration,
    pub frame_interval: Duration,
}

impl AnimationTiming {
    fn frame_count(&self) -> u32 {
        let frames = self.duration.as_millis() / self.frame_interval.as_millis().max(1);
        u32::try_from(frames).unwrap_or(u32::MAX).max(1)
    }
}

impl From<&PagerConfig> for AnimationTiming {
    fn from(config: &PagerConfig) -> Self {
        Self {
            duration: Duration::from_millis(config.animation_ms),
            frame_interval: Duration::from_millis(config.frame_ms.max(1)),
        }
    }
}

#[derive(Debug)]
enum AnimationEvent {
    Frame { generation: u64, progress: f32 },
    Finished { generation: u64 },
}

struct AnimationTask {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Keeps the tab strip, the page surface and programmatic page requests
/// consistent with one settled page.
pub struct PagerTabSync {
    pages: Vec<PageDescriptor>,
    state: PagerState,
    policy: SelectionPolicy,
    timing: AnimationTiming,
    on_page_changed: PageChangeCallback,
    animation: Option<AnimationTask>,
    events_tx: mpsc::UnboundedSender<AnimationEvent>,
    events_rx: mpsc::UnboundedReceiver<AnimationEvent>,
}

impl PagerTabSync {
    /// Build the pager over `pages`.
    ///
    /// With `Some(initial_page)` the pager rests there and announces it to
    /// `on_page_changed` right away. With `None` it rests on the first page
    /// and stays silent until the first settle.
    ///
    /// # Errors
    /// `OutOfRangeSelection` if `pages` is empty, or if `initial_page` is out
    /// of range under [`SelectionPolicy::Reject`].
    pub fn new(
        pages: Vec<PageDescriptor>,
        initial_page: Option<usize>,
        config: &PagerConfig,
        on_page_changed: PageChangeCallback,
    ) -> Result<Self> {
        if pages.is_empty() {
            return Err(NavError::OutOfRangeSelection {
                index: initial_page.unwrap_or_default(),
                page_count: 0,
            });
        }

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut sync = Self {
            state: PagerState::new(pages.len(), 0),
            pages,
            policy: config.selection_policy,
            timing: AnimationTiming::from(config),
            on_page_changed,
            animation: None,
            events_tx,
            events_rx,
        };
        if let Some(initial_page) = initial_page {
            sync.state.settled_page = sync.checked_index(initial_page)?;
            sync.dispatch(PagerIntent::Attach);
        }
        Ok(sync)
    }

    /// Animate to `index`, as a tab click does.
    ///
    /// Returns once the animation is started; call [`settle`](Self::settle)
    /// or [`next_frame`](Self::next_frame) to let it progress. Outside a
    /// tokio runtime there is nothing to animate on and the page is
    /// changed immediately.
    pub fn select_tab(&mut self, index: usize) -> Result<()> {
        let index = self.checked_index(index)?;
        if tokio::runtime::Handle::try_current().is_err() {
            tracing::warn!(index, "no runtime for tab animation, jumping instead");
            self.dispatch(PagerIntent::JumpToPage(index));
            return Ok(());
        }
        self.dispatch(PagerIntent::SelectTab(index));
        Ok(())
    }

    /// Move to `index` without animating, cancelling any animation in flight.
    pub fn jump_to_page(&mut self, index: usize) -> Result<()> {
        let index = self.checked_index(index)?;
        self.dispatch(PagerIntent::JumpToPage(index));
        Ok(())
    }

    /// Finger drag toward `target`, `progress` of the way there.
    pub fn drag(&mut self, target: usize, progress: f32) -> Result<()> {
        let target = self.checked_index(target)?;
        self.dispatch(PagerIntent::Drag { target, progress });
        Ok(())
    }

    /// Finger lifted: settle on the nearer page.
    pub fn release(&mut self) {
        self.dispatch(PagerIntent::Release);
    }

    /// Wait for and apply the next animation event.
    ///
    /// Returns `false` without waiting when no animation is in flight.
    pub async fn next_frame(&mut self) -> bool {
        if self.animation.is_none() {
            return false;
        }
        match self.events_rx.recv().await {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    /// Drive the animation in flight, if any, until the pager settles.
    pub async fn settle(&mut self) {
        while self.next_frame().await {}
    }

    /// Apply animation events that already arrived, without waiting.
    pub fn pump(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn settled_page(&self) -> usize {
        self.state.settled_page
    }

    pub fn transition(&self) -> Transition {
        self.state.transition
    }

    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn tab_strip(&self) -> Vec<TabIndicator> {
        self.state.tab_strip()
    }

    fn checked_index(&self, index: usize) -> Result<usize> {
        let page_count = self.pages.len();
        if index < page_count {
            return Ok(index);
        }
        match self.policy {
            SelectionPolicy::Reject => Err(NavError::OutOfRangeSelection { index, page_count }),
            SelectionPolicy::Clamp => {
                tracing::warn!(index, page_count, "page index out of range, clamping");
                Ok(page_count - 1)
            }
        }
    }

    fn apply_event(&mut self, event: AnimationEvent) {
        let intent = match event {
            AnimationEvent::Frame {
                generation,
                progress,
            } => PagerIntent::Frame {
                generation,
                progress,
            },
            AnimationEvent::Finished { generation } => PagerIntent::Settle { generation },
        };
        self.dispatch(intent);
    }

    fn dispatch(&mut self, intent: PagerIntent) {
        let reduction = PagerReducer::reduce(std::mem::take(&mut self.state), intent);
        self.state = reduction.state;

        for effect in reduction.effects {
            match effect {
                PagerEffect::StartAnimation { target, generation } => {
                    tracing::debug!(target, generation, "tab animation started");
                    self.spawn_animation(generation);
                }
                PagerEffect::CancelAnimation { generation } => {
                    if let Some(task) = self.animation.take() {
                        if task.generation == generation {
                            tracing::debug!(generation, "tab animation cancelled");
                        }
                        task.handle.abort();
                    }
                }
                PagerEffect::PageChanged(index) => {
                    tracing::info!(page = index, "page settled");
                    if let Some(page) = self.pages.get(index) {
                        (self.on_page_changed)(page);
                    }
                }
            }
        }

        // The task of a finished transition has nothing left to send.
        if self.state.is_settled() {
            self.animation = None;
        }
    }

    fn spawn_animation(&mut self, generation: u64) {
        let tx = self.events_tx.clone();
        let timing = self.timing;
        let handle = tokio::spawn(async move {
            let frames = timing.frame_count();
            let mut ticker = tokio::time::interval(timing.frame_interval);
            // First tick completes immediately.
            ticker.tick().await;
            for frame in 1..=frames {
                ticker.tick().await;
                let progress = frame as f32 / frames as f32;
                if tx.send(AnimationEvent::Frame { generation, progress }).is_err() {
                    return;
                }
            }
            let _ = tx.send(AnimationEvent::Finished { generation });
        });

        if let Some(previous) = self.animation.replace(AnimationTask { generation, handle }) {
            previous.handle.abort();
        }
    }
}

impl Drop for PagerTabSync {
    fn drop(&mut self) {
        if let Some(task) = self.animation.take() {
            task.handle.abort();
        }
    }
}

use crossterm::event::{poll, Event, KeyEvent, MouseEvent};
use tokio::time::{Duration, Instant};

/// Terminal event pump.
///
/// Polls crossterm without blocking and falls back to a timed tick so
/// the app loop keeps breathing while the user is idle.
pub struct EventHandler {
    tick_rate: Duration,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100), // 10 Hz application ticks
            last_render_time: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) => return Ok(EventType::Key(key)),
                Event::Mouse(mouse) => return Ok(EventType::Mouse(mouse)),
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.elapsed()
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.time_since_last_render() >= Duration::from_millis(16) // Cap at ~60 FPS
    }

    /// Record that a frame was just drawn
    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

//! # Regeneration Session
//!
//! Owns the current content, style and logo selection, and turns discrete
//! edit events into renders through an explicit state machine:
//!
//! ```text
//!           trigger                deadline due           chain ok
//! Idle ───────────────► Pending ───────────────► Rendering ────► Idle
//!   ▲                      ▲                         │
//!   │                      │ trigger                 │ chain failed
//!   └──────── trigger ── Error ◄─────────────────────┘
//! ```
//!
//! Text edits are debounced by [`TEXT_DEBOUNCE`]: every keystroke moves the
//! deadline, so only the content as it stands when typing pauses is
//! rendered. Style, logo and error-correction changes render immediately.
//! There is exactly one pending slot; triggers arriving while one is armed
//! replace its deadline, so redundant renders never stack up.
//!
//! The session is synchronous and clock-agnostic: callers pass an
//! [`Instant`] to every trigger and drive [`Session::poll`] from their own
//! event loop. Nothing here spawns threads or sleeps, which also makes the
//! debounce window trivial to test.
//!
//! A failed chain keeps the previous preview on screen and parks the
//! session in [`Phase::Error`] until the next trigger; a fit that cannot
//! run because the display surface is not laid out yet keeps the full
//! render and retries the fit on later polls.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use image::RgbImage;

use crate::color::Color;
use crate::encode;
use crate::error::SelloError;
use crate::export;
use crate::render;
use crate::render::logo::{self, LogoAsset};
use crate::render::preview::{self, FitOutcome};
use crate::style::{EcLevel, ModuleShape, StyleConfig};

/// Debounce window applied to text edits.
pub const TEXT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Lifecycle phase of the regeneration loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing armed; the preview matches the current inputs.
    Idle,
    /// A trigger fired; a render is due at its deadline.
    Pending,
    /// The render chain is executing.
    Rendering,
    /// The last chain failed; the previous preview is still shown.
    Error,
}

/// What a [`Session::poll`] call did.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// No deadline was due and no fit was outstanding.
    Quiet,
    /// A render completed and the preview was refreshed.
    Rendered,
    /// Rendering succeeded but the display is not laid out; the fit will
    /// retry on a later poll.
    AwaitingLayout,
    /// The chain failed; the message is ready for user display.
    Failed(String),
}

/// Drives encode → render → logo → fit from debounced triggers.
pub struct Session {
    content: String,
    style: StyleConfig,
    logo: Option<LogoAsset>,
    display: (u32, u32),

    phase: Phase,
    deadline: Option<Instant>,
    fit_pending: bool,
    /// Last successful full-resolution render, kept for re-fits.
    rendered: Option<RgbImage>,
    /// Last fitted preview.
    preview: Option<RgbImage>,
    last_error: Option<String>,
}

impl Session {
    /// Create a session. The first [`poll`](Self::poll) at or after `now`
    /// renders immediately, so shells show a preview right at startup.
    pub fn new(content: impl Into<String>, style: StyleConfig, now: Instant) -> Self {
        Self {
            content: content.into(),
            style,
            logo: None,
            display: (0, 0),
            phase: Phase::Pending,
            deadline: Some(now),
            fit_pending: false,
            rendered: None,
            preview: None,
            last_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn logo(&self) -> Option<&LogoAsset> {
        self.logo.as_ref()
    }

    /// The current fitted preview, if any chain has completed.
    pub fn preview(&self) -> Option<&RgbImage> {
        self.preview.as_ref()
    }

    /// Message from the most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Record a text edit. Debounced: the render deadline moves to
    /// `now + TEXT_DEBOUNCE`, replacing any pending one.
    pub fn edit_text(&mut self, content: impl Into<String>, now: Instant) {
        self.content = content.into();
        self.arm(now + TEXT_DEBOUNCE);
    }

    /// Change the error correction level; renders on the next poll.
    pub fn set_error_correction(&mut self, level: EcLevel, now: Instant) {
        self.style.error_correction = level;
        self.arm(now);
    }

    /// Change the module shape; renders on the next poll.
    pub fn set_shape(&mut self, shape: ModuleShape, now: Instant) {
        self.style.shape = shape;
        self.arm(now);
    }

    /// Change the foreground color; renders on the next poll.
    pub fn set_foreground(&mut self, color: Color, now: Instant) {
        self.style.foreground = color;
        self.arm(now);
    }

    /// Change the background color; renders on the next poll.
    pub fn set_background(&mut self, color: Color, now: Instant) {
        self.style.background = color;
        self.arm(now);
    }

    /// Import a logo and arm a render. A file that does not decode is
    /// rejected here and the previous logo selection stays active.
    pub fn set_logo(&mut self, path: impl Into<PathBuf>, now: Instant) -> Result<(), SelloError> {
        let asset = LogoAsset::open(path)?;
        self.logo = Some(asset);
        self.arm(now);
        Ok(())
    }

    /// Drop the logo selection; renders on the next poll.
    pub fn clear_logo(&mut self, now: Instant) {
        self.logo = None;
        self.arm(now);
    }

    /// Report the display surface size. If a full render is waiting on
    /// layout, the fit reruns on the next poll; otherwise the new size
    /// applies from the next render on.
    pub fn set_display_size(&mut self, width: u32, height: u32) {
        self.display = (width, height);
    }

    fn arm(&mut self, deadline: Instant) {
        self.phase = Phase::Pending;
        self.deadline = Some(deadline);
    }

    /// Run whatever work is due at `now`.
    ///
    /// A due deadline runs the full chain; an outstanding fit (display was
    /// not laid out when the chain finished) retries just the fit. With
    /// neither, this is a cheap no-op, so shells can poll on every tick.
    pub fn poll(&mut self, now: Instant) -> PollOutcome {
        let due = matches!(
            (self.phase, self.deadline),
            (Phase::Pending, Some(deadline)) if now >= deadline
        );
        if !due {
            if self.fit_pending {
                return self.refit();
            }
            return PollOutcome::Quiet;
        }

        self.phase = Phase::Rendering;
        self.deadline = None;
        let outcome = self.regenerate();

        // A trigger fired from inside the chain leaves a fresh Pending
        // state behind; otherwise settle on the outcome.
        if self.phase == Phase::Rendering {
            self.phase = match outcome {
                PollOutcome::Failed(_) => Phase::Error,
                _ => Phase::Idle,
            };
        }
        outcome
    }

    fn regenerate(&mut self) -> PollOutcome {
        let matrix = match encode::encode(&self.content, self.style.error_correction) {
            Ok(matrix) => matrix,
            Err(e) => return self.fail(e),
        };
        let base = match render::render_preview(&matrix, &self.style) {
            Ok(image) => image,
            Err(e) => return self.fail(e),
        };
        let full = match &self.logo {
            Some(asset) => logo::apply_logo(&base, asset, self.style.background),
            None => base,
        };

        self.rendered = Some(full);
        self.last_error = None;
        self.refit()
    }

    fn refit(&mut self) -> PollOutcome {
        let Some(full) = &self.rendered else {
            self.fit_pending = false;
            return PollOutcome::Quiet;
        };
        match preview::fit_to_display(full, self.display.0, self.display.1, preview::MAX_PREVIEW_PX)
        {
            FitOutcome::Ready(image) => {
                self.preview = Some(image);
                self.fit_pending = false;
                PollOutcome::Rendered
            }
            FitOutcome::AwaitLayout => {
                self.fit_pending = true;
                PollOutcome::AwaitingLayout
            }
        }
    }

    fn fail(&mut self, error: SelloError) -> PollOutcome {
        let message = error.to_string();
        self.last_error = Some(message.clone());
        PollOutcome::Failed(message)
    }

    /// Render the current inputs at the export preset and save to `path`.
    ///
    /// Runs the same chain as the preview but at export resolution; the
    /// displayed preview is not disturbed either way. Errors are returned
    /// and also recorded as [`last_error`](Self::last_error).
    pub fn export(&mut self, path: &Path) -> Result<(), SelloError> {
        let result = self.try_export(path);
        if let Err(e) = &result {
            self.last_error = Some(e.to_string());
        }
        result
    }

    fn try_export(&self, path: &Path) -> Result<(), SelloError> {
        let matrix = encode::encode(&self.content, self.style.error_correction)?;
        let base = render::render_export(&matrix, &self.style)?;
        let full = match &self.logo {
            Some(asset) => logo::apply_logo(&base, asset, self.style.background),
            None => base,
        };
        export::save_image(&full, path)
    }
}

//! Editing, generated and viewing phases of a tree session.
//!
//! [`Session`] owns the current [`TreeState`] and replaces it wholesale on
//! every edit, so a layout computed from [`Session::tree`] always sees a
//! complete state. Gestures reach the session as plain events; timing comes
//! in through explicit `Instant`s.

use crate::codec;
use crate::error::AppError;
use crate::layout::{layout_with_rng, LayoutStrategy};
use crate::models::{TreeRow, TreeState};
use crate::share;
use rand::Rng;
use std::time::{Duration, Instant};

/// Reveal display flag with its auto-hide deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    held: bool,
    hide_at: Option<Instant>,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        self.held || self.hide_at.is_some()
    }

    /// Reveal for as long as the press is held.
    pub fn press(&mut self) {
        self.held = true;
    }

    /// Reveal until `now + duration` unless a press keeps it open.
    pub fn shake(&mut self, now: Instant, duration: Duration) {
        self.hide_at = Some(now + duration);
    }

    /// Hide immediately and cancel any pending auto-hide.
    pub fn release(&mut self) {
        self.held = false;
        self.hide_at = None;
    }

    /// Apply the auto-hide deadline. Returns `true` when this call hid the
    /// tree.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                !self.held
            }
            _ => false,
        }
    }
}

/// Draft being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editing {
    tree: TreeState,
    highlight_mode: bool,
}

impl Editing {
    pub fn new(tree: TreeState) -> Self {
        Self {
            tree,
            highlight_mode: false,
        }
    }

    pub fn tree(&self) -> &TreeState {
        &self.tree
    }

    pub fn highlight_mode(&self) -> bool {
        self.highlight_mode
    }

    /// Replace the message. Ignored while picking highlights.
    ///
    /// # Returns
    /// `true` when the content was replaced (and highlights cleared).
    pub fn set_content(&mut self, content: &str) -> bool {
        if self.highlight_mode {
            return false;
        }
        self.tree = std::mem::take(&mut self.tree).with_content(content);
        true
    }

    pub fn set_topper(&mut self, topper: &str) {
        self.tree = std::mem::take(&mut self.tree).with_topper(topper);
    }

    pub fn set_style_index(&mut self, style_index: Option<i64>) {
        self.tree = std::mem::take(&mut self.tree).with_style_index(style_index);
    }

    pub fn toggle_highlight_mode(&mut self) -> bool {
        self.highlight_mode = !self.highlight_mode;
        self.highlight_mode
    }

    /// Toggle the highlight at a content-stream index. Only honored in
    /// highlight mode.
    pub fn toggle_highlight(&mut self, index: usize) -> bool {
        if !self.highlight_mode {
            return false;
        }
        self.tree = std::mem::take(&mut self.tree).with_highlight_toggled(index);
        true
    }
}

impl Default for Editing {
    fn default() -> Self {
        Self::new(TreeState::starter())
    }
}

/// Generated tree with its share link; read-only apart from reveal preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locked {
    tree: TreeState,
    token: String,
    share_url: String,
    pub reveal: Reveal,
}

impl Locked {
    pub fn tree(&self) -> &TreeState {
        &self.tree
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn share_url(&self) -> &str {
        &self.share_url
    }
}

/// Tree received through a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewing {
    tree: TreeState,
    pub reveal: Reveal,
}

impl Viewing {
    pub fn new(tree: TreeState) -> Self {
        Self {
            tree,
            reveal: Reveal::default(),
        }
    }

    pub fn tree(&self) -> &TreeState {
        &self.tree
    }
}

/// Lifecycle of one tree, from draft to shared link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Editing(Editing),
    Locked(Locked),
    Viewing(Viewing),
}

impl Default for Session {
    fn default() -> Self {
        Self::Editing(Editing::default())
    }
}

impl Session {
    /// Start from an incoming URL fragment.
    ///
    /// A decodable `tree=` token opens the viewer; anything else opens a
    /// fresh editor, exactly as if no fragment had been given.
    pub fn from_fragment(fragment: &str) -> Self {
        match share::load_tree(fragment) {
            Some(tree) => Self::Viewing(Viewing::new(tree)),
            None => Self::default(),
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            Self::Editing(_) => "editing",
            Self::Locked(_) => "locked",
            Self::Viewing(_) => "viewing",
        }
    }

    pub fn tree(&self) -> &TreeState {
        match self {
            Self::Editing(editing) => editing.tree(),
            Self::Locked(locked) => locked.tree(),
            Self::Viewing(viewing) => viewing.tree(),
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut Editing> {
        match self {
            Self::Editing(editing) => Some(editing),
            _ => None,
        }
    }

    /// Lay out the current tree.
    pub fn rows<R>(&self, strategy: LayoutStrategy, rng: &mut R) -> Vec<TreeRow>
    where
        R: Rng + ?Sized,
    {
        layout_with_rng(self.tree(), strategy, rng)
    }

    /// Encode the draft and lock it behind a share link.
    ///
    /// # Returns
    /// The share URL.
    pub fn generate(&mut self, base_url: &str) -> Result<String, AppError> {
        let Self::Editing(editing) = self else {
            return Err(self.invalid("generate"));
        };
        let token = codec::encode(&editing.tree)?;
        let share_url = share::share_url(base_url, &token);
        tracing::debug!(token_len = token.len(), "generated share link");

        *self = Self::Locked(Locked {
            tree: std::mem::take(&mut editing.tree),
            token,
            share_url: share_url.clone(),
            reveal: Reveal::default(),
        });
        Ok(share_url)
    }

    /// Drop the generated link and resume editing the same draft.
    pub fn back_to_edit(&mut self) -> Result<(), AppError> {
        let Self::Locked(locked) = self else {
            return Err(self.invalid("return to editing"));
        };
        *self = Self::Editing(Editing::new(std::mem::take(&mut locked.tree)));
        Ok(())
    }

    /// Leave whatever is shown and start a fresh draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn reveal_mut(&mut self) -> Option<&mut Reveal> {
        match self {
            Self::Editing(_) => None,
            Self::Locked(locked) => Some(&mut locked.reveal),
            Self::Viewing(viewing) => Some(&mut viewing.reveal),
        }
    }

    pub fn is_revealed(&self) -> bool {
        match self {
            Self::Editing(_) => false,
            Self::Locked(locked) => locked.reveal.is_revealed(),
            Self::Viewing(viewing) => viewing.reveal.is_revealed(),
        }
    }

    /// Start a press-and-hold reveal. Ignored while editing.
    pub fn press(&mut self) {
        if let Some(reveal) = self.reveal_mut() {
            reveal.press();
        }
    }

    /// End a press and cancel any pending auto-hide.
    pub fn release(&mut self) {
        if let Some(reveal) = self.reveal_mut() {
            reveal.release();
        }
    }

    /// Reveal for `duration` after a shake.
    pub fn shake(&mut self, now: Instant, duration: Duration) {
        if let Some(reveal) = self.reveal_mut() {
            reveal.shake(now, duration);
        }
    }

    /// Advance the auto-hide timer. Returns `true` when the tree was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.reveal_mut().is_some_and(|reveal| reveal.tick(now))
    }

    fn invalid(&self, action: &'static str) -> AppError {
        AppError::InvalidTransition {
            action,
            phase: self.phase(),
        }
    }
}

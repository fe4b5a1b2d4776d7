use std::path::{Path, PathBuf};

use super::{FallbackLoader, LoadError, ViewOptions, load_image};
use crate::pixel::RgbImage;

/// A navigation request, usually from a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    /// Reload and show the selected file again.
    Redraw,
    Quit,
}

impl Command {
    /// Map a key name to a command.
    ///
    /// left, up, backspace and `p` go back; right, down, space and `n` go
    /// forward; escape and `q` quit. Anything else is ignored.
    pub fn from_key(key: &str) -> Option<Command> {
        match key.trim().to_ascii_lowercase().as_str() {
            "left" | "up" | "backspace" | "p" => Some(Command::Previous),
            "right" | "down" | "space" | "n" => Some(Command::Next),
            "r" | "redraw" => Some(Command::Redraw),
            "escape" | "esc" | "q" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Whether the navigation loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The image currently on display and the file it came from.
#[derive(Clone, Debug)]
pub struct Shown {
    pub path: PathBuf,
    pub image: RgbImage,
}

/// Walks a list of files, keeping the last successfully loaded image.
pub struct Navigator<F> {
    files: Vec<PathBuf>,
    index: usize,
    options: ViewOptions,
    fallback: F,
    shown: Option<Shown>,
}

impl<F: FallbackLoader> Navigator<F> {
    /// Returns `None` for an empty file list.
    pub fn new(files: Vec<PathBuf>, options: ViewOptions, fallback: F) -> Option<Self> {
        if files.is_empty() {
            return None;
        }
        Some(Self {
            files,
            index: 0,
            options,
            fallback,
            shown: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// The selected file, which may differ from the shown one after a failed load.
    pub fn selected(&self) -> &Path {
        &self.files[self.index]
    }

    pub fn shown(&self) -> Option<&Shown> {
        self.shown.as_ref()
    }

    /// Apply a command. The index is clamped to the list, never wrapping.
    ///
    /// On a load error the previously shown image stays in place.
    pub fn apply(&mut self, command: Command) -> Result<Flow, LoadError> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Previous => self.index = self.index.saturating_sub(1),
            Command::Next => self.index = (self.index + 1).min(self.files.len() - 1),
            Command::Redraw => {}
        }
        self.load_selected()?;
        Ok(Flow::Continue)
    }

    fn load_selected(&mut self) -> Result<(), LoadError> {
        let path = self.selected().to_path_buf();
        match load_image(&path, &self.options, &self.fallback) {
            Ok(image) => {
                self.shown = Some(Shown { path, image });
                Ok(())
            }
            Err(err) => {
                log::warn!("{err}; keeping the previous image");
                Err(err)
            }
        }
    }
}

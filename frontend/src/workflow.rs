//! Upload workflow state machine.
//!
//! Owns the lifecycle of the single candidate file, from selection through
//! validation, removal and submission. This module never touches the DOM:
//! [`UploadWorkflow::dispatch`] decides the next state and returns the
//! [`Effect`]s the render layer must apply.
//!
//! ```text
//!            valid selection                 remove / invalid selection
//!   EMPTY ─────────────────────▶ ARMED ─────────────────────────────────▶ EMPTY
//!     ▲                           │ ▲                                      │
//!     └── invalid selection ──────┘ └──── valid selection (replaces) ──────┘
//! ```

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::format::format_file_size;
use crate::types::CandidateFile;

/// The two lifecycle states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    /// No file staged: prompt visible, submit disabled.
    #[default]
    Empty,
    /// A validated file is staged for submission.
    Armed(CandidateFile),
}

/// Where a selection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSource {
    Picker,
    Drop,
}

/// Input events, one per user interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadEvent {
    /// Files reported by the picker `change` event or a drop.
    Selected {
        source: SelectionSource,
        files: Vec<CandidateFile>,
    },
    /// The remove-file control was activated.
    Remove,
    DragEnter,
    DragOver,
    DragLeave,
    /// The form is being submitted.
    Submit,
    /// The page came back from the back/forward cache.
    PageRestored,
}

/// Side effects the render layer applies after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Show a validation failure in the notification area.
    Notify(UploadError),
    /// Clear the native file input's value.
    ResetPicker,
    /// Copy the dropped files into the native file input so the form posts them.
    AttachDroppedFiles,
    /// Cancel the native form submission.
    BlockSubmit,
}

/// What the page should currently show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub prompt_visible: bool,
    pub file_info_visible: bool,
    pub submit_enabled: bool,
    pub loading: bool,
    pub dragover: bool,
    pub file_name: String,
    pub file_size: String,
}

/// Client-side state of the upload form.
///
/// Constructed once per page load.
#[derive(Clone, Debug)]
pub struct UploadWorkflow {
    config: UploadConfig,
    state: UploadState,
    dragover: bool,
    submitting: bool,
}

impl UploadWorkflow {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            state: UploadState::Empty,
            dragover: false,
            submitting: false,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// The staged file, if any.
    pub fn candidate(&self) -> Option<&CandidateFile> {
        match &self.state {
            UploadState::Armed(file) => Some(file),
            UploadState::Empty => None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.candidate().is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Apply one event and return the effects to perform.
    pub fn dispatch(&mut self, event: UploadEvent) -> Vec<Effect> {
        match event {
            UploadEvent::DragEnter | UploadEvent::DragOver => {
                self.dragover = true;
                Vec::new()
            }
            UploadEvent::DragLeave => {
                self.dragover = false;
                Vec::new()
            }
            UploadEvent::Selected { source, files } => {
                if source == SelectionSource::Drop {
                    self.dragover = false;
                }
                if self.submitting {
                    log::debug!("Ignoring selection while the form is submitting");
                    return Vec::new();
                }
                self.select(source, files)
            }
            UploadEvent::Remove => {
                if self.submitting || !self.is_armed() {
                    return Vec::new();
                }
                log::info!("🗑️ File removed");
                self.state = UploadState::Empty;
                vec![Effect::ResetPicker]
            }
            UploadEvent::Submit => {
                if self.submitting || !self.is_armed() {
                    log::warn!("Blocked submit without a staged file");
                    return vec![Effect::BlockSubmit];
                }
                log::info!(
                    "📤 Submitting {}",
                    self.candidate().map(|f| f.name.as_str()).unwrap_or_default()
                );
                self.submitting = true;
                Vec::new()
            }
            UploadEvent::PageRestored => {
                self.submitting = false;
                self.dragover = false;
                Vec::new()
            }
        }
    }

    fn select(&mut self, source: SelectionSource, mut files: Vec<CandidateFile>) -> Vec<Effect> {
        match (source, files.len()) {
            (_, 1) => {}
            // The native input was emptied, so nothing can be posted anymore.
            (SelectionSource::Picker, 0) => {
                if self.is_armed() {
                    log::debug!("File picker cleared");
                    self.state = UploadState::Empty;
                }
                return Vec::new();
            }
            (SelectionSource::Drop, count) => {
                log::debug!("Ignoring drop of {} files", count);
                return Vec::new();
            }
            (SelectionSource::Picker, count) => {
                log::debug!("Ignoring picker selection of {} files", count);
                return Vec::new();
            }
        }

        let file = files.remove(0);
        match file.validate(&self.config) {
            Ok(()) => {
                log::info!("📄 File ready: {} ({})", file.name, format_file_size(file.size_bytes));
                self.state = UploadState::Armed(file);
                match source {
                    SelectionSource::Drop => vec![Effect::AttachDroppedFiles],
                    SelectionSource::Picker => Vec::new(),
                }
            }
            Err(err) => {
                log::warn!("Rejected '{}': {}", file.name, err.kind());
                self.state = UploadState::Empty;
                vec![Effect::Notify(err), Effect::ResetPicker]
            }
        }
    }

    /// Derive what the page shows from the current state.
    pub fn presentation(&self) -> Presentation {
        let (file_name, file_size) = match self.candidate() {
            Some(file) => (file.name.clone(), format_file_size(file.size_bytes)),
            None => (String::new(), String::new()),
        };
        let armed = self.is_armed();
        Presentation {
            prompt_visible: !armed,
            file_info_visible: armed,
            submit_enabled: armed && !self.submitting,
            loading: self.submitting,
            dragover: self.dragover,
            file_name,
            file_size,
        }
    }
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self::new(UploadConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;

    fn pick(files: Vec<CandidateFile>) -> UploadEvent {
        UploadEvent::Selected {
            source: SelectionSource::Picker,
            files,
        }
    }

    fn dropped(files: Vec<CandidateFile>) -> UploadEvent {
        UploadEvent::Selected {
            source: SelectionSource::Drop,
            files,
        }
    }

    fn csv(size: u64) -> CandidateFile {
        CandidateFile::new("statement.csv", size)
    }

    fn armed() -> UploadWorkflow {
        let mut wf = UploadWorkflow::default();
        wf.dispatch(pick(vec![csv(2048)]));
        assert!(wf.is_armed());
        wf
    }

    fn notifications(effects: &[Effect]) -> Vec<&UploadError> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(err) => Some(err),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let wf = UploadWorkflow::default();
        let view = wf.presentation();
        assert_eq!(wf.state(), &UploadState::Empty);
        assert!(view.prompt_visible);
        assert!(!view.file_info_visible);
        assert!(!view.submit_enabled);
        assert!(!view.loading);
    }

    #[test]
    fn test_non_csv_is_rejected_once() {
        for (name, size) in [
            ("photo.png", 10),
            ("notes.txt", 0),
            ("data.csv.bak", 5),
            ("big.pdf", MAX_FILE_SIZE * 4),
        ] {
            let mut wf = UploadWorkflow::default();
            let effects = wf.dispatch(pick(vec![CandidateFile::new(name, size)]));
            assert_eq!(wf.state(), &UploadState::Empty);
            let notes = notifications(&effects);
            assert_eq!(notes.len(), 1, "{}", name);
            assert!(matches!(notes[0], UploadError::InvalidFileType { .. }));
        }
    }

    #[test]
    fn test_uppercase_extension_is_accepted() {
        let mut wf = UploadWorkflow::default();
        wf.dispatch(pick(vec![CandidateFile::new("EXPORT.CSV", 100)]));
        assert!(wf.is_armed());
    }

    #[test]
    fn test_oversized_csv_is_rejected_once() {
        let mut wf = UploadWorkflow::default();
        let effects = wf.dispatch(pick(vec![csv(MAX_FILE_SIZE + 1)]));
        assert_eq!(wf.state(), &UploadState::Empty);
        let notes = notifications(&effects);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].to_string(), "File size must be less than 16MB.");
        assert!(effects.contains(&Effect::ResetPicker));
    }

    #[test]
    fn test_valid_csv_arms_with_display_values() {
        for size in [0, 1024, 1536, MAX_FILE_SIZE] {
            let mut wf = UploadWorkflow::default();
            let effects = wf.dispatch(pick(vec![csv(size)]));
            assert!(effects.is_empty());
            assert_eq!(wf.state(), &UploadState::Armed(csv(size)));

            let view = wf.presentation();
            assert!(!view.prompt_visible);
            assert!(view.file_info_visible);
            assert!(view.submit_enabled);
            assert_eq!(view.file_name, "statement.csv");
            assert_eq!(view.file_size, format_file_size(size));
        }
    }

    #[test]
    fn test_invalid_selection_discards_armed_file() {
        let mut wf = armed();
        wf.dispatch(pick(vec![CandidateFile::new("oops.json", 10)]));
        assert_eq!(wf.candidate(), None);
        assert!(!wf.presentation().submit_enabled);
    }

    #[test]
    fn test_new_selection_replaces_candidate() {
        let mut wf = armed();
        wf.dispatch(pick(vec![CandidateFile::new("march.csv", 99)]));
        assert_eq!(wf.candidate().map(|f| f.name.as_str()), Some("march.csv"));
    }

    #[test]
    fn test_remove_returns_to_empty() {
        let mut wf = armed();
        let effects = wf.dispatch(UploadEvent::Remove);
        assert_eq!(effects, vec![Effect::ResetPicker]);
        assert_eq!(wf.state(), &UploadState::Empty);
        let view = wf.presentation();
        assert!(view.prompt_visible);
        assert!(!view.submit_enabled);
    }

    #[test]
    fn test_remove_when_empty_is_noop() {
        let mut wf = UploadWorkflow::default();
        assert!(wf.dispatch(UploadEvent::Remove).is_empty());
        assert_eq!(wf.state(), &UploadState::Empty);
    }

    #[test]
    fn test_submit_when_armed_shows_loader() {
        let mut wf = armed();
        let before = wf.candidate().cloned();
        let effects = wf.dispatch(UploadEvent::Submit);
        assert!(effects.is_empty());

        let view = wf.presentation();
        assert!(view.loading);
        assert!(!view.submit_enabled);
        assert_eq!(wf.candidate().cloned(), before);
    }

    #[test]
    fn test_submit_when_empty_is_blocked() {
        let mut wf = UploadWorkflow::default();
        assert_eq!(wf.dispatch(UploadEvent::Submit), vec![Effect::BlockSubmit]);
        assert!(!wf.is_submitting());
    }

    #[test]
    fn test_double_submit_is_blocked() {
        let mut wf = armed();
        wf.dispatch(UploadEvent::Submit);
        assert_eq!(wf.dispatch(UploadEvent::Submit), vec![Effect::BlockSubmit]);
    }

    #[test]
    fn test_selection_and_remove_ignored_while_submitting() {
        let mut wf = armed();
        wf.dispatch(UploadEvent::Submit);
        assert!(wf.dispatch(pick(vec![CandidateFile::new("x.txt", 1)])).is_empty());
        assert!(wf.dispatch(UploadEvent::Remove).is_empty());
        assert!(wf.is_armed());
    }

    #[test]
    fn test_page_restore_clears_loading() {
        let mut wf = armed();
        wf.dispatch(UploadEvent::Submit);
        wf.dispatch(UploadEvent::PageRestored);
        let view = wf.presentation();
        assert!(!view.loading);
        assert!(view.submit_enabled);
    }

    #[test]
    fn test_drop_matches_picker() {
        let mut picked = UploadWorkflow::default();
        picked.dispatch(pick(vec![csv(4096)]));

        let mut via_drop = UploadWorkflow::default();
        via_drop.dispatch(UploadEvent::DragEnter);
        let effects = via_drop.dispatch(dropped(vec![csv(4096)]));

        assert_eq!(effects, vec![Effect::AttachDroppedFiles]);
        assert_eq!(picked.state(), via_drop.state());
        assert_eq!(picked.presentation(), via_drop.presentation());
    }

    #[test]
    fn test_drop_of_zero_or_many_files_is_noop() {
        for files in [vec![], vec![csv(1), csv(2)]] {
            let mut wf = armed();
            let before = wf.state().clone();
            assert!(wf.dispatch(dropped(files)).is_empty());
            assert_eq!(wf.state(), &before);
            assert!(!wf.presentation().dragover);
        }
    }

    #[test]
    fn test_invalid_drop_does_not_attach_files() {
        let mut wf = UploadWorkflow::default();
        let effects = wf.dispatch(dropped(vec![CandidateFile::new("a.xls", 1)]));
        assert!(!effects.contains(&Effect::AttachDroppedFiles));
        assert_eq!(notifications(&effects).len(), 1);
    }

    #[test]
    fn test_cleared_picker_disarms() {
        let mut wf = armed();
        assert!(wf.dispatch(pick(vec![])).is_empty());
        assert_eq!(wf.state(), &UploadState::Empty);
    }

    #[test]
    fn test_dragover_affordance() {
        let mut wf = armed();
        let state = wf.state().clone();

        wf.dispatch(UploadEvent::DragEnter);
        assert!(wf.presentation().dragover);
        wf.dispatch(UploadEvent::DragOver);
        assert!(wf.presentation().dragover);
        wf.dispatch(UploadEvent::DragLeave);
        assert!(!wf.presentation().dragover);

        assert_eq!(wf.state(), &state);
    }
}

//! CSV upload form with drag & drop support.
//!
//! Thin render layer over [`UploadWorkflow`]: DOM events become
//! [`UploadEvent`]s, the returned [`Effect`]s are applied here, and the
//! markup is derived from [`UploadWorkflow::presentation`]. The file itself
//! is posted by the browser's native form submission.

use leptos::*;
use web_sys::{DragEvent, FileList, HtmlInputElement, MouseEvent, SubmitEvent};

use crate::components::NotificationCenter;
use crate::format::format_file_size;
use crate::workflow::{Effect, SelectionSource, UploadEvent, UploadWorkflow};
use crate::{CandidateFile, UploadConfig};

#[component]
pub fn UploadSection(config: UploadConfig, notifications: NotificationCenter) -> impl IntoView {
    let action = config.action.clone();
    let field_name = config.field_name.clone();
    let accept = config.accept_attribute();
    let size_hint = format!("CSV files up to {}", format_file_size(config.max_file_size));

    let workflow = create_rw_signal(UploadWorkflow::new(config));
    let presentation = create_memo(move |_| workflow.with(|wf| wf.presentation()));
    let file_input = create_node_ref::<html::Input>();

    let dispatch = move |event: UploadEvent| -> Vec<Effect> {
        let effects = workflow.try_update(|wf| wf.dispatch(event)).unwrap_or_default();
        for effect in &effects {
            match effect {
                Effect::Notify(err) => notifications.error(err.to_string()),
                Effect::ResetPicker => {
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                // Need the originating event, applied by the handlers below
                Effect::AttachDroppedFiles | Effect::BlockSubmit => {}
            }
        }
        effects
    };

    // Keep the browser from opening files dropped outside the drop zone
    for handle in [
        window_event_listener(ev::dragenter, |ev| ev.prevent_default()),
        window_event_listener(ev::dragover, |ev| ev.prevent_default()),
        window_event_listener(ev::dragleave, |ev| ev.prevent_default()),
        window_event_listener(ev::drop, |ev| ev.prevent_default()),
    ] {
        on_cleanup(move || handle.remove());
    }

    let restore_handle = window_event_listener(ev::pageshow, move |ev| {
        if ev.persisted() {
            log::debug!("Page restored from cache");
            dispatch(UploadEvent::PageRestored);
        }
    });
    on_cleanup(move || restore_handle.remove());

    let on_drop = move |ev: DragEvent| {
        suppress(&ev);
        let files = ev.data_transfer().and_then(|dt| dt.files());
        let candidates = files.as_ref().map(candidate_files).unwrap_or_default();

        let effects = dispatch(UploadEvent::Selected {
            source: SelectionSource::Drop,
            files: candidates,
        });
        if effects.contains(&Effect::AttachDroppedFiles) {
            if let (Some(input), Some(files)) = (file_input.get_untracked(), files.as_ref()) {
                input.set_files(Some(files));
            }
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let candidates = input.files().map(|files| candidate_files(&files)).unwrap_or_default();
        dispatch(UploadEvent::Selected {
            source: SelectionSource::Picker,
            files: candidates,
        });
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_remove = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dispatch(UploadEvent::Remove);
    };

    let on_submit = move |ev: SubmitEvent| {
        if dispatch(UploadEvent::Submit).contains(&Effect::BlockSubmit) {
            ev.prevent_default();
        }
    };

    let display = |visible: bool, shown: &'static str| if visible { shown } else { "none" };

    view! {
        <form
            class="upload-form"
            action=action
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <div
                class="upload-area"
                id="uploadArea"
                class:dragover=move || presentation.with(|p| p.dragover)
                style:display=move || display(presentation.with(|p| p.prompt_visible), "flex")
                on:click=open_picker
                on:dragenter=move |ev: DragEvent| {
                    suppress(&ev);
                    dispatch(UploadEvent::DragEnter);
                }
                on:dragover=move |ev: DragEvent| {
                    suppress(&ev);
                    dispatch(UploadEvent::DragOver);
                }
                on:dragleave=move |ev: DragEvent| {
                    suppress(&ev);
                    dispatch(UploadEvent::DragLeave);
                }
                on:drop=on_drop
            >
                <div class="upload-icon">"📁"</div>
                <div class="upload-text">"Drag and drop your bank statement here"</div>
                <div class="upload-hint">"or click to browse"</div>
                <div class="upload-hint">{size_hint}</div>
            </div>

            <input
                type="file"
                id="fileInput"
                name=field_name
                accept=accept
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <div
                class="file-info"
                id="fileInfo"
                style:display=move || display(presentation.with(|p| p.file_info_visible), "flex")
            >
                <span class="file-icon">"📄"</span>
                <div class="file-details">
                    <span class="file-name" id="fileName">
                        {move || presentation.with(|p| p.file_name.clone())}
                    </span>
                    <span class="file-size" id="fileSize">
                        {move || presentation.with(|p| p.file_size.clone())}
                    </span>
                </div>
                <button type="button" class="remove-file" id="removeFile" on:click=on_remove>
                    "×"
                </button>
            </div>

            <button
                type="submit"
                class="submit-btn"
                id="submitBtn"
                prop:disabled=move || !presentation.with(|p| p.submit_enabled)
            >
                <span
                    class="btn-text"
                    style:display=move || display(!presentation.with(|p| p.loading), "inline")
                >
                    "Analyze Spending"
                </span>
                <span
                    class="btn-loader"
                    style:display=move || display(presentation.with(|p| p.loading), "flex")
                >
                    <span class="spinner"></span>
                    "Processing..."
                </span>
            </button>
        </form>
    }
}

fn suppress(ev: &web_sys::Event) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn candidate_files(files: &FileList) -> Vec<CandidateFile> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| CandidateFile::new(file.name(), file.size() as u64))
        .collect()
}

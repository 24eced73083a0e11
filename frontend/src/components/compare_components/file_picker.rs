//! Upload area for one template.

use bytes::Bytes;
use common::{document_slot::DocumentSlot, viewer_const::PDF_MIME_TYPE};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileUpload, icons::md_image_icons::MdPictureAsPdf};
use viewer::selection::SelectedFile;

use crate::{
    browser::{clear_file_input, show_alert},
    data_definitions::compare_control::{CompareControl, file_input_id, unreadable_file_message},
};

#[component]
pub fn TemplateFilePicker(slot: DocumentSlot) -> Element {
    let control = use_context::<CompareControl>();
    let summary = use_memo(move || {
        let snapshot = control.snapshot.read();
        match slot {
            DocumentSlot::Old => snapshot.old_file.clone(),
            DocumentSlot::New => snapshot.new_file.clone(),
        }
    });
    let border_color = use_memo(move || if summary.read().is_some() { "#4F46E5" } else { "rgba(0,0,0,0.3)" });

    rsx! {
        label {
            r#for: file_input_id(slot),
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 8px;
                flex: 1 1 0;
                min-height: 140px;
                padding: 20px;
                background: white;
                border: 2px dashed {border_color};
                border-radius: 12px;
                cursor: pointer;
            ",

            div {
                style: "font-size: 18px; font-weight: 500; color: #0F172A;",
                "{slot.label()}"
            }
            match summary() {
                Some(file) => rsx! {
                    Icon { icon: MdPictureAsPdf, style: "width: 36px; height: 36px; color: #4F46E5;" }
                    strong { "{file.name}" }
                    span { style: "color: rgba(0,0,0,0.6);", "{file.size_label}" }
                },
                None => rsx! {
                    Icon { icon: MdFileUpload, style: "width: 36px; height: 36px; color: rgba(0,0,0,0.5);" }
                    span { style: "color: rgba(0,0,0,0.6);", "Click to select a PDF" }
                },
            }
            input {
                id: file_input_id(slot),
                r#type: "file",
                accept: PDF_MIME_TYPE,
                style: "display: none;",
                onchange: move |evt: Event<FormData>| async move {
                    let Some(file) = evt.files().into_iter().next() else { return };
                    let name = file.name();
                    let content_type = file.content_type().unwrap_or_default();
                    // non-PDFs are rejected by the controller; no need to read them
                    let bytes = if content_type == PDF_MIME_TYPE {
                        match file.read_bytes().await {
                            Ok(bytes) => Bytes::from(bytes),
                            Err(e) => {
                                dioxus::logger::tracing::error!("Could not read {name}: {e:?}");
                                show_alert(&unreadable_file_message(&name));
                                clear_file_input(file_input_id(slot));
                                return;
                            }
                        }
                    } else {
                        Bytes::new()
                    };
                    dioxus::logger::tracing::info!("Selected {slot} file {name} ({content_type})");
                    control.select_file.call((slot, SelectedFile::new(name, content_type, bytes)));
                },
            }
        }
    }
}

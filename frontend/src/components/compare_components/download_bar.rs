//! Format picker and download button for the generated report.

use common::download_format::DownloadFormat;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};

use crate::data_definitions::compare_control::CompareControl;

#[component]
pub fn DownloadBar() -> Element {
    let control = use_context::<CompareControl>();
    let has_output = use_memo(move || control.snapshot.read().output_file.is_some());
    let disabled = use_memo(move || !control.snapshot.read().can_download);
    let selected = use_memo(move || {
        control.snapshot.read().download_format.map(|f| f.query_value().to_string()).unwrap_or_default()
    });
    let button_cursor = use_memo(move || if disabled() { "not-allowed" } else { "pointer" });

    if !has_output() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
            select {
                value: "{selected}",
                style: "height: 36px; padding: 0 8px; border-radius: 8px; border: 1px solid rgba(0,0,0,0.4);",
                onchange: move |e: Event<FormData>| {
                    let format = e.value().parse::<DownloadFormat>().ok();
                    control.set_download_format.call(format);
                },
                option { value: "", "Select format" }
                for format in DownloadFormat::ALL {
                    option { key: "{format}", value: format.query_value(), "{format.label()}" }
                }
            }
            button {
                disabled: disabled(),
                style: "
                    display: inline-flex;
                    align-items: center;
                    gap: 6px;
                    height: 36px;
                    padding: 0 16px;
                    background: white;
                    border-radius: 8px;
                    box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                    cursor: {button_cursor};
                ",
                onclick: move |_| {
                    if !disabled() {
                        control.download.call(());
                    }
                },
                Icon { icon: MdFileDownload, style: "width: 22px; height: 22px;" }
                "Download"
            }
        }
    }
}

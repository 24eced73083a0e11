//! Paging, zoom and grid controls above the two viewers.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon, IconShape,
    icons::{
        md_action_icons::{MdZoomIn, MdZoomOut},
        md_image_icons::MdGridOn,
        md_navigation_icons::{MdArrowBack, MdArrowForward},
    },
};
use viewer::command::ViewerCommand;

use crate::data_definitions::compare_control::CompareControl;

#[component]
pub fn ViewerToolbar() -> Element {
    let control = use_context::<CompareControl>();
    let snapshot = control.snapshot;
    let page_label = use_memo(move || snapshot.read().page_label());
    let zoom_label = use_memo(move || snapshot.read().zoom_label());
    let disable_previous = use_memo(move || !snapshot.read().can_go_previous);
    let disable_next = use_memo(move || !snapshot.read().can_go_next);
    let disable_zoom_out = use_memo(move || !snapshot.read().can_zoom_out);
    let disable_zoom_in = use_memo(move || !snapshot.read().can_zoom_in);
    let grid_enabled = use_memo(move || snapshot.read().grid_enabled);
    let grid_background = use_memo(move || if grid_enabled() { "#E0E7FF" } else { "white" });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                align-items: center;
                justify-content: center;
                height: 48px;
                width: 100%;
                background-color: rgba(0, 0, 0, 0.04);
                border: 1px solid rgba(0, 0, 0, 0.3);
                flex-shrink: 0;
            ",
            NavigationButton { icon: MdArrowBack, label: "Previous Page", disabled: disable_previous, onclick: move |_| {
                control.dispatch.call(ViewerCommand::PreviousPage);
            } }
            div {
                style: "min-width: 110px; text-align: center; font-size: 16px; line-height: 28px;",
                "{page_label}"
            }
            NavigationButton { icon: MdArrowForward, label: "Next Page", disabled: disable_next, onclick: move |_| {
                control.dispatch.call(ViewerCommand::NextPage);
            } }

            div { style: "width: 24px;" }

            NavigationButton { icon: MdZoomOut, label: "Zoom Out", disabled: disable_zoom_out, onclick: move |_| {
                control.dispatch.call(ViewerCommand::ZoomOut);
            } }
            div {
                style: "min-width: 56px; text-align: center; font-size: 16px; line-height: 28px;",
                "{zoom_label}"
            }
            NavigationButton { icon: MdZoomIn, label: "Zoom In", disabled: disable_zoom_in, onclick: move |_| {
                control.dispatch.call(ViewerCommand::ZoomIn);
            } }

            div { style: "width: 24px;" }

            button {
                title: "Toggle Grid",
                style: "
                    display: inline-flex;
                    align-items: center;
                    gap: 6px;
                    height: 32px;
                    padding: 4px 10px;
                    background: {grid_background};
                    border-radius: 8px;
                    box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                    cursor: pointer;
                ",
                onclick: move |_| control.dispatch.call(ViewerCommand::ToggleGrid),
                Icon { icon: MdGridOn, style: "width: 22px; height: 22px;" }
                "Grid"
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(
    icon: I,
    label: String,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}

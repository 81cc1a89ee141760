//! Debug panel: two range sliders bound to the frequency uniform plus a
//! button that reseeds the spikes. Built in the DOM at startup so the page
//! only has to provide the canvas.

use crate::constants::{PANEL_ID, REGENERATE_BUTTON_ID};
use crate::dom;
use plane_core::{AppEvent, EventQueue, FrequencyAxis, SliderRange};
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;top:12px;right:12px;z-index:10;\
min-width:220px;padding:8px 12px;border-radius:6px;color:#cfe7ff;\
font:12px system-ui;background:rgba(10,14,24,0.8);\
border:1px solid rgba(80,110,150,0.35);";

fn axis_label(axis: FrequencyAxis) -> &'static str {
    match axis {
        FrequencyAxis::X => "frequencyX",
        FrequencyAxis::Y => "frequencyY",
    }
}

fn element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn slider_row(
    document: &web::Document,
    axis: FrequencyAxis,
    initial: f32,
    queue: &EventQueue,
) -> anyhow::Result<web::HtmlElement> {
    let range = SliderRange::FREQUENCY;
    let row = element(document, "label")?;
    _ = row.set_attribute("style", "display:flex;gap:8px;align-items:center;margin:4px 0;");

    let name = element(document, "span")?;
    name.set_text_content(Some(axis_label(axis)));
    _ = name.set_attribute("style", "flex:0 0 76px;");

    let input = document
        .create_element("input")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    input.set_type("range");
    input.set_min(&range.min.to_string());
    input.set_max(&range.max.to_string());
    input.set_step(&range.step.to_string());
    input.set_value(&initial.to_string());
    _ = input.set_attribute("aria-label", axis_label(axis));

    let readout = element(document, "span")?;
    readout.set_text_content(Some(&format!("{:.2}", initial)));
    _ = readout.set_attribute("style", "flex:0 0 40px;text-align:right;");

    let input_cb = input.clone();
    let readout_cb = readout.clone();
    let queue = queue.clone();
    dom::add_listener(&input, "input", move |_: web::Event| {
        let Ok(raw) = input_cb.value().parse::<f32>() else {
            return;
        };
        // The range element already clamps; constrain again so the readout
        // shows exactly what the uniform will hold.
        if let Some(v) = range.constrain(raw) {
            readout_cb.set_text_content(Some(&format!("{:.2}", v)));
            queue.push(AppEvent::Frequency(axis, v));
        }
    });

    append(&row, &name)?;
    append(&row, &input)?;
    append(&row, &readout)?;
    Ok(row)
}

/// Build the panel and attach it to `<body>`. Reuses an existing element
/// with the panel id if the page already declares one.
pub fn build(
    document: &web::Document,
    frequency: glam::Vec2,
    queue: &EventQueue,
) -> anyhow::Result<()> {
    let panel = match document.get_element_by_id(PANEL_ID) {
        Some(el) => el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?,
        None => {
            let el = element(document, "div")?;
            el.set_id(PANEL_ID);
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?;
            append(&body, &el)?;
            el
        }
    };
    _ = panel.set_attribute("style", PANEL_STYLE);

    append(&panel, &slider_row(document, FrequencyAxis::X, frequency.x, queue)?)?;
    append(&panel, &slider_row(document, FrequencyAxis::Y, frequency.y, queue)?)?;

    let button = element(document, "button")?;
    button.set_id(REGENERATE_BUTTON_ID);
    button.set_text_content(Some("regenerate spikes"));
    _ = button.set_attribute("style", "margin-top:6px;width:100%;");
    append(&panel, &button)?;

    let queue = queue.clone();
    dom::add_click_listener(document, REGENERATE_BUTTON_ID, move || {
        queue.push(AppEvent::RegenerateSpikes);
    });
    log::info!("[panel] ready");
    Ok(())
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            _ = el.style().remove_property("display");
        }
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            _ = el.style().set_property("display", "none");
        }
    }
}

pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(false)
}

pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

use dioxus::prelude::*;
use snapform_core::Effects;
use snapform_core::analytics::{self, ChartGeometry, Padding, Range};
use snapform_editor::toast::use_effects;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 260.0;

#[component]
pub fn Analytics(id: String) -> Element {
    let effects = use_effects();
    let mut range = use_signal(|| Range::Week);
    let submissions = use_hook(analytics::submissions);

    let current = range();
    let description = current.description();
    let total: u32 = current.dataset().iter().map(|p| p.count).sum();

    rsx! {
        div {
            class: "container",
            div {
                class: "section-head",
                div {
                    h1 { class: "page-title", "Responses" }
                    p { class: "sf-muted small", "Form {id}" }
                }
                button {
                    class: "sf-btn outline",
                    onclick: move |_| effects.notify("Download started", "Mock export, no file is produced in the browser."),
                    "Download"
                }
            }

            section {
                class: "sf-card chart-card",
                div {
                    class: "section-head",
                    div {
                        h3 { "Submissions" }
                        p { class: "sf-muted small", "{description}" }
                    }
                    div {
                        class: "range-switch",
                        for r in Range::ALL {
                            button {
                                key: "{r}",
                                class: if r == current { "sf-btn primary" } else { "sf-btn ghost" },
                                onclick: move |_| range.set(r),
                                "{r}"
                            }
                        }
                    }
                }
                Chart { range: current }
                p { class: "sf-muted small", "{total} submissions in this range" }
            }

            section {
                class: "sf-card",
                h3 { "Latest submissions" }
                table {
                    class: "sf-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Email" }
                            th { "Rating" }
                            th { "Date" }
                        }
                    }
                    tbody {
                        for row in submissions.iter() {
                            tr {
                                key: "{row.id}",
                                td { "{row.id}" }
                                td { "{row.email}" }
                                td { "{row.rating}/5" }
                                td { "{row.date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Chart(range: Range) -> Element {
    let geometry = ChartGeometry::layout(range.dataset(), CHART_WIDTH, CHART_HEIGHT, Padding::default());
    let line = geometry.line_path();
    let area = geometry.area_path();
    let left = geometry.padding.left;
    let right = geometry.width - geometry.padding.right;
    let label_y = geometry.height - 8.0;
    let tick_x = left - 6.0;

    rsx! {
        svg {
            class: "chart",
            view_box: "0 0 {geometry.width} {geometry.height}",
            preserve_aspect_ratio: "none",
            for (value, y, text_y) in geometry.y_ticks.iter().map(|&(v, y)| (v, y, y + 4.0)) {
                g {
                    key: "tick-{value}",
                    line {
                        class: "chart-grid",
                        x1: "{left}",
                        x2: "{right}",
                        y1: "{y}",
                        y2: "{y}",
                    }
                    text {
                        class: "chart-label",
                        x: "{tick_x}",
                        y: "{text_y}",
                        text_anchor: "end",
                        "{value}"
                    }
                }
            }
            path { class: "chart-area", d: "{area}" }
            path { class: "chart-line", d: "{line}" }
            for (i, point) in geometry.points.iter().enumerate() {
                g {
                    key: "{i}",
                    circle { class: "chart-dot", cx: "{point.x}", cy: "{point.y}", r: "3",
                        title { "{point.label}: {point.count}" }
                    }
                    text {
                        class: "chart-label",
                        x: "{point.x}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        "{point.label}"
                    }
                }
            }
        }
    }
}

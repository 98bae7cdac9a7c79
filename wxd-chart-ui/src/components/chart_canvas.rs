//! Fixed-height canvas that Chart.js draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// Canvas DOM id, see `wxd_chart::renderer`
    pub id: String,
    #[props(default = 320)]
    pub height: u32,
}

/// Chart.js sizes the canvas to its parent since `maintainAspectRatio` is off,
/// so the wrapper carries the height.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            style: "{style}",
            canvas { id: "{props.id}" }
        }
    }
}

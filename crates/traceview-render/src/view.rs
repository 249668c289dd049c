//! Element construction from view models. This is the only place the
//! markup structure (tags, classes, nesting) is decided.

use crate::markup::{Element, Node};
use crate::view_model::{MetricsViewModel, StepViewModel, Tone};

/// Notice shown in place of a timeline when there are no steps.
pub fn warning_notice() -> Element {
    Element::new("div")
        .class("alert alert-warning")
        .text("No steps to display")
}

/// The ordered timeline container: one card per step, in input order.
pub fn timeline(steps: &[StepViewModel]) -> Element {
    let mut timeline = Element::new("div").class("trace-timeline");
    for vm in steps {
        timeline.push(Node::Element(step_card(vm)));
    }
    timeline
}

/// One expandable step card.
pub fn step_card(vm: &StepViewModel) -> Element {
    let header = Element::new("div")
        .class("d-flex justify-content-between align-items-center")
        .child(Element::new("h5").class("mb-1").text(vm.display_name.as_str()))
        .child(
            Element::new("span")
                .class("badge bg-secondary")
                .text(vm.duration.as_str()),
        );

    let mut meta = Element::new("p")
        .class("text-muted small mb-2")
        .child(Element::new("i").class("bi bi-tag"))
        .text(format!(" {}", vm.type_label));
    if let Some(clock) = &vm.clock {
        meta = meta.child(
            Element::new("span")
                .class("ms-2")
                .child(Element::new("i").class("bi bi-clock"))
                .text(format!(" {}", clock)),
        );
    }

    let mut content = Element::new("div").class("mt-2").child(meta);
    if vm.has_details() {
        content = content.child(details_disclosure(vm));
    }

    Element::new("div")
        .class("trace-step")
        .class(format!("trace-type-{}", vm.category))
        .attr("data-step-id", vm.identity.clone())
        .child(header)
        .child(content)
}

/// Collapsed-by-default disclosure holding the payload dumps, input first.
fn details_disclosure(vm: &StepViewModel) -> Element {
    let mut body = Element::new("div").class("mt-2 p-2 border rounded bg-light");

    if let Some(input) = &vm.input {
        body = body.child(
            Element::new("div")
                .class("mb-2")
                .child(Element::new("h6").class("text-muted").text("Input:"))
                .child(Element::new("pre").class("small").text(input.as_str())),
        );
    }

    if let Some(output) = &vm.output {
        body = body.child(
            Element::new("div")
                .child(Element::new("h6").class("text-muted").text("Output:"))
                .child(Element::new("pre").class("small").text(output.as_str())),
        );
    }

    Element::new("details")
        .class("mt-2")
        .child(
            Element::new("summary")
                .class("text-primary cursor-pointer")
                .text("View Details"),
        )
        .child(body)
}

/// The one-line metrics summary banner: present items joined by `" | "`.
///
/// Constructed even when every item was suppressed; the caller inserts the
/// (then empty) banner regardless.
pub fn metrics_banner(vm: &MetricsViewModel) -> Element {
    let mut banner = Element::new("div").class("alert alert-info");

    for (i, item) in vm.items.iter().enumerate() {
        if i > 0 {
            banner = banner.text(" | ");
        }
        banner = banner.child(Element::new("strong").text(format!("{}:", item.label)));
        banner = match item.tone {
            Tone::Neutral => banner.text(format!(" {}", item.value)),
            Tone::Positive => banner
                .text(" ")
                .child(Element::new("span").class("text-success").text(item.value.as_str())),
            Tone::Negative => banner
                .text(" ")
                .child(Element::new("span").class("text-danger").text(item.value.as_str())),
        };
    }

    banner
}

use serde_json::json;
use traceview_render::{DisplayOptions, Element, Node, Page, Region, TraceVisualizer};
use traceview_types::{StepId, Timestamp, TraceDocument, TraceMetrics, TraceStep};

fn named_step(name: &str) -> TraceStep {
    TraceStep {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn visualizer() -> TraceVisualizer<Region> {
    TraceVisualizer::new(Region::new())
}

fn only_element(nodes: &[Node]) -> &Element {
    assert_eq!(nodes.len(), 1, "expected exactly one root node");
    match &nodes[0] {
        Node::Element(el) => el,
        Node::Text(text) => panic!("expected an element, got text {:?}", text),
    }
}

#[test]
fn renders_one_card_per_step_in_input_order() {
    let steps = vec![
        TraceStep {
            id: Some(StepId::from("a")),
            ..named_step("first")
        },
        named_step("second"),
        TraceStep {
            id: Some(StepId::from(42)),
            ..named_step("third")
        },
    ];

    let mut viz = visualizer();
    viz.render_timeline(&steps);

    let content = viz.target().children().to_vec();
    let timeline = only_element(&content);
    assert!(timeline.has_class("trace-timeline"));

    let cards: Vec<&Element> = timeline.child_elements().collect();
    assert_eq!(cards.len(), 3);

    let ids: Vec<&str> = cards
        .iter()
        .map(|card| card.attr_value("data-step-id").unwrap())
        .collect();
    assert_eq!(ids, vec!["a", "1", "42"]);

    let names: Vec<String> = cards
        .iter()
        .map(|card| card.find_by_tag("h5").unwrap().text_content())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn empty_sequence_renders_a_single_warning_notice() {
    let mut viz = visualizer();
    viz.render_timeline(&[]);

    let content = viz.target().children().to_vec();
    let notice = only_element(&content);
    assert!(notice.has_class("alert-warning"));
    insta::assert_snapshot!(
        viz.target().html(),
        @r#"<div class="alert alert-warning">No steps to display</div>"#
    );
}

#[test]
fn duration_badge_rounds_half_up_to_two_decimals() {
    let mut viz = visualizer();
    viz.render_timeline(&[TraceStep {
        runtime: Some(1.005),
        ..named_step("boundary")
    }]);

    let content = viz.target().children().to_vec();
    let badge = only_element(&content).find_by_class("badge").unwrap();
    assert_eq!(badge.text_content(), "1.01s");

    viz.render_timeline(&[TraceStep {
        runtime: Some(0.0049999),
        ..named_step("boundary")
    }]);
    let content = viz.target().children().to_vec();
    let badge = only_element(&content).find_by_class("badge").unwrap();
    assert_eq!(badge.text_content(), "0.00s");
}

#[test]
fn zero_runtime_renders_an_empty_badge() {
    let mut viz = visualizer();
    viz.render_timeline(&[TraceStep {
        runtime: Some(0.0),
        ..named_step("unmeasured")
    }]);

    let content = viz.target().children().to_vec();
    let badge = only_element(&content).find_by_class("badge").unwrap();
    assert_eq!(badge.text_content(), "");
}

#[test]
fn default_labels_for_absent_fields() {
    let mut viz = visualizer();
    viz.render_timeline(&[TraceStep::default()]);

    let content = viz.target().children().to_vec();
    let card = only_element(&content).child_elements().next().unwrap();

    assert!(card.has_class("trace-type-unknown"));
    assert_eq!(card.attr_value("data-step-id"), Some("0"));
    assert_eq!(card.find_by_tag("h5").unwrap().text_content(), "Unknown Step");
    assert!(card.find_by_tag("details").is_none());
}

#[test]
fn input_without_output_renders_only_the_input_block() {
    let mut viz = visualizer();
    viz.render_timeline(&[TraceStep {
        input: Some(json!({"a": 1})),
        ..named_step("with input")
    }]);

    let content = viz.target().children().to_vec();
    let card = only_element(&content).child_elements().next().unwrap();

    let details = card.find_by_tag("details").unwrap();
    assert_eq!(
        details.find_by_tag("summary").unwrap().text_content(),
        "View Details"
    );

    let text = details.text_content();
    assert!(text.contains("Input:"));
    assert!(!text.contains("Output:"));

    let pre = details.find_by_tag("pre").unwrap();
    assert_eq!(pre.text_content(), "{\n  \"a\": 1\n}");
}

#[test]
fn clock_indicator_appears_only_with_a_resolvable_timestamp() {
    let mut viz = visualizer();
    viz.render_timeline(&[TraceStep {
        timestamp: Some(Timestamp::from(1715679000000)),
        ..named_step("timed")
    }]);

    let content = viz.target().children().to_vec();
    let meta = only_element(&content).find_by_tag("p").unwrap();
    let clock = meta.find_by_class("ms-2").unwrap();
    assert_eq!(clock.text_content().matches(':').count(), 2);

    viz.render_timeline(&[TraceStep {
        timestamp: Some(Timestamp::Text("garbage".to_string())),
        ..named_step("untimed")
    }]);
    let content = viz.target().children().to_vec();
    let meta = only_element(&content).find_by_tag("p").unwrap();
    assert!(meta.find_by_class("ms-2").is_none());
}

#[test]
fn metrics_banner_joins_present_items_with_pipes() {
    let mut viz = visualizer();
    viz.render_metrics(Some(&TraceMetrics {
        total_runtime: Some(3.5),
        step_count: Some(2),
        status: Some("success".to_string()),
    }));

    let content = viz.target().children().to_vec();
    let banner = only_element(&content);
    assert_eq!(
        banner.text_content(),
        "Total Runtime: 3.50s | Steps: 2 | Status: success"
    );

    let status = banner.find_by_class("text-success").unwrap();
    assert_eq!(status.text_content(), "success");

    insta::assert_snapshot!(
        banner.to_html(),
        @r#"<div class="alert alert-info"><strong>Total Runtime:</strong> 3.50s | <strong>Steps:</strong> 2 | <strong>Status:</strong> <span class="text-success">success</span></div>"#
    );
}

#[test]
fn failure_status_gets_the_negative_styling() {
    let mut viz = visualizer();
    viz.render_metrics(Some(&TraceMetrics {
        total_runtime: None,
        step_count: None,
        status: Some("error".to_string()),
    }));

    let content = viz.target().children().to_vec();
    let banner = only_element(&content);
    assert!(banner.find_by_class("text-success").is_none());
    assert_eq!(
        banner.find_by_class("text-danger").unwrap().text_content(),
        "error"
    );
}

#[test]
fn all_suppressed_metrics_still_insert_an_empty_banner() {
    let mut viz = visualizer();
    viz.render_metrics(Some(&TraceMetrics {
        total_runtime: Some(0.0),
        step_count: Some(0),
        status: None,
    }));

    let content = viz.target().children().to_vec();
    let banner = only_element(&content);
    assert!(banner.has_class("alert-info"));
    assert_eq!(banner.text_content(), "");
}

#[test]
fn absent_metrics_is_a_no_op() {
    let mut viz = visualizer();
    viz.render_metrics(None);
    assert!(viz.target().children().is_empty());
}

#[test]
fn repeated_banners_stack_newest_first() {
    let mut viz = visualizer();
    viz.render_metrics(Some(&TraceMetrics {
        step_count: Some(1),
        ..Default::default()
    }));
    viz.render_metrics(Some(&TraceMetrics {
        step_count: Some(2),
        ..Default::default()
    }));

    let content = viz.target().children().to_vec();
    assert_eq!(content.len(), 2);
    assert_eq!(content[0].text_content(), "Steps: 2");
    assert_eq!(content[1].text_content(), "Steps: 1");
}

#[test]
fn timeline_render_clears_prior_banners() {
    let mut viz = visualizer();
    viz.render_metrics(Some(&TraceMetrics {
        step_count: Some(2),
        ..Default::default()
    }));
    viz.render_timeline(&[named_step("fresh")]);

    let content = viz.target().children().to_vec();
    let timeline = only_element(&content);
    assert!(timeline.has_class("trace-timeline"));
    assert!(!viz.target().html().contains("alert-info"));
}

#[test]
fn render_document_places_the_banner_above_the_timeline() {
    let doc = TraceDocument::new(vec![named_step("only")]).with_metrics(TraceMetrics {
        total_runtime: Some(1.0),
        step_count: Some(1),
        status: Some("success".to_string()),
    });

    let mut viz = visualizer();
    viz.render_document(&doc);

    let content = viz.target().children().to_vec();
    assert_eq!(content.len(), 2);
    assert!(content[0].text_content().contains("Total Runtime"));
    match &content[1] {
        Node::Element(el) => assert!(el.has_class("trace-timeline")),
        other => panic!("expected timeline, got {:?}", other),
    }
}

#[test]
fn hostile_payloads_are_entity_escaped() {
    let mut viz = visualizer();
    viz.render_timeline(&[TraceStep {
        name: Some("<script>alert(1)</script>".to_string()),
        input: Some(json!({"html": "<b>&</b>"})),
        ..Default::default()
    }]);

    let html = viz.target().html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
}

#[test]
fn payload_truncation_option_caps_the_dump() {
    let step = TraceStep {
        input: Some(json!({"key": "a very long payload value that keeps going"})),
        ..named_step("big")
    };

    let mut viz = visualizer().with_options(DisplayOptions {
        truncate_payload: Some(16),
    });
    viz.render_timeline(std::slice::from_ref(&step));

    let content = viz.target().children().to_vec();
    let pre = only_element(&content).find_by_tag("pre").unwrap();
    let text = pre.text_content();
    assert!(text.ends_with("..."));
    assert!(text.chars().count() <= 16);
}

#[test]
fn bind_resolves_registered_regions_and_rejects_unknown_ids() {
    let mut page = Page::new();
    page.add_region("trace-container");

    let mut viz = TraceVisualizer::bind(&page, "trace-container").unwrap();
    viz.render_timeline(&[named_step("bound")]);

    let html = page.html();
    assert!(html.starts_with("<div id=\"trace-container\">"));
    assert!(html.contains("trace-timeline"));

    let err = TraceVisualizer::bind(&page, "missing").unwrap_err();
    assert_eq!(err.to_string(), "display region not found: missing");
}

#[test]
fn bound_visualizers_share_the_page_region() {
    let mut page = Page::new();
    let region = page.add_region("trace-container");

    let mut viz = TraceVisualizer::new(region);
    viz.render_timeline(&[]);

    assert!(
        page.region("trace-container")
            .unwrap()
            .html()
            .contains("No steps to display")
    );
}

use super::*;
use crate::animation::ease::Ease;
use crate::animation::reveal::Transition;
use crate::animation::style::StyleSet;

fn fade() -> RevealStyle {
    RevealStyle {
        hidden: StyleSet::default().with_opacity(0.0).with_y(20.0),
        visible: StyleSet::default(),
        transition: Transition {
            duration_ms: 600,
            delay_ms: 0,
            ease: Ease::OutCubic,
        },
    }
}

fn basic_page() -> Page {
    Page {
        viewport: ViewportSize {
            width: 1000.0,
            height: 800.0,
        },
        doc_height: 3000.0,
        sections: vec![
            Section {
                id: "hero".to_string(),
                rect: Rect::new(0.0, 0.0, 1000.0, 800.0),
                trigger: TriggerSpec::default(),
                elements: vec![ElementDecl {
                    id: "title".to_string(),
                    reveal: fade(),
                }],
                group: None,
                ambients: Vec::new(),
            },
            Section {
                id: "skills".to_string(),
                rect: Rect::new(0.0, 1000.0, 1000.0, 1800.0),
                trigger: TriggerSpec::default(),
                elements: Vec::new(),
                group: Some(GroupDecl {
                    stagger: StaggerSpec {
                        base_delay_ms: 0,
                        interval_ms: 100,
                    },
                    children: vec![
                        ElementDecl {
                            id: "badge-0".to_string(),
                            reveal: fade(),
                        },
                        ElementDecl {
                            id: "badge-1".to_string(),
                            reveal: fade(),
                        },
                    ],
                }),
                ambients: Vec::new(),
            },
        ],
    }
}

#[test]
fn basic_page_validates() {
    basic_page().validate().unwrap();
}

#[test]
fn json_roundtrip() {
    let page = basic_page();
    let s = serde_json::to_string_pretty(&page).unwrap();
    let de: Page = serde_json::from_str(&s).unwrap();
    de.validate().unwrap();
    assert_eq!(de.sections.len(), 2);
    assert_eq!(de.sections[1].group.as_ref().unwrap().children.len(), 2);
}

#[test]
fn rejects_duplicate_section_id() {
    let mut page = basic_page();
    page.sections[1].id = "hero".to_string();
    assert!(page.validate().is_err());
}

#[test]
fn rejects_duplicate_element_id_across_kinds() {
    let mut page = basic_page();
    page.sections[1].elements.push(ElementDecl {
        id: "badge-1".to_string(),
        reveal: fade(),
    });
    assert!(page.validate().is_err());
}

#[test]
fn rejects_rect_outside_document() {
    let mut page = basic_page();
    page.sections[1].rect = Rect::new(0.0, 2500.0, 1000.0, 3500.0);
    assert!(page.validate().is_err());
}

#[test]
fn rejects_bad_nested_specs() {
    let mut page = basic_page();
    page.sections[0].trigger.threshold = 2.0;
    assert!(page.validate().is_err());

    let mut page = basic_page();
    page.sections[0].elements[0].reveal.transition.duration_ms = 0;
    assert!(page.validate().is_err());

    let mut page = basic_page();
    page.doc_height = 0.0;
    assert!(page.validate().is_err());
}

#[test]
fn section_lookup_by_id() {
    let page = basic_page();
    assert!(page.section("skills").is_some());
    assert!(page.section("missing").is_none());
}

use interlexi_core::{
    parse_catalog, prepare_for_display, Catalog, NavEvent, NavigationError, Navigator, Screen,
    ScreenView, SlideDirection, TopicId,
};
use std::sync::Arc;

fn two_topic_catalog() -> Arc<Catalog> {
    let catalog = parse_catalog(
        r#"{"topics":[
            {"id":1,"name":"التحيات","phrases":[
                {"text":"مرحبا","translation":"Hello"},
                {"text":"صباح الخير","translation":"Good morning"},
                {"text":"مع السلامة","translation":"Goodbye"}
            ]},
            {"id":2,"name":"الأرقام","phrases":[
                {"text":"واحد","translation":"One"},
                {"text":"عندي 3 إخوة","translation":"I have 3 brothers"}
            ]}
        ]}"#,
    )
    .expect("fixture catalog should parse");
    Arc::new(catalog)
}

fn detail_lines(nav: &Navigator) -> Vec<String> {
    match nav.view().expect("current view") {
        ScreenView::TopicDetail(screen) => screen.phrase_lines().to_vec(),
        other => panic!("expected topic detail, got {other:?}"),
    }
}

#[test]
fn home_to_topic_one_shows_its_phrases_in_order() {
    let catalog = two_topic_catalog();
    let mut nav = Navigator::new(Arc::clone(&catalog), None);

    nav.dispatch(NavEvent::ViewContents).expect("open contents");
    assert_eq!(nav.current(), &Screen::TableOfContents);
    nav.dispatch(NavEvent::SelectTopic(TopicId::from(1)))
        .expect("open topic 1");
    assert_eq!(nav.current(), &Screen::TopicDetail(TopicId::from(1)));

    let expected = vec![
        format!("Hello = {}", prepare_for_display("مرحبا")),
        format!("Good morning = {}", prepare_for_display("صباح الخير")),
        format!("Goodbye = {}", prepare_for_display("مع السلامة")),
    ];
    assert_eq!(detail_lines(&nav), expected);

    match nav.view().expect("current view") {
        ScreenView::TopicDetail(screen) => {
            assert_eq!(screen.title(), prepare_for_display("التحيات"));
            assert_eq!(screen.topic_id(), &TopicId::from(1));
            assert_eq!(screen.layout_height(), 120);
            assert_eq!(screen.back_label(), "Back");
        }
        other => panic!("expected topic detail, got {other:?}"),
    }
}

#[test]
fn revisiting_another_topic_leaves_no_stale_phrases() {
    let mut nav = Navigator::new(two_topic_catalog(), None);

    nav.dispatch(NavEvent::ViewContents).unwrap();
    nav.dispatch(NavEvent::SelectTopic(TopicId::from(1))).unwrap();
    nav.dispatch(NavEvent::Back).unwrap();
    assert_eq!(nav.current(), &Screen::TableOfContents);
    nav.dispatch(NavEvent::SelectTopic(TopicId::from(2))).unwrap();

    let lines = detail_lines(&nav);
    assert_eq!(
        lines,
        vec![
            format!("One = {}", prepare_for_display("واحد")),
            format!("I have 3 brothers = {}", prepare_for_display("عندي 3 إخوة")),
        ]
    );
    assert!(lines.iter().all(|line| !line.starts_with("Hello")));
}

#[test]
fn reentering_same_topic_does_not_duplicate_lines() {
    let mut nav = Navigator::new(two_topic_catalog(), None);
    nav.dispatch(NavEvent::ViewContents).unwrap();
    for _ in 0..3 {
        nav.dispatch(NavEvent::SelectTopic(TopicId::from(2))).unwrap();
        assert_eq!(detail_lines(&nav).len(), 2);
        nav.dispatch(NavEvent::Back).unwrap();
    }
}

#[test]
fn back_walks_out_to_home() {
    let mut nav = Navigator::new(two_topic_catalog(), None);
    nav.dispatch(NavEvent::ViewContents).unwrap();
    nav.dispatch(NavEvent::SelectTopic(TopicId::from(2))).unwrap();

    assert_eq!(nav.dispatch(NavEvent::Back).unwrap(), &Screen::TableOfContents);
    assert_eq!(nav.last_slide(), Some(SlideDirection::Right));
    assert_eq!(nav.dispatch(NavEvent::Back).unwrap(), &Screen::Home);
    assert_eq!(nav.last_slide(), Some(SlideDirection::Right));
}

#[test]
fn unknown_topic_fails_loudly_and_keeps_screen() {
    let mut nav = Navigator::new(two_topic_catalog(), None);
    nav.dispatch(NavEvent::ViewContents).unwrap();

    let err = nav
        .dispatch(NavEvent::SelectTopic(TopicId::from(99)))
        .unwrap_err();
    assert_eq!(err, NavigationError::UnknownTopic(TopicId::from(99)));
    assert_eq!(err.to_string(), "no screen for topic: 99");
    assert_eq!(nav.current(), &Screen::TableOfContents);
    assert_eq!(nav.last_slide(), Some(SlideDirection::Left));
}

#[test]
fn string_id_selects_integer_declared_topic() {
    let mut nav = Navigator::new(two_topic_catalog(), None);
    nav.dispatch(NavEvent::ViewContents).unwrap();
    nav.dispatch(NavEvent::SelectTopic(TopicId::from("1")))
        .expect("\"1\" and 1 are the same topic");
    assert_eq!(detail_lines(&nav).len(), 3);
}

#[test]
fn padded_string_id_routes_through_contents_entry() {
    let catalog = parse_catalog(
        r#"{"topics":[
            {"id":" 7","name":"سلام","phrases":[{"text":"مرحبا","translation":"Hello"}]},
            {"id":"7","name":"أرقام","phrases":[{"text":"واحد","translation":"One"}]}
        ]}"#,
    )
    .expect("padded and bare ids are distinct");
    let mut nav = Navigator::new(Arc::new(catalog), None);
    nav.dispatch(NavEvent::ViewContents).unwrap();

    let topic_id = match nav.view().unwrap() {
        ScreenView::TableOfContents(toc) => toc.entries[0].topic_id.clone(),
        other => panic!("expected table of contents, got {other:?}"),
    };
    assert_eq!(topic_id.as_str(), " 7");

    nav.dispatch(NavEvent::SelectTopic(topic_id)).unwrap();
    assert_eq!(nav.current(), &Screen::TopicDetail(TopicId::from(" 7")));
    assert_eq!(detail_lines(&nav), vec![format!("Hello = {}", prepare_for_display("مرحبا"))]);
}

#[test]
fn contents_lists_topics_with_shaped_labels() {
    let mut nav = Navigator::new(two_topic_catalog(), None);
    nav.dispatch(NavEvent::ViewContents).unwrap();

    match nav.view().unwrap() {
        ScreenView::TableOfContents(toc) => {
            assert_eq!(toc.title, "Table of Contents");
            let labels = toc
                .entries
                .iter()
                .map(|entry| (entry.topic_id.as_str(), entry.label.clone()))
                .collect::<Vec<_>>();
            assert_eq!(
                labels,
                vec![
                    ("1", prepare_for_display("التحيات")),
                    ("2", prepare_for_display("الأرقام")),
                ]
            );
            assert_eq!(toc.layout_height(), 120);
        }
        other => panic!("expected table of contents, got {other:?}"),
    }
}

#[test]
fn empty_catalog_renders_empty_contents() {
    let mut nav = Navigator::new(Arc::new(Catalog::empty()), None);
    assert_eq!(nav.topic_screen_count(), 0);
    nav.dispatch(NavEvent::ViewContents).unwrap();

    match nav.view().unwrap() {
        ScreenView::TableOfContents(toc) => {
            assert!(toc.entries.is_empty());
            assert_eq!(toc.layout_height(), 0);
        }
        other => panic!("expected table of contents, got {other:?}"),
    }
}

#[test]
fn single_topic_end_to_end() {
    let catalog = parse_catalog(
        r#"{"topics":[{"id":1,"name":"سلام","phrases":[{"text":"مرحبا","translation":"Hello"}]}]}"#,
    )
    .unwrap();
    let mut nav = Navigator::new(Arc::new(catalog), None);
    nav.dispatch(NavEvent::ViewContents).unwrap();

    let (topic_id, label) = match nav.view().unwrap() {
        ScreenView::TableOfContents(toc) => {
            assert_eq!(toc.entries.len(), 1);
            (toc.entries[0].topic_id.clone(), toc.entries[0].label.clone())
        }
        other => panic!("expected table of contents, got {other:?}"),
    };
    assert_eq!(label, prepare_for_display("سلام"));
    assert_ne!(label, "سلام");

    nav.dispatch(NavEvent::SelectTopic(topic_id)).unwrap();
    let lines = detail_lines(&nav);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Hello = "));
    assert_eq!(lines[0], format!("Hello = {}", prepare_for_display("مرحبا")));
}

#[test]
fn home_view_offers_contents_button() {
    let nav = Navigator::new(two_topic_catalog(), None);
    match nav.view().unwrap() {
        ScreenView::Home(home) => {
            assert_eq!(home.title, "InterLexi Arabic");
            assert_eq!(home.contents_label, "Go to Table of Contents");
            assert_eq!(home.logo, None);
        }
        other => panic!("expected home, got {other:?}"),
    }
}

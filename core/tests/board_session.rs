use pretty_assertions::assert_eq;
use std::io::Write;
use topics_board_core::board::{Board, BoardEvent, EventOutcome};
use topics_board_core::catalog::{Catalog, CatalogSeed, TopicStatus, VoteDirection};
use topics_board_core::config::BoardConfig;
use topics_board_core::query::{SessionState, SortMode, TopicFilter};
use topics_board_core::view::render_text;

const NOW: i64 = 1_709_640_000_000;

fn board() -> Board {
    Board::new(Catalog::sample(NOW), SessionState::default())
}

#[test]
fn scripted_events_match_direct_calls() {
    let script = r#"
{"action":"set_query","query":"k8s"}
{"action":"vote","id":"s2","direction":"down"}
{"action":"edit_form","title":"Talos on Raspberry Pi","tags":"k8s, arm"}
{"action":"submit"}
{"action":"set_sort","sort":"newest"}
"#;
    let mut scripted = board();
    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        scripted.apply(BoardEvent::from_json_line(line).unwrap());
    }

    let mut direct = board();
    direct.set_query("k8s");
    direct.vote("s2", VoteDirection::Down);
    direct.apply(BoardEvent::EditForm {
        title: Some("Talos on Raspberry Pi".to_string()),
        details: None,
        tags: Some("k8s, arm".to_string()),
    });
    direct.submit();
    direct.set_sort(SortMode::Newest);

    let a = scripted.view();
    let b = direct.view();
    assert_eq!(a.suggestion_count, b.suggestion_count);
    assert_eq!(
        a.suggestions.iter().map(|s| (&s.title, s.votes)).collect::<Vec<_>>(),
        b.suggestions.iter().map(|s| (&s.title, s.votes)).collect::<Vec<_>>()
    );
    assert_eq!(a.suggestions[0].title, "Talos on Raspberry Pi");
    assert_eq!(a.suggestions[1].votes, 40);
}

#[test]
fn outcomes_report_what_happened() {
    let mut b = board();
    assert_eq!(
        b.apply(BoardEvent::SetTopicFilter {
            filter: TopicFilter::Status(TopicStatus::Idea)
        }),
        EventOutcome::Updated
    );
    assert_eq!(b.apply(BoardEvent::Submit), EventOutcome::Ignored);
    assert_eq!(
        b.apply(BoardEvent::Vote {
            id: "nope".to_string(),
            direction: VoteDirection::Up
        }),
        EventOutcome::Ignored
    );
    match b.apply(BoardEvent::Vote {
        id: "s1".to_string(),
        direction: VoteDirection::Up,
    }) {
        EventOutcome::Voted { receipt } => {
            assert_eq!(receipt.suggestion_id, "s1");
            assert_eq!(receipt.votes, 24);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(b.ledger().receipts().len(), 1);
}

#[test]
fn view_reflects_session_inputs() {
    let mut b = board();
    b.set_topic_filter(TopicFilter::Status(TopicStatus::Editing));
    b.vote("s3", VoteDirection::Down);
    let view = b.view();

    assert_eq!(view.topic_count_label(), "1 items");
    assert_eq!(view.topics[0].badge_label, "Editing");
    assert_eq!(view.suggestion_count_label(), "3 suggestions");
    let s3 = view.suggestions.iter().find(|s| s.id == "s3").unwrap();
    assert!(s3.downvoted && !s3.upvoted);
    assert_eq!(s3.created_on.as_deref(), Some("2024-03-05"));
    assert_eq!(view.work.len(), 2);
    assert_eq!(view.work[0].progress, 78);
    assert!(!view.can_submit);
}

#[test]
fn text_rendering_lists_every_panel() {
    let mut b = board();
    b.apply(BoardEvent::EditForm {
        title: Some("Draft".to_string()),
        details: None,
        tags: None,
    });
    let text = render_text(&b.view());

    assert!(text.contains("## Topics (filter: all) 5 items"));
    assert!(text.contains("- [Researching] React Server Components in Practice #react #nextjs"));
    assert!(text.contains("## Suggestions (sort: votes) 3 suggestions"));
    assert!(text.contains("SQLite in Kubernetes for ARR stack (s2)"));
    assert!(text.contains("title: Draft"));
    assert!(text.contains("[Submit]\n"));
    assert!(text.contains("- Kubernetes for Homelabs (NitroLab) [editing] 78%"));
}

#[test]
fn board_loads_seed_file_from_config() {
    let seed = CatalogSeed {
        topics: vec![],
        work_items: vec![],
        suggestions: CatalogSeed::sample(NOW).suggestions[..1].to_vec(),
    };
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&seed).unwrap().as_bytes())
        .unwrap();

    let mut config = BoardConfig::default();
    config.seed.path = Some(file.path().to_path_buf());
    config.session.default_sort = SortMode::Newest;

    let b = Board::from_config(&config).unwrap();
    assert_eq!(b.catalog().snapshot(), seed);
    assert_eq!(b.session().sort, SortMode::Newest);
    assert_eq!(b.view().topic_count, 0);
}

#[test]
fn session_state_round_trips_through_json() {
    let mut b = board();
    b.set_query("ui");
    b.set_sort(SortMode::Newest);
    let raw = serde_json::to_string(b.session()).unwrap();
    let back: SessionState = serde_json::from_str(&raw).unwrap();
    assert_eq!(&back, b.session());
}

#[test]
fn out_of_range_timestamp_leaves_date_off_the_card() {
    use topics_board_core::catalog::Suggestion;
    use topics_board_core::view::SuggestionCard;

    let suggestion = Suggestion {
        id: "s_far".to_string(),
        title: "Far future".to_string(),
        details: None,
        tags: vec![],
        votes: 0,
        created_at: i64::MAX,
        user_voted: None,
    };
    let card = SuggestionCard::from(&suggestion);
    assert_eq!(card.created_on, None);
    let json = serde_json::to_value(&card).unwrap();
    assert!(json.get("created_on").is_none());
}

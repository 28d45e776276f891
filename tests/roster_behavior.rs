//! End-to-end behaviour of the roster, driven through `dispatch`.

use proptest::prelude::*;
use roster_pager::prelude::*;
use roster_pager::{apply_filter, Config, ItemStore, MatchMode};

fn students(n: usize) -> Vec<Student> {
    (1..=n)
        .map(|i| {
            Student::new(
                &format!("Student {i:02}"),
                &format!("student{i:02}@example.com"),
                "Joined 01/01/20",
            )
        })
        .collect()
}

fn names(roster: &Roster<Student>) -> Vec<String> {
    roster.visible_items().iter().map(|s| s.name.clone()).collect()
}

fn search(roster: &mut Roster<Student>, text: &str) {
    roster.dispatch(Message::SearchChanged(text.to_string()));
}

#[test]
fn twenty_seven_items_make_three_pages() {
    let mut roster = Roster::new(students(27));
    assert_eq!(roster.navigation().unwrap().len(), 3);
    assert_eq!(roster.visible_items().len(), 10);

    roster.dispatch(Message::ControlActivated(1));
    assert_eq!(roster.visible_items().len(), 10);
    assert_eq!(names(&roster)[0], "Student 11");

    roster.dispatch(Message::ControlActivated(2));
    let expected: Vec<String> = (21..=27).map(|i| format!("Student {i:02}")).collect();
    assert_eq!(names(&roster), expected);
}

#[test]
fn query_without_matches_shows_notice_and_drops_navigation() {
    let mut roster = Roster::new(students(27));
    search(&mut roster, "zzz");

    assert_eq!(roster.heading(), "0 Students");
    assert_eq!(roster.notice().unwrap().message(), "No results for 'zzz'");
    assert!(roster.navigation().is_none());
    assert!(roster.visible_items().is_empty());
}

#[test]
fn notice_text_follows_query_and_disappears_on_match() {
    let mut roster = Roster::new(students(5));
    search(&mut roster, "zz");
    search(&mut roster, "zzz");
    assert_eq!(roster.notice().unwrap().message(), "No results for 'zzz'");

    search(&mut roster, "student03");
    assert!(roster.notice().is_none());
    assert_eq!(roster.heading(), "1 Student");
    assert_eq!(names(&roster), vec!["Student 03"]);
}

#[test]
fn single_match_uses_singular_heading() {
    let mut roster = Roster::new(vec![
        Student::new("Ana Smith", "ana.smith@example.com", "Joined 07/15/15"),
        Student::new("Bo Li", "bo.li@example.com", "Joined 03/02/16"),
    ]);
    search(&mut roster, "ana");
    assert_eq!(roster.heading(), "1 Student");
    assert_eq!(names(&roster), vec!["Ana Smith"]);
}

#[test]
fn page_requests_page_within_filtered_list() {
    let mut roster = Roster::new(students(60));
    search(&mut roster, "0@");
    // student10@ .. student60@
    assert_eq!(roster.heading(), "6 Students");

    let config = Config::new().with_per_page(2);
    let mut small = Roster::with_config(students(60), config);
    search(&mut small, "0@");
    assert_eq!(small.navigation().unwrap().len(), 3);

    small.dispatch(Message::PageRequested("2".to_string()));
    assert_eq!(names(&small), vec!["Student 30", "Student 40"]);
    // Entries outside the filtered list stay hidden.
    assert_eq!(small.store().visible_indices(), vec![29, 39]);
}

#[test]
fn search_rebuilds_navigation_for_filtered_list() {
    let mut roster = Roster::new(students(45));
    roster.dispatch(Message::PageRequested("3".to_string()));
    assert_eq!(roster.navigation().unwrap().len(), 5);

    search(&mut roster, "Student 1");
    assert_eq!(roster.heading(), "10 Students");
    assert_eq!(roster.navigation().unwrap().len(), 1);
}

fn stale_roster() -> Roster<Student> {
    let mut roster = Roster::with_config(students(45), Config::new().with_per_page(5));
    assert_eq!(roster.navigation().unwrap().len(), 9);

    // Change the query and show page 2 without passing through page 1.
    roster
        .search_bar_mut()
        .unwrap()
        .set_value("Student 1");
    roster.update_ui(2);
    roster
}

#[test]
fn navigation_is_only_rebuilt_on_page_one() {
    let mut roster = stale_roster();
    assert_eq!(roster.heading(), "10 Students");
    assert_eq!(names(&roster)[0], "Student 15");
    // Controls still describe the unfiltered roster.
    assert_eq!(roster.navigation().unwrap().len(), 9);
    assert_eq!(roster.navigation().unwrap().active_page(), Some(2));

    roster.update_ui(1);
    assert_eq!(roster.navigation().unwrap().len(), 2);
}

#[test]
fn stale_controls_are_clamped_to_last_page() {
    let mut roster = stale_roster();
    roster.dispatch(Message::ControlActivated(8));

    assert_eq!(roster.page(), 2);
    assert_eq!(roster.navigation().unwrap().active_page(), Some(2));
    let expected: Vec<String> = (15..=19).map(|i| format!("Student {i}")).collect();
    assert_eq!(names(&roster), expected);
}

#[test]
fn non_numeric_label_falls_back_to_first_page() {
    let mut roster = Roster::new(students(27));
    roster.dispatch(Message::PageRequested("3".to_string()));
    roster.dispatch(Message::PageRequested("three".to_string()));
    assert_eq!(roster.page(), 1);
    assert_eq!(names(&roster)[0], "Student 01");
}

#[test]
fn zero_label_is_clamped_up() {
    let mut roster = Roster::new(students(27));
    roster.dispatch(Message::PageRequested("0".to_string()));
    assert_eq!(roster.page(), 1);
}

#[test]
fn activating_missing_control_changes_nothing() {
    let mut roster = Roster::new(students(27));
    roster.dispatch(Message::ControlActivated(9));
    assert_eq!(roster.page(), 1);
    assert_eq!(roster.navigation().unwrap().active_page(), Some(1));
}

#[test]
fn control_activation_without_navigation_is_noop() {
    let mut roster = Roster::new(students(3));
    search(&mut roster, "nobody");
    roster.dispatch(Message::ControlActivated(0));
    assert!(roster.navigation().is_none());
    assert_eq!(roster.heading(), "0 Students");
}

#[test]
fn missing_search_bar_reads_as_empty_query() {
    let config = Config::new().with_search_bar(false);
    let mut roster = Roster::with_config(students(15), config);
    assert!(roster.search_bar().is_none());
    assert_eq!(roster.query(), "");

    search(&mut roster, "Student 01");
    assert_eq!(roster.heading(), "15 Students");
    assert_eq!(roster.focus(), Focus::Navigation);
}

#[test]
fn empty_roster_shows_empty_state() {
    let roster: Roster<Student> = Roster::new(vec![]);
    assert_eq!(roster.heading(), "0 Students");
    assert!(roster.navigation().is_none());
    assert_eq!(roster.notice().unwrap().message(), "No results for ''");
}

#[test]
fn submit_reruns_current_query_on_page_one() {
    let mut roster = Roster::new(students(30));
    search(&mut roster, "Student");
    roster.dispatch(Message::PageRequested("3".to_string()));
    roster.dispatch(Message::SearchSubmitted);
    assert_eq!(roster.page(), 1);
    assert_eq!(roster.navigation().unwrap().active_page(), Some(1));
}

#[test]
fn config_document_drives_roster() {
    let config = Config::from_json(
        r#"{ "per_page": 4, "item_singular": "Member", "item_plural": "Members" }"#,
    )
    .unwrap();
    let mut roster = Roster::with_config(students(9), config);
    assert_eq!(roster.heading(), "9 Members");
    assert_eq!(roster.navigation().unwrap().len(), 3);

    search(&mut roster, "student09@");
    assert_eq!(roster.heading(), "1 Member");
}

#[test]
fn fuzzy_mode_matches_scattered_characters() {
    let config = Config::new().with_match_mode(MatchMode::Fuzzy);
    let mut roster = Roster::with_config(
        vec![
            Student::new("Ana Smith", "ana@example.com", "Joined 07/15/15"),
            Student::new("Chloe Park", "chloe@example.com", "Joined 11/20/14"),
        ],
        config,
    );
    search(&mut roster, "cpk");
    assert_eq!(names(&roster), vec!["Chloe Park"]);
}

#[test]
fn filter_engine_is_order_preserving() {
    let store = ItemStore::new(students(30));
    let matched = apply_filter("student2", &store, MatchMode::Substring);
    assert_eq!(matched, (19..29).collect::<Vec<_>>());
}

proptest! {
    #[test]
    fn visible_entries_are_exactly_the_requested_slice(
        n in 0usize..60,
        per_page in 1usize..12,
        page in 1usize..8,
    ) {
        let mut roster = Roster::with_config(students(n), Config::new().with_per_page(per_page));
        roster.dispatch(Message::PageRequested(page.to_string()));

        let count = if n == 0 { 1 } else { (n + per_page - 1) / per_page };
        let shown = page.min(count);
        prop_assert_eq!(roster.page(), shown);

        let start = ((shown - 1) * per_page).min(n);
        let end = (shown * per_page).min(n);
        prop_assert_eq!(roster.store().visible_indices(), (start..end).collect::<Vec<_>>());
        prop_assert!(roster.visible_items().len() <= per_page);
    }

    #[test]
    fn control_count_tracks_active_list_on_page_one(n in 0usize..60, per_page in 1usize..12) {
        let roster = Roster::with_config(students(n), Config::new().with_per_page(per_page));
        if n == 0 {
            prop_assert!(roster.navigation().is_none());
        } else {
            let expected = (n + per_page - 1) / per_page;
            prop_assert_eq!(roster.navigation().unwrap().len(), expected);
        }
    }
}

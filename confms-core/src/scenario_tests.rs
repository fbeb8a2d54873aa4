//! End-to-end list screen scenarios
//!
//! These drive a `PaginatedView` and feed its pages into the pagination
//! control the way the list screens do.

use crate::page_strip::{PaginationControl, StripEntry};
use crate::pagination::PaginatedView;
use crate::records::{ActivityGroup, ActivityRecord, filter_by_group};
use time::OffsetDateTime;

fn audit_rows(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("row-{}", n)).collect()
}

fn activity(id: u64, activity_type: &str) -> ActivityRecord {
    ActivityRecord {
        id,
        activity_type: activity_type.to_string(),
        description: String::new(),
        timestamp: OffsetDateTime::UNIX_EPOCH,
    }
}

#[test]
fn test_audit_log_of_47_rows() {
    let mut view = PaginatedView::new(audit_rows(47), 20).unwrap();

    let page = view.page();
    assert_eq!(page.items.first().map(String::as_str), Some("row-1"));
    assert_eq!(page.items.last().map(String::as_str), Some("row-20"));
    let model = PaginationControl::for_page(&page, "audit log entries")
        .render()
        .unwrap();
    assert!(!model.first.enabled && !model.prev.enabled);
    assert!(model.next.enabled && model.last.enabled);

    view.set_current_page(model.next.press().unwrap());
    let page = view.page();
    assert_eq!(page.items.first().map(String::as_str), Some("row-21"));
    assert_eq!(page.items.last().map(String::as_str), Some("row-40"));

    let model = PaginationControl::for_page(&page, "audit log entries")
        .render()
        .unwrap();
    view.set_current_page(model.last.press().unwrap());
    let page = view.page();
    assert_eq!(page.items.len(), 7);
    assert_eq!(page.items.first().map(String::as_str), Some("row-41"));
    assert_eq!(page.items.last().map(String::as_str), Some("row-47"));

    let model = PaginationControl::for_page(&page, "audit log entries")
        .render()
        .unwrap();
    assert!(model.first.enabled && model.prev.enabled);
    assert!(!model.next.enabled && !model.last.enabled);
    assert_eq!(model.info.to_string(), "Showing 41-47 of 47 audit log entries");
}

#[test]
fn test_deleting_only_item_on_last_page() {
    let mut view = PaginatedView::new(audit_rows(21), 20).unwrap();
    view.set_current_page(2);
    assert_eq!(view.current_page_items(), &["row-21".to_string()]);

    let index = view.start_index();
    view.remove(index);

    assert_eq!(view.total_pages(), 1);
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.current_page_items().len(), 20);
}

#[test]
fn test_filter_shrinks_history_out_from_under_page() {
    let mut records: Vec<ActivityRecord> = (0..45).map(|id| activity(id, "LOGIN")).collect();
    records.extend((45..55).map(|id| activity(id, "SUBMIT_PAPER")));
    let mut view = PaginatedView::new(records.clone(), 20).unwrap();
    view.set_current_page(3);

    view.set_items(filter_by_group(&records, ActivityGroup::Paper));
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.current_page_items().len(), 10);

    view.set_items(records);
    assert_eq!(view.total_pages(), 3);
    assert_eq!(view.current_page(), 1);
}

#[test]
fn test_empty_screen_renders_no_control() {
    let view: PaginatedView<String> = PaginatedView::new(Vec::new(), 20).unwrap();
    let page = view.page();
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
    assert_eq!(PaginationControl::for_page(&page, "backups").render(), None);
}

#[test]
fn test_every_strip_button_reaches_a_valid_page() {
    let mut view = PaginatedView::new(audit_rows(200), 20).unwrap();
    view.set_current_page(5);
    let model = PaginationControl::for_page(&view.page(), "items")
        .render()
        .unwrap();
    let pages: Vec<usize> = model.strip.iter().filter_map(StripEntry::press).collect();
    assert_eq!(pages, vec![1, 3, 4, 5, 6, 7, 10]);

    for target in pages {
        view.set_current_page(target);
        assert_eq!(view.current_page(), target);
        assert!(!view.current_page_items().is_empty());
    }
}

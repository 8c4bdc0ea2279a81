use super::*;

#[test]
fn split_authors_trims_and_separates() {
    let entries = split_authors("Le Chen, Yiyang Wu, Jinyu Gu", "Le Chen");
    let names: Vec<&str> = entries.iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Le Chen", "Yiyang Wu", "Jinyu Gu"]);
    assert_eq!(entries.iter().filter(|e| e.separated).count(), 2);
    assert!(!entries[2].separated);
}

#[test]
fn split_authors_highlights_marked_names() {
    let entries = split_authors("Le Chen*, Dahu Feng*, Erhu Feng", "Le Chen");
    assert!(entries[0].highlighted);
    assert_eq!(entries[0].name, "Le Chen*");
    assert!(!entries[1].highlighted);
    assert!(!entries[2].highlighted);
}

#[test]
fn split_authors_highlights_middle_position() {
    let entries = split_authors("Mingyu Li, Xuyang Zhao, Le Chen, Cheng Tan", "Le Chen");
    let highlighted: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.highlighted)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(highlighted, vec![2]);
}

#[test]
fn split_authors_drops_blank_fragments() {
    let entries = split_authors("A, , B,", "Le Chen");
    let names: Vec<&str> = entries.iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(!entries[1].separated);
}

#[test]
fn split_authors_handles_empty_input() {
    assert!(split_authors("", "Le Chen").is_empty());
}

#[test]
fn empty_highlight_marks_nobody() {
    assert!(split_authors("A, B", "").iter().all(|e| !e.highlighted));
}

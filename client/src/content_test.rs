use std::collections::HashSet;

use super::*;

#[test]
fn publication_ids_are_unique() {
    let ids: HashSet<PublicationId> = PUBLICATIONS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PUBLICATIONS.len());
}

#[test]
fn every_publication_lists_the_highlighted_author() {
    for publication in PUBLICATIONS {
        assert!(
            publication.authors.contains(HIGHLIGHT_NAME),
            "{} is missing {HIGHLIGHT_NAME}",
            publication.title
        );
    }
}

#[test]
fn publications_are_newest_first() {
    let years: Vec<u16> = PUBLICATIONS.iter().map(|p| p.year).collect();
    let mut sorted = years.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(years, sorted);
}

#[test]
fn links_are_absolute_https() {
    for publication in PUBLICATIONS {
        for link in [publication.links.pdf, publication.links.code].into_iter().flatten() {
            assert!(link.starts_with("https://"), "{link}");
        }
    }
    assert!(PROFILE.github_url.starts_with("https://"));
    assert!(PROFILE.advisor_url.starts_with("https://"));
}

#[test]
fn has_abstract_reflects_paragraphs() {
    let with: Vec<u32> = PUBLICATIONS.iter().filter(|p| p.has_abstract()).map(|p| p.id.0).collect();
    assert_eq!(with, vec![1, 2]);
}

#[test]
fn publication_lookup_by_id() {
    assert_eq!(publication(PublicationId(2)).map(|p| p.venue), Some("ATC 2025"));
    assert!(publication(PublicationId(99)).is_none());
}

#[test]
fn mailto_uses_profile_email() {
    assert_eq!(PROFILE.mailto(), "mailto:cen-le@sjtu.edu.cn");
}

#[test]
fn nav_links_point_at_page_sections() {
    for link in NAV_LINKS {
        assert!(link.href.starts_with('#'));
    }
}

use super::*;

#[test]
fn glass_card_class_plain() {
    assert_eq!(glass_card_class(false, ""), "glass-card");
}

#[test]
fn glass_card_class_with_hover_and_extra() {
    assert_eq!(
        glass_card_class(true, "publication-card"),
        "glass-card glass-card--hover publication-card"
    );
}

#[test]
fn glass_card_class_ignores_blank_extra() {
    assert_eq!(glass_card_class(true, "   "), "glass-card glass-card--hover");
}

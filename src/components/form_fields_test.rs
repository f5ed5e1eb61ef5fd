use super::*;

#[test]
fn price_is_a_number_with_cents() {
    assert_eq!(InputKind::Price.html_type(), "number");
    assert_eq!(InputKind::Price.step(), Some("0.01"));
}

#[test]
fn plain_kinds_map_to_html_types_without_step() {
    let cases = [
        (InputKind::Text, "text"),
        (InputKind::Number, "number"),
        (InputKind::Date, "date"),
        (InputKind::DateTime, "datetime-local"),
    ];
    for (kind, html) in cases {
        assert_eq!(kind.html_type(), html, "{kind:?}");
        assert_eq!(kind.step(), None, "{kind:?}");
    }
}

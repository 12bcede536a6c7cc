//! Tests for style setters and colour resolution through the formatter.

use super::Harness;
use crate::{Axis, Error, FormatterConfig, MessageKind, StyleUpdate};

fn snapshot(h: &Harness) -> Vec<crate::StyleTriple> {
    MessageKind::ALL
        .into_iter()
        .map(|kind| h.fmt.styles(kind).clone())
        .collect()
}

#[test]
fn test_resolve_case_insensitive_and_passthrough() {
    let h = Harness::plain(80);
    assert_eq!(
        h.fmt.resolve(Axis::Fore, "RED"),
        h.fmt.resolve(Axis::Fore, "red")
    );
    assert_eq!(h.fmt.resolve(Axis::Fore, "NOTACOLOR"), "NOTACOLOR");
}

#[test]
fn test_set_styles_resolves_and_keeps_omitted() {
    let mut h = Harness::plain(80);
    let before = h.fmt.styles(MessageKind::Info).clone();

    h.fmt
        .set_styles(MessageKind::Info, &StyleUpdate::new().fore("lightblue_ex"));

    let after = h.fmt.styles(MessageKind::Info);
    assert_eq!(after.fore, "\x1b[94m");
    assert_eq!(after.back, before.back);
    assert_eq!(after.weight, before.weight);
}

#[test]
fn test_set_styles_stores_raw_tokens() {
    let mut h = Harness::plain(80);
    h.fmt
        .set_styles(MessageKind::Warn, &StyleUpdate::new().back("\x1b[48;5;17m"));
    assert_eq!(h.fmt.styles(MessageKind::Warn).back, "\x1b[48;5;17m");
}

#[test]
fn test_set_styles_from_pairs_unknown_field_changes_nothing() {
    let mut h = Harness::plain(80);
    let before = snapshot(&h);

    let err = h
        .fmt
        .set_styles_from_pairs(MessageKind::Info, [("fore", "BRIGHTRED"), ("glow", "x")])
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(snapshot(&h), before);
}

#[test]
fn test_set_styles_from_pairs() {
    let mut h = Harness::plain(80);
    h.fmt
        .set_styles_from_pairs(MessageKind::Error, [("back", "white"), ("style", "dim")])
        .unwrap();
    let error = h.fmt.styles(MessageKind::Error);
    assert_eq!(error.back, "\x1b[47m");
    assert_eq!(error.weight, "\x1b[2m");
    assert_eq!(error.fore, "\x1b[31m");
}

#[test]
fn test_set_colors_across_kinds() {
    let mut h = Harness::plain(80);
    h.fmt
        .set_colors([
            ("info_fore", "LIGHTBLUE_EX"),
            ("info_style", "BRIGHT"),
            ("warn_fore", "RED"),
            ("warn_back", "WHITE"),
            ("warn_style", "BRIGHT"),
        ])
        .unwrap();

    let info = h.fmt.styles(MessageKind::Info);
    assert_eq!(info.fore, "\x1b[94m");
    assert_eq!(info.weight, "\x1b[1m");
    let warn = h.fmt.styles(MessageKind::Warn);
    assert_eq!(warn.start_sequence(), "\x1b[47m\x1b[31m\x1b[1m");
}

#[test]
fn test_set_colors_unknown_key_changes_nothing() {
    let mut h = Harness::plain(80);
    let before = snapshot(&h);

    let result = h.fmt.set_colors([("info_fore", "red"), ("bogus", "x")]);

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(snapshot(&h), before);
}

#[test]
fn test_config_style_overrides() {
    let config = FormatterConfig::new()
        .with_color(true)
        .with_columns(80)
        .with_style(MessageKind::Error, StyleUpdate::new().fore("magenta"));
    let mut h = Harness::new(config);

    assert_eq!(h.fmt.styles(MessageKind::Error).fore, "\x1b[35m");
    assert_eq!(h.fmt.styles(MessageKind::Error).weight, "\x1b[1m");

    h.fmt.error(&["x"]).unwrap();
    assert_eq!(
        h.secondary.contents(),
        "\x1b[40m\x1b[35m\x1b[1merror: x\n\x1b[0m"
    );
}

#[test]
fn test_new_styles_show_up_in_output() {
    let mut h = Harness::new(FormatterConfig::new().with_color(true).with_columns(80));
    h.fmt
        .set_colors([("msg_fore", "cyan"), ("msg_back", "reset")])
        .unwrap();
    h.fmt.msg(&["hi"]).unwrap();
    assert_eq!(h.primary.contents(), "\x1b[49m\x1b[36m\x1b[22mhi\n\x1b[0m");
}

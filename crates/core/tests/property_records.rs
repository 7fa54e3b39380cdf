//! Records assembled from comma-joined `+a` / `-b` properties.
//!
//! Each property is folded into a [`PropertyMap`] and the map is turned into
//! a record by a [`RecordCreator`], a [`RecordBuilder`], or a builder using
//! the context-taking constructor.

mod common;

use common::{
    P, Syntax, apply, choice_swapped, init, join, parse_all, prefixed, print_or_panic, put, then,
    word,
};
use invertible_syntax_core::{
    BuilderConfig, Mapping, PropertyMap, PropertyMapInitializer, PropertyPutFold, RecordBuilder,
    RecordCreator, RecordShape, Span, SyntaxInfo, ToValue, UnknownPropertyPolicy, Value,
    record_shape,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Item {
    a: Option<String>,
    b: Option<String>,
}

fn item_shape() -> RecordShape<Item> {
    record_shape!(Item { a: String, b: String })
}

/// `+word` stored under `a`, `-word` stored under `b`.
fn entries() -> common::Q<PropertyMap, PropertyMap> {
    let a: P<Value> = prefixed("+", then(word(), apply(ToValue::<String>::new())));
    let b: P<Value> = prefixed("-", then(word(), apply(ToValue::<String>::new())));
    join(
        ",",
        choice_swapped(
            put(a, PropertyPutFold::new("a")),
            put(b, PropertyPutFold::new("b")),
        ),
    )
}

fn grammar<R: 'static>(record: impl Mapping<PropertyMap, R> + 'static) -> P<R> {
    let properties: P<PropertyMap> = then(init(PropertyMapInitializer), entries());
    then(properties, apply(record))
}

fn creator_grammar() -> P<Item> {
    let creator = RecordCreator::new(&item_shape(), &["a", "b"], &BuilderConfig::default())
        .expect("creator for Item");
    grammar(creator)
}

fn builder_grammar() -> P<Item> {
    let builder =
        RecordBuilder::new(&item_shape(), &BuilderConfig::default()).expect("builder for Item");
    grammar(builder)
}

fn item(a: Option<&str>, b: Option<&str>) -> Item {
    Item {
        a: a.map(str::to_string),
        b: b.map(str::to_string),
    }
}

// ── Invertible creator ──────────────────────────────────────────────────────

#[test]
fn creator_empty_input() {
    let g = creator_grammar();
    let parsed = parse_all(&*g, "").expect("empty input parses");
    assert_eq!(parsed, Item::default());
    assert_eq!(print_or_panic(&*g, &parsed), "");
}

#[test]
fn creator_both_properties_round_trip() {
    let g = creator_grammar();
    let parsed = parse_all(&*g, "+zyx,-wvu").expect("parses");
    assert_eq!(parsed, item(Some("zyx"), Some("wvu")));
    assert_eq!(print_or_panic(&*g, &parsed), "+zyx,-wvu");
}

#[test]
fn creator_single_property() {
    let g = creator_grammar();
    let parsed = parse_all(&*g, "-wvu").expect("parses");
    assert_eq!(parsed, item(None, Some("wvu")));
    assert_eq!(print_or_panic(&*g, &parsed), "-wvu");
}

#[test]
fn creator_last_write_wins() {
    let g = creator_grammar();
    let parsed = parse_all(&*g, "+zyx,+wvu").expect("parses");
    assert_eq!(parsed, item(Some("wvu"), None));
    assert_eq!(print_or_panic(&*g, &parsed), "+wvu");
}

#[test]
fn creator_prints_in_canonical_order() {
    let g = creator_grammar();
    let parsed = parse_all(&*g, "-wvu,+zyx").expect("parses");
    assert_eq!(parsed, item(Some("zyx"), Some("wvu")));
    assert_eq!(print_or_panic(&*g, &parsed), "+zyx,-wvu");
}

#[test]
fn malformed_input_does_not_parse() {
    let g = creator_grammar();
    assert!(parse_all(&*g, "+").is_none());
    assert!(parse_all(&*g, "+zyx,").is_none());
    assert!(parse_all(&*g, "zyx").is_none());
}

// ── Setter-driven builder ───────────────────────────────────────────────────

#[test]
fn builder_parses_like_creator() {
    let g = builder_grammar();
    assert_eq!(parse_all(&*g, ""), Some(Item::default()));
    assert_eq!(
        parse_all(&*g, "+zyx,-wvu"),
        Some(item(Some("zyx"), Some("wvu")))
    );
    assert_eq!(parse_all(&*g, "+zyx,+wvu"), Some(item(Some("wvu"), None)));
}

#[test]
fn builder_cannot_print() {
    let g = builder_grammar();
    assert!(g.print(&item(Some("zyx"), None)).is_none());
}

#[derive(Debug, Default, Clone, PartialEq)]
struct OnlyA {
    a: Option<String>,
}

#[test]
fn builder_rejects_unknown_property_by_default() {
    let shape = record_shape!(OnlyA { a: String });
    let builder = RecordBuilder::new(&shape, &BuilderConfig::default()).expect("builder");
    let g = grammar(builder);
    assert_eq!(
        parse_all(&*g, "+zyx"),
        Some(OnlyA {
            a: Some("zyx".into())
        })
    );
    assert!(parse_all(&*g, "+zyx,-wvu").is_none());
}

#[test]
fn builder_can_skip_unknown_property() {
    let shape = record_shape!(OnlyA { a: String });
    let config = BuilderConfig::default().unknown_properties(UnknownPropertyPolicy::Skip);
    let g = grammar(RecordBuilder::new(&shape, &config).expect("builder"));
    assert_eq!(
        parse_all(&*g, "-wvu,+zyx"),
        Some(OnlyA {
            a: Some("zyx".into())
        })
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Numeric {
    a: Option<i64>,
}

#[test]
fn builder_type_mismatch_fails_the_parse() {
    let shape = record_shape!(Numeric { a: i64 });
    let g = grammar(RecordBuilder::new(&shape, &BuilderConfig::default()).expect("builder"));
    assert!(parse_all(&*g, "+zyx").is_none());
    assert_eq!(parse_all(&*g, ""), Some(Numeric::default()));
}

// ── Context-taking constructor ──────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Located {
    info: SyntaxInfo,
    a: Option<String>,
    b: Option<String>,
}

fn located_shape() -> RecordShape<Located> {
    RecordShape::new()
        .constructor_with_context(|ctx| Located {
            info: SyntaxInfo::from_context(ctx),
            a: None,
            b: None,
        })
        .property(
            "a",
            |r: &mut Located, v: String| r.a = Some(v),
            |r: &Located| r.a.clone(),
        )
        .property(
            "b",
            |r: &mut Located, v: String| r.b = Some(v),
            |r: &Located| r.b.clone(),
        )
}

#[test]
fn context_constructor_records_span() {
    let config = BuilderConfig::default().with_context(true);
    let g = grammar(RecordBuilder::new(&located_shape(), &config).expect("builder"));

    let parsed = parse_all(&*g, "+zyx,-wvu").expect("parses");
    assert_eq!(parsed.info.span(), Span::new(0, 9));
    assert_eq!(parsed.a.as_deref(), Some("zyx"));
    assert_eq!(parsed.b.as_deref(), Some("wvu"));

    let empty = parse_all(&*g, "").expect("parses");
    assert_eq!(empty.info.span(), Span::new(0, 0));
}

#[test]
fn context_constructor_is_required_when_requested() {
    let config = BuilderConfig::default().with_context(true);
    assert!(RecordBuilder::new(&item_shape(), &config).is_err());
    assert!(RecordBuilder::new(&located_shape(), &BuilderConfig::default()).is_err());
}

#[test]
fn context_creator_prints() {
    let config = BuilderConfig::default().with_context(true);
    let creator =
        RecordCreator::new(&located_shape(), &["a", "b"], &config).expect("creator for Located");
    let g = grammar(creator);
    let parsed = parse_all(&*g, "-wvu").expect("parses");
    assert_eq!(parsed.info.span(), Span::new(0, 4));
    assert_eq!(print_or_panic(&*g, &parsed), "-wvu");
}

use std::collections::BTreeMap;

use redline::{AnnotatedText, Error};

#[test]
fn test_load_annotated_document_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.ann");
    std::fs::write(&path, "The {cat=>cats|cat's} is {nere=>here}.\n").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let text = AnnotatedText::from_markup(&raw).unwrap();
    assert_eq!(text.original_text(), "The cat is nere.\n");
    assert_eq!(text.corrected_text(0), "The cats is here.\n");
}

#[test]
fn test_full_correction_scenario() {
    let raw = "The {cat=>cats|cat's} is {nere=>here}.";
    let mut text = AnnotatedText::from_markup(raw).unwrap();

    assert_eq!(text.original_text(), "The cat is nere.");
    assert_eq!(text.corrected_text(0), "The cats is here.");
    assert_eq!(text.to_markup(true), raw);

    // A zero-length insertion point touching the `cat` span is fine...
    text.annotate(4, 4, "X").unwrap();
    // ...but the exact span of an existing annotation is not.
    assert_eq!(
        text.annotate(4, 7, "Y"),
        Err(Error::Overlap {
            start: 4,
            end: 7,
            count: 1
        })
    );
}

#[test]
fn test_fixture_round_trips_through_markup() {
    let raw = include_str!("fixtures/sample.ann");
    let text = AnnotatedText::from_markup(raw).unwrap();
    assert_eq!(text.to_markup(true), raw);

    let reparsed = AnnotatedText::from_markup(&text.to_markup(true)).unwrap();
    assert_eq!(reparsed, text);
}

#[test]
fn test_error_type_aggregation_over_fixture() {
    // The statistics side consumes exactly this view: the annotation
    // list and each annotation's `error_type` metadata entry.
    let text = AnnotatedText::from_markup(include_str!("fixtures/sample.ann")).unwrap();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for annotation in text.annotations() {
        let kind = annotation
            .meta()
            .get("error_type")
            .expect("every fixture annotation carries error_type");
        *counts.entry(kind.as_str()).or_default() += 1;
    }

    assert_eq!(text.annotations().len(), 10);
    assert_eq!(counts.get("Spelling"), Some(&4));
    assert_eq!(counts.get("SubjectVerbAgreement"), Some(&2));
    assert_eq!(counts.get("VerbTense"), Some(&1));
    assert_eq!(counts.get("Preposition"), Some(&1));
}

#[test]
fn test_correcting_every_annotation_in_the_fixture() {
    let mut text = AnnotatedText::from_markup(include_str!("fixtures/sample.ann")).unwrap();

    while let Some(annotation) = text.annotations().first().cloned() {
        text.apply_correction(&annotation, 0).unwrap();
    }

    assert!(text.annotations().is_empty());
    // Flag-only annotations are accepted as textual no-ops, so `on` stays.
    assert!(text.original_text().contains("Yesterday I went to the library"));
    assert!(text.original_text().contains("We were looking for an interesting"));
    assert!(text.original_text().contains("come back on next week"));
}

#[test]
fn test_join_documents_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("1.ann");
    let second = dir.path().join("2.ann");
    std::fs::write(&first, "a {b=>c}").unwrap();
    std::fs::write(&second, "{d=>e} f").unwrap();

    let docs: Vec<AnnotatedText> = [&first, &second]
        .iter()
        .map(|p| std::fs::read_to_string(p).unwrap().parse().unwrap())
        .collect();
    let joined = AnnotatedText::join(" ", &docs).unwrap();

    assert_eq!(joined.original_text(), "a b d f");
    assert_eq!(joined.annotations().len(), 2);
    assert_eq!(joined.to_markup(true), "a {b=>c} {d=>e} f");
}

//! End-to-end classification scenarios over the public API.

use rs_doczones::{classify, classify_paragraphs, Paragraph, Zone};

fn para(id: &str, text: &str) -> Paragraph {
    Paragraph::new(id, text, format!(r#"<p xml:id="{id}">{text}</p>"#))
}

#[test]
fn university_header_is_title_page() {
    let result = classify(r#"<p xml:id="1.1">UNIVERZA V LJUBLJANI</p>"#);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].zone, Zone::TitlePage);
}

#[test]
fn povzetek_marks_the_slovenian_abstract_and_its_section() {
    let paragraphs = vec![
        para("3.1", "POVZETEK"),
        para("3.2", "Naloga obravnava razvrščanje odstavkov."),
    ];
    let result = classify_paragraphs(&paragraphs);
    assert_eq!(result.records[0].zone, Zone::AbstractSlo);
    // The plain paragraph inherits the section's established label.
    assert_eq!(result.records[1].zone, Zone::AbstractSlo);
}

#[test]
fn abstracts_in_three_languages_get_distinct_labels() {
    let paragraphs = vec![
        para("3.1", "POVZETEK"),
        para("4.1", "ZUSAMMENFASSUNG"),
        para("5.1", "Abstract"),
    ];
    let result = classify_paragraphs(&paragraphs);
    assert_eq!(result.records[0].zone, Zone::AbstractSlo);
    assert_eq!(result.records[1].zone, Zone::AbstractDe);
    assert_eq!(result.records[2].zone, Zone::AbstractEn);
}

#[test]
fn chapter_heading_turns_earlier_body_into_front_matter() {
    let paragraphs = vec![
        para("1.1", "Naslovna stran brez oznak"),
        para("2.1", "Uvodne opombe"),
        para("4.1", "1 Introduction"),
    ];
    let result = classify_paragraphs(&paragraphs);
    assert_eq!(result.records[0].zone, Zone::Front);
    assert_eq!(result.records[1].zone, Zone::Front);
    assert_eq!(result.records[2].zone, Zone::Chapter);
}

#[test]
fn literatura_after_a_chapter_starts_the_back_matter() {
    let paragraphs = vec![
        para("4.1", "1 Uvod"),
        para("7.1", "LITERATURA"),
        para("8.1", "Priloga brez posebnih oznak"),
    ];
    let result = classify_paragraphs(&paragraphs);
    assert_eq!(result.records[1].zone, Zone::Bibliography);
    assert_eq!(result.records[2].zone, Zone::Back);
}

#[test]
fn empty_document_classifies_to_an_empty_result() {
    let result = classify("");
    assert!(result.records.is_empty());
    assert!(result.is_empty());
}

#[test]
fn foreword_and_abbreviation_list_are_recognized() {
    let paragraphs = vec![
        para("2.1", "PREDGOVOR"),
        para("3.1", "SEZNAM UPORABLJENIH KRATIC"),
    ];
    let result = classify_paragraphs(&paragraphs);
    assert_eq!(result.records[0].zone, Zone::Foreword);
    assert_eq!(result.records[1].zone, Zone::Toa);
}

#[test]
fn full_document_partitions_into_all_three_macro_regions() {
    let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
               <p xml:id=\"1.1\">UNIVERZA V LJUBLJANI</p>\n\
               <p xml:id=\"2.1\">KAZALO</p>\n\
               <p xml:id=\"2.2\">1 Uvod ........ 7</p>\n\
               <p xml:id=\"3.1\">Zahvala vsem sodelujočim.</p>\n\
               <p xml:id=\"4.1\">1 Uvod</p>\n\
               <p xml:id=\"4.2\">Prvi odstavek prvega poglavja.</p>\n\
               <p xml:id=\"5.1\">Nenaslovljen razdelek sredi naloge.</p>\n\
               <p xml:id=\"6.1\">LITERATURA</p>\n\
               <p xml:id=\"7.1\">Dodatek s prilogami brez oznak.</p>";
    let result = classify(xml);
    let zones: Vec<Zone> = result.records.iter().map(|r| r.zone).collect();
    assert_eq!(
        zones,
        vec![
            Zone::TitlePage,
            Zone::Toc,
            Zone::Toc,   // TOC entry line claimed by the leader-dot rule
            Zone::Front, // unmatched front matter before the first chapter
            Zone::Chapter,
            Zone::Chapter, // inherited within the chapter's section
            Zone::Body,    // unmatched section between chapter and bibliography
            Zone::Bibliography,
            Zone::Back,
        ]
    );
}

#[test]
fn every_record_keeps_its_input_id_and_order() {
    let paragraphs: Vec<Paragraph> = (1..=30)
        .map(|i| para(&format!("{}.{}", i / 10 + 1, i % 10), "besedilo"))
        .collect();
    let result = classify_paragraphs(&paragraphs);
    assert_eq!(result.records.len(), paragraphs.len());
    for (paragraph, record) in paragraphs.iter().zip(&result.records) {
        assert_eq!(paragraph.id, record.id);
    }
}

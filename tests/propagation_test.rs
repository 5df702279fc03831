//! Properties of the propagation and structural-state pass.

use rs_doczones::{classify_paragraphs, classifier, Options, Paragraph, RuleTable, Zone};

fn para(id: &str, text: &str) -> Paragraph {
    Paragraph::new(id, text, format!(r#"<p xml:id="{id}">{text}</p>"#))
}

/// A realistic thesis skeleton: title page, TOC, abstract, two chapters,
/// conclusion, bibliography, trailing appendix.
fn thesis() -> Vec<Paragraph> {
    vec![
        para("1.1", "UNIVERZA V LJUBLJANI"),
        para("1.2", "EKONOMSKA FAKULTETA"),
        para("2.1", "KAZALO"),
        para("3.1", "POVZETEK"),
        para("3.2", "Opis vsebine diplomske naloge."),
        para("4.1", "1 Uvod"),
        para("4.2", "Prvi odstavek uvoda."),
        para("5.1", "2 Metodologija"),
        para("5.2", "Opis uporabljene metode."),
        para("6.1", "3 SKLEP"),
        para("7.1", "LITERATURA"),
        para("7.2", "[1] J. Novak, Omrežja, 2001."),
        para("8.1", "Priloga A: merilni podatki."),
    ]
}

#[test]
fn every_emitted_zone_is_in_the_closed_set() {
    let result = classify_paragraphs(&thesis());
    for record in &result.records {
        assert!(Zone::ALL.contains(&record.zone), "unknown zone {:?}", record.zone);
    }
}

#[test]
fn output_length_matches_input_length_without_synthesis() {
    let input = thesis();
    let result = classify_paragraphs(&input);
    assert_eq!(result.records.len(), input.len());
    assert_eq!(result.len(), input.len());
}

#[test]
fn output_length_exceeds_input_length_with_synthesis() {
    let input = thesis();
    let options = Options {
        synthesize_sections: true,
        ..Options::default()
    };
    let result = classifier::classify_sequence(&input, &RuleTable::canonical(), &options);
    assert_eq!(result.records.len(), input.len());
    assert!(result.len() > input.len());
}

#[test]
fn macro_regions_are_monotonic() {
    let result = classify_paragraphs(&thesis());
    let order = |zone: Zone| match zone {
        Zone::Front => Some(0),
        Zone::Body => Some(1),
        Zone::Back => Some(2),
        _ => None,
    };
    let mut highest = 0;
    for record in &result.records {
        if let Some(rank) = order(record.zone) {
            assert!(rank >= highest, "macro region went backwards at {}", record.id);
            highest = rank;
        }
    }
}

#[test]
fn no_front_after_the_first_chapter() {
    let result = classify_paragraphs(&thesis());
    let first_chapter = result
        .records
        .iter()
        .position(|r| r.zone == Zone::Chapter)
        .unwrap();
    assert!(result.records[first_chapter..]
        .iter()
        .all(|r| r.zone != Zone::Front));
}

#[test]
fn no_plain_body_after_the_bibliography() {
    let result = classify_paragraphs(&thesis());
    let bibliography = result
        .records
        .iter()
        .position(|r| r.zone == Zone::Bibliography)
        .unwrap();
    assert!(result.records[bibliography..]
        .iter()
        .all(|r| r.zone != Zone::Body));
}

#[test]
fn section_continuity_holds_for_adjacent_paragraphs() {
    let input = thesis();
    let result = classify_paragraphs(&input);
    let provisional: Vec<Zone> = {
        let rules = RuleTable::canonical();
        input.iter().map(|p| rules.classify(p)).collect()
    };
    for window in 0..input.len() - 1 {
        let (p, q) = (&input[window], &input[window + 1]);
        if p.section_prefix() == q.section_prefix()
            && result.records[window].zone != Zone::Body
            && provisional[window + 1] == Zone::Body
        {
            assert_eq!(
                result.records[window + 1].zone,
                result.records[window].zone,
                "paragraph {} did not inherit from {}",
                q.id,
                p.id
            );
        }
    }
}

#[test]
fn conclusion_marker_alone_also_opens_the_back_matter() {
    let paragraphs = vec![
        para("4.1", "1 Uvod"),
        para("6.1", "SKLEP"),
        para("7.1", "Zadnje misli brez oznak."),
    ];
    let result = classify_paragraphs(&paragraphs);
    assert_eq!(result.records[1].zone, Zone::Conclusion);
    assert_eq!(result.records[2].zone, Zone::Back);
}

#[test]
fn document_with_no_chapters_stays_front_matter() {
    let paragraphs = vec![
        para("1.1", "Nenaslovljena stran"),
        para("2.1", "Drugo besedilo"),
        para("3.1", "Tretje besedilo"),
    ];
    let result = classify_paragraphs(&paragraphs);
    assert!(result.records.iter().all(|r| r.zone == Zone::Front));
}

#[test]
fn bibliography_inside_a_chapter_section_still_opens_back_matter() {
    let paragraphs = vec![
        para("4.1", "1 Uvod"),
        para("4.2", "LITERATURA"),
        para("5.1", "Besedilo za literaturo."),
    ];
    let result = classify_paragraphs(&paragraphs);
    assert_eq!(result.records[1].zone, Zone::Bibliography);
    assert_eq!(result.records[2].zone, Zone::Back);
}

#[test]
fn disabled_propagation_reproduces_the_early_flat_variant() {
    let input = thesis();
    let options = Options {
        propagate: false,
        ..Options::default()
    };
    let result = classifier::classify_sequence(&input, &RuleTable::canonical(), &options);
    let rules = RuleTable::canonical();
    for (paragraph, record) in input.iter().zip(&result.records) {
        assert_eq!(record.zone, rules.classify(paragraph));
    }
    // No macro regions without the propagation pass.
    assert!(result.records.iter().all(|r| !r.zone.is_macro_region()
        || r.zone == Zone::Body));
}

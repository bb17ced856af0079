use family_parser::{parse, Catalog, Member, Mode, ParseWarning, Parser};

fn fixture() -> String {
    std::fs::read_to_string("tests/fixtures/families.md").unwrap()
}

fn member<'a>(members: &'a [Member], name: &str) -> &'a Member {
    members
        .iter()
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("no member named {name}"))
}

#[test]
fn families_in_header_order() {
    let parsed = parse(&fixture());
    let names: Vec<_> = parsed.families.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Kapoor family", "Bachchan family", "Akhtar family"]);
    assert_eq!(parsed.families[0].members.len(), 6);
    assert_eq!(parsed.families[1].members.len(), 5);
    assert!(parsed.families[2].members.is_empty());
}

#[test]
fn orphan_member_dropped() {
    let parsed = parse(&fixture());
    assert!(parsed
        .families
        .iter()
        .flat_map(|f| &f.members)
        .all(|m| m.name != "Orphan Entry"));
}

#[test]
fn kapoor_members() {
    let parsed = parse(&fixture());
    let kapoors = &parsed.families[0].members;

    let raj = member(kapoors, "Raj Kapoor");
    assert_eq!(raj.profession, "Actor, director and producer");
    assert_eq!(
        raj.connections,
        vec!["Married to Krishna Kapoor", "Son of Prithviraj Kapoor"]
    );
    assert_eq!(raj.bio, "Known as the greatest showman of Indian cinema");

    let prithviraj = member(kapoors, "Prithviraj Kapoor");
    assert_eq!(prithviraj.profession, "Actor and producer");
    assert_eq!(
        prithviraj.connections,
        vec![
            "Father of Raj Kapoor and Shashi Kapoor",
            "Founder of Prithvi Theatres"
        ]
    );
    assert_eq!(prithviraj.bio, "");

    let krishna = member(kapoors, "Krishna Kapoor");
    assert_eq!(krishna.profession, "");
    assert_eq!(krishna.connections, vec!["Wife of Raj Kapoor", "Sister of Premnath"]);

    let rishi = member(kapoors, "Rishi Kapoor");
    assert_eq!(
        rishi.connections,
        vec![
            "Married to Neetu Singh (actress)",
            "Son of Raj Kapoor",
            "Father of Ranbir Kapoor"
        ]
    );
}

#[test]
fn bachchan_members() {
    let parsed = parse(&fixture());
    let bachchans = &parsed.families[1].members;

    let amitabh = member(bachchans, "Amitabh Bachchan");
    assert_eq!(amitabh.profession, "Actor and television host");
    assert_eq!(amitabh.connections.len(), 3);

    let jaya = member(bachchans, "Jaya Bachchan");
    assert_eq!(jaya.profession, "Actress and politician");
    assert_eq!(
        jaya.connections,
        vec!["Wife of Amitabh Bachchan", "Member of Parliament"]
    );

    let abhishek = member(bachchans, "Abhishek Bachchan");
    assert_eq!(
        abhishek.connections[0],
        "Married to Aishwarya Rai Bachchan (actress, former Miss World)"
    );

    let shweta = member(bachchans, "Shweta Bachchan Nanda");
    assert_eq!(shweta.profession, "Writer");
    assert_eq!(shweta.connections, vec!["Daughter of Amitabh Bachchan"]);
    assert_eq!(shweta.bio, "Author of the novel Paradise Towers 2018");
}

#[test]
fn lenient_reports_only_malformed_line() {
    let parsed = parse(&fixture());
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::MalformedMember {
            line: 19,
            text: "**Abhishek Bachchan: Actor. Son of Amitabh Bachchan.".into()
        }]
    );
}

#[test]
fn strict_reports_skipped_lines() {
    let parser = Parser::new(&Catalog::default(), Mode::Strict).unwrap();
    let parsed = parser.parse(&fixture());
    let lines: Vec<_> = parsed.warnings.iter().map(|w| w.line()).collect();
    assert_eq!(lines, vec![1, 3, 4, 13, 19]);
    assert!(matches!(parsed.warnings[2], ParseWarning::OrphanMember { .. }));
    assert_eq!(parsed.families, parse(&fixture()).families);
}

#[test]
fn json_round_trip_keeps_families() {
    let parsed = parse(&fixture());
    let json = family_parser::output::to_json(&parsed.families, family_parser::output::Style::Pretty)
        .unwrap();
    let back: Vec<family_parser::Family> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parsed.families);
}

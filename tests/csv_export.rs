use leadscope::{
    data::{
        dashboard::{DashboardData, Lead},
        leads::LeadQuery,
    },
    export::{self, ExportStyle, HEADER},
};

fn fixture() -> DashboardData {
    serde_json::from_str(include_str!("fixtures/dashboard.json")).expect("fixture parses")
}

#[test]
fn single_lead_row() {
    let lead = Lead {
        email: "a@b.com".into(),
        first_name: "A".into(),
        last_name: "B".into(),
        revenue: 997.0,
        ..Lead::default()
    };
    let csv = export::render(&[lead], ExportStyle::Literal).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Email,First Name,Last Name,Phone,Category,Optin Date,Lessons,Progress,Status,Revenue,Courses"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("a@b.com,A,B,"));
    assert!(row.contains(",$997,"));
    assert!(lines.next().is_none());
}

#[test]
fn header_only_for_no_leads() {
    let csv = export::render(&[], ExportStyle::Literal).unwrap();
    assert_eq!(csv, HEADER.join(","));
}

#[test]
fn fixture_export_in_default_order() {
    let data = fixture();
    let leads = LeadQuery::default().apply(&data.leads);
    let csv = export::render(&leads, ExportStyle::Literal).unwrap();
    insta::assert_snapshot!(csv, @r"
    Email,First Name,Last Name,Phone,Category,Optin Date,Lessons,Progress,Status,Revenue,Courses
    jane.doe@example.com,Jane,Doe,,Nutrition,2026-10-08,3,43%,IN_PROGRESS,,
    a@b.com,A,B,555-0100,Fitness,2026-10-01,7,100%,PAID,$997,Certification
    refund@example.com,Rae,Fund,,Nutrition,2026-09-28,7,100%,REFUNDED,$1994,Certification; Coaching
    max@example.com,Max,Power,,fitness,2026-09-20,0,0%,NOT_STARTED,,
    ");
}

#[test]
fn literal_style_does_not_escape_commas() {
    let lead = Lead {
        email: "x@y.com".into(),
        first_name: "Smith, Jr.".into(),
        ..Lead::default()
    };
    let literal = export::render(&[lead.clone()], ExportStyle::Literal).unwrap();
    let row = literal.lines().nth(1).unwrap();
    assert_eq!(row.split(',').count(), HEADER.len() + 1);

    let quoted = export::render(&[lead], ExportStyle::Quoted).unwrap();
    let mut reader = csv::ReaderBuilder::new().from_reader(quoted.as_bytes());
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(record.len(), HEADER.len());
    assert_eq!(&record[1], "Smith, Jr.");
}

#[test]
fn literal_style_keeps_quotes_raw() {
    let lead = Lead {
        email: "q@y.com".into(),
        first_name: "Al \"Bo\"".into(),
        ..Lead::default()
    };
    let literal = export::render(&[lead.clone()], ExportStyle::Literal).unwrap();
    assert!(literal.lines().nth(1).unwrap().starts_with("q@y.com,Al \"Bo\","));

    let quoted = export::render(&[lead], ExportStyle::Quoted).unwrap();
    assert!(quoted.lines().nth(1).unwrap().starts_with("q@y.com,\"Al \"\"Bo\"\"\","));
}

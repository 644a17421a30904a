use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use meetkit_planner::{SpecAttendee, derive_default_inputs, generate_planning_artifacts};

fn read_all(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut l_files: Vec<(String, Vec<u8>)> = std::fs::read_dir(dir)
        .expect("read_dir")
        .map(|entry| {
            let path = entry.expect("entry").path();
            let name = path
                .file_name()
                .expect("file name")
                .to_string_lossy()
                .into_owned();
            (name, std::fs::read(&path).expect("read"))
        })
        .collect();
    l_files.sort();
    l_files
}

#[test]
fn generate_writes_all_five_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let report = generate_planning_artifacts(tmp.path(), &derive_default_inputs())
        .expect("generate");

    let l_names: Vec<String> = read_all(tmp.path())
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        l_names,
        [
            "decision_log.csv",
            "directory_template.csv",
            "meeting_invite.ics",
            "meeting_planner_template.xlsx",
            "roster_template.csv"
        ]
    );
    assert_eq!(report.files_created.len(), 5);
}

#[test]
fn rerun_is_byte_identical() {
    let tmp_a = tempfile::tempdir().expect("tempdir");
    let tmp_b = tempfile::tempdir().expect("tempdir");
    let inputs = derive_default_inputs();

    generate_planning_artifacts(tmp_a.path(), &inputs).expect("first run");
    generate_planning_artifacts(tmp_b.path(), &inputs).expect("second run");
    let l_first = read_all(tmp_a.path());
    generate_planning_artifacts(tmp_a.path(), &inputs).expect("overwrite run");

    assert_eq!(l_first, read_all(tmp_b.path()));
    assert_eq!(l_first, read_all(tmp_a.path()));
}

#[test]
fn workbook_reads_back_with_live_formulas() {
    let tmp = tempfile::tempdir().expect("tempdir");
    generate_planning_artifacts(tmp.path(), &derive_default_inputs()).expect("generate");

    let mut workbook: Xlsx<_> =
        open_workbook(tmp.path().join("meeting_planner_template.xlsx")).expect("open");
    assert_eq!(workbook.sheet_names(), ["Settings", "Meeting", "Exports"]);

    let range_settings = workbook.worksheet_range("Settings").expect("settings");
    assert_eq!(range_settings.get_value((1, 1)), Some(&Data::Float(1760.0)));
    assert_eq!(
        range_settings.get_value((6, 0)),
        Some(&Data::String("P5".to_string()))
    );

    let range_formulas = workbook.worksheet_formula("Settings").expect("formulas");
    let c_hourly = range_formulas.get_value((6, 2)).expect("C7");
    assert!(c_hourly.contains("B7/$B$2"), "{c_hourly}");

    let range_meeting = workbook.worksheet_formula("Meeting").expect("formulas");
    let c_lookup = range_meeting.get_value((15, 4)).expect("E16");
    assert!(c_lookup.contains("VLOOKUP(C16"), "{c_lookup}");
    let c_score = range_meeting.get_value((30, 5)).expect("F31");
    assert!(c_score.starts_with("IFERROR(MAX(0,MIN(100,"), "{c_score}");

    let range_exports = workbook.worksheet_formula("Exports").expect("formulas");
    let c_summary = range_exports.get_value((2, 1)).expect("B3");
    assert!(c_summary.contains("CONCAT("), "{c_summary}");
}

fn is_blank(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => true,
        Some(Data::String(val)) => val.is_empty(),
        Some(_) => false,
    }
}

#[test]
fn blank_formula_results_read_back_empty() {
    let tmp = tempfile::tempdir().expect("tempdir");
    generate_planning_artifacts(tmp.path(), &derive_default_inputs()).expect("generate");

    let mut workbook: Xlsx<_> =
        open_workbook(tmp.path().join("meeting_planner_template.xlsx")).expect("open");

    let range_settings = workbook.worksheet_range("Settings").expect("settings");
    assert_eq!(range_settings.get_value((6, 2)), Some(&Data::Float(125.0)));
    let cell_c9 = range_settings.get_value((8, 2));
    assert!(is_blank(cell_c9), "Settings!C9 = {cell_c9:?}");

    let range_meeting = workbook.worksheet_range("Meeting").expect("meeting");
    for (n_col, c_ref) in [(4, "E16"), (5, "F16")] {
        let cell = range_meeting.get_value((15, n_col));
        assert!(is_blank(cell), "Meeting!{c_ref} = {cell:?}");
    }
}

#[test]
fn invite_carries_utc_instants_and_attendees() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut inputs = derive_default_inputs();
    inputs.meeting.title = "Budget review".to_string();
    inputs.meeting.attendees = vec![
        SpecAttendee {
            name: "Anna".to_string(),
            email: "anna@unhcr.org".to_string(),
            grade: "P5".to_string(),
            role: "D".to_string(),
        },
        SpecAttendee {
            name: "Piotr".to_string(),
            email: "piotr@unhcr.org".to_string(),
            grade: "G7".to_string(),
            role: "C".to_string(),
        },
    ];
    let report = generate_planning_artifacts(tmp.path(), &inputs).expect("generate");
    assert_eq!(report.cnt_calendar_attendees, 2);

    let c_ics = std::fs::read_to_string(tmp.path().join("meeting_invite.ics")).expect("read");
    assert!(c_ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
    assert!(c_ics.contains("DTSTART:20250101T080000Z\r\n"));
    assert!(c_ics.contains("DTEND:20250101T082500Z\r\n"));
    assert!(c_ics.contains("SUMMARY:Budget review\r\n"));
    assert!(c_ics.contains("LOCATION:Warsaw\r\n"));

    let n_anna = c_ics.find("ATTENDEE:mailto:anna@unhcr.org").expect("anna");
    let n_piotr = c_ics.find("ATTENDEE:mailto:piotr@unhcr.org").expect("piotr");
    assert!(n_anna < n_piotr);
    assert!(c_ics.ends_with("END:VCALENDAR\r\n"));
}

#[test]
fn csv_templates_match_expected_text() {
    let tmp = tempfile::tempdir().expect("tempdir");
    generate_planning_artifacts(tmp.path(), &derive_default_inputs()).expect("generate");

    let read = |name: &str| std::fs::read_to_string(tmp.path().join(name)).expect("read");
    assert_eq!(
        read("directory_template.csv"),
        "name,email,unit,location,grade_band,role_tags,manager_email\n,,,,P5,,\n,,,,G7,,\n"
    );
    assert_eq!(
        read("roster_template.csv"),
        concat!(
            "email,workdays,start_local,end_local,timezone,exceptions,travel_windows\n",
            ",Mon-Fri,09:00,17:00,Europe/Warsaw,,\n",
            ",Mon-Fri,09:00,17:00,Europe/Warsaw,,\n",
        )
    );
    assert_eq!(
        read("decision_log.csv"),
        "date,title,decision,owner,attendees,cost_usd,score,suggestion\n,,,,,,,\n"
    );
}

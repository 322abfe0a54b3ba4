use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_ics2dates");

const HOLIDAYS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//Holidays//EN\r
BEGIN:VEVENT\r
UID:christmas@holidays\r
SUMMARY:Christmas Day\r
DTSTART;VALUE=DATE:20241225\r
DTEND;VALUE=DATE:20241226\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:new-year@holidays\r
SUMMARY:New Year's Day\r
DTSTART;VALUE=DATE:20240101\r
DTEND;VALUE=DATE:20240102\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:meeting@work\r
SUMMARY:Late call\r
DTSTART;TZID=Europe/Paris:20240101T233000\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:launch@work\r
SUMMARY:Launch\r
DTSTART:20240704T235959Z\r
END:VEVENT\r
END:VCALENDAR\r
";

fn run(args: &[&Path]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ics2dates")
}

fn assert_usage(output: &Output) {
    assert!(output.status.success(), "Usage should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("USAGE: ") && stdout.ends_with(" ics_file output_file\n"),
        "Unexpected usage output: {:?}",
        stdout
    );
}

#[test]
fn test_converts_two_events() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("events.ics");
    let output = dir.path().join("dates");
    fs::write(
        &input,
        "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:TEST\n\
BEGIN:VEVENT\nUID:1\nDTSTART:20240305T100000\nEND:VEVENT\n\
BEGIN:VEVENT\nUID:2\nDTSTART:20240120T083000\nEND:VEVENT\n\
END:VCALENDAR\n",
    )
    .unwrap();

    let result = run(&[&*input, &*output]);

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert!(result.stdout.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "2024-01-20\n2024-03-05");
}

#[test]
fn test_one_sorted_line_per_event() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("holidays.ics");
    let output = dir.path().join("data-holidays");
    fs::write(&input, HOLIDAYS).unwrap();

    assert!(run(&[&*input, &*output]).status.success());

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.split('\n').collect();
    assert_eq!(lines, vec!["2024-01-01", "2024-01-01", "2024-07-04", "2024-12-25"]);
    assert!(lines.windows(2).all(|w| w[0] <= w[1]));
    assert!(lines.iter().all(|l| {
        l.len() == 10
            && l.chars()
                .enumerate()
                .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() })
    }));
}

#[test]
fn test_output_is_read_back_as_date_list() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("holidays.ics");
    let output = dir.path().join("data-holidays");
    fs::write(&input, HOLIDAYS).unwrap();

    assert!(run(&[&*input, &*output]).status.success());

    let list: ics2dates_core::DateList = fs::read_to_string(&output).unwrap().parse().unwrap();
    assert_eq!(list.len(), 4);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("holidays.ics");
    let output = dir.path().join("dates");
    fs::write(&input, HOLIDAYS).unwrap();

    assert!(run(&[&*input, &*output]).status.success());
    let first = fs::read(&output).unwrap();
    assert!(run(&[&*input, &*output]).status.success());

    assert_eq!(fs::read(&output).unwrap(), first);
}

#[test]
fn test_zero_events_writes_empty_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.ics");
    let output = dir.path().join("dates");
    fs::write(&input, "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:TEST\nEND:VCALENDAR\n").unwrap();

    assert!(run(&[&*input, &*output]).status.success());

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("holidays.ics");
    let output = dir.path().join("dates");
    fs::write(&input, HOLIDAYS).unwrap();

    assert_usage(&run(&[]));
    assert_usage(&run(&[&*input]));
    assert_usage(&run(&[&*input, &*output, Path::new("extra")]));

    assert!(!output.exists());
}

#[test]
fn test_usage_leaves_existing_output_alone() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dates");
    fs::write(&output, "2020-02-02").unwrap();

    assert_usage(&run(&[&*output]));

    assert_eq!(fs::read_to_string(&output).unwrap(), "2020-02-02");
}

#[test]
fn test_help_flag_prints_usage() {
    assert_usage(&run(&[Path::new("--help")]));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dates");

    let result = run(&[&*dir.path().join("missing.ics"), &*output]);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("missing.ics"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_calendar_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    let output = dir.path().join("dates");
    fs::write(&input, "just some notes\n").unwrap();

    let result = run(&[&*input, &*output]);

    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn test_event_without_start_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("events.ics");
    let output = dir.path().join("dates");
    fs::write(
        &input,
        "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:TEST\n\
BEGIN:VEVENT\nUID:nostart@test\nSUMMARY:Floating idea\nEND:VEVENT\n\
END:VCALENDAR\n",
    )
    .unwrap();

    let result = run(&[&*input, &*output]);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("nostart@test"));
    assert!(!output.exists());
}

#[macro_use]
extern crate assert_matches;
extern crate nmea_fix;
extern crate tempfile;

use nmea_fix::{run, Config, RunError, RunSummary};
use std::fs;
use std::path::Path;

const CYCLE: &str = "\
$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47
$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A
$GPVTG,054.7,T,034.4,M,005.5,N,022.4,K*48
$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39
$GPGSV,3,1,11,03,03,045,00,04,15,272,24*7D
$GPGSV,3,2,11,10,10,125,00,11,34,141,45*73
$GPGSV,3,3,11,26,37,200,51,27,13,067,38*76
";

const RECORD: &str = "\
-------------------------------------------------------------------
123519 czas
4807.038 N szerokosc
01131.000 E dlugosc
23.03.94 data
022.4 predkosc
045, 125, 200 azymuty
";

fn config_in(dir: &Path) -> Config {
    Config {
        input: dir.join("wejscie.txt"),
        output: dir.join("wyjscie.txt"),
    }
}

fn run_feed(feed: &str) -> (RunSummary, String) {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.input, feed).unwrap();
    let summary = run(&config).unwrap();
    (summary, fs::read_to_string(&config.output).unwrap())
}

#[test]
fn writes_one_record_per_fix() {
    let (summary, out) = run_feed(CYCLE);
    assert_eq!(summary.records, 1);
    assert_eq!(summary.lines, 7);
    assert_eq!(out, RECORD);
}

#[test]
fn missing_input_still_creates_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.output, "stale").unwrap();

    let summary = run(&config).unwrap();
    assert_eq!(summary, RunSummary::default());
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "");
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("wejscie.txt"),
        output: dir.path().join("missing").join("wyjscie.txt"),
    };
    assert_matches!(run(&config), Err(RunError::Io(_)));
}

#[test]
fn second_record_repeats_first_azimuths() {
    let second = CYCLE
        .replace("123519", "123520")
        .replace(",045,", ",310,")
        .replace(",125,", ",020,")
        .replace(",200,", ",090,");
    let (summary, out) = run_feed(&format!("{}{}", CYCLE, second));
    assert_eq!(summary.records, 2);

    let rule = RECORD.lines().next().unwrap();
    assert_eq!(out.matches(rule).count(), 2);
    let last = &out[out.rfind(rule).unwrap()..];
    assert!(last.contains("\n123520 czas\n"));
    assert!(last.ends_with("\n045, 125, 200 azymuty\n"));
}

#[test]
fn separator_mixes_stale_fields_with_new_azimuths() {
    let mut feed = String::new();
    feed.push_str("$GPGGA,101010,,,,,0,00,,,M,,M,,*66\n");
    feed.push_str("$GPRMC,101010,A,5000.000,S,02000.000,W,001.0,000.0,010120,,*00\n");
    feed.push_str("------------------------------\n");
    for az in 0..10 {
        feed.push_str(&format!("$GPGSV,3,1,11,03,03,{:03},00\n", az * 10));
    }
    let (summary, out) = run_feed(&feed);
    assert_eq!(summary.records, 1);
    assert!(out.contains("\n101010 czas\n"));
    assert!(out.contains("\n5000.000 S szerokosc\n"));
    assert!(out.contains("\n01.01.20 data\n"));
    assert!(out.contains("\n predkosc\n"));
    assert!(out.ends_with("\n000, 010, 020 azymuty\n"));
}

#[test]
fn malformed_lines_do_not_stop_the_run() {
    let feed = format!("$GPRMC,1,2\n{}", CYCLE);
    let (summary, out) = run_feed(&feed);
    assert_eq!(summary.skipped_lines, 1);
    assert_eq!(summary.records, 1);
    assert_eq!(out, RECORD);
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn carouselctl() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("carouselctl");
    cmd.env_remove("CAROUSEL_CONFIG_PATH")
        .env_remove("CAROUSEL_CONFIG_JSON")
        .env_remove("CAROUSEL_OFFSET_RADIUS")
        .env_remove("CAROUSEL_GOTO_INTERVAL")
        .env_remove("CAROUSEL_SHOW_NAVIGATION")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let output = carouselctl()
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("window"), "help missing window");
    assert!(text.contains("path"), "help missing path");
    assert!(text.contains("run"), "help missing run");
}

#[test]
fn path_walks_forward_on_tie() {
    carouselctl()
        .args(["path", "--count", "6", "--from", "0", "--to", "3"])
        .assert()
        .success()
        .stdout("0 1 2 3\n");
}

#[test]
fn path_takes_the_short_arc() {
    carouselctl()
        .args(["path", "--count", "6", "--from", "5", "--to", "1"])
        .assert()
        .success()
        .stdout("5 0 1\n");

    carouselctl()
        .args(["path", "--count", "5", "--from", "0", "--to", "-1"])
        .assert()
        .success()
        .stdout("0 4\n");
}

#[test]
fn path_accepts_the_full_integer_range() {
    carouselctl()
        .args([
            "path",
            "--count",
            "18446744073709551615",
            "--from",
            "9223372036854775805",
            "--to=-9223372036854775808",
        ])
        .assert()
        .success()
        .stdout("9223372036854775805 9223372036854775806 9223372036854775807\n");
}

#[test]
fn path_wraps_an_out_of_range_start() {
    carouselctl()
        .args(["path", "--count", "4", "--from", "6", "--to", "3"])
        .assert()
        .success()
        .stdout("2 3\n");
}

#[test]
fn oversized_generated_slide_set_is_rejected() {
    carouselctl()
        .args(["window", "--count", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit"));
}

#[test]
fn window_prints_offsets_indices_and_keys() {
    carouselctl()
        .args(["window", "--slides", "a,b,c,d,e", "--current", "0"])
        .assert()
        .success()
        .stdout("-2 3 d\n-1 4 e\n+0 0 a\n+1 1 b\n+2 2 c\n");
}

#[test]
fn window_radius_is_clamped() {
    carouselctl()
        .args(["window", "--count", "4", "--radius", "9", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""display_offset":-1"#))
        .stdout(predicate::str::contains(r#""display_offset":-2"#).not());
}

#[test]
fn empty_slide_list_is_rejected() {
    carouselctl()
        .args(["window", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid slide list"));
}

#[test]
fn run_prints_each_hop() {
    let output = carouselctl()
        .args([
            "run",
            "--count",
            "6",
            "--script",
            "goto:3",
            "--interval",
            "1ms",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    let currents: Vec<u64> = text
        .lines()
        .map(|line| {
            let value: serde_json::Value =
                serde_json::from_str(line).expect("json line");
            value["current_index"].as_u64().expect("current_index")
        })
        .collect();

    assert_eq!(currents, [0, 1, 2, 3]);
}

#[test]
fn run_text_output_marks_current_slide() {
    carouselctl()
        .args([
            "run",
            "--slides",
            "a,b,c,d,e",
            "--script",
            "next,next,prev",
            "--radius",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("current=1 window=[0 (1) 2] keys=[a (b) c]"))
        .stdout(predicate::str::ends_with("current=1 window=[0 (1) 2] keys=[a (b) c]\n"));
}

#[test]
fn run_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("carousel.toml");
    std::fs::write(&config, "offset_radius = 0\nshow_navigation = false\n").unwrap();

    carouselctl()
        .args(["run", "--count", "3", "--script", "next", "--json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""offset_radius":0"#))
        .stdout(predicate::str::contains(r#""show_navigation":false"#));
}

#[test]
fn run_rejects_unknown_script_event() {
    carouselctl()
        .args(["run", "--count", "3", "--script", "jump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown script event"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    carouselctl()
        .args(["window", "--count", "3", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load carousel configuration"));
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{no_config, rat, setup_data};

#[test]
fn test_day_merges_sessions() {
    let data = setup_data("day_merges_sessions");
    let cfg = no_config("day_merges_sessions");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "day", "--date", "2025-09-02",
        ])
        .assert()
        .success()
        .stdout(contains("Sessions: 2 | Worked: 07h 00m"))
        .stdout(contains("Session 1 started"))
        .stdout(contains("Session 2 ended"));
}

#[test]
fn test_day_step_moves_to_previous_day() {
    let data = setup_data("day_step_prev");
    let cfg = no_config("day_step_prev");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "day", "--date", "2025-09-02",
            "--step", "prev",
        ])
        .assert()
        .success()
        .stdout(contains("Sessions: 1 | Worked: 08h 30m"));
}

#[test]
fn test_day_without_sessions() {
    let data = setup_data("day_without_sessions");
    let cfg = no_config("day_without_sessions");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "day", "--date", "2025-09-05",
        ])
        .assert()
        .success()
        .stdout(contains("No attendance record for 2025-09-05"));
}

#[test]
fn test_week_totals() {
    let data = setup_data("week_totals");
    let cfg = no_config("week_totals");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "week", "--date", "2025-09-03",
        ])
        .assert()
        .success()
        .stdout(contains("Week 2025-08-31 → 2025-09-06"))
        .stdout(contains(
            "Total: 23h 30m | Days: 3 | Avg/day: 07h 50m | Overtime: 1 | Short: 1",
        ));
}

#[test]
fn test_week_other_employee() {
    let data = setup_data("week_other_employee");
    let cfg = no_config("week_other_employee");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "8", "week", "--date", "2025-09-03",
        ])
        .assert()
        .success()
        .stdout(contains("Total: 01h 00m | Days: 1"));
}

#[test]
fn test_empty_week_has_zero_average() {
    let data = setup_data("empty_week");
    let cfg = no_config("empty_week");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "week", "--date", "2025-09-10",
        ])
        .assert()
        .success()
        .stdout(contains("No attendance records in this week."))
        .stdout(contains("Total: 00h 00m | Days: 0 | Avg/day: 00h 00m"));
}

#[test]
fn test_month_view() {
    let data = setup_data("month_view");
    let cfg = no_config("month_view");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "month", "--month", "2025-09",
        ])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("Total: 23h 30m | Days: 3"));
}

#[test]
fn test_month_step_next() {
    let data = setup_data("month_step_next");
    let cfg = no_config("month_step_next");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "month", "--month", "2025-08",
            "--step", "next",
        ])
        .assert()
        .success()
        .stdout(contains("September 2025"));
}

#[test]
fn test_month_rejects_bad_period() {
    let data = setup_data("month_bad_period");
    let cfg = no_config("month_bad_period");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "month", "--month", "2025-13",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_stats_monday_week() {
    let data = setup_data("stats_monday_week");
    let cfg = no_config("stats_monday_week");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "stats", "--date", "2025-09-07",
        ])
        .assert()
        .success()
        .stdout(contains("2025-09-01 → 2025-09-07"))
        .stdout(contains("Hours worked  : 23h 30m"))
        .stdout(contains("Days worked   : 3"))
        .stdout(contains("Daily average : 7h 50m"));
}

#[test]
fn test_missing_profile_shows_guidance() {
    let data = setup_data("missing_profile");
    let cfg = no_config("missing_profile");

    rat()
        .args(["--config", &cfg, "--data", &data, "week", "--date", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("No employee profile is configured"))
        .stdout(contains("Total:").not());
}

#[test]
fn test_missing_data_file_fails() {
    let cfg = no_config("missing_data_file");

    rat()
        .args([
            "--config",
            &cfg,
            "--data",
            "/nonexistent/rattendance/data.json",
            "--employee",
            "7",
            "day",
        ])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn test_invalid_date_is_reported() {
    let data = setup_data("invalid_date");
    let cfg = no_config("invalid_date");

    rat()
        .args([
            "--config", &cfg, "--data", &data, "--employee", "7", "day", "--date", "02/09/2025",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 02/09/2025"));
}

#[test]
fn test_watch_stops_after_ticks() {
    let data = setup_data("watch_ticks");
    let cfg = no_config("watch_ticks");

    rat()
        .args(["--config", &cfg, "--data", &data, "--employee", "7", "watch", "--ticks", "2"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(contains("Live attendance"))
        .stdout(contains("not clocked in"))
        .stdout(contains("Stopped after 0 poll(s)."));
}

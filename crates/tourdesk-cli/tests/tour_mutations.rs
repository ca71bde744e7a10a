//! Add / update / delete flows, including the validation boundaries.

use anyhow::Result;
use tourdesk_testing::TestAgency;

fn add_args<'a>(duration: &'a str, price: &'a str) -> Vec<&'a str> {
    vec![
        "tour",
        "add",
        "--name",
        "Barcelona Long Weekend",
        "--country",
        "Spain",
        "--city",
        "Barcelona",
        "--hotel",
        "Casa Mila Suites",
        "--tour-type",
        "excursion",
        "--duration",
        duration,
        "--price",
        price,
        "--max-tourists",
        "12",
        "--start-date",
        "2024-10-01",
        "--end-date",
        "2024-10-05",
    ]
}

#[test]
fn test_add_valid_tour_succeeds() -> Result<()> {
    // Given: a fully specified draft
    let agency = TestAgency::new()?;

    // When: adding it
    let result = agency.run(&add_args("4", "52000"))?;

    // Then: the backend assigns the next id after the four seeds
    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Added"));
    assert!(stdout.contains("#5"));
    assert!(stdout.contains("Barcelona Long Weekend"));
    Ok(())
}

#[test]
fn test_add_accepts_boundary_durations_and_zero_price() -> Result<()> {
    let agency = TestAgency::new()?;

    assert!(agency.run(&add_args("1", "0"))?.success());
    assert!(agency.run(&add_args("30", "52000"))?.success());
    Ok(())
}

#[test]
fn test_add_rejects_out_of_range_duration() -> Result<()> {
    let agency = TestAgency::new()?;

    for duration in ["0", "31"] {
        let result = agency.run(&add_args(duration, "52000"))?;
        assert!(!result.success(), "duration {} should fail", duration);
        assert!(result.stderr().contains("between 1 and 30"));
    }
    Ok(())
}

#[test]
fn test_add_rejects_negative_price() -> Result<()> {
    let agency = TestAgency::new()?;

    // `--price=-1` keeps clap from reading the value as a flag.
    let mut args = add_args("4", "52000");
    let position = args.iter().position(|a| *a == "--price").unwrap();
    args.remove(position + 1);
    args[position] = "--price=-1";

    let result = agency.run(&args)?;

    assert!(!result.success());
    assert!(result.stderr().contains("cannot be negative"));
    Ok(())
}

#[test]
fn test_add_reports_missing_required_fields() -> Result<()> {
    let agency = TestAgency::new()?;

    // When: adding with no fields at all
    let result = agency.run(&["tour", "add"])?;

    // Then: every required field is listed, and nothing is created
    assert!(!result.success());
    let stderr = result.stderr();
    assert!(stderr.contains("required"));
    assert!(stderr.contains("Name"));
    assert!(stderr.contains("Country"));
    Ok(())
}

#[test]
fn test_update_changes_selected_fields_only() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&[
        "tour", "update", "2", "--price", "99000", "--format", "json",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["price"].as_i64(), Some(99000));
    // Untouched fields keep their seeded values.
    assert_eq!(json["name"].as_str(), Some("Moscow City Tour"));
    assert_eq!(json["duration_days"].as_i64(), Some(3));
    Ok(())
}

#[test]
fn test_update_validates_like_add() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["tour", "update", "2", "--duration", "31"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("between 1 and 30"));
    Ok(())
}

#[test]
fn test_update_unknown_id_fails() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["tour", "update", "99", "--price", "1"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("tour not found"));
    Ok(())
}

#[test]
fn test_delete_with_yes_succeeds() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["tour", "delete", "1", "--yes"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Deleted"));
    assert!(result.stdout().contains("Antalya Beach Escape"));
    Ok(())
}

#[test]
fn test_delete_refuses_without_confirmation_when_piped() -> Result<()> {
    let agency = TestAgency::new()?;

    // When: no --yes and stdin is not a terminal
    let result = agency.run(&["tour", "delete", "1"])?;

    // Then: nothing is deleted
    assert!(!result.success());
    assert!(result.stderr().contains("--yes"));
    Ok(())
}

#[test]
fn test_delete_unknown_id_fails() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["tour", "delete", "99", "--yes"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("tour not found"));
    Ok(())
}

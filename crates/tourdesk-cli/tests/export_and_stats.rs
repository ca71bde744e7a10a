//! Stats output, CSV/JSON export, and the printable report.

use anyhow::Result;
use tourdesk_testing::TestAgency;

#[test]
fn test_stats_json_matches_the_seeded_aggregates() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["stats", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["total_tours"].as_u64(), Some(4));
    assert_eq!(json["total_clients"].as_u64(), Some(156));
    assert_eq!(json["total_bookings"].as_u64(), Some(89));
    assert_eq!(json["total_revenue"].as_i64(), Some(2_845_000));
    Ok(())
}

#[test]
fn test_stats_plain_groups_thousands_and_suffixes_revenue() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["stats"])?;

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("2 845 000 ₽"));
    assert!(stdout.contains("Clients"));
    assert!(stdout.contains("156"));
    Ok(())
}

#[test]
fn test_export_csv_writes_header_and_all_rows() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["export", "--format", "csv"])?;

    assert!(result.success());
    let stdout = result.stdout();
    let mut lines = stdout.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("id,name,country,city,duration_days,price"));
    assert_eq!(lines.count(), 4);
    assert!(stdout.contains("Hurghada Sea Holiday"));
    assert!(stdout.contains("2024-06-01"));
    Ok(())
}

#[test]
fn test_export_json_is_an_array_of_records() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["export", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json.as_array().map(|a| a.len()), Some(4));
    assert_eq!(json[0]["name"].as_str(), Some("Antalya Beach Escape"));
    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let agency = TestAgency::new()?;
    let out_path = agency.temp_dir().join("tours.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let result = agency.run(&["export", "--output", &out_str])?;

    assert!(result.success());
    let written = std::fs::read_to_string(&out_path)?;
    assert!(written.contains("Moscow City Tour"));
    assert!(result.stderr().contains("Exported 4 tours"));
    Ok(())
}

#[test]
fn test_report_contains_every_section() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&["report"])?;

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("TRAVEL AGENCY OVERVIEW"));
    assert!(stdout.contains("Recently added"));
    assert!(stdout.contains("All tours"));
    // The recent strip shows the three freshest tours.
    assert!(stdout.contains("St. Petersburg Culture Week"));
    Ok(())
}

#[test]
fn test_bare_invocation_prints_guidance() -> Result<()> {
    let agency = TestAgency::new()?;

    let result = agency.run(&[])?;

    assert!(result.success());
    assert!(result.stdout().contains("tourdesk dashboard"));
    Ok(())
}

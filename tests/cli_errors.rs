#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.arg("recipe");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_computes_recipe_from_presets() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args(["recipe", "--target", "simplified-rao-perger"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Recipe for 1.0 L batch"))
        .stdout(predicate::str::contains("Le Minerale"))
        .stdout(predicate::str::contains("calcium chloride"));
}

#[test]
fn cli_reports_unknown_preset() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args(["recipe", "--target", "mystery"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown target preset 'mystery'"));
}

#[test]
fn cli_works_without_booster_with_inputs_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    let doc = serde_json::json!({
        "source": { "kh_ppm": 133.2, "gh_ppm": 63.3, "tds_mg_l": 255.5 },
        "target": { "kh_ppm": 40.0, "gh_ppm": 80.0 },
        "batch": { "volume_l": 1.0 }
    })
    .to_string();

    cmd.args(["recipe", "--json", "--inputs-json"]).arg(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"final_tds_mg_l\""))
        .stdout(predicate::str::contains("\"feasible\": true"));
}

#[test]
fn cli_compares_several_batch_sizes() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args([
        "recipe",
        "--target",
        "classic-rao-perger",
        "--batch-l",
        "1",
        "4",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Recipe for 1.0 L batch"))
        .stdout(predicate::str::contains("Recipe for 4.0 L batch"));
}

#[test]
fn cli_reads_input_document_from_stdin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    let doc = serde_json::json!({
        "source": { "kh_ppm": 133.2, "gh_ppm": 63.3, "tds_mg_l": 255.5 },
        "target": { "kh_ppm": 40.0, "gh_ppm": 80.0 },
        "booster": { "strength_ppm_per_ml": 0.05, "solids_mg_per_ml": 11.0 }
    })
    .to_string();

    cmd.args(["recipe", "--input", "-"]).write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("INFEASIBLE"))
        .stderr(predicate::str::contains("Infeasible recipe"));
}

#[test]
fn cli_reports_invalid_json_for_inputs_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args(["recipe", "--inputs-json", "{not valid json}"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --inputs-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.arg("recipe").arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_flavor_rejects_zero_target_kh() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args(["flavor", "--flavor", "balanced", "--target-kh", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn cli_flavor_prints_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args(["flavor", "--flavor", "heavy-body", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"gh_ppm\": 32.0"));
}

#[test]
fn cli_lists_presets() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.arg("presets");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Classic Rao/Perger"))
        .stdout(predicate::str::contains("Espresso"));
}

#[test]
fn cli_flavor_flags_target_above_reference_kh() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args(["flavor", "--flavor", "balanced", "--target-kh", "200"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("INFEASIBLE"))
        .stderr(predicate::str::contains("Infeasible recipe"));
}

#[test]
fn cli_flavor_json_reports_feasibility() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args(["flavor", "--flavor", "balanced", "--target-kh", "200", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"feasible\": false"));
}

#[test]
fn cli_warns_when_source_has_no_alkalinity() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    let doc = serde_json::json!({
        "source": { "kh_ppm": 0.0, "gh_ppm": 10.0, "tds_mg_l": 50.0 },
        "target": { "kh_ppm": 40.0, "gh_ppm": 66.0 }
    })
    .to_string();

    cmd.env_remove("RUST_LOG")
        .args(["recipe", "--inputs-json"])
        .arg(doc);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("no alkalinity"));
}

#[test]
fn cli_verbose_logs_each_calculation() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    cmd.args([
        "--verbose",
        "recipe",
        "--target",
        "classic-rao-perger",
        "--batch-l",
        "1",
        "2",
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("resolved presets"))
        .stderr(predicate::str::contains("computed recipe"));
}

#[test]
fn cli_input_document_batch_overrides_batch_flag() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("brewwater_rs");
    let doc = serde_json::json!({
        "source": { "kh_ppm": 133.2, "gh_ppm": 63.3, "tds_mg_l": 255.5 },
        "target": { "kh_ppm": 40.0, "gh_ppm": 80.0 },
        "batch": { "volume_l": 2.0 }
    })
    .to_string();

    cmd.args(["--verbose", "recipe", "--batch-l", "1", "4", "--inputs-json"])
        .arg(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Recipe for 2.0 L batch"))
        .stdout(predicate::str::contains("Recipe for 4.0 L batch").not())
        .stderr(predicate::str::contains("ignoring --batch-l"));
}

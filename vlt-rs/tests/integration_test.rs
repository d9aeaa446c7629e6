//! Integration tests for the vlt CLI against temporary vaults.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Build a vault from (relative path, content) pairs.
fn vault_with(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}

/// A small vault exercising titles, aliases and links.
fn sample_vault() -> TempDir {
    vault_with(&[
        (
            "methodology/Session Operating Mode.md",
            "---\naliases: [SOM]\n---\n# Session Operating Mode\n",
        ),
        ("Sr PM Agent.md", "---\naliases: [PM, Senior PM]\n---\n# Sr PM Agent\n"),
        (
            "Hub.md",
            "See [[Session Operating Mode]], [[pm|the PM]] and [[Ghost Note]].\n![[session operating mode#Protocol]]\n",
        ),
        ("Orphan.md", "Nobody links here.\n"),
        (".obsidian/workspace.md", "[[Orphan]] [[Hidden Ghost]]"),
    ])
}

/// Run the vlt binary against a vault, isolated from the user's config.
fn run_vlt(vault: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_vlt");

    let output = Command::new(binary)
        .arg("--vault")
        .arg(vault)
        .args(args)
        .env("VLT_CONFIG", vault.join(".no-config.toml"))
        .env_remove("VLT_VAULT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute vlt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn json(stdout: &str) -> Value {
    serde_json::from_str(stdout).expect("stdout is JSON")
}

mod resolve_command {
    use super::*;

    #[test]
    fn resolve_by_name() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["resolve", "Session Operating Mode"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["resolved"], "methodology/Session Operating Mode.md");
        assert_eq!(v["match_type"], "name");
    }

    #[test]
    fn resolve_by_alias() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["resolve", "senior pm"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["resolved"], "Sr PM Agent.md");
        assert_eq!(v["match_type"], "alias");
    }

    #[test]
    fn resolve_not_found() {
        let vault = sample_vault();
        let (stdout, stderr, code) = run_vlt(vault.path(), &["resolve", "Nonexistent Note"]);
        assert_eq!(code, 2);
        assert!(stdout.is_empty());
        assert!(stderr.contains("note not found: Nonexistent Note"));
    }

    #[test]
    fn resolve_yaml_output() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["--yaml", "resolve", "PM"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("resolved: Sr PM Agent.md"));
    }
}

mod read_command {
    use super::*;

    #[test]
    fn read_prints_raw_content() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["read", "Orphan"]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "Nobody links here.\n");
    }
}

mod backlinks_command {
    use super::*;

    #[test]
    fn backlinks_case_insensitive() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["backlinks", "session operating mode"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["backlinks"], serde_json::json!(["Hub.md"]));
        assert_eq!(v["total"], 1);
    }

    #[test]
    fn backlinks_ignore_hidden_dirs() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["backlinks", "Orphan"]);
        assert_eq!(code, 0);
        assert_eq!(json(&stdout)["total"], 0);
    }
}

mod links_command {
    use super::*;

    #[test]
    fn links_resolved_and_broken() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["links", "Hub"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        let links = v["links"].as_array().unwrap();

        let targets: Vec<&str> = links.iter().map(|l| l["target"].as_str().unwrap()).collect();
        assert_eq!(
            targets,
            vec!["Session Operating Mode", "pm", "Ghost Note", "session operating mode"]
        );
        assert_eq!(links[1]["resolved_path"], "Sr PM Agent.md");
        assert_eq!(links[2]["broken"], true);
        // Filename matches are case-sensitive and the note has no such alias.
        assert_eq!(links[3]["broken"], true);
        assert_eq!(v["broken"], 2);
    }
}

mod orphans_command {
    use super::*;

    #[test]
    fn orphans_listed() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["orphans"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["orphans"], serde_json::json!(["Hub.md", "Orphan.md"]));
    }
}

mod unresolved_command {
    use super::*;

    #[test]
    fn unresolved_listed_once() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["unresolved"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["total"], 1);
        assert_eq!(v["unresolved"][0]["target"], "Ghost Note");
        assert_eq!(v["unresolved"][0]["source"], "Hub.md");
    }
}

mod search_command {
    use super::*;

    #[test]
    fn search_title_and_content() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["search", "links here"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["total"], 1);
        assert_eq!(v["results"][0]["path"], "Orphan.md");
        assert_eq!(v["results"][0]["matched"], "content");
    }

    #[test]
    fn search_with_property_filter() {
        let vault = vault_with(&[
            ("Active.md", "---\nstatus: active\n---\narchitecture"),
            ("Archived.md", "---\nstatus: archived\n---\narchitecture"),
        ]);
        let (stdout, _, code) = run_vlt(vault.path(), &["search", "architecture [status:active]"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["total"], 1);
        assert_eq!(v["results"][0]["path"], "Active.md");
    }

    #[test]
    fn search_missing_path_fails() {
        let vault = sample_vault();
        let (_, stderr, code) = run_vlt(vault.path(), &["search", "x", "--path", "nope"]);
        assert_eq!(code, 1);
        assert!(stderr.contains("invalid vault path"));
    }
}

mod files_command {
    use super::*;

    #[test]
    fn files_sorted() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["files"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(
            v["files"],
            serde_json::json!([
                "Hub.md",
                "Orphan.md",
                "Sr PM Agent.md",
                "methodology/Session Operating Mode.md"
            ])
        );
    }

    #[test]
    fn files_total_only() {
        let vault = sample_vault();
        let (stdout, _, code) =
            run_vlt(vault.path(), &["files", "--folder", "methodology", "--total"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["total"], 1);
        assert!(v.get("files").is_none());
    }
}

mod move_command {
    use super::*;

    #[test]
    fn move_renames_and_propagates() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(
            vault.path(),
            &["move", "methodology/Session Operating Mode.md", "methodology/Operating Mode"],
        );
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["title_changed"], true);
        assert_eq!(v["links_updated"], 1);

        let hub = fs::read_to_string(vault.path().join("Hub.md")).unwrap();
        assert_eq!(
            hub,
            "See [[Operating Mode]], [[pm|the PM]] and [[Ghost Note]].\n![[Operating Mode#Protocol]]\n"
        );
        assert!(vault.path().join("methodology/Operating Mode.md").exists());
    }

    #[test]
    fn move_dry_run_writes_nothing() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(
            vault.path(),
            &["move", "--dry-run", "methodology/Session Operating Mode.md", "Operating Mode.md"],
        );
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["would_update"][0]["path"], "Hub.md");
        assert_eq!(v["would_update"][0]["links"].as_array().unwrap().len(), 2);
        assert!(vault.path().join("methodology/Session Operating Mode.md").exists());
    }

    #[test]
    fn move_between_folders_rewrites_nothing() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(
            vault.path(),
            &[
                "move",
                "methodology/Session Operating Mode.md",
                "archive/Session Operating Mode.md",
            ],
        );
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["title_changed"], false);
        assert_eq!(v["links_updated"], 0);
        assert!(fs::read_to_string(vault.path().join("Hub.md"))
            .unwrap()
            .contains("[[Session Operating Mode]]"));
    }

    #[test]
    fn move_outside_vault_rejected() {
        let vault = sample_vault();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("Escaped.md");
        let (_, stderr, code) =
            run_vlt(vault.path(), &["move", "Orphan.md", target.to_str().unwrap()]);
        assert_eq!(code, 1);
        assert!(stderr.contains("invalid vault path"));
        assert!(!target.exists());
        assert!(vault.path().join("Orphan.md").exists());
    }

    #[test]
    fn move_onto_existing_note() {
        let vault = sample_vault();
        let (_, stderr, code) = run_vlt(vault.path(), &["move", "Hub.md", "Orphan.md"]);
        assert_eq!(code, 3);
        assert!(stderr.contains("already exists"));
    }
}

mod delete_command {
    use super::*;

    #[test]
    fn delete_moves_to_trash() {
        let vault = sample_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["delete", "Orphan"]);
        assert_eq!(code, 0);
        assert_eq!(json(&stdout)["trashed_to"], ".trash/Orphan.md");
        assert!(vault.path().join(".trash/Orphan.md").exists());
        assert!(!vault.path().join("Orphan.md").exists());
    }

    #[test]
    fn delete_permanent_by_path() {
        let vault = sample_vault();
        let (_, _, code) = run_vlt(vault.path(), &["delete", "--path", "Orphan.md", "--permanent"]);
        assert_eq!(code, 0);
        assert!(!vault.path().join("Orphan.md").exists());
        assert!(!vault.path().join(".trash/Orphan.md").exists());
    }

    #[test]
    fn delete_path_outside_vault_rejected() {
        let vault = sample_vault();
        let outside = TempDir::new().unwrap();
        let victim = outside.path().join("victim.md");
        fs::write(&victim, "keep").unwrap();

        let (_, _, code) = run_vlt(
            vault.path(),
            &["delete", "--path", victim.to_str().unwrap(), "--permanent"],
        );
        assert_eq!(code, 1);
        assert!(victim.exists());
    }

    #[test]
    fn delete_warns_about_backlinks() {
        let vault = sample_vault();
        let (stdout, stderr, code) = run_vlt(vault.path(), &["delete", "Sr PM Agent"]);
        assert_eq!(code, 0);
        assert!(stderr.contains("Warning"));
        assert!(json(&stdout)["warning"].as_str().unwrap().contains("Hub.md"));
    }
}

mod tags_command {
    use super::*;

    fn tagged_vault() -> TempDir {
        vault_with(&[
            ("note1.md", "---\ntags: [project, important]\n---\n\n# Note 1\n"),
            ("note2.md", "# Note 2\n\nSome #project/backend and #review content.\n"),
            (".obsidian/hidden.md", "#hidden-tag should be skipped\n"),
        ])
    }

    #[test]
    fn tags_listed_with_counts() {
        let vault = tagged_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["tags", "--counts", "--sort", "count"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["total"], 4);
        assert_eq!(v["tags"][0]["tag"], "important");
        assert_eq!(v["tags"][0]["count"], 1);
        let names: Vec<&str> = v["tags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["tag"].as_str().unwrap())
            .collect();
        assert!(!names.contains(&"hidden-tag"));
    }

    #[test]
    fn tags_without_counts() {
        let vault = tagged_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["tags"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert!(v["tags"][0].get("count").is_none());
    }

    #[test]
    fn tag_includes_subtags() {
        let vault = tagged_vault();
        let (stdout, _, code) = run_vlt(vault.path(), &["tag", "#project"]);
        assert_eq!(code, 0);
        let v = json(&stdout);
        assert_eq!(v["tag"], "project");
        assert_eq!(v["notes"], serde_json::json!(["note1.md", "note2.md"]));
    }
}

mod vault_selection {
    use super::*;

    #[test]
    fn missing_vault_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let (_, stderr, code) = run_vlt(&missing, &["orphans"]);
        assert_eq!(code, 1);
        assert!(stderr.contains("vault not found"));
    }

    #[test]
    fn quiet_suppresses_error_message() {
        let vault = sample_vault();
        let (_, stderr, code) = run_vlt(vault.path(), &["-q", "resolve", "Nope"]);
        assert_eq!(code, 2);
        assert!(stderr.is_empty());
    }
}
